//!
//! The merge engine tests.
//!

use std::fs;

use harness_generator::Contract;
use harness_generator::Function;
use harness_generator::Input;
use harness_generator::Mutability;

use crate::merger::Merger;
use crate::merger::Queues;
use crate::settings::Settings;

/// The pristine Handlers file skeleton.
const HANDLERS_TEMPLATE: &str = include_str!("../scaffold/templates/Handlers.sol");

/// The pristine Base file skeleton.
const BASE_TEMPLATE: &str = include_str!("../scaffold/templates/Base.sol");

fn input(name: &str, r#type: &str) -> Input {
    Input {
        name: name.to_owned(),
        r#type: r#type.to_owned(),
        internal_type: r#type.to_owned(),
    }
}

fn token() -> Contract {
    Contract {
        name: "Token".to_owned(),
        file_path: "./src/Token.sol".to_owned(),
        functions: vec![Function {
            name: "transfer".to_owned(),
            inputs: vec![input("to", "address"), input("amt", "uint256")],
            state_mutability: Mutability::NonPayable,
        }],
        constructor: None,
    }
}

fn token_with_approve() -> Contract {
    let mut contract = self::token();
    contract.functions.push(Function {
        name: "approve".to_owned(),
        inputs: vec![input("spender", "address"), input("amt", "uint256")],
        state_mutability: Mutability::NonPayable,
    });
    contract
}

#[test]
fn first_merge_inserts_header_and_wrapper() {
    let mut handlers = HANDLERS_TEMPLATE.to_owned();

    let merge =
        Merger::merge_contract(&mut handlers, &self::token(), "token", &Settings::default())
            .expect("Always valid");

    assert!(merge.changed);
    assert_eq!(handlers.matches(" Token ").count(), 1);
    assert_eq!(
        handlers
            .matches("function token_transfer(address to, uint256 amt) public useActor globalProperties {")
            .count(),
        1
    );
    assert!(handlers.ends_with("}\n") || handlers.ends_with('}'));
}

#[test]
fn second_merge_is_identity() {
    let mut handlers = HANDLERS_TEMPLATE.to_owned();
    Merger::merge_contract(&mut handlers, &self::token(), "token", &Settings::default())
        .expect("Always valid");
    let first_run = handlers.clone();

    let merge =
        Merger::merge_contract(&mut handlers, &self::token(), "token", &Settings::default())
            .expect("Always valid");

    assert!(!merge.changed);
    assert_eq!(handlers, first_run);
}

#[test]
fn superset_appends_after_last_wrapper() {
    let settings = Settings::default();

    let mut incremental = HANDLERS_TEMPLATE.to_owned();
    Merger::merge_contract(&mut incremental, &self::token(), "token", &settings)
        .expect("Always valid");
    Merger::merge_contract(
        &mut incremental,
        &self::token_with_approve(),
        "token",
        &settings,
    )
    .expect("Always valid");

    assert_eq!(incremental.matches(" Token ").count(), 1);
    assert_eq!(incremental.matches("function token_transfer(").count(), 1);
    assert_eq!(incremental.matches("function token_approve(").count(), 1);
    assert!(
        incremental.find("function token_transfer(").expect("Always exists")
            < incremental.find("function token_approve(").expect("Always exists")
    );
}

#[test]
fn receive_and_fallback_dedupe_on_fixed_signature() {
    let settings = Settings::default();
    let mut contract = self::token();
    contract.functions = vec![
        Function {
            name: "receive".to_owned(),
            inputs: vec![],
            state_mutability: Mutability::Payable,
        },
        Function {
            name: "fallback".to_owned(),
            inputs: vec![],
            state_mutability: Mutability::NonPayable,
        },
    ];

    let mut handlers = HANDLERS_TEMPLATE.to_owned();
    Merger::merge_contract(&mut handlers, &contract, "token", &settings).expect("Always valid");
    let first_run = handlers.clone();
    let merge =
        Merger::merge_contract(&mut handlers, &contract, "token", &settings).expect("Always valid");

    assert!(!merge.changed);
    assert_eq!(handlers, first_run);
    assert_eq!(handlers.matches("function token_receive()").count(), 1);
    assert_eq!(handlers.matches("function token_fallback()").count(), 1);
}

#[test]
fn missing_contract_brace_is_an_error() {
    let mut handlers = "import \"./Base.sol\";\nabstract contract Handlers is Properties {".to_owned();

    let result = Merger::merge_contract(&mut handlers, &self::token(), "token", &Settings::default());

    assert!(result.is_err());
}

#[test]
fn base_splices_land_in_their_sections() {
    let mut base = BASE_TEMPLATE.to_owned();
    let mut contract = self::token();
    contract.constructor = Some(Function {
        name: "constructor".to_owned(),
        inputs: vec![input("supply", "uint256")],
        state_mutability: Mutability::NonPayable,
    });

    let mut queues = Queues::default();
    Merger::queue_base(base.as_str(), &contract, "token", &mut queues);
    let changed = Merger::splice_base(&mut base, &queues).expect("Always valid");

    assert!(changed);
    let declaration = base.find("\tToken token;\n").expect("Always exists");
    let marker = base.find("―― Setup ――").expect("Always exists");
    assert!(declaration < marker);
    let default = base
        .find("\t\tuint256 supply = 0; // TODO: set value")
        .expect("Always exists");
    let instantiation = base.find("\t\ttoken = new Token(supply);").expect("Always exists");
    assert!(marker < default);
    assert!(default < instantiation);
}

#[test]
fn declared_contract_queues_nothing() {
    let mut base = BASE_TEMPLATE.to_owned();
    let mut queues = Queues::default();
    Merger::queue_base(base.as_str(), &self::token(), "token", &mut queues);
    Merger::splice_base(&mut base, &queues).expect("Always valid");
    let first_run = base.clone();

    let mut queues = Queues::default();
    Merger::queue_base(base.as_str(), &self::token(), "token", &mut queues);
    let changed = Merger::splice_base(&mut base, &queues).expect("Always valid");

    assert!(!changed);
    assert_eq!(base, first_run);
}

#[test]
fn append_to_files_is_idempotent() {
    let directory = tempfile::tempdir().expect("Always valid");
    let harness_directory = directory.path().to_path_buf();
    fs::write(harness_directory.join(crate::HANDLERS_FILE_NAME), HANDLERS_TEMPLATE)
        .expect("Always valid");
    fs::write(harness_directory.join(crate::BASE_FILE_NAME), BASE_TEMPLATE)
        .expect("Always valid");

    let merger = Merger::new(harness_directory.clone(), Settings::default());
    let contracts = vec![self::token()];
    merger.append(contracts.as_slice()).expect("Always valid");

    let handlers_first =
        fs::read_to_string(harness_directory.join(crate::HANDLERS_FILE_NAME)).expect("Always valid");
    let base_first =
        fs::read_to_string(harness_directory.join(crate::BASE_FILE_NAME)).expect("Always valid");

    merger.append(contracts.as_slice()).expect("Always valid");

    let handlers_second =
        fs::read_to_string(harness_directory.join(crate::HANDLERS_FILE_NAME)).expect("Always valid");
    let base_second =
        fs::read_to_string(harness_directory.join(crate::BASE_FILE_NAME)).expect("Always valid");

    assert_eq!(handlers_first, handlers_second);
    assert_eq!(base_first, base_second);
    assert!(handlers_first.contains("function token_transfer(address to, uint256 amt)"));
    assert!(base_first.contains("\t\ttoken = new Token();"));
}

#[test]
fn proxy_mode_wires_imports_and_writes_proxy_file() {
    let directory = tempfile::tempdir().expect("Always valid");
    let harness_directory = directory.path().to_path_buf();
    fs::write(harness_directory.join(crate::HANDLERS_FILE_NAME), HANDLERS_TEMPLATE)
        .expect("Always valid");
    fs::write(harness_directory.join(crate::BASE_FILE_NAME), BASE_TEMPLATE)
        .expect("Always valid");

    let settings = Settings {
        fail_on_unexpected_error: true,
        force_send_eth: false,
    };
    let merger = Merger::new(harness_directory.clone(), settings);
    merger.append(vec![self::token()].as_slice()).expect("Always valid");

    let handlers =
        fs::read_to_string(harness_directory.join(crate::HANDLERS_FILE_NAME)).expect("Always valid");
    assert_eq!(
        handlers
            .matches("import {TokenProxy} from \"./proxies/TokenProxy.sol\";")
            .count(),
        1
    );
    assert_eq!(
        handlers
            .matches("\tTokenProxy tokenProxy = new TokenProxy(token);")
            .count(),
        1
    );
    assert!(handlers.contains("\t\ttokenProxy.transfer(to, amt);"));

    let proxy = fs::read_to_string(
        harness_directory
            .join(crate::PROXIES_DIRECTORY)
            .join("TokenProxy.sol"),
    )
    .expect("Always valid");
    assert!(proxy.contains("contract TokenProxy is BaseProxy {"));
    assert!(proxy.contains("function transfer(address to, uint256 amt) public {"));
    assert!(proxy.contains("string[] private transferExpectedErrors;"));
    assert!(proxy.contains("import {Token} from \"./src/Token.sol\";"));
}

#[test]
fn force_send_eth_wrapper_is_generated_once() {
    let settings = Settings {
        fail_on_unexpected_error: false,
        force_send_eth: true,
    };

    let mut handlers = HANDLERS_TEMPLATE.to_owned();
    Merger::merge_contract(&mut handlers, &self::token(), "token", &settings)
        .expect("Always valid");
    Merger::merge_contract(&mut handlers, &self::token_with_approve(), "token", &settings)
        .expect("Always valid");

    assert_eq!(handlers.matches("function token_forceSendETH(").count(), 1);
}

#[test]
fn empty_selection_is_a_no_op() {
    let directory = tempfile::tempdir().expect("Always valid");
    let merger = Merger::new(directory.path().to_path_buf(), Settings::default());

    merger.append(&[]).expect("Always valid");
}

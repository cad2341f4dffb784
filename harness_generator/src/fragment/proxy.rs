//!
//! The proxy fragment generators.
//!

use crate::contract::function::Function;

/// The proxy contract file template.
const TEMPLATE: &str = include_str!("templates/ContractProxy.sol");

/// The placeholder replaced with the accumulated expected-error declarations.
const PLACEHOLDER_EXPECTED_ERRORS: &str = "// expectedErrors";

/// The placeholder replaced with the accumulated forwarding functions.
const PLACEHOLDER_FUNCTIONS: &str = "// functions";

///
/// Returns the proxy contract name for `contract_name`.
///
pub fn contract_name(contract_name: &str) -> String {
    format!("{contract_name}Proxy")
}

///
/// Returns the proxy file name for `contract_name`.
///
pub fn file_name(contract_name: &str) -> String {
    format!("{contract_name}Proxy.sol")
}

///
/// Renders the import line that wires a proxy into the Handlers file.
///
pub fn import_line(contract_name: &str) -> String {
    format!("import {{{contract_name}Proxy}} from \"./proxies/{contract_name}Proxy.sol\";")
}

///
/// Renders the proxy instantiation declared in the Handlers contract body.
///
pub fn instantiation(contract_name: &str, instance: &str) -> String {
    format!("\n\t{contract_name}Proxy {instance}Proxy = new {contract_name}Proxy({instance});")
}

///
/// Renders the forwarding function that invokes the real target inside a
/// three-way revert classifier: a declared revert reason is checked against
/// the per-function expected-error list, while arithmetic panics and raw
/// low-level revert data always fail the test.
///
pub fn forwarding_function(function: &Function) -> String {
    let payable = if function.is_payable() { "payable " } else { "" };
    let value = if function.is_payable() {
        "{value: msg.value}"
    } else {
        ""
    };

    format!(
        "\n\tfunction {name}({parameters}) public {payable}{{\n\t\tvm.prank(msg.sender);\n\t\ttry target.{name}{value}({arguments}) {{\n\t\t}} catch Error(string memory reason) {{\n\t\t\thandleError(reason, {name}ExpectedErrors);\n\t\t}} catch Panic(uint256 errorCode) {{\n\t\t\thandlePanic(errorCode);\n\t\t}} catch (bytes memory lowLevelData) {{\n\t\t\thandleLowLevel(lowLevelData);\n\t\t}}\n\t}}",
        name = function.name,
        parameters = function.parameter_list(),
        arguments = function.argument_list(),
    )
}

///
/// Renders the expected-error list declaration for one forwarded function.
///
pub fn expected_errors_declaration(function_name: &str) -> String {
    format!("\n\tstring[] private {function_name}ExpectedErrors;")
}

///
/// Instantiates the proxy file template for one contract.
///
/// The template placeholders are load-bearing: `ContractProxy` becomes the
/// proxy type name, `Target` the real contract type, `filePath` its import
/// path, and the two marked comments receive the accumulated declarations
/// and forwarding functions.
///
pub fn render_file(
    name: &str,
    file_path: &str,
    forwarding_functions: &str,
    expected_errors: &str,
) -> String {
    TEMPLATE
        .replace("ContractProxy", self::contract_name(name).as_str())
        .replace("Target", name)
        .replacen("filePath", file_path, 1)
        .replacen(PLACEHOLDER_EXPECTED_ERRORS, expected_errors, 1)
        .replacen(PLACEHOLDER_FUNCTIONS, forwarding_functions, 1)
}

//!
//! The incremental merge engine.
//!

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use colored::Colorize;

use harness_generator::default_statement;
use harness_generator::find_matching_close;
use harness_generator::handler;
use harness_generator::instance_name;
use harness_generator::proxy;
use harness_generator::section_header;
use harness_generator::Contract;

use crate::settings::Settings;
use crate::splice;

/// The contract declaration anchor in the Handlers file.
const HANDLERS_CONTRACT: &str = "abstract contract Handlers";

/// The setup function anchor in the Base file.
const SETUP_SIGNATURE: &str = "function setup()";

/// The marker line above which storage declarations are inserted.
const SETUP_HEADER_MARKER: &str = "―― Setup ――";

///
/// The incremental merge engine.
///
/// Splices generated fragments into the Handlers and Base files of an
/// existing harness. Duplicate detection is a literal substring search for
/// the generated signature text, so repeated runs with the same selection
/// converge instead of duplicating fragments.
///
/// Not re-entrant: a second `append` must not run concurrently against the
/// same harness directory. The external trigger is a single user command, so
/// this is a documented precondition rather than an enforced lock.
///
pub struct Merger {
    /// The harness directory path.
    harness_directory: PathBuf,
    /// The scaffolder settings.
    settings: Settings,
}

///
/// The fragments queued during the per-contract loop and spliced afterwards.
///
#[derive(Default)]
struct Queues {
    /// The proxy import lines added to the Handlers import block.
    handlers_imports: String,
    /// The proxy instantiations added to the Handlers contract body.
    handlers_instantiations: String,
    /// The constructor parameter declarations already queued this run.
    constructor_parameters: HashSet<String>,
    /// The storage declarations added to the Base file.
    base_declarations: String,
    /// The default-valued constructor parameter statements for `setup()`.
    base_constructor_defaults: String,
    /// The instantiation statements appended to the `setup()` body.
    base_instantiations: String,
}

///
/// The outcome of merging one contract's wrappers into the Handlers text.
///
struct ContractMerge {
    /// Whether any wrapper text was inserted.
    changed: bool,
    /// The accumulated proxy forwarding functions.
    proxy_functions: String,
    /// The accumulated expected-error declarations.
    expected_errors: String,
}

impl Merger {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(harness_directory: PathBuf, settings: Settings) -> Self {
        Self {
            harness_directory,
            settings,
        }
    }

    ///
    /// Merges the selected contracts into the harness files.
    ///
    /// Each contract's wrappers are written to the Handlers file immediately,
    /// so later contracts in the same run observe the updated text. The Base
    /// file is spliced and written once at the end. Proxy files are fully
    /// regenerated, not merged.
    ///
    pub fn append(&self, contracts: &[Contract]) -> anyhow::Result<()> {
        if contracts.is_empty() {
            return Ok(());
        }

        let handlers_path = self.harness_directory.join(crate::HANDLERS_FILE_NAME);
        let mut handlers = fs::read_to_string(handlers_path.as_path()).map_err(|error| {
            anyhow::anyhow!("Failed to read the file {handlers_path:?}: {error}")
        })?;
        let base_path = self.harness_directory.join(crate::BASE_FILE_NAME);
        let mut base = fs::read_to_string(base_path.as_path())
            .map_err(|error| anyhow::anyhow!("Failed to read the file {base_path:?}: {error}"))?;

        let mut queues = Queues::default();

        for contract in contracts.iter() {
            if contract.functions.is_empty() {
                continue;
            }
            let instance = instance_name(contract.name.as_str());

            if self.settings.fail_on_unexpected_error {
                let import = proxy::import_line(contract.name.as_str());
                if !handlers.contains(import.as_str()) {
                    queues.handlers_imports.push('\n');
                    queues.handlers_imports.push_str(import.as_str());
                    queues.handlers_instantiations.push_str(
                        proxy::instantiation(contract.name.as_str(), instance.as_str()).as_str(),
                    );
                }
            }

            let merge = match Self::merge_contract(
                &mut handlers,
                contract,
                instance.as_str(),
                &self.settings,
            ) {
                Ok(merge) => merge,
                Err(error) => {
                    eprintln!(
                        "{}",
                        format!("Skipping contract `{}`: {error}", contract.name).bright_red()
                    );
                    continue;
                }
            };
            if !merge.changed {
                continue;
            }
            fs::write(handlers_path.as_path(), handlers.as_str()).map_err(|error| {
                anyhow::anyhow!("Failed to write the file {handlers_path:?}: {error}")
            })?;

            if self.settings.fail_on_unexpected_error {
                self.write_proxy_file(contract, &merge)?;
            }

            Self::queue_base(base.as_str(), contract, instance.as_str(), &mut queues);
        }

        if !queues.handlers_imports.is_empty() {
            match Self::splice_handlers_header(&mut handlers, &queues) {
                Ok(()) => {
                    fs::write(handlers_path.as_path(), handlers.as_str()).map_err(|error| {
                        anyhow::anyhow!("Failed to write the file {handlers_path:?}: {error}")
                    })?;
                }
                Err(error) => eprintln!(
                    "{}",
                    format!("Skipping the Handlers import update: {error}").bright_red()
                ),
            }
        }

        match Self::splice_base(&mut base, &queues) {
            Ok(true) => fs::write(base_path.as_path(), base.as_str()).map_err(|error| {
                anyhow::anyhow!("Failed to write the file {base_path:?}: {error}")
            })?,
            Ok(false) => {}
            Err(error) => eprintln!(
                "{}",
                format!("Skipping the Base file update: {error}").bright_red()
            ),
        }

        Ok(())
    }

    ///
    /// Generates the missing wrappers for one contract and splices them into
    /// the Handlers text.
    ///
    /// A wrapper is considered present when the file already contains its
    /// generated signature verbatim. New wrappers land after the closing
    /// brace of the contract's last existing wrapper, or, for a contract's
    /// first wrapper, under a fresh section header just before the file's
    /// final closing brace.
    ///
    fn merge_contract(
        handlers: &mut String,
        contract: &Contract,
        instance: &str,
        settings: &Settings,
    ) -> anyhow::Result<ContractMerge> {
        let prefix = format!("function {instance}_");
        let has_existing = handlers.contains(prefix.as_str());

        let mut fragments = String::new();
        let mut proxy_functions = String::new();
        let mut expected_errors = String::new();

        for function in contract.functions.iter() {
            match function.name.as_str() {
                harness_generator::contract::function::NAME_RECEIVE => {
                    if handlers.contains(format!("function {instance}_receive()").as_str()) {
                        continue;
                    }
                    fragments.push_str(handler::receive_wrapper(instance).as_str());
                }
                harness_generator::contract::function::NAME_FALLBACK => {
                    if handlers.contains(format!("function {instance}_fallback()").as_str()) {
                        continue;
                    }
                    fragments.push_str(
                        handler::fallback_wrapper(instance, function.is_payable()).as_str(),
                    );
                }
                _ => {
                    let signature = handler::signature(
                        instance,
                        function.name.as_str(),
                        function.parameter_list().as_str(),
                    );
                    if handlers.contains(signature.as_str()) {
                        continue;
                    }
                    fragments.push_str(
                        handler::wrapper(instance, function, settings.fail_on_unexpected_error)
                            .as_str(),
                    );
                    if settings.fail_on_unexpected_error {
                        proxy_functions.push_str(proxy::forwarding_function(function).as_str());
                        expected_errors.push_str(
                            proxy::expected_errors_declaration(function.name.as_str()).as_str(),
                        );
                    }
                }
            }
        }

        if settings.force_send_eth
            && !handlers.contains(format!("function {instance}_forceSendETH(").as_str())
        {
            fragments.push_str(handler::force_send_eth_wrapper(instance).as_str());
        }

        if fragments.is_empty() {
            return Ok(ContractMerge {
                changed: false,
                proxy_functions,
                expected_errors,
            });
        }

        let insert_offset = if has_existing {
            let last_wrapper = handlers.rfind(prefix.as_str()).expect("Always exists");
            let close = find_matching_close(handlers.as_str(), last_wrapper).ok_or_else(|| {
                anyhow::anyhow!("matching brace not found for the last `{prefix}` wrapper")
            })?;
            splice::line_end(handlers.as_str(), close)
        } else {
            fragments.insert_str(0, section_header(contract.name.as_str()).as_str());
            fragments.push('\n');
            handlers
                .rfind('}')
                .ok_or_else(|| anyhow::anyhow!("closing brace of the Handlers contract not found"))?
        };
        handlers.insert_str(insert_offset, fragments.as_str());

        Ok(ContractMerge {
            changed: true,
            proxy_functions,
            expected_errors,
        })
    }

    ///
    /// Queues the Base-file fragments for one contract: its storage
    /// declaration, default-valued constructor parameters not queued yet,
    /// and its `setup()` instantiation. A contract already declared in the
    /// Base file contributes nothing.
    ///
    fn queue_base(base: &str, contract: &Contract, instance: &str, queues: &mut Queues) {
        let declaration = format!("{} {instance};", contract.name);
        if base.contains(declaration.as_str()) {
            return;
        }
        queues
            .base_declarations
            .push_str(format!("\t{declaration}\n").as_str());

        let mut arguments = String::new();
        if let Some(constructor) = contract.constructor.as_ref() {
            for input in constructor.inputs.iter() {
                if queues.constructor_parameters.insert(input.declaration()) {
                    queues
                        .base_constructor_defaults
                        .push_str(default_statement(input).as_str());
                }
            }
            arguments = constructor.argument_list();
        }
        queues.base_instantiations.push_str(
            format!("\n\t\t{instance} = new {}({arguments});", contract.name).as_str(),
        );
    }

    ///
    /// Splices the queued proxy imports after the last import line of the
    /// Handlers file and the queued proxy instantiations right after the
    /// opening brace of the Handlers contract.
    ///
    fn splice_handlers_header(handlers: &mut String, queues: &Queues) -> anyhow::Result<()> {
        let import_end = splice::after_last_import(handlers.as_str())
            .ok_or_else(|| anyhow::anyhow!("import block not found in the Handlers file"))?;
        handlers.insert_str(import_end, queues.handlers_imports.as_str());

        let contract_offset = handlers
            .rfind(HANDLERS_CONTRACT)
            .ok_or_else(|| anyhow::anyhow!("`{HANDLERS_CONTRACT}` declaration not found"))?;
        let body_open = handlers[contract_offset..]
            .find('{')
            .map(|relative| contract_offset + relative)
            .ok_or_else(|| anyhow::anyhow!("`{HANDLERS_CONTRACT}` body brace not found"))?;
        let first_line_end = splice::line_end(handlers.as_str(), body_open);
        handlers.insert_str(first_line_end, queues.handlers_instantiations.as_str());

        Ok(())
    }

    ///
    /// Splices the queued Base fragments: constructor defaults right after
    /// the `setup()` signature line, storage declarations just above the
    /// setup section marker, and instantiations right before the closing
    /// brace of `setup()`. Returns whether the Base text changed.
    ///
    fn splice_base(base: &mut String, queues: &Queues) -> anyhow::Result<bool> {
        if queues.base_declarations.is_empty()
            && queues.base_constructor_defaults.is_empty()
            && queues.base_instantiations.is_empty()
        {
            return Ok(false);
        }

        if !queues.base_constructor_defaults.is_empty() {
            let setup_offset = base
                .find(SETUP_SIGNATURE)
                .ok_or_else(|| anyhow::anyhow!("`{SETUP_SIGNATURE}` not found in the Base file"))?;
            let signature_line_end = splice::line_end(base.as_str(), setup_offset);
            base.insert_str(signature_line_end, queues.base_constructor_defaults.as_str());
        }

        if !queues.base_declarations.is_empty() {
            let marker = base.find(SETUP_HEADER_MARKER).ok_or_else(|| {
                anyhow::anyhow!("`{SETUP_HEADER_MARKER}` marker not found in the Base file")
            })?;
            let marker_line_start = base[..marker]
                .rfind('\n')
                .ok_or_else(|| anyhow::anyhow!("the setup marker starts the Base file"))?;
            base.insert_str(marker_line_start, queues.base_declarations.as_str());
        }

        if !queues.base_instantiations.is_empty() {
            let setup_offset = base
                .find(SETUP_SIGNATURE)
                .ok_or_else(|| anyhow::anyhow!("`{SETUP_SIGNATURE}` not found in the Base file"))?;
            let close = find_matching_close(base.as_str(), setup_offset)
                .ok_or_else(|| anyhow::anyhow!("closing brace of `setup()` not found"))?;
            let close_line_start = base[..close]
                .rfind('\n')
                .ok_or_else(|| anyhow::anyhow!("`setup()` occupies the first line"))?;
            base.insert_str(close_line_start, queues.base_instantiations.as_str());
        }

        Ok(true)
    }

    ///
    /// Renders and writes the proxy file for one contract, overwriting any
    /// previous version. Only the wrappers generated this run are forwarded;
    /// the file is not merged incrementally.
    ///
    fn write_proxy_file(&self, contract: &Contract, merge: &ContractMerge) -> anyhow::Result<()> {
        let content = proxy::render_file(
            contract.name.as_str(),
            contract.file_path.as_str(),
            merge.proxy_functions.as_str(),
            merge.expected_errors.as_str(),
        );

        let proxies_directory = self.harness_directory.join(crate::PROXIES_DIRECTORY);
        fs::create_dir_all(proxies_directory.as_path()).map_err(|error| {
            anyhow::anyhow!("Failed to create the directory {proxies_directory:?}: {error}")
        })?;

        let proxy_path = proxies_directory.join(proxy::file_name(contract.name.as_str()));
        fs::write(proxy_path.as_path(), content.as_str())
            .map_err(|error| anyhow::anyhow!("Failed to write the file {proxy_path:?}: {error}"))
    }
}

//!
//! The selection file loader.
//!

use std::fs;
use std::path::Path;

use colored::Colorize;

use harness_generator::Contract;

///
/// Loads the contract selection produced by the discovery step.
///
/// View and pure functions are dropped, as are contracts left with no
/// selected callables, so the merge engine only ever sees contracts with at
/// least one function to wrap.
///
pub fn load_selection(path: &Path) -> anyhow::Result<Vec<Contract>> {
    let text = fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("Failed to read the selection file {path:?}: {error}"))?;
    let contracts: Vec<Contract> = serde_json::from_str(text.as_str())
        .map_err(|error| anyhow::anyhow!("Failed to parse the selection file {path:?}: {error}"))?;

    let mut selected = Vec::with_capacity(contracts.len());
    for mut contract in contracts.into_iter() {
        let total = contract.functions.len();
        contract
            .functions
            .retain(|function| function.state_mutability.is_mutating());
        let dropped = total - contract.functions.len();
        if dropped > 0 {
            eprintln!(
                "{}",
                format!(
                    "Dropped {dropped} view/pure function(s) of contract `{}`",
                    contract.name
                )
                .yellow()
            );
        }
        if contract.functions.is_empty() {
            eprintln!(
                "{}",
                format!("Skipping contract `{}`: no selected callables", contract.name).yellow()
            );
            continue;
        }
        selected.push(contract);
    }
    Ok(selected)
}

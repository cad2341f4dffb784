//!
//! The selected contract.
//!

pub mod function;
pub mod input;

use serde::Deserialize;

use self::function::Function;

///
/// The selected contract.
///
/// Produced by the discovery collaborator on every invocation. `functions`
/// holds only the callables the user has chosen to wire into the harness.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// The declared contract name.
    pub name: String,
    /// The contract source path, relative to the project root.
    pub file_path: String,
    /// The selected callables.
    pub functions: Vec<Function>,
    /// The constructor, if it has arguments.
    #[serde(rename = "ctor", default)]
    pub constructor: Option<Function>,
}

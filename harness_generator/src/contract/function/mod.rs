//!
//! The selected callable.
//!

pub mod mutability;

use serde::Deserialize;

use crate::contract::input::Input;

use self::mutability::Mutability;

/// The pseudo-name of the `receive` callable.
pub const NAME_RECEIVE: &str = "receive";

/// The pseudo-name of the `fallback` callable.
pub const NAME_FALLBACK: &str = "fallback";

///
/// The selected callable: an ordinary function, the constructor, `receive`,
/// or `fallback`.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    /// The callable name.
    pub name: String,
    /// The callable parameters.
    #[serde(default)]
    pub inputs: Vec<Input>,
    /// The callable state mutability.
    pub state_mutability: Mutability,
}

impl Function {
    ///
    /// Renders the parameter list used in generated declarations.
    ///
    /// The output is byte-stable for a given input list: the merge engine
    /// detects already-generated wrappers by searching for this exact text.
    ///
    pub fn parameter_list(&self) -> String {
        self.inputs
            .iter()
            .map(Input::declaration)
            .collect::<Vec<String>>()
            .join(", ")
    }

    ///
    /// Renders the argument list used at generated call sites.
    ///
    pub fn argument_list(&self) -> String {
        self.inputs
            .iter()
            .map(|input| input.name.clone())
            .collect::<Vec<String>>()
            .join(", ")
    }

    ///
    /// Whether the callable accepts ETH.
    ///
    pub fn is_payable(&self) -> bool {
        self.state_mutability == Mutability::Payable
    }
}

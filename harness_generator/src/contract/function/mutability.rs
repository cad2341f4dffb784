//!
//! The callable state mutability.
//!

use serde::Deserialize;

///
/// The callable state mutability.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    /// The default mutability.
    NonPayable,
    /// The callable accepts ETH.
    Payable,
    /// The callable only reads state.
    View,
    /// The callable neither reads nor writes state.
    Pure,
}

impl Mutability {
    ///
    /// Whether the callable can mutate state and is worth fuzzing.
    ///
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::NonPayable | Self::Payable)
    }
}

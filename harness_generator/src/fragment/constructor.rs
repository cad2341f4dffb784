//!
//! The constructor-default statement generator.
//!

use crate::contract::input::Input;

///
/// Renders a default-valued variable declaration for one constructor
/// parameter, marked for manual review.
///
pub fn default_statement(input: &Input) -> String {
    format!(
        "\n\t\t{} = {}; // TODO: set value",
        input.declaration(),
        input.default_value()
    )
}

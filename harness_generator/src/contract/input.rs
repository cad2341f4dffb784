//!
//! The callable parameter.
//!

use serde::Deserialize;

/// The semantic type tags that require a `memory` location qualifier.
pub const DYNAMIC_TYPES: [&str; 4] = ["string", "bytes", "tuple", "array"];

///
/// The callable parameter.
///
/// `r#type` is a closed vocabulary of semantic tags (`bool`, `intN`, `uintN`,
/// `address`, `bytesN`, `bytes`, `string`, `array`, `tuple`, `function`,
/// `contract`, `enum`) selecting encoding and default-value rules, whereas
/// `internal_type` is the fully resolved type name used verbatim in generated
/// declarations.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The parameter identifier.
    pub name: String,
    /// The semantic type tag.
    pub r#type: String,
    /// The fully resolved type name.
    pub internal_type: String,
}

impl Input {
    ///
    /// Whether the parameter needs a `memory` location qualifier.
    ///
    pub fn is_dynamic(&self) -> bool {
        DYNAMIC_TYPES.contains(&self.r#type.as_str())
    }

    ///
    /// Renders the parameter declaration used in generated signatures.
    ///
    pub fn declaration(&self) -> String {
        if self.is_dynamic() {
            format!("{} memory {}", self.internal_type, self.name)
        } else {
            format!("{} {}", self.internal_type, self.name)
        }
    }

    ///
    /// Returns the default-value literal for scaffolded initialization code.
    ///
    /// Total over the type vocabulary: unknown tags degrade to a best-effort
    /// `TypeName()` call which the caller marks for manual follow-up.
    ///
    pub fn default_value(&self) -> String {
        let r#type = self.r#type.as_str();
        let internal_type = self.internal_type.as_str();

        if r#type.starts_with("uint") || r#type.starts_with("int") {
            "0".to_owned()
        } else if r#type == "bool" {
            "false".to_owned()
        } else if r#type == "address" {
            "address(0)".to_owned()
        } else if r#type == "string" {
            "\"\"".to_owned()
        } else if r#type == "bytes" {
            "hex\"\"".to_owned()
        } else if r#type.starts_with("bytes") {
            format!("{internal_type}(0)")
        } else if r#type == "array" {
            format!("new {internal_type}(1)")
        } else if r#type == "enum" {
            format!("{internal_type}(0)")
        } else if r#type == "contract" {
            format!("{internal_type}(address(0))")
        } else if r#type == "tuple" {
            format!("{internal_type}({{}})")
        } else {
            format!("{internal_type}()")
        }
    }
}

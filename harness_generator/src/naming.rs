//!
//! The instance naming transform.
//!

///
/// Derives the lowerCamel instance identifier from a contract's declared name.
///
/// The identifier is used both as the storage variable name and as the
/// generated-function prefix. A name that already starts lowercase is
/// prefixed with `_` to avoid shadowing the contract's own identifier; a
/// fully-uppercase name is lowercased entirely; otherwise only the first
/// character is lowercased. No global uniqueness check is performed.
///
pub fn instance_name(contract_name: &str) -> String {
    let first = match contract_name.chars().next() {
        Some(first) => first,
        None => return String::new(),
    };

    if first.is_lowercase() {
        format!("_{contract_name}")
    } else if contract_name
        .chars()
        .all(|character| !character.is_lowercase())
    {
        contract_name.to_lowercase()
    } else {
        first.to_lowercase().collect::<String>() + &contract_name[first.len_utf8()..]
    }
}

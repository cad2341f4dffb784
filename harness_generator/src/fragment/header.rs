//!
//! The decorative section-header generator.
//!

/// The total width of a section-header comment line.
const HEADER_WIDTH: usize = 60;

///
/// Centers the contract name inside a fixed-width horizontal rule comment.
///
/// Falls back to a plain comment line when the name is too long to fit.
///
pub fn section_header(name: &str) -> String {
    if name.chars().count() > HEADER_WIDTH - 4 {
        return format!("\n\t// {name}");
    }

    let padding = HEADER_WIDTH - 2 - name.chars().count();
    let left = padding / 2;
    let right = padding - left;
    format!("\n\t// {} {} {}", "―".repeat(left), name, "―".repeat(right))
}

#[cfg(test)]
mod tests {
    use crate::fragment::header::section_header;

    #[test]
    fn centered() {
        let header = section_header("Token");

        assert!(header.starts_with("\n\t// "));
        assert!(header.contains(" Token "));
        assert_eq!(header.matches('―').count(), 53);
    }

    #[test]
    fn too_long() {
        let name = "A".repeat(60);

        assert_eq!(section_header(name.as_str()), format!("\n\t// {name}"));
    }
}

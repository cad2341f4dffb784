//!
//! The text-splicing helpers.
//!

///
/// Returns the offset of the first `\n` at or after `offset`, or the text
/// length when the text ends without one.
///
pub(crate) fn line_end(text: &str, offset: usize) -> usize {
    text[offset..]
        .find('\n')
        .map(|relative| offset + relative)
        .unwrap_or(text.len())
}

///
/// Returns the offset just past the last line of the import block, i.e. the
/// `\n` terminating the last `import ` statement.
///
pub(crate) fn after_last_import(text: &str) -> Option<usize> {
    let last_import = text.rfind("\nimport ")?;
    Some(self::line_end(text, last_import + 1))
}

#[cfg(test)]
mod tests {
    use crate::splice::after_last_import;
    use crate::splice::line_end;

    #[test]
    fn line_end_mid_text() {
        let text = "first\nsecond\n";

        assert_eq!(line_end(text, 0), 5);
        assert_eq!(line_end(text, 6), 12);
    }

    #[test]
    fn line_end_unterminated() {
        assert_eq!(line_end("first", 0), 5);
    }

    #[test]
    fn import_block() {
        let text = "pragma solidity;\nimport \"./A.sol\";\nimport \"./B.sol\";\n\ncontract C {}";

        let offset = after_last_import(text).expect("Always exists");

        assert_eq!(&text[..offset], "pragma solidity;\nimport \"./A.sol\";\nimport \"./B.sol\";");
    }

    #[test]
    fn no_imports() {
        assert_eq!(after_last_import("contract C {}"), None);
    }
}

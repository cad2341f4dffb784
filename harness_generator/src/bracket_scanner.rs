//!
//! The bracket-matching scanner.
//!

///
/// Finds the closing brace matching the first `{` at or after `search_start`.
///
/// Scans forward from the first opening brace maintaining a nesting depth and
/// returns the byte offset of the `}` at which the depth returns to zero.
/// Returns `None` when either brace is missing; callers must treat `None` as
/// fatal for the splice being computed and skip the file update.
///
pub fn find_matching_close(text: &str, search_start: usize) -> Option<usize> {
    let body_start = text
        .get(search_start..)
        .and_then(|tail| tail.find('{'))
        .map(|offset| search_start + offset)?;

    let mut depth: usize = 0;
    for (offset, byte) in text.bytes().enumerate().skip(body_start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }

    None
}

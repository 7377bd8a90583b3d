//! DOT text helpers shared by the graph exporter.

/// Escapes a string for use inside a double-quoted DOT string.
///
/// Backslashes and quotes are escaped, line feeds become the `\n` escape, carriage
/// returns are dropped, and angle brackets are escaped so record-shaped labels render
/// them literally.
///
/// # Arguments
///
/// * `s` - The string to escape
///
/// # Returns
///
/// A new string with all special characters escaped.
///
/// # Examples
///
/// ```rust
/// use lazygraph::utils::escape_dot;
///
/// assert_eq!(escape_dot("Vec<u8>"), "Vec\\<u8\\>");
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

/// Wraps `s` in double quotes after escaping it.
#[must_use]
pub fn quote_dot(s: &str) -> String {
    format!("\"{}\"", escape_dot(s))
}

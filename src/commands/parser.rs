//! Input line parsing.

/// Split a line into a lower-cased command word and its arguments.
///
/// Blank input yields an empty command and no arguments. Arguments keep
/// their original case.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some(command) => (
            command.to_lowercase(),
            parts.map(str::to_string).collect(),
        ),
        None => (String::new(), Vec::new()),
    }
}

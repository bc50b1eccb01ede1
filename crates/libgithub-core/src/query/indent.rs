const INDENT: &str = "  ";

/// Prefix every non-empty line of `block` with one level of indentation.
pub(super) fn indent(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

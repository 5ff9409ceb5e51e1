/// Splits a list cell into tags: on `|` when present, otherwise on `,`.
/// Tags are trimmed and empty ones dropped.
pub fn split_tags(value: &str) -> Vec<&str> {
    let separator = if value.contains('|') { '|' } else { ',' };
    value
        .split(separator)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_wins_over_comma() {
        assert_eq!(split_tags("Rust, Go | SQL"), vec!["Rust, Go", "SQL"]);
        assert_eq!(split_tags("Rust, Go,,  SQL "), vec!["Rust", "Go", "SQL"]);
        assert!(split_tags("  ").is_empty());
    }
}

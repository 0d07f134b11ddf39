/// Replace each run of whitespace with a single space and trim both ends.
///
/// Rendered HTML is compared in this form; line breaks and indentation
/// carry no meaning on the page.
pub fn fold_space(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_runs_and_trims() {
        assert_eq!(fold_space("\n<p>\n  go1.14.1\t(released)\n</p>\n\n"), "<p> go1.14.1 (released) </p>");
        assert_eq!(fold_space("   "), "");
        assert_eq!(fold_space("a\u{a0}b"), "a b");
    }
}

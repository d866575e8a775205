//! Keyed substring replacement

/// Replaces each pair's search literal with its replacement, in pair order
///
/// The pairs are folded over a running result: every occurrence of a search
/// literal is replaced before the next pair is applied, so later pairs see
/// the output of earlier ones. With overlapping keys this is observably
/// different from a simultaneous substitution, and callers rely on the fold
/// order, so it must not be collapsed into a single pass.
///
/// Matching is literal substring matching, not regex.
///
/// # Arguments
///
/// * `input` - The string to rewrite
/// * `pairs` - Ordered `(search, replacement)` pairs
///
/// # Returns
///
/// The rewritten string; `input` unchanged if `pairs` is empty.
///
/// # Examples
///
/// ```
/// use urlpeel::replace_each;
///
/// assert_eq!(replace_each("aXbXc", [("X", "Y")]), "aYbYc");
///
/// // Sequential fold: the second pair rewrites the first pair's output
/// assert_eq!(replace_each("ab", [("a", "b"), ("b", "c")]), "cc");
/// ```
pub fn replace_each<'a, I>(input: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut result = input.to_string();
    for (search, replacement) in pairs {
        result = result.replace(search, replacement);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair_replaces_all_occurrences() {
        assert_eq!(replace_each("aXbXc", [("X", "Y")]), "aYbYc");
    }

    #[test]
    fn test_empty_pairs_returns_input_unchanged() {
        assert_eq!(replace_each("abc", []), "abc");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(replace_each("", [("a", "b")]), "");
    }

    #[test]
    fn test_sequential_fold_order() {
        // First pass: "ab" -> "bb". Second pass: both 'b's -> 'c', giving
        // "cc", not the "bc" a simultaneous substitution would produce.
        assert_eq!(replace_each("ab", [("a", "b"), ("b", "c")]), "cc");
    }

    #[test]
    fn test_replacement_value_rewritten_by_later_pair() {
        assert_eq!(replace_each("x", [("x", "yy"), ("y", "z")]), "zz");
    }

    #[test]
    fn test_key_absent_from_input() {
        assert_eq!(replace_each("hello", [("x", "y")]), "hello");
    }

    #[test]
    fn test_literal_not_regex() {
        assert_eq!(replace_each("a.c", [(".", "-")]), "a-c");
        assert_eq!(replace_each("abc", [(".", "-")]), "abc");
    }

    #[test]
    fn test_multibyte_input() {
        assert_eq!(replace_each("héllo wörld", [("ö", "o")]), "héllo world");
    }

    #[test]
    fn test_removal_via_empty_replacement() {
        assert_eq!(replace_each("a-b-c", [("-", "")]), "abc");
    }
}

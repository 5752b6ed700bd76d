//! SQL `LIKE` pattern matching.

/// Matches `value` against a pattern where `%` is any run of characters
/// (including none) and `_` is exactly one character.
///
/// Two-pointer scan that backtracks to the last `%` on mismatch.
pub(crate) fn matches(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let value: Vec<char> = value.chars().collect();

    let (mut p, mut v) = (0usize, 0usize);
    // Position after the last '%' seen, and the value position it was tried at
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        if p < pattern.len() && (pattern[p] == '_' || pattern[p] == value[v]) && pattern[p] != '%'
        {
            p += 1;
            v += 1;
        } else if p < pattern.len() && pattern[p] == '%' {
            backtrack = Some((p + 1, v));
            p += 1;
        } else if let Some((star_p, star_v)) = backtrack {
            p = star_p;
            v = star_v + 1;
            backtrack = Some((star_p, star_v + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}

#[cfg(test)]
mod tests {
    use super::matches;

    #[test]
    fn test_like_wildcards() {
        assert!(matches("member%", "member1"));
        assert!(matches("member%", "member"));
        assert!(matches("%ber%", "member1"));
        assert!(matches("member_", "member4"));
        assert!(!matches("member_", "member"));
        assert!(!matches("member_", "member10"));
        assert!(matches("%1", "member1"));
        assert!(!matches("%2", "member1"));
        assert!(matches("%", ""));
        assert!(matches("", ""));
        assert!(!matches("", "a"));
        assert!(matches("m%r%1", "member1"));
        assert!(matches("a%%b", "ab"));
    }
}

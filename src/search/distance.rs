//! Levenshtein edit distance used to rank suggestions.

/// Number of single-character insertions, deletions and substitutions needed
/// to turn `a` into `b`. Works on `char`s, not bytes.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    // Single rolling row: dp[j] = distance(a[..i], b[..j])
    let mut dp: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diag = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (above + 1).min(dp[j] + 1).min(diag + cost);
            diag = above;
        }
    }
    dp[b_chars.len()]
}

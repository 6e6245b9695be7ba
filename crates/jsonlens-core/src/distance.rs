//! Levenshtein edit distance, memoized per unordered string pair.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

static DISTANCES: LazyLock<RwLock<HashMap<(String, String), usize>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Edit distance between `a` and `b` (insert, delete, substitute cost 1),
/// cached process-wide.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let key = if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    };

    if let Some(d) = DISTANCES.read().get(&key).copied() {
        return d;
    }
    let d = levenshtein_uncached(&key.0, &key.1);
    *DISTANCES.write().entry(key).or_insert(d)
}

/// Number of string pairs currently memoized.
pub fn cached_pairs() -> usize {
    DISTANCES.read().len()
}

pub fn levenshtein_uncached(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// `distance / longer_len`, in `[0, 1]`; 0 for two empty strings.
pub fn normalized_distance(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / max_len as f64
}

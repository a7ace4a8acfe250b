//! Fuzzy string scoring on a 0..=100 scale.
//!
//! The scorers here follow the familiar "weighted ratio" family: an indel
//! (longest common subsequence) ratio, a best-window partial ratio, and two token-based
//! ratios that ignore word order. [`weighted_ratio`] combines them and is
//! what the menu resolver ranks candidates with.
//!
//! All functions expect already-normalized input (see [`crate::normalize`])
//! and return 0 when either side is empty.

use std::collections::BTreeSet;

const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;

/// Similarity of two strings as a rounded percentage of their indel
/// distance: `2 * lcs / (len_a + len_b)`.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = (a.len() + b.len()) as f64;
    to_score(200.0 * lcs_len(&a, &b) as f64 / total)
}

/// Length of the longest common subsequence.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Best [`ratio`] of the shorter string against every equally long window
/// of the longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = shorter.chars().count();
    let long_chars: Vec<char> = longer.chars().collect();

    if short_len == long_chars.len() {
        return ratio(shorter, longer);
    }

    let mut best = 0u8;
    for window in long_chars.windows(short_len) {
        let candidate: String = window.iter().collect();
        best = best.max(ratio(shorter, &candidate));
        if best == 100 {
            break;
        }
    }
    best
}

/// [`ratio`] after sorting whitespace-separated tokens.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Order- and duplicate-insensitive token comparison.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    token_set_with(a, b, ratio)
}

/// Combined score used to rank menu candidates.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = f64::from(ratio(a, b));

    if len_ratio < 1.5 {
        let token_sort = f64::from(token_sort_ratio(a, b)) * UNBASE_SCALE;
        let token_set = f64::from(token_set_ratio(a, b)) * UNBASE_SCALE;
        return to_score(base.max(token_sort).max(token_set));
    }

    let partial_scale = if len_ratio > 8.0 {
        LONG_PARTIAL_SCALE
    } else {
        PARTIAL_SCALE
    };

    let partial = f64::from(partial_ratio(a, b)) * partial_scale;
    let partial_sort = f64::from(partial_ratio(&sorted_tokens(a), &sorted_tokens(b)))
        * UNBASE_SCALE
        * partial_scale;
    let partial_set =
        f64::from(token_set_with(a, b, partial_ratio)) * UNBASE_SCALE * partial_scale;

    to_score(base.max(partial).max(partial_sort).max(partial_set))
}

fn token_set_with(a: &str, b: &str, scorer: fn(&str, &str) -> u8) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let intersection = join(tokens_a.intersection(&tokens_b));
    let diff_ab = join(tokens_a.difference(&tokens_b));
    let diff_ba = join(tokens_b.difference(&tokens_a));

    let combined_ab = format!("{} {}", intersection, diff_ab).trim().to_string();
    let combined_ba = format!("{} {}", intersection, diff_ba).trim().to_string();

    scorer(&intersection, &combined_ab)
        .max(scorer(&intersection, &combined_ba))
        .max(scorer(&combined_ab, &combined_ba))
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join<'a, 'b: 'a>(tokens: impl Iterator<Item = &'a &'b str>) -> String {
    tokens.copied().collect::<Vec<_>>().join(" ")
}

#[inline]
fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

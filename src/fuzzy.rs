//! Fuzzy string similarity.
//!
//! [`PartialRatio`] scores how well the shorter string matches its best
//! aligned window in the longer one, on a 0..=100 scale. Alignment windows
//! come from the longest-matching-block decomposition of the two strings,
//! and each window is scored with the `2 * matches / total_len` ratio.
//! Strings are compared by `char`, so emoji count as one unit each.

/// Similarity scorer used by the emoji filter.
pub trait Scorer {
    /// Similarity of `a` and `b`, from 0 (unrelated) to 100 (match).
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Partial-substring-tolerant similarity scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

impl Scorer for PartialRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        partial_ratio(a, b)
    }
}

/// A run of equal chars: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

/// Best partial match score of `a` against `b`, 0..=100.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    let mut best = 0.0f64;
    for block in matching_blocks(shorter, longer) {
        let start = block.b_start.saturating_sub(block.a_start);
        let end = (start + shorter.len()).min(longer.len());
        let window = &longer[start.min(end)..end];

        let r = ratio(shorter, window);
        if r > 0.995 {
            return 100;
        }
        best = best.max(r);
    }

    // Halves round to even
    (best * 100.0).round_ties_even() as u8
}

/// Full-string similarity ratio in 0.0..=1.0.
pub fn ratio_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio(&a, &b)
}

fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches: usize = matching_blocks(a, b).iter().map(|m| m.size).sum();
    2.0 * matches as f64 / total as f64
}

/// Longest common run within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the earliest start in `a`, then the earliest start in `b`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        a_start: alo,
        b_start: blo,
        size: 0,
    };
    let width = bhi - blo;
    // prev[k] = length of the common run ending at a[i - 1], b[blo + k - 1]
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo + 1;
            if a[i] == b[j] {
                let run = prev[k - 1] + 1;
                cur[k] = run;
                if run > best.size {
                    best = Block {
                        a_start: i + 1 - run,
                        b_start: j + 1 - run,
                        size: run,
                    };
                }
            } else {
                cur[k] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

/// Non-overlapping matching blocks in increasing order, adjacent runs merged,
/// terminated by a zero-size block at `(a.len(), b.len())`.
fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let m = longest_match(a, b, alo, ahi, blo, bhi);
        if m.size == 0 {
            continue;
        }
        found.push(m);
        if alo < m.a_start && blo < m.b_start {
            pending.push((alo, m.a_start, blo, m.b_start));
        }
        if m.a_start + m.size < ahi && m.b_start + m.size < bhi {
            pending.push((m.a_start + m.size, ahi, m.b_start + m.size, bhi));
        }
    }
    found.sort_by_key(|m| (m.a_start, m.b_start));

    let mut merged: Vec<Block> = Vec::with_capacity(found.len() + 1);
    for m in found {
        match merged.last_mut() {
            Some(last)
                if last.a_start + last.size == m.a_start
                    && last.b_start + last.size == m.b_start =>
            {
                last.size += m.size;
            }
            _ => merged.push(m),
        }
    }
    merged.push(Block {
        a_start: a.len(),
        b_start: b.len(),
        size: 0,
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(partial_ratio("dog face", "dog face"), 100);
        assert_eq!(partial_ratio("", ""), 100);
    }

    #[test]
    fn test_empty_side_scores_zero() {
        assert_eq!(partial_ratio("", "grinning face"), 0);
        assert_eq!(partial_ratio("grin", ""), 0);
    }

    #[test]
    fn test_substring_is_full_match() {
        assert_eq!(partial_ratio("grin", "grinning face"), 100);
        assert_eq!(partial_ratio("face", "dog face"), 100);
        // Argument order does not matter
        assert_eq!(partial_ratio("grinning face", "grin"), 100);
    }

    #[test]
    fn test_unrelated_scores_low() {
        assert_eq!(partial_ratio("xyz", "grinning face"), 0);
        assert!(partial_ratio("grin", "dog face") < 70);
    }

    #[test]
    fn test_typo_tolerance() {
        // One substituted char in a four-char window: 2 * 3 / 8
        assert_eq!(partial_ratio("fase", "dog face"), 75);
        assert!(partial_ratio("grinnig", "grinning face") >= 70);
    }

    #[test]
    fn test_emoji_counted_as_single_char() {
        assert_eq!(partial_ratio("😀", "😀"), 100);
        assert_eq!(partial_ratio("😀", "x😀y"), 100);
        assert_eq!(partial_ratio("grin", "😀"), 0);
    }

    #[test]
    fn test_matching_blocks_merge_and_terminate() {
        let a: Vec<char> = "abxcd".chars().collect();
        let b: Vec<char> = "abcd".chars().collect();
        let blocks = matching_blocks(&a, &b);
        assert_eq!(
            blocks,
            vec![
                Block { a_start: 0, b_start: 0, size: 2 },
                Block { a_start: 3, b_start: 2, size: 2 },
                Block { a_start: 5, b_start: 4, size: 0 },
            ]
        );
    }

    #[test]
    fn test_half_scores_round_to_even() {
        // 2 * 5 / 16 = 62.5
        assert_eq!(partial_ratio("accbcaba", "ccabaaba"), 62);
    }

    #[test]
    fn test_ratio() {
        assert!((ratio_str("abcd", "bcde") - 0.75).abs() < 1e-9);
        assert_eq!(ratio_str("", ""), 1.0);
    }

    #[test]
    fn test_scorer_trait() {
        let scorer = PartialRatio;
        assert_eq!(scorer.score("face", "grinning face"), 100);
    }
}

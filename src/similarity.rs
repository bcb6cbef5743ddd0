//! String similarity primitives
//!
//! Three ratios in the 0.0-1.0 range feed the composite score:
//! 1. `edit_ratio` - normalized Levenshtein distance
//! 2. `partial_ratio` - best edit ratio of the shorter string against
//!    same-length windows of the longer one
//! 3. `sequence_ratio` - Ratcliff/Obershelp (difflib-style) matching ratio

use strsim::normalized_levenshtein;

/// A run of equal characters: `a[a_start..a_start + len] == b[b_start..b_start + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Symmetric normalized edit-distance ratio
///
/// 1.0 for identical strings (including two empty strings), 0.0 when every
/// character has to change.
pub fn edit_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Substring-tolerant ratio
///
/// Slides the shorter string over the longer one, anchored on the matching
/// blocks, and keeps the best window. An exact substring scores 1.0.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let shorter_str: String = shorter.iter().collect();
    let mut best = 0.0f64;

    for block in matching_blocks_chars(shorter, longer) {
        let start = block.b_start.saturating_sub(block.a_start);
        let end = (start + shorter.len()).min(longer.len());
        let window: String = longer[start..end].iter().collect();

        let ratio = edit_ratio(&shorter_str, &window);
        if ratio > 0.995 {
            return 1.0;
        }
        best = best.max(ratio);
    }

    best
}

/// Ratcliff/Obershelp similarity: `2 * matched / (len(a) + len(b))`
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = matching_blocks_chars(&a_chars, &b_chars)
        .iter()
        .map(|block| block.len)
        .sum();

    (2.0 * matched as f64) / total as f64
}

/// Matching blocks of `a` and `b`, ordered by position
///
/// The final element is always the zero-length sentinel `(len(a), len(b), 0)`.
pub fn matching_blocks(a: &str, b: &str) -> Vec<MatchingBlock> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    matching_blocks_chars(&a_chars, &b_chars)
}

fn matching_blocks_chars(a: &[char], b: &[char]) -> Vec<MatchingBlock> {
    let mut queue = vec![(0, a.len(), 0, b.len())];
    let mut blocks = Vec::new();

    while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
        let block = longest_match(a, b, a_lo, a_hi, b_lo, b_hi);
        if block.len == 0 {
            continue;
        }

        if a_lo < block.a_start && b_lo < block.b_start {
            queue.push((a_lo, block.a_start, b_lo, block.b_start));
        }
        let a_end = block.a_start + block.len;
        let b_end = block.b_start + block.len;
        if a_end < a_hi && b_end < b_hi {
            queue.push((a_end, a_hi, b_end, b_hi));
        }
        blocks.push(block);
    }

    blocks.sort_by_key(|block| (block.a_start, block.b_start));

    // Merge blocks that continue one another
    let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len() + 1);
    for block in blocks {
        match merged.last_mut() {
            Some(last)
                if last.a_start + last.len == block.a_start
                    && last.b_start + last.len == block.b_start =>
            {
                last.len += block.len;
            }
            _ => merged.push(block),
        }
    }

    merged.push(MatchingBlock {
        a_start: a.len(),
        b_start: b.len(),
        len: 0,
    });
    merged
}

/// Longest common run inside `a[a_lo..a_hi]` and `b[b_lo..b_hi]`
///
/// Ties go to the run that starts earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> MatchingBlock {
    let mut best = MatchingBlock {
        a_start: a_lo,
        b_start: b_lo,
        len: 0,
    };

    // run_len[j + 1] = length of the common run ending at (i, j)
    let width = b_hi - b_lo + 1;
    let mut prev = vec![0usize; width];
    let mut curr = vec![0usize; width];

    for i in a_lo..a_hi {
        for j in b_lo..b_hi {
            let col = j - b_lo + 1;
            if a[i] == b[j] {
                curr[col] = prev[col - 1] + 1;
                if curr[col] > best.len {
                    best = MatchingBlock {
                        a_start: i + 1 - curr[col],
                        b_start: j + 1 - curr[col],
                        len: curr[col],
                    };
                }
            } else {
                curr[col] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

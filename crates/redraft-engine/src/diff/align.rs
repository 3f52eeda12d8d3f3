use std::{collections::HashMap, hash::Hash, ops::Range};

use serde::Serialize;

/// Classification of one alignment op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpTag {
    Equal,
    Replace,
    Insert,
    Delete,
}

/// One span of a word-level alignment. Ranges are half-open indexes into
/// the original and rewritten sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignmentOp {
    pub tag: OpTag,
    pub original: Range<usize>,
    pub rewritten: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Block {
    a: usize,
    b: usize,
    size: usize,
}

struct Matcher<'s, T> {
    a: &'s [T],
    b: &'s [T],
    /// Ascending positions of each element of `b`.
    b2j: HashMap<&'s T, Vec<usize>>,
}

impl<'s, T: Eq + Hash> Matcher<'s, T> {
    fn new(a: &'s [T], b: &'s [T]) -> Self {
        let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
        for (j, item) in b.iter().enumerate() {
            b2j.entry(item).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest common contiguous run in `a[alo..ahi]` and `b[blo..bhi]`.
    /// Ties resolve to the smallest `a` start, then the smallest `b` start.
    fn longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let mut best = Block {
            a: alo,
            b: blo,
            size: 0,
        };
        // j2len[j] = length of the match ending at a[i-1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best.size {
                        best = Block {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next;
        }
        best
    }

    /// Non-overlapping matching blocks in increasing order, adjacent blocks
    /// merged, terminated by a zero-size sentinel at the sequence ends.
    fn matching_blocks(&self) -> Vec<Block> {
        let mut found = vec![];
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                pending.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            found.push(m);
        }
        found.sort();

        let mut merged: Vec<Block> = vec![];
        for block in found {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(Block {
            a: self.a.len(),
            b: self.b.len(),
            size: 0,
        });
        merged
    }
}

/// Aligns two sequences by recursive longest-matching-block search.
///
/// The returned ops partition `0..original.len()` and `0..rewritten.len()`
/// in increasing order. Two empty inputs give no ops.
pub fn align<T: Eq + Hash>(original: &[T], rewritten: &[T]) -> Vec<AlignmentOp> {
    let matcher = Matcher::new(original, rewritten);
    let mut ops = vec![];
    let (mut i, mut j) = (0usize, 0usize);

    for block in matcher.matching_blocks() {
        let tag = match (i < block.a, j < block.b) {
            (true, true) => Some(OpTag::Replace),
            (true, false) => Some(OpTag::Delete),
            (false, true) => Some(OpTag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            ops.push(AlignmentOp {
                tag,
                original: i..block.a,
                rewritten: j..block.b,
            });
        }
        i = block.a + block.size;
        j = block.b + block.size;
        if block.size > 0 {
            ops.push(AlignmentOp {
                tag: OpTag::Equal,
                original: block.a..i,
                rewritten: block.b..j,
            });
        }
    }
    ops
}

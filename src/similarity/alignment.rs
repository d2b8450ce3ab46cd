//! Needleman–Wunsch alignment score with arbitrary substitution costs
//!
//! The same two-row DP shape as the bounded Levenshtein, but cells are signed
//! words and the per-character cost comes from a caller-provided 256×256
//! matrix, with a single gap penalty for insertions and deletions. Costs may
//! be negative, so the score is not monotone along a row and no bound or
//! early exit applies.

use crate::bits::min3;
use crate::error::{check_scratch, Result};

/// Flat 256×256 substitution-cost matrix, indexed as `subs[a * 256 + b]`.
///
/// Typing the matrix as a fixed-size array makes the 65,536-entry
/// precondition a compile-time fact instead of a runtime contract.
pub type SubstitutionCosts = [i8; 65536];

/// Build a substitution matrix from a per-pair cost function.
///
/// Intended for setting up the usual bioinformatics matrices once, outside
/// any hot path; the result is a plain boxed array the caller owns.
pub fn substitution_costs_from_fn(cost: impl Fn(u8, u8) -> i8) -> Box<SubstitutionCosts> {
    let mut subs = vec![0i8; 65536].into_boxed_slice();
    for a in 0..256usize {
        for b in 0..256usize {
            subs[a * 256 + b] = cost(a as u8, b as u8);
        }
    }
    // The length is 65536 by construction.
    subs.try_into().unwrap()
}

/// Minimum scratch-buffer size in bytes for [`alignment_score`] on inputs of
/// the given lengths. Includes one word of alignment slack.
pub fn alignment_score_memory_needed(_a_length: usize, b_length: usize) -> usize {
    (b_length + b_length + 2 + 1) * std::mem::size_of::<isize>()
}

/// Alignment score between `a` and `b` under `gap` and `subs` costs.
///
/// Degenerate inputs short-circuit: an empty side yields the other side's
/// length as the score (the all-gaps row of the DP with a unit gap,
/// regardless of `gap`). `scratch` must hold at least
/// [`alignment_score_memory_needed`]`(a.len(), b.len())` bytes.
pub fn alignment_score_serial(
    a: &[u8],
    b: &[u8],
    gap: i8,
    subs: &SubstitutionCosts,
    scratch: &mut [u8],
) -> Result<isize> {
    if a.is_empty() {
        return Ok(b.len() as isize);
    }
    if b.is_empty() {
        return Ok(a.len() as isize);
    }

    check_scratch(
        scratch.len(),
        alignment_score_memory_needed(a.len(), b.len()),
    )?;

    let width = b.len() + 1;
    let gap = gap as isize;
    // The sizing query reserved slack for this realignment.
    let (_, cells, _) = unsafe { scratch.align_to_mut::<isize>() };
    let (previous, rest) = cells.split_at_mut(width);
    let current = &mut rest[..width];
    let (mut previous, mut current) = (previous, current);

    for (distance, cell) in previous.iter_mut().enumerate() {
        *cell = distance as isize;
    }

    for (idx_a, &byte_a) in a.iter().enumerate() {
        current[0] = (idx_a + 1) as isize;
        let row_costs = &subs[byte_a as usize * 256..byte_a as usize * 256 + 256];

        for (idx_b, &byte_b) in b.iter().enumerate() {
            let cost_deletion = previous[idx_b + 1] + gap;
            let cost_insertion = current[idx_b] + gap;
            let cost_substitution = previous[idx_b] + row_costs[byte_b as usize] as isize;
            current[idx_b + 1] = min3(cost_deletion, cost_insertion, cost_substitution);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    Ok(previous[b.len()])
}

/// Alignment score using the best backend compiled in.
#[inline]
pub fn alignment_score(
    a: &[u8],
    b: &[u8],
    gap: i8,
    subs: &SubstitutionCosts,
    scratch: &mut [u8],
) -> Result<isize> {
    alignment_score_serial(a, b, gap, subs, scratch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::levenshtein::{levenshtein_memory_needed, levenshtein_serial};

    fn unit_costs() -> Box<SubstitutionCosts> {
        substitution_costs_from_fn(|a, b| if a == b { 0 } else { 1 })
    }

    fn score(a: &[u8], b: &[u8], gap: i8, subs: &SubstitutionCosts) -> isize {
        let mut scratch = vec![0u8; alignment_score_memory_needed(a.len(), b.len())];
        alignment_score_serial(a, b, gap, subs, &mut scratch).unwrap()
    }

    #[test]
    fn test_unit_costs_reduce_to_levenshtein() {
        let subs = unit_costs();
        let pairs: [(&[u8], &[u8]); 5] = [
            (b"kitten", b"sitting"),
            (b"sunday", b"saturday"),
            (b"abc", b"abc"),
            (b"abc", b"xyz"),
            (b"gumbo", b"gambol"),
        ];
        for (a, b) in pairs {
            let mut scratch = vec![0u8; levenshtein_memory_needed(a.len(), b.len())];
            let expected = levenshtein_serial(a, b, &mut scratch, usize::MAX).unwrap();
            assert_eq!(
                score(a, b, 1, &subs),
                expected as isize,
                "a={:?} b={:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_empty_inputs_short_circuit() {
        let subs = unit_costs();
        assert_eq!(score(b"", b"abcd", 1, &subs), 4);
        assert_eq!(score(b"abc", b"", 1, &subs), 3);
        assert_eq!(score(b"", b"", 1, &subs), 0);
    }

    #[test]
    fn test_gap_penalty_scales_indels() {
        let subs = unit_costs();
        // Pure insertion of three characters.
        assert_eq!(score(b"abc", b"abcxyz", 2, &subs), 6);
        assert_eq!(score(b"abc", b"abcxyz", 3, &subs), 9);
    }

    #[test]
    fn test_negative_costs_reward_matches() {
        // A match bonus of -1 makes identical strings score negative.
        let subs = substitution_costs_from_fn(|a, b| if a == b { -1 } else { 2 });
        assert_eq!(score(b"acgt", b"acgt", 3, &subs), -4);
        // One mismatch in the middle: min(substitute at 2, gaps at 3+3).
        assert_eq!(score(b"acgt", b"acxt", 3, &subs), -1);
    }

    #[test]
    fn test_asymmetric_matrix_uses_row_of_a() {
        // cost(a_byte, b_byte) only: make 'a'->'b' cheap but 'b'->'a' dear.
        let subs = substitution_costs_from_fn(|a, b| match (a, b) {
            (b'a', b'b') => 0,
            (b'b', b'a') => 5,
            (x, y) if x == y => 0,
            _ => 1,
        });
        assert_eq!(score(b"a", b"b", 10, &subs), 0);
        assert_eq!(score(b"b", b"a", 2, &subs), 4); // two gaps beat the dear substitution
    }

    #[test]
    fn test_scratch_validation() {
        let subs = unit_costs();
        let mut tiny = [0u8; 8];
        assert!(alignment_score_serial(b"abc", b"abd", 1, &subs, &mut tiny).is_err());
    }
}

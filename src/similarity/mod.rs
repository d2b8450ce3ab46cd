//! String similarity: bounded edit distance and weighted alignment scoring
//!
//! Both operations are two-row dynamic programs over caller-provided scratch
//! memory. Use [`levenshtein`] for plain edit distance with an early-exit
//! bound; use [`alignment_score`] when per-character substitution costs or a
//! non-unit gap penalty matter (fuzzy matching over biological or chemical
//! alphabets, mostly).

pub mod alignment;
pub mod levenshtein;

pub use alignment::{
    alignment_score, alignment_score_memory_needed, alignment_score_serial,
    substitution_costs_from_fn, SubstitutionCosts,
};
pub use levenshtein::{levenshtein, levenshtein_memory_needed, levenshtein_serial};

//! # Bytelanes: SWAR Byte-String Primitives and Sequence Sorting
//!
//! This crate provides high-performance primitives for byte-string processing
//! in data-intensive workloads: columnar engines, search indexes, and
//! bioinformatics pipelines. The serial engine beats standard-library
//! equivalents on modern CPUs by treating a 64-bit register as eight byte
//! lanes (SWAR), and the whole operation set is shaped so vendor vector
//! backends can slot in behind the same signatures.
//!
//! ## Key Features
//!
//! - **SWAR Byte Scanning**: branch-light single-byte and short-needle search
//!   processing eight haystack bytes per load
//! - **Bitap Matching**: Shift-Or exact search with 8/16/64-bit state words,
//!   plus a prefix-verify scheme for longer needles
//! - **Comparison Primitives**: word-at-a-time equality and lexicographic
//!   ordering with big-endian reinterpretation
//! - **Short-String Hashing**: a MurmurHash3-derived two-lane 64-bit hash
//! - **Bounded Similarity**: Levenshtein distance with early exit and
//!   Needleman–Wunsch scoring over caller-provided scratch memory
//! - **Sequence Sorting**: hybrid radix/comparison sorting over an
//!   indirection vector, leaving the strings themselves untouched
//! - **Zero Allocation**: every buffer is caller-owned; scratch sizes come
//!   from sizing queries
//!
//! ## Quick Start
//!
//! ```rust
//! use bytelanes::{
//!     find, hash, levenshtein, levenshtein_memory_needed, order, ByteStr, Sequence,
//! };
//!
//! // Substring search with the SWAR engine.
//! assert_eq!(find(b"abracadabra", b"cad"), Some(4));
//!
//! // Zero-copy views route through the same primitives.
//! let s = ByteStr::from_str("abracadabra");
//! assert_eq!(s.rfind_byte(b'a'), Some(10));
//! println!("hash: {:x}", hash(s.as_bytes()));
//!
//! // Bounded edit distance over caller-provided scratch.
//! let mut scratch = vec![0u8; levenshtein_memory_needed(6, 7)];
//! let distance = levenshtein(b"kitten", b"sitting", &mut scratch, 10).unwrap();
//! assert_eq!(distance, 3);
//!
//! // Sort a sequence of strings through its indirection vector.
//! let strings: Vec<&[u8]> = vec![b"banana", b"apple", b"cherry", b"apricot"];
//! let mut order_vec = vec![0u64; strings.len()];
//! let mut sequence = Sequence::with_identity(strings.as_slice(), &mut order_vec).unwrap();
//! sequence.sort();
//! assert_eq!(sequence.order(), &[1, 3, 0, 2]);
//! # let _ = order(b"a", b"b");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod ascii;
pub mod bits;
pub mod bytestr;
pub mod compare;
pub mod error;
pub mod hash;
pub mod scan;
pub mod sequence;
pub mod similarity;
pub mod system;

// Re-export core types
pub use bytestr::ByteStr;
pub use error::{BytelanesError, Result};

// Re-export the scan operation set
pub use scan::{
    find, find_byte, find_serial, prefix_accepted, prefix_rejected, rfind, rfind_byte,
    rfind_serial,
};

// Re-export comparison and hashing
pub use compare::{equal, mismatch_first, mismatch_last, order, order_terminated};
pub use hash::{hash, hash_serial, BytesHash, BytesHasher};

// Re-export similarity scoring
pub use similarity::{
    alignment_score, alignment_score_memory_needed, levenshtein, levenshtein_memory_needed,
    substitution_costs_from_fn, SubstitutionCosts,
};

// Re-export the sequence engine
pub use sequence::{Sequence, SortConfig, StringSource, U32Tape, U64Tape};

// Re-export dispatch plumbing
pub use system::{get_cpu_features, BackendTier, CpuFeatures};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if any vector backend could be selected on this host.
///
/// The serial engine is always available and observably identical; this only
/// reports whether a vendor backend would have wider registers to work with.
pub fn has_simd_support() -> bool {
    #[cfg(feature = "simd")]
    {
        !matches!(
            system::select_tier(system::get_cpu_features()),
            BackendTier::Serial
        )
    }
    #[cfg(not(feature = "simd"))]
    {
        false
    }
}

/// Initialize the library (currently just logs the version).
pub fn init() {
    log::debug!("initializing bytelanes v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_simd_support_reporting() {
        // Must never panic, whatever the host.
        let _ = has_simd_support();
    }

    #[test]
    fn test_re_exports() {
        let _view = ByteStr::from_str("test");
        let _err: BytelanesError = BytelanesError::invalid_data("test");
        assert_eq!(find(b"haystack", b"stack"), Some(3));
        assert_eq!(hash(b"abc"), hash(b"abc"));
        assert!(std::any::type_name::<Result<()>>().contains("BytelanesError"));
    }

    #[test]
    fn test_multiple_init_calls() {
        init();
        init();
        init();
    }
}

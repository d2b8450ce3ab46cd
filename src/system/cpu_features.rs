//! Runtime CPU feature detection
//!
//! A one-time snapshot of the vector extensions the host offers, shared
//! through a `OnceLock`. The serial SWAR engine never consults this — its
//! results are identical everywhere — but a dispatcher layering vendor
//! backends (AVX-512, AVX2, NEON) on top of the `*_serial` entry points uses
//! the snapshot to pick the widest one available.

use std::sync::OnceLock;

/// Snapshot of the CPU features relevant to byte-string kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuFeatures {
    /// SSE4.2 string instructions (x86_64)
    pub has_sse42: bool,
    /// AVX2 256-bit integer vectors (x86_64)
    pub has_avx2: bool,
    /// AVX-512BW byte/word masks (x86_64)
    pub has_avx512bw: bool,
    /// NEON 128-bit vectors (aarch64)
    pub has_neon: bool,
    /// CRC32 instructions (aarch64)
    pub has_crc32: bool,
}

impl CpuFeatures {
    fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self {
                has_sse42: std::arch::is_x86_feature_detected!("sse4.2"),
                has_avx2: std::arch::is_x86_feature_detected!("avx2"),
                has_avx512bw: std::arch::is_x86_feature_detected!("avx512bw"),
                has_neon: false,
                has_crc32: false,
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            Self {
                has_sse42: false,
                has_avx2: false,
                has_avx512bw: false,
                has_neon: std::arch::is_aarch64_feature_detected!("neon"),
                has_crc32: std::arch::is_aarch64_feature_detected!("crc"),
            }
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            Self {
                has_sse42: false,
                has_avx2: false,
                has_avx512bw: false,
                has_neon: false,
                has_crc32: false,
            }
        }
    }
}

/// Implementation tiers a dispatcher can select between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendTier {
    /// Portable SWAR engine, always available
    Serial,
    /// AVX2 vendor backend
    Avx2,
    /// AVX-512 vendor backend (nightly only)
    #[cfg(feature = "avx512")]
    Avx512,
    /// NEON vendor backend
    Neon,
}

/// Pick the widest tier the host supports. Behavior is identical across
/// tiers; only throughput differs.
pub fn select_tier(features: &CpuFeatures) -> BackendTier {
    #[cfg(feature = "avx512")]
    if features.has_avx512bw {
        return BackendTier::Avx512;
    }
    if features.has_avx2 {
        return BackendTier::Avx2;
    }
    if features.has_neon {
        return BackendTier::Neon;
    }
    BackendTier::Serial
}

static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// The process-wide CPU feature snapshot, detected on first use.
pub fn get_cpu_features() -> &'static CpuFeatures {
    CPU_FEATURES.get_or_init(|| {
        let features = CpuFeatures::detect();
        log::debug!("detected cpu features: {:?}", features);
        features
    })
}

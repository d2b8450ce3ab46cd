//! Host introspection used by the dispatch layer

pub mod cpu_features;

pub use cpu_features::{get_cpu_features, select_tier, BackendTier, CpuFeatures};

//! URL normalization and cache-key derivation
//!
//! Candidate links go through [`normalize_link`] to become deduplication
//! keys; raw URLs go through [`cache_filename`] to become on-disk names.

mod filename;
mod normalize;

pub use filename::cache_filename;
pub use normalize::{normalize_link, strip_trailing_slash};

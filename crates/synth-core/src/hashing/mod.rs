//! Serialización canónica y fingerprints del bundle.

mod canonical_json;
mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};

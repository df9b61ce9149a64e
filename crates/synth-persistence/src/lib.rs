//! synth-persistence: backend durable del `SessionStore`.
//!
//! Implementa el store respaldado por filesystem (`DirectoryStore`); el
//! contrato y el store en memoria viven en `synth-core`.

pub mod fs_store;

pub use fs_store::DirectoryStore;

//! Synthflow Rust Library
//!
//! Este crate actúa como fachada del workspace:
//! - Reexporta el núcleo (`synth_core`): sesión, stores, modelos y errores.
//! - Reexporta el backend durable (`synth_persistence::DirectoryStore`).
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub use synth_core::{ArtifactDraft, ArtifactKind, Assembly, BuildManifest, BuildStep, InMemoryStore, Manifest,
                     MetadataEntry, MissingContext, RuntimeInfo, SessionOptions, SessionStore, SynthError,
                     SynthSession};
pub use synth_persistence::DirectoryStore;

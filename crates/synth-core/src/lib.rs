//! synth-core: núcleo neutral de staging y ensamblado de síntesis.
//!
//! Este crate expone las piezas centrales del pase de síntesis:
//! - `store` define el contrato `SessionStore` (write-once + lock advisory)
//!   junto con la implementación en memoria.
//! - `session` orquesta el registro de artifacts y build steps y escribe el
//!   manifest determinista al cerrar.
//! - `model` contiene los documentos serializables (Artifact, BuildStep,
//!   Manifest).
//! - `hashing` serializa JSON en forma canónica para fingerprints estables.
//!
//! Los backends durables (filesystem) viven en `synth-persistence`.
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod session;
pub mod store;

pub use errors::SynthError;
pub use model::{ArtifactDraft, ArtifactKind, BuildManifest, BuildStep, Manifest, MetadataEntry, MissingContext, RuntimeInfo};
pub use session::{Assembly, SessionOptions, SynthSession};
pub use store::{InMemoryStore, SessionStore};

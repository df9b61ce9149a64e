//! Modelos serializables (ArtifactDraft, BuildStep, Manifest,...)

pub mod artifact;
pub mod build_step;
pub mod manifest;

pub use artifact::{ArtifactDraft, ArtifactKind, MetadataEntry, MissingContext};
pub use build_step::BuildStep;
pub use manifest::{manifest_fingerprint, BuildManifest, Manifest, RuntimeInfo};

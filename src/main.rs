//! Demo de un pase de síntesis completo contra un directorio temporal.
//!
//! Hace el papel del driver top-level: abre un store, deja que dos
//! "producers" registren sus artifacts y archivos, cierra la sesión y
//! muestra el bundle resultante.

use serde_json::json;
use synth_core::model::manifest_fingerprint;
use synth_core::{ArtifactDraft, ArtifactKind, BuildStep, SessionStore, SynthSession};
use synth_persistence::DirectoryStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let staging = tempfile::tempdir()?;
    let store = DirectoryStore::open(staging.path())?;
    let mut session = SynthSession::new(store);

    // Producer 1: una plantilla con su archivo de cuerpo
    session.assembly()
           .write_json("stack-a.tmpl.json", &json!({ "recursos": { "cola": { "tipo": "queue" } } }))?;
    let mut stack_a = ArtifactDraft::new(ArtifactKind::Template, "scheme://cuenta-a/region-1");
    stack_a.properties.insert("templateFile".into(), json!("stack-a.tmpl.json"));
    session.add_artifact("stack-a", stack_a)?;

    // Producer 2: artifact genérico que depende del primero
    let mut informe = ArtifactDraft::new(ArtifactKind::Generic, "scheme://cuenta-a/region-1");
    informe.dependencies.push("stack-a".into());
    session.add_artifact("informe", informe)?;

    session.add_build_step("empaquetar",
                           BuildStep::new("archive", json!({ "destino": "bundle.zip" }).as_object()
                                                                                       .cloned()
                                                                                       .unwrap_or_default()))?;

    let manifest = session.close()?;
    println!("Artifacts sintetizados: {}", manifest.artifacts.len());
    println!("Fingerprint del bundle: {}", manifest_fingerprint(&manifest)?);
    println!("Contenido del staging: {:?}", session.assembly().list()?);
    println!("Store bloqueado: {}", session.store().is_locked());
    Ok(())
}

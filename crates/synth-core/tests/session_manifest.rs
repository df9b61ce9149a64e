use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use synth_core::constants::{BUILD_STEPS_PATH, MANIFEST_PATH};
use synth_core::model::manifest_fingerprint;
use synth_core::{ArtifactDraft, ArtifactKind, BuildStep, InMemoryStore, MetadataEntry, MissingContext, SessionOptions,
                 SessionStore, SynthError, SynthSession};

fn deterministic_session() -> SynthSession<InMemoryStore> {
    // runtime off para poder comparar documentos byte a byte
    SynthSession::with_options(InMemoryStore::new(), SessionOptions { emit_runtime_info: false })
}

fn manifest_value(session: &mut SynthSession<InMemoryStore>) -> Value {
    session.assembly().read_json(MANIFEST_PATH).expect("manifest legible")
}

#[test]
fn duplicate_artifact_id_is_rejected() {
    let mut session = deterministic_session();
    session.add_artifact("a", ArtifactDraft::new(ArtifactKind::Template, "scheme://x/y"))
           .unwrap();
    let err = session.add_artifact("a", ArtifactDraft::new(ArtifactKind::Generic, "scheme://x/z"))
                     .unwrap_err();
    assert!(matches!(err, SynthError::DuplicateArtifact(_)), "esperaba DuplicateArtifact: {err}");
}

#[test]
fn duplicate_build_step_id_is_rejected() {
    let mut session = deterministic_session();
    session.add_build_step("copy", BuildStep::new("copy", Map::new())).unwrap();
    let err = session.add_build_step("copy", BuildStep::new("copy", Map::new())).unwrap_err();
    assert!(matches!(err, SynthError::DuplicateBuildStep(_)));
}

#[test]
fn empty_session_emits_only_manifest_with_empty_artifacts() {
    let mut session = deterministic_session();
    session.close().unwrap();

    let doc = manifest_value(&mut session);
    assert_eq!(doc, json!({ "version": "1.0", "artifacts": {} }));
    // sin steps no hay build.json: el manifest es el único archivo emitido
    assert_eq!(session.assembly().list().unwrap(), vec![MANIFEST_PATH.to_string()]);
}

#[test]
fn minimal_artifact_record_omits_empty_optionals() {
    let mut session = deterministic_session();
    let mut draft = ArtifactDraft::new(ArtifactKind::Template, "scheme://x/y");
    draft.properties.insert("templateFile".into(), json!("a.tmpl.json"));
    session.add_artifact("a", draft).unwrap();
    session.close().unwrap();

    let doc = manifest_value(&mut session);
    // igualdad exacta: ni dependencies, ni metadata, ni missing presentes
    assert_eq!(doc["artifacts"]["a"],
               json!({ "type": "template",
                       "environment": "scheme://x/y",
                       "properties": { "templateFile": "a.tmpl.json" } }));
}

#[test]
fn optional_field_presence_is_independent_per_artifact() {
    let mut session = deterministic_session();

    let mut rich = ArtifactDraft::new(ArtifactKind::Template, "scheme://x/y");
    rich.dependencies.push("b".into());
    rich.metadata.insert("raiz/hijo".into(),
                         vec![MetadataEntry { kind: "aviso".into(), data: Some(json!("texto")) }]);
    rich.missing.insert("vpc".into(),
                        MissingContext { provider: "red".into(),
                                         props: json!({ "cuenta": "123" }).as_object().unwrap().clone() });
    session.add_artifact("a", rich).unwrap();
    session.add_artifact("b", ArtifactDraft::new(ArtifactKind::Generic, "scheme://x/z")).unwrap();
    session.close().unwrap();

    let doc = manifest_value(&mut session);
    assert_eq!(doc["artifacts"]["a"],
               json!({ "type": "template",
                       "environment": "scheme://x/y",
                       "dependencies": ["b"],
                       "metadata": { "raiz/hijo": [{ "type": "aviso", "data": "texto" }] },
                       "missing": { "vpc": { "provider": "red", "props": { "cuenta": "123" } } } }));
    assert_eq!(doc["artifacts"]["b"], json!({ "type": "generic", "environment": "scheme://x/z" }));
}

#[test]
fn build_steps_document_reflects_registered_steps() {
    let mut session = deterministic_session();
    let params = json!({ "destino": "out/" }).as_object().unwrap().clone();
    session.add_build_step("copiar", BuildStep::new("copy", params)).unwrap();
    session.close().unwrap();

    let doc: Value = session.assembly().read_json(BUILD_STEPS_PATH).unwrap();
    assert_eq!(doc, json!({ "steps": { "copiar": { "type": "copy", "parameters": { "destino": "out/" } } } }));
}

#[test]
fn double_close_fails_and_does_not_rewrite() {
    let mut session = deterministic_session();
    session.add_artifact("a", ArtifactDraft::new(ArtifactKind::Generic, "scheme://x/y")).unwrap();
    session.close().unwrap();
    let before = session.assembly().read_file(MANIFEST_PATH).unwrap();

    let err = session.close().unwrap_err();
    assert!(matches!(err, SynthError::AlreadySynthesized));
    assert_eq!(session.assembly().read_file(MANIFEST_PATH).unwrap(), before);
}

#[test]
fn session_is_readable_but_not_writable_after_close() {
    let mut session = deterministic_session();
    session.assembly().write_file("plantilla.json", b"{}").unwrap();
    session.close().unwrap();
    assert!(session.is_closed());
    assert!(session.store().is_locked());

    assert_eq!(session.assembly().read_file("plantilla.json").unwrap(), b"{}");
    let err = session.assembly().write_file("tarde.json", b"{}").unwrap_err();
    assert!(matches!(err, SynthError::Locked));
}

#[test]
fn manifest_readback_matches_returned_document() {
    let mut session = deterministic_session();
    session.add_artifact("a", ArtifactDraft::new(ArtifactKind::Template, "scheme://x/y")).unwrap();
    // antes del cierre el manifest aún no existe
    assert!(matches!(session.manifest().unwrap_err(), SynthError::NotFound(_)));

    let written = session.close().unwrap();
    assert_eq!(session.manifest().unwrap(), written);
}

#[test]
fn fingerprint_is_stable_and_ignores_runtime() {
    let mut with_runtime = SynthSession::with_options(InMemoryStore::new(),
                                                      SessionOptions { emit_runtime_info: true });
    let mut without = deterministic_session();
    for s in [&mut with_runtime, &mut without] {
        s.add_artifact("a", ArtifactDraft::new(ArtifactKind::Template, "scheme://x/y")).unwrap();
    }
    let m1 = with_runtime.close().unwrap();
    let m2 = without.close().unwrap();

    assert!(m1.runtime.is_some());
    assert!(m2.runtime.is_none());
    assert_eq!(manifest_fingerprint(&m1).unwrap(), manifest_fingerprint(&m2).unwrap());
}

#[test]
fn insertion_order_is_preserved_in_manifest() {
    let mut session = deterministic_session();
    for id in ["z", "a", "m"] {
        session.add_artifact(id, ArtifactDraft::new(ArtifactKind::Generic, "scheme://x/y")).unwrap();
    }
    let manifest = session.close().unwrap();
    let ids: Vec<&String> = manifest.artifacts.keys().collect();
    assert_eq!(ids, vec!["z", "a", "m"]);

    let expected: IndexMap<String, ArtifactDraft> = manifest.artifacts.clone();
    // la relectura conserva el mismo orden
    assert_eq!(session.manifest().unwrap().artifacts, expected);
}

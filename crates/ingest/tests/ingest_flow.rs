use petrilink_codec::{decode_base64, digest, encode_base64, pack_named_file, unpack_named_file};
use petrilink_ingest::{
    ingest_model, ingest_snippet, resolve_snippet, Links, MODEL_FILE, SNIPPET_FILE,
};
use petrilink_store::{Kind, Store};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use url::Url;

const MODEL_JSON: &str = r#"{"modelType":"petriNet","places":{"foo":{"offset":0,"x":480,"y":320,"initial":1,"capacity":3}}}"#;

fn sandbox_url_embedding(name: &str, content: &[u8]) -> String {
    let packed = pack_named_file(name, content).expect("pack");
    Url::parse_with_params(
        "https://pflow.example/sandbox/",
        &[("z", encode_base64(&packed))],
    )
    .expect("url")
    .into()
}

fn open_store(dir: &TempDir) -> Store {
    Store::open(dir.path().join("petrilink.db")).expect("open store")
}

#[test]
fn model_url_ingests_into_model_record() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let url = sandbox_url_embedding(MODEL_FILE, MODEL_JSON.as_bytes());

    let ingested = ingest_model(&store, &url, "https://pflow.example/", "http://localhost:8083")
        .expect("no store failure")
        .expect("artifact embedded");

    assert!(ingested.created);
    assert_eq!(ingested.cid(), digest(MODEL_JSON.as_bytes()));
    assert_eq!(ingested.record.title, "Untitled");
    assert_eq!(
        ingested.links,
        Links::build("http://localhost:8083", ingested.cid())
    );

    // The persisted payload round-trips through extraction.
    let zipped = decode_base64(&ingested.record.base64_zipped).expect("base64 payload");
    assert_eq!(
        unpack_named_file(&zipped, MODEL_FILE).as_deref(),
        Some(MODEL_JSON.as_bytes())
    );
}

#[test]
fn model_only_url_ingests_as_wrapped_snippet() {
    // Spec scenario: a URL embedding only model.json must still ingest on
    // the sandbox path, as `const declaration = <json>`.
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let url = sandbox_url_embedding(MODEL_FILE, MODEL_JSON.as_bytes());

    let expected = format!("const declaration = {MODEL_JSON}");
    assert_eq!(
        resolve_snippet(&url).as_deref(),
        Some(expected.as_bytes())
    );

    let ingested = ingest_snippet(&store, &url, "https://pflow.example/", "http://localhost:8083")
        .expect("no store failure")
        .expect("fallback artifact embedded");
    assert_eq!(ingested.cid(), digest(expected.as_bytes()));

    let zipped = decode_base64(&ingested.record.base64_zipped).expect("base64 payload");
    assert_eq!(
        unpack_named_file(&zipped, SNIPPET_FILE).as_deref(),
        Some(expected.as_bytes())
    );
}

#[test]
fn repeat_ingestion_reuses_the_record() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let url = sandbox_url_embedding(SNIPPET_FILE, b"const declaration = {};");

    let first = ingest_snippet(&store, &url, "", "http://localhost:8083")
        .expect("no store failure")
        .expect("embedded");
    let second = ingest_snippet(&store, &url, "", "http://localhost:8083")
        .expect("no store failure")
        .expect("embedded");

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.record, second.record);
    assert_eq!(store.count(Kind::Snippet).expect("count"), 1);
}

#[test]
fn url_without_artifact_ingests_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    let stray = sandbox_url_embedding("other.txt", b"unrelated");
    for url in [
        "https://pflow.example/sandbox/",
        "https://pflow.example/sandbox/?z=",
        stray.as_str(),
    ] {
        assert!(ingest_model(&store, url, "", "http://localhost:8083")
            .expect("no store failure")
            .is_none());
        assert!(ingest_snippet(&store, url, "", "http://localhost:8083")
            .expect("no store failure")
            .is_none());
    }
    assert_eq!(store.count(Kind::Model).expect("count"), 0);
    assert_eq!(store.count(Kind::Snippet).expect("count"), 0);
}

#[test]
fn model_and_snippet_paths_share_no_rows() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let url = sandbox_url_embedding(MODEL_FILE, MODEL_JSON.as_bytes());

    let as_model = ingest_model(&store, &url, "", "http://localhost:8083")
        .expect("no store failure")
        .expect("embedded");
    let as_snippet = ingest_snippet(&store, &url, "", "http://localhost:8083")
        .expect("no store failure")
        .expect("embedded");

    // Different artifact kinds derive different CIDs (the snippet is the
    // wrapped form) and land in different tables.
    assert_ne!(as_model.cid(), as_snippet.cid());
    assert_eq!(store.count(Kind::Model).expect("count"), 1);
    assert_eq!(store.count(Kind::Snippet).expect("count"), 1);
}

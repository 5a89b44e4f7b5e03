use crate::error::Result;
use crate::events::emit;
use crate::links::Links;
use crate::normalize::{resolve_model, resolve_snippet, MODEL_FILE, SNIPPET_FILE};
use petrilink_store::{Kind, Record, RecordMeta, Store};
use serde_json::json;

/// Outcome of a successful ingestion.
#[derive(Debug, Clone)]
pub struct Ingested {
    pub record: Record,
    /// Whether this call inserted the row (false: dedup hit).
    pub created: bool,
    pub links: Links,
}

impl Ingested {
    pub fn cid(&self) -> &str {
        &self.record.cid
    }
}

/// Ingest a petri-net model embedded in `url`, if one is present.
///
/// `Ok(None)` means no valid artifact was embedded; the caller renders the
/// default editor state. Store failures are the only errors this returns,
/// and they belong to the request that hit them.
pub fn ingest_model(store: &Store, url: &str, referrer: &str, base_url: &str) -> Result<Option<Ingested>> {
    let Some(canonical) = resolve_model(url) else {
        return Ok(None);
    };
    let meta = RecordMeta {
        title: "Untitled".into(),
        referrer: referrer.into(),
        ..RecordMeta::default()
    };
    let (record, created) = store.get_or_create(Kind::Model, &canonical, MODEL_FILE, &meta)?;
    let links = Links::build(base_url, &record.cid);
    emit(
        "modelUnzipped",
        &json!({
            "id": record.id,
            "cid": record.cid,
            "link": links.page,
            "referrer": referrer,
        }),
    );
    Ok(Some(Ingested { record, created, links }))
}

/// Ingest a declaration snippet embedded in `url`, accepting the
/// model-JSON fallback form.
pub fn ingest_snippet(store: &Store, url: &str, referrer: &str, base_url: &str) -> Result<Option<Ingested>> {
    let Some(canonical) = resolve_snippet(url) else {
        return Ok(None);
    };
    let meta = RecordMeta::with_referrer(referrer);
    let (record, created) = store.get_or_create(Kind::Snippet, &canonical, SNIPPET_FILE, &meta)?;
    let links = Links::build(base_url, &record.cid);
    emit(
        "sandboxUnzipped",
        &json!({
            "id": record.id,
            "cid": record.cid,
            "link": links.sandbox_page,
            "referrer": referrer,
        }),
    );
    Ok(Some(Ingested { record, created, links }))
}

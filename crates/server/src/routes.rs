use crate::options::Options;
use crate::svg;
use crate::templates;
use axum::extract::{OriginalUri, Path, State};
use axum::http::header::{CONTENT_TYPE, REFERER};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use petrilink_codec::{decode_base64, unpack_named_file};
use petrilink_ingest::{ingest_model, ingest_snippet, MODEL_FILE, SNIPPET_FILE};
use petrilink_store::{Kind, Record, Store};
use std::sync::Arc;

pub struct AppState {
    pub store: Store,
    pub options: Options,
}

pub type SharedState = Arc<AppState>;

pub fn router(state: SharedState) -> Router {
    let mut router = Router::new()
        .route("/", get(|| async { Redirect::to("/p/") }))
        .route("/p/", get(app_page_ingest))
        .route("/p/:cid/", get(app_page))
        .route("/img/:name", get(svg_handler))
        .route("/src/:name", get(json_handler));
    if state.options.use_sandbox {
        router = router
            .route("/sandbox/", get(sandbox_ingest))
            .route("/sandbox/:cid/", get(sandbox_page));
    }
    router.with_state(state)
}

fn referrer(headers: &HeaderMap) -> String {
    headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// `/p/` without a CID: ingest whatever the request URL embeds, then
/// redirect to the canonical form. No embedded artifact renders the
/// default editor; only a storage failure is a 500.
async fn app_page_ingest(
    State(state): State<SharedState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Response {
    match ingest_model(
        &state.store,
        &uri.to_string(),
        &referrer(&headers),
        &state.options.base_url,
    ) {
        Ok(Some(ingested)) => Redirect::to(&format!("/p/{}/", ingested.cid())).into_response(),
        Ok(None) => Html(templates::index_page(None)).into_response(),
        Err(err) => {
            log::error!("Model ingestion failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn app_page(State(state): State<SharedState>, Path(cid): Path<String>) -> Response {
    match state.store.get_by_cid(Kind::Model, &cid) {
        Ok(Some(record)) => Html(templates::index_page(Some((
            record.cid.as_str(),
            record.base64_zipped.as_str(),
        ))))
        .into_response(),
        // Unknown CID still gets the editor, just empty.
        Ok(None) => Html(templates::index_page(None)).into_response(),
        Err(err) => {
            log::error!("Model lookup failed for {cid}: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn svg_handler(State(state): State<SharedState>, Path(name): Path<String>) -> Response {
    let Some(cid) = name.strip_suffix(".svg") else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(json) = stored_model_json(&state.store, cid) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match svg::render_model(&json) {
        Some(body) => ([(CONTENT_TYPE, "image/svg+xml")], body).into_response(),
        None => {
            log::warn!("Stored payload for {cid} is not renderable model JSON");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn json_handler(State(state): State<SharedState>, Path(name): Path<String>) -> Response {
    let Some(cid) = name.strip_suffix(".json") else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match stored_model_json(&state.store, cid) {
        Some(json) => ([(CONTENT_TYPE, "application/json")], json).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn sandbox_ingest(
    State(state): State<SharedState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
) -> Response {
    match ingest_snippet(
        &state.store,
        &uri.to_string(),
        &referrer(&headers),
        &state.options.base_url,
    ) {
        Ok(Some(ingested)) => {
            Redirect::to(&format!("/sandbox/{}/", ingested.cid())).into_response()
        }
        Ok(None) => Html(templates::sandbox_page("")).into_response(),
        Err(err) => {
            log::error!("Snippet ingestion failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn sandbox_page(State(state): State<SharedState>, Path(cid): Path<String>) -> Response {
    let source = match state.store.get_by_cid(Kind::Snippet, &cid) {
        Ok(Some(record)) => unpack_record(&record, SNIPPET_FILE)
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_default(),
        Ok(None) => String::new(),
        Err(err) => {
            log::error!("Snippet lookup failed for {cid}: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    Html(templates::sandbox_page(&source)).into_response()
}

/// Canonical model JSON for a stored model record, unpacked from its
/// transport payload.
fn stored_model_json(store: &Store, cid: &str) -> Option<Vec<u8>> {
    let record = match store.get_by_cid(Kind::Model, cid) {
        Ok(found) => found?,
        Err(err) => {
            log::error!("Model lookup failed for {cid}: {err}");
            return None;
        }
    };
    unpack_record(&record, MODEL_FILE)
}

fn unpack_record(record: &Record, filename: &str) -> Option<Vec<u8>> {
    let zipped = decode_base64(&record.base64_zipped)?;
    unpack_named_file(&zipped, filename)
}

//! Petrilink server
//!
//! Serves the petri-net editor and its content-addressed share links:
//!
//! - `/p/{cid}/` - editor page for a stored model
//! - `/img/{cid}.svg` - rendered diagram
//! - `/src/{cid}.json` - canonical model JSON
//! - `/sandbox/{cid}/` - js sandbox for declaration snippets (opt-in)
//!
//! A request to `/p/` or `/sandbox/` carrying a `?z=` payload ingests the
//! embedded artifact and redirects to its canonical CID route.

use anyhow::Result;
use petrilink_ingest::load_seed_models;
use petrilink_store::Store;
use std::sync::Arc;

mod options;
mod routes;
mod svg;
mod templates;

use options::Options;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::from_env();
    log::info!("DB path: {}", options.db_path);

    let store = Store::open(&options.db_path)?;
    if options.load_examples {
        let inserted = load_seed_models(&store, &options.base_url)?;
        log::info!("Loaded example models ({inserted} new)");
    }
    if options.use_sandbox {
        log::info!("Sandbox enabled");
    }

    let addr = options.listen_addr();
    let state = Arc::new(AppState { store, options });
    let app = routes::router(state);

    log::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

//! # Petrilink Ingest
//!
//! The content-addressable ingestion pipeline.
//!
//! ## Pipeline
//!
//! ```text
//! inbound request URL
//!     │
//!     ├──> extract_from_url (?z= param → base64 → zip entry)
//!     │      └─> embedded bytes, or nothing
//!     │
//!     ├──> resolve_model / resolve_snippet (canonical bytes + fallback)
//!     │
//!     └──> Store::get_or_create (CID dedup)
//!            └─> Links + structured event
//! ```
//!
//! Every step on the extraction side treats malformed attacker-controlled
//! input as "no embedded artifact" (`None`), never as an error. Only
//! storage failures surface as errors, and those belong to the request
//! that hit them.

#![forbid(unsafe_code)]

mod error;
mod events;
mod extract;
mod links;
mod normalize;
mod pipeline;
mod seed;

pub use error::{IngestError, Result};
pub use events::emit;
pub use extract::extract_from_url;
pub use links::Links;
pub use normalize::{resolve_model, resolve_snippet, MODEL_FILE, SNIPPET_FILE};
pub use pipeline::{ingest_model, ingest_snippet, Ingested};
pub use seed::{load_seed_models, SeedModel, SEED_MODELS};

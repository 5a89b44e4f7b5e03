//! # Petrilink Codec
//!
//! Byte-level primitives for content-addressed artifacts.
//!
//! ## Pipeline position
//!
//! ```text
//! canonical bytes
//!     │
//!     ├──> digest()            └─> CID (hex SHA-256)
//!     │
//!     └──> pack_named_file()   └─> single-entry zip (deterministic)
//!            └──> encode_base64()  └─> transport form for `?z=` URLs
//! ```
//!
//! Everything here is pure and synchronous. Unpacking treats malformed
//! input as a normal case (user-supplied URLs) and reports it as `None`,
//! never as an error or a panic.

mod archive;
mod cid;
mod encoding;
mod error;

pub use archive::{pack_named_file, unpack_named_file, MAX_UNPACKED_BYTES};
pub use cid::{digest, Cid};
pub use encoding::{decode_base64, encode_base64};
pub use error::{CodecError, Result};

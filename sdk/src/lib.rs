//! mavgen
//!
//! This crate is what generated dialects depend on.
//!
//! - `Message`, `FieldInfo`, `MessageInfo` and `Dialect` (re-exported from schema)
//! - `generate` for build scripts that produce dialects at compile time

pub use mavgen_schema::{Dialect, FieldInfo, Message, MessageInfo};
pub use mavgen_compiler::{generate, Fetch, FileFetcher, GenerationReport, MavgenError};

pub mod error {
    pub use mavgen_compiler::error::MavgenError;
}

pub mod schema {
    pub use mavgen_schema::{Dialect, FieldInfo, Message, MessageInfo};
}

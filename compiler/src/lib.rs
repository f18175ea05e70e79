//! mavgen-compiler
//!
//! This crate implements:
//!  1) A parser for MAVLink XML dialect definitions (`parse_definition`),
//!  2) Include resolution over files or HTTP (`Resolver`, `Fetch`),
//!  3) Mapping of XML field types to Rust types (`map_definition`),
//!  4) Code generation through a fixed template (`Emitter`),
//!  5) The end-to-end pipeline (`generate`) and its error type (`MavgenError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod traits;
pub mod parser;
pub mod fetch;
pub mod resolver;
pub mod mapper;
pub mod emitter;
pub mod compiler;

pub use compiler::{compile_dialect, generate, package_name, GenerationReport};
pub use emitter::Emitter;
pub use error::MavgenError;
pub use fetch::{fetcher_for, is_remote_address, FileFetcher, HttpFetcher};
pub use parser::parse_definition;
pub use resolver::{resolve_definitions, Resolver};
pub use traits::Fetch;

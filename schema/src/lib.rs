//! Shared pieces of the mavgen toolchain.
//!
//! - [`primitive`] maps MAVLink XML primitive type names to Rust types,
//! - [`naming`] converts MAVLink identifiers into Rust identifiers,
//! - [`message`] holds the descriptors that generated dialects are built from.
//!
//! ```
//! use mavgen_schema::*;
//!
//! struct Heartbeat { status: u8 }
//!
//! impl Message for Heartbeat {
//!     const ID: u32 = 42000;
//!     const NAME: &'static str = "ICAROUS_HEARTBEAT";
//!     const FIELDS: &'static [FieldInfo] = &[FieldInfo::new("status", "status", "uint8_t")];
//!
//!     fn id(&self) -> u32 {
//!         42000
//!     }
//! }
//!
//! const MESSAGES: &[MessageInfo] = &[MessageInfo::of::<Heartbeat>()];
//! const DIALECT: Dialect = Dialect::new("icarous", MESSAGES);
//!
//! assert_eq!(DIALECT.get(42000).map(|m| m.name), Some("ICAROUS_HEARTBEAT"));
//! assert_eq!(Heartbeat { status: 1 }.id(), 42000);
//! ```

pub mod message;
pub mod naming;
pub mod primitive;

pub use message::*;
pub use naming::*;
pub use primitive::*;

/// Pseudo type used by the `HEARTBEAT` message for the protocol version byte.
pub const VERSION_ALIAS: &str = "uint8_t_mavlink_version";

/// The primitive that turns `name[N]` into a bounded string instead of an array.
pub const CHAR_TYPE: &str = "char";

/// MAVLink XML primitive names and the Rust type each one maps to.
pub const PRIMITIVE_TYPES: [(&str, &str); 11] = [
    ("double",   "f64"),
    ("uint64_t", "u64"),
    ("int64_t",  "i64"),
    ("float",    "f32"),
    ("uint32_t", "u32"),
    ("int32_t",  "i32"),
    ("uint16_t", "u16"),
    ("int16_t",  "i16"),
    ("uint8_t",  "u8"),
    ("int8_t",   "i8"),
    ("char",     "String"),
];

/// Returns the Rust type for a primitive, or `None` if the name is unknown.
/// Aliases are not resolved here.
pub fn rust_type(xml_type: &str) -> Option<&'static str> {
    PRIMITIVE_TYPES
        .iter()
        .find(|(name, _)| *name == xml_type)
        .map(|(_, rust)| *rust)
}

/// Rewrites legacy pseudo types to the primitive they stand for.
pub fn normalize_alias(xml_type: &str) -> &str {
    if xml_type == VERSION_ALIAS {
        "uint8_t"
    } else {
        xml_type
    }
}

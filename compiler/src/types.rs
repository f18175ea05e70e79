use serde::Serialize;

/// One parsed XML dialect file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Definition {
    pub address:  String,
    /// Final path segment of `address` (e.g. `common.xml`).
    pub name:     String,
    pub version:  i64,
    pub dialect:  i64,
    pub includes: Vec<String>,
    pub enums:    Vec<Enum>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enum {
    pub name:        Option<String>,
    pub description: String,
    pub entries:     Vec<EnumEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumEntry {
    pub value:       u64,
    pub name:        String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    pub id:          u32,
    pub name:        String,
    pub description: String,
    pub fields:      Vec<Field>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Field {
    pub name:         String,
    pub type_:        String,
    pub enum_:        Option<String>,
    pub description:  String,
    /// Set for every field that follows the `<extensions/>` marker.
    pub is_extension: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Scalar,
    FixedArray,
    BoundedString,
}

/// Rust-side type of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappedFieldType {
    pub kind:         FieldKind,
    /// Rust type of a scalar or of one array element.
    pub element_type: String,
    pub array_len:    Option<usize>,
    pub max_len:      Option<usize>,
    pub is_extension: bool,
}

impl MappedFieldType {
    /// Type as written in the generated struct.
    pub fn rust_type(&self) -> String {
        match (self.kind, self.array_len) {
            (FieldKind::FixedArray, Some(len)) => format!("[{}; {}]", self.element_type, len),
            (FieldKind::BoundedString, _) => "String".to_string(),
            _ => self.element_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedField {
    /// Member name in the generated struct.
    pub name:        String,
    pub xml_name:    String,
    pub xml_type:    String,
    pub enum_:       Option<String>,
    pub description: String,
    pub ty:          MappedFieldType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedMessage {
    pub id:          u32,
    pub xml_name:    String,
    /// Name of the generated struct (e.g. `MessageHeartbeat`).
    pub type_name:   String,
    pub description: String,
    pub fields:      Vec<MappedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedEnum {
    pub xml_name:    String,
    pub type_name:   String,
    pub description: String,
    pub entries:     Vec<EnumEntry>,
}

/// A definition after type mapping, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappedDefinition {
    pub name:     String,
    pub messages: Vec<MappedMessage>,
    pub enums:    Vec<MappedEnum>,
}

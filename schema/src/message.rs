/// Static description of one member of a generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Member name in the generated struct.
    pub name:        &'static str,
    /// Field name as written in the XML definition.
    pub xml_name:    &'static str,
    /// Raw type string as written in the XML definition (e.g. `float[5]`).
    pub xml_type:    &'static str,
    pub extension:   bool,
    pub array_len:   Option<usize>,
    /// Maximum length of a bounded string (`char[N]`).
    pub max_len:     Option<usize>,
    pub enum_name:   Option<&'static str>,
}

impl FieldInfo {
    pub const fn new(name: &'static str, xml_name: &'static str, xml_type: &'static str) -> Self {
        Self {
            name,
            xml_name,
            xml_type,
            extension: false,
            array_len: None,
            max_len: None,
            enum_name: None,
        }
    }

    /// Marks the field as declared after the `<extensions/>` marker.
    pub const fn extension(self) -> Self {
        Self { extension: true, ..self }
    }

    pub const fn array_len(self, len: usize) -> Self {
        Self { array_len: Some(len), ..self }
    }

    pub const fn max_len(self, len: usize) -> Self {
        Self { max_len: Some(len), ..self }
    }

    pub const fn with_enum(self, enum_name: &'static str) -> Self {
        Self { enum_name: Some(enum_name), ..self }
    }
}

/// Implemented by every generated message struct.
pub trait Message {
    const ID: u32;
    /// Message name as written in the XML definition.
    const NAME: &'static str;
    /// Members in declaration order.
    const FIELDS: &'static [FieldInfo];

    fn id(&self) -> u32;
}

/// Registry entry for one generated message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageInfo {
    pub id:     u32,
    pub name:   &'static str,
    pub fields: &'static [FieldInfo],
}

impl MessageInfo {
    pub const fn of<M: Message>() -> Self {
        Self {
            id:     M::ID,
            name:   M::NAME,
            fields: M::FIELDS,
        }
    }

    pub fn extension_fields(&self) -> impl Iterator<Item = &'static FieldInfo> {
        self.fields.iter().filter(|f| f.extension)
    }
}

/// Every message of a generated dialect, in resolution order.
///
/// Ids are not required to be unique; lookups return the first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub name:     &'static str,
    pub messages: &'static [MessageInfo],
}

impl Dialect {
    pub const fn new(name: &'static str, messages: &'static [MessageInfo]) -> Self {
        Self { name, messages }
    }

    pub fn get(&self, id: u32) -> Option<&'static MessageInfo> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&'static MessageInfo> {
        self.messages.iter().find(|m| m.name == name)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'static, MessageInfo> {
        self.messages.iter()
    }
}

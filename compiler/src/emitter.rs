use std::{collections::HashMap, fs, path::Path};

use crate::{
    types::{FieldKind, MappedDefinition, MappedEnum, MappedField, MappedMessage},
    utils::quote,
    error::MavgenError,
};
use mavgen_schema::escape_rust_keyword;
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "dialect.rs";
const DIALECT_TEMPLATE: &str = include_str!("../templates/dialect.rs.tera");

#[derive(Serialize)]
struct RenderContext {
    package:         String,
    package_literal: String,
    definitions:     Vec<RenderDefinition>,
    enums:           Vec<RenderEnum>,
}

#[derive(Serialize)]
struct RenderDefinition {
    name:     String,
    messages: Vec<RenderMessage>,
}

#[derive(Serialize)]
struct RenderMessage {
    type_name:    String,
    name_literal: String,
    id:           u32,
    doc:          Vec<String>,
    fields:       Vec<RenderField>,
}

#[derive(Serialize)]
struct RenderField {
    name:      String,
    rust_type: String,
    doc:       Vec<String>,
    info:      String,
}

#[derive(Serialize)]
struct RenderEnum {
    type_name: String,
    doc:       Vec<String>,
    entries:   Vec<RenderEntry>,
}

#[derive(Serialize)]
struct RenderEntry {
    name:  String,
    value: u64,
    doc:   Vec<String>,
}

/// Turns a free-form description into `///` lines, dropping blank edges.
fn doc_lines(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end]
        .iter()
        .map(|l| if l.is_empty() { "///".to_string() } else { format!("/// {}", l) })
        .collect()
}

/// The `FieldInfo` constructor expression describing one member.
fn field_info(field: &MappedField) -> String {
    let mut info = format!(
        "FieldInfo::new({}, {}, {})",
        quote(&field.name),
        quote(&field.xml_name),
        quote(&field.xml_type)
    );
    match field.ty.kind {
        FieldKind::FixedArray => {
            if let Some(len) = field.ty.array_len {
                info.push_str(&format!(".array_len({})", len));
            }
        }
        FieldKind::BoundedString => {
            if let Some(len) = field.ty.max_len {
                info.push_str(&format!(".max_len({})", len));
            }
        }
        FieldKind::Scalar => {}
    }
    if let Some(ref e) = field.enum_ {
        info.push_str(&format!(".with_enum({})", quote(e)));
    }
    if field.ty.is_extension {
        info.push_str(".extension()");
    }
    info
}

fn render_message(message: &MappedMessage) -> RenderMessage {
    RenderMessage {
        type_name:    message.type_name.clone(),
        name_literal: quote(&message.xml_name),
        id:           message.id,
        doc:          doc_lines(&message.description),
        fields:       message
            .fields
            .iter()
            .map(|f| RenderField {
                name:      f.name.clone(),
                rust_type: f.ty.rust_type(),
                doc:       doc_lines(&f.description),
                info:      field_info(f),
            })
            .collect(),
    }
}

/// Enums may be declared in several files (dialects extend the enums of the
/// files they include). They are merged by name, in order of first
/// appearance; an entry name seen twice keeps its first value.
fn merge_enums(definitions: &[MappedDefinition]) -> Vec<RenderEnum> {
    let mut merged: Vec<RenderEnum> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for e in definitions.iter().flat_map(|d| d.enums.iter()) {
        let slot = *index.entry(e.xml_name.as_str()).or_insert_with(|| {
            merged.push(RenderEnum {
                type_name: e.type_name.clone(),
                doc:       Vec::new(),
                entries:   Vec::new(),
            });
            merged.len() - 1
        });
        append_enum(&mut merged[slot], e);
    }

    merged
}

fn append_enum(target: &mut RenderEnum, e: &MappedEnum) {
    if target.doc.is_empty() {
        target.doc = doc_lines(&e.description);
    }
    for entry in &e.entries {
        let name = escape_rust_keyword(&entry.name);
        if target.entries.iter().any(|existing| existing.name == name) {
            continue;
        }
        target.entries.push(RenderEntry {
            name,
            value: entry.value,
            doc: doc_lines(&entry.description),
        });
    }
}

/// Renders resolved definitions into one Rust source file.
///
/// The template is compiled once in [`Emitter::new`]; rendering does not
/// mutate the emitter.
pub struct Emitter {
    tera: Tera,
}

impl Emitter {
    pub fn new() -> Result<Self, MavgenError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, DIALECT_TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, definitions: &[MappedDefinition], package: &str) -> Result<String, MavgenError> {
        let context = RenderContext {
            package:         package.to_string(),
            package_literal: quote(package),
            definitions:     definitions
                .iter()
                .map(|d| RenderDefinition {
                    name:     d.name.clone(),
                    messages: d.messages.iter().map(render_message).collect(),
                })
                .collect(),
            enums:           merge_enums(definitions),
        };

        let context = Context::from_serialize(&context)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Writes rendered source to `path`, creating its directory if needed.
pub fn write_dialect(path: &Path, source: &str) -> Result<(), MavgenError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, source)?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mapper::map_definition,
        parser::parse_definition,
        types::EnumEntry,
    };
    use lazy_static::lazy_static;
    use regex::Regex;

    lazy_static! {
        static ref REGISTRY_ENTRY: Regex = Regex::new(r"MessageInfo::of::<(\w+)>\(\)").unwrap();
    }

    fn mapped(name: &str, xml: &str) -> MappedDefinition {
        let mut def = parse_definition(xml.as_bytes()).unwrap();
        def.name = name.to_string();
        map_definition(&def).unwrap()
    }

    fn render(defs: &[MappedDefinition]) -> String {
        Emitter::new().unwrap().render(defs, "test").unwrap()
    }

    const HEARTBEAT: &str = r#"<mavlink><messages>
      <message id="42000" name="ICAROUS_HEARTBEAT">
        <description>ICAROUS heartbeat</description>
        <field type="uint8_t" name="status" enum="ICAROUS_FMS_STATE">See the FMS_STATE enum.</field>
      </message>
    </messages></mavlink>"#;

    #[test]
    fn test_render_single_message() {
        let out = render(&[mapped("icarous.xml", HEARTBEAT)]);
        assert!(out.starts_with("// autogenerated with mavgen. do not edit."));
        assert!(out.contains("//! test dialect."));
        assert!(out.contains("// icarous.xml"));
        assert!(out.contains("/// ICAROUS heartbeat"));
        assert!(out.contains("pub struct MessageIcarousHeartbeat {"));
        assert!(out.contains("    /// See the FMS_STATE enum."));
        assert!(out.contains("    pub status: u8,"));
        assert!(out.contains("impl Message for MessageIcarousHeartbeat {"));
        assert!(out.contains("const ID: u32 = 42000;"));
        assert!(out.contains("const NAME: &'static str = \"ICAROUS_HEARTBEAT\";"));
        assert!(out.contains(
            "FieldInfo::new(\"status\", \"status\", \"uint8_t\").with_enum(\"ICAROUS_FMS_STATE\"),"
        ));
        assert!(out.contains("fn id(&self) -> u32 {\n        42000\n    }"));
        assert!(out.contains("pub const DIALECT: Dialect = Dialect::new(\"test\", MESSAGES);"));

        let entries: Vec<_> = REGISTRY_ENTRY.captures_iter(&out).map(|c| c[1].to_string()).collect();
        assert_eq!(entries, vec!["MessageIcarousHeartbeat"]);
    }

    #[test]
    fn test_render_field_annotations() {
        let xml = r#"<mavlink><messages>
          <message id="7" name="MIXED">
            <field type="float[5]" name="samples">Samples</field>
            <field type="char[20]" name="label">Label</field>
            <extensions/>
            <field type="uint16_t" name="type">Kind</field>
          </message>
        </messages></mavlink>"#;
        let out = render(&[mapped("mixed.xml", xml)]);
        assert!(out.contains("pub samples: [f32; 5],"));
        assert!(out.contains("pub label: String,"));
        assert!(out.contains("pub type_: u16,"));
        assert!(out.contains("FieldInfo::new(\"samples\", \"samples\", \"float[5]\").array_len(5),"));
        assert!(out.contains("FieldInfo::new(\"label\", \"label\", \"char[20]\").max_len(20),"));
        assert!(out.contains("FieldInfo::new(\"type_\", \"type\", \"uint16_t\").extension(),"));
    }

    #[test]
    fn test_render_message_without_fields() {
        let xml = r#"<mavlink><messages><message id="5" name="PING"/></messages></mavlink>"#;
        let out = render(&[mapped("ping.xml", xml)]);
        assert!(out.contains("pub struct MessagePing {}\n"));
        assert!(out.contains("const FIELDS: &'static [FieldInfo] = &[];\n"));

        let out = render(&[mapped("icarous.xml", HEARTBEAT)]);
        assert!(out.contains("    pub status: u8,\n}\n"));
        assert!(out.contains("        FieldInfo::new(\"status\", \"status\", \"uint8_t\").with_enum(\"ICAROUS_FMS_STATE\"),\n    ];\n"));
    }

    #[test]
    fn test_output_ends_with_single_newline() {
        let out = render(&[mapped("icarous.xml", HEARTBEAT)]);
        assert!(out.ends_with(");\n"), "unexpected tail: {:?}", &out[out.len() - 10..]);
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn test_registry_follows_resolution_order() {
        let c = mapped("c.xml", r#"<mavlink><messages><message id="3" name="C_ONE"/><message id="4" name="C_TWO"/></messages></mavlink>"#);
        let b = mapped("b.xml", r#"<mavlink><messages><message id="2" name="B_ONE"/></messages></mavlink>"#);
        let a = mapped("a.xml", r#"<mavlink><messages><message id="1" name="A_ONE"/></messages></mavlink>"#);
        let out = render(&[c, b, a]);

        let entries: Vec<_> = REGISTRY_ENTRY.captures_iter(&out).map(|c| c[1].to_string()).collect();
        assert_eq!(entries, vec!["MessageCOne", "MessageCTwo", "MessageBOne", "MessageAOne"]);

        let c_pos = out.find("pub struct MessageCOne").unwrap();
        let b_pos = out.find("pub struct MessageBOne").unwrap();
        let a_pos = out.find("pub struct MessageAOne").unwrap();
        assert!(c_pos < b_pos && b_pos < a_pos);
    }

    #[test]
    fn test_duplicate_ids_are_allowed() {
        let a = mapped("a.xml", r#"<mavlink><messages><message id="9" name="FIRST"/></messages></mavlink>"#);
        let b = mapped("b.xml", r#"<mavlink><messages><message id="9" name="SECOND"/></messages></mavlink>"#);
        let out = render(&[a, b]);
        assert_eq!(out.matches("const ID: u32 = 9;").count(), 2);
    }

    #[test]
    fn test_enums_are_merged_by_name() {
        let base = MappedDefinition {
            name:     "common.xml".into(),
            messages: Vec::new(),
            enums:    vec![MappedEnum {
                xml_name:    "MAV_CMD".into(),
                type_name:   "MavCmd".into(),
                description: "Commands".into(),
                entries:     vec![EnumEntry { value: 16, name: "MAV_CMD_NAV_WAYPOINT".into(), description: "Waypoint".into() }],
            }],
        };
        let extended = MappedDefinition {
            name:     "ardupilotmega.xml".into(),
            messages: Vec::new(),
            enums:    vec![MappedEnum {
                xml_name:    "MAV_CMD".into(),
                type_name:   "MavCmd".into(),
                description: String::new(),
                entries:     vec![
                    EnumEntry { value: 16, name: "MAV_CMD_NAV_WAYPOINT".into(), description: String::new() },
                    EnumEntry { value: 42000, name: "MAV_CMD_POWER_OFF_INITIATED".into(), description: String::new() },
                ],
            }],
        };
        let out = render(&[base, extended]);
        assert_eq!(out.matches("pub struct MavCmd(pub u64);").count(), 1);
        assert_eq!(out.matches("pub const MAV_CMD_NAV_WAYPOINT: Self = Self(16);").count(), 1);
        assert!(out.contains("pub const MAV_CMD_POWER_OFF_INITIATED: Self = Self(42000);"));
        assert!(out.contains("/// Commands"));
    }

    #[test]
    fn test_doc_lines() {
        assert_eq!(doc_lines("\n  first\n\n  second  \n\n"), vec!["/// first", "///", "/// second"]);
        assert!(doc_lines("   ").is_empty());
        assert!(doc_lines("").is_empty());
    }

    #[test]
    fn test_write_dialect_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/dialect.rs");
        write_dialect(&path, "// empty\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "// empty\n");
    }
}

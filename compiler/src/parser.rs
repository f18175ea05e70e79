use crate::{
    types::{Definition, Enum, EnumEntry, Field, Message},
    utils::{error, error_at, inner_text, quote},
    error::MavgenError,
};
use lazy_static::lazy_static;
use regex::Regex;
use roxmltree::{Document, Node};

lazy_static! {
    static ref POWER_OF_TWO: Regex = Regex::new(r"^2\*\*(\d+)$").unwrap();
}

/// Decodes one XML dialect file.
///
/// `address` and `name` are left empty; the resolver fills them in.
pub fn parse_definition(content: &[u8]) -> Result<Definition, MavgenError> {
    let text = std::str::from_utf8(content)
        .map_err(|e| error(&format!("Input is not valid UTF-8: {}", e), 0, 0))?;

    let doc = Document::parse(text).map_err(|e| {
        let pos = e.pos();
        error(&e.to_string(), pos.row, pos.col)
    })?;

    let mut definition = Definition::default();

    for child in doc.root_element().children().filter(Node::is_element) {
        match child.tag_name().name() {
            "version" => definition.version = parse_integer(&doc, &child)?,
            "dialect" => definition.dialect = parse_integer(&doc, &child)?,
            "include" => definition.includes.push(inner_text(&child)),
            "enums" => {
                for node in child.children().filter(|n| n.has_tag_name("enum")) {
                    definition.enums.push(parse_enum(&doc, &node)?);
                }
            }
            "messages" => {
                for node in child.children().filter(|n| n.has_tag_name("message")) {
                    definition.messages.push(parse_message(&doc, &node)?);
                }
            }
            _ => {}
        }
    }

    Ok(definition)
}

fn parse_integer(doc: &Document, node: &Node) -> Result<i64, MavgenError> {
    let text = inner_text(node);
    text.parse::<i64>().map_err(|_| {
        error_at(
            doc,
            node,
            &format!("Expected integer in <{}> but found {}", node.tag_name().name(), quote(&text)),
        )
    })
}

fn required_attribute<'a>(doc: &Document, node: &Node<'a, '_>, name: &str) -> Result<&'a str, MavgenError> {
    node.attribute(name).ok_or_else(|| {
        error_at(
            doc,
            node,
            &format!("Missing required attribute {} on <{}>", quote(name), node.tag_name().name()),
        )
    })
}

/// Messages are decoded by walking their children in document order: every
/// `field` that follows an `extensions` element is an extension field.
fn parse_message(doc: &Document, node: &Node) -> Result<Message, MavgenError> {
    let id_text = required_attribute(doc, node, "id")?;
    let id = id_text.trim().parse::<u32>().map_err(|_| {
        error_at(doc, node, &format!("Invalid message id {}", quote(id_text)))
    })?;

    let mut message = Message {
        id,
        name: required_attribute(doc, node, "name")?.to_string(),
        ..Message::default()
    };

    let mut in_extensions = false;
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "description" => message.description = inner_text(&child),
            "extensions" => in_extensions = true,
            "field" => {
                message.fields.push(Field {
                    name:         required_attribute(doc, &child, "name")?.to_string(),
                    type_:        required_attribute(doc, &child, "type")?.to_string(),
                    enum_:        child.attribute("enum").map(str::to_string),
                    description:  inner_text(&child),
                    is_extension: in_extensions,
                });
            }
            _ => {}
        }
    }

    Ok(message)
}

fn parse_enum(doc: &Document, node: &Node) -> Result<Enum, MavgenError> {
    let mut parsed = Enum {
        name: node.attribute("name").map(str::to_string),
        ..Enum::default()
    };

    let mut next_value = 0u64;
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "description" => parsed.description = inner_text(&child),
            "entry" => {
                let value = match child.attribute("value") {
                    Some(text) => parse_enum_value(text)
                        .ok_or_else(|| error_at(doc, &child, &format!("Invalid enum value {}", quote(text))))?,
                    None => next_value,
                };
                next_value = value.wrapping_add(1);

                let description = child
                    .children()
                    .find(|n| n.has_tag_name("description"))
                    .map(|n| inner_text(&n))
                    .unwrap_or_default();

                parsed.entries.push(EnumEntry {
                    value,
                    name: required_attribute(doc, &child, "name")?.to_string(),
                    description,
                });
            }
            _ => {}
        }
    }

    Ok(parsed)
}

/// Accepts decimal, `0x` hex, `0b` binary and `2**N` values.
fn parse_enum_value(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2).ok()
    } else if let Some(caps) = POWER_OF_TWO.captures(text) {
        let exp = caps[1].parse::<u32>().ok()?;
        1u64.checked_shl(exp)
    } else {
        text.parse::<u64>().ok()
    }
}

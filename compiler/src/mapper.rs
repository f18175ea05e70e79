use crate::{
    types::{
        Definition, Enum, Field, FieldKind, MappedDefinition, MappedEnum, MappedField, MappedFieldType,
        MappedMessage, Message,
    },
    error::MavgenError,
};
use lazy_static::lazy_static;
use mavgen_schema::{enum_type_name, field_member_name, message_type_name, normalize_alias, rust_type, CHAR_TYPE};
use regex::Regex;

lazy_static! {
    static ref LENGTH_SUFFIX: Regex = Regex::new(r"^(.+?)\[([0-9]+)\]$").unwrap();
}

/// Maps a raw XML type string (`uint8_t`, `float[5]`, `char[20]`) to its Rust type.
///
/// `field` is only used for error reporting.
pub fn map_field_type(raw: &str, is_extension: bool, field: &str) -> Result<MappedFieldType, MavgenError> {
    let raw = normalize_alias(raw);

    let (base, kind, len) = match LENGTH_SUFFIX.captures(raw) {
        Some(caps) => {
            let base = caps.get(1).map_or("", |m| m.as_str());
            let len = caps[2].parse::<usize>().map_err(|_| MavgenError::UnknownType {
                type_name: raw.to_string(),
                field:     field.to_string(),
            })?;
            if base == CHAR_TYPE {
                (base, FieldKind::BoundedString, Some(len))
            } else {
                (normalize_alias(base), FieldKind::FixedArray, Some(len))
            }
        }
        None => (raw, FieldKind::Scalar, None),
    };

    let element_type = rust_type(base).ok_or_else(|| MavgenError::UnknownType {
        type_name: base.to_string(),
        field:     field.to_string(),
    })?;

    Ok(MappedFieldType {
        kind,
        element_type: element_type.to_string(),
        array_len: if kind == FieldKind::FixedArray { len } else { None },
        max_len: if kind == FieldKind::BoundedString { len } else { None },
        is_extension,
    })
}

pub fn map_field(field: &Field) -> Result<MappedField, MavgenError> {
    Ok(MappedField {
        name:        field_member_name(&field.name),
        xml_name:    field.name.clone(),
        xml_type:    field.type_.clone(),
        enum_:       field.enum_.clone(),
        description: field.description.clone(),
        ty:          map_field_type(&field.type_, field.is_extension, &field.name)?,
    })
}

pub fn map_message(message: &Message) -> Result<MappedMessage, MavgenError> {
    let fields = message
        .fields
        .iter()
        .map(map_field)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MappedMessage {
        id:          message.id,
        xml_name:    message.name.clone(),
        type_name:   message_type_name(&message.name),
        description: message.description.clone(),
        fields,
    })
}

fn map_enum(e: &Enum) -> Option<MappedEnum> {
    let xml_name = e.name.as_ref()?;
    Some(MappedEnum {
        xml_name:    xml_name.clone(),
        type_name:   enum_type_name(xml_name),
        description: e.description.clone(),
        entries:     e.entries.clone(),
    })
}

/// Maps every message of a definition. Unnamed enums are dropped.
pub fn map_definition(definition: &Definition) -> Result<MappedDefinition, MavgenError> {
    let messages = definition
        .messages
        .iter()
        .map(|m| -> Result<MappedMessage, MavgenError> {
            let mapped = map_message(m)?;
            tracing::debug!("mapped {} -> {}", m.name, mapped.type_name);
            Ok(mapped)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MappedDefinition {
        name:  definition.name.clone(),
        messages,
        enums: definition.enums.iter().filter_map(map_enum).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapped(raw: &str) -> MappedFieldType {
        map_field_type(raw, false, "f").unwrap()
    }

    #[test]
    fn test_scalar() {
        let ty = mapped("uint8_t");
        assert_eq!(ty.kind, FieldKind::Scalar);
        assert_eq!(ty.element_type, "u8");
        assert_eq!(ty.rust_type(), "u8");
        assert_eq!(ty.array_len, None);
        assert_eq!(ty.max_len, None);
    }

    #[test]
    fn test_fixed_array() {
        let ty = mapped("float[5]");
        assert_eq!(ty.kind, FieldKind::FixedArray);
        assert_eq!(ty.element_type, "f32");
        assert_eq!(ty.array_len, Some(5));
        assert_eq!(ty.rust_type(), "[f32; 5]");

        for (raw, elem, len) in [("uint8_t[251]", "u8", 251), ("int16_t[4]", "i16", 4), ("double[2]", "f64", 2)] {
            let ty = mapped(raw);
            assert_eq!((ty.kind, ty.element_type.as_str(), ty.array_len), (FieldKind::FixedArray, elem, Some(len)));
        }
    }

    #[test]
    fn test_bounded_string() {
        let ty = mapped("char[20]");
        assert_eq!(ty.kind, FieldKind::BoundedString);
        assert_eq!(ty.max_len, Some(20));
        assert_eq!(ty.array_len, None);
        assert_eq!(ty.rust_type(), "String");
    }

    #[test]
    fn test_version_alias() {
        assert_eq!(mapped("uint8_t_mavlink_version").rust_type(), "u8");
    }

    #[test]
    fn test_extension_flag_is_carried() {
        assert!(map_field_type("uint16_t", true, "f").unwrap().is_extension);
        assert!(map_field_type("char[3]", true, "f").unwrap().is_extension);
        assert!(!mapped("int32_t").is_extension);
    }

    #[test]
    fn test_unknown_type() {
        match map_field_type("uint128_t[2]", false, "payload") {
            Err(MavgenError::UnknownType { type_name, field }) => {
                assert_eq!(type_name, "uint128_t");
                assert_eq!(field, "payload");
            }
            other => panic!("expected an UnknownType error but got {:?}", other),
        }
        assert!(map_field_type("float[]", false, "f").is_err());
    }

    #[test]
    fn test_map_message_names() {
        let message = Message {
            id:          42001,
            name:        "ICAROUS_KINEMATIC_BANDS".to_string(),
            description: String::new(),
            fields:      vec![
                Field { name: "numBands".into(), type_: "int8_t".into(), ..Field::default() },
                Field { name: "type".into(), type_: "uint8_t".into(), is_extension: true, ..Field::default() },
            ],
        };
        let m = map_message(&message).unwrap();
        assert_eq!(m.type_name, "MessageIcarousKinematicBands");
        assert_eq!(m.xml_name, "ICAROUS_KINEMATIC_BANDS");
        assert_eq!(m.fields[0].name, "num_bands");
        assert_eq!(m.fields[0].xml_name, "numBands");
        assert_eq!(m.fields[1].name, "type_");
        assert!(m.fields[1].ty.is_extension);
    }

    #[test]
    fn test_map_definition_drops_unnamed_enums() {
        let definition = Definition {
            name:  "a.xml".into(),
            enums: vec![
                Enum { name: Some("MAV_STATE".into()), ..Enum::default() },
                Enum::default(),
            ],
            ..Definition::default()
        };
        let mapped = map_definition(&definition).unwrap();
        assert_eq!(mapped.enums.len(), 1);
        assert_eq!(mapped.enums[0].type_name, "MavState");
    }
}

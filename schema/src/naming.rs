use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

const RUST_KEYWORDS: [&str; 51] = [
    "as", "break", "const", "continue", "crate", "else",
    "enum", "extern", "false", "fn", "for", "if", "impl",
    "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static",
    "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while", "async", "await", "dyn",
    "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "typeof", "unsized", "virtual", "yield",
    "try",
];

/// Converts a string to PascalCase.
/// - If the string contains underscores, it splits on underscores and converts each word
///   so that its first letter is uppercase and the rest lowercase.
/// - If the string does not contain underscores and is fully uppercase, only the first
///   letter stays uppercase.
/// - Otherwise, it ensures only the first letter is uppercase.
pub fn to_pascal_case(s: &str) -> String {
    fn capitalize(word: &str, lower_rest: bool) -> String {
        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(first) if lower_rest => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        }
    }

    if s.contains('_') {
        s.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| capitalize(word, true))
            .collect::<String>()
    } else {
        capitalize(s, s == s.to_uppercase())
    }
}

/// Converts a string to snake_case.
/// Consecutive uppercase letters stay together, so that acronyms remain intact
/// (e.g. "sessionID" becomes "session_id").
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if prev != '_' && (!prev.is_uppercase() || next_is_lower) {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Makes `s` usable as a Rust identifier: keywords get an underscore suffix,
/// anything else that is not an identifier gets an underscore prefix.
pub fn escape_rust_keyword(s: &str) -> String {
    if RUST_KEYWORDS.contains(&s) {
        format!("{}_", s)
    } else if !IDENTIFIER.is_match(s) {
        format!("_{}", s)
    } else {
        s.to_string()
    }
}

/// Name of the generated record type for a MAVLink message
/// (`ICAROUS_HEARTBEAT` -> `MessageIcarousHeartbeat`).
pub fn message_type_name(xml_name: &str) -> String {
    format!("Message{}", to_pascal_case(xml_name))
}

/// Name of the generated member for a MAVLink field (`numBands` -> `num_bands`).
pub fn field_member_name(xml_name: &str) -> String {
    escape_rust_keyword(&to_snake_case(xml_name))
}

/// Name of the generated newtype for a MAVLink enum (`MAV_STATE` -> `MavState`).
pub fn enum_type_name(xml_name: &str) -> String {
    escape_rust_keyword(&to_pascal_case(xml_name))
}

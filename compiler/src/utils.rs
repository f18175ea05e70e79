use crate::error::MavgenError;
use roxmltree::{Document, Node};

/// Renders `text` as a Rust string literal.
pub fn quote(text: &str) -> String {
    format!("{:?}", text)
}

pub fn error(msg: &str, line: u32, column: u32) -> MavgenError {
    MavgenError::Parse {
        msg: msg.to_string(),
        line,
        column,
    }
}

/// Builds a parse error located at the start of `node`.
pub fn error_at(doc: &Document, node: &Node, msg: &str) -> MavgenError {
    let pos = doc.text_pos_at(node.range().start);
    error(msg, pos.row, pos.col)
}

/// Concatenated text of every text node below `node`, trimmed.
pub fn inner_text(node: &Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Final path segment of an address (`a/b/common.xml` -> `common.xml`).
pub fn address_name(address: &str) -> &str {
    address.rsplit('/').next().unwrap_or(address)
}

/// Everything up to and including the last `/` of an address.
pub fn address_dir(address: &str) -> &str {
    match address.rfind('/') {
        Some(pos) => &address[..=pos],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("HEARTBEAT"), "\"HEARTBEAT\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_address_split() {
        let url = "https://example.com/v1.0/common.xml";
        assert_eq!(address_name(url), "common.xml");
        assert_eq!(address_dir(url), "https://example.com/v1.0/");
        assert_eq!(address_name("icarous.xml"), "icarous.xml");
        assert_eq!(address_dir("icarous.xml"), "");
        assert_eq!(address_name("defs/"), "");
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MavgenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("output file must end with .rs: {}", .0.display())]
    InvalidOutputPath(PathBuf),

    #[error("unable to fetch {address}: {msg}")]
    Fetch {
        address: String,
        msg:     String,
    },

    #[error("Parse error at line {line}, column {column}: {msg}")]
    Parse {
        msg:    String,
        line:   u32,
        column: u32,
    },

    #[error("unable to decode {address}: {source}")]
    Document {
        address: String,
        #[source]
        source:  Box<MavgenError>,
    },

    #[error("unknown type \"{type_name}\" for field \"{field}\"")]
    UnknownType {
        type_name: String,
        field:     String,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl MavgenError {
    pub(crate) fn in_document(self, address: &str) -> Self {
        MavgenError::Document {
            address: address.to_string(),
            source:  Box::new(self),
        }
    }
}

//! Textual cart operations (`add:<id>`, `remove:<id>`), used to replay sessions.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    Add(String),
    Remove(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartOpParseError {
    #[error("empty item id in cart operation {0:?}")]
    EmptyItemId(String),
    #[error("unknown cart operation {0:?} (expected add:<id>, +<id>, remove:<id> or rm:<id>)")]
    UnknownOp(String),
}

impl FromStr for CartOp {
    type Err = CartOpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (is_add, id) = if let Some(id) = s.strip_prefix('+') {
            (true, id)
        } else if let Some((verb, id)) = s.split_once(':') {
            match verb {
                "add" => (true, id),
                "remove" | "rm" => (false, id),
                _ => return Err(CartOpParseError::UnknownOp(s.to_string())),
            }
        } else {
            return Err(CartOpParseError::UnknownOp(s.to_string()));
        };

        let id = id.trim();
        if id.is_empty() {
            return Err(CartOpParseError::EmptyItemId(s.to_string()));
        }
        Ok(if is_add {
            CartOp::Add(id.to_string())
        } else {
            CartOp::Remove(id.to_string())
        })
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add(id) => write!(f, "add:{id}"),
            CartOp::Remove(id) => write!(f, "remove:{id}"),
        }
    }
}

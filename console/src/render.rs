//! Display model for a rendered view.
//!
//! Views build a `Page` out of `Block`s without touching the terminal; the
//! `Display` impl turns it into text. Tests assert on blocks, not on strings.

use std::fmt;

use customer_core::Customer;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Header(String),
    Subheader(String),
    Metric { label: String, value: String },
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
    Json(serde_json::Value),
    /// One customer on a single line in fixed columns.
    Row(Customer),
    Separator,
    Caption(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::Header(title.into())],
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn has_error(&self) -> bool {
        self.blocks.iter().any(|b| matches!(b, Block::Error(_)))
    }

    /// Text of every success, info, warning and error block, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Success(m) | Block::Info(m) | Block::Warning(m) | Block::Error(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Header(title) => {
                writeln!(f, "{title}")?;
                write!(f, "{}", "=".repeat(title.chars().count()))
            }
            Block::Subheader(title) => write!(f, "-- {title} --"),
            Block::Metric { label, value } => write!(f, "{label}: {value}"),
            Block::Success(m) => write!(f, "[ok] {m}"),
            Block::Info(m) => write!(f, "[info] {m}"),
            Block::Warning(m) => write!(f, "[warning] {m}"),
            Block::Error(m) => write!(f, "[error] {m}"),
            Block::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{value}"),
            },
            Block::Row(c) => write!(
                f,
                "ID: {:<6} First name: {:<20} Last name: {:<20} Email: {}",
                c.id, c.first_name, c.last_name, c.email
            ),
            Block::Separator => f.write_str("----------------------------------------"),
            Block::Caption(m) => f.write_str(m),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{block}")?;
        }
        Ok(())
    }
}

//! bean-seed-rust
//!
//! Notionエクスポートのコーヒーテイスティングノート(Markdown)を解析し、
//! beansテーブル向けのSQLシードを生成する

pub mod cli;
pub mod error;
pub mod export;
pub mod parser;

pub use error::{BeanSeedError, Result};
pub use parser::types::{BeanRecord, Characteristics};
pub use parser::{parse_document, parse_file};

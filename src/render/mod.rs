//! Renderer module — trait-based format dispatch.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::associate::DocumentedFunction;
use crate::model::IndexRecord;
use anyhow::{anyhow, Result};

/// Column names of the index, in output order.
pub const INDEX_HEADER: [&str; 3] = ["filename", "functionname", "linenumber"];

/// Trait for rendering indexer output into a specific format.
pub trait Renderer {
    /// The line index: one entry per code line.
    fn render_index(&self, records: &[IndexRecord]) -> String;
    /// Functions with their doc comment blocks.
    fn render_docs(&self, functions: &[DocumentedFunction]) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "csv" => Ok(Box::new(csv::CsvRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use csv, json, or markdown",
            format
        )),
    }
}

//! Word-processor documents (.docx)
//!
//! Only the text survives: paragraphs and table rows in document order.

use crate::text::{Block, render_blocks};
use crate::types::{PageSize, RenderError, Result};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use std::path::Path;

/// Render a DOCX file as flowed text pages headed `Document: <file name>`.
pub fn docx_pages(path: &Path, page_size: PageSize) -> Result<lopdf::Document> {
    let bytes = std::fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| RenderError::Docx(e.to_string()))?;

    let mut blocks = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                blocks.push(Block::Paragraph(paragraph_text(paragraph)));
            }
            DocumentChild::Table(table) => {
                blocks.push(Block::Spacer);
                blocks.extend(table_rows(table).into_iter().map(Block::Row));
                blocks.push(Block::Spacer);
            }
            _ => {}
        }
    }

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    render_blocks(&format!("Document: {}", filename), &blocks, page_size)
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        match child {
            ParagraphChild::Run(run) => push_run_text(&run.children, &mut text),
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let ParagraphChild::Run(run) = inner {
                        push_run_text(&run.children, &mut text);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(children: &[RunChild], output: &mut String) {
    for child in children {
        match child {
            RunChild::Text(text) => output.push_str(&text.text),
            RunChild::Tab(_) => output.push(' '),
            _ => {}
        }
    }
}

/// One string per table row, cells joined with " | "
fn table_rows(table: &Table) -> Vec<String> {
    let mut rows = Vec::new();
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        let cells = row
            .cells
            .iter()
            .map(|cell| {
                let TableRowChild::TableCell(cell) = cell;
                cell.children
                    .iter()
                    .filter_map(|content| match content {
                        TableCellContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
                    .trim()
                    .to_string()
            })
            .collect::<Vec<_>>();
        rows.push(cells.join(" | "));
    }
    rows
}

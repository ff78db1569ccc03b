//! Résumé text extraction from stored PDF / DOCX bytes.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use crate::models::resume::{DOCX_CONTENT_TYPE, PDF_CONTENT_TYPE};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    Unsupported(String),

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),
}

/// Content types accepted at upload time.
pub fn is_supported(content_type: &str) -> bool {
    matches!(content_type, PDF_CONTENT_TYPE | DOCX_CONTENT_TYPE)
}

/// Extracts plain text from a stored résumé file. CPU-bound; call from
/// `spawn_blocking` inside async code.
pub fn extract_text(data: &[u8], content_type: &str) -> Result<String, ExtractError> {
    match content_type {
        PDF_CONTENT_TYPE => {
            pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        DOCX_CONTENT_TYPE => extract_docx(data),
        other => Err(ExtractError::Unsupported(other.to_string())),
    }
}

/// Reads `word/document.xml` and concatenates its `w:t` runs, one line per
/// paragraph.
fn extract_docx(data: &[u8]) -> Result<String, ExtractError> {
    let docx_err = |e: &dyn std::fmt::Display| ExtractError::Docx(e.to_string());

    let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(|e| docx_err(&e))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| docx_err(&e))?
        .read_to_string(&mut xml)
        .map_err(|e| docx_err(&e))?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event().map_err(|e| docx_err(&e))? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => {
                text.push_str(&t.unescape().map_err(|e| docx_err(&e))?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

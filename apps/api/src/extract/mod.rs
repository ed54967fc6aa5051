//! Best-effort document text extraction.
//!
//! Extraction never fails the request: a document the libraries cannot parse
//! degrades to an empty string, logged at WARN. Whether empty or too-short
//! text is an error is the upload handler's policy, not this module's.

use anyhow::{anyhow, Result};
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::warn;

/// Supported upload formats, derived from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Maps a filename to a supported format via its extension,
    /// case-insensitively. Anything else is rejected by the caller.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

/// Extracts the plain text of a document.
///
/// PDF: the concatenated text of every page in page order. DOCX: the text of
/// every paragraph in document order, each followed by a newline. Output may
/// legitimately be empty (for example an image-only scanned PDF).
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> String {
    let result = match format {
        DocumentFormat::Pdf => pdf_text(bytes),
        DocumentFormat::Docx => docx_text(bytes),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("{} extraction failed: {e:#}", format.as_str());
            String::new()
        }
    }
}

fn pdf_text(bytes: &[u8]) -> Result<String> {
    // pdf-extract walks the pages in order; a page without a text layer
    // contributes nothing.
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}

fn docx_text(bytes: &[u8]) -> Result<String> {
    let docx = read_docx(bytes).map_err(|e| anyhow!("docx parse error: {e:?}"))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            text.push_str(&paragraph_text(paragraph));
            text.push('\n');
        }
    }

    Ok(text)
}

/// Collects the Text leaves of a paragraph. Runs within a paragraph are
/// parts of the same sentence, so they concatenate without a separator.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut parts = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    parts.push_str(&t.text);
                }
            }
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Cursor;

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_format_from_filename() {
        assert_eq!(
            DocumentFormat::from_filename("resume.pdf"),
            Some(DocumentFormat::Pdf)
        );
        assert_eq!(
            DocumentFormat::from_filename("Resume.DOCX"),
            Some(DocumentFormat::Docx)
        );
        assert_eq!(DocumentFormat::from_filename("resume.txt"), None);
        assert_eq!(DocumentFormat::from_filename("no-extension"), None);
    }

    #[test]
    fn test_docx_paragraphs_in_order_with_newlines() {
        let bytes = docx_bytes(&["Jane Doe", "Python developer"]);
        let text = extract_text(&bytes, DocumentFormat::Docx);
        assert_eq!(text, "Jane Doe\nPython developer\n");
    }

    #[test]
    fn test_docx_garbage_bytes_degrade_to_empty() {
        let text = extract_text(b"definitely not a zip archive", DocumentFormat::Docx);
        assert_eq!(text, "");
    }

    #[test]
    fn test_pdf_garbage_bytes_degrade_to_empty() {
        let text = extract_text(b"%PDF-9.9 truncated nonsense", DocumentFormat::Pdf);
        assert_eq!(text, "");
    }
}

//! Extraction Adapter — turns an uploaded document into plain text.
//!
//! Dispatch is a closed enum over the supported kinds so adding a format
//! is a compile-time-visible change, not a string-suffix check. Failures
//! are typed and surfaced to the caller; no placeholder text ever flows
//! into scoring.

use std::io::Read;

use bytes::Bytes;
use thiserror::Error;

/// Maximum decompressed bytes to read from a single ZIP entry (zip-bomb protection).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

/// An uploaded file: raw bytes plus the declared filename.
/// Created per request and consumed once by [`extract`].
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub bytes: Bytes,
}

impl Document {
    pub fn new(filename: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn kind(&self) -> Result<DocumentKind, ExtractError> {
        DocumentKind::from_filename(&self.filename)
    }
}

/// The closed set of supported document kinds, each bound to one
/// extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Resolves a kind from the declared filename extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            "txt" => Ok(DocumentKind::Txt),
            _ => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Extraction error. Every variant is a recoverable, per-request condition.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("text file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Extracts best-effort plain text from a document.
///
/// An `Ok` result may be empty (e.g. a scanned PDF with no text layer);
/// absence of extractable text is only an error when the bytes cannot be
/// parsed at all.
pub fn extract(document: &Document) -> Result<String, ExtractError> {
    match document.kind()? {
        DocumentKind::Pdf => extract_pdf(&document.bytes),
        DocumentKind::Docx => extract_docx(&document.bytes),
        DocumentKind::Txt => Ok(String::from_utf8(document.bytes.to_vec())?),
    }
}

/// Page-by-page text concatenation; a page with no text layer contributes
/// nothing rather than failing.
fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    let entry = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("word/document.xml: {e}")))?;

    let mut doc_xml = Vec::new();
    entry
        .take(MAX_XML_ENTRY_BYTES)
        .read_to_end(&mut doc_xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;
    if doc_xml.len() as u64 >= MAX_XML_ENTRY_BYTES {
        return Err(ExtractError::Docx(
            "word/document.xml exceeds size limit".to_string(),
        ));
    }

    collect_paragraphs(&doc_xml)
}

/// Walks `word/document.xml`, gathering `<w:t>` runs per paragraph and
/// joining paragraphs with newlines (empty paragraphs kept as blank lines).
fn collect_paragraphs(xml: &[u8]) -> Result<String, ExtractError> {
    let mut reader = quick_xml::Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut saw_paragraph = false;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    if let Ok(quick_xml::events::Event::Text(te)) = reader.read_event_into(&mut buf)
                    {
                        current.push_str(te.unescape().unwrap_or_default().as_ref());
                    }
                }
            }
            Ok(quick_xml::events::Event::End(e)) => {
                if e.local_name().as_ref() == b"p" {
                    paragraphs.push(std::mem::take(&mut current));
                    saw_paragraph = true;
                }
            }
            // Self-closing <w:p/> is an empty paragraph, kept as a blank line.
            Ok(quick_xml::events::Event::Empty(e)) => {
                if e.local_name().as_ref() == b"p" {
                    paragraphs.push(std::mem::take(&mut current));
                    saw_paragraph = true;
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(e.to_string())),
            _ => {}
        }
        buf.clear();
    }
    // Text outside any closed paragraph (malformed but parseable documents).
    if !current.is_empty() || !saw_paragraph {
        paragraphs.push(current);
    }
    Ok(paragraphs.join("\n"))
}

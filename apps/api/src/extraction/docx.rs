//! DOCX text extraction.
//!
//! A DOCX file is a zip container; the body lives in `word/document.xml` as
//! `<w:p>` paragraphs made of `<w:t>` text runs. Paragraph text is emitted with a
//! trailing newline, tabs and breaks inside a paragraph become `\t` / `\n`.
//! Paragraphs nested in table cells are included.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use zip::ZipArchive;

use crate::extraction::{DocumentKind, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

// Matches, in document order: a text run (capture 1), an empty paragraph, a
// paragraph end, a tab, or a line/carriage break.
static BODY_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:t(?:\s[^>]*)?/>|(<w:p(?:\s[^>]*)?/>)|(</w:p>)|(<w:tab(?:\s[^>]*)?/>)|(<w:(?:br|cr)(?:\s[^>]*)?/>)",
    )
    .expect("docx body pattern is valid")
});

static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9A-Fa-f]+);").expect("entity pattern is valid"));

pub fn extract_docx_text(path: &Path) -> Result<String, ExtractionError> {
    let file = File::open(path).map_err(|e| ExtractionError::unreadable(DocumentKind::Docx, e))?;
    extract_docx_from_reader(file)
}

pub fn extract_docx_from_reader<R: Read + Seek>(reader: R) -> Result<String, ExtractionError> {
    let mut archive =
        ZipArchive::new(reader).map_err(|e| ExtractionError::unreadable(DocumentKind::Docx, e))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::unreadable(DocumentKind::Docx, e))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::unreadable(DocumentKind::Docx, e))?;

    Ok(document_xml_to_text(&xml))
}

/// Flattens `word/document.xml` into plain text, one line per paragraph.
pub fn document_xml_to_text(xml: &str) -> String {
    let mut text = String::new();
    for caps in BODY_TOKEN_RE.captures_iter(xml) {
        if let Some(run) = caps.get(1) {
            text.push_str(&unescape_xml(run.as_str()));
        } else if caps.get(2).is_some() || caps.get(3).is_some() {
            text.push('\n');
        } else if caps.get(4).is_some() {
            text.push('\t');
        } else if caps.get(5).is_some() {
            text.push('\n');
        }
    }
    text
}

fn unescape_xml(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    ENTITY_RE
        .replace_all(raw, |caps: &regex::Captures| {
            let entity = &caps[1];
            match entity {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                _ => decode_char_ref(entity).unwrap_or_else(|| caps[0].to_string()),
            }
        })
        .into_owned()
}

fn decode_char_ref(entity: &str) -> Option<String> {
    let code = match entity.strip_prefix("#x") {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => entity.strip_prefix('#')?.parse().ok()?,
    };
    char::from_u32(code).map(String::from)
}

//! PDF document ingestion
//!
//! Extracts per-page text from an uploaded PDF so the caller can merge
//! it into the conversation (e.g. as context on the next user turn).
//! Extraction is all-or-nothing: a failing page aborts the whole
//! document rather than yielding partial output.

use lopdf::Document;
use thiserror::Error;

/// Text recovered from one page, 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPage {
    pub number: u32,
    pub text: String,
}

/// Page-ordered text recovered from an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pages: Vec<DocumentPage>,
}

impl ExtractedDocument {
    pub fn pages(&self) -> &[DocumentPage] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages concatenated in document order, each prefixed with a
    /// page-boundary marker for human readability.
    pub fn combined_text(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            out.push_str(&format!("\n--- Page {} ---\n{}\n", page.number, page.text));
        }
        out
    }
}

/// Ingestion failure. Unlike chat transport errors these are surfaced
/// to the caller as explicit rejections.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Not a PDF document")]
    UnsupportedDocument,

    #[error("Malformed PDF document: {0}")]
    MalformedDocument(String),

    #[error("Failed to decode page {page}: {message}")]
    PageDecode { page: u32, message: String },

    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}

/// Extract per-page text from a PDF.
///
/// Rejects anything that is not a PDF container with no state change.
/// Pages are processed strictly in ascending order, since the page
/// markers in [`ExtractedDocument::combined_text`] must appear in
/// document order. Parsing is CPU-bound, so it runs on the blocking
/// pool.
pub async fn extract(bytes: Vec<u8>) -> Result<ExtractedDocument, IngestError> {
    tokio::task::spawn_blocking(move || extract_sync(&bytes))
        .await
        .map_err(|e| IngestError::TaskFailed(e.to_string()))?
}

fn extract_sync(bytes: &[u8]) -> Result<ExtractedDocument, IngestError> {
    if !bytes.starts_with(b"%PDF-") {
        return Err(IngestError::UnsupportedDocument);
    }

    let doc = Document::load_mem(bytes)
        .map_err(|e| IngestError::MalformedDocument(e.to_string()))?;

    let mut pages = Vec::new();
    for (&number, _) in doc.get_pages().iter() {
        let raw = doc
            .extract_text(&[number])
            .map_err(|e| IngestError::PageDecode {
                page: number,
                message: e.to_string(),
            })?;

        // Text items joined with single spaces, matching how the
        // content items are read off the page.
        let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        pages.push(DocumentPage { number, text });
    }

    tracing::debug!(
        pages = pages.len(),
        chars = pages.iter().map(|p| p.text.len()).sum::<usize>(),
        "Extracted PDF text"
    );

    Ok(ExtractedDocument { pages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a minimal PDF with one text line per page.
    fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[tokio::test]
    async fn three_page_document_extracts_in_page_order() {
        let pdf = build_pdf(&["A", "B", "C"]);
        let extracted = extract(pdf).await.unwrap();

        assert_eq!(extracted.page_count(), 3);
        assert_eq!(extracted.pages()[0], DocumentPage { number: 1, text: "A".into() });
        assert_eq!(extracted.pages()[1], DocumentPage { number: 2, text: "B".into() });
        assert_eq!(extracted.pages()[2], DocumentPage { number: 3, text: "C".into() });

        let combined = extracted.combined_text();
        let marker_positions: Vec<_> = (1..=3)
            .map(|n| {
                combined
                    .find(&format!("--- Page {n} ---"))
                    .expect("marker present")
            })
            .collect();
        assert!(marker_positions.windows(2).all(|w| w[0] < w[1]));
        assert!(combined.contains("--- Page 2 ---\nB\n"));
    }

    #[tokio::test]
    async fn non_pdf_bytes_are_rejected() {
        let err = extract(b"just some text".to_vec()).await.unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedDocument));

        let err = extract(Vec::new()).await.unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedDocument));
    }

    #[tokio::test]
    async fn truncated_pdf_is_malformed_not_unsupported() {
        let err = extract(b"%PDF-1.5 garbage".to_vec()).await.unwrap_err();
        assert!(matches!(err, IngestError::MalformedDocument(_)));
    }

    #[tokio::test]
    async fn page_text_items_are_joined_with_single_spaces() {
        let pdf = build_pdf(&["Hello World from page one"]);
        let extracted = extract(pdf).await.unwrap();
        assert_eq!(extracted.pages()[0].text, "Hello World from page one");
    }
}

//! Documents service, including multipart upload.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::client::{ClientInner, PageIter};
use crate::models::{ApplicantId, Document, DocumentId, DocumentUpload};
use crate::Result;

/// Service for document-related operations.
///
/// # Example
///
/// ```no_run
/// use onfido::{ApplicantId, DocumentType, DocumentUpload};
///
/// # async fn example(client: onfido::OnfidoClient, png: Vec<u8>) -> onfido::Result<()> {
/// let document = client.documents().upload(DocumentUpload {
///     applicant_id: ApplicantId::new("appl-123"),
///     document_type: DocumentType::Passport,
///     side: None,
///     file_name: "passport.png".into(),
///     data: png,
/// }).await?;
/// println!("uploaded {:?}", document.id);
/// # Ok(())
/// # }
/// ```
pub struct DocumentsService {
    inner: Arc<ClientInner>,
}

impl DocumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Upload a document for an applicant.
    ///
    /// The file part's content type is sniffed from the leading bytes of
    /// the data; the API rejects parts tagged `application/octet-stream`,
    /// so reqwest's default part type is never used.
    pub async fn upload(&self, upload: DocumentUpload) -> Result<Document> {
        let content_type = sniff_content_type(&upload.data);

        let file = Part::bytes(upload.data)
            .file_name(upload.file_name)
            .mime_str(content_type)?;

        let mut form = Form::new()
            .part("file", file)
            .text(
                "type",
                serde_variant_name(&upload.document_type)?,
            )
            .text("applicant_id", upload.applicant_id.as_str().to_string());

        if let Some(side) = upload.side {
            form = form.text("side", serde_variant_name(&side)?);
        }

        self.inner.post_multipart("/documents", form).await
    }

    /// Retrieve a document by its ID.
    pub async fn get(&self, id: &DocumentId) -> Result<Document> {
        self.inner.get(&format!("/documents/{id}")).await
    }

    /// Download the raw file data for a document by its ID.
    pub async fn download(&self, id: &DocumentId) -> Result<Vec<u8>> {
        self.inner
            .get_bytes(&format!("/documents/{id}/download"))
            .await
    }

    /// List the documents for an applicant, lazily fetching pages.
    pub fn list(&self, applicant_id: &ApplicantId) -> PageIter<Document> {
        #[derive(serde::Deserialize)]
        struct Page {
            documents: Vec<Document>,
        }

        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("applicant_id", applicant_id.as_str())
            .finish();

        PageIter::new(self.inner.clone(), format!("/documents?{query}"), |body| {
            let page: Page = serde_json::from_slice(body)?;
            Ok(page.documents)
        })
    }
}

/// Render an enum's serde wire name as a plain string for form fields.
fn serde_variant_name<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_value(value)?;
    match json {
        serde_json::Value::String(s) => Ok(s),
        other => Ok(other.to_string()),
    }
}

/// Sniff a file's media type from its magic bytes.
///
/// Covers the formats the document API accepts (JPEG, PNG, PDF, plus a
/// couple of common strays); anything unrecognized keeps the generic
/// type and is left for the server to reject.
fn sniff_content_type(data: &[u8]) -> &'static str {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"%PDF-", "application/pdf"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"BM", "image/bmp"),
        (b"II*\x00", "image/tiff"),
        (b"MM\x00*", "image/tiff"),
    ];

    for (magic, mime) in SIGNATURES {
        if data.starts_with(magic) {
            return mime;
        }
    }
    // WebP: RIFF container with a WEBP tag at offset 8.
    if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
        return "image/webp";
    }
    "application/octet-stream"
}

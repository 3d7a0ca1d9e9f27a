//! Port interfaces for the application layer

use async_trait::async_trait;

use crate::core::error::Result;
use crate::generation::OrderDocumentGeneratorResult;
use crate::orders::{CaseData, DocumentReference, Language, OrderStatus, RenderFormat};

/// Stores document bytes and hands back a reference to them
#[async_trait]
pub trait DocumentUploader: Send + Sync {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        media_type: &str,
    ) -> Result<DocumentReference>;
}

/// Fetches the bytes behind a stored document reference
#[async_trait]
pub trait DocumentDownloader: Send + Sync {
    async fn download(&self, document: &DocumentReference) -> Result<Vec<u8>>;
}

/// A sealed copy of an uploaded order
#[derive(Debug, Clone, PartialEq)]
pub struct SealedDocument {
    pub bytes: Vec<u8>,
    /// Sealing may convert the document, e.g. Word to PDF
    pub format: RenderFormat,
}

/// Stamps the court seal onto a user-supplied order
#[async_trait]
pub trait DocumentSealer: Send + Sync {
    async fn seal(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        language: Language,
    ) -> Result<SealedDocument>;
}

/// Produces the document for a manually uploaded order
#[async_trait]
pub trait UploadedOrderProcessor: Send + Sync {
    async fn generate(
        &self,
        case_data: &CaseData,
        status: OrderStatus,
        language: Language,
    ) -> Result<OrderDocumentGeneratorResult>;
}

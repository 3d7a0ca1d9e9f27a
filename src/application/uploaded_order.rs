//! Passthrough for orders the user uploads instead of generating

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{DocumentDownloader, DocumentSealer, UploadedOrderProcessor};
use crate::core::error::{OrderError, Result};
use crate::generation::OrderDocumentGeneratorResult;
use crate::orders::{CaseData, Language, OrderStatus, RenderFormat, YesNo};

/// Returns the uploaded order as-is, or sealed when the user asked for a seal
/// and the order is being issued.
pub struct UploadedOrderDocumentGenerator {
    downloader: Arc<dyn DocumentDownloader>,
    sealer: Arc<dyn DocumentSealer>,
}

impl UploadedOrderDocumentGenerator {
    pub fn new(downloader: Arc<dyn DocumentDownloader>, sealer: Arc<dyn DocumentSealer>) -> Self {
        Self { downloader, sealer }
    }
}

#[async_trait]
impl UploadedOrderProcessor for UploadedOrderDocumentGenerator {
    async fn generate(
        &self,
        case_data: &CaseData,
        status: OrderStatus,
        language: Language,
    ) -> Result<OrderDocumentGeneratorResult> {
        let event_data = &case_data.manage_orders_event_data;
        let uploaded = event_data
            .manage_orders_upload_order_file
            .as_ref()
            .ok_or_else(|| OrderError::missing("manageOrdersUploadOrderFile"))?;
        let format = RenderFormat::from_file_name(&uploaded.filename).ok_or_else(|| {
            OrderError::invalid(format!(
                "uploaded order '{}' is not a PDF or Word document",
                uploaded.filename
            ))
        })?;

        let bytes = self.downloader.download(uploaded).await?;

        let needs_sealing =
            YesNo::is_yes(event_data.manage_orders_need_sealing) && status == OrderStatus::Sealed;
        if !needs_sealing {
            tracing::debug!(file_name = %uploaded.filename, %format, "Passing uploaded order through");
            return Ok(OrderDocumentGeneratorResult {
                bytes,
                format,
                additional_documents: Vec::new(),
            });
        }

        let sealed = self.sealer.seal(bytes, &uploaded.filename, language).await?;
        tracing::info!(
            file_name = %uploaded.filename,
            format = %sealed.format,
            "Sealed uploaded order"
        );

        Ok(OrderDocumentGeneratorResult {
            bytes: sealed.bytes,
            format: sealed.format,
            additional_documents: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::SealedDocument;
    use crate::orders::{DocumentReference, Order, fixtures};
    use std::sync::Mutex;

    struct StaticDownloader;

    #[async_trait]
    impl DocumentDownloader for StaticDownloader {
        async fn download(&self, document: &DocumentReference) -> Result<Vec<u8>> {
            Ok(format!("contents of {}", document.filename).into_bytes())
        }
    }

    #[derive(Default)]
    struct RecordingSealer {
        sealed: Mutex<Vec<(String, Language)>>,
    }

    #[async_trait]
    impl DocumentSealer for RecordingSealer {
        async fn seal(
            &self,
            mut bytes: Vec<u8>,
            file_name: &str,
            language: Language,
        ) -> Result<SealedDocument> {
            self.sealed
                .lock()
                .unwrap()
                .push((file_name.to_string(), language));
            bytes.extend_from_slice(b" [sealed]");
            Ok(SealedDocument {
                bytes,
                format: RenderFormat::Pdf,
            })
        }
    }

    fn uploaded_case(file_name: &str, need_sealing: Option<YesNo>) -> CaseData {
        let mut case_data = fixtures::case_data(Order::OtherOrder);
        let event_data = &mut case_data.manage_orders_event_data;
        event_data.manage_orders_upload_order_file = Some(fixtures::document(file_name));
        event_data.manage_orders_need_sealing = need_sealing;
        case_data
    }

    fn processor(sealer: Arc<RecordingSealer>) -> UploadedOrderDocumentGenerator {
        UploadedOrderDocumentGenerator::new(Arc::new(StaticDownloader), sealer)
    }

    #[tokio::test]
    async fn test_format_follows_uploaded_file() {
        let sealer = Arc::new(RecordingSealer::default());
        let result = processor(sealer.clone())
            .generate(
                &uploaded_case("contact.docx", Some(YesNo::No)),
                OrderStatus::Sealed,
                Language::English,
            )
            .await
            .unwrap();

        assert_eq!(result.format, RenderFormat::Word);
        assert_eq!(result.bytes, b"contents of contact.docx".to_vec());
        assert!(result.additional_documents.is_empty());
        assert!(sealer.sealed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sealed_when_requested_and_issued() {
        let sealer = Arc::new(RecordingSealer::default());
        let result = processor(sealer.clone())
            .generate(
                &uploaded_case("contact.pdf", Some(YesNo::Yes)),
                OrderStatus::Sealed,
                Language::Welsh,
            )
            .await
            .unwrap();

        assert_eq!(result.bytes, b"contents of contact.pdf [sealed]".to_vec());
        assert_eq!(
            *sealer.sealed.lock().unwrap(),
            vec![("contact.pdf".to_string(), Language::Welsh)]
        );
    }

    #[tokio::test]
    async fn test_drafts_are_never_sealed() {
        let sealer = Arc::new(RecordingSealer::default());
        let result = processor(sealer.clone())
            .generate(
                &uploaded_case("contact.pdf", Some(YesNo::Yes)),
                OrderStatus::Draft,
                Language::English,
            )
            .await
            .unwrap();

        assert_eq!(result.bytes, b"contents of contact.pdf".to_vec());
        assert!(sealer.sealed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_or_unsupported_upload() {
        let sealer = Arc::new(RecordingSealer::default());

        let missing = processor(sealer.clone())
            .generate(
                &fixtures::case_data(Order::OtherOrder),
                OrderStatus::Sealed,
                Language::English,
            )
            .await;
        assert!(matches!(missing, Err(OrderError::MissingField(_))));

        let unsupported = processor(sealer)
            .generate(
                &uploaded_case("contact.png", None),
                OrderStatus::Sealed,
                Language::English,
            )
            .await;
        assert!(matches!(unsupported, Err(OrderError::InvalidInput(_))));
    }
}

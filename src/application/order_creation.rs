//! Use case for creating and storing an order document

use std::sync::Arc;

use serde::Serialize;

use crate::application::{DocumentUploader, UploadedOrderProcessor};
use crate::core::error::{OrderError, Result};
use crate::generation::OrderDocumentGenerator;
use crate::orders::{
    CaseData, DocumentReference, Language, OrderSourceType, OrderStatus, RenderFormat,
};

/// What the caller gets back: never the bytes, only where they were stored
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderDocument {
    pub document: DocumentReference,
    pub order_title: String,
    pub additional_documents: Vec<DocumentReference>,
}

/// File name used for every draft, whatever the order type
pub fn draft_file_name(format: RenderFormat, language: Language) -> String {
    match language {
        Language::English => format!("Preview order.{}", format.extension()),
        Language::Welsh => format!("Preview order - Welsh.{}", format.extension()),
    }
}

/// Entry point for order creation
pub struct OrderCreationService {
    generator: Arc<OrderDocumentGenerator>,
    uploaded_orders: Arc<dyn UploadedOrderProcessor>,
    uploader: Arc<dyn DocumentUploader>,
}

impl OrderCreationService {
    pub fn new(
        generator: Arc<OrderDocumentGenerator>,
        uploaded_orders: Arc<dyn UploadedOrderProcessor>,
        uploader: Arc<dyn DocumentUploader>,
    ) -> Self {
        Self {
            generator,
            uploaded_orders,
            uploader,
        }
    }

    pub async fn create_order_document(
        &self,
        case_data: &CaseData,
        status: OrderStatus,
        format: RenderFormat,
        language: Language,
    ) -> Result<CreatedOrderDocument> {
        let event_data = &case_data.manage_orders_event_data;
        let order = event_data
            .manage_orders_type
            .ok_or_else(|| OrderError::missing("manageOrdersType"))?;

        // 1. Produce the bytes
        let result = match order.source_type() {
            OrderSourceType::ManualUpload => {
                tracing::debug!(%order, "Using uploaded order");
                self.uploaded_orders
                    .generate(case_data, status, language)
                    .await?
            }
            OrderSourceType::Digital => {
                self.generator
                    .generate(order, case_data, status, format, language)
                    .await?
            }
        };

        // 2. Name after the format actually produced
        let file_name = match status {
            OrderStatus::Draft => draft_file_name(result.format, language),
            OrderStatus::Sealed | OrderStatus::Plain => order.file_name(result.format, event_data),
        };

        // 3. Store
        let document = self
            .uploader
            .upload(result.bytes, &file_name, result.format.media_type())
            .await?;

        tracing::info!(%order, %status, file_name = %document.filename, "Created order document");

        Ok(CreatedOrderDocument {
            document,
            order_title: order.display_title(event_data),
            additional_documents: result.additional_documents,
        })
    }
}

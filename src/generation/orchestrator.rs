//! Order document generation - coordinates the generation workflow

use std::sync::Arc;

use crate::core::error::{OrderError, Result};
use crate::generation::{
    CommonElementDecorator, DocumentRenderer, GeneratorHolder, OrderDocumentGeneratorResult,
};
use crate::orders::{
    CaseData, DocumentReference, Language, Order, OrderSourceType, OrderStatus, RenderFormat,
};

/// Turns an order type and a case into rendered document bytes
pub struct OrderDocumentGenerator {
    holder: Arc<GeneratorHolder>,
    decorator: Arc<CommonElementDecorator>,
    renderer: Arc<dyn DocumentRenderer>,
}

impl OrderDocumentGenerator {
    pub fn new(
        holder: Arc<GeneratorHolder>,
        decorator: Arc<CommonElementDecorator>,
        renderer: Arc<dyn DocumentRenderer>,
    ) -> Self {
        Self {
            holder,
            decorator,
            renderer,
        }
    }

    /// Run the generation workflow.
    ///
    /// Generation, decoration and rendering run strictly in that order. Any
    /// failure aborts the whole request; nothing is defaulted or retried.
    pub async fn generate(
        &self,
        order: Order,
        case_data: &CaseData,
        status: OrderStatus,
        format: RenderFormat,
        language: Language,
    ) -> Result<OrderDocumentGeneratorResult> {
        // Orders without Welsh wording would come out half translated
        if language == Language::Welsh && !self.can_generate_translated_order(order) {
            return Err(OrderError::invalid(format!(
                "{order} cannot be generated in Welsh"
            )));
        }

        // 1. Resolve the order's strategy
        let generator = self.holder.resolve_generator(order)?;
        let template = generator.template();

        tracing::debug!(%order, ?template, %status, %format, %language, "Generating order document");

        // 2. Order-specific content
        let parameters = generator.generate(case_data, language)?;

        // 3. Case-wide fields
        let parameters = self
            .decorator
            .decorate(parameters, case_data, status, language)?;

        // 4. Render
        let rendered = self
            .renderer
            .render(template, &parameters, format, language)
            .await?;

        // 5. Attachments
        let additional_documents = self.additional_documents(order, case_data)?;

        tracing::info!(
            %order,
            format = %rendered.format,
            bytes = rendered.bytes.len(),
            additional_documents = additional_documents.len(),
            "Rendered order document"
        );

        Ok(OrderDocumentGeneratorResult {
            bytes: rendered.bytes,
            format: rendered.format,
            additional_documents,
        })
    }

    /// Documents to attach alongside `order`; empty when no collector is registered
    pub fn additional_documents(
        &self,
        order: Order,
        case_data: &CaseData,
    ) -> Result<Vec<DocumentReference>> {
        Ok(self
            .holder
            .resolve_additional_documents_collector(order)?
            .map(|collector| collector.additional_documents(case_data))
            .unwrap_or_default())
    }

    /// Whether upstream screens may offer a Welsh translation of `order`.
    ///
    /// Answered from the catalogue alone; case data is never consulted.
    pub fn can_generate_translated_order(&self, order: Order) -> bool {
        order.source_type() == OrderSourceType::Digital && order.is_translatable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{DocmosisParameters, RenderedDocument};
    use crate::generation::test_support::{
        RecordingRenderer, order_document_generator as orchestrator,
    };
    use crate::orders::{DocmosisTemplate, EpoType, ManageOrdersEndDateType, YesNo, fixtures};
    use async_trait::async_trait;

    struct FailingRenderer;

    #[async_trait]
    impl DocumentRenderer for FailingRenderer {
        async fn render(
            &self,
            _template: DocmosisTemplate,
            _parameters: &DocmosisParameters,
            _format: RenderFormat,
            _language: Language,
        ) -> Result<RenderedDocument> {
            Err(OrderError::Render("docmosis unavailable".to_string()))
        }
    }

    /// Always answers with HTML, whatever was asked for
    struct HtmlRenderer;

    #[async_trait]
    impl DocumentRenderer for HtmlRenderer {
        async fn render(
            &self,
            _template: DocmosisTemplate,
            _parameters: &DocmosisParameters,
            _format: RenderFormat,
            _language: Language,
        ) -> Result<RenderedDocument> {
            Ok(RenderedDocument {
                bytes: b"<!DOCTYPE html>".to_vec(),
                format: RenderFormat::Html,
            })
        }
    }

    fn interim_care_case() -> CaseData {
        let mut case_data = fixtures::case_data(Order::C33InterimCareOrder);
        case_data
            .manage_orders_event_data
            .manage_orders_end_date_type_with_end_of_proceedings =
            Some(ManageOrdersEndDateType::EndOfProceedings);
        case_data
    }

    #[tokio::test]
    async fn test_generate_runs_full_pipeline() {
        let renderer = Arc::new(RecordingRenderer::default());
        let generator = orchestrator(renderer.clone());

        let result = generator
            .generate(
                Order::C33InterimCareOrder,
                &interim_care_case(),
                OrderStatus::Sealed,
                RenderFormat::Pdf,
                Language::English,
            )
            .await
            .unwrap();

        assert_eq!(result.bytes, b"%PDF-1.7".to_vec());
        assert_eq!(result.format, RenderFormat::Pdf);
        assert!(result.additional_documents.is_empty());

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (template, parameters, format, language) = &calls[0];
        assert_eq!(*template, DocmosisTemplate::OrderV2);
        assert_eq!(*format, RenderFormat::Pdf);
        assert_eq!(*language, Language::English);
        assert_eq!(parameters.court_name.as_deref(), Some("Family Court sitting at Swansea"));
        assert_eq!(parameters.date_of_issue.as_deref(), Some("5 June 2021"));
        assert!(parameters.courtseal.is_some());
        assert!(parameters.draftbackground.is_none());
        assert!(parameters.order_details.is_some());
    }

    #[tokio::test]
    async fn test_epo_collects_power_of_arrest() {
        let renderer = Arc::new(RecordingRenderer::default());
        let generator = orchestrator(renderer.clone());

        let mut case_data = fixtures::case_data(Order::C23EmergencyProtectionOrder);
        let event_data = &mut case_data.manage_orders_event_data;
        event_data.manage_orders_approval_date_time = fixtures::approval_date().and_hms_opt(10, 0, 0);
        event_data.manage_orders_end_date_time = fixtures::approval_date().and_hms_opt(18, 0, 0);
        event_data.manage_orders_epo_type = Some(EpoType::RemoveToAccommodation);
        event_data.manage_orders_exclusion_requirement = Some(YesNo::Yes);
        event_data.manage_orders_who_is_excluded = Some("Jack Smith".into());
        event_data.manage_orders_exclusion_start_date = Some(fixtures::approval_date());
        event_data.manage_orders_power_of_arrest = Some(fixtures::document("arrest.pdf"));

        let result = generator
            .generate(
                Order::C23EmergencyProtectionOrder,
                &case_data,
                OrderStatus::Draft,
                RenderFormat::Word,
                Language::English,
            )
            .await
            .unwrap();

        assert_eq!(result.format, RenderFormat::Word);
        assert_eq!(result.additional_documents, vec![fixtures::document("arrest.pdf")]);

        let calls = renderer.calls.lock().unwrap();
        let (template, parameters, _, _) = &calls[0];
        assert_eq!(*template, DocmosisTemplate::EpoV2);
        // the generator's date-time survives decoration
        assert_eq!(parameters.date_of_issue.as_deref(), Some("5 June 2021, 10:00am"));
    }

    #[tokio::test]
    async fn test_generation_errors_skip_rendering() {
        let renderer = Arc::new(RecordingRenderer::default());
        let generator = orchestrator(renderer.clone());

        let mut case_data = fixtures::case_data(Order::C32bDischargeOfCareOrder);
        case_data.manage_orders_event_data.manage_orders_care_order_issued_court = Some("1".into());
        case_data.manage_orders_event_data.manage_orders_care_order_issued_date =
            Some(fixtures::approval_date());

        let result = generator
            .generate(
                Order::C32bDischargeOfCareOrder,
                &case_data,
                OrderStatus::Sealed,
                RenderFormat::Pdf,
                Language::English,
            )
            .await;

        assert!(matches!(result, Err(OrderError::Lookup(_))));
        assert_eq!(renderer.call_count(), 0);
    }

    #[tokio::test]
    async fn test_render_failure_propagates() {
        let result = orchestrator(Arc::new(FailingRenderer))
            .generate(
                Order::C33InterimCareOrder,
                &interim_care_case(),
                OrderStatus::Sealed,
                RenderFormat::Pdf,
                Language::English,
            )
            .await;
        assert!(matches!(result, Err(OrderError::Render(_))));
    }

    #[tokio::test]
    async fn test_result_carries_format_actually_rendered() {
        let result = orchestrator(Arc::new(HtmlRenderer))
            .generate(
                Order::C33InterimCareOrder,
                &interim_care_case(),
                OrderStatus::Sealed,
                RenderFormat::Pdf,
                Language::English,
            )
            .await
            .unwrap();

        assert_eq!(result.format, RenderFormat::Html);
        assert_eq!(result.bytes, b"<!DOCTYPE html>".to_vec());
    }

    #[tokio::test]
    async fn test_untranslatable_order_rejected_in_welsh() {
        let renderer = Arc::new(RecordingRenderer::default());
        let generator = orchestrator(renderer.clone());

        let mut case_data = fixtures::case_data(Order::C23EmergencyProtectionOrder);
        let event_data = &mut case_data.manage_orders_event_data;
        event_data.manage_orders_approval_date_time = fixtures::approval_date().and_hms_opt(14, 30, 0);
        event_data.manage_orders_end_date_time = fixtures::approval_date().and_hms_opt(18, 0, 0);
        event_data.manage_orders_epo_type = Some(EpoType::RemoveToAccommodation);

        let result = generator
            .generate(
                Order::C23EmergencyProtectionOrder,
                &case_data,
                OrderStatus::Sealed,
                RenderFormat::Pdf,
                Language::Welsh,
            )
            .await;

        assert!(matches!(result, Err(OrderError::InvalidInput(_))));
        assert_eq!(renderer.call_count(), 0);

        let english = generator
            .generate(
                Order::C23EmergencyProtectionOrder,
                &case_data,
                OrderStatus::Sealed,
                RenderFormat::Pdf,
                Language::English,
            )
            .await;
        assert!(english.is_ok());
        assert_eq!(renderer.call_count(), 1);
    }

    #[tokio::test]
    async fn test_manual_upload_is_configuration_error() {
        let result = orchestrator(Arc::new(RecordingRenderer::default()))
            .generate(
                Order::OtherOrder,
                &fixtures::case_data(Order::OtherOrder),
                OrderStatus::Sealed,
                RenderFormat::Pdf,
                Language::English,
            )
            .await;
        let error = result.err().unwrap();
        assert!(error.is_configuration());
    }

    #[test]
    fn test_additional_documents_empty_without_collector() {
        let generator = orchestrator(Arc::new(RecordingRenderer::default()));
        let documents = generator
            .additional_documents(Order::C32aCareOrder, &fixtures::case_data(Order::C32aCareOrder))
            .unwrap();
        assert!(documents.is_empty());
    }

    #[test]
    fn test_can_generate_translated_order() {
        let generator = orchestrator(Arc::new(RecordingRenderer::default()));
        assert!(generator.can_generate_translated_order(Order::C32aCareOrder));
        assert!(generator.can_generate_translated_order(Order::C21BlankOrder));
        assert!(!generator.can_generate_translated_order(Order::C23EmergencyProtectionOrder));
        assert!(!generator.can_generate_translated_order(Order::OtherOrder));
    }
}

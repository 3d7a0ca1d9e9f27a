//! Port interfaces for the generation domain

use async_trait::async_trait;

use crate::core::error::Result;
use crate::generation::{DocmosisParameters, RenderedDocument};
use crate::orders::{
    CaseData, Child, DocmosisTemplate, DocumentReference, Element, Judge, JudgeAndLegalAdvisor,
    Language, Order, RenderFormat,
};

/// Builds the order-specific parameters for one order type
pub trait DocmosisParameterGenerator: Send + Sync {
    /// The order this generator implements
    fn accept(&self) -> Order;

    /// Build the order-specific parameters from the case in `language`
    fn generate(&self, case_data: &CaseData, language: Language) -> Result<DocmosisParameters>;

    /// Layout to render the parameters against
    fn template(&self) -> DocmosisTemplate;
}

/// A generator that only supplies the order-specific transformation.
///
/// Wrap it in [`Templated`] to register it; the wrapper seeds the bag with the
/// catalogue title and legal basis before calling [`transform`].
///
/// [`transform`]: TemplatedParameterGenerator::transform
pub trait TemplatedParameterGenerator: Send + Sync {
    fn accept(&self) -> Order;

    fn template(&self) -> DocmosisTemplate {
        DocmosisTemplate::OrderV2
    }

    /// Fill the order-specific fields of a bag already seeded for this order
    fn transform(
        &self,
        parameters: DocmosisParameters,
        case_data: &CaseData,
        language: Language,
    ) -> Result<DocmosisParameters>;
}

/// Adapts a [`TemplatedParameterGenerator`] into a [`DocmosisParameterGenerator`]
pub struct Templated<G>(pub G);

impl<G: TemplatedParameterGenerator> DocmosisParameterGenerator for Templated<G> {
    fn accept(&self) -> Order {
        self.0.accept()
    }

    fn generate(&self, case_data: &CaseData, language: Language) -> Result<DocmosisParameters> {
        let order = self.0.accept();
        let mut parameters =
            self.0
                .transform(DocmosisParameters::for_order(order), case_data, language)?;
        // Legal basis always comes from the catalogue
        parameters.children_act = order.children_act().to_string();
        Ok(parameters)
    }

    fn template(&self) -> DocmosisTemplate {
        self.0.template()
    }
}

/// Supplies documents that must accompany a generated order
pub trait AdditionalDocumentsCollector: Send + Sync {
    fn accept(&self) -> Order;

    /// Empty when nothing applies
    fn additional_documents(&self, case_data: &CaseData) -> Vec<DocumentReference>;
}

/// Resolves which children an order is about
pub trait ChildrenSelector: Send + Sync {
    fn selected_children(&self, case_data: &CaseData) -> Result<Vec<Element<Child>>>;
}

/// Resolves the judge shown on an order
pub trait JudgeSelector: Send + Sync {
    fn selected_judge(
        &self,
        event_judge: Option<&JudgeAndLegalAdvisor>,
        allocated_judge: Option<&Judge>,
    ) -> Option<JudgeAndLegalAdvisor>;
}

/// Court name for a local-authority code
pub trait CourtLookup: Send + Sync {
    fn court_name(&self, local_authority_code: &str) -> Result<String>;
}

/// Hearing venue name for a venue id
pub trait HearingVenueLookup: Send + Sync {
    fn venue_name(&self, venue_id: &str) -> Result<String>;
}

/// Renders a parameter bag into document bytes
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Render `parameters` against `template`.
    ///
    /// `format` is a request; the returned document carries the format the
    /// renderer actually produced.
    async fn render(
        &self,
        template: DocmosisTemplate,
        parameters: &DocmosisParameters,
        format: RenderFormat,
        language: Language,
    ) -> Result<RenderedDocument>;
}

//! C32A final care order

use std::sync::Arc;

use super::{ChildWording, local_authority_name};
use crate::core::error::Result;
use crate::generation::{ChildrenSelector, DocmosisParameters, TemplatedParameterGenerator};
use crate::orders::{CaseData, Language, Order};

pub struct C32aCareOrderDocumentParameterGenerator {
    children_selector: Arc<dyn ChildrenSelector>,
}

impl C32aCareOrderDocumentParameterGenerator {
    pub fn new(children_selector: Arc<dyn ChildrenSelector>) -> Self {
        Self { children_selector }
    }
}

impl TemplatedParameterGenerator for C32aCareOrderDocumentParameterGenerator {
    fn accept(&self) -> Order {
        Order::C32aCareOrder
    }

    fn transform(
        &self,
        parameters: DocmosisParameters,
        case_data: &CaseData,
        language: Language,
    ) -> Result<DocmosisParameters> {
        let wording = ChildWording::resolve(self.children_selector.as_ref(), case_data, language)?;
        let local_authority = local_authority_name(case_data)?;

        let details = match language {
            Language::English => format!(
                "The Court orders that the {} {} placed in the care of {local_authority}.",
                wording.noun(),
                wording.is_or_are()
            ),
            Language::Welsh => format!(
                "Mae'r Llys yn gorchymyn bod y {} {} yng ngofal {local_authority}.",
                wording.noun(),
                wording.welsh_placed()
            ),
        };

        Ok(DocmosisParameters {
            order_details: Some(details),
            local_authority_name: Some(local_authority.to_string()),
            further_directions: case_data
                .manage_orders_event_data
                .manage_orders_further_directions
                .clone(),
            ..parameters
        })
    }
}

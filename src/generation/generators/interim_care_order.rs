//! C33 interim care order

use std::sync::Arc;

use super::end_date::{OrderEnd, resolve_end};
use super::{ChildWording, local_authority_name};
use crate::core::error::{OrderError, Result};
use crate::generation::{ChildrenSelector, DocmosisParameters, TemplatedParameterGenerator};
use crate::orders::{CaseData, Language, Order};

pub struct C33InterimCareOrderDocumentParameterGenerator {
    children_selector: Arc<dyn ChildrenSelector>,
}

impl C33InterimCareOrderDocumentParameterGenerator {
    pub fn new(children_selector: Arc<dyn ChildrenSelector>) -> Self {
        Self { children_selector }
    }
}

impl TemplatedParameterGenerator for C33InterimCareOrderDocumentParameterGenerator {
    fn accept(&self) -> Order {
        Order::C33InterimCareOrder
    }

    fn transform(
        &self,
        parameters: DocmosisParameters,
        case_data: &CaseData,
        language: Language,
    ) -> Result<DocmosisParameters> {
        let event_data = &case_data.manage_orders_event_data;
        let wording = ChildWording::resolve(self.children_selector.as_ref(), case_data, language)?;
        let local_authority = local_authority_name(case_data)?;
        let end = resolve_end(
            event_data,
            event_data.manage_orders_end_date_type_with_end_of_proceedings,
            language,
        )?;

        let until = match (language, end) {
            (Language::English, OrderEnd::EndOfProceedings) => {
                "until the end of the proceedings or until a further order is made".to_string()
            }
            (Language::English, OrderEnd::OnDate(date)) => format!("until {date}"),
            (Language::Welsh, OrderEnd::EndOfProceedings) => {
                "hyd at ddiwedd yr achos, neu hyd nes y gwneir gorchymyn pellach".to_string()
            }
            (Language::Welsh, OrderEnd::OnDate(date)) => format!("tan {date}"),
            (_, OrderEnd::AfterMonths { .. }) => {
                return Err(OrderError::invalid(
                    "an interim care order cannot end after a number of months",
                ));
            }
        };

        let details = match language {
            Language::English => format!(
                "The Court orders that the {} {} placed in the care of {local_authority} {until}.",
                wording.noun(),
                wording.is_or_are()
            ),
            Language::Welsh => format!(
                "Mae'r Llys yn gorchymyn bod y {} {} yng ngofal {local_authority} {until}.",
                wording.noun(),
                wording.welsh_placed()
            ),
        };

        Ok(DocmosisParameters {
            order_details: Some(details),
            local_authority_name: Some(local_authority.to_string()),
            further_directions: event_data.manage_orders_further_directions.clone(),
            ..parameters
        })
    }
}

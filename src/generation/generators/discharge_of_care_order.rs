//! C32B discharge of care order

use std::sync::Arc;

use crate::core::error::{OrderError, Result};
use crate::core::utils::{format_date, non_blank};
use crate::generation::{DocmosisParameters, HearingVenueLookup, TemplatedParameterGenerator};
use crate::orders::{CaseData, Language, Order};

/// Names the court that made the original care order via the venue lookup
pub struct C32bDischargeOfCareOrderDocumentParameterGenerator {
    venue_lookup: Arc<dyn HearingVenueLookup>,
}

impl C32bDischargeOfCareOrderDocumentParameterGenerator {
    pub fn new(venue_lookup: Arc<dyn HearingVenueLookup>) -> Self {
        Self { venue_lookup }
    }
}

impl TemplatedParameterGenerator for C32bDischargeOfCareOrderDocumentParameterGenerator {
    fn accept(&self) -> Order {
        Order::C32bDischargeOfCareOrder
    }

    fn transform(
        &self,
        parameters: DocmosisParameters,
        case_data: &CaseData,
        language: Language,
    ) -> Result<DocmosisParameters> {
        let event_data = &case_data.manage_orders_event_data;

        let venue_id = non_blank(event_data.manage_orders_care_order_issued_court.as_deref())
            .ok_or_else(|| OrderError::missing("manageOrdersCareOrderIssuedCourt"))?;
        let issued_date = event_data
            .manage_orders_care_order_issued_date
            .ok_or_else(|| OrderError::missing("manageOrdersCareOrderIssuedDate"))?;

        let venue = self.venue_lookup.venue_name(venue_id)?;
        let issued_on = format_date(issued_date, language);

        let details = match language {
            Language::English => {
                format!("The Court discharges the care order made by the {venue} on {issued_on}.")
            }
            Language::Welsh => {
                format!("Mae'r Llys yn rhyddhau'r gorchymyn gofal a wnaed gan {venue} ar {issued_on}.")
            }
        };

        Ok(DocmosisParameters {
            order_details: Some(details),
            further_directions: event_data.manage_orders_further_directions.clone(),
            ..parameters
        })
    }
}

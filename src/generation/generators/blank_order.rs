//! C21 blank order: the user writes the title and the whole body

use crate::core::error::{OrderError, Result};
use crate::core::utils::non_blank;
use crate::generation::{DocmosisParameterGenerator, DocmosisParameters};
use crate::orders::{CaseData, DocmosisTemplate, Language, Order};

/// Builds its whole bag directly rather than through [`crate::generation::Templated`]
pub struct C21BlankOrderDocumentParameterGenerator;

impl C21BlankOrderDocumentParameterGenerator {
    fn default_title(language: Language) -> &'static str {
        match language {
            Language::English => "Order",
            Language::Welsh => "Gorchymyn",
        }
    }
}

impl DocmosisParameterGenerator for C21BlankOrderDocumentParameterGenerator {
    fn accept(&self) -> Order {
        Order::C21BlankOrder
    }

    fn generate(&self, case_data: &CaseData, language: Language) -> Result<DocmosisParameters> {
        let event_data = &case_data.manage_orders_event_data;
        let order = self.accept();

        let details = non_blank(event_data.manage_orders_directions.as_deref())
            .ok_or_else(|| OrderError::missing("manageOrdersDirections"))?;
        let title = non_blank(event_data.manage_orders_title.as_deref())
            .unwrap_or(Self::default_title(language));

        Ok(DocmosisParameters {
            order_type: Some(order),
            order_title: title.to_string(),
            children_act: order.children_act().to_string(),
            order_details: Some(details.to_string()),
            ..DocmosisParameters::default()
        })
    }

    fn template(&self) -> DocmosisTemplate {
        DocmosisTemplate::OrderV2
    }
}

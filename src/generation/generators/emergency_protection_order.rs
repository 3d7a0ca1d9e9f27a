//! C23 emergency protection order.
//!
//! Uses its own template layout. The date of issue carries the approval time
//! because an EPO runs for a number of hours, so it is set here and the
//! decorator keeps it.

use std::sync::Arc;

use super::{ChildWording, local_authority_name};
use crate::core::error::{OrderError, Result};
use crate::core::utils::{format_date, format_date_time, non_blank};
use crate::generation::{
    ChildrenSelector, DocmosisParameters, EpoFields, OrderFields, TemplatedParameterGenerator,
};
use crate::orders::{CaseData, DocmosisTemplate, EpoType, Language, Order, YesNo};

pub struct C23EpoDocumentParameterGenerator {
    children_selector: Arc<dyn ChildrenSelector>,
}

impl C23EpoDocumentParameterGenerator {
    pub fn new(children_selector: Arc<dyn ChildrenSelector>) -> Self {
        Self { children_selector }
    }
}

fn epo_type_name(epo_type: EpoType) -> &'static str {
    match epo_type {
        EpoType::RemoveToAccommodation => "REMOVE_TO_ACCOMMODATION",
        EpoType::PreventRemoval => "PREVENT_REMOVAL",
    }
}

impl TemplatedParameterGenerator for C23EpoDocumentParameterGenerator {
    fn accept(&self) -> Order {
        Order::C23EmergencyProtectionOrder
    }

    fn template(&self) -> DocmosisTemplate {
        DocmosisTemplate::EpoV2
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

        let epo_type = event_data
            .manage_orders_epo_type
            .ok_or_else(|| OrderError::missing("manageOrdersEpoType"))?;
        let approved_at = event_data
            .manage_orders_approval_date_time
            .ok_or_else(|| OrderError::missing("manageOrdersApprovalDateTime"))?;
        let ends_at = event_data
            .manage_orders_end_date_time
            .ok_or_else(|| OrderError::missing("manageOrdersEndDateTime"))?;
        if ends_at <= approved_at {
            return Err(OrderError::invalid(
                "emergency protection order must end after it is approved",
            ));
        }

        let removal_address = event_data
            .manage_orders_epo_removal_address
            .as_ref()
            .map(|address| address.format(", "))
            .filter(|address| !address.is_empty());

        let details = match epo_type {
            EpoType::RemoveToAccommodation => format!(
                "The Court authorises {local_authority} to remove the {} to accommodation provided by or on behalf of the applicant.",
                wording.noun()
            ),
            EpoType::PreventRemoval => {
                let address = removal_address
                    .as_deref()
                    .ok_or_else(|| OrderError::missing("manageOrdersEpoRemovalAddress"))?;
                format!(
                    "The Court authorises the applicant to prevent the removal of the {} from {address}.",
                    wording.noun()
                )
            }
        };

        let exclusion_requirement = if YesNo::is_yes(event_data.manage_orders_exclusion_requirement) {
            let excluded = non_blank(event_data.manage_orders_who_is_excluded.as_deref())
                .ok_or_else(|| OrderError::missing("manageOrdersWhoIsExcluded"))?;
            let starts = event_data
                .manage_orders_exclusion_start_date
                .ok_or_else(|| OrderError::missing("manageOrdersExclusionStartDate"))?;
            let home = removal_address.as_deref().unwrap_or("the home of the child");
            Some(format!(
                "The Court directs that {excluded} be excluded from {home} from {} so that the {} may continue to live there.",
                format_date(starts, language),
                wording.noun()
            ))
        } else {
            None
        };

        Ok(DocmosisParameters {
            order_details: Some(details),
            local_authority_name: Some(local_authority.to_string()),
            further_directions: event_data.manage_orders_further_directions.clone(),
            date_of_issue: Some(format_date_time(approved_at, language)),
            fields: OrderFields::EmergencyProtection(EpoFields {
                epo_type: epo_type_name(epo_type).to_string(),
                include_phrase: YesNo::is_yes(event_data.manage_orders_include_phrase),
                children_description: non_blank(
                    event_data.manage_orders_children_description.as_deref(),
                )
                .map(str::to_string),
                removal_address,
                epo_end_date_time: format_date_time(ends_at, language),
                exclusion_requirement,
            }),
            ..parameters
        })
    }
}

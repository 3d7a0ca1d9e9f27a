//! C35B interim supervision order

use std::sync::Arc;

use super::end_date::{OrderEnd, resolve_end};
use super::{ChildWording, local_authority_name};
use crate::core::error::{OrderError, Result};
use crate::generation::{ChildrenSelector, DocmosisParameters, TemplatedParameterGenerator};
use crate::orders::{CaseData, Language, Order};

pub struct C35bInterimSupervisionOrderDocumentParameterGenerator {
    children_selector: Arc<dyn ChildrenSelector>,
}

impl C35bInterimSupervisionOrderDocumentParameterGenerator {
    pub fn new(children_selector: Arc<dyn ChildrenSelector>) -> Self {
        Self { children_selector }
    }
}

impl TemplatedParameterGenerator for C35bInterimSupervisionOrderDocumentParameterGenerator {
    fn accept(&self) -> Order {
        Order::C35bInterimSupervisionOrder
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

        let child = wording.noun();
        let details = match (language, end) {
            (Language::English, OrderEnd::EndOfProceedings) => format!(
                "The Court orders {local_authority} to supervise the {child} until the end of the proceedings, or until a further order is made."
            ),
            (Language::English, OrderEnd::OnDate(date)) => {
                format!("The Court orders {local_authority} to supervise the {child} until {date}.")
            }
            (Language::Welsh, OrderEnd::EndOfProceedings) => format!(
                "Mae'r Llys yn gorchymyn i {local_authority} oruchwylio'r {child} hyd at ddiwedd yr achos, neu hyd nes y gwneir gorchymyn pellach."
            ),
            (Language::Welsh, OrderEnd::OnDate(date)) => format!(
                "Mae'r Llys yn gorchymyn i {local_authority} oruchwylio'r {child} tan {date}."
            ),
            (_, OrderEnd::AfterMonths { .. }) => {
                return Err(OrderError::invalid(
                    "an interim supervision order cannot end after a number of months",
                ));
            }
        };

        Ok(DocmosisParameters {
            order_details: Some(details),
            local_authority_name: Some(local_authority.to_string()),
            further_directions: event_data.manage_orders_further_directions.clone(),
            ..parameters
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::generators::test_support::all_children;
    use crate::generation::{DocmosisParameterGenerator, Templated};
    use crate::orders::{ManageOrdersEndDateType, fixtures};
    use chrono::NaiveDate;

    fn generator() -> Templated<C35bInterimSupervisionOrderDocumentParameterGenerator> {
        Templated(C35bInterimSupervisionOrderDocumentParameterGenerator::new(
            all_children(),
        ))
    }

    fn case_ending(end: ManageOrdersEndDateType) -> CaseData {
        let mut case_data = fixtures::case_data(Order::C35bInterimSupervisionOrder);
        let event_data = &mut case_data.manage_orders_event_data;
        event_data.manage_orders_end_date_type_with_end_of_proceedings = Some(end);
        event_data.manage_orders_set_date_and_time_end_date = NaiveDate::from_ymd_opt(2021, 9, 1)
            .and_then(|date| date.and_hms_opt(10, 15, 0));
        case_data
    }

    #[test]
    fn test_english_end_of_proceedings() {
        let parameters = generator()
            .generate(
                &case_ending(ManageOrdersEndDateType::EndOfProceedings),
                Language::English,
            )
            .unwrap();
        assert_eq!(
            parameters.order_details.as_deref(),
            Some("The Court orders Swansea City Council to supervise the child until the end of the proceedings, or until a further order is made.")
        );
    }

    #[test]
    fn test_welsh_end_of_proceedings() {
        let mut case_data = case_ending(ManageOrdersEndDateType::EndOfProceedings);
        case_data.children.push(fixtures::child("c2", "Sam", "Jones"));
        let parameters = generator().generate(&case_data, Language::Welsh).unwrap();
        assert_eq!(
            parameters.order_details.as_deref(),
            Some("Mae'r Llys yn gorchymyn i Swansea City Council oruchwylio'r plant hyd at ddiwedd yr achos, neu hyd nes y gwneir gorchymyn pellach.")
        );
    }

    #[test]
    fn test_date_and_time() {
        let parameters = generator()
            .generate(
                &case_ending(ManageOrdersEndDateType::CalendarDayAndTime),
                Language::English,
            )
            .unwrap();
        assert_eq!(
            parameters.order_details.as_deref(),
            Some("The Court orders Swansea City Council to supervise the child until 1 September 2021, 10:15am.")
        );
    }

    #[test]
    fn test_missing_end_selection() {
        let mut case_data = case_ending(ManageOrdersEndDateType::EndOfProceedings);
        case_data
            .manage_orders_event_data
            .manage_orders_end_date_type_with_end_of_proceedings = None;
        let result = generator().generate(&case_data, Language::English);
        assert!(matches!(result, Err(OrderError::MissingField(_))));
    }
}

//! C35A final supervision order

use std::sync::Arc;

use super::end_date::{OrderEnd, resolve_end};
use super::{ChildWording, local_authority_name};
use crate::core::error::{OrderError, Result};
use crate::generation::{ChildrenSelector, DocmosisParameters, TemplatedParameterGenerator};
use crate::orders::{CaseData, Language, Order};

pub struct C35aSupervisionOrderDocumentParameterGenerator {
    children_selector: Arc<dyn ChildrenSelector>,
}

impl C35aSupervisionOrderDocumentParameterGenerator {
    pub fn new(children_selector: Arc<dyn ChildrenSelector>) -> Self {
        Self { children_selector }
    }
}

impl TemplatedParameterGenerator for C35aSupervisionOrderDocumentParameterGenerator {
    fn accept(&self) -> Order {
        Order::C35aSupervisionOrder
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
            event_data.manage_orders_end_date_type_with_month,
            language,
        )?;

        let child = wording.noun();
        let details = match (language, end) {
            (Language::English, OrderEnd::AfterMonths { months, until }) => {
                let unit = if months == 1 { "month" } else { "months" };
                format!(
                    "The Court orders {local_authority} to supervise the {child} for {months} {unit} from the date of this order until {until}."
                )
            }
            (Language::English, OrderEnd::OnDate(date)) => {
                format!("The Court orders {local_authority} to supervise the {child} until {date}.")
            }
            (Language::Welsh, OrderEnd::AfterMonths { months, until }) => format!(
                "Mae'r Llys yn gorchymyn i {local_authority} oruchwylio'r {child} am {months} mis o ddyddiad y gorchymyn hwn tan {until}."
            ),
            (Language::Welsh, OrderEnd::OnDate(date)) => format!(
                "Mae'r Llys yn gorchymyn i {local_authority} oruchwylio'r {child} tan {date}."
            ),
            (_, OrderEnd::EndOfProceedings) => {
                return Err(OrderError::invalid(
                    "a final supervision order cannot run to the end of the proceedings",
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

    fn generator() -> Templated<C35aSupervisionOrderDocumentParameterGenerator> {
        Templated(C35aSupervisionOrderDocumentParameterGenerator::new(all_children()))
    }

    fn case_ending(end: ManageOrdersEndDateType, months: u32) -> CaseData {
        let mut case_data = fixtures::case_data(Order::C35aSupervisionOrder);
        let event_data = &mut case_data.manage_orders_event_data;
        event_data.manage_orders_end_date_type_with_month = Some(end);
        event_data.manage_orders_set_months_end_date = Some(months);
        event_data.manage_orders_set_date_end_date = NaiveDate::from_ymd_opt(2022, 1, 31);
        case_data
    }

    #[test]
    fn test_number_of_months() {
        let parameters = generator()
            .generate(
                &case_ending(ManageOrdersEndDateType::NumberOfMonths, 6),
                Language::English,
            )
            .unwrap();
        assert_eq!(
            parameters.order_details.as_deref(),
            Some("The Court orders Swansea City Council to supervise the child for 6 months from the date of this order until 5 December 2021.")
        );
        assert_eq!(parameters.children_act, "Section 31 and Paragraphs 1 and 2 Schedule 3 Children Act 1989");
    }

    #[test]
    fn test_single_month() {
        let parameters = generator()
            .generate(
                &case_ending(ManageOrdersEndDateType::NumberOfMonths, 1),
                Language::English,
            )
            .unwrap();
        assert!(parameters
            .order_details
            .unwrap()
            .contains("for 1 month from the date of this order until 5 July 2021"));
    }

    #[test]
    fn test_welsh_number_of_months() {
        let parameters = generator()
            .generate(
                &case_ending(ManageOrdersEndDateType::NumberOfMonths, 6),
                Language::Welsh,
            )
            .unwrap();
        assert_eq!(
            parameters.order_details.as_deref(),
            Some("Mae'r Llys yn gorchymyn i Swansea City Council oruchwylio'r plentyn am 6 mis o ddyddiad y gorchymyn hwn tan 5 Rhagfyr 2021.")
        );
    }

    #[test]
    fn test_calendar_day() {
        let parameters = generator()
            .generate(
                &case_ending(ManageOrdersEndDateType::CalendarDay, 0),
                Language::English,
            )
            .unwrap();
        assert_eq!(
            parameters.order_details.as_deref(),
            Some("The Court orders Swansea City Council to supervise the child until 31 January 2022.")
        );
    }

    #[test]
    fn test_end_of_proceedings_rejected() {
        let result = generator().generate(
            &case_ending(ManageOrdersEndDateType::EndOfProceedings, 0),
            Language::English,
        );
        assert!(matches!(result, Err(OrderError::InvalidInput(_))));
    }
}

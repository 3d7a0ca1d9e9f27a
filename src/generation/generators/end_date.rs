//! Resolves when an order stops having effect

use chrono::Months;

use crate::core::error::{OrderError, Result};
use crate::core::utils::{format_date, format_date_time};
use crate::orders::{Language, ManageOrdersEndDateType, ManageOrdersEventData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OrderEnd {
    /// Formatted end date or date-time
    OnDate(String),
    EndOfProceedings,
    AfterMonths { months: u32, until: String },
}

pub(crate) fn resolve_end(
    event_data: &ManageOrdersEventData,
    selection: Option<ManageOrdersEndDateType>,
    language: Language,
) -> Result<OrderEnd> {
    let selection = selection.ok_or_else(|| OrderError::missing("manageOrdersEndDateType"))?;

    match selection {
        ManageOrdersEndDateType::CalendarDay => event_data
            .manage_orders_set_date_end_date
            .map(|date| OrderEnd::OnDate(format_date(date, language)))
            .ok_or_else(|| OrderError::missing("manageOrdersSetDateEndDate")),
        ManageOrdersEndDateType::CalendarDayAndTime => event_data
            .manage_orders_set_date_and_time_end_date
            .map(|date_time| OrderEnd::OnDate(format_date_time(date_time, language)))
            .ok_or_else(|| OrderError::missing("manageOrdersSetDateAndTimeEndDate")),
        ManageOrdersEndDateType::EndOfProceedings => Ok(OrderEnd::EndOfProceedings),
        ManageOrdersEndDateType::NumberOfMonths => {
            let months = event_data
                .manage_orders_set_months_end_date
                .filter(|months| *months > 0)
                .ok_or_else(|| OrderError::missing("manageOrdersSetMonthsEndDate"))?;
            let approval_date = event_data
                .approval_date()
                .ok_or_else(|| OrderError::missing("manageOrdersApprovalDate"))?;
            let until = approval_date
                .checked_add_months(Months::new(months))
                .ok_or_else(|| OrderError::invalid(format!("{months} months is out of range")))?;

            Ok(OrderEnd::AfterMonths {
                months,
                until: format_date(until, language),
            })
        }
    }
}

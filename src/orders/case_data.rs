//! Case snapshot consumed by the generation pipeline.
//!
//! The shapes mirror the CCD JSON sent with a callback: camelCase field names,
//! collections wrapped in `{ "id": …, "value": … }` elements and the manage
//! orders answers flattened onto the case itself. The engine only ever reads
//! these values.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{Order, YesNo};

/// Full case snapshot at callback time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaseData {
    pub id: u64,
    pub family_man_case_number: Option<String>,
    /// Local-authority code the case belongs to
    pub case_local_authority: Option<String>,
    pub case_local_authority_name: Option<String>,
    #[serde(rename = "children1")]
    pub children: Vec<Element<Child>>,
    pub allocated_judge: Option<Judge>,
    #[serde(flatten)]
    pub manage_orders_event_data: ManageOrdersEventData,
}

/// CCD collection element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element<T> {
    pub id: String,
    pub value: T,
}

impl<T> Element<T> {
    pub fn new<S: Into<String>>(id: S, value: T) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub party: ChildParty,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChildParty {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl ChildParty {
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JudgeOrMagistrateTitle {
    HisHonourJudge,
    HerHonourJudge,
    DistrictJudge,
    DeputyDistrictJudge,
    Magistrates,
    Other,
}

impl JudgeOrMagistrateTitle {
    pub fn label(&self) -> &'static str {
        match self {
            JudgeOrMagistrateTitle::HisHonourJudge => "His Honour Judge",
            JudgeOrMagistrateTitle::HerHonourJudge => "Her Honour Judge",
            JudgeOrMagistrateTitle::DistrictJudge => "District Judge",
            JudgeOrMagistrateTitle::DeputyDistrictJudge => "Deputy District Judge",
            JudgeOrMagistrateTitle::Magistrates => "Justice of the Peace",
            JudgeOrMagistrateTitle::Other => "",
        }
    }
}

/// A judge, either allocated to the case or entered for one event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Judge {
    pub judge_title: Option<JudgeOrMagistrateTitle>,
    pub other_title: Option<String>,
    pub judge_last_name: Option<String>,
    pub judge_full_name: Option<String>,
    pub judge_email_address: Option<String>,
}

impl Judge {
    pub fn is_empty(&self) -> bool {
        self.judge_title.is_none()
            && self.judge_last_name.is_none()
            && self.judge_full_name.is_none()
    }
}

/// Judge and legal adviser answers for the current event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JudgeAndLegalAdvisor {
    #[serde(flatten)]
    pub judge: Judge,
    pub legal_advisor_name: Option<String>,
    pub use_allocated_judge: Option<YesNo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManageOrdersEndDateType {
    CalendarDay,
    CalendarDayAndTime,
    NumberOfMonths,
    EndOfProceedings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EpoType {
    RemoveToAccommodation,
    PreventRemoval,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub post_town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
}

impl Address {
    /// Joins the non-blank lines with `delimiter`
    pub fn format(&self, delimiter: &str) -> String {
        [
            &self.address_line1,
            &self.address_line2,
            &self.address_line3,
            &self.post_town,
            &self.county,
            &self.postcode,
            &self.country,
        ]
        .into_iter()
        .filter_map(|line| line.as_deref())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(delimiter)
    }
}

/// Reference to a stored document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    #[serde(rename = "document_url")]
    pub url: String,
    #[serde(rename = "document_binary_url")]
    pub binary_url: String,
    #[serde(rename = "document_filename")]
    pub filename: String,
}

/// Indices of the children ticked in a selector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selector {
    pub selected: Vec<usize>,
}

/// Answers collected by the manage orders event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManageOrdersEventData {
    pub manage_orders_type: Option<Order>,
    pub manage_orders_approval_date: Option<NaiveDate>,
    pub manage_orders_approval_date_time: Option<NaiveDateTime>,
    pub judge_and_legal_advisor: Option<JudgeAndLegalAdvisor>,
    pub manage_orders_title: Option<String>,
    pub manage_orders_directions: Option<String>,
    pub manage_orders_further_directions: Option<String>,

    pub manage_orders_end_date_type_with_end_of_proceedings: Option<ManageOrdersEndDateType>,
    pub manage_orders_end_date_type_with_month: Option<ManageOrdersEndDateType>,
    pub manage_orders_set_date_end_date: Option<NaiveDate>,
    pub manage_orders_set_date_and_time_end_date: Option<NaiveDateTime>,
    pub manage_orders_set_months_end_date: Option<u32>,

    pub manage_orders_epo_type: Option<EpoType>,
    pub manage_orders_epo_removal_address: Option<Address>,
    pub manage_orders_include_phrase: Option<YesNo>,
    pub manage_orders_children_description: Option<String>,
    pub manage_orders_end_date_time: Option<NaiveDateTime>,
    pub manage_orders_exclusion_requirement: Option<YesNo>,
    pub manage_orders_who_is_excluded: Option<String>,
    pub manage_orders_exclusion_start_date: Option<NaiveDate>,
    pub manage_orders_power_of_arrest: Option<DocumentReference>,

    pub manage_orders_care_order_issued_date: Option<NaiveDate>,
    pub manage_orders_care_order_issued_court: Option<String>,

    pub manage_orders_upload_order_file: Option<DocumentReference>,
    pub manage_orders_need_sealing: Option<YesNo>,

    pub order_applies_to_all_children: Option<YesNo>,
    pub children_selector: Option<Selector>,
}

impl ManageOrdersEventData {
    /// Approval date, falling back to the date part of the approval date-time
    pub fn approval_date(&self) -> Option<NaiveDate> {
        self.manage_orders_approval_date.or_else(|| {
            self.manage_orders_approval_date_time
                .map(|date_time| date_time.date())
        })
    }
}

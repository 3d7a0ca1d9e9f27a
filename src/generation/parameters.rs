//! Template parameter bag for a single order rendering.
//!
//! A bag is built in two phases: [`DocmosisParameters::for_order`] seeds the
//! fields every order shares from the catalogue, order-specific generators fill
//! in their content, and the common element decorator stamps case-wide fields
//! last. Field names serialize in the camelCase the templates expect.

use serde::Serialize;

use crate::core::utils::non_blank;
use crate::orders::{DocumentReference, Order};

/// Parameters handed to the template renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocmosisParameters {
    pub order_type: Option<Order>,
    pub order_title: String,
    /// Legal basis text
    pub children_act: String,
    pub order_details: Option<String>,
    pub further_directions: Option<String>,
    pub local_authority_name: Option<String>,
    pub date_of_issue: Option<String>,
    #[serde(flatten)]
    pub fields: OrderFields,

    // Common elements, owned by the decorator
    pub court_name: Option<String>,
    pub family_man_number: Option<String>,
    pub ccd_case_number: Option<String>,
    pub judge_and_legal_advisor: Option<DocmosisJudgeAndLegalAdvisor>,
    pub children: Vec<DocmosisChild>,
    pub crest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draftbackground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courtseal: Option<String>,
}

impl DocmosisParameters {
    /// Seed a bag with the catalogue fields of `order`
    pub fn for_order(order: Order) -> Self {
        Self {
            order_type: Some(order),
            order_title: order.title().to_string(),
            children_act: order.children_act().to_string(),
            ..Self::default()
        }
    }
}

impl Default for DocmosisParameters {
    fn default() -> Self {
        Self {
            order_type: None,
            order_title: String::new(),
            children_act: String::new(),
            order_details: None,
            further_directions: None,
            local_authority_name: None,
            date_of_issue: None,
            fields: OrderFields::Standard {},
            court_name: None,
            family_man_number: None,
            ccd_case_number: None,
            judge_and_legal_advisor: None,
            children: Vec::new(),
            crest: None,
            draftbackground: None,
            courtseal: None,
        }
    }
}

/// Fields that only some order layouts use
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OrderFields {
    Standard {},
    EmergencyProtection(EpoFields),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpoFields {
    pub epo_type: String,
    pub include_phrase: bool,
    pub children_description: Option<String>,
    pub removal_address: Option<String>,
    pub epo_end_date_time: String,
    pub exclusion_requirement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocmosisChild {
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocmosisJudgeAndLegalAdvisor {
    pub judge_title_and_name: String,
    pub legal_advisor_name: Option<String>,
}

/// Keeps `current` when it holds non-blank text, otherwise takes `fallback`.
///
/// Decoration is built from this so that a field filled earlier in the
/// pipeline is never overwritten.
pub fn filled_or<F>(current: Option<String>, fallback: F) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    match non_blank(current.as_deref()) {
        Some(_) => current,
        None => fallback(),
    }
}

/// Bytes produced by a renderer, tagged with the format it actually wrote
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub format: crate::orders::RenderFormat,
}

/// Result of rendering a digitally generated or uploaded order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDocumentGeneratorResult {
    pub bytes: Vec<u8>,
    /// Format actually produced, which may differ from the one requested
    pub format: crate::orders::RenderFormat,
    /// Documents that must accompany the order
    pub additional_documents: Vec<DocumentReference>,
}

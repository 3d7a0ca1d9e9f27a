//! The order catalogue.
//!
//! Every legal order variant the engine knows about is a variant of [`Order`].
//! Its static attributes live in one exhaustive `match` in
//! [`Order::definition`], so adding a variant without describing it fails to
//! compile. `Order` is the dispatch key for every strategy lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ManageOrdersEventData, OrderQuestionBlock, OrderSourceType, RenderFormat};
use crate::core::utils::{non_blank, to_snake_case};

use OrderQuestionBlock::*;

/// Legal order variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "C21_BLANK_ORDER")]
    C21BlankOrder,
    #[serde(rename = "C23_EMERGENCY_PROTECTION_ORDER")]
    C23EmergencyProtectionOrder,
    #[serde(rename = "C24_VARIATION_OF_EMERGENCY_PROTECTION_ORDER")]
    C24VariationOfEmergencyProtectionOrder,
    #[serde(rename = "C32A_CARE_ORDER")]
    C32aCareOrder,
    #[serde(rename = "C32B_DISCHARGE_OF_CARE_ORDER")]
    C32bDischargeOfCareOrder,
    #[serde(rename = "C33_INTERIM_CARE_ORDER")]
    C33InterimCareOrder,
    #[serde(rename = "C35A_SUPERVISION_ORDER")]
    C35aSupervisionOrder,
    #[serde(rename = "C35B_INTERIM_SUPERVISION_ORDER")]
    C35bInterimSupervisionOrder,
    #[serde(rename = "OTHER_ORDER")]
    OtherOrder,
}

/// Static catalogue attributes of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDefinition {
    pub title: &'static str,
    /// Legal basis text printed on the order
    pub children_act: &'static str,
    pub history_title: &'static str,
    pub questions: &'static [OrderQuestionBlock],
    pub source_type: OrderSourceType,
    /// Whether a Welsh rendering may be offered
    pub translatable: bool,
}

const ALL_ORDERS: [Order; 9] = [
    Order::C21BlankOrder,
    Order::C23EmergencyProtectionOrder,
    Order::C24VariationOfEmergencyProtectionOrder,
    Order::C32aCareOrder,
    Order::C32bDischargeOfCareOrder,
    Order::C33InterimCareOrder,
    Order::C35aSupervisionOrder,
    Order::C35bInterimSupervisionOrder,
    Order::OtherOrder,
];

impl Order {
    pub fn all() -> &'static [Order] {
        &ALL_ORDERS
    }

    pub fn definition(&self) -> OrderDefinition {
        match self {
            Order::C21BlankOrder => OrderDefinition {
                title: "Blank order (C21)",
                children_act: "Children Act 1989",
                history_title: "Blank order (C21)",
                questions: &[Approver, ApprovalDate, WhichChildren, Details, ReviewDraftOrder],
                source_type: OrderSourceType::Digital,
                translatable: true,
            },
            Order::C23EmergencyProtectionOrder => OrderDefinition {
                title: "Emergency protection order (C23)",
                children_act: "Section 44 Children Act 1989",
                history_title: "Emergency protection order (C23)",
                questions: &[
                    Approver,
                    ApprovalDateTime,
                    WhichChildren,
                    EpoTypeAndPreventRemoval,
                    EpoIncludePhrase,
                    EpoChildrenDescription,
                    EpoExpiryDate,
                    FurtherDirections,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::Digital,
                translatable: false,
            },
            Order::C24VariationOfEmergencyProtectionOrder => OrderDefinition {
                title: "Variation of an emergency protection order (C24)",
                children_act: "Section 45 Children Act 1989",
                history_title: "Variation of an emergency protection order (C24)",
                questions: &[
                    Approver,
                    ApprovalDate,
                    WhichChildren,
                    UploadOrderFile,
                    NeedSealing,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::ManualUpload,
                translatable: false,
            },
            Order::C32aCareOrder => OrderDefinition {
                title: "Care order (C32A)",
                children_act: "Section 31 Children Act 1989",
                history_title: "Care order (C32A)",
                questions: &[
                    Approver,
                    ApprovalDate,
                    WhichChildren,
                    FurtherDirections,
                    CloseCase,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::Digital,
                translatable: true,
            },
            Order::C32bDischargeOfCareOrder => OrderDefinition {
                title: "Discharge of care order (C32B)",
                children_act: "Section 39(1) Children Act 1989",
                history_title: "Discharge of care order (C32B)",
                questions: &[
                    Approver,
                    ApprovalDate,
                    WhichChildren,
                    DischargeDetails,
                    FurtherDirections,
                    CloseCase,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::Digital,
                translatable: true,
            },
            Order::C33InterimCareOrder => OrderDefinition {
                title: "Interim care order (C33)",
                children_act: "Section 38 Children Act 1989",
                history_title: "Interim care order (C33)",
                questions: &[
                    Approver,
                    ApprovalDate,
                    WhichChildren,
                    FurtherDirections,
                    ManageOrderEndDateWithEndOfProceedings,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::Digital,
                translatable: true,
            },
            Order::C35aSupervisionOrder => OrderDefinition {
                title: "Supervision order (C35A)",
                children_act: "Section 31 and Paragraphs 1 and 2 Schedule 3 Children Act 1989",
                history_title: "Supervision order (C35A)",
                questions: &[
                    Approver,
                    ApprovalDate,
                    WhichChildren,
                    FurtherDirections,
                    ManageOrderEndDateWithMonth,
                    CloseCase,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::Digital,
                translatable: true,
            },
            Order::C35bInterimSupervisionOrder => OrderDefinition {
                title: "Interim supervision order (C35B)",
                children_act: "Section 38 and Paragraphs 1 and 2 Schedule 3 Children Act 1989",
                history_title: "Interim supervision order (C35B)",
                questions: &[
                    Approver,
                    ApprovalDate,
                    WhichChildren,
                    FurtherDirections,
                    ManageOrderEndDateWithEndOfProceedings,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::Digital,
                translatable: true,
            },
            Order::OtherOrder => OrderDefinition {
                title: "Upload an order",
                children_act: "",
                history_title: "Other",
                questions: &[
                    Approver,
                    ApprovalDate,
                    WhichChildren,
                    UploadOrderFile,
                    NeedSealing,
                    ReviewDraftOrder,
                ],
                source_type: OrderSourceType::ManualUpload,
                translatable: false,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        self.definition().title
    }

    pub fn children_act(&self) -> &'static str {
        self.definition().children_act
    }

    pub fn history_title(&self) -> &'static str {
        self.definition().history_title
    }

    pub fn questions(&self) -> &'static [OrderQuestionBlock] {
        self.definition().questions
    }

    pub fn source_type(&self) -> OrderSourceType {
        self.definition().source_type
    }

    pub fn is_translatable(&self) -> bool {
        self.definition().translatable
    }

    pub fn is_manual_upload(&self) -> bool {
        self.source_type() == OrderSourceType::ManualUpload
    }

    /// CCD identifier, e.g. `C32A_CARE_ORDER`
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::C21BlankOrder => "C21_BLANK_ORDER",
            Order::C23EmergencyProtectionOrder => "C23_EMERGENCY_PROTECTION_ORDER",
            Order::C24VariationOfEmergencyProtectionOrder => {
                "C24_VARIATION_OF_EMERGENCY_PROTECTION_ORDER"
            }
            Order::C32aCareOrder => "C32A_CARE_ORDER",
            Order::C32bDischargeOfCareOrder => "C32B_DISCHARGE_OF_CARE_ORDER",
            Order::C33InterimCareOrder => "C33_INTERIM_CARE_ORDER",
            Order::C35aSupervisionOrder => "C35A_SUPERVISION_ORDER",
            Order::C35bInterimSupervisionOrder => "C35B_INTERIM_SUPERVISION_ORDER",
            Order::OtherOrder => "OTHER_ORDER",
        }
    }

    /// Output file name of a sealed or plain order.
    ///
    /// The blank order and manually uploaded orders incorporate the title the
    /// user chose; everything else is named after the catalogue entry.
    pub fn file_name(&self, format: RenderFormat, event_data: &ManageOrdersEventData) -> String {
        let default_stem = to_snake_case(self.as_str());
        let chosen_title = non_blank(event_data.manage_orders_title.as_deref())
            .map(to_snake_case)
            .filter(|stem| !stem.is_empty());

        let stem = match (self, chosen_title) {
            (Order::C21BlankOrder, Some(title)) => format!("c21_{title}"),
            (Order::OtherOrder | Order::C24VariationOfEmergencyProtectionOrder, Some(title)) => {
                title
            }
            _ => default_stem,
        };

        format!("{stem}.{}", format.extension())
    }

    /// Title shown in the case's order history
    pub fn display_title(&self, event_data: &ManageOrdersEventData) -> String {
        match self {
            Order::C21BlankOrder | Order::OtherOrder => {
                non_blank(event_data.manage_orders_title.as_deref())
                    .unwrap_or(self.history_title())
                    .to_string()
            }
            _ => self.history_title().to_string(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Common element decorator - stamps case-wide fields onto any order's bag

use std::sync::Arc;

use crate::core::config::ImageConfig;
use crate::core::error::{OrderError, Result};
use crate::core::utils::{format_ccd_case_number, format_date, non_blank};
use crate::generation::{
    ChildrenSelector, CourtLookup, DocmosisChild, DocmosisJudgeAndLegalAdvisor,
    DocmosisParameters, JudgeSelector, filled_or,
};
use crate::orders::{CaseData, Child, Element, Judge, JudgeOrMagistrateTitle, Language, OrderStatus};

/// Injects the fields every order shares.
///
/// Must run after the order-specific generator: `dateOfIssue` is only filled
/// when the generator left it blank. Everything else it owns is re-derived
/// from the case, so decorating twice yields the same bag.
pub struct CommonElementDecorator {
    children_selector: Arc<dyn ChildrenSelector>,
    judge_selector: Arc<dyn JudgeSelector>,
    court_lookup: Arc<dyn CourtLookup>,
    images: ImageConfig,
}

impl CommonElementDecorator {
    pub fn new(
        children_selector: Arc<dyn ChildrenSelector>,
        judge_selector: Arc<dyn JudgeSelector>,
        court_lookup: Arc<dyn CourtLookup>,
        images: ImageConfig,
    ) -> Self {
        Self {
            children_selector,
            judge_selector,
            court_lookup,
            images,
        }
    }

    pub fn decorate(
        &self,
        parameters: DocmosisParameters,
        case_data: &CaseData,
        status: OrderStatus,
        language: Language,
    ) -> Result<DocmosisParameters> {
        let event_data = &case_data.manage_orders_event_data;

        let children: Vec<DocmosisChild> = self
            .children_selector
            .selected_children(case_data)?
            .iter()
            .map(|child| docmosis_child(child, language))
            .collect();

        let judge_and_legal_advisor = self
            .judge_selector
            .selected_judge(
                event_data.judge_and_legal_advisor.as_ref(),
                case_data.allocated_judge.as_ref(),
            )
            .map(|selected| DocmosisJudgeAndLegalAdvisor {
                judge_title_and_name: format_judge_title_and_name(&selected.judge),
                legal_advisor_name: non_blank(selected.legal_advisor_name.as_deref())
                    .map(str::to_string),
            });

        let local_authority = non_blank(case_data.case_local_authority.as_deref())
            .ok_or_else(|| OrderError::missing("caseLocalAuthority"))?;
        let court_name = self.court_lookup.court_name(local_authority)?;

        let date_of_issue = filled_or(parameters.date_of_issue.clone(), || {
            event_data
                .approval_date()
                .map(|date| format_date(date, language))
        })
        .ok_or_else(|| OrderError::missing("manageOrdersApprovalDate"))?;

        let (draftbackground, courtseal) = match status {
            OrderStatus::Draft => (Some(self.images.draft_watermark.clone()), None),
            OrderStatus::Sealed => (None, Some(self.images.court_seal(language).to_string())),
            OrderStatus::Plain => (None, None),
        };

        tracing::debug!(
            order_type = ?parameters.order_type,
            %status,
            children = children.len(),
            "Decorated order parameters"
        );

        Ok(DocmosisParameters {
            court_name: Some(court_name),
            family_man_number: case_data.family_man_case_number.clone(),
            ccd_case_number: Some(format_ccd_case_number(case_data.id)),
            judge_and_legal_advisor,
            children,
            date_of_issue: Some(date_of_issue),
            crest: Some(self.images.crest.clone()),
            draftbackground,
            courtseal,
            ..parameters
        })
    }
}

fn docmosis_child(child: &Element<Child>, language: Language) -> DocmosisChild {
    let party = &child.value.party;
    DocmosisChild {
        name: party.full_name(),
        gender: party.gender.clone(),
        date_of_birth: party.date_of_birth.map(|dob| format_date(dob, language)),
    }
}

/// Display form of a judge, e.g. `His Honour Judge Dredd`
pub fn format_judge_title_and_name(judge: &Judge) -> String {
    let last_name = judge.judge_last_name.as_deref().unwrap_or_default();
    match judge.judge_title {
        Some(JudgeOrMagistrateTitle::Magistrates) => {
            match non_blank(judge.judge_full_name.as_deref()) {
                Some(full_name) => format!("{full_name} (JP)"),
                None => JudgeOrMagistrateTitle::Magistrates.label().to_string(),
            }
        }
        Some(JudgeOrMagistrateTitle::Other) => {
            let other_title = judge.other_title.as_deref().unwrap_or_default();
            format!("{other_title} {last_name}").trim().to_string()
        }
        Some(title) => format!("{} {last_name}", title.label()).trim().to_string(),
        None => last_name.to_string(),
    }
}

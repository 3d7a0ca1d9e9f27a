//! Configuration-backed lookups and the selection rules the decorator calls

use std::collections::HashMap;

use crate::core::error::{OrderError, Result};
use crate::generation::{ChildrenSelector, CourtLookup, HearingVenueLookup, JudgeSelector};
use crate::orders::{CaseData, Child, Element, Judge, JudgeAndLegalAdvisor, YesNo};

/// Court names keyed by local-authority code
pub struct ConfiguredCourtLookup {
    courts: HashMap<String, String>,
}

impl ConfiguredCourtLookup {
    pub fn new(courts: HashMap<String, String>) -> Self {
        Self { courts }
    }
}

impl CourtLookup for ConfiguredCourtLookup {
    fn court_name(&self, local_authority_code: &str) -> Result<String> {
        self.courts.get(local_authority_code).cloned().ok_or_else(|| {
            OrderError::lookup(format!(
                "no court configured for local authority '{local_authority_code}'"
            ))
        })
    }
}

/// Hearing venue names keyed by venue id
pub struct ConfiguredVenueLookup {
    venues: HashMap<String, String>,
}

impl ConfiguredVenueLookup {
    pub fn new(venues: HashMap<String, String>) -> Self {
        Self { venues }
    }
}

impl HearingVenueLookup for ConfiguredVenueLookup {
    fn venue_name(&self, venue_id: &str) -> Result<String> {
        self.venues
            .get(venue_id)
            .cloned()
            .ok_or_else(|| OrderError::lookup(format!("unknown hearing venue '{venue_id}'")))
    }
}

/// Uses the judge entered for the event unless the user asked for the
/// allocated judge or left the judge empty.
///
/// The legal adviser always comes from the event.
pub struct AllocatedJudgeFallback;

impl JudgeSelector for AllocatedJudgeFallback {
    fn selected_judge(
        &self,
        event_judge: Option<&JudgeAndLegalAdvisor>,
        allocated_judge: Option<&Judge>,
    ) -> Option<JudgeAndLegalAdvisor> {
        let legal_advisor_name = event_judge.and_then(|judge| judge.legal_advisor_name.clone());
        let use_allocated = event_judge.is_none_or(|judge| {
            YesNo::is_yes(judge.use_allocated_judge) || judge.judge.is_empty()
        });

        if !use_allocated {
            return event_judge.cloned();
        }

        match allocated_judge {
            Some(judge) => Some(JudgeAndLegalAdvisor {
                judge: judge.clone(),
                legal_advisor_name,
                use_allocated_judge: Some(YesNo::Yes),
            }),
            None => event_judge.cloned(),
        }
    }
}

/// Children chosen in the manage orders event.
///
/// A case with a single child never asks the question, so that child applies.
pub struct EventChildrenSelector;

impl ChildrenSelector for EventChildrenSelector {
    fn selected_children(&self, case_data: &CaseData) -> Result<Vec<Element<Child>>> {
        let event_data = &case_data.manage_orders_event_data;
        let applies_to_all = match event_data.order_applies_to_all_children {
            Some(answer) => answer == YesNo::Yes,
            None if case_data.children.len() <= 1 => true,
            None => return Err(OrderError::missing("orderAppliesToAllChildren")),
        };

        if applies_to_all {
            return Ok(case_data.children.clone());
        }

        let selected = event_data
            .children_selector
            .as_ref()
            .map(|selector| selector.selected.as_slice())
            .unwrap_or_default();

        selected
            .iter()
            .map(|index| {
                case_data.children.get(*index).cloned().ok_or_else(|| {
                    OrderError::invalid(format!("selected child {index} does not exist"))
                })
            })
            .collect()
    }
}

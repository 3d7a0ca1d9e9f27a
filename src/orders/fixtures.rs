//! Sample case snapshots for unit tests

use chrono::NaiveDate;

use super::*;

pub(crate) fn approval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 5).unwrap()
}

pub(crate) fn child(id: &str, first_name: &str, last_name: &str) -> Element<Child> {
    Element::new(
        id,
        Child {
            party: ChildParty {
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
                date_of_birth: NaiveDate::from_ymd_opt(2018, 3, 1),
                gender: Some("Boy".to_string()),
            },
        },
    )
}

pub(crate) fn document(name: &str) -> DocumentReference {
    DocumentReference {
        url: format!("http://dm-store/documents/{name}"),
        binary_url: format!("http://dm-store/documents/{name}/binary"),
        filename: name.to_string(),
    }
}

/// One child, Swansea local authority, approved on 5 June 2021
pub(crate) fn case_data(order: Order) -> CaseData {
    CaseData {
        id: 1234567890123456,
        family_man_case_number: Some("SA21C50011".to_string()),
        case_local_authority: Some("SA".to_string()),
        case_local_authority_name: Some("Swansea City Council".to_string()),
        children: vec![child("c1", "Alex", "Jones")],
        allocated_judge: Some(Judge {
            judge_title: Some(JudgeOrMagistrateTitle::HerHonourJudge),
            judge_last_name: Some("Moley".to_string()),
            ..Default::default()
        }),
        manage_orders_event_data: ManageOrdersEventData {
            manage_orders_type: Some(order),
            manage_orders_approval_date: Some(approval_date()),
            order_applies_to_all_children: Some(YesNo::Yes),
            ..Default::default()
        },
    }
}

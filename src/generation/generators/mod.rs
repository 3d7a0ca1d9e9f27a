//! Order-specific parameter generators.
//!
//! [`generator_for`] is the single place where an order type is paired with
//! its generator. It matches exhaustively over [`Order`], so a new catalogue
//! entry does not compile until it is given a generator or declared manual.

mod blank_order;
mod care_order;
mod discharge_of_care_order;
mod emergency_protection_order;
mod end_date;
mod interim_care_order;
mod interim_supervision_order;
mod supervision_order;

pub use blank_order::C21BlankOrderDocumentParameterGenerator;
pub use care_order::C32aCareOrderDocumentParameterGenerator;
pub use discharge_of_care_order::C32bDischargeOfCareOrderDocumentParameterGenerator;
pub use emergency_protection_order::C23EpoDocumentParameterGenerator;
pub use interim_care_order::C33InterimCareOrderDocumentParameterGenerator;
pub use interim_supervision_order::C35bInterimSupervisionOrderDocumentParameterGenerator;
pub use supervision_order::C35aSupervisionOrderDocumentParameterGenerator;

use std::sync::Arc;

use crate::core::error::{OrderError, Result};
use crate::generation::{
    ChildrenSelector, DocmosisParameterGenerator, HearingVenueLookup, Templated,
};
use crate::orders::{CaseData, Language, Order};

/// Collaborators some generators need
#[derive(Clone)]
pub struct GeneratorDependencies {
    pub children_selector: Arc<dyn ChildrenSelector>,
    pub venue_lookup: Arc<dyn HearingVenueLookup>,
}

/// The generator for `order`, or `None` for manually uploaded orders
pub fn generator_for(
    order: Order,
    deps: &GeneratorDependencies,
) -> Option<Arc<dyn DocmosisParameterGenerator>> {
    let children = || Arc::clone(&deps.children_selector);

    let generator: Arc<dyn DocmosisParameterGenerator> = match order {
        Order::C21BlankOrder => Arc::new(C21BlankOrderDocumentParameterGenerator),
        Order::C23EmergencyProtectionOrder => Arc::new(Templated(
            C23EpoDocumentParameterGenerator::new(children()),
        )),
        Order::C32aCareOrder => Arc::new(Templated(
            C32aCareOrderDocumentParameterGenerator::new(children()),
        )),
        Order::C32bDischargeOfCareOrder => Arc::new(Templated(
            C32bDischargeOfCareOrderDocumentParameterGenerator::new(Arc::clone(
                &deps.venue_lookup,
            )),
        )),
        Order::C33InterimCareOrder => Arc::new(Templated(
            C33InterimCareOrderDocumentParameterGenerator::new(children()),
        )),
        Order::C35aSupervisionOrder => Arc::new(Templated(
            C35aSupervisionOrderDocumentParameterGenerator::new(children()),
        )),
        Order::C35bInterimSupervisionOrder => Arc::new(Templated(
            C35bInterimSupervisionOrderDocumentParameterGenerator::new(children()),
        )),
        Order::C24VariationOfEmergencyProtectionOrder | Order::OtherOrder => return None,
    };

    Some(generator)
}

/// One generator for every digitally generated order
pub fn standard_generators(deps: &GeneratorDependencies) -> Vec<Arc<dyn DocmosisParameterGenerator>> {
    Order::all()
        .iter()
        .filter_map(|order| generator_for(*order, deps))
        .collect()
}

/// Singular or plural wording for the children an order covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChildWording {
    plural: bool,
    language: Language,
}

impl ChildWording {
    pub(crate) fn resolve(
        selector: &dyn ChildrenSelector,
        case_data: &CaseData,
        language: Language,
    ) -> Result<Self> {
        let count = selector.selected_children(case_data)?.len();
        if count == 0 {
            return Err(OrderError::missing("selected children"));
        }
        Ok(Self {
            plural: count > 1,
            language,
        })
    }

    /// `child` / `children`, `plentyn` / `plant`
    pub(crate) fn noun(&self) -> &'static str {
        match (self.language, self.plural) {
            (Language::English, false) => "child",
            (Language::English, true) => "children",
            (Language::Welsh, false) => "plentyn",
            (Language::Welsh, true) => "plant",
        }
    }

    /// `is` / `are`
    pub(crate) fn is_or_are(&self) -> &'static str {
        if self.plural { "are" } else { "is" }
    }

    /// Welsh passive `yn cael ei roi` / `yn cael eu rhoi`
    pub(crate) fn welsh_placed(&self) -> &'static str {
        if self.plural {
            "yn cael eu rhoi"
        } else {
            "yn cael ei roi"
        }
    }
}

pub(crate) fn local_authority_name(case_data: &CaseData) -> Result<&str> {
    crate::core::utils::non_blank(case_data.case_local_authority_name.as_deref())
        .ok_or_else(|| OrderError::missing("caseLocalAuthorityName"))
}


#[cfg(test)]
mod tests {
    use super::test_support::{AllChildren, all_children};
    use super::*;
    use crate::orders::fixtures;

    struct NoVenues;

    impl HearingVenueLookup for NoVenues {
        fn venue_name(&self, venue_id: &str) -> Result<String> {
            Err(OrderError::lookup(format!("unknown venue {venue_id}")))
        }
    }

    fn deps() -> GeneratorDependencies {
        GeneratorDependencies {
            children_selector: all_children(),
            venue_lookup: Arc::new(NoVenues),
        }
    }

    #[test]
    fn test_every_digital_order_has_a_generator() {
        for order in Order::all() {
            let generator = generator_for(*order, &deps());
            assert_eq!(generator.is_some(), !order.is_manual_upload(), "{order}");
            if let Some(generator) = generator {
                assert_eq!(generator.accept(), *order);
            }
        }
    }

    #[test]
    fn test_standard_generators_build_a_valid_registry() {
        let generators = standard_generators(&deps());
        assert!(crate::generation::GeneratorRegistry::build(&generators, &[]).is_ok());
    }

    #[test]
    fn test_templated_generators_copy_legal_basis() {
        let case_data = fixtures::case_data(Order::C32aCareOrder);
        let generator = generator_for(Order::C32aCareOrder, &deps()).unwrap();
        let parameters = generator.generate(&case_data, Language::English).unwrap();
        assert_eq!(parameters.children_act, Order::C32aCareOrder.children_act());
        assert_eq!(parameters.order_title, Order::C32aCareOrder.title());
    }

    #[test]
    fn test_child_wording() {
        let mut case_data = fixtures::case_data(Order::C32aCareOrder);
        let single = ChildWording::resolve(&AllChildren, &case_data, Language::English).unwrap();
        assert_eq!((single.noun(), single.is_or_are()), ("child", "is"));

        case_data.children.push(fixtures::child("c2", "Sam", "Jones"));
        let plural = ChildWording::resolve(&AllChildren, &case_data, Language::Welsh).unwrap();
        assert_eq!(plural.noun(), "plant");
        assert_eq!(plural.welsh_placed(), "yn cael eu rhoi");

        case_data.children.clear();
        assert!(ChildWording::resolve(&AllChildren, &case_data, Language::English).is_err());
    }
}

use crate::generation::AdditionalDocumentsCollector;
use crate::orders::{CaseData, DocumentReference, Order, YesNo};

/// Attaches the power of arrest uploaded with an EPO exclusion requirement
pub struct C23EpoPowerOfArrestCollector;

impl AdditionalDocumentsCollector for C23EpoPowerOfArrestCollector {
    fn accept(&self) -> Order {
        Order::C23EmergencyProtectionOrder
    }

    fn additional_documents(&self, case_data: &CaseData) -> Vec<DocumentReference> {
        let event_data = &case_data.manage_orders_event_data;
        if !YesNo::is_yes(event_data.manage_orders_exclusion_requirement) {
            return Vec::new();
        }
        event_data.manage_orders_power_of_arrest.iter().cloned().collect()
    }
}

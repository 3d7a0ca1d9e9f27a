//! Documents that ride along with a generated order

mod power_of_arrest;

pub use power_of_arrest::C23EpoPowerOfArrestCollector;

use std::sync::Arc;

use crate::generation::AdditionalDocumentsCollector;

pub fn standard_collectors() -> Vec<Arc<dyn AdditionalDocumentsCollector>> {
    vec![Arc::new(C23EpoPowerOfArrestCollector)]
}

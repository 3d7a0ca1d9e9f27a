//! Registry mapping each order type to its generation strategies

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::core::error::{OrderError, Result};
use crate::generation::{AdditionalDocumentsCollector, DocmosisParameterGenerator};
use crate::orders::{Order, OrderSourceType};

/// Lookup tables built once from the registered strategies.
///
/// Building fails when two strategies claim the same order, when a digital
/// order has no generator, or when a manually uploaded order has any strategy.
pub struct GeneratorRegistry {
    generators: HashMap<Order, Arc<dyn DocmosisParameterGenerator>>,
    collectors: HashMap<Order, Arc<dyn AdditionalDocumentsCollector>>,
}

impl GeneratorRegistry {
    /// Build both tables, validating them against the order catalogue
    pub fn build(
        generators: &[Arc<dyn DocmosisParameterGenerator>],
        collectors: &[Arc<dyn AdditionalDocumentsCollector>],
    ) -> Result<Self> {
        let mut generator_table = HashMap::new();
        for generator in generators {
            let order = generator.accept();
            if generator_table.insert(order, Arc::clone(generator)).is_some() {
                return Err(OrderError::DuplicateGenerator(order));
            }
        }

        let mut collector_table = HashMap::new();
        for collector in collectors {
            let order = collector.accept();
            if collector_table.insert(order, Arc::clone(collector)).is_some() {
                return Err(OrderError::DuplicateCollector(order));
            }
        }

        for order in Order::all() {
            match order.source_type() {
                OrderSourceType::Digital if !generator_table.contains_key(order) => {
                    return Err(OrderError::MissingGenerator(*order));
                }
                OrderSourceType::ManualUpload if generator_table.contains_key(order) => {
                    return Err(OrderError::UnexpectedStrategy {
                        order: *order,
                        strategy: "parameter generator",
                    });
                }
                OrderSourceType::ManualUpload if collector_table.contains_key(order) => {
                    return Err(OrderError::UnexpectedStrategy {
                        order: *order,
                        strategy: "additional documents collector",
                    });
                }
                _ => {}
            }
        }

        tracing::info!(
            generators = generator_table.len(),
            collectors = collector_table.len(),
            "Built order generator registry"
        );

        Ok(Self {
            generators: generator_table,
            collectors: collector_table,
        })
    }

    /// Generator for `order`; absence is a configuration error
    pub fn resolve_generator(&self, order: Order) -> Result<Arc<dyn DocmosisParameterGenerator>> {
        self.generators
            .get(&order)
            .cloned()
            .ok_or(OrderError::MissingGenerator(order))
    }

    /// Collector for `order`, if one is registered
    pub fn resolve_additional_documents_collector(
        &self,
        order: Order,
    ) -> Option<Arc<dyn AdditionalDocumentsCollector>> {
        self.collectors.get(&order).cloned()
    }

    pub fn has_generator(&self, order: Order) -> bool {
        self.generators.contains_key(&order)
    }
}

/// Holds the fixed strategy set and builds the registry on first use.
///
/// The registry is a pure function of the strategies, so the cached copy is
/// only an optimisation; `OnceCell` makes sure concurrent first lookups agree
/// on a single instance.
pub struct GeneratorHolder {
    generators: Vec<Arc<dyn DocmosisParameterGenerator>>,
    collectors: Vec<Arc<dyn AdditionalDocumentsCollector>>,
    registry: OnceCell<GeneratorRegistry>,
}

impl GeneratorHolder {
    pub fn new(
        generators: Vec<Arc<dyn DocmosisParameterGenerator>>,
        collectors: Vec<Arc<dyn AdditionalDocumentsCollector>>,
    ) -> Self {
        Self {
            generators,
            collectors,
            registry: OnceCell::new(),
        }
    }

    /// The cached registry, building it if needed
    pub fn registry(&self) -> Result<&GeneratorRegistry> {
        self.registry.get_or_try_init(|| {
            tracing::debug!("Building generator registry on first use");
            GeneratorRegistry::build(&self.generators, &self.collectors)
        })
    }

    pub fn resolve_generator(&self, order: Order) -> Result<Arc<dyn DocmosisParameterGenerator>> {
        self.registry()?.resolve_generator(order)
    }

    pub fn resolve_additional_documents_collector(
        &self,
        order: Order,
    ) -> Result<Option<Arc<dyn AdditionalDocumentsCollector>>> {
        Ok(self.registry()?.resolve_additional_documents_collector(order))
    }
}

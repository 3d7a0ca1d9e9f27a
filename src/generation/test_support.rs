//! Hand-written collaborators shared by the generation and application tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::config::ImageConfig;
use crate::core::error::{OrderError, Result};
use crate::generation::generators::test_support::all_children;
use crate::generation::{
    CommonElementDecorator, CourtLookup, DocmosisParameters, DocumentRenderer,
    GeneratorDependencies, GeneratorHolder, HearingVenueLookup, JudgeSelector,
    OrderDocumentGenerator, RenderedDocument, standard_collectors, standard_generators,
};
use crate::orders::{DocmosisTemplate, Judge, JudgeAndLegalAdvisor, Language, RenderFormat};

pub(crate) struct EventJudge;

impl JudgeSelector for EventJudge {
    fn selected_judge(
        &self,
        event_judge: Option<&JudgeAndLegalAdvisor>,
        allocated_judge: Option<&Judge>,
    ) -> Option<JudgeAndLegalAdvisor> {
        event_judge.cloned().or_else(|| {
            allocated_judge.map(|judge| JudgeAndLegalAdvisor {
                judge: judge.clone(),
                ..Default::default()
            })
        })
    }
}

pub(crate) struct SwanseaCourt;

impl CourtLookup for SwanseaCourt {
    fn court_name(&self, code: &str) -> Result<String> {
        match code {
            "SA" => Ok("Family Court sitting at Swansea".to_string()),
            other => Err(OrderError::lookup(format!("no court for {other}"))),
        }
    }
}

pub(crate) struct NoVenues;

impl HearingVenueLookup for NoVenues {
    fn venue_name(&self, venue_id: &str) -> Result<String> {
        Err(OrderError::lookup(format!("unknown venue {venue_id}")))
    }
}

pub(crate) type RenderCall = (DocmosisTemplate, DocmosisParameters, RenderFormat, Language);

/// Records every call and answers with a fixed PDF header
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) calls: Mutex<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentRenderer for RecordingRenderer {
    async fn render(
        &self,
        template: DocmosisTemplate,
        parameters: &DocmosisParameters,
        format: RenderFormat,
        language: Language,
    ) -> Result<RenderedDocument> {
        self.calls
            .lock()
            .unwrap()
            .push((template, parameters.clone(), format, language));
        Ok(RenderedDocument {
            bytes: b"%PDF-1.7".to_vec(),
            format,
        })
    }
}

/// Orchestrator over the standard strategies with test collaborators
pub(crate) fn order_document_generator(
    renderer: Arc<dyn DocumentRenderer>,
) -> OrderDocumentGenerator {
    let deps = GeneratorDependencies {
        children_selector: all_children(),
        venue_lookup: Arc::new(NoVenues),
    };
    let holder = GeneratorHolder::new(standard_generators(&deps), standard_collectors());
    let decorator = CommonElementDecorator::new(
        all_children(),
        Arc::new(EventJudge),
        Arc::new(SwanseaCourt),
        ImageConfig::default(),
    );
    OrderDocumentGenerator::new(Arc::new(holder), Arc::new(decorator), renderer)
}

//! Tera-based proof renderer for local previews

use async_trait::async_trait;
use tera::{Context, Tera};

use crate::core::error::Result;
use crate::generation::{DocmosisParameters, DocumentRenderer, RenderedDocument};
use crate::orders::{DocmosisTemplate, Language, RenderFormat};

const PROOF_TEMPLATES: [(DocmosisTemplate, &str); 2] = [
    (
        DocmosisTemplate::OrderV2,
        include_str!("templates/order-v2.html.tera"),
    ),
    (
        DocmosisTemplate::EpoV2,
        include_str!("templates/epo-v2.html.tera"),
    ),
];

/// Renders the parameter bag into an HTML proof.
///
/// Proofs are always HTML whatever format is requested; they exist to check
/// wording and decoration without a Docmosis instance.
pub struct TeraProofRenderer {
    tera: Tera,
}

impl TeraProofRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(
            PROOF_TEMPLATES
                .iter()
                .map(|(template, content)| (template.proof_name(), *content)),
        )?;
        tera.autoescape_on(vec![".html"]);
        Ok(Self { tera })
    }
}

#[async_trait]
impl DocumentRenderer for TeraProofRenderer {
    async fn render(
        &self,
        template: DocmosisTemplate,
        parameters: &DocmosisParameters,
        format: RenderFormat,
        language: Language,
    ) -> Result<RenderedDocument> {
        let mut context = Context::from_serialize(parameters)?;
        context.insert("language", &language);

        let html = self.tera.render(template.proof_name(), &context)?;
        tracing::debug!(
            template = template.proof_name(),
            requested_format = %format,
            bytes = html.len(),
            "Rendered HTML proof"
        );
        Ok(RenderedDocument {
            bytes: html.into_bytes(),
            format: RenderFormat::Html,
        })
    }
}

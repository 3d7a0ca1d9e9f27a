//! HTTP client for the Docmosis rendering service

use std::time::Duration;

use async_trait::async_trait;
use base64::prelude::*;
use reqwest::Client;
use serde::Serialize;

use crate::application::{DocumentSealer, SealedDocument};
use crate::core::config::{AccessKey, DocmosisConfig, ImageConfig};
use crate::core::error::{OrderError, Result};
use crate::generation::{DocmosisParameters, DocumentRenderer, RenderedDocument};
use crate::orders::{DocmosisTemplate, Language, RenderFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderRequest<'a> {
    access_key: &'a str,
    template_name: &'a str,
    output_name: String,
    data: &'a DocmosisParameters,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertRequest<'a> {
    access_key: &'a str,
    file_name: &'a str,
    output_name: String,
    /// Base64 encoded document
    document: String,
    stamp_image: &'a str,
}

/// Renders templates and seals uploaded orders through Docmosis
pub struct DocmosisClient {
    client: Client,
    base_url: String,
    access_key: AccessKey,
    images: ImageConfig,
}

impl DocmosisClient {
    pub fn new(config: &DocmosisConfig, images: ImageConfig) -> Result<Self> {
        let base_url = config
            .url
            .as_ref()
            .ok_or_else(|| OrderError::missing("docmosis.url"))?
            .as_str()
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| OrderError::Render(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            access_key: config.access_key.clone(),
            images,
        })
    }

    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Vec<u8>> {
        let url = format!("{}/rs/{endpoint}", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| OrderError::Render(format!("Failed to call {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(OrderError::Render(format!(
                "HTTP {status} from {url}: {detail}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| OrderError::Render(format!("Failed to read response body: {e}")))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl DocumentRenderer for DocmosisClient {
    async fn render(
        &self,
        template: DocmosisTemplate,
        parameters: &DocmosisParameters,
        format: RenderFormat,
        language: Language,
    ) -> Result<RenderedDocument> {
        let template_name = template.template_name(language);
        let request = RenderRequest {
            access_key: self.access_key.expose(),
            template_name,
            output_name: format!("order.{}", format.extension()),
            data: parameters,
        };

        let bytes = self.post("render", &request).await?;
        tracing::debug!(template_name, %format, bytes = bytes.len(), "Docmosis rendered document");
        Ok(RenderedDocument { bytes, format })
    }
}

#[async_trait]
impl DocumentSealer for DocmosisClient {
    async fn seal(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        language: Language,
    ) -> Result<SealedDocument> {
        let stem = file_name
            .rsplit_once('.')
            .map_or(file_name, |(stem, _)| stem);
        let request = ConvertRequest {
            access_key: self.access_key.expose(),
            file_name,
            output_name: format!("{stem}.{}", RenderFormat::Pdf.extension()),
            document: BASE64_STANDARD.encode(&bytes),
            stamp_image: self.images.court_seal(language),
        };

        let sealed = self
            .post("convert", &request)
            .await
            .map_err(|e| OrderError::Sealing(e.to_string()))?;
        tracing::debug!(file_name, bytes = sealed.len(), "Docmosis sealed document");

        Ok(SealedDocument {
            bytes: sealed,
            format: RenderFormat::Pdf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::Order;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> DocmosisClient {
        let config = DocmosisConfig {
            url: Some(Url::parse(&server.uri()).unwrap()),
            access_key: AccessKey::new("secret-key"),
            timeout_secs: 5,
        };
        DocmosisClient::new(&config, ImageConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_render_posts_template_and_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rs/render"))
            .and(body_partial_json(json!({
                "accessKey": "secret-key",
                "templateName": "FL-PLW-GOR-WEL-00728.doc",
                "outputName": "order.docx",
                "data": {
                    "orderTitle": "Care order (C32A)",
                    "childrenAct": "Section 31 Children Act 1989"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"DOCX".to_vec()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let rendered = client(&mock_server)
            .render(
                DocmosisTemplate::OrderV2,
                &DocmosisParameters::for_order(Order::C32aCareOrder),
                RenderFormat::Word,
                Language::Welsh,
            )
            .await
            .unwrap();

        assert_eq!(rendered.bytes, b"DOCX".to_vec());
        assert_eq!(rendered.format, RenderFormat::Word);
    }

    #[tokio::test]
    async fn test_render_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rs/render"))
            .respond_with(ResponseTemplate::new(500).set_body_string("template missing"))
            .mount(&mock_server)
            .await;

        let result = client(&mock_server)
            .render(
                DocmosisTemplate::EpoV2,
                &DocmosisParameters::for_order(Order::C23EmergencyProtectionOrder),
                RenderFormat::Pdf,
                Language::English,
            )
            .await;

        match result {
            Err(OrderError::Render(message)) => {
                assert!(message.contains("500"));
                assert!(message.contains("template missing"));
            }
            other => panic!("expected render error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_seal_converts_to_pdf() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rs/convert"))
            .and(body_partial_json(json!({
                "fileName": "contact.docx",
                "outputName": "contact.pdf",
                "document": BASE64_STANDARD.encode(b"uploaded"),
                "stampImage": "[userImage:familycourtseal.png]"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF sealed".to_vec()))
            .mount(&mock_server)
            .await;

        let sealed = client(&mock_server)
            .seal(b"uploaded".to_vec(), "contact.docx", Language::English)
            .await
            .unwrap();

        assert_eq!(sealed.format, RenderFormat::Pdf);
        assert_eq!(sealed.bytes, b"%PDF sealed".to_vec());
    }

    #[tokio::test]
    async fn test_seal_failure_is_sealing_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rs/convert"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = client(&mock_server)
            .seal(b"uploaded".to_vec(), "contact.pdf", Language::English)
            .await;
        assert!(matches!(result, Err(OrderError::Sealing(_))));
    }

    #[test]
    fn test_missing_url_is_rejected() {
        let result = DocmosisClient::new(&DocmosisConfig::default(), ImageConfig::default());
        assert!(matches!(result, Err(OrderError::MissingField(_))));
    }
}

//! order-docgen CLI entrypoint
//! Parses command-line arguments and runs the order creation service.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use order_docgen::application::{
    DocumentSealer, OrderCreationService, SealedDocument, UploadedOrderDocumentGenerator,
};
use order_docgen::core::{EngineConfig, OrderError};
use order_docgen::generation::{
    CommonElementDecorator, DocumentRenderer, GeneratorDependencies, GeneratorHolder,
    OrderDocumentGenerator, standard_collectors, standard_generators,
};
use order_docgen::infrastructure::{
    AllocatedJudgeFallback, ConfiguredCourtLookup, ConfiguredVenueLookup, DocmosisClient,
    EventChildrenSelector, FilesystemDocumentStore, TeraProofRenderer,
};
use order_docgen::orders::{CaseData, Language, Order, OrderStatus, RenderFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// External imports (alphabetized)
use anyhow::Context;
use async_trait::async_trait;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "order-docgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the order catalogue
    Orders,
    /// Generate an order document from a case snapshot and store it
    Generate {
        /// Path to the case data JSON
        #[arg(long)]
        case: PathBuf,
        /// draft, sealed or plain
        #[arg(long, default_value = "draft")]
        status: OrderStatus,
        /// pdf or word
        #[arg(long, default_value = "pdf")]
        format: RenderFormat,
        /// english or welsh
        #[arg(long, default_value = "english")]
        language: Language,
        /// Configuration file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Render an HTML proof locally instead of calling Docmosis
        #[arg(long)]
        proof: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Orders => list_orders(),
        Commands::Generate {
            case,
            status,
            format,
            language,
            config,
            proof,
        } => {
            generate(GenerateParams {
                case: &case,
                status,
                format,
                language,
                config: config.as_deref(),
                proof,
            })
            .await?
        }
    }
    Ok(())
}

fn list_orders() {
    for order in Order::all() {
        println!(
            "{:<45} {:<50} {:<13} {}",
            order.as_str(),
            order.title(),
            if order.is_manual_upload() {
                "manual upload"
            } else {
                "digital"
            },
            if order.is_translatable() {
                "translatable"
            } else {
                ""
            }
        );
    }
}

/// Parameters for the generate command
struct GenerateParams<'a> {
    case: &'a Path,
    status: OrderStatus,
    format: RenderFormat,
    language: Language,
    config: Option<&'a Path>,
    proof: bool,
}

/// Stands in for Docmosis sealing when only local proofs are available
struct SealingUnavailable;

#[async_trait]
impl DocumentSealer for SealingUnavailable {
    async fn seal(
        &self,
        _bytes: Vec<u8>,
        file_name: &str,
        _language: Language,
    ) -> order_docgen::core::Result<SealedDocument> {
        Err(OrderError::Sealing(format!(
            "cannot seal {file_name}: no Docmosis URL is configured"
        )))
    }
}

async fn generate(params: GenerateParams<'_>) -> anyhow::Result<()> {
    let config = EngineConfig::load(params.config).context("Failed to load configuration")?;

    let content = tokio::fs::read_to_string(params.case)
        .await
        .with_context(|| format!("Failed to read case data from {}", params.case.display()))?;
    let case_data: CaseData =
        serde_json::from_str(&content).context("Failed to parse case data")?;

    info!(
        case_id = case_data.id,
        order = ?case_data.manage_orders_event_data.manage_orders_type,
        status = %params.status,
        "Generating order"
    );

    let docmosis = match (&config.docmosis.url, params.proof) {
        (Some(_), _) => Some(Arc::new(
            DocmosisClient::new(&config.docmosis, config.images.clone())
                .context("Failed to create Docmosis client")?,
        )),
        (None, true) => None,
        (None, false) => anyhow::bail!("docmosis.url must be configured unless --proof is used"),
    };

    let renderer: Arc<dyn DocumentRenderer> = match (&docmosis, params.proof) {
        (Some(client), false) => client.clone(),
        _ => Arc::new(TeraProofRenderer::new().context("Failed to load proof templates")?),
    };
    let sealer: Arc<dyn DocumentSealer> = match &docmosis {
        Some(client) => client.clone(),
        None => Arc::new(SealingUnavailable),
    };

    let children_selector = Arc::new(EventChildrenSelector);
    let deps = GeneratorDependencies {
        children_selector: children_selector.clone(),
        venue_lookup: Arc::new(ConfiguredVenueLookup::new(config.venues.clone())),
    };
    let holder = GeneratorHolder::new(standard_generators(&deps), standard_collectors());
    let decorator = CommonElementDecorator::new(
        children_selector,
        Arc::new(AllocatedJudgeFallback),
        Arc::new(ConfiguredCourtLookup::new(config.courts.clone())),
        config.images.clone(),
    );
    let generator = OrderDocumentGenerator::new(Arc::new(holder), Arc::new(decorator), renderer);

    let store = Arc::new(FilesystemDocumentStore::new(&config.storage.root_dir));
    let service = OrderCreationService::new(
        Arc::new(generator),
        Arc::new(UploadedOrderDocumentGenerator::new(store.clone(), sealer)),
        store,
    );

    let created = service
        .create_order_document(&case_data, params.status, params.format, params.language)
        .await
        .context("Failed to create order document")?;

    println!(
        "{}",
        serde_json::to_string_pretty(&created).context("Failed to serialize result")?
    );
    Ok(())
}

//! Document renderers: Docmosis for real orders, Tera for local proofs

pub mod docmosis_client;
pub mod tera_renderer;

pub use docmosis_client::DocmosisClient;
pub use tera_renderer::TeraProofRenderer;

pub mod filesystem_store;

pub use filesystem_store::FilesystemDocumentStore;

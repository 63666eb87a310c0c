pub mod catalog;
pub mod config;
pub mod loader;
pub mod state;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use loader::{fetch_manifest, load_document, load_documents, manifest_path, CatalogError};
pub use state::CatalogState;

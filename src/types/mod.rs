pub mod identifiers;

pub use identifiers::{Slug, SlugError, DOCUMENTS_DIR};

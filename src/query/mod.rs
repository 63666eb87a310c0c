//! Read-only queries over a loaded [`CatalogState`](crate::catalog::CatalogState).
//!
//! Every query is a pure, synchronous linear scan of the snapshot and
//! preserves collection order unless it says otherwise. Nothing here fails:
//! a query that finds nothing returns `None` or an empty list.

pub mod facets;
pub mod filters;
pub mod lookup;
pub mod ordering;

pub use facets::{CategoryGroup, FacetOrder};
pub use filters::DocumentFilter;
pub use lookup::MAX_RELATED;
pub use ordering::by_date_desc;

//! Page references: the `page#anchor` codec and relative-path resolution
//! against the current page's location.

pub mod page_ref;
pub mod resolve;

pub use page_ref::PageRef;
pub use resolve::resolve_path;

pub mod selection;

pub use selection::{Selection, is_cursor_in_range};

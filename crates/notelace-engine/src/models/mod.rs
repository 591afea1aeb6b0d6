pub mod space_index;

pub use space_index::{DynamicPages, NoDynamicPages, SpaceIndex};

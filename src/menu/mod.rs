// Menu data model: items, the in-memory store, and course filtering
pub mod filter;
pub mod item;
pub mod store;

pub use filter::{CourseFilter, average_price, filter_items};
pub use item::{Course, MenuDraft, MenuItem};
pub use store::MenuStore;

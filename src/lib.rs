pub mod config;
pub mod error;
pub mod menu;
pub mod router;
pub mod cli;
pub mod formatter;
pub mod logging;

pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{Course, CourseFilter, MenuDraft, MenuItem, MenuStore};
pub use router::{Route, Router};
pub use cli::{App, AppState};
pub use formatter::MenuFormatter;

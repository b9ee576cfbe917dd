// Terminal front end: event loop, screen state and rendering
pub mod app;
pub mod ui;
pub mod state;

pub use app::App;
pub use state::AppState;

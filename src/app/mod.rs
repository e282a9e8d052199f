pub mod event;
pub mod import_task;
pub mod mode;
pub mod state;

pub use mode::Mode;
pub use state::AppState;

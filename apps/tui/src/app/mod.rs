// App module for finhealth-dash
// Holds dashboard state and the request lifecycle

pub mod actions;
pub mod form;
pub mod input;
pub mod lifecycle;
pub mod state;

pub use actions::{AppActions, AppEvent, Command};
pub use input::handle_input;
pub use state::{App, Focus};

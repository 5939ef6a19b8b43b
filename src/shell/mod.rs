// Composition root for the rate_copy bounded context.
//
// Responsibilities:
// - Read config from the environment.
// - Instantiate the concrete upstream adapter.
// - Wire the adapter and the session into the use case handlers.

pub mod config;
pub mod http;
pub mod state;

pub use crate::shell::state::AppState;

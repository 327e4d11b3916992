pub mod client;
pub mod state;

pub use client::{BackendClient, BackendResponse};
pub use state::AppState;

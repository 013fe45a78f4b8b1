// Composition root for the fixture sites.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory page store and wire it into the use case handlers.
// - Bind the listener and expose the axum router that serves every fixture page.

pub mod config;
pub mod http;
pub mod server;
pub mod state;

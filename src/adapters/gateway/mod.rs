//! Gateway HTTP transport adapters.
//!
//! - `ReqwestTransport` performs real network calls
//! - `MockHttpTransport` replays scripted outcomes for tests

mod mock_transport;
mod reqwest_transport;

pub use mock_transport::MockHttpTransport;
pub use reqwest_transport::ReqwestTransport;

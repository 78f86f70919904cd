//! Vertex AI token-counting boundary
//!
//! The only nontrivial computation in the system lives behind the
//! [`TokenCounter`] trait: an external endpoint that maps a model and a
//! list of texts to an authoritative token total. [`VertexClient`] is
//! the REST implementation.

pub mod client;
pub mod counter;
pub mod error;

pub use client::{ACCESS_TOKEN_ENV, VertexClient};
pub use counter::TokenCounter;
pub use error::{Result, VertexError};

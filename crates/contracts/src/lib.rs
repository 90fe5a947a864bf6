//! Wire contracts shared between the frontend and the RAG backend.
//!
//! Every HTTP exchange the client performs is described here as a strict
//! serde schema with explicit optionals, so response shapes are validated
//! at the network boundary instead of being trusted ad hoc.

pub mod query;
pub mod settings;
pub mod upload;

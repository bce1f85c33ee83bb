//! Core library for the tracing endpoint model.
//!
//! This crate provides the value types that identify one side of a traced
//! operation:
//! - `Endpoint`, an immutable service/address/port triple
//! - `EndpointBuilder`, which validates and normalizes inputs
//! - address and port representations shared by both
//! - the canonical JSON form used on the wire

pub mod builder;
pub mod endpoint;
pub mod error;
pub mod network;

pub use builder::EndpointBuilder;
pub use endpoint::Endpoint;
pub use error::{Error, Result};

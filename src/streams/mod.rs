//! Stream Demonstration Module
//!
//! Hosts the `/flux`, `/mono`, `/stream`, and `/fluxStream` endpoints.
//! They carry no business logic; they exist to demonstrate backpressure-free
//! delivery of finite and interval-driven sequences over the same runtime
//! the CRUD surface runs on.

pub mod handlers;

//! Movies Info Module
//!
//! The CRUD core of the service: everything between an inbound HTTP request
//! and the record store.
//!
//! ## Responsibilities
//! - **Identifier policy**: derive the stable primary key from a record's
//!   name and year (`"Inception-2010"`).
//! - **Mapping**: convert between the loosely validated wire DTO
//!   (date-as-text) and the strongly typed persisted entity.
//! - **Orchestration**: sequence existence-check, conflict decision,
//!   persist, and remap per operation; duplicate prevention lives here.
//! - **Translation**: turn validation failures and conflicts into structured
//!   client-facing error payloads, storage faults into server errors.
//!
//! ## Submodules
//! - **`types`**: entity, DTO, identifier derivation, validation.
//! - **`repository`**: the async record store adapter and its in-memory backend.
//! - **`service`**: the orchestration service.
//! - **`handlers`**: HTTP request handlers for the axum web server.
//! - **`error`**: error taxonomy and HTTP translation.

pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;
pub mod types;

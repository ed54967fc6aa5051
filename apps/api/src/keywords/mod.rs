//! Keyword inventory and job-description matching.
//!
//! The vocabulary is fixed at compile time, compiled into patterns once at
//! startup, and shared read-only by every request.

pub mod matcher;
pub mod vocabulary;

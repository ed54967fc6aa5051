//! Resume analysis: the upload pipeline and the external-model backend.
//!
//! `handlers` owns the HTTP pipeline (validate, extract, scan, match,
//! analyze, merge); `analyzer` is the pluggable backend seam over the LLM
//! client; `models` types the model's JSON verdict; `prompts` holds the
//! prompt constants.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;

//! JobFit: resume vs job-description skill matching.
//!
//! The matching core (vocabulary, extractor, scoring, advisor) is pure and
//! synchronous. Everything else is I/O glue around it: PDF extraction, text
//! normalization, the HTTP API, and report writing.

pub mod config;
pub mod errors;
pub mod matching;
pub mod pdf;
pub mod report;
pub mod routes;
pub mod state;
pub mod text;

//! Core library for the Imprint self-assessment platform: question
//! catalogs, the scoring and multi-rater aggregation engine, report
//! projection, and the thin seams connecting them to storage and delivery
//! collaborators.

pub mod assessments;
pub mod config;
pub mod error;
pub mod telemetry;

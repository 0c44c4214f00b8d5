//! workflowdoc - Generate a markdown index of CI workflows from annotation comments
//!
//! Scans a workflows directory for `.yml`/`.yaml` files, extracts
//! `# @workflow.<field>: <value>` annotation comments from each, and renders
//! a single markdown report: a summary table of all workflows plus a detail
//! section for those declaring parameters, results, permissions, or
//! requirements.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extractor;
pub mod renderer;

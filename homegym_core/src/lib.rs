#![forbid(unsafe_code)]

//! Core domain model and recommendation engine for HomeGym.
//!
//! This crate provides:
//! - Domain types (exercises, questionnaire answers, workout plans)
//! - The built-in exercise catalog
//! - The recommendation engine: complexity score, exercise filtering,
//!   plan building and plan metrics, with a per-run inference trace
//! - Configuration loading
//!
//! A run is a pure synchronous computation: it owns its trace, RNG and
//! output buffers, so the read-only catalog can be shared across
//! concurrent runs.

pub mod types;
pub mod error;
pub mod trace;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod score;
pub mod filter;
pub mod planner;
pub mod metrics;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use trace::{Trace, TraceCategory, TraceEntry};
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use score::{ComplexityLevel, ScoreBreakdown};
pub use filter::FilterOutcome;
pub use engine::{run, PlanResult};

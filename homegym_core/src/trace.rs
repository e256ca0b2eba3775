//! Inference trace accumulation.
//!
//! Every engine run produces an append-only list of trace entries that
//! records each decision in stage order. The trace is owned by the run and
//! returned as part of the result; it is the observability stream consumers
//! display, distinct from the crate's diagnostic `tracing` output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category tag for a trace entry
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TraceCategory {
    System,
    Constraint,
    Rule,
    Optimization,
    Calculation,
    Warning,
    Success,
}

impl TraceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TraceCategory::System => "system",
            TraceCategory::Constraint => "constraint",
            TraceCategory::Rule => "rule",
            TraceCategory::Optimization => "optimization",
            TraceCategory::Calculation => "calculation",
            TraceCategory::Warning => "warning",
            TraceCategory::Success => "success",
        }
    }
}

/// A single timestamped inference decision
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TraceEntry {
    pub timestamp: DateTime<Utc>,
    pub category: TraceCategory,
    pub message: String,
}

/// Append-only trace for one engine run
#[derive(Clone, Debug, Default)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with the current timestamp
    pub fn push(&mut self, category: TraceCategory, message: impl Into<String>) {
        self.entries.push(TraceEntry {
            timestamp: Utc::now(),
            category,
            message: message.into(),
        });
    }

    pub fn system(&mut self, message: impl Into<String>) {
        self.push(TraceCategory::System, message);
    }

    pub fn constraint(&mut self, message: impl Into<String>) {
        self.push(TraceCategory::Constraint, message);
    }

    pub fn rule(&mut self, message: impl Into<String>) {
        self.push(TraceCategory::Rule, message);
    }

    pub fn optimization(&mut self, message: impl Into<String>) {
        self.push(TraceCategory::Optimization, message);
    }

    pub fn calculation(&mut self, message: impl Into<String>) {
        self.push(TraceCategory::Calculation, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(TraceCategory::Warning, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(TraceCategory::Success, message);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the trace, yielding the entries for the run result
    pub fn into_entries(self) -> Vec<TraceEntry> {
        self.entries
    }
}

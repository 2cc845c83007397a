//! Pipeline Options

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tie-break used by the topological sorter when several nodes are ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadyOrder {
    /// First ready, first emitted. The queue is seeded in ascending node
    /// id order; successors join it in edge insertion order.
    #[default]
    Fifo,

    /// Always emit the ready node with the smallest id.
    LowestId,
}

/// Knobs for [`analyze`](crate::pipeline::analyze).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PipelineOptions {
    pub ready_order: ReadyOrder,

    /// Check the condensation for cycles before sorting it.
    pub verify_condensation: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            ready_order: ReadyOrder::Fifo,
            verify_condensation: true,
        }
    }
}

impl PipelineOptions {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_ready_order(mut self, ready_order: ReadyOrder) -> Self {
        self.ready_order = ready_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_object_gives_defaults() {
        let options = PipelineOptions::from_json("{}").unwrap();
        assert_eq!(options, PipelineOptions::default());
        assert!(options.verify_condensation);
    }

    #[test]
    fn kebab_case_fields() {
        let options = PipelineOptions::from_json(
            r#"{ "ready-order": "lowest-id", "verify-condensation": false }"#,
        )
        .unwrap();
        assert_eq!(options.ready_order, ReadyOrder::LowestId);
        assert!(!options.verify_condensation);
    }

    #[test]
    fn unknown_tie_break_is_a_config_error() {
        let err = PipelineOptions::from_json(r#"{ "ready-order": "random" }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

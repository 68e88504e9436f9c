//! DoubtDesk Pricing Display Engine
//!
//! This crate holds everything the front-end derives from static content:
//! the plan catalog, the billing cycle selector, price projection, the
//! feature matrix, and the small state machines behind reveal animations
//! and hover cards. It has no UI framework dependency so it can be tested
//! natively and shared by the marketing site and the dashboard.

pub mod billing;
pub mod catalog;
pub mod chart;
pub mod hover;
pub mod matrix;
pub mod preview;
pub mod projector;
pub mod reveal;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use billing::{BillingCycle, BillingCycleState};
pub use catalog::{Feature, Plan, PlanCatalog};
pub use chart::{AreaChart, XpPoint};
pub use hover::{AccentColor, HoverCardContent, HoverCardState};
pub use matrix::{CellValue, ComparisonRow, ComparisonTable, FeatureMatrix, FeatureRow};
pub use projector::DerivedPriceView;
pub use reveal::{RevealGroup, RevealPhase, RevealTrigger};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Comparison table error: {0}")]
    Comparison(String),

    #[error("Invalid color: {0}")]
    Color(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Animation timings shared by reveal groups and hover cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Delay between consecutive children of a reveal group (ms)
    pub stagger_ms: u64,
    /// Delay before the first child of a reveal group (ms)
    pub base_delay_ms: u64,
    /// Duration of a single child's entrance (ms)
    pub reveal_duration_ms: u64,
    /// Duration of the hover card enter/exit transition (ms)
    pub hover_transition_ms: u64,
}

impl MotionConfig {
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    pub fn hover_transition(&self) -> Duration {
        Duration::from_millis(self.hover_transition_ms)
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 100,
            base_delay_ms: 0,
            reveal_duration_ms: 600,
            hover_transition_ms: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_config_defaults() {
        let motion = MotionConfig::default();
        assert_eq!(motion.stagger(), Duration::from_millis(100));
        assert_eq!(motion.reveal_duration(), Duration::from_millis(600));
    }

    #[test]
    fn test_motion_config_partial_json() {
        let motion: MotionConfig = serde_json::from_str(r#"{"stagger_ms": 250}"#).unwrap();
        assert_eq!(motion.stagger_ms, 250);
        assert_eq!(motion.hover_transition_ms, 200);
    }
}

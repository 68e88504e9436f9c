//! Billing cycle selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pricing period selected on the pricing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    pub fn is_yearly(self) -> bool {
        matches!(self, BillingCycle::Yearly)
    }

    /// Unit shown after a price, e.g. "$19/month"
    pub fn period_label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "month",
            BillingCycle::Yearly => "year",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingCycle::Monthly => write!(f, "Monthly"),
            BillingCycle::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Owned billing cycle selection
///
/// Starts at [`BillingCycle::Monthly`] and changes only through [`toggle`](Self::toggle).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingCycleState {
    cycle: BillingCycle,
}

impl BillingCycleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> BillingCycle {
        self.cycle
    }

    /// Flip Monthly <-> Yearly and return the new cycle
    pub fn toggle(&mut self) -> BillingCycle {
        self.cycle = self.cycle.toggled();
        tracing::debug!(cycle = %self.cycle, "billing cycle toggled");
        self.cycle
    }
}

//! Price projection: what a plan card shows for the selected billing cycle

use crate::billing::BillingCycle;
use crate::catalog::{Plan, PlanCatalog};
use serde::Serialize;

/// Display strings for one plan card
///
/// Always derived from the current cycle, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedPriceView {
    pub price_text: String,
    pub period_label: &'static str,
    pub cta_label: &'static str,
}

/// Project a plan onto a billing cycle
pub fn project(plan: &Plan, cycle: BillingCycle) -> DerivedPriceView {
    let price_text = match cycle {
        BillingCycle::Monthly => plan.monthly_price.clone(),
        BillingCycle::Yearly => plan.yearly_price.clone(),
    };

    DerivedPriceView {
        price_text,
        period_label: cycle.period_label(),
        cta_label: cta_label(plan),
    }
}

/// Project every plan in catalog order
pub fn project_all(catalog: &PlanCatalog, cycle: BillingCycle) -> Vec<DerivedPriceView> {
    catalog.plans.iter().map(|plan| project(plan, cycle)).collect()
}

pub fn cta_label(plan: &Plan) -> &'static str {
    if plan.is_free() {
        "Sign Up"
    } else {
        "Get Started"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::BillingCycleState;

    fn prices(catalog: &PlanCatalog, cycle: BillingCycle) -> Vec<String> {
        project_all(catalog, cycle)
            .into_iter()
            .map(|view| view.price_text)
            .collect()
    }

    #[test]
    fn test_price_follows_cycle() {
        for plan in &PlanCatalog::standard().plans {
            assert_eq!(project(plan, BillingCycle::Monthly).price_text, plan.monthly_price);
            assert_eq!(project(plan, BillingCycle::Yearly).price_text, plan.yearly_price);
        }
    }

    #[test]
    fn test_cta_label() {
        for plan in &PlanCatalog::standard().plans {
            let view = project(plan, BillingCycle::Yearly);
            if plan.name == "Free" {
                assert_eq!(view.cta_label, "Sign Up");
            } else {
                assert_eq!(view.cta_label, "Get Started");
            }
        }
    }

    #[test]
    fn test_toggle_scenario() {
        let catalog = PlanCatalog::standard();
        let mut state = BillingCycleState::new();

        assert_eq!(prices(catalog, state.current()), ["$0", "$19", "$49"]);
        assert!(project_all(catalog, state.current())
            .iter()
            .all(|v| v.period_label == "month"));

        state.toggle();
        assert_eq!(prices(catalog, state.current()), ["$0", "$190", "$490"]);
        assert!(project_all(catalog, state.current())
            .iter()
            .all(|v| v.period_label == "year"));

        state.toggle();
        assert_eq!(
            project_all(catalog, state.current()),
            project_all(catalog, BillingCycle::Monthly)
        );
    }
}

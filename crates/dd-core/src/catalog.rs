//! Plan catalog: the static pricing tiers shown on the pricing page

use crate::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A capability listed on a plan card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub included: bool,
}

impl Feature {
    pub fn new(name: impl Into<String>, included: bool) -> Self {
        Self {
            name: name.into(),
            included,
        }
    }
}

/// A pricing tier
///
/// Prices are display strings and carry no arithmetic relationship to
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub description: String,
    pub monthly_price: String,
    pub yearly_price: String,
    #[serde(default)]
    pub highlight: bool,
    pub features: Vec<Feature>,
}

impl Plan {
    /// The entry-level tier gets a sign-up call to action instead of a purchase one
    pub fn is_free(&self) -> bool {
        self.name == "Free"
    }
}

/// Ordered set of plans
///
/// Feature rows are compared across plans by position, so every plan
/// must list the same features in the same order. Use [`PlanCatalog::validate`]
/// before rendering an externally authored catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    pub plans: Vec<Plan>,
}

const FEATURE_NAMES: [&str; 8] = [
    "Ask doubts in text",
    "Community answers",
    "Step-by-step solutions",
    "Image & handwriting upload",
    "Priority expert answers",
    "Live 1:1 tutoring sessions",
    "Progress analytics",
    "Personal study plan",
];

fn plan(
    name: &str,
    description: &str,
    monthly_price: &str,
    yearly_price: &str,
    highlight: bool,
    included: [bool; 8],
) -> Plan {
    Plan {
        name: name.to_string(),
        description: description.to_string(),
        monthly_price: monthly_price.to_string(),
        yearly_price: yearly_price.to_string(),
        highlight,
        features: FEATURE_NAMES
            .iter()
            .zip(included)
            .map(|(name, included)| Feature::new(*name, included))
            .collect(),
    }
}

static STANDARD_CATALOG: Lazy<PlanCatalog> = Lazy::new(|| PlanCatalog {
    plans: vec![
        plan(
            "Free",
            "Get unstuck on the occasional homework problem",
            "$0",
            "$0",
            false,
            [true, true, true, false, false, false, false, false],
        ),
        plan(
            "Pro",
            "For students who want fast, expert answers every day",
            "$19",
            "$190",
            true,
            [true, true, true, true, true, false, true, false],
        ),
        plan(
            "Premium",
            "Live tutoring and a study plan built around you",
            "$49",
            "$490",
            false,
            [true, true, true, true, true, true, true, true],
        ),
    ],
});

impl PlanCatalog {
    pub fn new(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// Built-in Free / Pro / Premium catalog
    pub fn standard() -> &'static PlanCatalog {
        &STANDARD_CATALOG
    }

    /// Parse a catalog from JSON and validate it
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let catalog: PlanCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.name == name)
    }

    /// The plan marked "Most Popular", if any
    pub fn highlighted(&self) -> Option<&Plan> {
        self.plans.iter().find(|p| p.highlight)
    }

    pub fn plan_names(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|p| p.name.as_str())
    }

    /// Check the authoring invariants the renderers rely on
    pub fn validate(&self) -> CoreResult<()> {
        let first = self
            .plans
            .first()
            .ok_or_else(|| CoreError::Catalog("catalog has no plans".to_string()))?;

        let mut seen = HashSet::new();
        for plan in &self.plans {
            if !seen.insert(plan.name.as_str()) {
                return Err(CoreError::Catalog(format!(
                    "duplicate plan name '{}'",
                    plan.name
                )));
            }
        }

        for plan in &self.plans[1..] {
            if plan.features.len() != first.features.len() {
                return Err(CoreError::Catalog(format!(
                    "plan '{}' lists {} features but '{}' lists {}",
                    plan.name,
                    plan.features.len(),
                    first.name,
                    first.features.len()
                )));
            }

            let misaligned = first
                .features
                .iter()
                .zip(&plan.features)
                .position(|(a, b)| a.name != b.name);
            if let Some(index) = misaligned {
                return Err(CoreError::Catalog(format!(
                    "feature {} of plan '{}' is '{}', expected '{}'",
                    index, plan.name, plan.features[index].name, first.features[index].name
                )));
            }
        }

        match self.plans.iter().filter(|p| p.highlight).count() {
            0 => tracing::warn!("catalog has no highlighted plan"),
            1 => {}
            n => {
                return Err(CoreError::Catalog(format!(
                    "{} plans are highlighted, at most one is allowed",
                    n
                )))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = PlanCatalog::standard();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.plan_names().collect::<Vec<_>>(), ["Free", "Pro", "Premium"]);
        assert_eq!(catalog.highlighted().map(|p| p.name.as_str()), Some("Pro"));
        assert_eq!(catalog.plans.iter().filter(|p| p.highlight).count(), 1);
    }

    #[test]
    fn test_standard_prices() {
        let catalog = PlanCatalog::standard();
        let pro = catalog.get("Pro").unwrap();
        assert_eq!(pro.monthly_price, "$19");
        assert_eq!(pro.yearly_price, "$190");
        assert!(catalog.get("Free").unwrap().is_free());
        assert!(catalog.get("Enterprise").is_none());
    }

    #[test]
    fn test_validate_rejects_unequal_feature_counts() {
        let mut catalog = PlanCatalog::standard().clone();
        catalog.plans[2].features.pop();
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CoreError::Catalog(_)));
        assert!(err.to_string().contains("Premium"));
    }

    #[test]
    fn test_validate_rejects_reordered_features() {
        let mut catalog = PlanCatalog::standard().clone();
        catalog.plans[1].features.swap(0, 1);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("feature 0 of plan 'Pro'"));
    }

    #[test]
    fn test_validate_rejects_two_highlights() {
        let mut catalog = PlanCatalog::standard().clone();
        catalog.plans[2].highlight = true;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_allows_no_highlight() {
        let mut catalog = PlanCatalog::standard().clone();
        catalog.plans[1].highlight = false;
        assert!(catalog.validate().is_ok());
        assert!(catalog.highlighted().is_none());
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicates() {
        assert!(PlanCatalog::new(Vec::new()).validate().is_err());

        let mut catalog = PlanCatalog::standard().clone();
        catalog.plans[2].name = "Pro".to_string();
        catalog.plans[2].highlight = false;
        assert!(catalog.validate().unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "plans": [
                {
                    "name": "Free",
                    "description": "Try it",
                    "monthly_price": "$0",
                    "yearly_price": "$0",
                    "features": [{"name": "Ask doubts in text", "included": true}]
                },
                {
                    "name": "Pro",
                    "description": "Go further",
                    "monthly_price": "$19",
                    "yearly_price": "$190",
                    "highlight": true,
                    "features": [{"name": "Ask doubts in text", "included": true}]
                }
            ]
        }"#;
        let catalog = PlanCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.plans[0].highlight);

        let broken = json.replacen("Ask doubts in text", "Ask doubts", 1);
        assert!(PlanCatalog::from_json(&broken).is_err());
        assert!(matches!(
            PlanCatalog::from_json("{"),
            Err(CoreError::Parse(_))
        ));
    }
}

//! Feature matrix: per-card feature lists and the detailed comparison table

use crate::catalog::{Plan, PlanCatalog};
use crate::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Text treatment of a feature row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Emphasized,
    Muted,
}

/// One line of a plan card's feature list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub name: String,
    pub included: bool,
}

impl FeatureRow {
    pub fn glyph(&self) -> &'static str {
        if self.included {
            "✓"
        } else {
            "−"
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        if self.included {
            Emphasis::Emphasized
        } else {
            Emphasis::Muted
        }
    }
}

/// A plan's features, unchanged in order and count
pub fn feature_list(plan: &Plan) -> Vec<FeatureRow> {
    plan.features
        .iter()
        .map(|f| FeatureRow {
            name: f.name.clone(),
            included: f.included,
        })
        .collect()
}

/// Value of one comparison table cell
///
/// In JSON a flag is a bool, text is a string and an empty cell is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Flag(bool),
    Text(String),
    Empty,
}

impl CellValue {
    pub fn text(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub label: String,
    pub values: Vec<CellValue>,
}

/// Hand-authored comparison rows, one value per plan column
///
/// Maintained separately from [`Plan::features`]: the rows carry richer
/// values ("3 hours", "Unlimited") than the card checklists do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub plan_names: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

fn row(label: &str, values: [CellValue; 3]) -> ComparisonRow {
    ComparisonRow {
        label: label.to_string(),
        values: values.into(),
    }
}

static STANDARD_TABLE: Lazy<ComparisonTable> = Lazy::new(|| {
    use CellValue::Flag;
    let t = CellValue::text;

    ComparisonTable {
        plan_names: vec!["Free".into(), "Pro".into(), "Premium".into()],
        rows: vec![
            row("Doubts per month", [t("10"), t("Unlimited"), t("Unlimited")]),
            row("Expert response time", [t("48 hours"), t("6 hours"), t("1 hour")]),
            row("Step-by-step solutions", [Flag(true), Flag(true), Flag(true)]),
            row("Image & handwriting upload", [Flag(false), Flag(true), Flag(true)]),
            row("Live tutoring per month", [Flag(false), Flag(false), t("3 hours")]),
            row("Progress analytics", [Flag(false), Flag(true), Flag(true)]),
            row("Personal study plan", [Flag(false), Flag(false), Flag(true)]),
            row("Support", [t("Community"), t("Email"), t("Priority")]),
        ],
    }
});

impl ComparisonTable {
    pub fn standard() -> &'static ComparisonTable {
        &STANDARD_TABLE
    }

    /// Cell at `row`, `column`; missing data is [`CellValue::Empty`]
    pub fn cell(&self, row: usize, column: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.values.get(column))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    /// Row values padded or cut to the number of plan columns
    pub fn row_cells(&self, row: usize) -> Vec<CellValue> {
        (0..self.plan_names.len()).map(|col| self.cell(row, col)).collect()
    }

    /// Check that the columns name the catalog's plans in catalog order
    pub fn check_columns(&self, catalog: &PlanCatalog) -> CoreResult<()> {
        let expected: Vec<&str> = catalog.plan_names().collect();
        let actual: Vec<&str> = self.plan_names.iter().map(String::as_str).collect();
        if expected != actual {
            return Err(CoreError::Comparison(format!(
                "table columns {:?} do not match catalog plans {:?}",
                actual, expected
            )));
        }
        Ok(())
    }
}

/// Both renderings of the catalog, built in one pass
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    pub cards: Vec<(String, Vec<FeatureRow>)>,
    pub comparison: ComparisonTable,
}

impl FeatureMatrix {
    pub fn build(catalog: &PlanCatalog, table: &ComparisonTable) -> CoreResult<Self> {
        table.check_columns(catalog)?;

        let cards = catalog
            .plans
            .iter()
            .map(|plan| (plan.name.clone(), feature_list(plan)))
            .collect();

        Ok(Self {
            cards,
            comparison: table.clone(),
        })
    }

    /// Feature list for the named plan's card
    pub fn card(&self, plan_name: &str) -> &[FeatureRow] {
        self.cards
            .iter()
            .find(|(name, _)| name == plan_name)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_list_preserves_order_and_count() {
        for plan in &PlanCatalog::standard().plans {
            let rows = feature_list(plan);
            assert_eq!(rows.len(), plan.features.len());
            for (row, feature) in rows.iter().zip(&plan.features) {
                assert_eq!(row.name, feature.name);
                assert_eq!(row.included, feature.included);
            }
        }
    }

    #[test]
    fn test_glyph_and_emphasis() {
        let included = FeatureRow { name: "a".into(), included: true };
        let excluded = FeatureRow { name: "b".into(), included: false };
        assert_eq!(included.glyph(), "✓");
        assert_eq!(included.emphasis(), Emphasis::Emphasized);
        assert_eq!(excluded.glyph(), "−");
        assert_eq!(excluded.emphasis(), Emphasis::Muted);
    }

    #[test]
    fn test_missing_cells_are_empty() {
        let mut table = ComparisonTable::standard().clone();
        table.rows[0].values.truncate(1);
        assert_eq!(table.cell(0, 0), CellValue::text("10"));
        assert_eq!(table.cell(0, 2), CellValue::Empty);
        assert_eq!(table.cell(99, 0), CellValue::Empty);
        assert_eq!(table.row_cells(0).len(), 3);
    }

    #[test]
    fn test_build_standard_matrix() {
        let matrix = FeatureMatrix::build(PlanCatalog::standard(), ComparisonTable::standard())
            .unwrap();
        assert_eq!(matrix.cards.len(), 3);
        assert_eq!(matrix.card("Premium").len(), 8);
        assert!(matrix.card("Premium").iter().all(|r| r.included));
        assert!(matrix.card("Unknown").is_empty());
        assert_eq!(matrix.comparison.cell(4, 2), CellValue::text("3 hours"));
    }

    #[test]
    fn test_build_rejects_column_mismatch() {
        let mut table = ComparisonTable::standard().clone();
        table.plan_names.swap(1, 2);
        let err = FeatureMatrix::build(PlanCatalog::standard(), &table).unwrap_err();
        assert!(matches!(err, CoreError::Comparison(_)));
    }

    #[test]
    fn test_cell_json_shape() {
        let row: ComparisonRow =
            serde_json::from_str(r#"{"label": "Support", "values": [true, "Email"]}"#).unwrap();
        assert_eq!(row.values, vec![CellValue::Flag(true), CellValue::text("Email")]);
    }

    #[test]
    fn test_empty_cells_serialize_as_null() {
        let mut table = ComparisonTable::standard().clone();
        table.rows[0].values[0] = CellValue::Empty;

        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains(r#""values":[null,"Unlimited","Unlimited"]"#));

        let parsed: ComparisonTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
        assert_eq!(parsed.cell(0, 0), CellValue::Empty);
    }
}

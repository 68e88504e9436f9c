//! XP-over-time area chart geometry for the dashboard

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpPoint {
    pub time: String,
    pub xp: u32,
}

impl XpPoint {
    pub fn new(time: impl Into<String>, xp: u32) -> Self {
        Self {
            time: time.into(),
            xp,
        }
    }
}

/// SVG paths for an area chart in a `width` x `height` viewBox
#[derive(Debug, Clone, PartialEq)]
pub struct AreaChart {
    pub width: f64,
    pub height: f64,
    /// Top of the y axis, rounded up to a multiple of 10
    pub y_max: u32,
    pub line_path: String,
    pub area_path: String,
    /// (x, label) for each point, in input order
    pub labels: Vec<(f64, String)>,
}

impl AreaChart {
    pub fn new(points: &[XpPoint], width: f64, height: f64) -> Self {
        let peak = points.iter().map(|p| p.xp).max().unwrap_or(0);
        let y_max = (peak.div_ceil(10) * 10).max(10);

        let coords: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = if points.len() == 1 {
                    width / 2.0
                } else {
                    i as f64 * width / (points.len() - 1) as f64
                };
                let y = height - f64::from(p.xp) / f64::from(y_max) * height;
                (x, y)
            })
            .collect();

        let line_path = coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { "L" }, x, y))
            .collect::<Vec<_>>()
            .join(" ");

        let area_path = match (coords.first(), coords.last()) {
            (Some((first_x, _)), Some((last_x, _))) => format!(
                "{} L{:.1},{:.1} L{:.1},{:.1} Z",
                line_path, last_x, height, first_x, height
            ),
            _ => String::new(),
        };

        let labels = coords
            .iter()
            .zip(points)
            .map(|((x, _), p)| (*x, p.time.clone()))
            .collect();

        Self {
            width,
            height,
            y_max,
            line_path,
            area_path,
            labels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        let chart = AreaChart::new(&[], 300.0, 100.0);
        assert!(chart.is_empty());
        assert_eq!(chart.line_path, "");
        assert_eq!(chart.area_path, "");
        assert_eq!(chart.y_max, 10);
    }

    #[test]
    fn test_paths() {
        let points = vec![XpPoint::new("Mon", 0), XpPoint::new("Tue", 20), XpPoint::new("Wed", 10)];
        let chart = AreaChart::new(&points, 200.0, 100.0);
        assert_eq!(chart.y_max, 20);
        assert_eq!(chart.line_path, "M0.0,100.0 L100.0,0.0 L200.0,50.0");
        assert_eq!(
            chart.area_path,
            "M0.0,100.0 L100.0,0.0 L200.0,50.0 L200.0,100.0 L0.0,100.0 Z"
        );
        assert_eq!(chart.labels[1], (100.0, "Tue".to_string()));
    }

    #[test]
    fn test_single_point_is_centered() {
        let chart = AreaChart::new(&[XpPoint::new("Mon", 45)], 100.0, 50.0);
        assert_eq!(chart.y_max, 50);
        assert_eq!(chart.labels[0].0, 50.0);
    }
}

use serde::{Deserialize, Serialize};

/// One bar handed to the chart renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Category label
    pub label: String,
    pub value: f64,
    /// Fill color, hex
    pub color: String,
    /// Rendered with a diagonal stripe pattern instead of a solid fill
    #[serde(default)]
    pub striped: bool,
}

/// Largest bar value, used to scale bar heights. Zero for an empty chart.
pub fn max_value(bars: &[ChartBar]) -> f64 {
    bars.iter().map(|b| b.value).fold(0.0, f64::max)
}

/// Bar height as a percentage of the tallest bar
pub fn height_percent(bar: &ChartBar, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (bar.value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(label: &str, value: f64) -> ChartBar {
        ChartBar {
            label: label.into(),
            value,
            color: "#94a3b8".into(),
            striped: false,
        }
    }

    #[test]
    fn test_heights_relative_to_tallest() {
        let bars = vec![bar("Behance", 30.0), bar("Dribbble", 60.0)];
        let max = max_value(&bars);
        assert_eq!(max, 60.0);
        assert_eq!(height_percent(&bars[0], max), 50.0);
        assert_eq!(height_percent(&bars[1], max), 100.0);
    }

    #[test]
    fn test_empty_chart() {
        assert_eq!(max_value(&[]), 0.0);
        assert_eq!(height_percent(&bar("Other", 10.0), 0.0), 0.0);
    }
}

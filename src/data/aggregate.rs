use std::fmt;

// ---------------------------------------------------------------------------
// Aggregation mode
// ---------------------------------------------------------------------------

/// Scalar reduction applied per X-group in bar mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    Average,
    Median,
    Total,
    Count,
}

impl AggregationMode {
    pub const ALL: [AggregationMode; 4] = [
        AggregationMode::Count,
        AggregationMode::Average,
        AggregationMode::Median,
        AggregationMode::Total,
    ];
}

impl Default for AggregationMode {
    fn default() -> Self {
        AggregationMode::Average
    }
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregationMode::Average => "average",
            AggregationMode::Median => "median",
            AggregationMode::Total => "total",
            AggregationMode::Count => "count",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Aggregator
// ---------------------------------------------------------------------------

/// Reduce a group of numeric values to one scalar.
///
/// Returns `None` for an empty group in every mode; callers render that as a
/// gap, never as zero. The input is not mutated (median sorts a copy).
pub fn aggregate(values: &[f64], mode: AggregationMode) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let result = match mode {
        AggregationMode::Total => values.iter().sum(),
        AggregationMode::Count => values.len() as f64,
        AggregationMode::Average => values.iter().sum::<f64>() / values.len() as f64,
        AggregationMode::Median => {
            let mut sorted = values.to_vec();
            sorted.sort_by(|a, b| a.total_cmp(b));
            let mid = sorted.len() / 2;
            if sorted.len() % 2 != 0 {
                sorted[mid]
            } else {
                (sorted[mid - 1] + sorted[mid]) / 2.0
            }
        }
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_is_none_for_every_mode() {
        for mode in AggregationMode::ALL {
            assert_eq!(aggregate(&[], mode), None, "mode {mode}");
        }
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(aggregate(&[1.0, 2.0, 3.0, 4.0], AggregationMode::Median), Some(2.5));
        assert_eq!(aggregate(&[1.0, 2.0, 3.0], AggregationMode::Median), Some(2.0));
    }

    #[test]
    fn median_sorts_numerically_on_a_copy() {
        let values = vec![10.0, 2.0, 30.0];
        assert_eq!(aggregate(&values, AggregationMode::Median), Some(10.0));
        // Input order untouched.
        assert_eq!(values, vec![10.0, 2.0, 30.0]);
    }

    #[test]
    fn average_total_count() {
        let v = [1.0, 2.0, 3.0];
        assert_eq!(aggregate(&v, AggregationMode::Average), Some(2.0));
        assert_eq!(aggregate(&v, AggregationMode::Total), Some(6.0));
        assert_eq!(aggregate(&v, AggregationMode::Count), Some(3.0));
    }

    #[test]
    fn single_element_group() {
        for mode in AggregationMode::ALL {
            let expected = if mode == AggregationMode::Count { 1.0 } else { 7.5 };
            assert_eq!(aggregate(&[7.5], mode), Some(expected), "mode {mode}");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(AggregationMode::Average.to_string(), "average");
        assert_eq!(AggregationMode::Count.to_string(), "count");
    }
}

use std::fmt;

// ---------------------------------------------------------------------------
// Values – the parsed series
// ---------------------------------------------------------------------------

/// The ordered sequence of numbers read from the input file.
///
/// Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    values: Vec<f64>,
}

impl Values {
    pub fn new(values: Vec<f64>) -> Self {
        Values { values }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Plot points: x is the zero-based index, y the value.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect()
    }

    /// Statistics over the finite values, `None` if there are none.
    pub fn summary(&self) -> Option<Summary> {
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for &v in self.values.iter().filter(|v| v.is_finite()) {
            count += 1;
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }

        if count == 0 {
            return None;
        }
        Some(Summary {
            count,
            min,
            max,
            mean: sum / count as f64,
        })
    }
}

// ---------------------------------------------------------------------------
// Summary – shown in the status bar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of finite values the statistics cover.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {:.4}  max {:.4}  mean {:.4}",
            self.min, self.max, self.mean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_pair_values_with_zero_based_index() {
        let values = Values::new(vec![1.0, 2.0, 3.5]);
        assert_eq!(
            values.points(),
            vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.5]]
        );
    }

    #[test]
    fn empty_series_has_no_points() {
        let values = Values::default();
        assert!(values.is_empty());
        assert_eq!(values.len(), 0);
        assert!(values.points().is_empty());
        assert_eq!(values.summary(), None);
    }

    #[test]
    fn summary_covers_finite_values_only() {
        let values = Values::new(vec![2.0, f64::NAN, -1.0, f64::INFINITY, 5.0]);
        let summary = values.summary().unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min, -1.0);
        assert_eq!(summary.max, 5.0);
        assert_eq!(summary.mean, 2.0);
    }

    #[test]
    fn summary_is_none_without_finite_values() {
        let values = Values::new(vec![f64::NAN, f64::NEG_INFINITY]);
        assert_eq!(values.summary(), None);
        // The points still carry the non-finite values.
        assert_eq!(values.points().len(), 2);
    }

    #[test]
    fn summary_display() {
        let summary = Summary {
            count: 2,
            min: 0.5,
            max: 1.25,
            mean: 0.875,
        };
        assert_eq!(
            summary.to_string(),
            "min 0.5000  max 1.2500  mean 0.8750"
        );
    }
}

//! Arithmetic mean.

use scorekeeper_errors::StatError;
use scorekeeper_score::Score;

use crate::Stat;

/// Running arithmetic mean over float-valued scores.
///
/// The plain `sum / count` is reported whenever the sum stays finite. A
/// second, incrementally updated mean takes over once the sum overflows, so
/// finite inputs always give a finite average.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Average {
    sum: f64,
    mean: f64,
    count: u64,
}

impl Average {
    /// Create an empty average.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scores stepped so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Forget everything stepped so far.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

}

fn float_value(score: &dyn Score) -> Result<f64, StatError> {
    score
        .value()
        .as_f64()
        .filter(|value| value.is_finite())
        .ok_or(StatError::TypeInvalid)
}

impl Stat for Average {
    fn compute(&self, scores: &[Box<dyn Score>]) -> Result<f64, StatError> {
        let mut running = Average::new();
        for score in scores {
            running.step(score.as_ref())?;
        }
        running.report()
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&mut self, score: &dyn Score) -> Result<(), StatError> {
        let value = float_value(score)?;
        self.count = self.count.saturating_add(1);
        let n = self.count as f64;
        self.sum += value;
        // Both quotients are bounded by the largest input seen.
        self.mean += value / n - self.mean / n;
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn report(&self) -> Result<f64, StatError> {
        if self.count == 0 {
            return Err(StatError::NoData);
        }
        let exact = self.sum / self.count as f64;
        if exact.is_finite() {
            Ok(exact)
        } else {
            Ok(self.mean)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeeper_score::Trial;

    fn trials(times: &[f64]) -> Result<Vec<Box<dyn Score>>, Box<dyn std::error::Error>> {
        times
            .iter()
            .map(|t| Ok(Box::new(Trial::new("jump", *t)?) as Box<dyn Score>))
            .collect()
    }

    #[test]
    fn test_compute_ignores_running_state() -> Result<(), Box<dyn std::error::Error>> {
        let mut avg = Average::new();
        avg.step(&Trial::new("jump", 1000.0)?)?;

        assert_eq!(avg.compute(&trials(&[100.0, 200.0])?)?, 150.0);
        assert_eq!(avg.report()?, 1000.0);
        Ok(())
    }

    #[test]
    fn test_overflowing_sum_still_averages() -> Result<(), Box<dyn std::error::Error>> {
        let avg = Average::new().compute(&trials(&[1.7e308, 1.7e308])?)?;
        assert!(avg.is_finite());
        assert!((avg - 1.7e308).abs() <= 1.7e308 * 1e-12);

        let avg = Average::new().compute(&trials(&[f64::MAX, -f64::MAX, f64::MAX])?)?;
        assert!(avg.is_finite());
        assert!(avg > 0.0);
        Ok(())
    }

    #[test]
    fn test_reset() -> Result<(), Box<dyn std::error::Error>> {
        let mut avg = Average::new();
        avg.step(&Trial::new("jump", 5.0)?)?;
        assert_eq!(avg.count(), 1);

        avg.reset();
        assert_eq!(avg.report(), Err(StatError::NoData));
        Ok(())
    }
}

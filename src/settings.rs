use crate::COORDINATE_LIMIT;
use crate::ClusterError;
use crate::Coordinates;
use crate::Degenerate;
use crate::Energy;
use crate::DEFAULT_EPSILON;
use crate::DEFAULT_ITERATIONS;
use crate::DEFAULT_K;

/// Scalar run parameters shared by both engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    k: usize,
    epsilon: Energy,
    iterations: usize,
    policy: Degenerate,
}

impl Settings {
    pub fn new(k: usize, epsilon: Energy, iterations: usize) -> Self {
        Self {
            k,
            epsilon,
            iterations,
            policy: Degenerate::default(),
        }
    }
    pub fn k(self, k: usize) -> Self {
        Self { k, ..self }
    }
    pub fn epsilon(self, epsilon: Energy) -> Self {
        Self { epsilon, ..self }
    }
    pub fn iterations(self, iterations: usize) -> Self {
        Self { iterations, ..self }
    }
    pub fn policy(self, policy: Degenerate) -> Self {
        Self { policy, ..self }
    }

    pub fn clusters(&self) -> usize {
        self.k
    }
    pub fn threshold(&self) -> Energy {
        self.epsilon
    }
    pub fn budget(&self) -> usize {
        self.iterations
    }
    pub fn degenerate(&self) -> Degenerate {
        self.policy
    }

    /// Checks these settings against a dataset before any work is done.
    /// Returns the common dimension of the points.
    pub fn validate<P>(&self, points: &[P]) -> Result<usize, ClusterError>
    where
        P: Coordinates,
    {
        if points.is_empty() {
            return Err(invalid("no points to cluster"));
        }
        if self.k < 1 {
            return Err(invalid("k must be at least 1"));
        }
        if self.k > points.len() {
            return Err(invalid(format!(
                "k = {} exceeds the number of points ({})",
                self.k,
                points.len()
            )));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.) {
            return Err(invalid(format!(
                "epsilon must be positive and finite, got {}",
                self.epsilon
            )));
        }
        if self.iterations < 1 {
            return Err(invalid("iterations must be at least 1"));
        }
        let expected = points[0].dimension();
        if expected == 0 {
            return Err(invalid("points must have at least one coordinate"));
        }
        for (index, point) in points.iter().enumerate() {
            let found = point.dimension();
            if found != expected {
                return Err(ClusterError::DimensionMismatch {
                    index,
                    expected,
                    found,
                });
            }
            if point.coordinates().iter().any(|x| !x.is_finite()) {
                return Err(invalid(format!("point {} has a non-finite coordinate", index)));
            }
            if point.coordinates().iter().any(|x| x.abs() > COORDINATE_LIMIT) {
                return Err(invalid(format!(
                    "point {} has a coordinate beyond ±{:e}",
                    index, COORDINATE_LIMIT
                )));
            }
        }
        Ok(expected)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_K, DEFAULT_EPSILON, DEFAULT_ITERATIONS)
    }
}

fn invalid(message: impl Into<String>) -> ClusterError {
    ClusterError::InvalidParameter(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<[f64; 2]> {
        vec![[0., 0.], [0., 1.], [1., 0.], [1., 1.]]
    }

    #[test]
    fn accepts_valid() {
        assert_eq!(Settings::default().validate(&square()), Ok(2));
        assert_eq!(Settings::default().k(4).validate(&square()), Ok(2));
    }

    #[test]
    fn rejects_k_out_of_range() {
        let err = Settings::default().k(5).validate(&square());
        assert!(matches!(err, Err(ClusterError::InvalidParameter(_))));
        let err = Settings::default().k(0).validate(&square());
        assert!(matches!(err, Err(ClusterError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_bad_scalars() {
        for settings in [
            Settings::default().epsilon(0.),
            Settings::default().epsilon(-1.),
            Settings::default().epsilon(f64::NAN),
            Settings::default().iterations(0),
        ] {
            let err = settings.validate(&square());
            assert!(matches!(err, Err(ClusterError::InvalidParameter(_))), "{:?}", settings);
        }
    }

    #[test]
    fn rejects_empty() {
        let points: Vec<[f64; 2]> = vec![];
        let err = Settings::default().validate(&points);
        assert!(matches!(err, Err(ClusterError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_ragged() {
        let points = vec![vec![0., 0.], vec![1., 1.], vec![2., 2., 2.]];
        assert_eq!(
            Settings::default().validate(&points),
            Err(ClusterError::DimensionMismatch {
                index: 2,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn rejects_non_finite() {
        let points = vec![[0., 0.], [f64::INFINITY, 1.]];
        let err = Settings::default().validate(&points);
        assert!(matches!(err, Err(ClusterError::InvalidParameter(_))));
    }

    #[test]
    fn rejects_overflowing_magnitude() {
        let points = vec![[0., 0.], [1e200, -1e200]];
        let err = Settings::default().validate(&points);
        assert!(matches!(err, Err(ClusterError::InvalidParameter(_))));
        let points = vec![[0., 0.], [COORDINATE_LIMIT, -COORDINATE_LIMIT]];
        assert_eq!(Settings::default().validate(&points), Ok(2));
    }
}

/// Errors that stop a clustering run.
///
/// Reaching the iteration budget is not one of them; see [`crate::Solution::converged`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// A run parameter or input value is out of range.
    InvalidParameter(String),
    /// Point `index` has `found` coordinates where `expected` were required.
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// `cluster` received no points during `iteration` under [`crate::Degenerate::Abort`].
    DegenerateCluster { iteration: usize, cluster: usize },
}

impl std::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(s) => write!(f, "invalid parameter: {}", s),
            Self::DimensionMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch: point {} has {} coordinates, expected {}",
                index, found, expected
            ),
            Self::DegenerateCluster { iteration, cluster } => write!(
                f,
                "degenerate cluster: cluster {} is empty after iteration {}",
                cluster, iteration
            ),
        }
    }
}

impl std::error::Error for ClusterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ClusterError::InvalidParameter("k must be at least 1".into()).to_string(),
            "invalid parameter: k must be at least 1"
        );
        assert_eq!(
            ClusterError::DimensionMismatch {
                index: 3,
                expected: 2,
                found: 4
            }
            .to_string(),
            "dimension mismatch: point 3 has 4 coordinates, expected 2"
        );
    }
}

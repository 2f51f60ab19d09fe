use crate::Coordinate;
use crate::Energy;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Distance between two vectors of the same dimension.
///
/// Implementations must be pure, symmetric, non-negative,
/// and zero exactly when the two vectors are equal.
pub trait Metric {
    fn distance(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy;
}

impl<F> Metric for F
where
    F: Fn(&[Coordinate], &[Coordinate]) -> Energy,
{
    fn distance(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        self(a, b)
    }
}

/// Built-in distance metrics, addressable by their short names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distance {
    /// `sqrt(Σ (a - b)²)`
    #[serde(rename = "eucl")]
    Euclidean,
    /// `Σ |a - b|`
    #[serde(rename = "sad")]
    SumAbsolute,
    /// `Σ (a - b)²`
    #[serde(rename = "ssd")]
    SumSquared,
    /// `max |a - b|`
    Chebyshev,
}

impl Distance {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Euclidean,
            Self::SumAbsolute,
            Self::SumSquared,
            Self::Chebyshev,
        ]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "eucl",
            Self::SumAbsolute => "sad",
            Self::SumSquared => "ssd",
            Self::Chebyshev => "chebyshev",
        }
    }
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean distance",
            Self::SumAbsolute => "sum of absolute difference",
            Self::SumSquared => "sum of squared difference",
            Self::Chebyshev => "chebyshev distance",
        }
    }

    fn euclidean(a: &[Coordinate], b: &[Coordinate]) -> Energy {
        Self::squared(a, b).sqrt()
    }
    fn squared(a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x - y)
            .map(|d| d * d)
            .sum::<Energy>()
    }
    fn absolute(a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .sum::<Energy>()
    }
    fn chebyshev(a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0., Energy::max)
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::Euclidean
    }
}

impl Metric for Distance {
    fn distance(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        debug_assert!(a.len() == b.len(), "dimension mismatch");
        match self {
            Self::Euclidean => Self::euclidean(a, b),
            Self::SumAbsolute => Self::absolute(a, b),
            Self::SumSquared => Self::squared(a, b),
            Self::Chebyshev => Self::chebyshev(a, b),
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Distance {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name() == s.trim().to_lowercase())
            .ok_or_else(|| {
                format!(
                    "unknown distance '{}' (expected one of: {})",
                    s,
                    Self::all()
                        .iter()
                        .map(Self::name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl std::str::FromStr for Distance {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Name-keyed lookup of distance metrics.
///
/// Starts out holding every [`Distance`]; callers can register their own
/// metrics without touching the engines.
pub struct Registry(BTreeMap<String, Box<dyn Metric>>);

impl Registry {
    pub fn get(&self, name: &str) -> Option<&dyn Metric> {
        self.0.get(name).map(|m| m.as_ref())
    }
    /// Registers a metric, returning the one it replaced.
    pub fn register<M>(&mut self, name: &str, metric: M) -> Option<Box<dyn Metric>>
    where
        M: Metric + 'static,
    {
        self.0.insert(name.to_string(), Box::new(metric))
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self(
            Distance::all()
                .iter()
                .map(|d| (d.name().to_string(), Box::new(*d) as Box<dyn Metric>))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [Coordinate; 3] = [1., -2., 3.5];
    const B: [Coordinate; 3] = [-4., 0., 3.];

    #[test]
    fn known_values() {
        assert_eq!(Distance::SumAbsolute.distance(&A, &B), 7.5);
        assert_eq!(Distance::SumSquared.distance(&A, &B), 29.25);
        assert_eq!(Distance::Euclidean.distance(&A, &B), 29.25f64.sqrt());
        assert_eq!(Distance::Chebyshev.distance(&A, &B), 5.);
    }

    #[test]
    fn symmetric() {
        for d in Distance::all() {
            assert_eq!(d.distance(&A, &B), d.distance(&B, &A), "{}", d);
        }
    }

    #[test]
    fn zero_iff_equal() {
        for d in Distance::all() {
            assert_eq!(d.distance(&A, &A), 0., "{}", d);
            assert!(d.distance(&A, &B) > 0., "{}", d);
            assert!(d.distance(&A, &[1., -2., 3.5000001]) > 0., "{}", d);
        }
    }

    #[test]
    fn parse_names() {
        for d in Distance::all() {
            assert_eq!(d.name().parse::<Distance>(), Ok(*d));
        }
        assert_eq!("EUCL".parse::<Distance>(), Ok(Distance::Euclidean));
        assert!("manhattan".parse::<Distance>().is_err());
    }

    #[test]
    fn registry_lookup() {
        let mut registry = Registry::default();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["chebyshev", "eucl", "sad", "ssd"]
        );
        let ssd = registry.get("ssd").expect("built-in");
        assert_eq!(ssd.distance(&A, &B), 29.25);
        assert!(registry.get("cosine").is_none());

        fn discrete(a: &[Coordinate], b: &[Coordinate]) -> Energy {
            if a == b { 0. } else { 1. }
        }
        assert!(registry.register("discrete", discrete).is_none());
        assert!(registry.contains("discrete"));
        assert_eq!(registry.get("discrete").unwrap().distance(&A, &B), 1.);
    }
}

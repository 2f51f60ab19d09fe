use crate::Coordinate;
use crate::Coordinates;
use crate::Distance;
use crate::Probability;
use crate::VARIANCE_UNIT;
use crate::Vector;
use crate::nearest;
use serde::Deserialize;
use serde::Serialize;

/// Normal density `N(x; mu, variance)`.
pub fn normal(x: Coordinate, mu: Coordinate, variance: Coordinate) -> Probability {
    log_normal(x, mu, variance).exp()
}

/// Natural log of [`normal`]; stays finite where the density underflows.
pub fn log_normal(x: Coordinate, mu: Coordinate, variance: Coordinate) -> Probability {
    let z = x - mu;
    -0.5 * ((2. * std::f64::consts::PI * variance).ln() + z * z / variance)
}

/// One weighted Gaussian with diagonal covariance.
///
/// The covariance is stored as its diagonal: `variance[j]` is `Σ[j][j]`.
/// Dimensions are treated as independent, so the density is a product of
/// one-dimensional normals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    mean: Vector,
    variance: Vector,
    weight: Probability,
}

impl Component {
    pub fn new(mean: Vector, variance: Vector, weight: Probability) -> Self {
        debug_assert!(mean.dimension() == variance.dimension());
        Self {
            mean,
            variance,
            weight,
        }
    }
    /// Identity covariance around `mean`.
    pub fn unit(mean: Vector, weight: Probability) -> Self {
        let variance = Vector::filled(mean.dimension(), VARIANCE_UNIT);
        Self::new(mean, variance, weight)
    }
    pub fn mean(&self) -> &Vector {
        &self.mean
    }
    pub fn variance(&self) -> &Vector {
        &self.variance
    }
    pub fn weight(&self) -> Probability {
        self.weight
    }
    pub fn reweight(self, weight: Probability) -> Self {
        Self { weight, ..self }
    }
    /// Full `d × d` covariance matrix, zero off the diagonal.
    pub fn covariance(&self) -> Vec<Vec<Coordinate>> {
        let d = self.variance.dimension();
        (0..d)
            .map(|i| {
                (0..d)
                    .map(|j| if i == j { self.variance[i] } else { 0. })
                    .collect()
            })
            .collect()
    }

    /// `ln(λ) + Σ ln N(x_j; μ_j, Σ_jj)`. Negative infinity when the weight is zero.
    pub fn log_density<X>(&self, x: &X) -> Probability
    where
        X: Coordinates + ?Sized,
    {
        x.coordinates()
            .iter()
            .zip(self.mean.iter())
            .zip(self.variance.iter())
            .map(|((x, mu), var)| log_normal(*x, *mu, *var))
            .fold(self.weight.ln(), |acc, p| acc + p)
    }
    /// `λ · Π N(x_j; μ_j, Σ_jj)`
    pub fn density<X>(&self, x: &X) -> Probability
    where
        X: Coordinates + ?Sized,
    {
        self.log_density(x).exp()
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "λ {:.4}  μ {}  σ² {}",
            self.weight, self.mean, self.variance
        )
    }
}

/// Ordered set of weighted components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mixture(Vec<Component>);

impl Mixture {
    pub fn components(&self) -> &[Component] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn means(&self) -> Vec<Vector> {
        self.0.iter().map(|c| c.mean().clone()).collect()
    }
    pub fn weights(&self) -> Vec<Probability> {
        self.0.iter().map(Component::weight).collect()
    }

    /// Component with the highest weighted density at `x`.
    ///
    /// Strict `>` comparison, so the earliest component wins ties.
    /// If no component has a finite density at `x`, falls back to the
    /// component whose mean is nearest in Euclidean distance.
    pub fn classify<X>(&self, x: &X) -> Option<usize>
    where
        X: Coordinates + ?Sized,
    {
        let mut best = None;
        let mut max = Probability::NEG_INFINITY;
        for (i, component) in self.0.iter().enumerate() {
            let p = component.log_density(x);
            if p > max && p.is_finite() {
                max = p;
                best = Some(i);
            }
        }
        best.or_else(|| nearest(&self.means(), x, &Distance::Euclidean))
    }
}

impl std::ops::Index<usize> for Mixture {
    type Output = Component;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl From<Vec<Component>> for Mixture {
    fn from(components: Vec<Component>) -> Self {
        Self(components)
    }
}

impl std::fmt::Display for Mixture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            writeln!(f, "{:>3}  {}", i, c)?;
        }
        Ok(())
    }
}

use crate::ClusterError;
use crate::Component;
use crate::Coordinates;
use crate::Degenerate;
use crate::Distance;
use crate::Energy;
use crate::Event;
use crate::Logger;
use crate::Metric;
use crate::Mixture;
use crate::Observer;
use crate::Partition;
use crate::Point;
use crate::Probability;
use crate::Settings;
use crate::Solution;
use crate::VARIANCE_FLOOR;
use crate::Vector;
use crate::canonical;
use crate::mean;
use crate::partition;
use crate::sample;
use crate::shifts;
use crate::variance;
use rand::Rng;

/// Classification EM over a diagonal Gaussian mixture.
///
/// The expectation step is a hard assignment: each point goes wholly to
/// the component with the highest weighted density, rather than being
/// split by fractional responsibilities. The maximization step then refits
/// weight, mean, and per-dimension variance from each component's points.
///
/// Convergence is measured as `sqrt(Σ_i ‖μ_i − μ_i'‖²)` across all
/// component means.
pub struct Gaussian<'a, M = ()> {
    points: &'a [Point<M>],
    settings: Settings,
    dimension: usize,
}

impl<'a, M> Gaussian<'a, M>
where
    M: Clone,
{
    pub fn new(points: &'a [Point<M>], settings: Settings) -> Result<Self, ClusterError> {
        let dimension = settings.validate(points)?;
        Ok(Self {
            points,
            settings,
            dimension,
        })
    }

    pub fn points(&self) -> &[Point<M>] {
        self.points
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// `k` sampled means, identity covariance, uniform weights.
    pub fn init<R>(&self, rng: &mut R) -> Mixture
    where
        R: Rng,
    {
        let k = self.settings.clusters();
        sample(self.points, k, rng)
            .into_iter()
            .map(|i| self.points[i].vector().clone())
            .map(|mu| Component::unit(mu, 1. / k as Probability))
            .collect::<Vec<_>>()
            .into()
    }

    /// Hard assignment of every point to its most likely component.
    /// [`Mixture::classify`] only fails on an empty mixture, which `refine` rejects.
    pub fn expect(&self, mixture: &Mixture) -> Vec<usize> {
        self.points
            .iter()
            .map(|p| mixture.classify(p).unwrap_or(0))
            .collect()
    }

    /// Refits every component from the points `labels` gives it.
    /// Empty components are resolved by the configured [`Degenerate`] policy.
    pub fn maximize<O>(
        &self,
        iteration: usize,
        labels: &[usize],
        mixture: &Mixture,
        observer: &mut O,
    ) -> Result<Mixture, ClusterError>
    where
        O: Observer,
    {
        let n = self.points.len() as Probability;
        let mut groups = vec![Vec::new(); mixture.len()];
        self.points
            .iter()
            .zip(labels.iter())
            .for_each(|(p, &j)| groups[j].push(p));
        let mut components = groups
            .iter()
            .map(|group| Self::fit(group, n))
            .collect::<Vec<_>>();
        let mut taken = Vec::new();
        for cluster in 0..components.len() {
            if components[cluster].is_some() {
                continue;
            }
            let policy = self.settings.degenerate();
            observer.observe(&Event::Degenerate {
                iteration,
                cluster,
                policy,
            });
            let component = match policy {
                Degenerate::Retain => mixture[cluster].clone().reweight(0.),
                Degenerate::Reseed => Self::split(&groups, &mut components, &mut taken)
                    .unwrap_or_else(|| mixture[cluster].clone().reweight(0.)),
                Degenerate::Abort => {
                    return Err(ClusterError::DegenerateCluster { iteration, cluster });
                }
            };
            components[cluster] = Some(component);
        }
        Ok(components.into_iter().flatten().collect::<Vec<_>>().into())
    }

    /// Weight, mean, and floored variance of one non-empty group.
    fn fit(group: &[&Point<M>], n: Probability) -> Option<Component> {
        let mu = mean(group)?;
        let var = variance(group)?;
        Some(Component::new(
            mu,
            var.iter().map(|v| v.max(VARIANCE_FLOOR)).collect(),
            group.len() as Probability / n,
        ))
    }

    /// Splits the heaviest fitted component in two.
    ///
    /// The child is centered on the parent's point farthest from the parent
    /// mean, inherits the parent's variance, and takes half its weight.
    /// Points already used as a child mean in this pass are skipped.
    /// Ties go to the earliest component and the canonically first point.
    fn split(
        groups: &[Vec<&Point<M>>],
        components: &mut [Option<Component>],
        taken: &mut Vec<Vector>,
    ) -> Option<Component> {
        let mut donor = None;
        let mut heaviest = Probability::NEG_INFINITY;
        for (j, component) in components.iter().enumerate() {
            if let Some(c) = component {
                if !groups[j].is_empty() && c.weight() > heaviest {
                    heaviest = c.weight();
                    donor = Some(j);
                }
            }
        }
        let donor = donor?;
        let parent = components[donor].clone()?;
        let members = &groups[donor];
        let mut farthest = None;
        let mut max = Energy::NEG_INFINITY;
        for i in canonical(members) {
            let v = members[i].vector();
            let d = Distance::Euclidean.distance(v.coordinates(), parent.mean().coordinates());
            if d > max && !taken.contains(v) {
                max = d;
                farthest = Some(v);
            }
        }
        let mu = farthest?.clone();
        taken.push(mu.clone());
        let weight = parent.weight() / 2.;
        let child = Component::new(mu, parent.variance().clone(), weight);
        components[donor] = Some(parent.reweight(weight));
        Some(child)
    }

    /// One expectation + maximization pass. Returns the labels and the refit mixture.
    pub fn step<O>(
        &self,
        iteration: usize,
        mixture: &Mixture,
        observer: &mut O,
    ) -> Result<(Vec<usize>, Mixture), ClusterError>
    where
        O: Observer,
    {
        let labels = self.expect(mixture);
        let next = self.maximize(iteration, &labels, mixture, observer)?;
        Ok((labels, next))
    }

    /// Runs from a randomly initialized mixture until convergence or budget.
    pub fn cluster<R, O>(
        &self,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Solution<Mixture, M>, ClusterError>
    where
        R: Rng,
        O: Observer,
    {
        let mixture = self.init(rng);
        self.refine(mixture, observer)
    }

    /// Runs from a caller-supplied mixture until convergence or budget.
    ///
    /// A pass that reseeded an empty component never counts as converged,
    /// so a converged mixture is always the one fit from the returned partition.
    pub fn refine<O>(
        &self,
        mixture: Mixture,
        observer: &mut O,
    ) -> Result<Solution<Mixture, M>, ClusterError>
    where
        O: Observer,
    {
        let k = self.settings.clusters();
        if mixture.len() != k {
            return Err(ClusterError::InvalidParameter(format!(
                "expected {} initial components, got {}",
                k,
                mixture.len()
            )));
        }
        if let Some(index) = mixture
            .components()
            .iter()
            .position(|c| c.mean().dimension() != self.dimension)
        {
            return Err(ClusterError::DimensionMismatch {
                index,
                expected: self.dimension,
                found: mixture[index].mean().dimension(),
            });
        }
        observer.observe(&Event::Seeded {
            k,
            n: self.points.len(),
            dimension: self.dimension,
        });
        let mut mixture = mixture;
        let mut labels = Vec::new();
        let mut delta = Energy::INFINITY;
        for iteration in 1..=self.settings.budget() {
            let (assigned, next) = self.step(iteration, &mixture, observer)?;
            let shifts = shifts(&mixture.means(), &next.means());
            delta = shifts.iter().map(|s| s * s).sum::<Energy>().sqrt();
            observer.observe(&Event::Step {
                iteration,
                shifts,
                delta,
            });
            let reseeded = self.settings.degenerate() == Degenerate::Reseed
                && (0..k).any(|j| !assigned.contains(&j));
            labels = assigned;
            mixture = next;
            if delta < self.settings.threshold() && !reseeded {
                observer.observe(&Event::Converged {
                    iterations: iteration,
                    delta,
                });
                return Ok(self.solution(mixture, labels, iteration, true));
            }
        }
        let iterations = self.settings.budget();
        observer.observe(&Event::Exhausted { iterations, delta });
        Ok(self.solution(mixture, labels, iterations, false))
    }

    fn solution(
        &self,
        mixture: Mixture,
        labels: Vec<usize>,
        iterations: usize,
        converged: bool,
    ) -> Solution<Mixture, M> {
        Solution {
            clusters: partition(self.points, &labels, mixture.len()),
            params: mixture,
            labels,
            iterations,
            converged,
        }
    }
}

/// Classification EM with system randomness, progress logged through the `log` facade.
pub fn em_gaussian<M>(
    points: &[Point<M>],
    k: usize,
    epsilon: Energy,
    max_iterations: usize,
) -> Result<(Mixture, Partition<M>), ClusterError>
where
    M: Clone,
{
    Gaussian::new(points, Settings::new(k, epsilon, max_iterations))?
        .cluster(&mut rand::rng(), &mut Logger("em"))
        .map(Solution::into_parts)
}

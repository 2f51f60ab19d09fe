use crate::ClusterError;
use crate::Coordinates;
use crate::Degenerate;
use crate::Distance;
use crate::Energy;
use crate::Event;
use crate::Logger;
use crate::Metric;
use crate::Observer;
use crate::Partition;
use crate::Point;
use crate::Settings;
use crate::Solution;
use crate::Vector;
use crate::mean;
use crate::nearest;
use crate::partition;
use crate::pick;
use crate::sample;
use rand::Rng;

/// Lloyd's k-means over a borrowed dataset.
///
/// Each iteration assigns every point to its nearest center under the
/// configured [`Metric`], then moves each center to the mean of its points.
/// Stops once no center moves `epsilon` or more (always measured in
/// Euclidean distance), or when the iteration budget runs out.
///
/// ```
/// use kluster::*;
/// use rand::SeedableRng;
/// let points = vec![[0., 0.], [0., 1.], [9., 9.], [9., 10.]]
///     .into_iter()
///     .map(Point::from)
///     .collect::<Vec<_>>();
/// let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0);
/// let solution = KMeans::new(&points, Settings::default().k(2))
///     .unwrap()
///     .cluster(rng, &mut ())
///     .unwrap();
/// assert_eq!(solution.sizes(), vec![2, 2]);
/// ```
pub struct KMeans<'a, M = ()> {
    points: &'a [Point<M>],
    settings: Settings,
    metric: &'a dyn Metric,
    dimension: usize,
}

impl<'a, M> KMeans<'a, M>
where
    M: Clone,
{
    /// Validates `settings` against `points`. Uses Euclidean distance
    /// for assignment until [`KMeans::metric`] says otherwise.
    pub fn new(points: &'a [Point<M>], settings: Settings) -> Result<Self, ClusterError> {
        let dimension = settings.validate(points)?;
        Ok(Self {
            points,
            settings,
            metric: &Distance::Euclidean,
            dimension,
        })
    }

    /// Replaces the assignment metric.
    pub fn metric(self, metric: &'a dyn Metric) -> Self {
        Self { metric, ..self }
    }

    pub fn points(&self) -> &[Point<M>] {
        self.points
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Samples `k` distinct input points as starting centers.
    pub fn init<R>(&self, rng: &mut R) -> Vec<Vector>
    where
        R: Rng,
    {
        sample(self.points, self.settings.clusters(), rng)
            .into_iter()
            .map(|i| self.points[i].vector().clone())
            .collect()
    }

    /// Nearest center index for every point, in input order.
    ///
    /// A point no center is at a finite distance from goes to cluster 0.
    /// Validated coordinates keep the built-in metrics finite, so only a
    /// custom metric can hit that case.
    pub fn assign(&self, centers: &[Vector]) -> Vec<usize> {
        self.points
            .iter()
            .map(|p| nearest(centers, p, self.metric).unwrap_or(0))
            .collect()
    }

    /// Mean of each cluster under `labels`. Empty clusters are
    /// resolved by the configured [`Degenerate`] policy.
    pub fn update<R, O>(
        &self,
        iteration: usize,
        labels: &[usize],
        centers: &[Vector],
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Vec<Vector>, ClusterError>
    where
        R: Rng,
        O: Observer,
    {
        let mut groups = vec![Vec::new(); centers.len()];
        self.points
            .iter()
            .zip(labels.iter())
            .for_each(|(p, &j)| groups[j].push(p));
        groups
            .iter()
            .enumerate()
            .map(|(cluster, group)| match mean(group) {
                Some(center) => Ok(center),
                None => {
                    let policy = self.settings.degenerate();
                    observer.observe(&Event::Degenerate {
                        iteration,
                        cluster,
                        policy,
                    });
                    match policy {
                        Degenerate::Retain => Ok(centers[cluster].clone()),
                        Degenerate::Reseed => {
                            Ok(self.points[pick(self.points, rng)].vector().clone())
                        }
                        Degenerate::Abort => {
                            Err(ClusterError::DegenerateCluster { iteration, cluster })
                        }
                    }
                }
            })
            .collect()
    }

    /// One assignment + update pass. Returns the labels and the new centers.
    pub fn step<R, O>(
        &self,
        iteration: usize,
        centers: &[Vector],
        rng: &mut R,
        observer: &mut O,
    ) -> Result<(Vec<usize>, Vec<Vector>), ClusterError>
    where
        R: Rng,
        O: Observer,
    {
        let labels = self.assign(centers);
        let next = self.update(iteration, &labels, centers, rng, observer)?;
        Ok((labels, next))
    }

    /// Runs from randomly sampled centers until convergence or budget.
    pub fn cluster<R, O>(
        &self,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Solution<Vec<Vector>, M>, ClusterError>
    where
        R: Rng,
        O: Observer,
    {
        let centers = self.init(rng);
        self.refine(centers, rng, observer)
    }

    /// Runs from caller-supplied centers until convergence or budget.
    pub fn refine<R, O>(
        &self,
        centers: Vec<Vector>,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Solution<Vec<Vector>, M>, ClusterError>
    where
        R: Rng,
        O: Observer,
    {
        let k = self.settings.clusters();
        if centers.len() != k {
            return Err(ClusterError::InvalidParameter(format!(
                "expected {} initial centers, got {}",
                k,
                centers.len()
            )));
        }
        if let Some(index) = centers.iter().position(|c| c.dimension() != self.dimension) {
            return Err(ClusterError::DimensionMismatch {
                index,
                expected: self.dimension,
                found: centers[index].dimension(),
            });
        }
        observer.observe(&Event::Seeded {
            k,
            n: self.points.len(),
            dimension: self.dimension,
        });
        let mut centers = centers;
        let mut labels = Vec::new();
        let mut delta = Energy::INFINITY;
        for iteration in 1..=self.settings.budget() {
            let (assigned, next) = self.step(iteration, &centers, rng, observer)?;
            let shifts = shifts(&centers, &next);
            delta = shifts.iter().copied().fold(0., Energy::max);
            observer.observe(&Event::Step {
                iteration,
                shifts,
                delta,
            });
            let reseeded = self.reseeded(&assigned);
            labels = assigned;
            centers = next;
            if delta < self.settings.threshold() && !reseeded {
                observer.observe(&Event::Converged {
                    iterations: iteration,
                    delta,
                });
                return Ok(self.solution(centers, labels, iteration, true));
            }
        }
        let iterations = self.settings.budget();
        observer.observe(&Event::Exhausted { iterations, delta });
        Ok(self.solution(centers, labels, iterations, false))
    }

    /// Whether `labels` left a cluster empty that the policy reseeds.
    /// Such a pass never counts as converged.
    fn reseeded(&self, labels: &[usize]) -> bool {
        self.settings.degenerate() == Degenerate::Reseed
            && (0..self.settings.clusters()).any(|j| !labels.contains(&j))
    }

    /// Root-mean-square distance from each point to its assigned center.
    pub fn rms(&self, centers: &[Vector], labels: &[usize]) -> Energy {
        let total = self
            .points
            .iter()
            .zip(labels.iter())
            .map(|(p, &j)| self.metric.distance(p.coordinates(), centers[j].coordinates()))
            .map(|d| d * d)
            .sum::<Energy>();
        (total / self.points.len() as Energy).sqrt()
    }

    fn solution(
        &self,
        centers: Vec<Vector>,
        labels: Vec<usize>,
        iterations: usize,
        converged: bool,
    ) -> Solution<Vec<Vector>, M> {
        Solution {
            clusters: partition(self.points, &labels, centers.len()),
            params: centers,
            labels,
            iterations,
            converged,
        }
    }
}

/// Euclidean movement of each center, matched by index.
pub fn shifts(old: &[Vector], new: &[Vector]) -> Vec<Energy> {
    old.iter()
        .zip(new.iter())
        .map(|(a, b)| Distance::Euclidean.distance(a.coordinates(), b.coordinates()))
        .collect()
}

/// KMeans with system randomness, progress logged through the `log` facade.
pub fn kmeans<M>(
    points: &[Point<M>],
    k: usize,
    epsilon: Energy,
    max_iterations: usize,
    metric: &dyn Metric,
) -> Result<(Vec<Vector>, Partition<M>), ClusterError>
where
    M: Clone,
{
    KMeans::new(points, Settings::new(k, epsilon, max_iterations))?
        .metric(metric)
        .cluster(&mut rand::rng(), &mut Logger("kmeans"))
        .map(Solution::into_parts)
}

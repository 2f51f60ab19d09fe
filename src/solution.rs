use crate::Point;

/// `k` ordered groups of points; each group keeps input order.
pub type Partition<M> = Vec<Vec<Point<M>>>;

/// What an engine hands back: fitted parameters and the partition they produced.
#[derive(Debug, Clone)]
pub struct Solution<T, M = ()> {
    /// Centers for KMeans, the [`crate::Mixture`] for EM.
    pub params: T,
    /// The last computed partition, metadata intact.
    pub clusters: Partition<M>,
    /// Cluster index of each input point, in input order.
    pub labels: Vec<usize>,
    /// Number of assignment + update passes executed.
    pub iterations: usize,
    /// False when the iteration budget ran out before epsilon was met.
    pub converged: bool,
}

impl<T, M> Solution<T, M> {
    pub fn k(&self) -> usize {
        self.clusters.len()
    }
    /// Number of points in each cluster.
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }
    pub fn into_parts(self) -> (T, Partition<M>) {
        (self.params, self.clusters)
    }
}

/// Groups cloned points by label, preserving input order within each group.
pub(crate) fn partition<M>(points: &[Point<M>], labels: &[usize], k: usize) -> Partition<M>
where
    M: Clone,
{
    let mut clusters = vec![Vec::new(); k];
    points
        .iter()
        .zip(labels.iter())
        .for_each(|(p, &j)| clusters[j].push(p.clone()));
    clusters
}

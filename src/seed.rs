use crate::Coordinates;
use rand::Rng;

/// Indices of `points` sorted lexicographically by coordinates.
///
/// Stable, so coincident points keep their input order.
pub fn canonical<P>(points: &[P]) -> Vec<usize>
where
    P: Coordinates,
{
    let mut order = (0..points.len()).collect::<Vec<_>>();
    order.sort_by(|&i, &j| {
        let a = points[i].coordinates();
        let b = points[j].coordinates();
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x.total_cmp(y))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    });
    order
}

/// Draws `k` distinct indices uniformly at random.
///
/// Sampling runs over the canonical ordering rather than input order,
/// so a permuted dataset yields the same chosen coordinates under the same seed.
/// Callers guarantee `k <= points.len()`.
pub fn sample<P, R>(points: &[P], k: usize, rng: &mut R) -> Vec<usize>
where
    P: Coordinates,
    R: Rng + ?Sized,
{
    let order = canonical(points);
    rand::seq::index::sample(rng, points.len(), k)
        .into_iter()
        .map(|i| order[i])
        .collect()
}

/// A single uniformly random index, for reseeding an empty cluster.
///
/// Drawn over the canonical ordering, like [`sample`].
/// Callers guarantee `points` is not empty.
pub fn pick<P, R>(points: &[P], rng: &mut R) -> usize
where
    P: Coordinates,
    R: Rng,
{
    canonical(points)[rng.random_range(0..points.len())]
}

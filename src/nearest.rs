use crate::Coordinates;
use crate::Energy;
use crate::Metric;

/// Index and distance of the candidate closest to `query`.
///
/// Linear scan with a strict `<` comparison, so the earliest of several
/// equally-near candidates wins. `None` if there are no candidates
/// or no distance is below infinity.
pub fn neighbor<C, Q, M>(candidates: &[C], query: &Q, metric: &M) -> Option<(usize, Energy)>
where
    C: Coordinates,
    Q: Coordinates + ?Sized,
    M: Metric + ?Sized,
{
    let mut best = None;
    let mut min = Energy::INFINITY;
    for (i, candidate) in candidates.iter().enumerate() {
        let d = metric.distance(candidate.coordinates(), query.coordinates());
        if d < min {
            min = d;
            best = Some((i, d));
        }
    }
    best
}

/// Index of the candidate closest to `query`. See [`neighbor`].
pub fn nearest<C, Q, M>(candidates: &[C], query: &Q, metric: &M) -> Option<usize>
where
    C: Coordinates,
    Q: Coordinates + ?Sized,
    M: Metric + ?Sized,
{
    neighbor(candidates, query, metric).map(|(i, _)| i)
}

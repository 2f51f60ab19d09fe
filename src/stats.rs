use crate::Coordinate;
use crate::Coordinates;
use crate::Energy;
use crate::Metric;
use crate::Vector;

/// Coordinate-wise arithmetic mean. `None` for an empty collection.
pub fn mean<P>(points: &[P]) -> Option<Vector>
where
    P: Coordinates,
{
    let d = points.first()?.dimension();
    let n = points.len() as Coordinate;
    let sums = points.iter().fold(vec![0.; d], |mut sums, p| {
        sums.iter_mut()
            .zip(p.coordinates())
            .for_each(|(s, x)| *s += x);
        sums
    });
    Some(sums.into_iter().map(|s| s / n).collect())
}

/// Coordinate-wise population variance (divides by `n`). `None` for an empty collection.
pub fn variance<P>(points: &[P]) -> Option<Vector>
where
    P: Coordinates,
{
    let ref mu = mean(points)?;
    let n = points.len() as Coordinate;
    let sums = points.iter().fold(vec![0.; mu.dimension()], |mut sums, p| {
        sums.iter_mut()
            .zip(p.coordinates().iter().zip(mu.iter()))
            .for_each(|(s, (x, m))| *s += (x - m) * (x - m));
        sums
    });
    Some(sums.into_iter().map(|s| s / n).collect())
}

/// Coordinate-wise population standard deviation. `None` for an empty collection.
pub fn std<P>(points: &[P]) -> Option<Vector>
where
    P: Coordinates,
{
    variance(points).map(|v| v.iter().map(|x| x.sqrt()).collect())
}

/// Pairs up coordinates of `a` and `b` and maps each pair through `f`.
pub fn combine<A, B, F>(a: &A, b: &B, f: F) -> Vector
where
    A: Coordinates + ?Sized,
    B: Coordinates + ?Sized,
    F: Fn(Coordinate, Coordinate) -> Coordinate,
{
    debug_assert!(a.dimension() == b.dimension(), "dimension mismatch");
    a.coordinates()
        .iter()
        .zip(b.coordinates())
        .map(|(x, y)| f(*x, *y))
        .collect()
}

/// Shifts every vector so the collection has zero mean.
pub fn normalize<P>(points: &[P]) -> Vec<Vector>
where
    P: Coordinates,
{
    match mean(points) {
        None => Vec::new(),
        Some(ref mu) => points
            .iter()
            .map(|p| combine(p, mu, |x, m| x - m))
            .collect(),
    }
}

/// Indices of the two points furthest apart under `metric`.
///
/// `None` when there are fewer than two points or every pair coincides.
/// Earlier pairs win ties.
pub fn farthest<P, M>(points: &[P], metric: &M) -> Option<(usize, usize)>
where
    P: Coordinates,
    M: Metric + ?Sized,
{
    let mut best = None;
    let mut max = 0 as Energy;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = metric.distance(points[i].coordinates(), points[j].coordinates());
            if d > max {
                max = d;
                best = Some((i, j));
            }
        }
    }
    best
}

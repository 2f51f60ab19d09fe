use super::table::Row;
use crate::Point;
use crate::Vector;
use rand::Rng;

/// Overlapping 2-D boxes, as `(x offset, x width, y offset, y width)`.
static BOXES: [(f64, f64, f64, f64); 5] = [
    (0., 5., 0., 5.),
    (15., 5., 10., 5.),
    (2., 6., 10., 6.),
    (2., 16., 2., 16.),
    (2., 16., 2., 16.),
];
/// Points drawn per box.
const ROUNDS: usize = 80;

/// Random points scattered over [`BOXES`], interleaved box by box.
pub fn demo<R>(rng: &mut R) -> Vec<Point<Row>>
where
    R: Rng,
{
    (0..ROUNDS)
        .flat_map(|_| BOXES.iter())
        .map(|&(x0, w, y0, h)| {
            Vector::from([
                x0 + rng.random::<f64>() * w,
                y0 + rng.random::<f64>() * h,
            ])
        })
        .map(|v| {
            let row = v.iter().map(|x| x.to_string()).collect::<Row>();
            Point::new(v, row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn demo_is_bounded() {
        let points = demo(&mut SmallRng::seed_from_u64(1));
        assert_eq!(points.len(), ROUNDS * BOXES.len());
        assert!(points.iter().all(|p| (0. ..20.).contains(&p.vector()[0])));
        assert!(points.iter().all(|p| (0. ..18.).contains(&p.vector()[1])));
    }
}

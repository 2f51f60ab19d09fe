//! Shared fixtures for engine tests.
use crate::Coordinate;
use crate::Point;
use crate::Vector;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

/// `n` points scattered uniformly within `±spread` of each center, blob by blob.
/// Metadata is the running index, so `id / n` recovers the blob.
pub fn blobs(centers: &[[Coordinate; 2]], n: usize, spread: Coordinate, seed: u64) -> Vec<Point<usize>> {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    centers
        .iter()
        .flat_map(|c| std::iter::repeat(c).take(n))
        .map(|c| {
            c.iter()
                .map(|x| x + rng.random_range(-spread..=spread))
                .collect::<Vector>()
        })
        .enumerate()
        .map(|(id, v)| Point::new(v, id))
        .collect()
}

pub fn shuffle<T>(items: &mut [T], seed: u64) {
    items.shuffle(&mut SmallRng::seed_from_u64(seed));
}

/// Clusters as a set of sorted id lists, ignoring cluster order.
pub fn groups(clusters: &[Vec<Point<usize>>]) -> BTreeSet<Vec<usize>> {
    clusters
        .iter()
        .map(|c| {
            let mut ids = c.iter().map(|p| *p.meta()).collect::<Vec<_>>();
            ids.sort();
            ids
        })
        .collect()
}

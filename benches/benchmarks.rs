criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_distance_euclidean,
        computing_distance_chebyshev,
        computing_mean_and_std,
        searching_nearest_center,
        clustering_kmeans,
        clustering_gaussian_em,
}

use kluster::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const N: usize = 2048;
const D: usize = 8;
const K: usize = 16;

fn points() -> Vec<Point> {
    let ref mut rng = SmallRng::seed_from_u64(0);
    (0..N)
        .map(|_| (0..D).map(|_| rng.random::<f64>()).collect::<Vector>())
        .map(Point::from)
        .collect()
}

fn computing_distance_euclidean(c: &mut criterion::Criterion) {
    let points = points();
    c.bench_function("compute Euclidean distance (8-dimensional)", |b| {
        b.iter(|| Distance::Euclidean.distance(points[0].coordinates(), points[1].coordinates()))
    });
}

fn computing_distance_chebyshev(c: &mut criterion::Criterion) {
    let points = points();
    c.bench_function("compute Chebyshev distance (8-dimensional)", |b| {
        b.iter(|| Distance::Chebyshev.distance(points[0].coordinates(), points[1].coordinates()))
    });
}

fn computing_mean_and_std(c: &mut criterion::Criterion) {
    let points = points();
    c.bench_function("compute mean and std of 2048 points", |b| {
        b.iter(|| (mean(&points), std(&points)))
    });
}

fn searching_nearest_center(c: &mut criterion::Criterion) {
    let points = points();
    let centers = points[..K].iter().map(|p| p.vector().clone()).collect::<Vec<_>>();
    c.bench_function("search nearest of 16 centers", |b| {
        b.iter(|| nearest(&centers, &points[N - 1], &Distance::Euclidean))
    });
}

fn clustering_kmeans(c: &mut criterion::Criterion) {
    let points = points();
    let settings = Settings::default().k(K).iterations(16);
    c.bench_function("cluster 2048 points with KMeans (16 iterations)", |b| {
        b.iter(|| {
            KMeans::new(&points, settings)
                .expect("valid settings")
                .cluster(&mut SmallRng::seed_from_u64(1), &mut ())
        })
    });
}

fn clustering_gaussian_em(c: &mut criterion::Criterion) {
    let points = points();
    let settings = Settings::default().k(K).iterations(16);
    c.bench_function("cluster 2048 points with Gaussian EM (16 iterations)", |b| {
        b.iter(|| {
            Gaussian::new(&points, settings)
                .expect("valid settings")
                .cluster(&mut SmallRng::seed_from_u64(1), &mut ())
        })
    });
}

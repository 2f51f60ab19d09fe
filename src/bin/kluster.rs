//! Cluster CSV rows (or random demo points) with KMeans or Gaussian EM.
//!
//! kluster -i data.csv -c 0,1 -k 3 --kmeans -d sad --print
//! kluster --em -k 4 --seed 7 --json

fn main() -> anyhow::Result<()> {
    kluster::cli::run()
}

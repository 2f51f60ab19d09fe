//! Command-line front end: argument parsing, CSV in and out, console report.
pub mod args;
pub mod demo;
pub mod table;

pub use args::Args;

use crate::Gaussian;
use crate::KMeans;
use crate::Logger;
use crate::Mixture;
use crate::Point;
use crate::Registry;
use crate::Settings;
use crate::Solution;
use crate::Vector;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;
use table::Row;

/// Initialize terminal logging. INFO by default, DEBUG when `verbose`.
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Parse arguments, cluster, report.
pub fn run() -> Result<()> {
    let args = Args::parse();
    log(args.verbose);
    let ref mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let points = match args.input {
        Some(ref path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            table::read(std::io::BufReader::new(file), args.columns.as_deref())
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            log::info!("no input file, clustering random demo points");
            demo::demo(rng)
        }
    };
    log::info!("loaded {} points", points.len());
    let settings = Settings::new(args.k, args.epsilon, args.iterations).policy(args.policy);
    let report = if args.kmeans {
        let registry = Registry::default();
        let metric = registry.get(&args.distance).with_context(|| {
            format!(
                "unknown distance '{}' (expected one of: {})",
                args.distance,
                registry.names().collect::<Vec<_>>().join(", ")
            )
        })?;
        let solution = KMeans::new(&points, settings)?
            .metric(metric)
            .cluster(rng, &mut Logger("kmeans"))?;
        Report::from(&solution).emit(&args, &points, &solution)?
    } else {
        let solution = Gaussian::new(&points, settings)?.cluster(rng, &mut Logger("em"))?;
        Report::from(&solution).emit(&args, &points, &solution)?
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

/// Serializable summary of a finished run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Params {
    Centers(Vec<Vector>),
    Mixture(Mixture),
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub converged: bool,
    pub iterations: usize,
    pub sizes: Vec<usize>,
    pub params: Params,
}

impl From<&Solution<Vec<Vector>, Row>> for Report {
    fn from(solution: &Solution<Vec<Vector>, Row>) -> Self {
        Self {
            converged: solution.converged,
            iterations: solution.iterations,
            sizes: solution.sizes(),
            params: Params::Centers(solution.params.clone()),
        }
    }
}

impl From<&Solution<Mixture, Row>> for Report {
    fn from(solution: &Solution<Mixture, Row>) -> Self {
        Self {
            converged: solution.converged,
            iterations: solution.iterations,
            sizes: solution.sizes(),
            params: Params::Mixture(solution.params.clone()),
        }
    }
}

impl Report {
    /// Logs the outcome, prints clusters if asked, writes the output CSV if asked.
    fn emit<T>(self, args: &Args, points: &[Point<Row>], solution: &Solution<T, Row>) -> Result<Self> {
        log::info!(
            "{} after {} iterations, cluster sizes {:?}",
            if self.converged { "converged" } else { "stopped" },
            self.iterations,
            self.sizes
        );
        match self.params {
            Params::Centers(ref centers) => centers
                .iter()
                .enumerate()
                .for_each(|(j, c)| log::info!("{:>3}  center {}", j, c)),
            Params::Mixture(ref mixture) => mixture
                .components()
                .iter()
                .enumerate()
                .for_each(|(j, c)| log::info!("{:>3}  {}", j, c)),
        }
        if args.print {
            for (j, cluster) in solution.clusters.iter().enumerate() {
                println!("cluster {} ({} points)", j, cluster.len());
                for point in cluster {
                    println!("  {}", point.meta().join(","));
                }
            }
        }
        if let Some(ref path) = args.output {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            table::write(std::io::BufWriter::new(file), points, &solution.labels)?;
            log::info!("wrote {}", path.display());
        }
        Ok(self)
    }
}

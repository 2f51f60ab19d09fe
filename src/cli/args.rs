use crate::DEFAULT_EPSILON;
use crate::DEFAULT_ITERATIONS;
use crate::DEFAULT_K;
use crate::Degenerate;
use crate::Distance;
use crate::Energy;
use clap::ArgGroup;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kluster",
    version,
    about = "Cluster CSV rows with KMeans or Gaussian mixture EM",
    long_about = None
)]
#[command(group(ArgGroup::new("algorithm").required(true).args(["kmeans", "em"])))]
pub struct Args {
    /// Input CSV file, plain comma-separated without quoted fields.
    /// Without one, random demo points are clustered.
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Output CSV file: every input row followed by its cluster index.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// CSV columns to use as coordinates (example: 0,1,2).
    #[arg(short = 'c', long, value_name = "LIST", value_delimiter = ',')]
    pub columns: Option<Vec<usize>>,
    /// Number of clusters.
    #[arg(short = 'k', long = "clusters", value_name = "NUMBER", default_value_t = DEFAULT_K)]
    pub k: usize,
    /// Convergence threshold on center movement.
    #[arg(short = 'e', long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: Energy,
    /// Iteration budget.
    #[arg(short = 't', long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,
    /// Distance function for KMeans assignment (eucl, sad, ssd, chebyshev).
    #[arg(
        short = 'd',
        long,
        value_name = "TYPE",
        default_value = "eucl",
        long_help = distances(),
        conflicts_with = "em"
    )]
    pub distance: String,
    /// Use the KMeans algorithm.
    #[arg(long)]
    pub kmeans: bool,
    /// Use the Gaussian mixture Expectation-Maximization algorithm.
    #[arg(long)]
    pub em: bool,
    /// What to do with a cluster that ends up empty (retain, reseed, abort).
    #[arg(long, value_name = "POLICY", default_value = "retain")]
    pub policy: Degenerate,
    /// Seed for the random initialization.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print every cluster and its points to the console.
    #[arg(long)]
    pub print: bool,
    /// Print a JSON summary of the fitted parameters.
    #[arg(long)]
    pub json: bool,
    /// Log every iteration.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Long help for `-d`: one line per built-in distance.
fn distances() -> String {
    Distance::all()
        .iter()
        .map(|d| format!("  {:<10} {}", d.name(), d.describe()))
        .fold(
            String::from("Distance function for KMeans assignment. Not used with --em."),
            |help, line| help + "\n" + &line,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "kluster", "-i", "data.csv", "-c", "0,2", "-k", "3", "-d", "sad", "--kmeans", "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(args.columns, Some(vec![0, 2]));
        assert_eq!(args.k, 3);
        assert_eq!(args.distance, "sad");
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.policy, Degenerate::Retain);
        assert!(args.kmeans && !args.em);
    }

    #[test]
    fn requires_one_algorithm() {
        assert!(Args::try_parse_from(["kluster"]).is_err());
        assert!(Args::try_parse_from(["kluster", "--kmeans", "--em"]).is_err());
        assert!(Args::try_parse_from(["kluster", "--em"]).is_ok());
    }

    #[test]
    fn parses_policy() {
        let args = Args::try_parse_from(["kluster", "--em", "--policy", "abort"]).unwrap();
        assert_eq!(args.policy, Degenerate::Abort);
        assert!(Args::try_parse_from(["kluster", "--em", "--policy", "ignore"]).is_err());
    }

    #[test]
    fn distance_only_with_kmeans() {
        assert!(Args::try_parse_from(["kluster", "--em", "-d", "sad"]).is_err());
        assert!(Args::try_parse_from(["kluster", "--kmeans", "-d", "sad"]).is_ok());
    }

    #[test]
    fn help_lists_distances() {
        let help = Args::command().render_long_help().to_string();
        for distance in Distance::all() {
            assert!(help.contains(distance.describe()), "{}", distance);
        }
    }
}

/// What to do when a cluster or mixture component ends an
/// assignment step with no points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Degenerate {
    /// Keep the previous center (or component) unchanged.
    #[default]
    Retain,
    /// KMeans: replace it with a uniformly random input point.
    /// EM: split the heaviest component in two.
    Reseed,
    /// Fail the run with [`crate::ClusterError::DegenerateCluster`].
    Abort,
}

impl Degenerate {
    pub const fn all() -> &'static [Self] {
        &[Self::Retain, Self::Reseed, Self::Abort]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Retain => "retain",
            Self::Reseed => "reseed",
            Self::Abort => "abort",
        }
    }
}

impl std::fmt::Display for Degenerate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Degenerate {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown degenerate-cluster policy '{}'", s))
    }
}

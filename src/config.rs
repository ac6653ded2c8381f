use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    MisplacedTiles,
    Manhattan,
}

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Manhattan
    }
}

impl Display for Heuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Heuristic::MisplacedTiles => write!(f, "misplaced-tiles"),
            Heuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl Display for UnknownHeuristic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown heuristic: {}", self.0)
    }
}

impl Error for UnknownHeuristic {}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "misplaced-tiles" | "misplaced" => Ok(Heuristic::MisplacedTiles),
            "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a route query should be presented to whoever asked for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// One of the endpoints has not been chosen yet
    Unselected,
    /// Both endpoints chosen, but there is nothing to draw
    NoPath,
    /// A path with at least one hop
    Found,
}

impl RouteStatus {
    /// Classifies the result of a query. A single-node path counts as no
    /// path, since there is no hop to display.
    pub fn classify<N>(start: Option<&N>, end: Option<&N>, path: &[N]) -> Self {
        match (start, end) {
            (Some(_), Some(_)) if path.len() > 1 => RouteStatus::Found,
            (Some(_), Some(_)) => RouteStatus::NoPath,
            _ => RouteStatus::Unselected,
        }
    }

    /// Text shown next to the map
    pub fn message(&self) -> &'static str {
        match self {
            RouteStatus::Unselected => "Select start and end places",
            RouteStatus::NoPath => "No path found",
            RouteStatus::Found => "Shortest path",
        }
    }

    /// Message for a classified path; found routes list their stops
    pub fn describe<N: fmt::Display>(&self, path: &[N]) -> String {
        match self {
            RouteStatus::Found => {
                let stops: Vec<String> = path.iter().map(|node| node.to_string()).collect();
                format!("{}: {}", self.message(), stops.join(" → "))
            }
            _ => self.message().to_string(),
        }
    }
}

impl fmt::Display for RouteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

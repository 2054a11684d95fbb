pub mod batch;
pub mod dijkstra;
pub mod status;
pub mod traits;

pub use batch::{find_all_pairs, RouteTable};
pub use status::RouteStatus;
pub use traits::{path_weight, Route, ShortestPathAlgorithm, ShortestPathResult};

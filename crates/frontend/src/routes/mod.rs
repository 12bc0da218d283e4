pub mod routes;

pub use routes::{parse_route, Navigator, Route};

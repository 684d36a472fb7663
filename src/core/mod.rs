//! Data pipeline: load → filter → statistics.

pub mod filter;
pub mod loader;
pub mod stats;

pub use filter::{FilterEngine, filter};
pub use loader::{Loader, parse_timestamp, read_trips};

mod eta;
mod registry;
mod snapshot;

pub use eta::*;
pub use registry::*;
pub use snapshot::*;

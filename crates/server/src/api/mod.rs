mod eta;
mod fleet;
mod registry;

pub use eta::*;
pub use fleet::*;
pub use registry::*;

pub mod agent;
pub mod ball;
pub mod field;
pub mod snapshot;
pub mod target;

pub use agent::*;
pub use ball::*;
pub use field::*;
pub use snapshot::*;
pub use target::*;

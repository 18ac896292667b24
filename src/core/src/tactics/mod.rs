pub mod context;
pub mod engine;
pub mod ops;
pub mod playstyle;

pub use context::*;
pub use engine::*;
pub use ops::*;
pub use playstyle::*;

pub mod time;
pub mod vector;

pub use time::*;
pub use vector::*;

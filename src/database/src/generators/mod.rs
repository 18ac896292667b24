mod world;

pub use world::*;

pub mod positioning;
pub mod possession;
pub mod roles;
pub mod rotation;
pub mod shooting;
pub mod threat;

pub use positioning::*;
pub use possession::*;
pub use roles::*;
pub use rotation::*;
pub use shooting::*;
pub use threat::*;

pub mod convert;
pub mod frame;
pub mod spaces;
pub mod stack;
pub mod vec3;

pub use convert::KernelPlane;
pub use frame::{Frame, FrameError};
pub use spaces::*;
pub use stack::{FrameGuard, FrameStack};
pub use vec3::Vec3;

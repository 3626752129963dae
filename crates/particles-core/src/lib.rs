pub mod animator;
pub mod clock;
pub mod constants;
pub mod detector;
pub mod error;
pub mod gesture;
pub mod landmarks;
pub mod poses;
pub mod raster;
pub mod session;
pub mod state;
pub mod targets;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");


pub use animator::*;
pub use clock::FrameClock;
pub use constants::*;
pub use detector::DetectorOptions;
pub use error::*;
pub use gesture::*;
pub use landmarks::{HandSnapshot, LandmarkFrame, LandmarkPoint, LANDMARK_COUNT};
pub use raster::{DrawCommand, FixedRasterizer, PixelBuffer, RasterScene, Rasterizer, SoftwareRasterizer};
pub use session::*;
pub use state::*;
pub use targets::{TargetConfiguration, TargetKind, TargetLibrary};

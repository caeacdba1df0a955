pub mod animator;
pub mod config;
pub mod constants;
pub mod oscillator;
pub mod surface;
pub mod trail;

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use oscillator::*;
pub use surface::*;
pub use trail::*;

pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod frame;
pub mod math;
pub mod panel;
pub mod path;
pub mod reveal;
pub mod scene;
pub mod store;
pub mod thread;

pub use config::*;
pub use device::*;
pub use error::UnfoldError;
pub use frame::*;
pub use math::*;
pub use reveal::*;
pub use scene::*;
pub use store::*;
pub use thread::*;

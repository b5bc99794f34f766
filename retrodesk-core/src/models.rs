//! Objects (such as application windows) used to develop `RetroDesk`.
mod app_kind;
mod geometry;
mod instance;
mod manager;
mod mode;
mod viewport;

pub mod dto;

pub use app_kind::AppKind;
pub use geometry::Dimensions;
pub use geometry::Xy;
pub use instance::AppId;
pub use instance::AppInstance;
pub use manager::Manager;
pub use mode::Mode;
pub use viewport::DeviceClass;
pub use viewport::Viewport;

pub type StackOrder = u64;

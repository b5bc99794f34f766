//! Window management for the `RetroDesk` desktop shell.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of RetroDesk is to do one thing and to do that one thing
// well: Manage the little desktop's windows.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise. However, work to ensure that each use of one of these is correct
// would be very much appreciated.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access
)]
mod command;
pub mod config;
pub mod desktop;
mod display_action;
mod display_event;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod models;
pub mod state;
pub mod utils;

pub use command::Command;
pub use config::Config;
pub use display_action::DisplayAction;
pub use display_event::{DisplayEvent, PointerRegion};
pub use event_loop::EventChannel;
pub use models::Manager;
pub use models::Mode;
pub use models::{AppId, AppInstance, AppKind};
pub use state::State;
pub use utils::command_pipe::CommandPipe;
pub use utils::state_socket::StateSocket;

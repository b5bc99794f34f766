pub mod command_handler;
pub mod display_event_handler;
mod focus_handler;
mod icon_handler;
mod pointer_handler;
mod viewport_handler;
mod window_handler;
mod window_move_handler;
mod window_resize_handler;

use super::command::Command;
use super::config::Config;
use super::models::{AppId, AppInstance, AppKind, Manager, Mode, Viewport, Xy};
use super::DisplayEvent;

pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod page;
pub mod render;
pub mod ui;

pub use config::{default_actions, load_config, resolve_config_path, ControllerConfig, RenderMode};
pub use controller::StatusButtonController;
pub use errors::ControllerError;
pub use models::{ActionKind, ButtonState, ClickReport, Outcome};
pub use page::{Element, Page};

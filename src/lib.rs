#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod controller;
pub mod dialogs;
pub mod error;
pub mod ops;
pub mod panels;
pub mod renderer;
pub mod source;
pub mod state;

pub use app::ImageLabApp;
pub use command::Command;
pub use config::AppConfig;
pub use controller::Controller;
pub use error::{AppError, InputError};
pub use renderer::DisplaySurface;
pub use state::{Session, SessionState};

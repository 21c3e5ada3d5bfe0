// dirview Core - Domain Logic & Ports
// NO infrastructure dependencies (adapters live in infra-fs)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

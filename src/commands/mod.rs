pub mod progress;
pub mod ranking;
mod registry;
pub mod sellers;

pub use registry::COMMANDS;

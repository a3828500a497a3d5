//! Logging abstractions for runtime-agnostic logging

mod traits;
mod memory;
mod console;

pub use traits::{LogLevel, Logger, SharedLogger};
pub use memory::{MemoryLogger, NoOpLogger};
pub use console::ConsoleLogger;

//! Tool management
//!
//! Local tools live in a [`LocalToolRegistry`]; remote tools come from the
//! [`crate::mcp::ProviderPool`]. A [`ToolCatalog`] merges both into the
//! single surface the model sees for one exchange.
//!
//! ```text
//!   LocalToolRegistry ──┐
//!                       ├──► ToolCatalog ──► ToolRoute::Local  → handler
//!   ProviderPool ───────┘                └─► ToolRoute::Remote → pool.call_remote
//! ```

mod builtin;
mod catalog;
mod error;
mod registry;

pub use builtin::{format_long_date, CURRENT_DATE_TOOL};
pub use catalog::{ToolCatalog, ToolRoute};
pub use error::{ToolCallResult, ToolError};
pub use registry::{LocalHandler, LocalTool, LocalToolRegistry};

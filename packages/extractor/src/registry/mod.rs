//! Tag-name dispatch for parameter elements.
//!
//! DWML names each forecast parameter by its element tag. The registry maps
//! those tags to the view that knows how to read them; tags without an entry
//! are not parameters this crate understands and are skipped.

mod config;
mod table;
mod types;

pub use config::create_dwml_registry;
pub use table::ParameterRegistry;
pub use types::ParameterKind;

//! Domain-based type organization
//!
//! - restart: restart request, failure classification and user messages
//! - version: firmware build information
//! - view: view model handed to the shell

pub mod restart;
pub mod version;
pub mod view;

pub use restart::*;
pub use version::*;
pub use view::*;

//! CLI command implementations.
//!
//! - **classify**: classify every method of a hierarchy document
//! - **sorts**: list the method sorts
//! - **init**: write a default `.methodsort.toml`

pub mod classify;
pub mod init;
pub mod sorts;

pub use classify::{classify_hierarchy, ClassifyConfig};
pub use init::init_config;
pub use sorts::list_sorts;

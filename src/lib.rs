pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod nav;
pub mod router;
pub mod theme;

pub use error::{Result, SiteError};

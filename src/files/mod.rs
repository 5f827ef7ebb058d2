//! Static file access
//!
//! This module maps request paths onto files under the document root and
//! enforces that nothing outside the root is ever served.

pub mod resolve;

pub use resolve::{ResolveError, resolve};

//! Journal Types - Pure type definitions
//!
//! Data shapes shared by the ephemeral and persisted journal services.
//! No async runtime or storage dependencies live here.

pub mod entry;
pub mod image;
pub mod message;
pub mod user;

pub use entry::*;
pub use image::*;
pub use message::*;
pub use user::*;

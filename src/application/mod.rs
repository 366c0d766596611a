//! # Application Layer
//!
//! Use cases and the outbound ports they drive.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;

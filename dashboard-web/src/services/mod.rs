//! Application services
//!
//! - [`wallet`]: browser wallet detection and connection
//! - [`collection`]: token sources feeding the carousel

pub mod collection;
pub mod wallet;

//! # Data Transfer Objects (DTOs)
//!
//! Records delivered by a token source. The dashboard only reads them; nothing
//! here is ever written back.
//!
//! ## Module Organization
//!
//! - [`poap`] - Proof-of-attendance tokens, their rarity tag and the ordered collection
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase (`eventName`), matching the token-source JSON
//! - **Dates**: calendar dates as `YYYY-MM-DD`
//! - **Rarity**: lowercase tag; unknown tags deserialize as `common`

pub mod poap;

pub use poap::*;

//! # POAP Dashboard Shared Library
//!
//! Platform-independent core of the attendee dashboard. Everything here compiles
//! for both the host (where it is unit tested) and `wasm32-unknown-unknown`
//! (where `dashboard-web` renders it).
//!
//! ## Structure
//!
//! - **[`dto`]**: Token records as they arrive from a token source
//!   - **[`dto::poap`]**: [`PoapToken`], [`Rarity`] and the ordered [`Collection`]
//! - **[`rarity`]**: Rarity classifier mapping a rarity to its card treatment
//! - **[`carousel`]**: Cyclic carousel controller over a collection
//! - **[`gate`]**: Connection gate state and the [`gate::WalletConnector`] capability
//! - **[`error`]**: Error types for collection parsing and wallet connection
//! - **[`utils`]**: Display formatting (addresses, event dates, collector stars)
//!
//! ## Wire Format
//!
//! Token sources deliver a JSON array of tokens:
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "eventName": "Algorand Developer Summit 2024",
//!     "date": "2024-03-15",
//!     "organizer": "Algorand Foundation",
//!     "hash": "QmX7Yh3K9p2mNxR4F8qW5tL9bH6vJ2nM8cZ1xQ3wE7rT5uI",
//!     "rarity": "legendary"
//!   }
//! ]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shared::{Carousel, Collection, Rarity};
//! use shared::rarity::classify;
//!
//! let json = r#"[
//!     {"id": 1, "eventName": "Summit", "date": "2024-03-15", "organizer": "Foundation",
//!      "hash": "QmA", "rarity": "legendary"},
//!     {"id": 2, "eventName": "Workshop", "date": "2024-02-28", "organizer": "University",
//!      "hash": "QmB", "rarity": "rare"}
//! ]"#;
//!
//! let mut carousel = Carousel::new(Collection::from_json(json).unwrap());
//! carousel.next();
//! let token = carousel.current().unwrap();
//! assert_eq!(token.rarity, Rarity::Rare);
//! assert_eq!(classify(token.rarity).badge_label, "Rare");
//! ```

pub mod carousel;
pub mod dto;
pub mod error;
pub mod gate;
pub mod rarity;
pub mod utils;

pub use carousel::Carousel;
pub use dto::*;
pub use error::{CollectionError, WalletError};
pub use gate::{ConnectionGate, DashboardBranch, WalletIdentity, WalletProvider};
pub use rarity::{classify, RarityDescriptor};
pub use utils::*;

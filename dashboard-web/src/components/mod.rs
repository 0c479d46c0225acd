//! UI Components

pub mod carousel;
pub mod collector_badge;
pub mod connect_prompt;
pub mod navbar;
pub mod poap_card;
pub mod starfield;

pub use carousel::CarouselView;
pub use collector_badge::CollectorBadge;
pub use connect_prompt::ConnectPrompt;
pub use navbar::Navbar;
pub use poap_card::PoapCard;
pub use starfield::Starfield;

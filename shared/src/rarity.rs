//! # Rarity Classifier
//!
//! Maps a token's [`Rarity`] to the visual treatment of its card: the two
//! gradient stops, the glow colour under the card and the badge label.
//!
//! The mapping is total and deterministic. Text that is not a known rarity
//! goes through [`Rarity::from_tag`] and lands on the common treatment.
//!
//! ```rust
//! use shared::rarity::{classify, classify_tag};
//! use shared::Rarity;
//!
//! let gold = classify(Rarity::Legendary);
//! assert_eq!(gold.gradient_start, "#facc15");
//! assert_eq!(classify_tag("not-a-rarity"), classify(Rarity::Common));
//! ```

use crate::dto::poap::Rarity;

/// Card treatment for one rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityDescriptor {
    pub gradient_start: &'static str,
    pub gradient_end: &'static str,
    pub glow_color: &'static str,
    pub badge_label: &'static str,
}

const COMMON: RarityDescriptor = RarityDescriptor {
    gradient_start: "#22d3ee",
    gradient_end: "#3b82f6",
    glow_color: "rgba(6, 182, 212, 0.3)",
    badge_label: "Common",
};

const RARE: RarityDescriptor = RarityDescriptor {
    gradient_start: "#c084fc",
    gradient_end: "#ec4899",
    glow_color: "rgba(168, 85, 247, 0.3)",
    badge_label: "Rare",
};

const LEGENDARY: RarityDescriptor = RarityDescriptor {
    gradient_start: "#facc15",
    gradient_end: "#f97316",
    glow_color: "rgba(234, 179, 8, 0.3)",
    badge_label: "Legendary",
};

pub const fn classify(rarity: Rarity) -> RarityDescriptor {
    match rarity {
        Rarity::Common => COMMON,
        Rarity::Rare => RARE,
        Rarity::Legendary => LEGENDARY,
    }
}

/// Classify a raw rarity tag. Unknown tags get the common treatment.
pub fn classify_tag(tag: &str) -> RarityDescriptor {
    classify(Rarity::from_tag(tag))
}

impl RarityDescriptor {
    /// CSS `background` value for the card body.
    pub fn card_background(&self) -> String {
        format!(
            "linear-gradient(to right, {}, {})",
            self.gradient_start, self.gradient_end
        )
    }

    /// CSS `box-shadow` value for the glow under the card.
    pub fn card_shadow(&self) -> String {
        format!("0 25px 50px -12px {}", self.glow_color)
    }

    /// Subtitle line shown under the event name, e.g. `LEGENDARY • POAP NFT`.
    pub fn badge_text(&self) -> String {
        format!("{} • POAP NFT", self.badge_label.to_uppercase())
    }
}

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Direction, Footwear, Interpretation, SoulTrait};

pub const BALANCED_MIN_FT: f64 = 2.0;
pub const PROFOUND_MIN_FT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Band {
    Focused,
    Balanced,
    Profound,
}

impl Band {
    /// `[0, 2)` Focused, `[2, 5)` Balanced, `[5, ∞)` Profound. Anything below 2,
    /// including NaN, stays Focused.
    pub fn for_length(length_ft: f64) -> Band {
        if length_ft >= PROFOUND_MIN_FT {
            Band::Profound
        } else if length_ft >= BALANCED_MIN_FT {
            Band::Balanced
        } else {
            Band::Focused
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Band::Focused => "The Focused Soul",
            Band::Balanced => "The Balanced Wanderer",
            Band::Profound => "The Profound Dreamer",
        }
    }

    /// (name, description, icon key)
    pub fn trait_table(self) -> [(&'static str, &'static str, &'static str); 3] {
        match self {
            Band::Focused => [
                ("Directness", "You approach life with honesty", "arrow-right"),
                ("Clarity", "Your vision cuts through confusion", "eye"),
                ("Presence", "You live fully in the moment", "circle"),
            ],
            Band::Balanced => [
                ("Balance", "You find harmony in all things", "scale"),
                ("Wisdom", "Your choices reflect deep thought", "book"),
                ("Growth", "You evolve with each step", "trending-up"),
            ],
            Band::Profound => [
                ("Vision", "You see beyond the immediate", "telescope"),
                ("Influence", "Your impact extends far", "ripple"),
                ("Depth", "You think in dimensions", "layers"),
            ],
        }
    }

    pub fn describe(self, length_ft: f64, direction: Direction, footwear: Footwear) -> String {
        let shoes = footwear.label();
        match self {
            Band::Focused => format!(
                "Your shadow measures {:.2} feet, revealing a soul that stands tall in the light of truth. \
                 Like a sundial at noon, you cast minimal shadows because you face life directly. \
                 Your {} shoes ground you to reality while your spirit reaches for clarity.",
                length_ft, shoes
            ),
            Band::Balanced => format!(
                "At {:.2} feet, your shadow speaks of perfect equilibrium between earth and sky. \
                 Facing {}, you navigate life with measured steps in your {} shoes, \
                 leaving a meaningful impression on the world.",
                length_ft,
                direction.label().to_lowercase(),
                shoes
            ),
            Band::Profound => format!(
                "Your {:.2}-foot shadow stretches across the earth like a bridge between worlds. \
                 In your {} shoes, you carry dreams that cast long shadows, \
                 influencing far more than your immediate presence suggests.",
                length_ft, shoes
            ),
        }
    }
}

pub fn select(length_ft: f64, direction: Direction, footwear: Footwear) -> Interpretation {
    let band = Band::for_length(length_ft);
    debug!(length_ft, ?band, "interpretation band");
    Interpretation {
        title: band.title().to_string(),
        description: band.describe(length_ft, direction, footwear),
        traits: band
            .trait_table()
            .iter()
            .map(|&(name, description, icon)| SoulTrait {
                name: name.to_string(),
                description: description.to_string(),
                icon_key: icon.to_string(),
            })
            .collect(),
    }
}

impl Interpretation {
    /// Text handed to the share sheet or clipboard.
    pub fn share_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.description)
    }
}

//! Broad category taxonomy
//!
//! Raw registry tags are fine-grained (usually the first word of the slug).
//! Users browse by a small fixed set of broad groups derived from the first
//! tag through a static many-to-one table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-facing grouping of catalog entries
///
/// Variant order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BroadCategory {
    #[serde(rename = "UI")]
    Ui,
    Feedback,
    Game,
    Impact,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Retro,
    #[serde(rename = "Cards & Board")]
    CardsAndBoard,
    Tones,
    Jingles,
    Voiceover,
    Footsteps,
    Items,
    Environment,
    Other,
}

impl BroadCategory {
    /// All categories in display order
    pub const ORDER: [BroadCategory; 14] = [
        Self::Ui,
        Self::Feedback,
        Self::Game,
        Self::Impact,
        Self::SciFi,
        Self::Retro,
        Self::CardsAndBoard,
        Self::Tones,
        Self::Jingles,
        Self::Voiceover,
        Self::Footsteps,
        Self::Items,
        Self::Environment,
        Self::Other,
    ];

    /// Display label, also used as the filter key
    pub fn label(self) -> &'static str {
        match self {
            Self::Ui => "UI",
            Self::Feedback => "Feedback",
            Self::Game => "Game",
            Self::Impact => "Impact",
            Self::SciFi => "Sci-Fi",
            Self::Retro => "Retro",
            Self::CardsAndBoard => "Cards & Board",
            Self::Tones => "Tones",
            Self::Jingles => "Jingles",
            Self::Voiceover => "Voiceover",
            Self::Footsteps => "Footsteps",
            Self::Items => "Items",
            Self::Environment => "Environment",
            Self::Other => "Other",
        }
    }

    /// Position in the display order
    pub fn position(self) -> usize {
        self as usize
    }

    /// Map a primary (first raw) tag to its broad group
    ///
    /// Unmapped tags are not an error: they land in `Other`.
    pub fn from_primary(tag: &str) -> Self {
        match tag {
            "click" | "close" | "open" | "toggle" | "switch" | "scroll" | "maximize"
            | "minimize" | "hover" | "select" | "back" | "drop" => Self::Ui,

            "confirmation" | "error" | "notification" | "question" | "feedback" | "success" => {
                Self::Feedback
            }

            "impact" | "explosion" | "glass" | "metal" | "chop" => Self::Impact,

            "game-8bit" | "arcade" | "battle" | "begin" | "championship" | "choose" | "combo"
            | "deathmatch" | "fight" | "flawless" | "kill" | "loser" | "multi" | "player"
            | "prepare" | "round" | "story" | "sudden" | "survival" | "three" | "tie" | "time"
            | "two" | "war" | "winner" | "it's" | "power" => Self::Game,

            "glitch" | "computer" | "bong" => Self::Retro,

            "laser" | "force" | "phase" | "phaser" | "space" | "thruster" | "zap" | "engine" => {
                Self::SciFi
            }

            "card" | "cards" | "chip" | "chips" | "dice" | "die" | "draw" | "hold" => {
                Self::CardsAndBoard
            }

            "jingles" | "pep" => Self::Jingles,
            "voiceover" => Self::Voiceover,
            "footstep" => Self::Footsteps,
            "creak" | "door" => Self::Environment,

            "book" | "cloth" | "belt" | "handle" | "knife" | "slime" | "scratch" => Self::Items,

            "tone" | "pluck" | "tick" | "low" | "high" => Self::Tones,

            _ => Self::Other,
        }
    }
}

impl fmt::Display for BroadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BroadCategory {
    type Err = String;

    /// Parse a label exactly as displayed (`"Sci-Fi"`, `"Cards & Board"`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_variant_positions() {
        for (index, category) in BroadCategory::ORDER.iter().enumerate() {
            assert_eq!(category.position(), index);
        }
        assert_eq!(BroadCategory::ORDER[0], BroadCategory::Ui);
        assert_eq!(BroadCategory::ORDER[13], BroadCategory::Other);
    }

    #[test]
    fn maps_known_tags() {
        assert_eq!(BroadCategory::from_primary("click"), BroadCategory::Ui);
        assert_eq!(BroadCategory::from_primary("explosion"), BroadCategory::Impact);
        assert_eq!(BroadCategory::from_primary("game-8bit"), BroadCategory::Game);
        assert_eq!(BroadCategory::from_primary("power"), BroadCategory::Game);
        assert_eq!(BroadCategory::from_primary("draw"), BroadCategory::CardsAndBoard);
        assert_eq!(BroadCategory::from_primary("it's"), BroadCategory::Game);
        assert_eq!(BroadCategory::from_primary("footstep"), BroadCategory::Footsteps);
    }

    #[test]
    fn unmapped_tags_fall_back_to_other() {
        assert_eq!(BroadCategory::from_primary("uncategorized"), BroadCategory::Other);
        assert_eq!(BroadCategory::from_primary(""), BroadCategory::Other);
        // Matching is exact, not case-folded
        assert_eq!(BroadCategory::from_primary("Click"), BroadCategory::Other);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for category in BroadCategory::ORDER {
            assert_eq!(category.label().parse::<BroadCategory>(), Ok(category));
        }
        assert!("ui".parse::<BroadCategory>().is_err());
        assert!("all".parse::<BroadCategory>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&BroadCategory::CardsAndBoard).unwrap();
        assert_eq!(json, "\"Cards & Board\"");
    }
}

//! Scoring categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dice::DICE_COUNT;
use crate::error::ParseCategoryError;
use crate::scoring;

/// Number of scoring categories on a score card.
pub const CATEGORY_COUNT: usize = 15;

/// A scoring category.
///
/// Variants are listed in score-card order. Each category serializes as a
/// stable identifier that does not depend on the display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Sum of all ones.
    #[serde(rename = "checkOnes")]
    Ones,
    /// Sum of all twos.
    #[serde(rename = "checkTwos")]
    Twos,
    /// Sum of all threes.
    #[serde(rename = "checkThrees")]
    Threes,
    /// Sum of all fours.
    #[serde(rename = "checkFours")]
    Fours,
    /// Sum of all fives.
    #[serde(rename = "checkFives")]
    Fives,
    /// Sum of all sixes.
    #[serde(rename = "checkSixes")]
    Sixes,
    /// A pair. Always scores 0.
    #[serde(rename = "checkAPair")]
    Pair,
    /// Two pairs. Always scores 0.
    #[serde(rename = "checkTwoPairs")]
    TwoPairs,
    /// Three dice of one face; scores the sum of all dice.
    #[serde(rename = "checkThreeRepeats")]
    ThreeOfAKind,
    /// Four dice of one face; scores the sum of all dice.
    #[serde(rename = "checkFourRepeats")]
    FourOfAKind,
    /// Four consecutive faces; scores 30.
    #[serde(rename = "smallStraight")]
    SmallStraight,
    /// Five consecutive faces; scores 40.
    #[serde(rename = "largeStraight")]
    LargeStraight,
    /// A triple and a pair; scores 25.
    #[serde(rename = "house")]
    FullHouse,
    /// Chance. Always scores 0.
    #[serde(rename = "chance")]
    Chance,
    /// All five dice equal; scores 50.
    #[serde(rename = "checkYahtzee")]
    Yahtzee,
}

impl Category {
    /// All categories in score-card order.
    pub const ALL: [Self; CATEGORY_COUNT] = [
        Self::Ones,
        Self::Twos,
        Self::Threes,
        Self::Fours,
        Self::Fives,
        Self::Sixes,
        Self::Pair,
        Self::TwoPairs,
        Self::ThreeOfAKind,
        Self::FourOfAKind,
        Self::SmallStraight,
        Self::LargeStraight,
        Self::FullHouse,
        Self::Chance,
        Self::Yahtzee,
    ];

    /// Returns the stable identifier used in snapshots.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ones => "checkOnes",
            Self::Twos => "checkTwos",
            Self::Threes => "checkThrees",
            Self::Fours => "checkFours",
            Self::Fives => "checkFives",
            Self::Sixes => "checkSixes",
            Self::Pair => "checkAPair",
            Self::TwoPairs => "checkTwoPairs",
            Self::ThreeOfAKind => "checkThreeRepeats",
            Self::FourOfAKind => "checkFourRepeats",
            Self::SmallStraight => "smallStraight",
            Self::LargeStraight => "largeStraight",
            Self::FullHouse => "house",
            Self::Chance => "chance",
            Self::Yahtzee => "checkYahtzee",
        }
    }

    /// Returns the default English label for a score card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ones => "Ones",
            Self::Twos => "Twos",
            Self::Threes => "Threes",
            Self::Fours => "Fours",
            Self::Fives => "Fives",
            Self::Sixes => "Sixes",
            Self::Pair => "A pair",
            Self::TwoPairs => "Two pairs",
            Self::ThreeOfAKind => "Three of a kind",
            Self::FourOfAKind => "Four of a kind",
            Self::SmallStraight => "Small straight",
            Self::LargeStraight => "Large straight",
            Self::FullHouse => "Full house",
            Self::Chance => "Chance",
            Self::Yahtzee => "Yahtzee",
        }
    }

    /// Returns the position of this category on the score card.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the face counted by an upper-section category.
    ///
    /// Returns `None` for lower-section categories.
    #[must_use]
    pub const fn face(self) -> Option<u8> {
        match self {
            Self::Ones => Some(1),
            Self::Twos => Some(2),
            Self::Threes => Some(3),
            Self::Fours => Some(4),
            Self::Fives => Some(5),
            Self::Sixes => Some(6),
            _ => None,
        }
    }

    /// Scores a hand of dice faces in this category.
    ///
    /// # Example
    ///
    /// ```
    /// use yahtzee::Category;
    ///
    /// assert_eq!(Category::Twos.score(&[2, 2, 2, 2, 5]), 8);
    /// assert_eq!(Category::FullHouse.score(&[2, 2, 3, 3, 3]), 25);
    /// ```
    #[must_use]
    pub fn score(self, faces: &[u8; DICE_COUNT]) -> u16 {
        scoring::evaluate(self, faces)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or(ParseCategoryError)
    }
}

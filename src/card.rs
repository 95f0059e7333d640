use std::fmt;
use std::str::FromStr;

use crate::error::{CardError, Result};
use crate::types::{Rank, Suit};

/// A single playing card. Cards are plain values: two cards of the same rank and suit are equal.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Build a card from rank and suit names, e.g. `("Queen", "Hearts")` or `("10", "♠")`.
    pub fn parse(rank: &str, suit: &str) -> Result<Self> {
        let rank = Rank::from_str(rank.trim())
            .map_err(|_| CardError::InvalidCard(format!("unknown rank '{}'", rank)))?;
        let suit = Suit::from_str(suit.trim())
            .map_err(|_| CardError::InvalidCard(format!("unknown suit '{}'", suit)))?;
        Ok(Card::new(rank, suit))
    }

    pub fn points(&self) -> u32 {
        self.rank.points()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// True for 10, Jack, Queen and King.
    pub fn is_ten_value(&self) -> bool {
        self.points() == 10
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the rendered form, `"<rank> of <suit>"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(" of ") {
            Some((rank, suit)) => Card::parse(rank, suit),
            None => Err(CardError::InvalidCard(format!("expected '<rank> of <suit>', got '{}'", s))),
        }
    }
}

use std::fmt;

use derive_more::{Deref, DerefMut, From};

use crate::hand::Hand;

/// A Hand scored by blackjack rules. The value is recomputed from the cards on every call.
#[derive(PartialEq, Eq, Clone, Debug, Default, Hash, Deref, DerefMut, From)]
pub struct BlackjackHand {
    hand: Hand,
}

impl BlackjackHand {
    pub fn new() -> Self {
        BlackjackHand::default()
    }

    /// Total of the hand, counting one Ace as 11 when that does not bust. Does not account for
    /// busts or Blackjack bonuses.
    pub fn value(&self) -> u32 {
        self._total_internal().0
    }

    /// Checks whether an Ace is currently being counted as 11.
    pub fn is_soft(&self) -> bool {
        self._total_internal().1
    }

    pub fn has_ace(&self) -> bool {
        self.hand.cards().any(|card| card.is_ace())
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Any 21, natural or reached by hitting.
    pub fn is_blackjack(&self) -> bool {
        self.value() == 21
    }

    /// 21 on exactly two cards.
    pub fn is_natural_blackjack(&self) -> bool {
        self.hand.len() == 2 && self.is_blackjack()
    }

    fn _total_internal(&self) -> (u32, bool) {
        let mut contains_ace = false;
        let mut total: u32 = 0;
        for card in self.hand.cards() {
            total += card.points();  // Aces count 1, 11 accounted for below
            contains_ace |= card.is_ace();
        }

        if contains_ace && total + 10 <= 21 {
            (total + 10, true)
        } else {
            (total, false)
        }
    }
}

impl fmt::Display for BlackjackHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hand, f)
    }
}

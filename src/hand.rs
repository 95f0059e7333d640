use std::fmt;
use std::ops;
use std::ops::Index;
use std::slice;

use crate::card::Card;
use crate::types::RankArray;

/// An ordered collection of cards held by a Player or Dealer, in the order they were dealt.
#[derive(PartialEq, Eq, Clone, Debug, Default, Hash)]
pub struct Hand {
    /// All cards in this Hand.
    pub cards: Vec<Card>,
}

#[macro_export]
macro_rules! hand {
    ( $( $x:expr ),* ) => {
        {
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($x);
            )*
            $crate::hand::Hand { cards: temp_vec }
        }
    };
}

impl Hand {
    pub fn new() -> Self {
        Hand::default()
    }

    /// Append cards in the given order.
    pub fn add_cards<I: IntoIterator<Item = Card>>(&mut self, new_cards: I) {
        self.cards.extend(new_cards);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate the cards in deal order. The iterator borrows the hand, so the hand cannot change
    /// underneath it; call again to restart.
    pub fn cards(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// The first card dealt, which is the upcard for a dealer.
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Number of cards of each rank, ignoring suit and order.
    pub fn composition(&self) -> RankArray<u32> {
        let mut counts = RankArray::default();
        for card in &self.cards {
            counts[card.rank] += 1;
        }
        counts
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl ops::Add<Card> for Hand {
    type Output = Hand;

    fn add(self, rhs: Card) -> Self::Output {
        let mut copy = self.cards.clone();
        copy.push(rhs);
        Hand { cards: copy }
    }
}

impl ops::AddAssign<Card> for Hand {
    fn add_assign(&mut self, rhs: Card) {
        self.cards.push(rhs);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Hand { cards: iter.into_iter().collect() }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

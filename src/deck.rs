use derive_more::{Deref, DerefMut};
use rand::seq::SliceRandom;
use rand::Rng;
use strum::IntoEnumIterator;

use crate::card::Card;
use crate::error::{CardError, Result};
use crate::hand::Hand;
use crate::types::{Rank, Suit};

pub const STANDARD_DECK_SIZE: usize = 52;

/// A Deck of cards. Hand operations (len, add_cards, clear, iteration) are available through
/// deref. Cards are dealt from the end of the underlying sequence.
#[derive(PartialEq, Eq, Clone, Debug, Default, Deref, DerefMut)]
pub struct Deck {
    hand: Hand,
}

impl Deck {
    /// A deck with no cards, to be filled by merging.
    pub fn empty() -> Self {
        Deck::default()
    }

    /// One card of every rank and suit, suit-major: all spades Ace..King, then hearts, diamonds,
    /// clubs.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(STANDARD_DECK_SIZE);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { hand: Hand { cards } }
    }

    /// Shuffle the whole deck `passes` times. Each pass is an independent uniform permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, passes: usize, rng: &mut R) {
        for _ in 0..passes {
            self.hand.cards.shuffle(rng);
        }
    }

    /// Split at the midpoint (rounding down) and put the second half on top.
    pub fn cut(&mut self) {
        let half = self.hand.cards.len() / 2;
        self.hand.cards.rotate_left(half);
    }

    /// Remove the last `n` cards. The returned cards are in the order they come off the deck, so
    /// the card that was last in the deck is first in the result. Nothing is removed on failure.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        let available = self.hand.cards.len();
        if n > available {
            return Err(CardError::InsufficientCards { requested: n, available });
        }
        let mut dealt = self.hand.cards.split_off(available - n);
        dealt.reverse();
        Ok(dealt)
    }

    /// Move every card of `other` onto the end of this deck, leaving `other` empty.
    pub fn merge(&mut self, other: &mut Deck) {
        self.hand.cards.append(&mut other.hand.cards);
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Deck { hand: Hand { cards } }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::card::Card;
    use crate::deck::{Deck, STANDARD_DECK_SIZE};
    use crate::error::CardError;
    use crate::types::{Rank, Suit};

    fn sorted(deck: &Deck) -> Vec<Card> {
        let mut cards: Vec<Card> = deck.cards().copied().collect();
        cards.sort();
        cards
    }

    #[test]
    fn test_standard_deck() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), STANDARD_DECK_SIZE);

        let unique: HashSet<&Card> = deck.cards().collect();
        assert_eq!(unique.len(), STANDARD_DECK_SIZE);

        for (_, count) in deck.composition() {
            assert_eq!(count, 4);
        }
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck[12], Card::new(Rank::King, Suit::Spades));
        assert_eq!(deck[51], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn test_shuffle_and_cut_keep_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = Deck::standard();
        for passes in [0, 1, 3] {
            let mut deck = original.clone();
            deck.shuffle(passes, &mut rng);
            deck.cut();
            assert_eq!(sorted(&deck), sorted(&original));
        }

        let mut deck = original.clone();
        deck.shuffle(1, &mut rng);
        assert_ne!(deck, original);
    }

    #[test]
    fn test_cut() {
        let mut deck = Deck::standard();
        deck.cut();
        assert_eq!(deck[0], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck[26], Card::new(Rank::Ace, Suit::Spades));

        let a = Card::new(Rank::Two, Suit::Hearts);
        let b = Card::new(Rank::Three, Suit::Hearts);
        let c = Card::new(Rank::Four, Suit::Hearts);
        let mut odd = Deck::from(vec![a, b, c]);
        odd.cut();
        assert_eq!(odd.cards, vec![b, c, a]);

        let mut empty = Deck::empty();
        empty.cut();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_deal_from_end() {
        let mut deck = Deck::standard();
        let dealt = deck.deal(2).unwrap();
        assert_eq!(dealt, vec![Card::new(Rank::King, Suit::Clubs), Card::new(Rank::Queen, Suit::Clubs)]);
        assert_eq!(deck.len(), 50);
        assert!(deck.cards().all(|c| !dealt.contains(c)));

        assert_eq!(deck.deal(0).unwrap(), vec![]);
        assert_eq!(deck.len(), 50);
    }

    #[test]
    fn test_deal_insufficient() {
        let mut deck = Deck::standard();
        deck.deal(50).unwrap();
        let before = deck.clone();
        assert_eq!(deck.deal(3), Err(CardError::InsufficientCards { requested: 3, available: 2 }));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_merge() {
        let mut deck = Deck::standard();
        let mut other = Deck::standard();
        deck.merge(&mut other);
        assert_eq!(deck.len(), 2 * STANDARD_DECK_SIZE);
        assert!(other.is_empty());
        assert_eq!(deck[52], Card::new(Rank::Ace, Suit::Spades));

        let mut rng = StdRng::seed_from_u64(11);
        deck.shuffle(1, &mut rng);
        let mut dealt = Deck::from(deck.deal(30).unwrap());
        assert_eq!(deck.len(), 74);
        deck.merge(&mut dealt);
        assert_eq!(deck.len(), 2 * STANDARD_DECK_SIZE);
        assert!(dealt.is_empty());
    }
}

use std::ops::RangeInclusive;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{CardError, Result};
use crate::hand::Hand;

/// Remaining-card counts the cut card may be placed at. This is an absolute count of cards left in
/// the shoe, not a share of its size, so it does not scale with the number of decks.
pub const CUT_CARD_RANGE: RangeInclusive<usize> = 60..=80;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ShoeState {
    /// No usable pool. `build` must be called before dealing.
    Stale,
    /// Built and above the cut card.
    Ready,
    /// The cut card has come out. Dealing may continue to finish the current hand, but the shoe
    /// should be rebuilt before the next one.
    CutCardReached,
}

/// A card shoe holding several decks merged into one dealing pool.
pub struct Shoe {
    num_decks: u32,
    pool: Deck,
    cut_card_position: usize,
    state: ShoeState,
    rng: StdRng,
}

impl Shoe {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A shoe whose shuffles and cut-card placements are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// A ready shoe that deals exactly `cards`, first card first, for replaying a known sequence.
    /// The cut card sits at zero, so it only asks for a rebuild once empty.
    pub fn stacked(mut cards: Vec<Card>, seed: u64) -> Self {
        cards.reverse();
        let mut shoe = Self::with_seed(seed);
        shoe.pool = Deck::from(cards);
        shoe.state = if shoe.pool.is_empty() { ShoeState::CutCardReached } else { ShoeState::Ready };
        shoe
    }

    fn with_rng(rng: StdRng) -> Self {
        Shoe {
            num_decks: 0,
            pool: Deck::empty(),
            cut_card_position: 0,
            state: ShoeState::Stale,
            rng,
        }
    }

    /// Replace the pool with `num_decks` fresh decks, shuffled and cut, and place a new cut card.
    ///
    /// Allowed on a new shoe or once the cut card has been reached. Building a shoe that is still
    /// in play fails with [CardError::ShoeInPlay].
    pub fn build(&mut self, num_decks: u32) -> Result<()> {
        if self.state == ShoeState::Ready {
            return Err(CardError::ShoeInPlay);
        }
        if num_decks == 0 {
            return Err(CardError::NoDecks);
        }

        let mut pool = Deck::standard();
        for _ in 1..num_decks {
            pool.merge(&mut Deck::standard());
        }
        pool.shuffle(1, &mut self.rng);
        pool.cut();

        self.num_decks = num_decks;
        self.pool = pool;
        self.cut_card_position = self.rng.gen_range(CUT_CARD_RANGE);
        self.state = ShoeState::Ready;
        debug!("Built shoe of {} deck(s), {} cards, cut card at {}",
               num_decks, self.pool.len(), self.cut_card_position);
        Ok(())
    }

    /// Deal `n` cards off the pool. Once at most `cut_card_position` cards remain the shoe reports
    /// [Shoe::needs_rebuild], but it keeps dealing until rebuilt by the caller.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>> {
        if self.state == ShoeState::Stale {
            return Err(CardError::ShoeNotReady);
        }
        let cards = self.pool.deal(n)?;
        if self.state == ShoeState::Ready && self.pool.len() <= self.cut_card_position {
            debug!("Cut card reached with {} cards remaining", self.pool.len());
            self.state = ShoeState::CutCardReached;
        }
        Ok(cards)
    }

    /// Deal `n` cards straight into a hand.
    pub fn deal_into(&mut self, hand: &mut Hand, n: usize) -> Result<()> {
        let cards = self.deal(n)?;
        hand.add_cards(cards);
        Ok(())
    }

    pub fn needs_rebuild(&self) -> bool {
        self.state != ShoeState::Ready
    }

    pub fn state(&self) -> ShoeState {
        self.state
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn cut_card_position(&self) -> usize {
        self.cut_card_position
    }

    pub fn num_decks(&self) -> u32 {
        self.num_decks
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}

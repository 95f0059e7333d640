use uuid::Uuid;

use crate::blackjack_hand::BlackjackHand;
use crate::card::Card;
use crate::error::BetError;
use crate::rules::TableRules;

/// A seated player with a bankroll and the hand for the current round.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    id: Uuid,
    balance: f64,
    bet: f64,
    last_bet: f64,
    pub hand: BlackjackHand,
}

impl Player {
    pub fn new(name: &str, bankroll: f64) -> Self {
        Self::with_id(name, Uuid::new_v4(), bankroll)
    }

    /// A returning player, restored from saved data.
    pub fn with_id(name: &str, id: Uuid, balance: f64) -> Self {
        Player {
            name: name.to_string(),
            id,
            balance,
            bet: 0.0,
            last_bet: 0.0,
            hand: BlackjackHand::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn bet(&self) -> f64 {
        self.bet
    }

    pub fn last_bet(&self) -> f64 {
        self.last_bet
    }

    /// Any positive balance covers some valid bet.
    pub fn can_bet(&self) -> bool {
        self.balance > 0.0
    }

    /// Reset the balance of a player who is out of money. Players with money left keep it.
    pub fn refill(&mut self, bankroll: f64) -> bool {
        if self.can_bet() {
            return false;
        }
        self.balance = bankroll;
        true
    }

    pub fn is_betting(&self) -> bool {
        self.bet > 0.0
    }

    pub fn place_bet(&mut self, amount: f64) -> Result<(), BetError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(BetError::NotPositive);
        }
        if amount > self.balance {
            return Err(BetError::ExceedsBalance { bet: amount, balance: self.balance });
        }
        self.bet = amount;
        self.last_bet = amount;
        Ok(())
    }

    pub fn win_bet(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub fn lose_bet(&mut self, amount: f64) {
        self.balance -= amount;
    }

    /// Empty the hand and take the bet off the table. The balance is untouched.
    pub fn clear_round(&mut self) {
        self.hand.clear();
        self.bet = 0.0;
    }

    pub fn status(&self) -> String {
        format!("{} has {} for a total of {}.", self.name, self.hand, self.hand.value())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Dealer {
    pub hand: BlackjackHand,
}

impl Dealer {
    pub fn new() -> Self {
        Dealer::default()
    }

    /// Dealer draws below the stand total, and on a soft stand total when the table hits soft 17.
    pub fn should_hit(&self, rules: &TableRules) -> bool {
        let value = self.hand.value();
        value < rules.dealer_stands_at
            || (value == rules.dealer_stands_at && rules.hit_soft_17 && self.hand.is_soft())
    }

    pub fn upcard(&self) -> Option<&Card> {
        self.hand.first()
    }

    pub fn shows_ten_or_ace(&self) -> bool {
        self.upcard().map_or(false, |c| c.is_ten_value() || c.is_ace())
    }

    pub fn status(&self) -> String {
        format!("The dealer has {} for a total of {}.", self.hand, self.hand.value())
    }
}

use std::cmp::Ordering;
use std::fmt;

use log::info;

use crate::blackjack_hand::BlackjackHand;
use crate::card::Card;
use crate::error::{CardError, TableError};
use crate::player::{Dealer, Player};
use crate::rules::TableRules;
use crate::shoe::Shoe;

/// Makes hit/stand decisions for players during their turn, and is told what the table shows.
pub trait Decider {
    fn wants_hit(&mut self, player: &Player, upcard: &Card) -> bool;

    /// Called once the initial two cards are out, before any player acts.
    fn dealt(&mut self, _players: &[Player], _upcard: &Card) {}

    /// Called when the dealer turns the hole card over, before drawing.
    fn dealer_reveals(&mut self, _dealer: &Dealer) {}
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Outcome {
    /// Two-card 21 against a dealer without one. A dealer natural beats any player 21 that is not
    /// itself a natural.
    Natural,
    Win,
    Push,
    Lose,
    Bust,
}

impl Outcome {
    pub fn of(player: &BlackjackHand, dealer: &BlackjackHand) -> Outcome {
        if player.is_bust() {
            return Outcome::Bust;
        }
        match (player.is_natural_blackjack(), dealer.is_natural_blackjack()) {
            (true, false) => return Outcome::Natural,
            (false, true) => return Outcome::Lose,
            _ => (),
        }
        if dealer.is_bust() {
            return Outcome::Win;
        }
        match player.value().cmp(&dealer.value()) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Push,
            Ordering::Less => Outcome::Lose,
        }
    }

    /// Balance change for a bet of `bet` units.
    pub fn payout(&self, bet: f64, rules: &TableRules) -> f64 {
        match self {
            Outcome::Natural => bet * rules.blackjack_multiplier,
            Outcome::Win => bet,
            Outcome::Push => 0.0,
            Outcome::Lose | Outcome::Bust => -bet,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Natural => "BLACKJACK",
            Outcome::Win => "WINS",
            Outcome::Push => "PUSHES",
            Outcome::Lose => "LOSES",
            Outcome::Bust => "BUSTED",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerResult {
    pub name: String,
    pub hand: String,
    pub value: u32,
    pub outcome: Outcome,
    /// Signed balance change.
    pub net: f64,
    pub balance: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoundReport {
    pub dealer_hand: String,
    pub dealer_value: u32,
    pub results: Vec<PlayerResult>,
}

/// One dealer, one shoe and up to `max_players` players.
pub struct Table {
    rules: TableRules,
    shoe: Shoe,
    players: Vec<Player>,
    dealer: Dealer,
}

impl Table {
    pub fn new(rules: TableRules, shoe: Shoe, players: Vec<Player>) -> Result<Table, TableError> {
        if players.is_empty() || players.len() > rules.max_players {
            return Err(TableError::PlayerCount { got: players.len(), max: rules.max_players });
        }
        Ok(Table { rules, shoe, players, dealer: Dealer::new() })
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Play one round for every player with a bet down, then settle and clear the table.
    ///
    /// The shoe is rebuilt here, before any card is dealt, if the cut card came out last round.
    /// If the shoe runs dry mid-round the round is abandoned: hands are cleared and bets returned
    /// untouched.
    pub fn play_round<D: Decider>(&mut self, decider: &mut D) -> Result<RoundReport, CardError> {
        if !self.players.iter().any(Player::is_betting) {
            return Ok(RoundReport::default());
        }
        if self.shoe.needs_rebuild() {
            self.shoe.build(self.rules.decks)?;
        }

        let result = self.deal_and_play(decider).map(|()| self.settle());
        self.clear_round();
        result
    }

    fn deal_and_play<D: Decider>(&mut self, decider: &mut D) -> Result<(), CardError> {
        for _ in 0..2 {
            for player in self.players.iter_mut().filter(|p| p.is_betting()) {
                self.shoe.deal_into(&mut player.hand, 1)?;
            }
            self.shoe.deal_into(&mut self.dealer.hand, 1)?;
        }
        let upcard = match self.dealer.upcard() {
            Some(card) => *card,
            None => return Ok(()),
        };
        decider.dealt(&self.players, &upcard);

        for player in self.players.iter_mut().filter(|p| p.is_betting()) {
            while player.hand.value() < 21 && decider.wants_hit(player, &upcard) {
                self.shoe.deal_into(&mut player.hand, 1)?;
            }
        }

        let anyone_standing = self.players.iter()
            .any(|p| p.is_betting() && !p.hand.is_bust());
        if anyone_standing {
            decider.dealer_reveals(&self.dealer);
            while self.dealer.should_hit(&self.rules) {
                self.shoe.deal_into(&mut self.dealer.hand, 1)?;
            }
        }
        Ok(())
    }

    fn settle(&mut self) -> RoundReport {
        let mut report = RoundReport {
            dealer_hand: self.dealer.hand.to_string(),
            dealer_value: self.dealer.hand.value(),
            results: vec![],
        };
        for player in self.players.iter_mut().filter(|p| p.is_betting()) {
            let outcome = Outcome::of(&player.hand, &self.dealer.hand);
            let net = outcome.payout(player.bet(), &self.rules);
            if net >= 0.0 {
                player.win_bet(net);
            } else {
                player.lose_bet(-net);
            }
            info!("{} {} with {} against dealer {}, balance {:.2}",
                  player.name(), outcome, player.hand.value(), report.dealer_value, player.balance());
            report.results.push(PlayerResult {
                name: player.name().to_string(),
                hand: player.hand.to_string(),
                value: player.hand.value(),
                outcome,
                net,
                balance: player.balance(),
            });
        }
        report
    }

    fn clear_round(&mut self) {
        for player in self.players.iter_mut() {
            player.clear_round();
        }
        self.dealer.hand.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::card::Card;
    use crate::error::{CardError, TableError};
    use crate::hand::Hand;
    use crate::blackjack_hand::BlackjackHand;
    use crate::player::{Dealer, Player};
    use crate::rules::RULES;
    use crate::shoe::Shoe;
    use crate::table::{Decider, Outcome, Table};
    use crate::types::Rank::*;
    use crate::types::{Rank, Suit};

    /// Hits until the hand reaches `stand_on`.
    struct HitUntil(u32);

    impl Decider for HitUntil {
        fn wants_hit(&mut self, player: &Player, _upcard: &Card) -> bool {
            player.hand.value() < self.0
        }
    }

    /// Stands on everything and keeps track of what the table showed.
    #[derive(Default)]
    struct Watcher {
        upcards: Vec<Card>,
        reveals: Vec<u32>,
    }

    impl Decider for Watcher {
        fn wants_hit(&mut self, _player: &Player, _upcard: &Card) -> bool {
            false
        }

        fn dealt(&mut self, _players: &[Player], upcard: &Card) {
            self.upcards.push(*upcard);
        }

        fn dealer_reveals(&mut self, dealer: &Dealer) {
            self.reveals.push(dealer.hand.value());
        }
    }

    fn stacked(ranks: &[Rank]) -> Shoe {
        Shoe::stacked(ranks.iter().map(|r| Card::new(*r, Suit::Clubs)).collect(), 0)
    }

    fn bj(ranks: &[Rank]) -> BlackjackHand {
        BlackjackHand::from(ranks.iter().map(|r| Card::new(*r, Suit::Spades)).collect::<Hand>())
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(Outcome::of(&bj(&[Ten, Ten, Five]), &bj(&[Ten, Ten, Six])), Outcome::Bust);
        assert_eq!(Outcome::of(&bj(&[Ten, Eight]), &bj(&[Ten, Six, Nine])), Outcome::Win);
        assert_eq!(Outcome::of(&bj(&[Ten, Eight]), &bj(&[Ten, Nine])), Outcome::Lose);
        assert_eq!(Outcome::of(&bj(&[Ten, Nine]), &bj(&[Ten, Nine])), Outcome::Push);
        assert_eq!(Outcome::of(&bj(&[Ace, King]), &bj(&[Ten, Five, Six])), Outcome::Natural);
        assert_eq!(Outcome::of(&bj(&[Ace, King]), &bj(&[Queen, Ace])), Outcome::Push);
        assert_eq!(Outcome::of(&bj(&[Seven, Four, King]), &bj(&[Queen, Ace])), Outcome::Lose);
        assert_eq!(Outcome::of(&bj(&[Seven, Four, King]), &bj(&[Five, Six, Jack])), Outcome::Push);
    }

    #[test]
    fn test_payouts() {
        assert_eq!(Outcome::Natural.payout(10.0, &RULES), 10.0);
        assert_eq!(Outcome::Win.payout(10.0, &RULES), 10.0);
        assert_eq!(Outcome::Push.payout(10.0, &RULES), 0.0);
        assert_eq!(Outcome::Bust.payout(10.0, &RULES), -10.0);
    }

    #[test]
    fn test_player_count() {
        let too_many = (0..5).map(|i| Player::new(&i.to_string(), 100.0)).collect();
        assert!(matches!(Table::new(RULES, Shoe::with_seed(0), too_many),
                         Err(TableError::PlayerCount { got: 5, max: 4 })));
        assert!(Table::new(RULES, Shoe::with_seed(0), vec![]).is_err());
    }

    #[test]
    fn test_no_bets_no_deal() {
        let mut table = Table::new(RULES, Shoe::with_seed(0), vec![Player::new("Ada", 100.0)]).unwrap();
        let report = table.play_round(&mut HitUntil(17)).unwrap();
        assert!(report.results.is_empty());
        assert!(table.shoe().needs_rebuild());
    }

    #[test]
    fn test_rounds_settle_balances() {
        let players = vec![Player::new("Ada", 100.0), Player::new("Bo", 100.0)];
        let mut table = Table::new(RULES, Shoe::with_seed(42), players).unwrap();

        for _ in 0..100 {
            table.players_mut()[0].place_bet(1.0).unwrap();
            let before: Vec<f64> = table.players().iter().map(Player::balance).collect();
            let report = table.play_round(&mut HitUntil(17)).unwrap();

            assert_eq!(report.results.len(), 1);
            let result = &report.results[0];
            assert_eq!(result.name, "Ada");
            assert_eq!(result.balance, before[0] + result.net);
            assert_eq!(table.players()[1].balance(), before[1]);
            if result.outcome != Outcome::Bust {
                assert!(result.value >= 17);
                assert!(report.dealer_value >= 17);
            }
            assert!(table.players().iter().all(|p| p.hand.is_empty() && !p.is_betting()));
        }
    }

    #[test]
    fn test_shoe_rebuilt_between_rounds() {
        let mut table = Table::new(RULES, Shoe::with_seed(8), vec![Player::new("Ada", 1e9)]).unwrap();
        let mut rebuilt = false;
        let mut last_remaining = usize::MAX;
        for _ in 0..200 {
            table.players_mut()[0].place_bet(1.0).unwrap();
            table.play_round(&mut HitUntil(12)).unwrap();
            let remaining = table.shoe().remaining();
            rebuilt |= remaining > last_remaining;
            last_remaining = remaining;
        }
        assert!(rebuilt);
    }

    #[test]
    fn test_stacked_natural_round() {
        // Deal order: player, dealer, player, dealer, then dealer draws
        let shoe = stacked(&[Ace, Nine, King, Seven, Five]);
        let mut table = Table::new(RULES, shoe, vec![Player::new("Ada", 100.0)]).unwrap();
        table.players_mut()[0].place_bet(10.0).unwrap();

        let mut watcher = Watcher::default();
        let report = table.play_round(&mut watcher).unwrap();
        assert_eq!(watcher.upcards, vec![Card::new(Nine, Suit::Clubs)]);
        assert_eq!(watcher.reveals, vec![16]);
        assert_eq!(report.dealer_value, 21);
        assert_eq!(report.results[0].outcome, Outcome::Natural);
        assert_eq!(table.players()[0].balance(), 110.0);
    }

    #[test]
    fn test_dealer_natural_round() {
        let shoe = stacked(&[Ten, Ace, Seven, King]);
        let mut table = Table::new(RULES, shoe, vec![Player::new("Ada", 100.0)]).unwrap();
        table.players_mut()[0].place_bet(10.0).unwrap();

        let report = table.play_round(&mut Watcher::default()).unwrap();
        assert_eq!(report.results[0].outcome, Outcome::Lose);
        assert_eq!(table.players()[0].balance(), 90.0);
    }

    #[test]
    fn test_round_abandoned_when_shoe_runs_dry() {
        let shoe = stacked(&[Ten, Nine, Eight]);
        let mut table = Table::new(RULES, shoe, vec![Player::new("Ada", 100.0)]).unwrap();
        table.players_mut()[0].place_bet(10.0).unwrap();

        let mut watcher = Watcher::default();
        let err = table.play_round(&mut watcher).unwrap_err();
        assert_eq!(err, CardError::InsufficientCards { requested: 1, available: 0 });
        assert!(watcher.upcards.is_empty());

        let ada = &table.players()[0];
        assert_eq!(ada.balance(), 100.0);
        assert!(!ada.is_betting());
        assert!(ada.hand.is_empty());
    }
}

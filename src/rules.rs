#[derive(Clone, Debug, PartialEq)]
pub struct TableRules {
    pub decks: u32,
    pub hit_soft_17: bool,
    pub dealer_stands_at: u32,
    pub max_players: usize,
    pub starting_bankroll: f64,
    /// Net win per unit bet on a natural.
    pub blackjack_multiplier: f64,
    pub save_file: &'static str,
}

pub const RULES: TableRules = TableRules {
    decks: 8,
    hit_soft_17: true,
    dealer_stands_at: 17,
    max_players: 4,
    starting_bankroll: 100.0,
    blackjack_multiplier: 1.0,
    save_file: "player_data.csv",
};

impl Default for TableRules {
    fn default() -> Self {
        RULES
    }
}

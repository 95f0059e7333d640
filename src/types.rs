use enum_map::EnumMap;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The 13 ranks of a French-suited deck, in Ace-low order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash,
         enum_map::Enum, EnumIter, EnumCount, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Rank {
    #[strum(to_string = "Ace", serialize = "A")]
    Ace,
    #[strum(to_string = "2", serialize = "Two")]
    Two,
    #[strum(to_string = "3", serialize = "Three")]
    Three,
    #[strum(to_string = "4", serialize = "Four")]
    Four,
    #[strum(to_string = "5", serialize = "Five")]
    Five,
    #[strum(to_string = "6", serialize = "Six")]
    Six,
    #[strum(to_string = "7", serialize = "Seven")]
    Seven,
    #[strum(to_string = "8", serialize = "Eight")]
    Eight,
    #[strum(to_string = "9", serialize = "Nine")]
    Nine,
    #[strum(to_string = "10", serialize = "Ten", serialize = "T")]
    Ten,
    #[strum(to_string = "Jack", serialize = "J")]
    Jack,
    #[strum(to_string = "Queen", serialize = "Q")]
    Queen,
    #[strum(to_string = "King", serialize = "K")]
    King,
}

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash,
         enum_map::Enum, EnumIter, EnumCount, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Suit {
    #[strum(to_string = "♠", serialize = "Spades")]
    Spades,
    #[strum(to_string = "♥", serialize = "Hearts")]
    Hearts,
    #[strum(to_string = "♦", serialize = "Diamonds")]
    Diamonds,
    #[strum(to_string = "♣", serialize = "Clubs")]
    Clubs,
}

/// Blackjack points per rank, indexed by `Rank as usize`. Aces count 1 here; hands add the
/// soft bonus.
const POINTS: [u32; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

impl Rank {
    pub fn points(self) -> u32 {
        POINTS[self as usize]
    }
}

/// Arbitrary values indexed by card Rank.
pub type RankArray<T> = EnumMap<Rank, T>;

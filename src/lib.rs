pub mod blackjack_hand;
pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod hand;
pub mod ledger;
pub mod player;
pub mod rules;
pub mod session;
pub mod shoe;
pub mod table;
pub mod types;

pub use blackjack_hand::BlackjackHand;
pub use card::Card;
pub use deck::Deck;
pub use error::CardError;
pub use hand::Hand;
pub use shoe::Shoe;
pub use types::{Rank, Suit};

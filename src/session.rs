use std::error::Error;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info};

use crate::console::Console;
use crate::ledger::Ledger;
use crate::rules::TableRules;
use crate::shoe::Shoe;
use crate::table::Table;

/// Load the save file, play until the players stop, and write the save file back. The ledger is
/// written even when the session ends with an error, such as input closing mid-game, and the
/// error is returned after the save.
pub fn run<R, W, P>(console: &mut Console<R, W>, save_file: P, rules: &TableRules, shoe: Shoe)
                    -> Result<(), Box<dyn Error>>
where
    R: BufRead,
    W: Write,
    P: AsRef<Path>,
{
    let mut ledger = Ledger::load(&save_file);
    debug!("Loaded {} saved player(s) from {}", ledger.len(), save_file.as_ref().display());

    let played = play(console, &mut ledger, rules, shoe);
    ledger.save(&save_file)?;
    if played.is_ok() {
        console.say("Thanks for playing! Game data saved.")?;
    }
    played
}

/// Seat the players and play rounds, recording every balance into `ledger` as soon as it changes.
pub fn play<R: BufRead, W: Write>(console: &mut Console<R, W>, ledger: &mut Ledger,
                                   rules: &TableRules, shoe: Shoe) -> Result<(), Box<dyn Error>> {
    console.say(&"=".repeat(50))?;
    console.say("WELCOME TO BLACKJACK!")?;
    console.say(&"=".repeat(50))?;

    let num_players = console.ask_player_count(rules.max_players)?;
    let mut players = Vec::with_capacity(num_players);
    for seat in 1..=num_players {
        let name = console.ask_name(seat)?;
        let player = ledger.seat(&name, rules.starting_bankroll);
        console.greet(&player, ledger.get(&player.id()).is_some())?;
        ledger.record(&player);
        players.push(player);
    }
    let mut table = Table::new(rules.clone(), shoe, players)?;

    loop {
        for player in table.players_mut() {
            console.ask_bet(player, rules)?;
        }
        let report = table.play_round(console)?;
        console.show_report(&report)?;

        for player in table.players() {
            ledger.record(player);
        }
        info!("Round finished, {} player(s) settled", report.results.len());
        if !console.ask_yes_no("Would you like to play again? (y/n): ")? {
            return Ok(());
        }
        console.say("\nStarting new round...\n")?;
    }
}

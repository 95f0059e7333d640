use std::io::{self, BufRead, Write};

use crate::card::Card;
use crate::player::{Dealer, Player};
use crate::rules::TableRules;
use crate::table::{Decider, RoundReport};

/// Line-oriented prompts over any reader/writer pair, stdin/stdout in the game binary.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line. End of input is an `UnexpectedEof` error.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            match self.ask(prompt)?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Invalid input. Please enter 'y' or 'n'.")?,
            }
        }
    }

    pub fn ask_player_count(&mut self, max: usize) -> io::Result<usize> {
        loop {
            match self.ask(&format!("How many players (1-{})? ", max))?.parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(n),
                Ok(_) => self.say(&format!("Please enter a number between 1 and {}.", max))?,
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    pub fn ask_name(&mut self, seat: usize) -> io::Result<String> {
        loop {
            let name = self.ask(&format!("Enter name for player {}: ", seat))?;
            if !name.is_empty() {
                return Ok(name);
            }
            self.say("Name cannot be empty.")?;
        }
    }

    /// Keep asking until the player places a valid bet. A player with nothing left is offered a
    /// fresh bankroll and sits the round out if they turn it down.
    pub fn ask_bet(&mut self, player: &mut Player, rules: &TableRules) -> io::Result<()> {
        if !player.can_bet() {
            let offer = format!("{}, you are out of money. Would you like {:.2} from an anonymous donor? (y/n): ",
                                player.name(), rules.starting_bankroll);
            if !self.ask_yes_no(&offer)? {
                return self.say(&format!("{} sits this round out.", player.name()));
            }
            player.refill(rules.starting_bankroll);
        }
        loop {
            let prompt = format!("{}, you have {:.2}. How much would you like to bet? ",
                                 player.name(), player.balance());
            let answer = self.ask(&prompt)?;
            let outcome = answer.parse::<f64>()
                .map_err(|_| "Please enter a number.".to_string())
                .and_then(|amount| player.place_bet(amount).map_err(|e| e.to_string()));
            match outcome {
                Ok(()) => return Ok(()),
                Err(msg) => self.say(&format!("Invalid bet: {}", msg))?,
            }
        }
    }

    pub fn greet(&mut self, player: &Player, returning: bool) -> io::Result<()> {
        if returning {
            self.say(&format!("Welcome back, {}! Your balance is {:.2}.", player.name(), player.balance()))
        } else {
            self.say(&format!("Welcome, {}! Starting balance: {:.2}", player.name(), player.balance()))
        }
    }

    /// Print the round's results. A round where nobody bet prints a single line instead.
    pub fn show_report(&mut self, report: &RoundReport) -> io::Result<()> {
        if report.results.is_empty() {
            return self.say("No bets were placed this round.");
        }
        self.say(&"=".repeat(50))?;
        self.say("RESULTS")?;
        self.say(&"=".repeat(50))?;
        self.say(&format!("The dealer has {} for a total of {}.", report.dealer_hand, report.dealer_value))?;
        for result in &report.results {
            self.say(&format!("{} has {} for a total of {}.", result.name, result.hand, result.value))?;
            self.say(&format!("{} {} {:.2}. New balance: {:.2}",
                              result.name, result.outcome, result.net.abs(), result.balance))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Decider for Console<R, W> {
    /// Prompts the player. A closed or broken input stands.
    fn wants_hit(&mut self, player: &Player, _upcard: &Card) -> bool {
        self.say(&player.status()).is_ok()
            && self.ask_yes_no("Do you want to hit? (y/n): ").unwrap_or(false)
    }

    fn dealt(&mut self, players: &[Player], upcard: &Card) {
        let _ = self.say(&format!("The dealer is showing {}.", upcard));
        for player in players.iter().filter(|p| p.is_betting()) {
            let _ = self.say(&player.status());
        }
    }

    fn dealer_reveals(&mut self, dealer: &Dealer) {
        let _ = self.say(&dealer.status());
    }
}

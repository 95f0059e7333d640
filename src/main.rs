use std::io;
use std::process;

use blackjack_shoe::console::Console;
use blackjack_shoe::rules::RULES;
use blackjack_shoe::session;
use blackjack_shoe::shoe::Shoe;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let save_file = std::env::args().nth(1).unwrap_or_else(|| RULES.save_file.to_string());
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    if let Err(e) = session::run(&mut console, &save_file, &RULES, Shoe::new()) {
        error!("Session ended early: {:?}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

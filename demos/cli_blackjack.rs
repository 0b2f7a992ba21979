//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Card, Game, GameOptions, Hand, Phase, RoundError, RoundObserver, RoundView, Status,
};

/// Redraws the table after every transition.
struct Terminal;

impl RoundObserver for Terminal {
    fn on_state_changed(&mut self, view: &RoundView) {
        print_table(view);
    }

    fn on_rejected(&mut self, error: &RoundError) {
        match error.status() {
            Some(status) => println!("{}", colorize(status.message(), "1;33")),
            None => println!("{}", colorize(&error.to_string(), "33")),
        }
    }
}

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);
    game.subscribe(Terminal);

    loop {
        if game.phase() != Phase::PlayerTurn && !game.can_deal() {
            println!("{}", Status::OutOfFunds);
            break;
        }

        println!("{}", format_actions(game.phase(), game.options.bet));
        let action = prompt_line("Action: ");

        // Rejections are reported through the observer.
        let _ = match action.as_str() {
            "d" | "deal" => game.deal().map(|_| ()).map_err(RoundError::from),
            "h" | "hit" => game.hit().map(|_| ()).map_err(RoundError::from),
            "s" | "stand" => game.stand().map(|_| ()).map_err(RoundError::from),
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => {
                println!("Unknown action.");
                continue;
            }
        };
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &RoundView) {
    let dealer_total = if view.reveal_dealer {
        view.dealer_hand.total().to_string()
    } else {
        "?".to_string()
    };
    println!(
        "\nDealer: {} (score {dealer_total})",
        format_dealer(&view.dealer_hand, view.reveal_dealer)
    );
    println!(
        "You:    {} (score {})",
        format_hand(&view.player_hand),
        view.player_hand.total()
    );
    println!("Balance: ${}", view.balance);
    println!("{}\n", colorize(view.status.message(), "1;33"));
}

fn format_actions(phase: Phase, bet: usize) -> String {
    let in_turn = phase == Phase::PlayerTurn;
    let parts = [
        format_action(&format!("deal (${bet})"), "d", phase.accepts_deal()),
        format_action("hit", "h", in_turn),
        format_action("stand", "s", in_turn),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &Hand, reveal: bool) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if reveal {
        format_hand(dealer)
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let code = if card.is_red() { "31" } else { "37" };
    colorize(&card.to_string(), code)
}

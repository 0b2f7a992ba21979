//! State-change notifications for presentation layers.

use alloc::boxed::Box;
use core::fmt;

use crate::error::RoundError;
use crate::game::Phase;
use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};

/// Status line describing the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Waiting for the first deal.
    Ready,
    /// Player must hit or stand.
    PlayerTurn,
    /// Dealer is drawing.
    DealerTurn,
    /// Round is over.
    Settled(Outcome),
    /// The balance no longer covers the bet.
    OutOfFunds,
}

impl Status {
    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Ready => "Ready to play? Press Deal.",
            Self::PlayerTurn => "Your Turn...",
            Self::DealerTurn => "Dealer's Turn...",
            Self::Settled(outcome) => outcome.message(),
            Self::OutOfFunds => "Not enough money! Game Over.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything a presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Current phase.
    pub phase: Phase,
    /// The player's cards.
    pub player_hand: Hand,
    /// The dealer's cards, including the hole card.
    pub dealer_hand: Hand,
    /// Whether the dealer's hole card may be shown.
    pub reveal_dealer: bool,
    /// Player balance after this transition.
    pub balance: usize,
    /// Bet riding on the round (zero while idle).
    pub current_bet: usize,
    /// Status line.
    pub status: Status,
    /// Settlement details, once the round is settled.
    pub result: Option<RoundResult>,
}

impl RoundView {
    /// Dealer total as the player may see it.
    #[must_use]
    pub fn dealer_visible_total(&self) -> u8 {
        self.dealer_hand.visible_total(self.reveal_dealer)
    }
}

/// Receives a [`RoundView`] after every transition.
pub trait RoundObserver {
    /// Called after the round changes state.
    fn on_state_changed(&mut self, view: &RoundView);

    /// Called when a command is rejected. State is unchanged.
    fn on_rejected(&mut self, _error: &RoundError) {}
}

impl<F: FnMut(&RoundView)> RoundObserver for F {
    fn on_state_changed(&mut self, view: &RoundView) {
        self(view);
    }
}

/// Boxed observer stored by the game.
pub type BoxedObserver = Box<dyn RoundObserver + Send>;

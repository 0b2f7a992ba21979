//! Round outcome types.

use core::fmt;

/// How a settled round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a natural 21.
    Blackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beat the dealer.
    Win,
    /// Dealer total beat the player.
    Lose,
    /// Totals were equal.
    Push,
}

impl Outcome {
    /// Gross payout multiplier applied to the bet, stake included.
    ///
    /// `blackjack_pays` is the net ratio paid on a natural.
    #[must_use]
    pub fn multiplier(self, blackjack_pays: f64) -> f64 {
        match self {
            Self::Blackjack => 1.0 + blackjack_pays,
            Self::DealerBust | Self::Win => 2.0,
            Self::Push => 1.0,
            Self::PlayerBust | Self::Lose => 0.0,
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::DealerBust | Self::Win)
    }

    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You Win!",
            Self::PlayerBust => "BUST! Dealer Wins.",
            Self::DealerBust => "Dealer Busts! You Win!",
            Self::Win => "You Win!",
            Self::Lose => "Dealer Wins.",
            Self::Push => "Push (Tie).",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The bet taken at the deal.
    pub bet: usize,
    /// Amount credited back to the balance.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
}

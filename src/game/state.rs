//! Round phase.

use core::fmt;

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No round has been dealt yet.
    Idle,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Payout applied; waiting for the next deal.
    Settled,
}

impl Phase {
    /// Returns whether a new round may be dealt.
    #[must_use]
    pub const fn accepts_deal(self) -> bool {
        matches!(self, Self::Idle | Self::Settled)
    }

    /// Returns whether the dealer's hole card is visible.
    #[must_use]
    pub const fn reveals_dealer(self) -> bool {
        !matches!(self, Self::PlayerTurn)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::Settled => "settled",
        })
    }
}

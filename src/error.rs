//! Error types for round commands.

use thiserror::Error;

use crate::game::Phase;
use crate::observer::Status;

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A round is still being played.
    #[error("cannot deal during {0}")]
    IllegalTransition(Phase),
    /// The balance does not cover the bet.
    #[error("insufficient funds: balance {balance} is below the bet of {bet}")]
    InsufficientFunds {
        /// Balance at the time of the request.
        balance: usize,
        /// Bet required to start a round.
        bet: usize,
    },
    /// The table is configured with a zero bet.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is only legal during the player's turn.
    #[error("action is illegal during {0}")]
    IllegalTransition(Phase),
}

/// Any rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Rejected deal.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Rejected hit or stand.
    #[error(transparent)]
    Action(#[from] ActionError),
}

impl RoundError {
    /// Status line a presentation layer shows for this rejection, if any.
    ///
    /// Only a deal the balance cannot cover has one; other rejections leave
    /// the current status in place.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DealError, RoundError, Status};
    ///
    /// let error = RoundError::from(DealError::InsufficientFunds { balance: 50, bet: 100 });
    /// assert_eq!(error.status(), Some(Status::OutOfFunds));
    /// assert_eq!(RoundError::from(DealError::ZeroBet).status(), None);
    /// ```
    #[must_use]
    pub const fn status(&self) -> Option<Status> {
        match self {
            Self::Deal(DealError::InsufficientFunds { .. }) => Some(Status::OutOfFunds),
            _ => None,
        }
    }
}

use alloc::vec::Vec;

use crate::error::ActionError;
use crate::observer::{RoundView, Status};
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::rng::RandomSource;

use super::{Game, Phase, Table};

impl<R: RandomSource> Table<R> {
    const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.phase {
            Phase::PlayerTurn => Ok(()),
            phase => Err(ActionError::IllegalTransition(phase)),
        }
    }

    fn hit(
        &mut self,
        options: &GameOptions,
        views: &mut Vec<RoundView>,
    ) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.player.add_card(self.deck.deal());
        self.enter(Phase::PlayerTurn, Status::PlayerTurn, views);

        // A bust ends the round without playing the dealer.
        if self.player.is_bust() {
            self.settle(Outcome::PlayerBust, options, views);
        }

        Ok(())
    }

    fn stand(
        &mut self,
        options: &GameOptions,
        views: &mut Vec<RoundView>,
    ) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.play_dealer(options, views);
        let outcome = self.compare();
        self.settle(outcome, options, views);

        Ok(())
    }
}

impl<R: RandomSource> Game<R> {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 settles the round as a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player's turn.
    pub fn hit(&self) -> Result<RoundView, ActionError> {
        self.run(Table::hit)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// The dealer reveals the hole card, draws to 17 and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the player's turn.
    pub fn stand(&self) -> Result<RoundView, ActionError> {
        self.run(Table::stand)
    }
}

use alloc::vec::Vec;

use crate::error::DealError;
use crate::observer::{RoundView, Status};
use crate::options::GameOptions;
use crate::result::Outcome;
use crate::rng::RandomSource;

use super::{Game, Phase, Table};

impl<R: RandomSource> Table<R> {
    fn deal_round(
        &mut self,
        options: &GameOptions,
        views: &mut Vec<RoundView>,
    ) -> Result<(), DealError> {
        if !self.phase.accepts_deal() {
            return Err(DealError::IllegalTransition(self.phase));
        }

        let bet = options.bet;
        if bet == 0 {
            return Err(DealError::ZeroBet);
        }
        if self.balance < bet {
            return Err(DealError::InsufficientFunds {
                balance: self.balance,
                bet,
            });
        }

        self.balance -= bet;
        self.current_bet = bet;
        self.result = None;
        self.player.clear();
        self.dealer.clear();

        // Player, dealer up card, player, dealer hole card.
        for _ in 0..2 {
            self.player.add_card(self.deck.deal());
            self.dealer.add_card(self.deck.deal());
        }

        self.enter(Phase::PlayerTurn, Status::PlayerTurn, views);

        if self.player.is_natural() {
            self.settle(Outcome::Blackjack, options, views);
        }

        Ok(())
    }
}

impl<R: RandomSource> Game<R> {
    /// Takes the bet and deals a new round.
    ///
    /// Clears both hands and deals two cards each, alternating player and
    /// dealer. A natural 21 for the player settles the round at once.
    ///
    /// Returns the view after the last transition.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is still in play, the configured bet is
    /// zero, or the balance does not cover the bet. State is left unchanged.
    pub fn deal(&self) -> Result<RoundView, DealError> {
        self.run(Table::deal_round)
    }
}

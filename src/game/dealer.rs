use alloc::vec::Vec;

use crate::hand::{BLACKJACK, Hand};
use crate::observer::{RoundView, Status};
use crate::options::{GameOptions, RoundingMode};
use crate::result::{Outcome, RoundResult};
use crate::rng::RandomSource;

use super::{Phase, Table};

/// Dealer draws below this total.
const DEALER_STANDS_ON: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Returns whether the dealer must take another card.
///
/// With `stand_on_soft_17` the dealer compares the adjusted total against 17
/// directly; otherwise a soft 17 draws.
fn dealer_must_draw(dealer: &Hand, stand_on_soft_17: bool) -> bool {
    let total = dealer.total();
    total < DEALER_STANDS_ON
        || (total == DEALER_STANDS_ON && dealer.is_soft() && !stand_on_soft_17)
}

/// Amount credited back for `outcome` on a bet of `bet`.
fn payout(bet: usize, outcome: Outcome, options: &GameOptions) -> usize {
    match outcome {
        Outcome::Blackjack => {
            #[expect(
                clippy::cast_precision_loss,
                reason = "f64 has sufficient precision for monetary values"
            )]
            let gross = (bet as f64) * outcome.multiplier(options.blackjack_pays);
            round_amount(gross, options.rounding_blackjack)
        }
        Outcome::DealerBust | Outcome::Win => bet.saturating_mul(2),
        Outcome::Push => bet,
        Outcome::PlayerBust | Outcome::Lose => 0,
    }
}

impl<R: RandomSource> Table<R> {
    /// Reveals the hole card and draws until the dealer stands.
    pub(super) fn play_dealer(&mut self, options: &GameOptions, views: &mut Vec<RoundView>) {
        self.enter(Phase::DealerTurn, Status::DealerTurn, views);

        while dealer_must_draw(&self.dealer, options.stand_on_soft_17) {
            self.dealer.add_card(self.deck.deal());
            views.push(self.view());
        }
    }

    /// Compares the final totals after the dealer has played.
    pub(super) fn compare(&self) -> Outcome {
        let player = self.player.total();
        let dealer = self.dealer.total();

        if dealer > BLACKJACK {
            Outcome::DealerBust
        } else if player > dealer {
            Outcome::Win
        } else if player < dealer {
            Outcome::Lose
        } else {
            Outcome::Push
        }
    }

    /// Credits the payout and moves to `Settled`.
    pub(super) fn settle(
        &mut self,
        outcome: Outcome,
        options: &GameOptions,
        views: &mut Vec<RoundView>,
    ) {
        let bet = self.current_bet;
        let payout = payout(bet, outcome, options);
        self.balance = self.balance.saturating_add(payout);

        let net = isize::try_from(payout)
            .unwrap_or(isize::MAX)
            .saturating_sub(isize::try_from(bet).unwrap_or(isize::MAX));

        self.result = Some(RoundResult {
            outcome,
            bet,
            payout,
            net,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
        });
        self.enter(Phase::Settled, Status::Settled(outcome), views);
    }
}

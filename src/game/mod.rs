//! Round controller.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::observer::{BoxedObserver, RoundObserver, RoundView, Status};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::rng::{RandomSource, SeededRng};
use crate::sync::Mutex;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::Phase;

/// Mutable state of one table. Always accessed under a single lock.
#[derive(Debug)]
struct Table<R> {
    deck: Deck<R>,
    phase: Phase,
    balance: usize,
    current_bet: usize,
    player: Hand,
    dealer: Hand,
    status: Status,
    result: Option<RoundResult>,
}

impl<R: RandomSource> Table<R> {
    fn view(&self) -> RoundView {
        RoundView {
            phase: self.phase,
            player_hand: self.player.clone(),
            dealer_hand: self.dealer.clone(),
            reveal_dealer: self.phase.reveals_dealer(),
            balance: self.balance,
            current_bet: self.current_bet,
            status: self.status,
            result: self.result,
        }
    }

    /// Moves to `phase` and queues a view for observers.
    fn enter(&mut self, phase: Phase, status: Status, views: &mut Vec<RoundView>) {
        self.phase = phase;
        self.status = status;
        views.push(self.view());
    }
}

/// A single-player blackjack table.
///
/// The game owns the deck, both hands, the balance and the bet. Commands
/// ([`deal`](Self::deal), [`hit`](Self::hit), [`stand`](Self::stand)) are
/// applied one at a time under one lock; every transition they cause is
/// reported to the subscribed [`RoundObserver`]s once the table is unlocked,
/// before the next command is applied.
///
/// Observers must not issue commands from inside a callback.
pub struct Game<R = SeededRng> {
    /// Game options.
    pub options: GameOptions,
    table: Mutex<Table<R>>,
    observers: Mutex<Vec<BoxedObserver>>,
}

impl Game<SeededRng> {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Idle);
    /// assert_eq!(game.balance(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, SeededRng::new(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new game that shuffles with `rng`.
    #[must_use]
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self::with_deck(options, Deck::new(rng))
    }

    /// Creates a new game dealing from `deck`.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck<R>) -> Self {
        let table = Table {
            deck,
            phase: Phase::Idle,
            balance: options.initial_balance,
            current_bet: 0,
            player: Hand::new(),
            dealer: Hand::new(),
            status: Status::Ready,
            result: None,
        };

        Self {
            options,
            table: Mutex::new(table),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Registers an observer and immediately sends it the current view.
    ///
    /// No command can run between the snapshot and the registration, so the
    /// observer sees every later transition exactly once.
    pub fn subscribe(&self, observer: impl RoundObserver + Send + 'static) {
        let mut observers = self.observers.lock();
        let view = self.view();
        let mut observer: BoxedObserver = Box::new(observer);
        observer.on_state_changed(&view);
        observers.push(observer);
    }

    /// Returns a snapshot of the table.
    pub fn view(&self) -> RoundView {
        self.table.lock().view()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.table.lock().phase
    }

    /// Returns the player's balance.
    pub fn balance(&self) -> usize {
        self.table.lock().balance
    }

    /// Returns the bet riding on the current round.
    pub fn current_bet(&self) -> usize {
        self.table.lock().current_bet
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.table.lock().player.clone()
    }

    /// Returns a clone of the dealer's hand, hole card included.
    pub fn dealer_hand(&self) -> Hand {
        self.table.lock().dealer.clone()
    }

    /// Returns the result of the last settled round.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.table.lock().result
    }

    /// Returns the number of cards left before the deck refills.
    pub fn cards_remaining(&self) -> usize {
        self.table.lock().deck.len()
    }

    /// Returns whether a deal would currently be accepted.
    pub fn can_deal(&self) -> bool {
        let table = self.table.lock();
        table.phase.accepts_deal() && self.options.bet > 0 && table.balance >= self.options.bet
    }

    /// Replaces the remaining deck so that `draws[0]` is dealt next.
    ///
    /// Once the stacked cards run out the deck refills and shuffles as usual.
    pub fn stack_deck(&self, draws: &[Card]) {
        self.table.lock().deck.stack(draws);
    }

    /// Applies one command under the table lock, then reports the queued
    /// views or the rejection to observers.
    ///
    /// The observer list is locked first and held until every view is
    /// delivered, so observers see commands in the order they were applied.
    fn run<E>(
        &self,
        command: impl FnOnce(&mut Table<R>, &GameOptions, &mut Vec<RoundView>) -> Result<(), E>,
    ) -> Result<RoundView, E>
    where
        E: Copy + Into<RoundError>,
    {
        let mut views = Vec::new();
        let mut observers = self.observers.lock();
        let mut table = self.table.lock();
        let outcome = command(&mut *table, &self.options, &mut views);
        let current = table.view();
        drop(table);

        match outcome {
            Ok(()) => {
                for observer in observers.iter_mut() {
                    for view in &views {
                        observer.on_state_changed(view);
                    }
                }
                Ok(current)
            }
            Err(err) => {
                let error = err.into();
                for observer in observers.iter_mut() {
                    observer.on_rejected(&error);
                }
                Err(err)
            }
        }
    }
}

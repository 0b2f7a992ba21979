//! Game integration tests.

use std::sync::mpsc::{self, Receiver, Sender};

use bjround::{
    ActionError, Card, DECK_SIZE, DealError, Game, GameOptions, Outcome, Phase, Rank,
    RoundError, RoundObserver, RoundView, Status, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

enum Event {
    View(RoundView),
    Rejected(RoundError),
}

struct Recorder(Sender<Event>);

impl RoundObserver for Recorder {
    fn on_state_changed(&mut self, view: &RoundView) {
        let _ = self.0.send(Event::View(view.clone()));
    }

    fn on_rejected(&mut self, error: &RoundError) {
        let _ = self.0.send(Event::Rejected(*error));
    }
}

fn recorded(game: &Game) -> Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    game.subscribe(Recorder(tx));
    // Drop the view sent on subscription.
    let _ = rx.try_recv();
    rx
}

fn views(rx: &Receiver<Event>) -> Vec<RoundView> {
    rx.try_iter()
        .filter_map(|event| match event {
            Event::View(view) => Some(view),
            Event::Rejected(_) => None,
        })
        .collect()
}

fn new_game() -> Game {
    Game::new(GameOptions::default(), 42)
}

#[test]
fn natural_blackjack_settles_on_the_deal() {
    let game = new_game();
    let rx = recorded(&game);

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts), // player
        card(Rank::Five, Suit::Clubs), // dealer up
        card(Rank::Ace, Suit::Spades), // player
        card(Rank::Nine, Suit::Diamonds), // dealer hole
    ]);

    let view = game.deal().unwrap();
    assert_eq!(view.phase, Phase::Settled);
    assert_eq!(view.status, Status::Settled(Outcome::Blackjack));
    assert_eq!(game.balance(), 1150);

    let result = game.last_result().unwrap();
    assert_eq!(result.payout, 250);
    assert_eq!(result.net, 150);
    assert_eq!(result.player_total, 21);

    let seen = views(&rx);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].phase, Phase::PlayerTurn);
    assert!(!seen[0].reveal_dealer);
    assert_eq!(seen[0].balance, 900);
    assert_eq!(seen[1].phase, Phase::Settled);
    assert!(seen[1].reveal_dealer);
}

#[test]
fn hit_to_bust_loses_the_bet() {
    let game = new_game();

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts), // player
        card(Rank::Nine, Suit::Clubs), // dealer up
        card(Rank::Two, Suit::Spades), // player
        card(Rank::Seven, Suit::Clubs), // dealer hole
        card(Rank::Jack, Suit::Hearts), // player hit
    ]);

    game.deal().unwrap();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.player_hand().total(), 12);

    let view = game.hit().unwrap();
    assert_eq!(view.phase, Phase::Settled);
    assert_eq!(view.player_hand.total(), 22);
    assert_eq!(view.status, Status::Settled(Outcome::PlayerBust));
    assert_eq!(view.dealer_hand.len(), 2);

    let result = game.last_result().unwrap();
    assert_eq!(result.payout, 0);
    assert_eq!(result.net, -100);
    assert_eq!(game.balance(), 900);
}

#[test]
fn hit_below_21_keeps_player_turn() {
    let game = new_game();
    let rx = recorded(&game);

    game.stack_deck(&[
        card(Rank::Two, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Four, Suit::Hearts),
    ]);

    game.deal().unwrap();
    let view = game.hit().unwrap();
    assert_eq!(view.phase, Phase::PlayerTurn);
    assert_eq!(view.player_hand.len(), 3);
    assert_eq!(view.player_hand.total(), 9);
    assert_eq!(view.dealer_visible_total(), 9);

    let seen = views(&rx);
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|v| !v.reveal_dealer));
}

#[test]
fn stand_on_18_against_dealer_19_loses() {
    let game = new_game();
    let rx = recorded(&game);

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts), // player
        card(Rank::Six, Suit::Clubs), // dealer up
        card(Rank::Eight, Suit::Spades), // player
        card(Rank::Three, Suit::Clubs), // dealer hole
        card(Rank::King, Suit::Diamonds), // dealer draw
    ]);

    game.deal().unwrap();
    let view = game.stand().unwrap();
    assert_eq!(view.phase, Phase::Settled);
    assert_eq!(view.dealer_hand.total(), 19);
    assert_eq!(view.status, Status::Settled(Outcome::Lose));
    assert_eq!(game.last_result().unwrap().payout, 0);
    assert_eq!(game.balance(), 900);

    let phases: Vec<Phase> = views(&rx).iter().map(|v| v.phase).collect();
    assert_eq!(
        phases,
        [
            Phase::PlayerTurn,
            Phase::DealerTurn,
            Phase::DealerTurn,
            Phase::Settled
        ]
    );
}

#[test]
fn equal_totals_push() {
    let game = new_game();

    game.stack_deck(&[
        card(Rank::King, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
    ]);

    game.deal().unwrap();
    let view = game.stand().unwrap();
    assert_eq!(view.status, Status::Settled(Outcome::Push));

    let result = game.last_result().unwrap();
    assert_eq!(result.payout, 100);
    assert_eq!(result.net, 0);
    assert_eq!(game.balance(), 1000);
}

#[test]
fn dealer_bust_pays_double() {
    let game = new_game();

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Queen, Suit::Diamonds),
    ]);

    game.deal().unwrap();
    let view = game.stand().unwrap();
    assert_eq!(view.status, Status::Settled(Outcome::DealerBust));
    assert_eq!(view.dealer_hand.total(), 26);
    assert_eq!(game.balance(), 1100);
}

#[test]
fn higher_total_wins() {
    let game = new_game();

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Eight, Suit::Clubs),
    ]);

    game.deal().unwrap();
    let view = game.stand().unwrap();
    assert_eq!(view.status, Status::Settled(Outcome::Win));
    assert_eq!(view.dealer_hand.len(), 2);
    assert_eq!(game.balance(), 1100);
}

#[test]
fn dealer_stands_on_soft_17_by_default() {
    let game = new_game();

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Six, Suit::Clubs),
    ]);

    game.deal().unwrap();
    let view = game.stand().unwrap();
    assert_eq!(view.dealer_hand.len(), 2);
    assert_eq!(view.dealer_hand.total(), 17);
    assert_eq!(view.status, Status::Settled(Outcome::Win));
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let options = GameOptions::default().with_stand_on_soft_17(false);
    let game = Game::new(options, 3);

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
    ]);

    game.deal().unwrap();
    let view = game.stand().unwrap();
    assert_eq!(view.dealer_hand.len(), 3);
    assert_eq!(view.dealer_hand.total(), 19);
    assert_eq!(view.status, Status::Settled(Outcome::Lose));
}

#[test]
fn insufficient_funds_leaves_state_unchanged() {
    let options = GameOptions::default().with_initial_balance(50);
    let game = Game::new(options, 1);
    let rx = recorded(&game);

    assert!(!game.can_deal());
    assert_eq!(
        game.deal().unwrap_err(),
        DealError::InsufficientFunds {
            balance: 50,
            bet: 100
        }
    );
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.balance(), 50);
    assert!(game.player_hand().is_empty());

    let events: Vec<Event> = rx.try_iter().collect();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Event::Rejected(RoundError::Deal(DealError::InsufficientFunds { .. }))
    ));
}

#[test]
fn zero_bet_is_rejected() {
    let game = Game::new(GameOptions::default().with_bet(0), 1);
    assert_eq!(game.deal().unwrap_err(), DealError::ZeroBet);
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn actions_rejected_outside_player_turn() {
    let game = new_game();
    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::IllegalTransition(Phase::Idle)
    );
    assert_eq!(
        game.stand().unwrap_err(),
        ActionError::IllegalTransition(Phase::Idle)
    );

    game.stack_deck(&[
        card(Rank::King, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
    ]);
    game.deal().unwrap();
    assert_eq!(
        game.deal().unwrap_err(),
        DealError::IllegalTransition(Phase::PlayerTurn)
    );

    game.stand().unwrap();
    let balance = game.balance();
    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::IllegalTransition(Phase::Settled)
    );
    assert_eq!(game.balance(), balance);
    assert_eq!(game.phase(), Phase::Settled);
}

#[test]
fn next_deal_clears_hands() {
    let game = new_game();

    game.stack_deck(&[
        card(Rank::Two, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
    ]);
    game.deal().unwrap();
    game.hit().unwrap();
    game.hit().unwrap();
    game.stand().unwrap();
    assert_eq!(game.player_hand().len(), 4);
    assert!(game.last_result().is_some());

    game.stack_deck(&[
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Seven, Suit::Clubs),
    ]);
    let view = game.deal().unwrap();
    assert_eq!(view.phase, Phase::PlayerTurn);
    assert_eq!(view.player_hand.len(), 2);
    assert_eq!(view.player_hand.total(), 5);
    assert_eq!(view.dealer_hand.len(), 2);
    assert!(view.result.is_none());
    assert_eq!(view.current_bet, 100);
}

#[test]
fn exhausted_deck_refills_mid_round() {
    let game = new_game();

    game.stack_deck(&[
        card(Rank::Two, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
        card(Rank::Jack, Suit::Clubs),
    ]);
    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), 0);

    let view = game.hit().unwrap();
    assert_eq!(view.player_hand.len(), 3);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 1);
}

#[test]
fn balance_runs_out_after_losses() {
    let options = GameOptions::default().with_initial_balance(200);
    let game = Game::new(options, 8);

    for _ in 0..2 {
        game.stack_deck(&[
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
        ]);
        game.deal().unwrap();
        game.stand().unwrap();
    }

    assert_eq!(game.balance(), 0);
    let error = game.deal().unwrap_err();
    assert!(matches!(error, DealError::InsufficientFunds { balance: 0, .. }));
    assert_eq!(RoundError::from(error).status(), Some(Status::OutOfFunds));
    assert_eq!(Status::OutOfFunds.message(), "Not enough money! Game Over.");
}

#[test]
fn winning_at_maximum_balance_saturates() {
    let options = GameOptions::default().with_initial_balance(usize::MAX);
    let game = Game::new(options, 8);

    game.stack_deck(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Eight, Suit::Clubs),
    ]);
    game.deal().unwrap();
    let view = game.stand().unwrap();
    assert_eq!(view.status, Status::Settled(Outcome::Win));
    assert_eq!(game.balance(), usize::MAX);
    assert_eq!(game.last_result().unwrap().net, 100);
}

#[test]
fn seeded_games_replay_identically() {
    let a = Game::new(GameOptions::default(), 1234);
    let b = Game::new(GameOptions::default(), 1234);

    let va = a.deal().unwrap();
    let vb = b.deal().unwrap();
    assert_eq!(va.player_hand, vb.player_hand);
    assert_eq!(va.dealer_hand, vb.dealer_hand);
}

#[test]
fn subscribe_sends_current_view() {
    let game = new_game();
    let (tx, rx) = mpsc::channel();
    game.subscribe(move |view: &RoundView| {
        let _ = tx.send(view.clone());
    });

    let first = rx.try_recv().unwrap();
    assert_eq!(first.phase, Phase::Idle);
    assert_eq!(first.status, Status::Ready);
    assert_eq!(first.balance, 1000);
    assert_eq!(first.current_bet, 0);
}

#[test]
fn unshuffled_deck_deals_from_the_top_of_spades() {
    let deck = bjround::Deck::new(bjround::NoShuffle);
    let game = Game::with_deck(GameOptions::default(), deck);

    // A♠ to the player, K♠ to the dealer, Q♠ to the player, J♠ to the dealer.
    let view = game.deal().unwrap();
    assert_eq!(view.phase, Phase::Settled);
    let result = view.result.unwrap();
    assert_eq!(result.outcome, Outcome::Blackjack);
    assert!(result.outcome.is_win());
    assert_eq!(result.dealer_total, 20);
    assert_eq!(game.balance(), 1150);
}

const fn phase_rank(phase: Phase) -> u8 {
    match phase {
        Phase::Idle => 0,
        Phase::PlayerTurn => 1,
        Phase::DealerTurn => 2,
        Phase::Settled => 3,
    }
}

#[test]
fn concurrent_commands_are_reported_in_order() {
    let game = new_game();
    let rx = recorded(&game);

    for _ in 0..200 {
        game.stack_deck(&[
            card(Rank::Two, Suit::Hearts),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Three, Suit::Spades),
            card(Rank::Six, Suit::Clubs),
            card(Rank::Four, Suit::Hearts),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
        ]);
        game.deal().unwrap();
        let _ = views(&rx);

        std::thread::scope(|scope| {
            scope.spawn(|| game.hit());
            scope.spawn(|| game.stand());
        });

        let seen = views(&rx);
        assert!(!seen.is_empty());
        assert_eq!(seen.last().unwrap().phase, Phase::Settled);
        assert!(
            seen.windows(2)
                .all(|pair| phase_rank(pair[0].phase) <= phase_rank(pair[1].phase)),
            "views out of order: {:?}",
            seen.iter().map(|v| v.phase).collect::<Vec<_>>()
        );
        assert_eq!(
            seen.iter().filter(|v| v.phase == Phase::Settled).count(),
            1
        );
    }
}

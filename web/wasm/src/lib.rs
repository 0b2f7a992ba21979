use std::sync::{Arc, Mutex, PoisonError};

use bjround::{
    Card, Game, GameOptions, Hand, Outcome, Phase, RoundError, RoundResult, RoundView, Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

type Transitions = Arc<Mutex<Vec<RoundView>>>;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    transitions: Transitions,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let transitions = Transitions::default();
        let game = Game::new(GameOptions::default(), u64::from(seed));

        let sink = Arc::clone(&transitions);
        game.subscribe(move |view: &RoundView| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(view.clone());
        });
        take(&transitions);

        Self { game, transitions }
    }

    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    /// Deals a round and returns every intermediate view.
    pub fn deal(&self) -> Result<JsValue, JsValue> {
        self.game.deal().map_err(js_err)?;
        self.drain()
    }

    pub fn hit(&self) -> Result<JsValue, JsValue> {
        self.game.hit().map_err(js_err)?;
        self.drain()
    }

    pub fn stand(&self) -> Result<JsValue, JsValue> {
        self.game.stand().map_err(js_err)?;
        self.drain()
    }

    pub fn can_deal(&self) -> bool {
        self.game.can_deal()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsView::from(&self.game.view()))
    }
}

impl WasmGame {
    fn drain(&self) -> Result<JsValue, JsValue> {
        let views: Vec<JsView> = take(&self.transitions).iter().map(JsView::from).collect();
        to_js_value(&views)
    }
}

fn take(transitions: &Transitions) -> Vec<RoundView> {
    std::mem::take(&mut *transitions.lock().unwrap_or_else(PoisonError::into_inner))
}

#[derive(Serialize)]
struct JsView {
    phase: &'static str,
    player: JsHand,
    dealer: JsHand,
    reveal_dealer: bool,
    balance: u32,
    bet: u32,
    status: &'static str,
    result: Option<JsResult>,
}

impl From<&RoundView> for JsView {
    fn from(view: &RoundView) -> Self {
        Self {
            phase: phase_to_str(view.phase),
            player: JsHand::from_hand(&view.player_hand, true),
            dealer: JsHand::from_hand(&view.dealer_hand, view.reveal_dealer),
            reveal_dealer: view.reveal_dealer,
            balance: view.balance as u32,
            bet: view.current_bet as u32,
            status: view.status.message(),
            result: view.result.map(JsResult::from),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    label: String,
    red: bool,
}

#[derive(Serialize)]
struct JsHand {
    /// Concealed cards are `None`.
    cards: Vec<Option<JsCard>>,
    total: u8,
}

impl JsHand {
    fn from_hand(hand: &Hand, reveal: bool) -> Self {
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (reveal || index == 0).then(|| card_to_js(*card)))
            .collect();

        Self {
            cards,
            total: hand.visible_total(reveal),
        }
    }
}

#[derive(Serialize)]
struct JsResult {
    outcome: &'static str,
    bet: u32,
    payout: u32,
    net: i32,
    player_total: u8,
    dealer_total: u8,
}

impl From<RoundResult> for JsResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            payout: result.payout as u32,
            net: result.net as i32,
            player_total: result.player_total,
            dealer_total: result.dealer_total,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        label: card.to_string(),
        red: card.is_red(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settled => "Settled",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Blackjack => "Blackjack",
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::Win => "Win",
        Outcome::Lose => "Lose",
        Outcome::Push => "Push",
    }
}

fn js_err(err: impl Into<RoundError>) -> JsValue {
    let err = err.into();
    match err.status() {
        Some(status) => JsValue::from_str(status.message()),
        None => JsValue::from_str(&err.to_string()),
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

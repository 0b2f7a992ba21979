//! Table configuration.

/// Balance a new game starts with.
pub const DEFAULT_BALANCE: usize = 1000;

/// Fixed bet taken at the start of every round.
pub const DEFAULT_BET: usize = 100;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_balance(500)
///     .with_bet(25)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Balance the player starts with.
    pub initial_balance: usize,
    /// Bet placed on every deal.
    pub bet: usize,
    /// Net payout ratio for a natural blackjack (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether the dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_balance: DEFAULT_BALANCE,
            bet: DEFAULT_BET,
            blackjack_pays: 1.5,
            stand_on_soft_17: true,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_balance(250);
    /// assert_eq!(options.initial_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_initial_balance(mut self, balance: usize) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Sets the bet placed on every deal.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet(10);
    /// assert_eq!(options.bet, 10);
    /// ```
    #[must_use]
    pub const fn with_bet(mut self, bet: usize) -> Self {
        self.bet = bet;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}

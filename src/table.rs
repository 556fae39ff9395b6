use crate::cards::Card;
use crate::deal::{deal_hands_with, DealError, Hand, HAND_SIZE};
use crate::deck::{Deck, DeckError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Most seats a single 108-card deck supports at the default hand size.
pub const MAX_PLAYERS: usize = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableError {
    #[error("a table needs at least one player")]
    NoPlayers,
    #[error("too many players: max {max}, got {got}")]
    TooManyPlayers { max: usize, got: usize },
    #[error("hand size must be at least one card")]
    ZeroHandSize,
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Table settings chosen before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub players: usize,
    pub hand_size: usize,
    /// Fixed shuffle seed. Each round shuffles on its own ChaCha stream of this
    /// seed, so rounds differ while the whole game stays reproducible. `None`
    /// seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { players: 4, hand_size: HAND_SIZE, seed: None }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        if self.players == 0 {
            return Err(TableError::NoPlayers);
        }
        if self.players > MAX_PLAYERS {
            return Err(TableError::TooManyPlayers { max: MAX_PLAYERS, got: self.players });
        }
        if self.hand_size == 0 {
            return Err(TableError::ZeroHandSize);
        }
        Ok(())
    }

    /// Pull out-of-range settings back to the nearest valid value.
    pub fn clamped(self) -> Self {
        Self {
            players: self.players.clamp(1, MAX_PLAYERS),
            hand_size: self.hand_size.max(1),
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) hand: Hand,
    pub(crate) round: u32,
    pub(crate) has_gone_out: bool,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hand: Hand::default(),
            round: 1,
            has_gone_out: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The phase this player is working on.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn has_gone_out(&self) -> bool {
        self.has_gone_out
    }

    pub fn set_gone_out(&mut self, gone_out: bool) {
        self.has_gone_out = gone_out;
    }

    pub fn advance_round(&mut self) {
        self.round += 1;
    }
}

/// Seats, the draw pile and the round counter. Each round starts from a fresh
/// deck; the cards nobody was dealt become the draw pile.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Table {
    pub(crate) players: Vec<Player>,
    pub(crate) draw_pile: Deck,
    pub(crate) round: u32,
    pub(crate) hand_size: usize,
    pub(crate) seed: Option<u64>,
}

impl Table {
    /// Seat one player per name with ids `p1`, `p2`, ...
    ///
    /// ```
    /// use rummy_rs::table::Table;
    ///
    /// let mut table = Table::new(["Ana", "Bo", "Cy"]).unwrap();
    /// table.start_round_with(&mut rand::rng()).unwrap();
    /// assert_eq!(table.players()[2].hand().len(), 10);
    /// assert_eq!(table.draw_pile().len(), 78);
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(format!("p{}", i + 1), name))
            .collect();
        let config = TableConfig { players: players.len(), ..TableConfig::default() };
        config.validate()?;
        Ok(Self {
            players,
            draw_pile: Deck::default(),
            round: 0,
            hand_size: config.hand_size,
            seed: None,
        })
    }

    pub fn from_config(config: &TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::seated(config))
    }

    /// Seat players for `config` without validating it.
    pub(crate) fn seated(config: &TableConfig) -> Self {
        let players =
            (1..=config.players).map(|i| Player::new(format!("p{i}"), format!("P{i}"))).collect();
        Self {
            players,
            draw_pile: Deck::default(),
            round: 0,
            hand_size: config.hand_size,
            seed: config.seed,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn draw_pile(&self) -> &Deck {
        &self.draw_pile
    }

    /// Rounds dealt so far; 0 before the first deal.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Deal a new round, shuffling with the configured seed if there is one
    /// and the operating system otherwise.
    pub fn start_round(&mut self) -> Result<(), TableError> {
        let mut deck = Deck::generate();
        match self.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(u64::from(self.round));
                deck.shuffle_with(&mut rng)?;
            }
            None => deck.shuffle_os()?,
        }
        self.install(deck)
    }

    /// Deal a new round shuffled by `rng`.
    pub fn start_round_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), TableError> {
        let mut deck = Deck::generate();
        deck.shuffle_with(rng)?;
        self.install(deck)
    }

    fn install(&mut self, deck: Deck) -> Result<(), TableError> {
        let deal = deal_hands_with(deck, self.players.len(), self.hand_size)?;
        for (player, hand) in self.players.iter_mut().zip(deal.hands) {
            player.hand = hand;
            player.has_gone_out = false;
        }
        self.draw_pile = deal.remaining;
        self.round += 1;
        info!(round = self.round, players = self.players.len(), "started round");
        Ok(())
    }

    /// Take the top card of the draw pile.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.draw_pile.draw();
        debug!(remaining = self.draw_pile.len(), drawn = card.is_some(), "draw");
        card
    }

    /// Cards in all hands plus the draw pile.
    pub fn total_cards(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum::<usize>() + self.draw_pile.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validation() {
        assert!(TableConfig::default().validate().is_ok());
        let none = TableConfig { players: 0, ..TableConfig::default() };
        assert_eq!(none.validate(), Err(TableError::NoPlayers));
        let crowd = TableConfig { players: 11, ..TableConfig::default() };
        assert_eq!(crowd.validate(), Err(TableError::TooManyPlayers { max: 10, got: 11 }));
        let empty_hands = TableConfig { hand_size: 0, ..TableConfig::default() };
        assert_eq!(empty_hands.validate(), Err(TableError::ZeroHandSize));
        assert_eq!(crowd.clamped().players, MAX_PLAYERS);
        assert!(empty_hands.clamped().validate().is_ok());
    }

    #[test]
    fn new_table_has_no_cards() {
        let t = Table::new(["a", "b"]).unwrap();
        assert_eq!(t.round(), 0);
        assert_eq!(t.total_cards(), 0);
        assert_eq!(t.players()[1].id(), "p2");
        assert_eq!(t.players()[1].name(), "b");
        assert!(matches!(Table::new(Vec::<String>::new()), Err(TableError::NoPlayers)));
    }

    #[test]
    fn seeded_rounds_are_reproducible_and_distinct() {
        let cfg = TableConfig { players: 3, hand_size: 10, seed: Some(9) };
        let mut a = Table::from_config(&cfg).unwrap();
        let mut b = Table::from_config(&cfg).unwrap();
        a.start_round().unwrap();
        b.start_round().unwrap();
        assert_eq!(a.players()[0].hand(), b.players()[0].hand());
        let first = a.players()[0].hand().clone();
        a.start_round().unwrap();
        assert_ne!(a.players()[0].hand(), &first);
        assert_eq!(a.round(), 2);
    }

    #[test]
    fn neighbouring_seeds_do_not_share_rounds() {
        let five = TableConfig { players: 2, hand_size: 10, seed: Some(5) };
        let six = TableConfig { seed: Some(6), ..five };
        let mut a = Table::from_config(&five).unwrap();
        let mut b = Table::from_config(&six).unwrap();
        a.start_round().unwrap();
        a.start_round().unwrap();
        b.start_round().unwrap();
        assert_ne!(a.draw_pile(), b.draw_pile());
        assert_ne!(a.players()[0].hand(), b.players()[0].hand());
    }

    #[test]
    fn new_round_clears_gone_out() {
        let mut t = Table::new(["a", "b"]).unwrap();
        t.start_round_with(&mut ChaCha8Rng::seed_from_u64(3)).unwrap();
        t.players_mut()[0].set_gone_out(true);
        t.players_mut()[0].advance_round();
        t.start_round_with(&mut ChaCha8Rng::seed_from_u64(4)).unwrap();
        assert!(!t.players()[0].has_gone_out());
        assert_eq!(t.players()[0].round(), 2);
    }
}

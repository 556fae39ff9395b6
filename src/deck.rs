use crate::cards::{Card, Color, Value};
use rand::distr::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::{ChaCha20Rng, ChaCha8Rng};
use tracing::debug;

/// Copies of each suited number card in a full deck.
pub const NUMBER_COPIES: u8 = 2;
pub const WILD_COUNT: u8 = 8;
pub const SKIP_COUNT: u8 = 4;
/// 4 colors x 12 ranks x 2 copies, plus 8 wilds and 4 skips.
pub const DECK_SIZE: usize = Color::SUITED.len() * Value::NUMBERS.len() * NUMBER_COPIES as usize
    + WILD_COUNT as usize
    + SKIP_COUNT as usize;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("random source unavailable: {0}")]
    RandomSource(String),
    #[error("cannot sample swap index: {0}")]
    Sampling(String),
}

/// An ordered pile of cards. The front of the deck is the next card dealt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full 108-card deck in canonical order: each suited color's ranks
    /// one through twelve (both copies back to back), then the wilds, then the
    /// skips.
    ///
    /// ```
    /// use rummy_rs::deck::Deck;
    ///
    /// let deck = Deck::generate();
    /// assert_eq!(deck.len(), 108);
    /// assert_eq!(deck.as_slice()[0].id(), "red-1-0");
    /// ```
    pub fn generate() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for color in Color::SUITED {
            for value in Value::NUMBERS {
                push_copies(&mut cards, color, value, NUMBER_COPIES);
            }
        }
        push_copies(&mut cards, Color::Wild, Value::Wild, WILD_COUNT);
        push_copies(&mut cards, Color::Wild, Value::Skip, SKIP_COUNT);
        debug!(cards = cards.len(), "generated deck");
        Self { cards }
    }

    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    /// Fisher-Yates: walk from the last position down to 1, swapping each
    /// card with one drawn uniformly from `[0, i]`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), DeckError> {
        for i in (1..self.cards.len()).rev() {
            let pick =
                Uniform::new_inclusive(0, i).map_err(|e| DeckError::Sampling(e.to_string()))?;
            let j = pick.sample(rng);
            self.cards.swap(i, j);
        }
        Ok(())
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) -> Result<(), DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng)
    }

    /// Shuffle with a ChaCha20 stream seeded from the operating system. Fails
    /// before touching the deck if the OS cannot supply entropy.
    pub fn shuffle_os(&mut self) -> Result<(), DeckError> {
        let mut rng =
            ChaCha20Rng::try_from_os_rng().map_err(|e| DeckError::RandomSource(e.to_string()))?;
        self.shuffle_with(&mut rng)
    }

    /// Take the front card.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Take up to `n` cards from the front, in order.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self { cards: iter.into_iter().collect() }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

fn push_copies(cards: &mut Vec<Card>, color: Color, value: Value, count: u8) {
    cards.extend((0..count).map(|copy| Card::from_parts(color, value, copy)));
}

/// Build a fresh canonical deck. See [`Deck::generate`].
pub fn generate_deck() -> Deck {
    Deck::generate()
}

/// Shuffle an owned deck in place and hand it back.
///
/// ```
/// use rummy_rs::deck::{generate_deck, shuffle};
///
/// let deck = shuffle(generate_deck()).unwrap();
/// assert_eq!(deck.len(), 108);
/// ```
pub fn shuffle(mut deck: Deck) -> Result<Deck, DeckError> {
    deck.shuffle_os()?;
    Ok(deck)
}

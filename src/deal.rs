use crate::cards::Card;
use crate::deck::Deck;
use tracing::debug;

/// Cards dealt to each player at the start of a round.
pub const HAND_SIZE: usize = 10;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("cannot deal to zero players")]
    NoPlayers,
    #[error("hand size must be at least one card")]
    ZeroHandSize,
    #[error("cannot seat {0} players")]
    TooManyPlayers(usize),
}

/// Cards held by one player slot, in the order they were dealt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
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

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn into_vec(self) -> Vec<Card> {
        self.cards
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
}

/// Result of dealing: one hand per player plus the undealt remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Deal {
    pub hands: Vec<Hand>,
    pub remaining: Deck,
}

impl Deal {
    /// Number of cards across all hands and the remainder.
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>() + self.remaining.len()
    }
}

/// Deal [`HAND_SIZE`] cards to each of `player_count` players.
///
/// ```
/// use rummy_rs::deal::deal_hands;
/// use rummy_rs::deck::generate_deck;
///
/// let deal = deal_hands(generate_deck(), 3).unwrap();
/// assert_eq!(deal.hands.len(), 3);
/// assert!(deal.hands.iter().all(|h| h.len() == 10));
/// assert_eq!(deal.remaining.len(), 78);
/// ```
pub fn deal_hands(deck: Deck, player_count: usize) -> Result<Deal, DealError> {
    deal_hands_with(deck, player_count, HAND_SIZE)
}

/// Round-robin deal from the front of `deck`: card `k` goes to player
/// `k % player_count` until every hand holds `hand_size` cards. A short deck
/// leaves partial hands and an empty remainder.
pub fn deal_hands_with(
    mut deck: Deck,
    player_count: usize,
    hand_size: usize,
) -> Result<Deal, DealError> {
    if player_count == 0 {
        return Err(DealError::NoPlayers);
    }
    if hand_size == 0 {
        return Err(DealError::ZeroHandSize);
    }

    let quota = player_count.saturating_mul(hand_size);
    let mut hands: Vec<Hand> = Vec::new();
    hands
        .try_reserve_exact(player_count)
        .map_err(|_| DealError::TooManyPlayers(player_count))?;
    hands.resize_with(player_count, Hand::default);
    for (k, card) in deck.draw_n(quota).into_iter().enumerate() {
        hands[k % player_count].push(card);
    }

    if hands.iter().any(|h| h.len() < hand_size) {
        debug!(players = player_count, hand_size, "deck ran out before hands were full");
    }
    debug!(players = player_count, hand_size, remaining = deck.len(), "dealt hands");
    Ok(Deal { hands, remaining: deck })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_round_robin_from_the_front() {
        let deck = Deck::generate();
        let order: Vec<Card> = deck.iter().copied().collect();
        let deal = deal_hands(deck, 2).unwrap();
        for (i, card) in deal.hands[0].iter().enumerate() {
            assert_eq!(*card, order[2 * i]);
        }
        for (i, card) in deal.hands[1].iter().enumerate() {
            assert_eq!(*card, order[2 * i + 1]);
        }
        assert_eq!(deal.remaining.as_slice(), &order[20..]);
    }

    #[test]
    fn short_deck_gives_partial_hands() {
        let five = Deck::new(Deck::generate().draw_n(5));
        let deal = deal_hands(five, 2).unwrap();
        assert_eq!(deal.hands[0].len(), 3);
        assert_eq!(deal.hands[1].len(), 2);
        assert!(deal.remaining.is_empty());
    }

    #[test]
    fn empty_deck_gives_empty_hands() {
        let deal = deal_hands(Deck::default(), 4).unwrap();
        assert_eq!(deal.hands.len(), 4);
        assert!(deal.hands.iter().all(Hand::is_empty));
        assert!(deal.remaining.is_empty());
    }

    #[test]
    fn zero_players_is_rejected() {
        assert_eq!(deal_hands(Deck::generate(), 0), Err(DealError::NoPlayers));
    }

    #[test]
    fn unallocatable_player_count_is_an_error() {
        assert_eq!(
            deal_hands(Deck::generate(), usize::MAX),
            Err(DealError::TooManyPlayers(usize::MAX))
        );
    }

    #[test]
    fn more_players_than_cards() {
        let five = Deck::new(Deck::generate().draw_n(5));
        let deal = deal_hands(five, 8).unwrap();
        let sizes: Vec<usize> = deal.hands.iter().map(Hand::len).collect();
        assert_eq!(sizes, [1, 1, 1, 1, 1, 0, 0, 0]);
        assert!(deal.remaining.is_empty());
    }

    #[test]
    fn custom_hand_size() {
        let deal = deal_hands_with(Deck::generate(), 4, 7).unwrap();
        assert!(deal.hands.iter().all(|h| h.len() == 7));
        assert_eq!(deal.remaining.len(), 108 - 28);
        assert_eq!(deal.card_count(), 108);
        assert_eq!(deal_hands_with(Deck::generate(), 4, 0), Err(DealError::ZeroHandSize));
    }
}

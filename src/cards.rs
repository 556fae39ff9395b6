use std::fmt;
use std::str::FromStr;

/// Card colors. The four suited colors carry number cards; `Wild` carries the
/// wild and skip cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl Color {
    /// Suited colors in deck order.
    pub const SUITED: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];

    pub const ALL: [Color; 5] = [Color::Red, Color::Yellow, Color::Green, Color::Blue, Color::Wild];

    pub const fn is_wild(self) -> bool {
        matches!(self, Color::Wild)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Wild => "wild",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorParseError {
    #[error("invalid color: '{0}'")]
    Invalid(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Color::Red),
            "yellow" | "y" => Ok(Color::Yellow),
            "green" | "g" => Ok(Color::Green),
            "blue" | "b" => Ok(Color::Blue),
            "wild" | "w" => Ok(Color::Wild),
            _ => Err(ColorParseError::Invalid(s.to_string())),
        }
    }
}

/// Card values: the twelve number ranks plus the two specials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Eleven = 11,
    Twelve = 12,
    Wild = 13,
    Skip = 14,
}

impl Value {
    /// Number ranks in deck order.
    pub const NUMBERS: [Value; 12] = [
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Eleven,
        Value::Twelve,
    ];

    /// Numeric rank `1..=12`, or `None` for wild and skip.
    pub const fn rank(self) -> Option<u8> {
        match self {
            Value::Wild | Value::Skip => None,
            n => Some(n as u8),
        }
    }

    pub const fn is_number(self) -> bool {
        self.rank().is_some()
    }

    pub fn from_rank(rank: u8) -> Option<Value> {
        Value::NUMBERS.get(usize::from(rank).checked_sub(1)?).copied()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(n) => write!(f, "{n}"),
            None if *self == Value::Wild => f.write_str("wild"),
            None => f.write_str("skip"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValueParseError {
    #[error("invalid value: '{0}'")]
    Invalid(String),
}

impl FromStr for Value {
    type Err = ValueParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        match t.as_str() {
            "wild" => return Ok(Value::Wild),
            "skip" => return Ok(Value::Skip),
            _ => {}
        }
        t.parse::<u8>()
            .ok()
            .and_then(Value::from_rank)
            .ok_or_else(|| ValueParseError::Invalid(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("number value {value} requires a suited color, got {color}")]
    NumberOnWild { color: Color, value: Value },
    #[error("{value} cards must be wild colored, got {color}")]
    SpecialOnSuited { color: Color, value: Value },
}

/// One physical card. Two cards with the same color and value are told apart
/// by their copy index, which is part of the card id.
///
/// ```
/// use rummy_rs::cards::{Card, Color, Value};
///
/// let card = Card::try_new(Color::Red, Value::Seven, 1).unwrap();
/// assert_eq!(card.id(), "red-7-1");
/// assert!(Card::try_new(Color::Wild, Value::Seven, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    color: Color,
    value: Value,
    copy: u8,
}

impl Card {
    pub fn try_new(color: Color, value: Value, copy: u8) -> Result<Self, CardError> {
        match (color.is_wild(), value.is_number()) {
            (true, true) => Err(CardError::NumberOnWild { color, value }),
            (false, false) => Err(CardError::SpecialOnSuited { color, value }),
            _ => Ok(Self { color, value, copy }),
        }
    }

    /// Build a card whose pairing the caller already knows is valid.
    pub(crate) fn from_parts(color: Color, value: Value, copy: u8) -> Self {
        debug_assert!(color.is_wild() != value.is_number(), "invalid pairing {color} {value}");
        Self { color, value, copy }
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn value(self) -> Value {
        self.value
    }

    pub const fn copy(self) -> u8 {
        self.copy
    }

    pub fn is_wild(self) -> bool {
        self.value == Value::Wild
    }

    pub fn is_skip(self) -> bool {
        self.value == Value::Skip
    }

    /// Identifier unique within one generated deck, e.g. `green-12-0`.
    pub fn id(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.color, self.value, self.copy)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card id: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Color(#[from] ColorParseError),
    #[error(transparent)]
    Value(#[from] ValueParseError),
    #[error(transparent)]
    Card(#[from] CardError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('-');
        let (Some(color), Some(value), Some(copy), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let copy = copy.parse::<u8>().map_err(|_| CardParseError::Invalid(s.to_string()))?;
        Ok(Card::try_new(color.parse::<Color>()?, value.parse::<Value>()?, copy)?)
    }
}

/// Parse card ids separated by whitespace or commas.
///
/// ```
/// use rummy_rs::cards::{parse_cards, Color, Value};
///
/// let cards = parse_cards("red-1-0, wild-skip-2 blue-12-1").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[1].value(), Value::Skip);
/// assert_eq!(cards[2].color(), Color::Blue);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_display_and_from_str() {
        assert_eq!(Value::Twelve.to_string(), "12");
        assert_eq!(Value::Wild.to_string(), "wild");
        assert_eq!(Value::from_str("7").unwrap(), Value::Seven);
        assert_eq!(Value::from_str("SKIP").unwrap(), Value::Skip);
        assert!(Value::from_str("0").is_err());
        assert!(Value::from_str("13").is_err());
    }

    #[test]
    fn value_ranks() {
        assert_eq!(Value::One.rank(), Some(1));
        assert_eq!(Value::Twelve.rank(), Some(12));
        assert_eq!(Value::Skip.rank(), None);
        assert_eq!(Value::from_rank(0), None);
        assert_eq!(Value::from_rank(5), Some(Value::Five));
    }

    #[test]
    fn color_display_and_from_str() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!(Color::from_str("Blue").unwrap(), Color::Blue);
        assert_eq!(Color::from_str("w").unwrap(), Color::Wild);
        assert!(Color::from_str("purple").is_err());
    }

    #[test]
    fn invalid_pairings_are_rejected() {
        assert!(matches!(
            Card::try_new(Color::Wild, Value::Three, 0),
            Err(CardError::NumberOnWild { .. })
        ));
        assert!(matches!(
            Card::try_new(Color::Red, Value::Skip, 0),
            Err(CardError::SpecialOnSuited { .. })
        ));
        assert!(matches!(
            Card::try_new(Color::Green, Value::Wild, 0),
            Err(CardError::SpecialOnSuited { .. })
        ));
        assert!(Card::try_new(Color::Wild, Value::Wild, 7).is_ok());
    }

    #[test]
    fn card_ids_parse_back() {
        let c = Card::try_new(Color::Wild, Value::Skip, 3).unwrap();
        assert_eq!(c.id(), "wild-skip-3");
        assert_eq!(Card::from_str("wild-skip-3").unwrap(), c);
        assert!(matches!(Card::from_str("red-7"), Err(CardParseError::Invalid(_))));
        assert!(matches!(Card::from_str("wild-7-0"), Err(CardParseError::Card(_))));
    }
}

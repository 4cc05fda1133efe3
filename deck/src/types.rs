// ═══════════════════════════════════════════════════════════════════════
// Core types — card types, shapes and cards as stored in the catalog
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Card types ─────────────────────────────────────────────────────────

/// Terrain or category printed on a card.
///
/// Encoded in the catalog as a small integer (Water=1 .. Ruins=6). Any other
/// code is kept as `Unknown` so it survives a decode/encode cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum CardType {
    Water,
    Farm,
    Village,
    Forest,
    Monster,
    Ruins,
    Unknown(u8),
}

impl CardType {
    pub const ALL: [CardType; 6] = [
        CardType::Water,
        CardType::Farm,
        CardType::Village,
        CardType::Forest,
        CardType::Monster,
        CardType::Ruins,
    ];

    /// Integer code used in the catalog document.
    pub fn code(self) -> u8 {
        match self {
            CardType::Water => 1,
            CardType::Farm => 2,
            CardType::Village => 3,
            CardType::Forest => 4,
            CardType::Monster => 5,
            CardType::Ruins => 6,
            CardType::Unknown(code) => code,
        }
    }
}

impl From<u8> for CardType {
    fn from(code: u8) -> Self {
        match code {
            1 => CardType::Water,
            2 => CardType::Farm,
            3 => CardType::Village,
            4 => CardType::Forest,
            5 => CardType::Monster,
            6 => CardType::Ruins,
            other => CardType::Unknown(other),
        }
    }
}

impl From<CardType> for u8 {
    fn from(t: CardType) -> Self {
        t.code()
    }
}

// ── Shapes ─────────────────────────────────────────────────────────────

/// One placement footprint: rows of occupied (`true`) / empty cells.
/// Rows may differ in length; nothing here squares them up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shape(pub Vec<Vec<bool>>);

impl Shape {
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.0
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Vec<bool>>> for Shape {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        Shape(rows)
    }
}

/// The shapes printed on a card. Cards carry one or two.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeSet(pub Vec<Shape>);

impl From<Vec<Shape>> for ShapeSet {
    fn from(shapes: Vec<Shape>) -> Self {
        ShapeSet(shapes)
    }
}

// ── Cards ──────────────────────────────────────────────────────────────

/// One catalog entry as it appears in the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub name: String,
    /// Time cost. Zero on monster cards.
    #[serde(default)]
    pub time: u8,
    /// Decoded but not consulted when rendering.
    #[serde(default)]
    pub coin: bool,
    /// Only meaningful on monster cards.
    #[serde(default)]
    pub clockwise: bool,
    #[serde(default)]
    pub shape: ShapeSet,
    #[serde(default)]
    pub types: Vec<CardType>,
}

impl Card {
    /// True only when `Monster` is the card's sole type.
    pub fn is_monster(&self) -> bool {
        self.types.as_slice() == [CardType::Monster]
    }

    /// True only when `Ruins` is the card's sole type.
    pub fn is_ruins(&self) -> bool {
        self.types.as_slice() == [CardType::Ruins]
    }
}

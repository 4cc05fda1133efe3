// ═══════════════════════════════════════════════════════════════════════
// Text rendering — glyphs, shape diagrams and full card blocks
// ═══════════════════════════════════════════════════════════════════════

use std::fmt;

use crate::types::*;

// ── Glyphs ─────────────────────────────────────────────────────────────

pub const FILLED_CELL: &str = "[]";
pub const EMPTY_CELL: &str = "  ";
pub const COIN: &str = "💰";
pub const DIVIDER: &str = "|";
pub const CLOCKWISE: &str = "🔃";
pub const COUNTERCLOCKWISE: &str = "🔄";
pub const HOURGLASS: &str = "⏳";

/// Printed in place of type, time and shape on every ruins card.
pub const RUINS_ART: &str = "
 |_,.
   |||
   ||||
   ||||
 _/____\\_
|________|";

/// Gap between a column of a shape pair and the coin slot, and around the divider.
const GUTTER: &str = "  ";

/// Row of a shape pair that carries the coin.
const COIN_ROW: usize = 1;

impl CardType {
    pub fn glyph(self) -> &'static str {
        match self {
            CardType::Water => "💧",
            CardType::Farm => "🌱",
            CardType::Village => "🏠",
            CardType::Forest => "🌲",
            CardType::Monster => "👾",
            CardType::Ruins => "🏛",
            CardType::Unknown(_) => "??",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

// ── Shapes ─────────────────────────────────────────────────────────────

impl Shape {
    /// One line per row, two characters per cell. Ragged rows stay ragged.
    pub fn lines(&self) -> Vec<String> {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&filled| if filled { FILLED_CELL } else { EMPTY_CELL })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// A single shape prints as-is. A pair prints side by side:
///
/// ```text
/// []      |      []
/// []  💰  |    [][]
/// []      |  [][]
/// ```
///
/// Any other count prints nothing.
impl fmt::Display for ShapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{}", single),
            [left, right] => write_pair(f, left, right),
            _ => Ok(()),
        }
    }
}

fn write_pair(f: &mut fmt::Formatter<'_>, left: &Shape, right: &Shape) -> fmt::Result {
    let height = left.height().max(right.height());
    let left = left.lines();
    let right = right.lines();

    // Missing rows are padded to the width of the shape's first line.
    let left_pad = padding(left.first().map_or(0, String::len));
    let right_pad = padding(right.first().map_or(0, String::len));

    for i in 0..height {
        let coin = if i == COIN_ROW { COIN } else { EMPTY_CELL };
        write!(
            f,
            "{}{GUTTER}{}{GUTTER}{DIVIDER}{GUTTER}{}",
            left.get(i).unwrap_or(&left_pad),
            coin,
            right.get(i).unwrap_or(&right_pad),
        )?;
        if i + 1 < height {
            f.write_str("\n")?;
        }
    }
    Ok(())
}

fn padding(width: usize) -> String {
    " ".repeat(width)
}

// ── Cards ──────────────────────────────────────────────────────────────

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CARD: {}", self.name)?;

        if self.is_ruins() {
            return write!(f, "\n{}", RUINS_ART);
        }

        let types: Vec<&str> = self.types.iter().map(|t| t.glyph()).collect();
        write!(f, "\nTYPE: {}", types.join(" | "))?;

        if self.is_monster() {
            let orientation = if self.clockwise { CLOCKWISE } else { COUNTERCLOCKWISE };
            write!(f, "\nORIENTATION: {}", orientation)?;
        } else {
            write!(f, "\nTIME: {}{}", self.time, HOURGLASS)?;
        }

        write!(f, "\n\n{}", self.shape)
    }
}

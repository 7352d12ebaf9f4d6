//! Five-slot star breakdown for rating display.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

/// Number of star slots rendered for every rating.
pub const STAR_SLOTS: u8 = 5;

/// One rendered star slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

/// How many of each glyph a rating renders as. Always sums to [`STAR_SLOTS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl StarBreakdown {
    /// Split a rating into full/half/empty slots.
    ///
    /// `floor(rating)` full stars, one half star when the fractional part is
    /// at least 0.5, the rest empty. Out-of-range ratings are clamped to 0–5.
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, f64::from(STAR_SLOTS))
        } else {
            0.0
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = rating.floor() as u8;
        let half = u8::from(full < STAR_SLOTS && rating.fract() >= 0.5);
        Self {
            full,
            half,
            empty: STAR_SLOTS - full - half,
        }
    }

    /// Glyphs in display order: full, then half, then empty.
    pub fn glyphs(self) -> Vec<StarGlyph> {
        std::iter::repeat_n(StarGlyph::Full, usize::from(self.full))
            .chain(std::iter::repeat_n(StarGlyph::Half, usize::from(self.half)))
            .chain(std::iter::repeat_n(StarGlyph::Empty, usize::from(self.empty)))
            .collect()
    }
}

/// Numeric label shown after the stars (`3.5`, `5`).
pub fn rating_label(rating: f64) -> String {
    rating.to_string()
}

use super::*;

#[test]
fn three_and_a_half_renders_three_full_one_half_one_empty() {
    let stars = StarBreakdown::from_rating(3.5);
    assert_eq!(stars, StarBreakdown { full: 3, half: 1, empty: 1 });
    assert_eq!(rating_label(3.5), "3.5");
}

#[test]
fn five_renders_all_full() {
    let stars = StarBreakdown::from_rating(5.0);
    assert_eq!(stars, StarBreakdown { full: 5, half: 0, empty: 0 });
    assert_eq!(rating_label(5.0), "5");
}

#[test]
fn fraction_below_half_rounds_down() {
    assert_eq!(StarBreakdown::from_rating(4.4), StarBreakdown { full: 4, half: 0, empty: 1 });
}

#[test]
fn fraction_above_half_still_one_half_star() {
    assert_eq!(StarBreakdown::from_rating(2.75), StarBreakdown { full: 2, half: 1, empty: 2 });
}

#[test]
fn zero_renders_all_empty() {
    assert_eq!(StarBreakdown::from_rating(0.0), StarBreakdown { full: 0, half: 0, empty: 5 });
}

#[test]
fn out_of_range_ratings_are_clamped() {
    assert_eq!(StarBreakdown::from_rating(7.0), StarBreakdown { full: 5, half: 0, empty: 0 });
    assert_eq!(StarBreakdown::from_rating(-1.0), StarBreakdown { full: 0, half: 0, empty: 5 });
    assert_eq!(StarBreakdown::from_rating(f64::NAN), StarBreakdown { full: 0, half: 0, empty: 5 });
}

#[test]
fn glyphs_are_ordered_and_always_five() {
    let glyphs = StarBreakdown::from_rating(3.5).glyphs();
    assert_eq!(
        glyphs,
        vec![
            StarGlyph::Full,
            StarGlyph::Full,
            StarGlyph::Full,
            StarGlyph::Half,
            StarGlyph::Empty
        ]
    );
    for rating in [0.0, 0.5, 1.0, 2.5, 4.9, 5.0] {
        assert_eq!(StarBreakdown::from_rating(rating).glyphs().len(), usize::from(STAR_SLOTS));
    }
}

//! Five-star rating display.

use leptos::prelude::*;

use crate::util::stars::{StarBreakdown, StarGlyph, rating_label};

#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    let glyphs = StarBreakdown::from_rating(rating)
        .glyphs()
        .into_iter()
        .map(|glyph| {
            let (class, symbol) = match glyph {
                StarGlyph::Full => ("star star--full", "★"),
                StarGlyph::Half => ("star star--half", "★"),
                StarGlyph::Empty => ("star star--empty", "☆"),
            };
            view! { <span class=class aria-hidden="true">{symbol}</span> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="star-rating" title=rating_label(rating)>
            {glyphs}
            <span class="star-rating__value">{rating_label(rating)}</span>
        </div>
    }
}

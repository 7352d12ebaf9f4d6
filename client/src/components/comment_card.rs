//! One rating/comment card and its loading placeholder.

use leptos::prelude::*;

use crate::components::report_profile_dialog::ReportProfileDialog;
use crate::components::star_rating::StarRating;
use crate::state::comments::Comment;
use crate::util::dates::format_long_es;

#[component]
pub fn CommentCard(comment: Comment) -> impl IntoView {
    let title = comment.title();
    let thumbnail = comment.thumbnail().to_owned();
    let alt = comment.image_alt();
    let date = format_long_es(comment.created_at);
    let body = comment.body_or_placeholder().to_owned();
    let author_id = comment.author.id;
    let byline = format!("Por: {}", comment.author.name);
    let author_name = comment.author.name.clone();
    let rating = comment.rating;

    view! {
        <article class="comment-card">
            <img class="comment-card__thumb" src=thumbnail alt=alt width="120" height="80" />
            <div class="comment-card__body">
                <header class="comment-card__header">
                    <h3 class="comment-card__title">{title}</h3>
                    <span class="comment-card__date">{date}</span>
                </header>
                <StarRating rating=rating />
                <p class="comment-card__text">{body}</p>
                <footer class="comment-card__footer">
                    <span class="comment-card__author">{byline}</span>
                    <ReportProfileDialog renter_id=author_id renter_name=author_name />
                </footer>
            </div>
        </article>
    }
}

/// Grey placeholder shown while comments load.
#[component]
pub fn CommentCardSkeleton() -> impl IntoView {
    view! {
        <div class="comment-card comment-card--skeleton" aria-hidden="true">
            <div class="skeleton skeleton--thumb"></div>
            <div class="comment-card__body">
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line skeleton--short"></div>
                <div class="skeleton skeleton--line"></div>
            </div>
        </div>
    }
}

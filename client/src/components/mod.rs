//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the comment browser's pieces while reading/writing
//! shared state from Leptos context providers or callbacks.

pub mod comment_card;
pub mod comment_filters;
pub mod pagination_bar;
pub mod report_profile_dialog;
pub mod star_rating;
pub mod toast;

//! Comment-browser state: source list, filter criteria, derived view, paging.
//!
//! DESIGN
//! ======
//! The filtered list is a pure function of `(source, criteria)`. Every change
//! goes through `CommentsState::reduce`, which recomputes the view, resets the
//! page on criteria changes, and bumps `scroll_to_top_seq` whenever the active
//! page moves so the page component can react without ambient effects.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::net::error::ApiError;
use crate::net::types::{CommentRecord, VehicleRecord};
use crate::state::pagination::{self, PageControls};
use crate::util::dates;

/// Thumbnail shown when a vehicle has no images or no longer exists.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=80&width=120";

/// Embedded author summary.
#[derive(Clone, Debug, PartialEq)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub photo: Option<String>,
}

/// Embedded vehicle summary.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Image URLs in gallery order.
    pub images: Vec<String>,
    pub host_id: i64,
}

impl From<VehicleRecord> for Vehicle {
    fn from(record: VehicleRecord) -> Self {
        Self {
            id: record.id,
            make: record.make,
            model: record.model,
            year: record.year,
            images: record.images.into_iter().map(|image| image.data).collect(),
            host_id: record.host_id,
        }
    }
}

/// A renter's rating on one of the host's vehicles, timestamps in local time.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub vehicle_id: i64,
    pub author_id: i64,
    pub body: String,
    pub rating: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub author: Author,
    /// `None` once the vehicle has been deleted.
    pub vehicle: Option<Vehicle>,
}

impl Comment {
    /// Normalize a wire record, parsing both timestamps into local time.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MalformedPayload` if a timestamp cannot be parsed.
    pub fn from_record(record: CommentRecord) -> Result<Self, ApiError> {
        let created_at = parse_timestamp(record.id, &record.created_at)?;
        let updated_at = parse_timestamp(record.id, &record.updated_at)?;
        Ok(Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            author_id: record.author_id,
            body: record.body.unwrap_or_default(),
            rating: record.rating,
            created_at,
            updated_at,
            author: Author {
                id: record.author.id,
                name: record.author.name,
                photo: record.author.photo,
            },
            vehicle: record.vehicle.map(Vehicle::from),
        })
    }

    /// Sort key for `SortKey::VehicleName`: `"{make} {model}"`, lower-cased.
    pub fn vehicle_name_key(&self) -> String {
        let (make, model) = self
            .vehicle
            .as_ref()
            .map_or(("", ""), |v| (v.make.as_str(), v.model.as_str()));
        format!("{make} {model}").to_lowercase()
    }

    /// Card heading: make, model, and year, or `Vehículo` without a vehicle.
    /// A zero year is omitted.
    pub fn title(&self) -> String {
        let Some(vehicle) = &self.vehicle else {
            return "Vehículo".to_owned();
        };
        let make = if vehicle.make.is_empty() { "Vehículo" } else { vehicle.make.as_str() };
        let year = if vehicle.year == 0 { String::new() } else { vehicle.year.to_string() };
        [make.to_owned(), vehicle.model.clone(), year]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Image alt text: `"{make} {model}"`.
    pub fn image_alt(&self) -> String {
        self.vehicle
            .as_ref()
            .map(|v| format!("{} {}", v.make, v.model))
            .unwrap_or_default()
    }

    pub fn thumbnail(&self) -> &str {
        self.vehicle
            .as_ref()
            .and_then(|v| v.images.first())
            .map_or(PLACEHOLDER_IMAGE, String::as_str)
    }

    /// Comment text, or `Sin comentarios` for rating-only entries.
    pub fn body_or_placeholder(&self) -> &str {
        if self.body.is_empty() { "Sin comentarios" } else { self.body.as_str() }
    }

    fn matches_search(&self, term_lower: &str) -> bool {
        self.vehicle.as_ref().is_some_and(|v| {
            v.make.to_lowercase().contains(term_lower) || v.model.to_lowercase().contains(term_lower)
        })
    }
}

fn parse_timestamp(comment_id: i64, raw: &str) -> Result<NaiveDateTime, ApiError> {
    dates::parse_timestamp_local(raw)
        .ok_or_else(|| ApiError::MalformedPayload(format!("comment {comment_id} has invalid timestamp {raw:?}")))
}

/// Normalize a whole payload; one bad record fails the load.
///
/// # Errors
///
/// Returns the first record's normalization error.
pub fn normalize_comments(records: Vec<CommentRecord>) -> Result<Vec<Comment>, ApiError> {
    records.into_iter().map(Comment::from_record).collect()
}

// =============================================================
// Filter criteria
// =============================================================

/// Field the list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Creation timestamp.
    #[default]
    Date,
    Rating,
    /// `"{make} {model}"`, case- and accent-folded.
    VehicleName,
}

impl SortKey {
    pub const ALL: [Self; 3] = [Self::Date, Self::Rating, Self::VehicleName];

    /// Stable value used by the `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "fecha",
            Self::Rating => "calificacion",
            Self::VehicleName => "vehiculo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "Fecha",
            Self::Rating => "Calificación",
            Self::VehicleName => "Vehículo",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub const ALL: [Self; 2] = [Self::Ascending, Self::Descending];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascendente",
            Self::Descending => "descendente",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascendente",
            Self::Descending => "Descendente",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.as_str() == raw)
    }
}

/// Inclusive creation-date window; only applied when both ends are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// `(start 00:00:00.000, end 23:59:59.999)`, or `None` while incomplete.
    /// Reversed picks are swapped.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (start, end) = (self.start?, self.end?);
        let (first, last) = if start <= end { (start, end) } else { (end, start) };
        Some((dates::start_of_day(first), dates::end_of_day(last)))
    }

    /// Whether a comment created at `moment` falls in the window.
    ///
    /// The comment is compared at midday of its day so the result depends
    /// only on the calendar day.
    pub fn contains(&self, moment: NaiveDateTime) -> bool {
        let Some((from, to)) = self.bounds() else {
            return true;
        };
        let normalized = dates::midday(moment);
        normalized >= from && normalized <= to
    }

    /// Picker button text.
    pub fn label(&self) -> String {
        match (self.start, self.end) {
            (Some(start), Some(end)) => format!("{} - {}", dates::format_short(start), dates::format_short(end)),
            (Some(start), None) => dates::format_short(start),
            _ => "Fecha recientes primero".to_owned(),
        }
    }
}

/// All user-controlled view criteria.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub date_range: DateRange,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

/// Search, date-range filter, then stable sort.
pub fn apply_filters(source: &[Comment], criteria: &FilterCriteria) -> Vec<Comment> {
    let term = criteria.search.to_lowercase();
    let mut filtered: Vec<Comment> = source
        .iter()
        .filter(|comment| term.is_empty() || comment.matches_search(&term))
        .filter(|comment| criteria.date_range.contains(comment.created_at))
        .cloned()
        .collect();

    let key = criteria.sort_key;
    match criteria.sort_direction {
        SortDirection::Ascending => filtered.sort_by(|a, b| compare(a, b, key)),
        SortDirection::Descending => filtered.sort_by(|a, b| compare(b, a, key)),
    }
    filtered
}

fn compare(a: &Comment, b: &Comment, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.created_at.cmp(&b.created_at),
        SortKey::Rating => a.rating.total_cmp(&b.rating),
        SortKey::VehicleName => {
            let (a_name, b_name) = (a.vehicle_name_key(), b.vehicle_name_key());
            collation_key(&a_name)
                .cmp(&collation_key(&b_name))
                .then_with(|| a_name.cmp(&b_name))
        }
    }
}

/// Accent-insensitive primary key: `Škoda` and `skoda` compare equal, and
/// both sort between `bmw` and `toyota`.
pub fn collation_key(name: &str) -> String {
    name.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

// =============================================================
// Reducer
// =============================================================

/// Everything that can change the comment browser.
#[derive(Clone, Debug, PartialEq)]
pub enum CommentsAction {
    LoadStarted,
    Loaded(Vec<Comment>),
    /// Terminal load failure; the message is for logs, the UI shows a toast.
    LoadFailed(String),
    SearchChanged(String),
    DateRangeChanged(DateRange),
    SortKeyChanged(SortKey),
    SortDirectionChanged(SortDirection),
    PageSelected(usize),
    NextPage,
    PreviousPage,
}

/// Comment-browser state provided to the page.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentsState {
    /// Unfiltered comments from the last successful load.
    pub source: Vec<Comment>,
    /// `apply_filters(source, criteria)`.
    pub filtered: Vec<Comment>,
    pub criteria: FilterCriteria,
    /// 1-indexed active page.
    pub current_page: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Incremented every time `current_page` changes.
    pub scroll_to_top_seq: u64,
}

impl Default for CommentsState {
    fn default() -> Self {
        Self {
            source: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            current_page: 1,
            loading: true,
            error: None,
            scroll_to_top_seq: 0,
        }
    }
}

impl CommentsState {
    /// Apply `action` and return the next state.
    #[must_use]
    pub fn reduce(mut self, action: CommentsAction) -> Self {
        let previous_page = self.current_page;
        match action {
            CommentsAction::LoadStarted => {
                // Only the scroll counter survives a reload.
                self = Self {
                    scroll_to_top_seq: self.scroll_to_top_seq,
                    ..Self::default()
                };
            }
            CommentsAction::Loaded(comments) => {
                self.source = comments;
                self.loading = false;
                self.error = None;
                self.refilter();
            }
            CommentsAction::LoadFailed(message) => {
                self.source.clear();
                self.filtered.clear();
                self.current_page = 1;
                self.loading = false;
                self.error = Some(message);
            }
            CommentsAction::SearchChanged(search) => {
                self.criteria.search = search;
                self.refilter();
            }
            CommentsAction::DateRangeChanged(range) => {
                self.criteria.date_range = range;
                self.refilter();
            }
            CommentsAction::SortKeyChanged(key) => {
                self.criteria.sort_key = key;
                self.refilter();
            }
            CommentsAction::SortDirectionChanged(direction) => {
                self.criteria.sort_direction = direction;
                self.refilter();
            }
            CommentsAction::PageSelected(page) => {
                self.current_page = pagination::clamp_page(page, self.filtered.len());
            }
            CommentsAction::NextPage => {
                self.current_page = pagination::clamp_page(self.current_page + 1, self.filtered.len());
            }
            CommentsAction::PreviousPage => {
                self.current_page = pagination::clamp_page(self.current_page.saturating_sub(1), self.filtered.len());
            }
        }
        if self.current_page != previous_page {
            self.scroll_to_top_seq += 1;
        }
        self
    }

    fn refilter(&mut self) {
        self.filtered = apply_filters(&self.source, &self.criteria);
        self.current_page = 1;
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len())
    }

    /// Comments on the active page.
    pub fn page_items(&self) -> &[Comment] {
        pagination::page_slice(&self.filtered, self.current_page)
    }

    pub fn page_controls(&self) -> PageControls {
        pagination::controls(self.filtered.len(), self.current_page)
    }
}

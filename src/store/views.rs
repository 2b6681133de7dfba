//! Read-side shapes handed to the presentation layer.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::db::entities::{artists, locations, shows, venues};

pub const SHOW_DATE_FORMAT: &str = "%m/%d/%Y";

/// A venue or artist in a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// One location's venues. `location` is `None` only for venues that were
/// never attached to a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueArea {
    pub location: Option<locations::Model>,
    pub venues: Vec<EntitySummary>,
}

impl VenueArea {
    pub fn city(&self) -> &str {
        self.location.as_ref().map(|l| l.city.as_str()).unwrap_or("")
    }

    pub fn state(&self) -> &str {
        self.location.as_ref().map(|l| l.state.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<EntitySummary>,
}

impl SearchResults {
    pub fn new(data: Vec<EntitySummary>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show seen from one side: the counterpart is the artist on a venue page
/// and the venue on an artist page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSlot {
    pub show_id: i32,
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: String,
}

impl ShowSlot {
    pub fn for_venue_page(show: &shows::Model, artist: &artists::Model) -> Self {
        Self {
            show_id: show.id,
            counterpart_id: artist.id,
            counterpart_name: artist.name.clone(),
            counterpart_image_link: artist.image_link.clone(),
            start_date: show.start_date,
            start_time: format_show_date(show.start_date),
        }
    }

    pub fn for_artist_page(show: &shows::Model, venue: &venues::Model) -> Self {
        Self {
            show_id: show.id,
            counterpart_id: venue.id,
            counterpart_name: venue.name.clone(),
            counterpart_image_link: venue.image_link.clone(),
            start_date: show.start_date,
            start_time: format_show_date(show.start_date),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowPartition {
    pub past: Vec<ShowSlot>,
    pub upcoming: Vec<ShowSlot>,
}

impl ShowPartition {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub venue: venues::Model,
    pub location: Option<locations::Model>,
    pub shows: ShowPartition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub artist: artists::Model,
    pub location: Option<locations::Model>,
    pub shows: ShowPartition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: String,
}

/// Past means strictly before `today`; a show dated today is upcoming.
pub fn is_past(start_date: NaiveDate, today: NaiveDate) -> bool {
    start_date < today
}

pub fn partition_shows(slots: impl IntoIterator<Item = ShowSlot>, today: NaiveDate) -> ShowPartition {
    let (past, upcoming): (Vec<ShowSlot>, Vec<ShowSlot>) = slots
        .into_iter()
        .partition(|slot| is_past(slot.start_date, today));
    ShowPartition { past, upcoming }
}

pub fn format_show_date(date: NaiveDate) -> String {
    date.format(SHOW_DATE_FORMAT).to_string()
}

/// Upcoming shows per owner id, where `owner` picks the venue or artist side.
pub(super) fn count_upcoming(
    shows: &[shows::Model],
    today: NaiveDate,
    owner: impl Fn(&shows::Model) -> i32,
) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|s| !is_past(s.start_date, today)) {
        *counts.entry(owner(show)).or_insert(0) += 1;
    }
    counts
}

/// Case-insensitive substring match; an empty term matches every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

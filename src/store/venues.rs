use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::locations::resolve_location;
use super::views::{
    count_upcoming, name_matches, partition_shows, EntitySummary, SearchResults, ShowSlot,
    VenueArea, VenueDetail,
};
use super::{finish, require_name, today, Store, VenueFields};
use crate::db::entities::{artists, locations, shows, venues};
use crate::error::{AppError, Result};

impl Store {
    pub async fn create_venue(
        &self,
        fields: VenueFields,
        city: &str,
        state: &str,
    ) -> Result<venues::Model> {
        let txn = self.begin().await?;
        let result = insert_venue(&txn, fields, city, state).await;
        let venue = finish(txn, result).await?;

        tracing::info!("Venue {} ({}) was listed", venue.id, venue.name);
        Ok(venue)
    }

    /// Overwrites every editable field and re-links the venue to the
    /// location for (city, state).
    pub async fn update_venue(
        &self,
        id: i32,
        fields: VenueFields,
        city: &str,
        state: &str,
    ) -> Result<venues::Model> {
        let txn = self.begin().await?;
        let result = overwrite_venue(&txn, id, fields, city, state).await;
        let venue = finish(txn, result).await?;

        tracing::info!("Venue {} ({}) was updated", venue.id, venue.name);
        Ok(venue)
    }

    /// Removes the venue together with every show booked at it.
    pub async fn delete_venue(&self, id: i32) -> Result<()> {
        let txn = self.begin().await?;
        let result = remove_venue(&txn, id).await;
        let removed_shows = finish(txn, result).await?;

        tracing::info!("Venue {} was deleted along with {} shows", id, removed_shows);
        Ok(())
    }

    pub async fn get_venue(&self, id: i32) -> Result<(venues::Model, Option<locations::Model>)> {
        let venue = find_venue(&self.db, id).await?;
        let location = venue.find_related(locations::Entity).one(&self.db).await?;
        Ok((venue, location))
    }

    /// Venues grouped under their location, each with its upcoming-show
    /// count. The iterator is built from one snapshot taken per call.
    pub async fn list_venues_by_location(&self) -> Result<impl Iterator<Item = VenueArea>> {
        let today = today();
        let locations = locations::Entity::find()
            .order_by_asc(locations::Column::Id)
            .all(&self.db)
            .await?;
        let summaries = self.venue_summaries(today).await?;

        let mut grouped: HashMap<Option<i32>, Vec<EntitySummary>> = HashMap::new();
        for (location_id, summary) in summaries {
            grouped.entry(location_id).or_default().push(summary);
        }
        let unplaced = grouped.remove(&None);

        tracing::debug!("Grouping venues across {} locations", locations.len());

        Ok(locations
            .into_iter()
            .filter_map(move |location| {
                grouped.remove(&Some(location.id)).map(|venues| VenueArea {
                    location: Some(location),
                    venues,
                })
            })
            .chain(unplaced.map(|venues| VenueArea {
                location: None,
                venues,
            })))
    }

    /// Linear scan over every venue name.
    pub async fn search_venues(&self, term: &str) -> Result<SearchResults> {
        let data: Vec<EntitySummary> = self
            .venue_summaries(today())
            .await?
            .into_iter()
            .map(|(_, summary)| summary)
            .filter(|summary| name_matches(&summary.name, term))
            .collect();

        tracing::debug!("Venue search '{}' matched {}", term, data.len());
        Ok(SearchResults::new(data))
    }

    pub async fn get_venue_detail(&self, id: i32) -> Result<VenueDetail> {
        self.get_venue_detail_at(id, today()).await
    }

    pub async fn get_venue_detail_at(&self, id: i32, today: NaiveDate) -> Result<VenueDetail> {
        let (venue, location) = self.get_venue(id).await?;

        let booked = shows::Entity::find()
            .filter(shows::Column::VenueId.eq(id))
            .order_by_asc(shows::Column::StartDate)
            .order_by_asc(shows::Column::Id)
            .find_also_related(artists::Entity)
            .all(&self.db)
            .await?;

        let slots = booked.iter().filter_map(|(show, artist)| {
            artist
                .as_ref()
                .map(|artist| ShowSlot::for_venue_page(show, artist))
        });

        Ok(VenueDetail {
            shows: partition_shows(slots, today),
            venue,
            location,
        })
    }

    async fn venue_summaries(&self, today: NaiveDate) -> Result<Vec<(Option<i32>, EntitySummary)>> {
        let venues = venues::Entity::find()
            .order_by_asc(venues::Column::Id)
            .all(&self.db)
            .await?;
        let shows = shows::Entity::find().all(&self.db).await?;
        let upcoming = count_upcoming(&shows, today, |s| s.venue_id);

        Ok(venues
            .into_iter()
            .map(|venue| {
                let summary = EntitySummary {
                    id: venue.id,
                    num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
                    name: venue.name,
                };
                (venue.location_id, summary)
            })
            .collect())
    }
}

async fn find_venue<C: ConnectionTrait>(conn: &C, id: i32) -> Result<venues::Model> {
    venues::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
}

async fn insert_venue<C: ConnectionTrait>(
    conn: &C,
    fields: VenueFields,
    city: &str,
    state: &str,
) -> Result<venues::Model> {
    require_name("Venue", &fields.name)?;
    let location = resolve_location(conn, city, state).await?;
    ensure_unique(conn, &fields, None).await?;

    let venue = venues::ActiveModel {
        location_id: Set(Some(location.id)),
        ..Default::default()
    };
    Ok(apply_fields(venue, fields).insert(conn).await?)
}

async fn overwrite_venue<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    fields: VenueFields,
    city: &str,
    state: &str,
) -> Result<venues::Model> {
    let existing = find_venue(conn, id).await?;
    require_name("Venue", &fields.name)?;
    let location = resolve_location(conn, city, state).await?;
    ensure_unique(conn, &fields, Some(id)).await?;

    let mut venue: venues::ActiveModel = existing.into();
    venue.location_id = Set(Some(location.id));
    Ok(apply_fields(venue, fields).update(conn).await?)
}

async fn remove_venue<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64> {
    let venue = find_venue(conn, id).await?;
    let removed = shows::Entity::delete_many()
        .filter(shows::Column::VenueId.eq(id))
        .exec(conn)
        .await?;
    venue.delete(conn).await?;
    Ok(removed.rows_affected)
}

fn apply_fields(mut venue: venues::ActiveModel, fields: VenueFields) -> venues::ActiveModel {
    venue.name = Set(fields.name);
    venue.address = Set(fields.address);
    venue.phone = Set(fields.phone);
    venue.genres = Set(fields.genres.into());
    venue.website = Set(fields.website);
    venue.seeking_talent = Set(fields.seeking_talent);
    venue.seeking_description = Set(fields.seeking_description);
    venue.image_link = Set(fields.image_link);
    venue.facebook_link = Set(fields.facebook_link);
    venue
}

/// Name, phone, website and facebook link are unique across venues. Absent
/// values never collide. `exclude` skips the venue being updated.
async fn ensure_unique<C: ConnectionTrait>(
    conn: &C,
    fields: &VenueFields,
    exclude: Option<i32>,
) -> Result<()> {
    let checks = [
        ("name", venues::Column::Name, Some(fields.name.as_str())),
        ("phone", venues::Column::Phone, fields.phone.as_deref()),
        ("website", venues::Column::Website, fields.website.as_deref()),
        ("facebook link", venues::Column::FacebookLink, fields.facebook_link.as_deref()),
    ];

    for (label, column, value) in checks {
        let Some(value) = value else { continue };

        let mut query = venues::Entity::find().filter(column.eq(value));
        if let Some(id) = exclude {
            query = query.filter(venues::Column::Id.ne(id));
        }

        if query.count(conn).await? > 0 {
            tracing::warn!("Rejected venue write: {} '{}' is taken", label, value);
            return Err(AppError::ConstraintViolation(format!(
                "A venue with this {} already exists",
                label
            )));
        }
    }

    Ok(())
}

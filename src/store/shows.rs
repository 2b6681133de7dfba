use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

use super::views::{format_show_date, ShowListing};
use super::{finish, Store};
use crate::db::entities::{artists, shows, venues};
use crate::error::{AppError, Result};

impl Store {
    /// Books `artist_id` at `venue_id` on `start_date`. Overlapping bookings
    /// are allowed.
    pub async fn create_show(
        &self,
        artist_id: i32,
        venue_id: i32,
        start_date: NaiveDate,
    ) -> Result<shows::Model> {
        let txn = self.begin().await?;
        let result = insert_show(&txn, artist_id, venue_id, start_date).await;
        let show = finish(txn, result).await?;

        tracing::info!(
            "Show {} listed: artist {} at venue {} on {}",
            show.id,
            show.artist_id,
            show.venue_id,
            show.start_date
        );
        Ok(show)
    }

    /// Every show in storage order with both sides resolved.
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>> {
        let shows = shows::Entity::find()
            .order_by_asc(shows::Column::Id)
            .all(&self.db)
            .await?;
        let venues: HashMap<i32, venues::Model> = venues::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();
        let artists: HashMap<i32, artists::Model> = artists::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(shows
            .into_iter()
            .filter_map(|show| {
                let venue = venues.get(&show.venue_id)?;
                let artist = artists.get(&show.artist_id)?;
                Some(ShowListing {
                    id: show.id,
                    venue_id: venue.id,
                    venue_name: venue.name.clone(),
                    venue_image_link: venue.image_link.clone(),
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_date: show.start_date,
                    start_time: format_show_date(show.start_date),
                })
            })
            .collect())
    }

    pub async fn count_shows(&self) -> Result<u64> {
        Ok(shows::Entity::find().count(&self.db).await?)
    }
}

async fn insert_show<C: ConnectionTrait>(
    conn: &C,
    artist_id: i32,
    venue_id: i32,
    start_date: NaiveDate,
) -> Result<shows::Model> {
    if artists::Entity::find_by_id(artist_id).one(conn).await?.is_none() {
        return Err(AppError::NotFound(format!("Artist {} not found", artist_id)));
    }
    if venues::Entity::find_by_id(venue_id).one(conn).await?.is_none() {
        return Err(AppError::NotFound(format!("Venue {} not found", venue_id)));
    }

    Ok(shows::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_date: Set(start_date),
        ..Default::default()
    }
    .insert(conn)
    .await?)
}

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};

use super::locations::resolve_location;
use super::views::{
    count_upcoming, name_matches, partition_shows, ArtistDetail, EntitySummary, SearchResults,
    ShowSlot,
};
use super::{finish, require_name, today, ArtistFields, Store};
use crate::db::entities::{artists, locations, shows, venues};
use crate::error::{AppError, Result};

impl Store {
    pub async fn create_artist(
        &self,
        fields: ArtistFields,
        city: &str,
        state: &str,
    ) -> Result<artists::Model> {
        let txn = self.begin().await?;
        let result = insert_artist(&txn, fields, city, state).await;
        let artist = finish(txn, result).await?;

        tracing::info!("Artist {} ({}) was listed", artist.id, artist.name);
        Ok(artist)
    }

    pub async fn update_artist(
        &self,
        id: i32,
        fields: ArtistFields,
        city: &str,
        state: &str,
    ) -> Result<artists::Model> {
        let txn = self.begin().await?;
        let result = overwrite_artist(&txn, id, fields, city, state).await;
        let artist = finish(txn, result).await?;

        tracing::info!("Artist {} ({}) was updated", artist.id, artist.name);
        Ok(artist)
    }

    pub async fn delete_artist(&self, id: i32) -> Result<()> {
        let txn = self.begin().await?;
        let result = remove_artist(&txn, id).await;
        let removed_shows = finish(txn, result).await?;

        tracing::info!("Artist {} was deleted along with {} shows", id, removed_shows);
        Ok(())
    }

    pub async fn get_artist(&self, id: i32) -> Result<(artists::Model, Option<locations::Model>)> {
        let artist = find_artist(&self.db, id).await?;
        let location = artist.find_related(locations::Entity).one(&self.db).await?;
        Ok((artist, location))
    }

    pub async fn list_artists(&self) -> Result<Vec<EntitySummary>> {
        self.artist_summaries(today()).await
    }

    pub async fn search_artists(&self, term: &str) -> Result<SearchResults> {
        let data: Vec<EntitySummary> = self
            .artist_summaries(today())
            .await?
            .into_iter()
            .filter(|summary| name_matches(&summary.name, term))
            .collect();

        tracing::debug!("Artist search '{}' matched {}", term, data.len());
        Ok(SearchResults::new(data))
    }

    pub async fn get_artist_detail(&self, id: i32) -> Result<ArtistDetail> {
        self.get_artist_detail_at(id, today()).await
    }

    pub async fn get_artist_detail_at(&self, id: i32, today: NaiveDate) -> Result<ArtistDetail> {
        let (artist, location) = self.get_artist(id).await?;

        let booked = shows::Entity::find()
            .filter(shows::Column::ArtistId.eq(id))
            .order_by_asc(shows::Column::StartDate)
            .order_by_asc(shows::Column::Id)
            .find_also_related(venues::Entity)
            .all(&self.db)
            .await?;

        let slots = booked.iter().filter_map(|(show, venue)| {
            venue
                .as_ref()
                .map(|venue| ShowSlot::for_artist_page(show, venue))
        });

        Ok(ArtistDetail {
            shows: partition_shows(slots, today),
            artist,
            location,
        })
    }

    async fn artist_summaries(&self, today: NaiveDate) -> Result<Vec<EntitySummary>> {
        let artists = artists::Entity::find()
            .order_by_asc(artists::Column::Id)
            .all(&self.db)
            .await?;
        let shows = shows::Entity::find().all(&self.db).await?;
        let upcoming = count_upcoming(&shows, today, |s| s.artist_id);

        Ok(artists
            .into_iter()
            .map(|artist| EntitySummary {
                id: artist.id,
                num_upcoming_shows: upcoming.get(&artist.id).copied().unwrap_or(0),
                name: artist.name,
            })
            .collect())
    }
}

async fn find_artist<C: ConnectionTrait>(conn: &C, id: i32) -> Result<artists::Model> {
    artists::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))
}

async fn insert_artist<C: ConnectionTrait>(
    conn: &C,
    fields: ArtistFields,
    city: &str,
    state: &str,
) -> Result<artists::Model> {
    require_name("Artist", &fields.name)?;
    let location = resolve_location(conn, city, state).await?;

    let artist = artists::ActiveModel {
        location_id: Set(Some(location.id)),
        ..Default::default()
    };
    Ok(apply_fields(artist, fields).insert(conn).await?)
}

async fn overwrite_artist<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    fields: ArtistFields,
    city: &str,
    state: &str,
) -> Result<artists::Model> {
    let existing = find_artist(conn, id).await?;
    require_name("Artist", &fields.name)?;
    let location = resolve_location(conn, city, state).await?;

    let mut artist: artists::ActiveModel = existing.into();
    artist.location_id = Set(Some(location.id));
    Ok(apply_fields(artist, fields).update(conn).await?)
}

async fn remove_artist<C: ConnectionTrait>(conn: &C, id: i32) -> Result<u64> {
    let artist = find_artist(conn, id).await?;
    let removed = shows::Entity::delete_many()
        .filter(shows::Column::ArtistId.eq(id))
        .exec(conn)
        .await?;
    artist.delete(conn).await?;
    Ok(removed.rows_affected)
}

fn apply_fields(mut artist: artists::ActiveModel, fields: ArtistFields) -> artists::ActiveModel {
    artist.name = Set(fields.name);
    artist.phone = Set(fields.phone);
    artist.genres = Set(fields.genres.into());
    artist.website = Set(fields.website);
    artist.seeking_venue = Set(fields.seeking_venue);
    artist.seeking_description = Set(fields.seeking_description);
    artist.image_link = Set(fields.image_link);
    artist.facebook_link = Set(fields.facebook_link);
    artist
}

//! Domain store for locations, venues, artists and shows.
//!
//! The store holds an injected connection pool. Every mutating operation
//! acquires its own transaction and ends it through [`finish`], so a failure
//! at any step rolls back everything that operation wrote, including a
//! location it created on the way.

mod artists;
mod locations;
mod shows;
mod venues;
pub mod views;

use chrono::{NaiveDate, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::db::entities;
use crate::error::{AppError, Result};

pub use views::{
    partition_shows, ArtistDetail, EntitySummary, SearchResults, ShowListing, ShowPartition,
    ShowSlot, VenueArea, VenueDetail,
};

/// Editable venue attributes, as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueFields {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Editable artist attributes, as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistFields {
    pub name: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl From<&entities::venues::Model> for VenueFields {
    fn from(venue: &entities::venues::Model) -> Self {
        Self {
            name: venue.name.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.0.clone(),
            website: venue.website.clone(),
            seeking_talent: venue.seeking_talent.clone(),
            seeking_description: venue.seeking_description.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
        }
    }
}

impl From<&entities::artists::Model> for ArtistFields {
    fn from(artist: &entities::artists::Model) -> Self {
        Self {
            name: artist.name.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.0.clone(),
            website: artist.website.clone(),
            seeking_venue: artist.seeking_venue.clone(),
            seeking_description: artist.seeking_description.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
        }
    }
}

#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn begin(&self) -> Result<DatabaseTransaction> {
        Ok(self.db.begin().await?)
    }
}

/// Commit on success, roll back on failure. The triggering error wins over a
/// failed rollback.
async fn finish<T>(txn: DatabaseTransaction, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Rollback failed after {}: {}", err, rollback_err);
            }
            Err(err)
        }
    }
}

fn require_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::ConstraintViolation(format!("{} name is required", kind)));
    }
    Ok(())
}

/// Reference date for past/upcoming classification
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

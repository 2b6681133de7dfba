//! Test utilities for Venue Directory
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::{Duration, NaiveDate, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{artists, locations, shows, venues, Genres},
    state::AppState,
    store::{ArtistFields, VenueFields},
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 5000,
        run_migrations: true,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

/// A date `days` away from today; negative values are in the past
pub fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

/// Venue fields with only a name set
pub fn venue_fields(name: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        ..Default::default()
    }
}

/// Artist fields with only a name set
pub fn artist_fields(name: &str) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        ..Default::default()
    }
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Insert a location row directly, bypassing the store
pub async fn create_test_location(
    db: &DatabaseConnection,
    city: &str,
    state: &str,
) -> locations::Model {
    let location = locations::ActiveModel {
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        ..Default::default()
    };

    location.insert(db).await.expect("Failed to insert test location")
}

/// Insert a venue row directly, bypassing the store
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    location_id: Option<i32>,
) -> venues::Model {
    let venue = venues::ActiveModel {
        name: Set(name.to_string()),
        genres: Set(Genres(vec!["Jazz".to_string()])),
        location_id: Set(location_id),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Insert an artist row directly, bypassing the store
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    location_id: Option<i32>,
) -> artists::Model {
    let artist = artists::ActiveModel {
        name: Set(name.to_string()),
        genres: Set(Genres::default()),
        location_id: Set(location_id),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Insert a show row directly, bypassing the store
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_date: NaiveDate,
) -> shows::Model {
    let show = shows::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_date: Set(start_date),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}

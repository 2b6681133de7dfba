//! Database integration tests
//!
//! Tests the schema directly, without going through the store:
//! - Entities can be created with all required fields
//! - Foreign key constraints work correctly
//! - Unique keys on venue contact fields are enforced
//! - Genres survive a round-trip through the JSON column

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, PaginatorTrait, Set};

use venue_directory::db::entities::{artists, locations, shows, venues, Genres};
use venue_directory::error::AppError;
use venue_directory::test_utils::*;

#[tokio::test]
async fn test_create_location() {
    let db = setup_test_db().await;

    let location = create_test_location(&db, "San Francisco", "CA").await;

    assert_eq!(location.city, "San Francisco");
    assert_eq!(location.state, "CA");
    assert!(location.id > 0);
}

#[tokio::test]
async fn test_venue_genres_round_trip() {
    let db = setup_test_db().await;

    let venue = venues::ActiveModel {
        name: Set("The Musical Hop".to_string()),
        genres: Set(Genres(vec![
            "Jazz".to_string(),
            "Reggae".to_string(),
            "R&B".to_string(),
        ])),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let loaded = venues::Entity::find_by_id(venue.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.genres.0, vec!["Jazz", "Reggae", "R&B"]);
    assert_eq!(loaded.location_id, None);
}

#[tokio::test]
async fn test_venue_related_location() {
    let db = setup_test_db().await;
    let location = create_test_location(&db, "New York", "NY").await;
    let venue = create_test_venue(&db, "The Dueling Pianos Bar", Some(location.id)).await;

    let related = venue
        .find_related(locations::Entity)
        .one(&db)
        .await
        .unwrap();

    assert_eq!(related, Some(location));
}

#[tokio::test]
async fn test_venue_requires_valid_location() {
    let db = setup_test_db().await;

    let invalid_venue = venues::ActiveModel {
        name: Set("Floating".to_string()),
        genres: Set(Genres::default()),
        location_id: Set(Some(99999)),
        ..Default::default()
    };

    let result = invalid_venue.insert(&db).await;
    assert!(result.is_err(), "Should fail to create venue with invalid location_id");
}

#[tokio::test]
async fn test_duplicate_venue_name_is_constraint_violation() {
    let db = setup_test_db().await;
    create_test_venue(&db, "The Musical Hop", None).await;

    let result = venues::ActiveModel {
        name: Set("The Musical Hop".to_string()),
        genres: Set(Genres::default()),
        ..Default::default()
    }
    .insert(&db)
    .await;

    let err = AppError::from(result.unwrap_err());
    assert!(matches!(err, AppError::ConstraintViolation(_)));
}

#[tokio::test]
async fn test_show_requires_valid_artist() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", None).await;

    let invalid_show = shows::ActiveModel {
        artist_id: Set(99999), // Non-existent artist
        venue_id: Set(venue.id),
        start_date: Set(NaiveDate::from_ymd_opt(2035, 4, 1).unwrap()),
        ..Default::default()
    };

    // This should fail due to foreign key constraint
    let result = invalid_show.insert(&db).await;
    assert!(result.is_err(), "Should fail to create show with invalid artist_id");
}

#[tokio::test]
async fn test_deleting_artist_cascades_to_shows() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", None).await;
    let artist = create_test_artist(&db, "Guns N Petals", None).await;
    create_test_show(&db, artist.id, venue.id, days_from_today(1)).await;
    create_test_show(&db, artist.id, venue.id, days_from_today(-1)).await;

    artists::Entity::delete_by_id(artist.id).exec(&db).await.unwrap();

    let remaining = shows::Entity::find().count(&db).await.unwrap();
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn test_deleting_location_unlinks_venues() {
    let db = setup_test_db().await;
    let location = create_test_location(&db, "Austin", "TX").await;
    let venue = create_test_venue(&db, "Stubb's", Some(location.id)).await;

    locations::Entity::delete_by_id(location.id).exec(&db).await.unwrap();

    let reloaded = venues::Entity::find_by_id(venue.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.location_id, None);
}

#[tokio::test]
async fn test_show_related_entities() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "Park Square", None).await;
    let artist = create_test_artist(&db, "The Wild Sax Band", None).await;
    let show = create_test_show(&db, artist.id, venue.id, days_from_today(30)).await;

    let venue_shows = venue.find_related(shows::Entity).all(&db).await.unwrap();
    let show_artist = show.find_related(artists::Entity).one(&db).await.unwrap();

    assert_eq!(venue_shows, vec![show]);
    assert_eq!(show_artist.map(|a| a.name), Some("The Wild Sax Band".to_string()));
}

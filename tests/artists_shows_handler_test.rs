//! Integration tests for artist and show handler routes

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use pretty_assertions::assert_eq;
use tower::util::ServiceExt;

use venue_directory::handlers;
use venue_directory::state::AppState;
use venue_directory::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(handlers::html_routes())
        .with_state(state.clone())
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_home_page() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Post a venue"));
}

// ============================================================================
// Artists
// ============================================================================

#[tokio::test]
async fn test_list_artists() {
    let state = setup_test_app_state().await;
    state
        .store
        .create_artist(artist_fields("Guns N Petals"), "San Francisco", "CA")
        .await
        .unwrap();
    state
        .store
        .create_artist(artist_fields("Matt Quevedo"), "New York", "NY")
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app.oneshot(get_request("/artists")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("Matt Quevedo"));
}

#[tokio::test]
async fn test_search_artists_no_match() {
    let state = setup_test_app_state().await;
    state
        .store
        .create_artist(artist_fields("Guns N Petals"), "San Francisco", "CA")
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request("/artists/search", "search_term=zzz"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains(": 0"));
    assert!(!body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_create_artist_submission() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/artists/create",
            "name=The+Wild+Sax+Band&city=San+Francisco&state=CA&genres=Jazz&genres=Classical\
             &seeking_venue=No",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("Artist The Wild Sax Band was successfully listed!"));

    let artists = state.store.list_artists().await.unwrap();
    assert_eq!(artists.len(), 1);
    let (artist, _) = state.store.get_artist(artists[0].id).await.unwrap();
    assert_eq!(artist.genres.0, vec!["Jazz", "Classical"]);
    assert_eq!(artist.seeking_venue.as_deref(), Some("No"));
}

#[tokio::test]
async fn test_create_artist_without_name_fails() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request("/artists/create", "name=&city=Austin&state=TX"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(body_text(response).await.contains("could not be listed."));
    assert_eq!(state.store.list_artists().await.unwrap().len(), 0);
    assert_eq!(state.store.list_locations().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_show_artist_partitions() {
    let state = setup_test_app_state().await;
    let venue = state
        .store
        .create_venue(venue_fields("The Musical Hop"), "San Francisco", "CA")
        .await
        .unwrap();
    let artist = state
        .store
        .create_artist(artist_fields("Guns N Petals"), "San Francisco", "CA")
        .await
        .unwrap();
    state
        .store
        .create_show(artist.id, venue.id, days_from_today(0))
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app
        .oneshot(get_request(&format!("/artists/{}", artist.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("1 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
    assert!(body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_edit_artist_submission_redirects() {
    let state = setup_test_app_state().await;
    let artist = state
        .store
        .create_artist(artist_fields("Matt Quevedo"), "New York", "NY")
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            &format!("/artists/{}/edit", artist.id),
            "name=Matt+Quevedo&city=Chicago&state=IL&phone=300-400-5000",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let (updated, location) = state.store.get_artist(artist.id).await.unwrap();
    assert_eq!(updated.phone.as_deref(), Some("300-400-5000"));
    assert_eq!(location.unwrap().city, "Chicago");
}

#[tokio::test]
async fn test_delete_artist_api_removes_shows() {
    let state = setup_test_app_state().await;
    let venue = state
        .store
        .create_venue(venue_fields("Hall"), "Austin", "TX")
        .await
        .unwrap();
    let artist = state
        .store
        .create_artist(artist_fields("Leaving"), "Austin", "TX")
        .await
        .unwrap();
    state
        .store
        .create_show(artist.id, venue.id, days_from_today(3))
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/artists/{}", artist.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(state.store.count_shows().await.unwrap(), 0);
}

// ============================================================================
// Shows
// ============================================================================

#[tokio::test]
async fn test_list_shows() {
    let state = setup_test_app_state().await;
    let venue = state
        .store
        .create_venue(venue_fields("Park Square"), "San Francisco", "CA")
        .await
        .unwrap();
    let artist = state
        .store
        .create_artist(artist_fields("The Wild Sax Band"), "San Francisco", "CA")
        .await
        .unwrap();
    let date = days_from_today(12);
    state.store.create_show(artist.id, venue.id, date).await.unwrap();
    let app = create_test_router(&state);

    let response = app.oneshot(get_request("/shows")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Wild Sax Band"));
    assert!(body.contains("Park Square"));
    assert!(body.contains(&date.format("%m/%d/%Y").to_string()));
}

#[tokio::test]
async fn test_create_show_submission() {
    let state = setup_test_app_state().await;
    let venue = state
        .store
        .create_venue(venue_fields("Park Square"), "San Francisco", "CA")
        .await
        .unwrap();
    let artist = state
        .store
        .create_artist(artist_fields("The Wild Sax Band"), "San Francisco", "CA")
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/shows/create",
            &format!(
                "artist_id={}&venue_id={}&start_time=2035-04-01T20%3A00",
                artist.id, venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Show was successfully listed!"));
    let shows = state.store.list_shows().await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].start_time, "04/01/2035");
}

#[tokio::test]
async fn test_create_show_with_missing_venue() {
    let state = setup_test_app_state().await;
    let artist = state
        .store
        .create_artist(artist_fields("Solo"), "Austin", "TX")
        .await
        .unwrap();
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/shows/create",
            &format!("artist_id={}&venue_id=999&start_time=2035-04-01", artist.id),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response)
        .await
        .contains("An error occurred. Show could not be listed."));
    assert_eq!(state.store.count_shows().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_show_with_bad_date() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/shows/create",
            "artist_id=1&venue_id=1&start_time=someday",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response)
        .await
        .contains("An error occurred. Show could not be listed."));
}

pub mod artists;
pub mod forms;
pub mod health;
pub mod shows;
pub mod venues;

use axum::{
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};

use crate::{
    error::AppError,
    state::AppState,
    templates::{home_page, Flash},
};

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(venues::show_venue).delete(venues::delete_venue_api),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )
        .route("/venues/:id/delete", post(venues::delete_venue))
        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route(
            "/artists/:id",
            get(artists::show_artist).delete(artists::delete_artist_api),
        )
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )
        .route("/artists/:id/delete", post(artists::delete_artist))
        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}

pub async fn index() -> Html<String> {
    Html(home_page(None).into_string())
}

/// Home page with a success flash
fn listed(message: impl Into<String>) -> Response {
    Html(home_page(Some(&Flash::success(message))).into_string()).into_response()
}

/// Home page with an error flash, carrying the failure's status code
fn failed_submission(err: AppError, message: impl Into<String>) -> Response {
    err.log();
    let flash = Flash::error(message);
    (err.status_code(), Html(home_page(Some(&flash)).into_string())).into_response()
}

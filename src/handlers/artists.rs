use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;

use super::forms::{ArtistForm, SearchForm};
use super::{failed_submission, listed};
use crate::{
    error::{AppError, Result},
    state::AppState,
    store::ArtistFields,
    templates::{artist_detail_page, artist_form_page, artists_page, search_results_page, Flash},
};

pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = state.store.list_artists().await?;
    Ok(Html(artists_page(&artists).into_string()))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = state.store.search_artists(&form.search_term).await?;
    Ok(Html(
        search_results_page("/artists", &form.search_term, &results).into_string(),
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let detail = state.store.get_artist_detail(id).await?;
    Ok(Html(artist_detail_page(&detail).into_string()))
}

pub async fn create_artist_form() -> Html<String> {
    Html(
        artist_form_page(
            "List a new artist",
            "/artists/create",
            &ArtistFields::default(),
            "",
            "",
            None,
        )
        .into_string(),
    )
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Response {
    let (fields, city, state_code) = form.into_parts();
    let name = fields.name.clone();

    match state.store.create_artist(fields, &city, &state_code).await {
        Ok(artist) => listed(format!("Artist {} was successfully listed!", artist.name)),
        Err(err) => failed_submission(
            err,
            format!("An error occurred. Artist {} could not be listed.", name),
        ),
    }
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let (artist, location) = state.store.get_artist(id).await?;
    let (city, state_code) = location.map(|l| (l.city, l.state)).unwrap_or_default();

    Ok(Html(
        artist_form_page(
            "Edit artist",
            &format!("/artists/{}/edit", id),
            &ArtistFields::from(&artist),
            &city,
            &state_code,
            None,
        )
        .into_string(),
    ))
}

/// Redirects to the artist page on success. A rejected edit re-renders the
/// form with what was submitted.
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let (fields, city, state_code) = form.into_parts();

    match state
        .store
        .update_artist(id, fields.clone(), &city, &state_code)
        .await
    {
        Ok(_) => Ok(Redirect::to(&format!("/artists/{}", id)).into_response()),
        Err(err @ (AppError::ConstraintViolation(_) | AppError::Validation(_))) => {
            err.log();
            let flash = Flash::error(format!(
                "Artist {} could not be updated: {}",
                fields.name,
                err.public_message()
            ));
            let page = artist_form_page(
                "Edit artist",
                &format!("/artists/{}/edit", id),
                &fields,
                &city,
                &state_code,
                Some(&flash),
            );
            Ok((err.status_code(), Html(page.into_string())).into_response())
        }
        Err(err) => Err(err),
    }
}

pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    state.store.delete_artist(id).await?;
    Ok(Redirect::to("/artists"))
}

pub async fn delete_artist_api(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    state.store.delete_artist(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

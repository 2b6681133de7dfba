use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;

use super::forms::{SearchForm, VenueForm};
use super::{failed_submission, listed};
use crate::{
    error::{AppError, Result},
    state::AppState,
    store::{VenueArea, VenueFields},
    templates::{search_results_page, venue_detail_page, venue_form_page, venues_page, Flash},
};

/// Venues grouped by city and state
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>> {
    let areas: Vec<VenueArea> = state.store.list_venues_by_location().await?.collect();
    Ok(Html(venues_page(&areas).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let results = state.store.search_venues(&form.search_term).await?;
    Ok(Html(
        search_results_page("/venues", &form.search_term, &results).into_string(),
    ))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let detail = state.store.get_venue_detail(id).await?;
    Ok(Html(venue_detail_page(&detail).into_string()))
}

pub async fn create_venue_form() -> Html<String> {
    Html(
        venue_form_page(
            "List a new venue",
            "/venues/create",
            &VenueFields::default(),
            "",
            "",
            None,
        )
        .into_string(),
    )
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Response {
    let (fields, city, state_code) = form.into_parts();
    let name = fields.name.clone();

    match state.store.create_venue(fields, &city, &state_code).await {
        Ok(venue) => listed(format!("Venue {} was successfully listed!", venue.name)),
        Err(err) => failed_submission(
            err,
            format!("An error occurred. Venue {} could not be listed.", name),
        ),
    }
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let (venue, location) = state.store.get_venue(id).await?;
    let (city, state_code) = location.map(|l| (l.city, l.state)).unwrap_or_default();

    Ok(Html(
        venue_form_page(
            "Edit venue",
            &format!("/venues/{}/edit", id),
            &VenueFields::from(&venue),
            &city,
            &state_code,
            None,
        )
        .into_string(),
    ))
}

/// Redirects to the venue page on success. A rejected edit re-renders the
/// form with what was submitted.
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let (fields, city, state_code) = form.into_parts();

    match state
        .store
        .update_venue(id, fields.clone(), &city, &state_code)
        .await
    {
        Ok(_) => Ok(Redirect::to(&format!("/venues/{}", id)).into_response()),
        Err(err @ (AppError::ConstraintViolation(_) | AppError::Validation(_))) => {
            err.log();
            let flash = Flash::error(format!(
                "Venue {} could not be updated: {}",
                fields.name,
                err.public_message()
            ));
            let page = venue_form_page(
                "Edit venue",
                &format!("/venues/{}/edit", id),
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

/// Form-friendly delete
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    state.store.delete_venue(id).await?;
    Ok(Redirect::to("/venues"))
}

pub async fn delete_venue_api(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    state.store.delete_venue(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

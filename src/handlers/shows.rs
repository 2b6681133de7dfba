use axum::{
    extract::State,
    response::{Html, Response},
};
use axum_extra::extract::Form;

use super::forms::ShowForm;
use super::{failed_submission, listed};
use crate::{
    error::Result,
    state::AppState,
    templates::{show_form_page, shows_page},
};

pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = state.store.list_shows().await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_show_form() -> Html<String> {
    Html(show_form_page(None).into_string())
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Response {
    let outcome = match form.parse() {
        Ok((artist_id, venue_id, start_date)) => {
            state.store.create_show(artist_id, venue_id, start_date).await
        }
        Err(err) => Err(err),
    };

    match outcome {
        Ok(_) => listed("Show was successfully listed!"),
        Err(err) => failed_submission(err, "An error occurred. Show could not be listed."),
    }
}

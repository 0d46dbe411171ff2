//! Show pages: global listing and creation

use axum::{extract::State, Form, Json};
use gigboard_common::time::{format_start_time, parse_start_time};
use serde::Serialize;
use tracing::error;

use crate::db;
use crate::forms::{FormFields, ShowForm};
use crate::{
    api::{ApiError, FlashResponse},
    AppState,
};

/// One row of the global show listing, both endpoints joined in
#[derive(Debug, Serialize)]
pub struct ShowEntry {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

#[derive(Debug, Serialize)]
pub struct ShowsPage {
    pub shows: Vec<ShowEntry>,
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> Result<Json<ShowsPage>, ApiError> {
    let shows = db::shows::list_all(&state.db)
        .await?
        .into_iter()
        .map(|s| ShowEntry {
            venue_id: s.venue_id,
            venue_name: s.venue_name,
            artist_id: s.artist_id,
            artist_name: s.artist_name,
            artist_image_link: s.artist_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect();

    Ok(Json(ShowsPage { shows }))
}

/// Blank form model for the show-creation page
#[derive(Debug, Default, Serialize)]
pub struct ShowFormModel {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

/// GET /shows/create
pub async fn create_show_form() -> Json<ShowFormModel> {
    Json(ShowFormModel::default())
}

/// POST /shows/create
///
/// Id and start-time parsing happen inside the write unit: a malformed
/// field fails the whole submission with the generic failure flash.
pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<FlashResponse> {
    let form = ShowForm::from_fields(&FormFields::new(pairs));

    match persist_show(&state, &form).await {
        Ok(()) => FlashResponse::to_home("Show was successfully listed!".to_string()),
        Err(e) => {
            error!("Failed to create show: {}", e);
            FlashResponse::to_home("An error occurred. Show could not be listed.".to_string())
        }
    }
}

async fn persist_show(state: &AppState, form: &ShowForm) -> gigboard_common::Result<()> {
    let artist_id: i64 = form
        .artist_id
        .trim()
        .parse()
        .map_err(|_| gigboard_common::Error::InvalidInput(format!("artist id: {}", form.artist_id)))?;
    let venue_id: i64 = form
        .venue_id
        .trim()
        .parse()
        .map_err(|_| gigboard_common::Error::InvalidInput(format!("venue id: {}", form.venue_id)))?;
    let start_time = parse_start_time(&form.start_time)?;

    db::shows::insert_show(&state.db, artist_id, venue_id, start_time).await
}

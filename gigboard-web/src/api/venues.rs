//! Venue pages: area listing, search, detail, create/edit/delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use chrono::Utc;
use gigboard_common::time::format_start_time;
use gigboard_common::Error;
use serde::Serialize;
use tracing::error;

use crate::classify::{group_by_area, partition_shows, AreaGroup, SearchHit};
use crate::db;
use crate::forms::{FormFields, VenueForm};
use crate::{
    api::{ApiError, FlashResponse},
    AppState,
};

/// Grouped venue listing, one group per distinct (city, state) pair
#[derive(Debug, Serialize)]
pub struct VenuesPage {
    pub areas: Vec<AreaGroup>,
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Result<Json<VenuesPage>, ApiError> {
    let now = Utc::now().naive_utc();
    let summaries = db::venues::list_summaries(&state.db, now).await?;

    Ok(Json(VenuesPage {
        areas: group_by_area(summaries),
    }))
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub count: usize,
    pub data: Vec<SearchHit>,
    pub search_term: String,
}

/// POST /venues/search (form field `search_term`)
pub async fn search_venues(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<SearchPage>, ApiError> {
    let fields = FormFields::new(pairs);
    let search_term = fields.get("search_term").to_string();

    let now = Utc::now().naive_utc();
    let data = db::venues::search_by_name(&state.db, &search_term, now).await?;

    Ok(Json(SearchPage {
        count: data.len(),
        data,
        search_term,
    }))
}

/// One show on a venue page, decorated with its artist
#[derive(Debug, Serialize)]
pub struct VenueShowEntry {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// Venue detail page with classified shows
#[derive(Debug, Serialize)]
pub struct VenuePage {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub image_link: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
}

fn to_entries(shows: Vec<crate::classify::BookedShow>) -> Vec<VenueShowEntry> {
    shows
        .into_iter()
        .map(|s| VenueShowEntry {
            artist_id: s.counterpart_id,
            artist_name: s.counterpart_name,
            artist_image_link: s.counterpart_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect()
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<VenuePage>, ApiError> {
    let venue = db::venues::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("venue {venue_id}")))?;

    let shows = db::venues::shows_for_venue(&state.db, venue_id).await?;
    let now = Utc::now().naive_utc();
    let classified = partition_shows(shows, now);

    Ok(Json(VenuePage {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        image_link: venue.image_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        upcoming_shows_count: classified.upcoming_count(),
        past_shows_count: classified.past_count(),
        upcoming_shows: to_entries(classified.upcoming),
        past_shows: to_entries(classified.past),
    }))
}

/// Form model handed to the template layer for create and edit pages
#[derive(Debug, Default, Serialize)]
pub struct VenueFormModel {
    pub id: Option<i64>,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// GET /venues/create
pub async fn create_venue_form() -> Json<VenueFormModel> {
    Json(VenueFormModel::default())
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<FlashResponse> {
    let form = VenueForm::from_fields(&FormFields::new(pairs));

    match db::venues::insert_venue(&state.db, &form).await {
        Ok(()) => FlashResponse::to_home(format!("Venue {} was successfully listed!", form.name)),
        Err(e) => {
            error!("Failed to create venue {:?}: {}", form.name, e);
            FlashResponse::to_home(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name
            ))
        }
    }
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
) -> Result<Json<VenueFormModel>, ApiError> {
    let venue = db::venues::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("venue {venue_id}")))?;

    Ok(Json(VenueFormModel {
        id: Some(venue.id),
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        image_link: venue.image_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
    }))
}

/// POST /venues/:id/edit
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(venue_id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<FlashResponse> {
    let form = VenueForm::from_fields(&FormFields::new(pairs));
    let detail_page = format!("/venues/{venue_id}");

    match db::venues::update_venue(&state.db, venue_id, &form).await {
        Ok(()) => FlashResponse::to_page(
            format!("Venue {} was successfully edited!", form.name),
            detail_page,
        ),
        Err(e) => {
            error!("Failed to edit venue {}: {}", venue_id, e);
            FlashResponse::to_page(
                format!("An error occurred. Venue {} could not be edited.", form.name),
                detail_page,
            )
        }
    }
}

/// DELETE /venues/:id
pub async fn delete_venue(State(state): State<AppState>, Path(venue_id): Path<i64>) -> Response {
    match db::venues::delete_venue(&state.db, venue_id).await {
        Ok(name) => {
            FlashResponse::to_home(format!("Venue {} was deleted!", name)).into_response()
        }
        Err(Error::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            FlashResponse::to_home(format!(
                "Something went wrong! Venue {} does not exist.",
                venue_id
            )),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to delete venue {}: {}", venue_id, e);
            FlashResponse::to_home(format!(
                "Something went wrong! Could not delete venue {}.",
                venue_id
            ))
            .into_response()
        }
    }
}

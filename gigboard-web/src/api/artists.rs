//! Artist pages: listing, search, detail, create/edit

use axum::{
    extract::{Path, State},
    Form, Json,
};
use chrono::Utc;
use gigboard_common::time::format_start_time;
use serde::Serialize;
use tracing::error;

use crate::classify::{partition_shows, SearchHit};
use crate::db;
use crate::forms::{ArtistForm, FormFields};
use crate::{
    api::{ApiError, FlashResponse},
    AppState,
};

#[derive(Debug, Serialize)]
pub struct ArtistListItem {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ArtistsPage {
    pub artists: Vec<ArtistListItem>,
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> Result<Json<ArtistsPage>, ApiError> {
    let artists = db::artists::list_all(&state.db)
        .await?
        .into_iter()
        .map(|(id, name)| ArtistListItem { id, name })
        .collect();

    Ok(Json(ArtistsPage { artists }))
}

#[derive(Debug, Serialize)]
pub struct SearchPage {
    pub count: usize,
    pub data: Vec<SearchHit>,
    pub search_term: String,
}

/// POST /artists/search (form field `search_term`)
pub async fn search_artists(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<SearchPage>, ApiError> {
    let fields = FormFields::new(pairs);
    let search_term = fields.get("search_term").to_string();

    let now = Utc::now().naive_utc();
    let data = db::artists::search_by_name(&state.db, &search_term, now).await?;

    Ok(Json(SearchPage {
        count: data.len(),
        data,
        search_term,
    }))
}

/// One show on an artist page, decorated with its venue
#[derive(Debug, Serialize)]
pub struct ArtistShowEntry {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

/// Artist detail page with classified shows
#[derive(Debug, Serialize)]
pub struct ArtistPage {
    pub id: i64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
}

fn to_entries(shows: Vec<crate::classify::BookedShow>) -> Vec<ArtistShowEntry> {
    shows
        .into_iter()
        .map(|s| ArtistShowEntry {
            venue_id: s.counterpart_id,
            venue_name: s.counterpart_name,
            venue_image_link: s.counterpart_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect()
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<Json<ArtistPage>, ApiError> {
    let artist = db::artists::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("artist {artist_id}")))?;

    let shows = db::artists::shows_for_artist(&state.db, artist_id).await?;
    let now = Utc::now().naive_utc();
    let classified = partition_shows(shows, now);

    Ok(Json(ArtistPage {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        image_link: artist.image_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        upcoming_shows_count: classified.upcoming_count(),
        past_shows_count: classified.past_count(),
        upcoming_shows: to_entries(classified.upcoming),
        past_shows: to_entries(classified.past),
    }))
}

/// Form model handed to the template layer for create and edit pages
#[derive(Debug, Default, Serialize)]
pub struct ArtistFormModel {
    pub id: Option<i64>,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// GET /artists/create
pub async fn create_artist_form() -> Json<ArtistFormModel> {
    Json(ArtistFormModel::default())
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<FlashResponse> {
    let form = ArtistForm::from_fields(&FormFields::new(pairs));

    match db::artists::insert_artist(&state.db, &form).await {
        Ok(()) => FlashResponse::to_home(format!("Artist {} was successfully listed!", form.name)),
        Err(e) => {
            error!("Failed to create artist {:?}: {}", form.name, e);
            FlashResponse::to_home(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name
            ))
        }
    }
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
) -> Result<Json<ArtistFormModel>, ApiError> {
    let artist = db::artists::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("artist {artist_id}")))?;

    Ok(Json(ArtistFormModel {
        id: Some(artist.id),
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        image_link: artist.image_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
    }))
}

/// POST /artists/:id/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(artist_id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Json<FlashResponse> {
    let form = ArtistForm::from_fields(&FormFields::new(pairs));
    let detail_page = format!("/artists/{artist_id}");

    match db::artists::update_artist(&state.db, artist_id, &form).await {
        Ok(()) => FlashResponse::to_page(
            format!("Artist {} was successfully edited!", form.name),
            detail_page,
        ),
        Err(e) => {
            error!("Failed to edit artist {}: {}", artist_id, e);
            FlashResponse::to_page(
                format!(
                    "An error occurred. Artist {} could not be edited.",
                    form.name
                ),
                detail_page,
            )
        }
    }
}

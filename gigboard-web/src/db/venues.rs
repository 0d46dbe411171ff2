//! Venue database queries

use chrono::NaiveDateTime;
use gigboard_common::db::models::{genres_from_json, genres_to_json, Venue};
use gigboard_common::{Error, Result};
use sqlx::{Row, SqlitePool};

use crate::classify::{BookedShow, SearchHit, VenueSummary};
use crate::forms::VenueForm;

fn venue_from_row(row: &sqlx::sqlite::SqliteRow) -> Venue {
    Venue {
        id: row.get("id"),
        name: row.get("name"),
        genres: genres_from_json(row.get("genres")),
        address: row.get("address"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        website: row.get("website"),
        facebook_link: row.get("facebook_link"),
        image_link: row.get("image_link"),
        seeking_talent: row.get::<i64, _>("seeking_talent") != 0,
        seeking_description: row.get("seeking_description"),
    }
}

/// Get a venue by id
pub async fn get_venue(db: &SqlitePool, venue_id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query("SELECT * FROM venues WHERE id = ?")
        .bind(venue_id)
        .fetch_optional(db)
        .await?;

    Ok(row.as_ref().map(venue_from_row))
}

/// All venues with their upcoming-show counts, for the area listing.
///
/// The upcoming count applies the strict `start_time > now` rule against
/// the caller-supplied instant.
pub async fn list_summaries(db: &SqlitePool, now: NaiveDateTime) -> Result<Vec<VenueSummary>> {
    let rows = sqlx::query(
        "SELECT v.id, v.name, v.city, v.state,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         ORDER BY v.id ASC",
    )
    .bind(now)
    .fetch_all(db)
    .await?;

    Ok(rows
        .iter()
        .map(|row| VenueSummary {
            id: row.get("id"),
            name: row.get("name"),
            city: row.get("city"),
            state: row.get("state"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        })
        .collect())
}

/// Case-insensitive substring search over venue names.
///
/// An empty needle matches every venue.
pub async fn search_by_name(
    db: &SqlitePool,
    needle: &str,
    now: NaiveDateTime,
) -> Result<Vec<SearchHit>> {
    let rows = sqlx::query(
        "SELECT v.id, v.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         WHERE v.name LIKE '%' || ? || '%' COLLATE NOCASE
         ORDER BY v.id ASC",
    )
    .bind(now)
    .bind(needle)
    .fetch_all(db)
    .await?;

    Ok(rows
        .iter()
        .map(|row| SearchHit {
            id: row.get("id"),
            name: row.get("name"),
            num_upcoming_shows: row.get("num_upcoming_shows"),
        })
        .collect())
}

/// All shows booked at a venue, joined with their artists, ascending by
/// start time
pub async fn shows_for_venue(db: &SqlitePool, venue_id: i64) -> Result<Vec<BookedShow>> {
    let rows = sqlx::query(
        "SELECT s.start_time, a.id AS artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link
         FROM shows s
         JOIN artists a ON s.artist_id = a.id
         WHERE s.venue_id = ?
         ORDER BY s.start_time ASC",
    )
    .bind(venue_id)
    .fetch_all(db)
    .await?;

    Ok(rows
        .iter()
        .map(|row| BookedShow {
            counterpart_id: row.get("artist_id"),
            counterpart_name: row.get("artist_name"),
            counterpart_image_link: row.get("artist_image_link"),
            start_time: row.get("start_time"),
        })
        .collect())
}

/// Insert a new venue from a submitted form
pub async fn insert_venue(db: &SqlitePool, form: &VenueForm) -> Result<()> {
    let mut tx = db.begin().await?;

    sqlx::query(
        "INSERT INTO venues (name, genres, address, city, state, phone, website,
                             facebook_link, image_link, seeking_talent, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&form.name)
    .bind(genres_to_json(&form.genres))
    .bind(&form.address)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.phone)
    .bind(&form.website)
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

/// Overwrite an existing venue with submitted form fields
pub async fn update_venue(db: &SqlitePool, venue_id: i64, form: &VenueForm) -> Result<()> {
    let mut tx = db.begin().await?;

    let result = sqlx::query(
        "UPDATE venues
         SET name = ?, genres = ?, address = ?, city = ?, state = ?, phone = ?,
             website = ?, facebook_link = ?, image_link = ?, seeking_talent = ?,
             seeking_description = ?
         WHERE id = ?",
    )
    .bind(&form.name)
    .bind(genres_to_json(&form.genres))
    .bind(&form.address)
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.phone)
    .bind(&form.website)
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(form.seeking_talent)
    .bind(&form.seeking_description)
    .bind(venue_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {venue_id}")));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue by id, returning its name for the flash message
pub async fn delete_venue(db: &SqlitePool, venue_id: i64) -> Result<String> {
    let mut tx = db.begin().await?;

    let name: Option<String> = sqlx::query_scalar("SELECT name FROM venues WHERE id = ?")
        .bind(venue_id)
        .fetch_optional(&mut *tx)
        .await?;

    let name = name.ok_or_else(|| Error::NotFound(format!("venue {venue_id}")))?;

    sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(name)
}

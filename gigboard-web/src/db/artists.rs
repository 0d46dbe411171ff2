//! Artist database queries

use chrono::NaiveDateTime;
use gigboard_common::db::models::{genres_from_json, genres_to_json, Artist};
use gigboard_common::{Error, Result};
use sqlx::{Row, SqlitePool};

use crate::classify::{BookedShow, SearchHit};
use crate::forms::ArtistForm;

fn artist_from_row(row: &sqlx::sqlite::SqliteRow) -> Artist {
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        genres: genres_from_json(row.get("genres")),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        website: row.get("website"),
        facebook_link: row.get("facebook_link"),
        image_link: row.get("image_link"),
        seeking_venue: row.get::<i64, _>("seeking_venue") != 0,
        seeking_description: row.get("seeking_description"),
    }
}

/// Get an artist by id
pub async fn get_artist(db: &SqlitePool, artist_id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT * FROM artists WHERE id = ?")
        .bind(artist_id)
        .fetch_optional(db)
        .await?;

    Ok(row.as_ref().map(artist_from_row))
}

/// All artists, id and name only, for the directory listing
pub async fn list_all(db: &SqlitePool) -> Result<Vec<(i64, String)>> {
    let rows = sqlx::query("SELECT id, name FROM artists ORDER BY id ASC")
        .fetch_all(db)
        .await?;

    Ok(rows
        .iter()
        .map(|row| (row.get("id"), row.get("name")))
        .collect())
}

/// Case-insensitive substring search over artist names.
///
/// An empty needle matches every artist.
pub async fn search_by_name(
    db: &SqlitePool,
    needle: &str,
    now: NaiveDateTime,
) -> Result<Vec<SearchHit>> {
    let rows = sqlx::query(
        "SELECT a.id, a.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.artist_id = a.id AND s.start_time > ?) AS num_upcoming_shows
         FROM artists a
         WHERE a.name LIKE '%' || ? || '%' COLLATE NOCASE
         ORDER BY a.id ASC",
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

/// All shows an artist plays, joined with their venues, ascending by
/// start time
pub async fn shows_for_artist(db: &SqlitePool, artist_id: i64) -> Result<Vec<BookedShow>> {
    let rows = sqlx::query(
        "SELECT s.start_time, v.id AS venue_id, v.name AS venue_name,
                v.image_link AS venue_image_link
         FROM shows s
         JOIN venues v ON s.venue_id = v.id
         WHERE s.artist_id = ?
         ORDER BY s.start_time ASC",
    )
    .bind(artist_id)
    .fetch_all(db)
    .await?;

    Ok(rows
        .iter()
        .map(|row| BookedShow {
            counterpart_id: row.get("venue_id"),
            counterpart_name: row.get("venue_name"),
            counterpart_image_link: row.get("venue_image_link"),
            start_time: row.get("start_time"),
        })
        .collect())
}

/// Insert a new artist from a submitted form
pub async fn insert_artist(db: &SqlitePool, form: &ArtistForm) -> Result<()> {
    let mut tx = db.begin().await?;

    sqlx::query(
        "INSERT INTO artists (name, genres, city, state, phone, website,
                              facebook_link, image_link, seeking_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&form.name)
    .bind(genres_to_json(&form.genres))
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.phone)
    .bind(&form.website)
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(form.seeking_venue)
    .bind(&form.seeking_description)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(())
}

/// Overwrite an existing artist with submitted form fields
pub async fn update_artist(db: &SqlitePool, artist_id: i64, form: &ArtistForm) -> Result<()> {
    let mut tx = db.begin().await?;

    let result = sqlx::query(
        "UPDATE artists
         SET name = ?, genres = ?, city = ?, state = ?, phone = ?, website = ?,
             facebook_link = ?, image_link = ?, seeking_venue = ?, seeking_description = ?
         WHERE id = ?",
    )
    .bind(&form.name)
    .bind(genres_to_json(&form.genres))
    .bind(&form.city)
    .bind(&form.state)
    .bind(&form.phone)
    .bind(&form.website)
    .bind(&form.facebook_link)
    .bind(&form.image_link)
    .bind(form.seeking_venue)
    .bind(&form.seeking_description)
    .bind(artist_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {artist_id}")));
    }

    tx.commit().await?;
    Ok(())
}

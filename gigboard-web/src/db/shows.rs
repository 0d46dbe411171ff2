//! Show database queries

use chrono::NaiveDateTime;
use gigboard_common::Result;
use sqlx::{Row, SqlitePool};

/// A show joined with both of its endpoints for the global listing
#[derive(Debug, Clone)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// All shows with venue and artist display fields, ascending by start time
pub async fn list_all(db: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        "SELECT s.start_time,
                v.id AS venue_id, v.name AS venue_name,
                a.id AS artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link
         FROM shows s
         JOIN venues v ON s.venue_id = v.id
         JOIN artists a ON s.artist_id = a.id
         ORDER BY s.start_time ASC",
    )
    .fetch_all(db)
    .await?;

    Ok(rows
        .iter()
        .map(|row| ShowListing {
            venue_id: row.get("venue_id"),
            venue_name: row.get("venue_name"),
            artist_id: row.get("artist_id"),
            artist_name: row.get("artist_name"),
            artist_image_link: row.get("artist_image_link"),
            start_time: row.get("start_time"),
        })
        .collect())
}

/// Insert a new show linking an artist to a venue.
///
/// Foreign keys reject unknown artist/venue ids; the unique triple
/// constraint rejects duplicate bookings. Either failure rolls back.
pub async fn insert_show(
    db: &SqlitePool,
    artist_id: i64,
    venue_id: i64,
    start_time: NaiveDateTime,
) -> Result<()> {
    let mut tx = db.begin().await?;

    sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(artist_id)
        .bind(venue_id)
        .bind(start_time)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

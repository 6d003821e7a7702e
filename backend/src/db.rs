//! SQLite storage of the `products` collection.
//!
//! Handlers open one connection per request, as the rest of the server does;
//! `open` makes sure the schema exists every time.

use std::path::Path;

use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS products (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    company      TEXT NOT NULL,
    source_url   TEXT NOT NULL,
    image_url    TEXT NOT NULL,
    description  TEXT NOT NULL,
    ingredients  TEXT NOT NULL,
    preparation  TEXT NOT NULL,
    fat_pct      TEXT NOT NULL,
    protein_pct  TEXT NOT NULL,
    carb_pct     TEXT NOT NULL,
    vote_count   INTEGER NOT NULL DEFAULT 0,
    comments     TEXT NOT NULL DEFAULT '[]',
    created_at   INTEGER NOT NULL,
    creator_id   TEXT NOT NULL,
    creator_name TEXT NOT NULL,
    voted_by     TEXT NOT NULL DEFAULT '[]'
);
CREATE INDEX IF NOT EXISTS products_created_at ON products (created_at DESC);
";

pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

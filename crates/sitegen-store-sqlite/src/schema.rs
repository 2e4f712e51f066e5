//! SQL schema for the section store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Sections are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS sections (
    id          TEXT PRIMARY KEY,
    type        TEXT NOT NULL,   -- free-text label, e.g. 'Hero'
    content     TEXT NOT NULL,
    created_at  TEXT NOT NULL    -- fixed-width RFC 3339 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS sections_created_idx ON sections(created_at);

PRAGMA user_version = 1;
";

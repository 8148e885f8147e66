use crate::Database;
use crate::models::{FeedbackRow, NewFeedback};
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Feedback --

    /// Insert a feedback record and return the id SQLite assigned to it.
    pub fn insert_feedback(&self, feedback: &NewFeedback) -> Result<i64> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO feedback (content, name, email, ip) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![feedback.content, feedback.name, feedback.email, feedback.ip],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// All feedback, newest first.
    pub fn get_feedbacks(&self) -> Result<Vec<FeedbackRow>> {
        self.with_conn(query_feedbacks)
    }
}

fn query_feedbacks(conn: &Connection) -> Result<Vec<FeedbackRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, content, name, email, ip, created_at
         FROM feedback
         ORDER BY id DESC",
    )?;

    let rows = stmt
        .query_map([], |row| {
            Ok(FeedbackRow {
                id: row.get(0)?,
                content: row.get(1)?,
                name: row.get(2)?,
                email: row.get(3)?,
                ip: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

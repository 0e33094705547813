//! SQLite-backed contact storage.
//!
//! All access goes through a [`Session`], which wraps one transaction.
//! Dropping a session without calling [`Session::commit`] rolls back.

use rusqlite::{Connection, OptionalExtension, Row, Transaction, params};
use std::path::Path;

use crate::error::{PhonebookError, Result};
use crate::model::{NewRecord, Record};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS person (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    name           TEXT NOT NULL,
    surname        TEXT NOT NULL,
    phone          TEXT NOT NULL,
    office_phone   TEXT,
    landline_phone TEXT,
    birth_date     TEXT
);
";

const COLUMNS: &str = "id, name, surname, phone, office_phone, landline_phone, birth_date";

/// Handle to the phone book database, opened once per process.
pub struct PhoneBook {
    conn: Connection,
}

impl PhoneBook {
    /// Opens (creating if needed) the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        log::info!("Opened phone book at {}", path.display());
        Self::init(conn)
    }

    /// Opens a throwaway database that lives only in memory.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Starts a unit of work.
    pub fn session(&mut self) -> Result<Session<'_>> {
        let tx = self.conn.transaction()?;
        log::trace!("Session started");
        Ok(Session { tx })
    }
}

/// One transaction against the phone book.
pub struct Session<'a> {
    tx: Transaction<'a>,
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
        phone: row.get(3)?,
        office_phone: row.get(4)?,
        landline_phone: row.get(5)?,
        birth_date: row.get(6)?,
    })
}

impl Session<'_> {
    /// Every record, in storage order.
    pub fn records(&self) -> Result<Vec<Record>> {
        let mut stmt = self
            .tx
            .prepare(&format!("SELECT {} FROM person ORDER BY id", COLUMNS))?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    pub fn get(&self, id: i64) -> Result<Option<Record>> {
        let record = self
            .tx
            .query_row(
                &format!("SELECT {} FROM person WHERE id = ?1", COLUMNS),
                [id],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    pub fn insert(&self, record: &NewRecord) -> Result<Record> {
        self.tx.execute(
            "INSERT INTO person (name, surname, phone, office_phone, landline_phone, birth_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.name,
                record.surname,
                record.phone,
                record.office_phone,
                record.landline_phone,
                record.birth_date,
            ],
        )?;
        let id = self.tx.last_insert_rowid();
        log::debug!("Inserted record {}", id);
        Ok(record.clone().with_id(id))
    }

    /// Writes every column of `record` over the stored row with the same id.
    pub fn update(&self, record: &Record) -> Result<()> {
        let changed = self.tx.execute(
            "UPDATE person
             SET name = ?2, surname = ?3, phone = ?4,
                 office_phone = ?5, landline_phone = ?6, birth_date = ?7
             WHERE id = ?1",
            params![
                record.id,
                record.name,
                record.surname,
                record.phone,
                record.office_phone,
                record.landline_phone,
                record.birth_date,
            ],
        )?;
        if changed == 0 {
            return Err(PhonebookError::RecordNotFound(record.id));
        }
        log::debug!("Updated record {}", record.id);
        Ok(())
    }

    /// Returns false when no record had this id.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self.tx.execute("DELETE FROM person WHERE id = ?1", [id])?;
        log::debug!("Delete record {}: {} row(s)", id, removed);
        Ok(removed > 0)
    }

    pub fn delete_all(&self) -> Result<usize> {
        let removed = self.tx.execute("DELETE FROM person", [])?;
        log::debug!("Deleted all {} record(s)", removed);
        Ok(removed)
    }

    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        log::trace!("Session committed");
        Ok(())
    }
}

//! Stored records and the input DTOs used to create or patch them.
//!
//! Records serialize the way clients see them: the identifier as `_id`,
//! other fields in camelCase (`ofProject`, `createdAt`, `updatedAt`).

use std::str::FromStr;

use sqlx::postgres::PgRow;
use sqlx::Row;
use stackboard_core::error::CoreError;
use stackboard_core::types::{InvalidRecordId, RecordId};

pub mod architecture;
pub mod link;
pub mod project;
pub mod team_member;

/// Decode a hex id column.
pub(crate) fn decode_id(row: &PgRow, column: &str) -> Result<RecordId, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    raw.parse().map_err(|e: InvalidRecordId| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

/// Decode a `TEXT` column holding one of the core enum names.
pub(crate) fn decode_enum<T>(row: &PgRow, column: &str) -> Result<T, sqlx::Error>
where
    T: FromStr<Err = CoreError>,
{
    let raw: String = row.try_get(column)?;
    raw.parse().map_err(|e: CoreError| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

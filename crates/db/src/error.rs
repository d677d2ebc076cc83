/// Failure reported by a [`crate::Store`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write. This is the authoritative
    /// guard behind the application-level existence checks.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    /// A foreign key rejected the write (the referenced project is gone).
    #[error("Referenced record does not exist: {constraint}")]
    ForeignKeyViolation { constraint: String },

    /// A stored row could not be decoded into its model.
    #[error("Corrupt row: {0}")]
    Corrupt(String),

    /// Any other driver failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    /// Classify driver errors by PostgreSQL SQLSTATE.
    ///
    /// - `23505` (unique_violation) -> [`StoreError::UniqueViolation`]
    /// - `23503` (foreign_key_violation) -> [`StoreError::ForeignKeyViolation`]
    ///
    /// Column decode failures become [`StoreError::Corrupt`].
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::ColumnDecode { index, source } = &err {
            return Self::Corrupt(format!("column {index}: {source}"));
        }
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            match db_err.code().as_deref() {
                Some("23505") => return Self::UniqueViolation { constraint },
                Some("23503") => return Self::ForeignKeyViolation { constraint },
                _ => {}
            }
        }
        Self::Database(err)
    }
}

//! Conversions from external infrastructure errors into domain errors.

use bitacora_common::storage::StorageError;
use bitacora_common::CommonError;
use bitacora_domain::BitacoraError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BitacoraError);

impl From<InfraError> for BitacoraError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BitacoraError> for InfraError {
    fn from(value: BitacoraError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBitacoraError {
    fn into_bitacora(self) -> BitacoraError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → BitacoraError */
/* -------------------------------------------------------------------------- */

impl IntoBitacoraError for SqlError {
    fn into_bitacora(self) -> BitacoraError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        BitacoraError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        BitacoraError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE) => {
                        BitacoraError::Database(format!("unique constraint violation: {message}"))
                    }
                    (ErrorCode::ConstraintViolation, rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
                        BitacoraError::Database("foreign key constraint violation".into())
                    }
                    _ => BitacoraError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => BitacoraError::Database("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                BitacoraError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, name, ty) => {
                BitacoraError::Database(format!("invalid column type for '{name}': {ty}"))
            }
            RE::InvalidColumnName(name) => {
                BitacoraError::Database(format!("unknown column '{name}'"))
            }
            RE::Utf8Error(_) => {
                BitacoraError::Database("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidPath(path) => BitacoraError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => BitacoraError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_bitacora())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → BitacoraError */
/* -------------------------------------------------------------------------- */

impl IntoBitacoraError for StorageError {
    fn into_bitacora(self) -> BitacoraError {
        match self {
            StorageError::Rusqlite(err) => err.into_bitacora(),
            StorageError::InvalidConfig(message) => BitacoraError::Config(message),
            other => BitacoraError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_bitacora())
    }
}

/* -------------------------------------------------------------------------- */
/* CommonError → BitacoraError */
/* -------------------------------------------------------------------------- */

impl IntoBitacoraError for CommonError {
    fn into_bitacora(self) -> BitacoraError {
        match self {
            CommonError::Config { .. } | CommonError::Serialization { .. } => {
                BitacoraError::Config(self.to_string())
            }
            CommonError::Security { message } => BitacoraError::Security(message),
        }
    }
}

impl From<CommonError> for InfraError {
    fn from(value: CommonError) -> Self {
        InfraError(value.into_bitacora())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error / serde_json::Error → BitacoraError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(BitacoraError::Internal(format!("I/O error: {value}")))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(BitacoraError::Internal(format!("JSON error: {value}")))
    }
}

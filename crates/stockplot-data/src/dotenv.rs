//! `.env` loading.

use std::path::PathBuf;

use tracing::debug;

use crate::Result;

/// Load variables from a `.env` file in the working directory or one of its
/// parents. A missing file is not an error; an unreadable or malformed one is.
///
/// # Errors
///
/// Returns [`crate::DataError::Env`] if a `.env` file exists but cannot be
/// loaded.
pub fn load_dotenv() -> Result<()> {
    check_dotenv(dotenvy::dotenv())
}

fn check_dotenv(loaded: dotenvy::Result<PathBuf>) -> Result<()> {
    match loaded {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataError;
    use std::io;

    #[test]
    fn test_missing_file_is_fine() {
        let missing = dotenvy::Error::Io(io::Error::from(io::ErrorKind::NotFound));
        assert!(check_dotenv(Err(missing)).is_ok());
        assert!(check_dotenv(Ok(PathBuf::from(".env"))).is_ok());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let malformed = dotenvy::Error::LineParse("FMP_API_KEY 'abc".to_string(), 12);
        let err = check_dotenv(Err(malformed)).unwrap_err();
        assert!(matches!(err, DataError::Env(_)));
        assert!(err.to_string().starts_with("Environment error:"));
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let denied = dotenvy::Error::Io(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(check_dotenv(Err(denied)), Err(DataError::Env(_))));
    }
}

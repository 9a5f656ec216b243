pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }

    /// HTTP status carried by an `ApiError`, if this is one.
    pub fn status(&self) -> Option<u16> {
        match *self.inner {
            ErrorKind::ApiError(status) => Some(status),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "no-wasm")]
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigError(e.to_string()))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrorKind::StdIoError(e))
    }
}

pub enum ErrorKind {
    /// Non-2xx response from the backend.
    ApiError(u16),
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    StdIoError(std::io::Error),
    StorageError(String),
    ConfigError(String),
    ParseError(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ErrorKind::ApiError(status) => write!(f, "ApiError {{ status: {status} }}"),
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::StdIoError(ref e) => write!(f, "StdIoError: {e:?}"),
            ErrorKind::StorageError(ref e) => write!(f, "StorageError: {e:?}"),
            ErrorKind::ConfigError(ref e) => write!(f, "ConfigError: {e:?}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ErrorKind::ApiError(status) => write!(f, "API Error: {status}"),
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e}"),
            ErrorKind::StdIoError(ref e) => write!(f, "StdIoError: {e}"),
            ErrorKind::StorageError(ref e) => write!(f, "StorageError: {e}"),
            ErrorKind::ConfigError(ref e) => write!(f, "ConfigError: {e}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status() {
        let err: Error = ErrorKind::ApiError(404).into();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "API Error: 404");
    }

    #[test]
    fn other_kinds_have_no_status() {
        let err: Error = ErrorKind::StorageError("quota".to_string()).into();
        assert_eq!(err.status(), None);
    }
}

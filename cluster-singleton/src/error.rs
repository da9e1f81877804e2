use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid {field}: {message}")]
    InvalidArgument { field: &'static str, message: String },
    #[error("bad configuration for {settings}: {reason}")]
    Configuration { settings: &'static str, reason: String },
}

impl Error {
    pub(crate) fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn configuration(settings: &'static str, reason: impl Into<String>) -> Self {
        Error::Configuration {
            settings,
            reason: reason.into(),
        }
    }
}

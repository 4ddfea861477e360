use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the booking API.
///
/// The display strings are the exact messages returned to clients, so
/// handlers construct variants instead of formatting messages inline.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("No booking with the id of {0}")]
    BookingNotFound(Uuid),

    #[error("No shop with the id of {0}")]
    ShopNotFound(Uuid),

    #[error("User {user_id} is not authorized to {action} this booking")]
    Unauthorized { user_id: Uuid, action: &'static str },

    #[error("Not authorized to access this route")]
    InvalidCredentials,

    #[error("The user with ID {0} has already made 3 bookings")]
    QuotaExceeded(Uuid),

    /// Persistence failure. `message` is the static client-facing text;
    /// the source report stays server-side.
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: eyre::Report,
    },
}

impl BookingError {
    pub fn database(message: &'static str, source: eyre::Report) -> Self {
        BookingError::Database { message, source }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

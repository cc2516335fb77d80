use thiserror::Error;

/// Why a lock or confirm request was refused
///
/// Every variant is recoverable at the caller; the core never retries on its
/// own. [`SeatError::kind`] collapses the variants into the four categories
/// transports map to response codes.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum SeatError {
    /// The seat id is not part of the fixed universe
    #[error("Seat not found.")]
    UnknownSeat {
        /// The requested seat id
        seat: String,
    },

    /// A valid lock is already in place, held by `holder`
    ///
    /// Re-locking by the original holder is rejected the same way as a
    /// third-party attempt; it does not refresh the TTL.
    #[error("Seat {seat} is already locked by user {holder}.")]
    AlreadyLocked {
        /// The requested seat id
        seat: String,
        /// Who currently holds the lock
        holder: String,
    },

    /// The seat was already confirmed; bookings are terminal
    #[error("Seat {seat} is already booked.")]
    AlreadyBooked {
        /// The requested seat id
        seat: String,
    },

    /// Confirm was attempted without a prior valid lock
    #[error("Seat is not locked and cannot be booked. Lock it first.")]
    NotLocked {
        /// The requested seat id
        seat: String,
    },

    /// Confirm was attempted by a holder who does not own the lock
    #[error("Seat {seat} is locked by another user and cannot be confirmed.")]
    HeldByOther {
        /// The requested seat id
        seat: String,
    },
}

/// Category of a [`SeatError`], the granularity transports care about
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// Unknown seat id
    NotFound,
    /// Seat already locked or booked
    Conflict,
    /// Operation not valid for the seat's current status
    InvalidState,
    /// Lock owned by a different holder
    Forbidden,
}

impl SeatError {
    /// Get the error's category
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeatError::UnknownSeat { .. } => ErrorKind::NotFound,
            SeatError::AlreadyLocked { .. } | SeatError::AlreadyBooked { .. } => ErrorKind::Conflict,
            SeatError::NotLocked { .. } => ErrorKind::InvalidState,
            SeatError::HeldByOther { .. } => ErrorKind::Forbidden,
        }
    }
}

impl ErrorKind {
    /// HTTP status code this category maps to
    pub fn http_status(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InvalidState => 400,
            ErrorKind::Forbidden => 403,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Status of a seat as observed by callers
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to be locked by anyone
    Available,
    /// Held by one holder until confirmed or expired
    Locked,
    /// Confirmed; terminal for the process lifetime
    Booked,
}

/// Snapshot of one seat, the `{id, status}` shape sent over the wire
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SeatView {
    /// The seat's id
    pub id: String,
    /// The seat's status at snapshot time
    pub status: SeatStatus,
}

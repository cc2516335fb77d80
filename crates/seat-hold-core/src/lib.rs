//! 🏗 Shared contract between the seat hold manager and its transports.
#![warn(missing_docs)]

mod error;
mod request;
mod seat;

use std::time::Duration;

pub use error::{ErrorKind, SeatError};
pub use request::{RawRequest, Request, RequestHandler, RequestKind, RequestMethod};
pub use seat::{SeatStatus, SeatView};

/// Configuration of the seat booking system
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of seats; the seat universe is `"1"..="<seats>"`
    pub seats: u32,
    /// Window after which an unconfirmed lock expires
    pub lock_ttl: Duration,

    /// Run the best-effort sweeper thread in addition to lazy expiry
    pub sweep: bool,
}

//! Test harness for the seat booking system
//!
//! Drives the [`SeatService`](seat_hold_manager::SeatService) through the
//! same request seam the HTTP server uses, via a mock transport, so tests
//! observe exactly what a client would without opening sockets.

use std::time::Duration;

use seat_hold_core::Config;

mod api;

pub use api::{Api, ApiError, ApiResult};

/// Builder for a test context
pub struct TestCtxBuilder {
    /// Number of seats in the universe
    pub seats: u32,
    /// Window after which an unconfirmed lock expires
    pub lock_ttl: Duration,
    /// Whether to run the sweeper thread
    pub sweep: bool,
}

impl TestCtxBuilder {
    /// Create a builder with the production defaults, except that tests
    /// usually shrink the TTL
    pub fn new() -> Self {
        Self {
            seats: 5,
            lock_ttl: Duration::from_secs(60),
            sweep: false,
        }
    }

    /// Set the number of seats in the universe
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats;
        self
    }

    /// Set the lock TTL
    pub fn with_lock_ttl(mut self, lock_ttl: Duration) -> Self {
        self.lock_ttl = lock_ttl;
        self
    }

    /// Enable the sweeper thread
    pub fn with_sweep(mut self) -> Self {
        self.sweep = true;
        self
    }

    /// Build the test context
    pub fn build(self) -> TestCtx {
        let config = Config {
            seats: self.seats,
            lock_ttl: self.lock_ttl,
            sweep: self.sweep,
        };
        TestCtx {
            api: Api::new(seat_hold_manager::launch(&config)),
        }
    }
}

impl Default for TestCtxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running seat booking system under test
pub struct TestCtx {
    /// Client-side view of the running system
    pub api: Api,
}

impl TestCtx {
    /// Shut the system down, joining its threads
    pub fn finish(self) {
        self.api.shutdown();
    }
}

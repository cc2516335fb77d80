//! In-memory seat booking with time-bounded locks
//!
//! The [`SeatLockManager`] owns a fixed universe of seats and exposes three
//! operations: list, lock, and confirm. An unconfirmed lock expires after a
//! configurable TTL; expiry is applied lazily before every operation, with an
//! optional background sweeper that releases expired locks close to their
//! deadline.

use std::thread;

use crossbeam::channel::unbounded;
use seat_hold_core::Config;

mod manager;
mod seat;
mod service;
mod sweeper;
mod table;

pub use manager::SeatLockManager;
pub use service::SeatService;

use sweeper::Sweeper;

/// Entrypoint: build the seat booking system described by `config`
///
/// The returned service is served requests by the surrounding transport and
/// must be [shut down](seat_hold_core::RequestHandler::shutdown) to join the
/// sweeper thread, when one is enabled.
pub fn launch(config: &Config) -> SeatService {
    let seat_ids = (1..=config.seats).map(|i| i.to_string());

    if !config.sweep {
        let manager = SeatLockManager::new(seat_ids, config.lock_ttl);
        return SeatService::new(manager, None, None);
    }

    let (deadline_sender, deadline_receiver) = unbounded();
    let (shutdown_sender, shutdown_receiver) = unbounded();

    let manager = SeatLockManager::with_sweep(seat_ids, config.lock_ttl, deadline_sender);
    let mut sweeper = Sweeper::new(
        manager.table_handle(),
        config.lock_ttl,
        deadline_receiver,
        shutdown_receiver,
    );
    let sweeper_thread = thread::spawn(move || sweeper.run());

    SeatService::new(manager, Some(shutdown_sender), Some(sweeper_thread))
}

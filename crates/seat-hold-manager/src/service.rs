//! Request dispatch and system lifecycle

use std::thread::JoinHandle;

use crossbeam::channel::Sender;
use seat_hold_core::{Request, RequestHandler, RequestKind};

use crate::SeatLockManager;

/// The running seat booking system
///
/// Dispatches client requests to the [`SeatLockManager`] and owns the
/// sweeper thread, when one is enabled.
pub struct SeatService {
    manager: SeatLockManager,
    sweeper_shutdown: Option<Sender<()>>,
    sweeper_thread: Option<JoinHandle<()>>,
}

impl SeatService {
    /// Create a new [`SeatService`]
    pub(crate) fn new(
        manager: SeatLockManager,
        sweeper_shutdown: Option<Sender<()>>,
        sweeper_thread: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            manager,
            sweeper_shutdown,
            sweeper_thread,
        }
    }
}

impl RequestHandler for SeatService {
    fn handle(&self, rq: Request) {
        match rq.kind() {
            RequestKind::ListSeats => {
                let seats = self.manager.list_seats();
                rq.respond_with_seat_list(&seats);
            }
            RequestKind::LockSeat => {
                // routes without a seat id never parse to this kind, so an
                // absent id can only mean an empty one, which is not part of
                // any universe
                let seat = rq.seat_id().unwrap_or_default().to_owned();
                match self.manager.lock(&seat, rq.holder()) {
                    Ok(view) => rq.respond_with_seat(view),
                    Err(err) => rq.respond_with_err(err),
                }
            }
            RequestKind::ConfirmSeat => {
                let seat = rq.seat_id().unwrap_or_default().to_owned();
                match self.manager.confirm(&seat, rq.holder()) {
                    Ok(view) => rq.respond_with_seat(view),
                    Err(err) => rq.respond_with_err(err),
                }
            }
        }
    }

    fn shutdown(self) {
        // tell the sweeper to shut down and wait for it
        if let Some(shutdown) = self.sweeper_shutdown {
            let _ = shutdown.send(());
        }
        if let Some(thread) = self.sweeper_thread {
            thread.join().unwrap();
        }
    }
}

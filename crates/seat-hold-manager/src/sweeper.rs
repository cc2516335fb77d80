//! Implementation of the sweeper
//!
//! The sweeper is a latency optimization only. Lazy reconciliation in the
//! manager is what guarantees an expired lock is never observed as active;
//! the sweeper merely releases expired locks close to their deadline instead
//! of waiting for the next request to touch the seat.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam::channel::Receiver;
use crossbeam::select;
use parking_lot::Mutex;

use crate::table::SeatTable;

/// How long to park when no deadlines are pending
const IDLE_WAIT: Duration = Duration::from_millis(100);

/// A lock's expiration deadline, announced by the manager at lock time
pub(crate) struct SweepDeadline {
    pub(crate) seat: String,
    pub(crate) due: Instant,
}

/// Background thread releasing expired locks at their deadline
pub(crate) struct Sweeper {
    /// The seat table, shared with the manager
    table: Arc<Mutex<SeatTable>>,
    lock_ttl: Duration,

    /// channel on which the manager announces lock deadlines
    deadlines: Receiver<SweepDeadline>,
    /// channel through which the service signals shutdown
    shutdown: Receiver<()>,

    /// pending deadlines; arrival order is due order, because every lock
    /// uses the same TTL
    queue: VecDeque<SweepDeadline>,
}

impl Sweeper {
    /// Create a new [`Sweeper`]
    pub(crate) fn new(
        table: Arc<Mutex<SeatTable>>,
        lock_ttl: Duration,
        deadlines: Receiver<SweepDeadline>,
        shutdown: Receiver<()>,
    ) -> Self {
        Self {
            table,
            lock_ttl,
            deadlines,
            shutdown,
            queue: VecDeque::new(),
        }
    }

    /// Main sweeper loop
    pub(crate) fn run(&mut self) {
        tracing::debug!("sweeper started");
        loop {
            self.release_due();

            // park until the next deadline is due, a new one arrives, or we
            // are told to shut down
            let wait = match self.queue.front() {
                Some(next) => {
                    next.due.saturating_duration_since(Instant::now()) + Duration::from_millis(1)
                }
                None => IDLE_WAIT,
            };
            select! {
                recv(self.deadlines) -> msg => match msg {
                    Ok(deadline) => self.queue.push_back(deadline),
                    // the manager is gone, nothing more will be scheduled
                    Err(_) => break,
                },
                recv(self.shutdown) -> _ => break,
                default(wait) => {}
            }
        }
        tracing::debug!("sweeper stopped");
    }

    /// Reconcile every seat whose deadline has passed
    ///
    /// Tolerates the seat having already moved on: a confirmed seat is left
    /// alone (reconcile never touches `Booked`), and a seat re-locked after
    /// an earlier expiry carries a fresh lock instant that has not aged past
    /// the TTL yet.
    fn release_due(&mut self) {
        let now = Instant::now();
        while self.queue.front().is_some_and(|next| next.due < now) {
            let deadline = self.queue.pop_front().expect("front was checked");
            let mut table = self.table.lock();
            if let Some(state) = table.get_mut(&deadline.seat) {
                if state.reconcile(self.lock_ttl) {
                    tracing::info!(seat = %deadline.seat, "sweep released expired lock");
                }
            }
        }
    }
}

//! Implementation of the seat lock manager

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam::channel::Sender;
use parking_lot::Mutex;
use seat_hold_core::{SeatError, SeatStatus, SeatView};

use crate::seat::SeatState;
use crate::sweeper::SweepDeadline;
use crate::table::SeatTable;

/// Maintains seat state under a fixed lock expiration policy
///
/// Each operation takes the table mutex once and performs its
/// reconcile-check-act sequence under it, so two holders can never lock the
/// same seat. Expiry is lazy: every operation reconciles before observing or
/// mutating status, which makes the manager correct whether or not the
/// sweeper thread is running.
pub struct SeatLockManager {
    /// The seat table, shared with the sweeper when one is running
    table: Arc<Mutex<SeatTable>>,
    /// Window after which an unconfirmed lock expires
    lock_ttl: Duration,
    /// Deadline channel to the sweeper, when enabled
    sweep: Option<Sender<SweepDeadline>>,
}

impl SeatLockManager {
    /// Create a manager over the given seat universe, all seats `Available`
    pub fn new(seat_ids: impl IntoIterator<Item = String>, lock_ttl: Duration) -> Self {
        Self {
            table: Arc::new(Mutex::new(SeatTable::new(seat_ids))),
            lock_ttl,
            sweep: None,
        }
    }

    /// Like [`Self::new`], but announcing every lock deadline on `deadlines`
    pub(crate) fn with_sweep(
        seat_ids: impl IntoIterator<Item = String>,
        lock_ttl: Duration,
        deadlines: Sender<SweepDeadline>,
    ) -> Self {
        Self {
            table: Arc::new(Mutex::new(SeatTable::new(seat_ids))),
            lock_ttl,
            sweep: Some(deadlines),
        }
    }

    /// Get a handle on the seat table for the sweeper
    pub(crate) fn table_handle(&self) -> Arc<Mutex<SeatTable>> {
        Arc::clone(&self.table)
    }

    /// Snapshot every seat in universe order
    ///
    /// Reconciles every seat first, so an expired lock is never reported as
    /// `Locked`.
    pub fn list_seats(&self) -> Vec<SeatView> {
        let mut table = self.table.lock();
        table.reconcile_all(self.lock_ttl);
        table.snapshot()
    }

    /// Lock `seat` for `holder`
    ///
    /// Fails with a conflict if a valid lock is in place, even one held by
    /// `holder` itself: re-locking does not refresh the TTL.
    pub fn lock(&self, seat: &str, holder: &str) -> Result<SeatView, SeatError> {
        let mut table = self.table.lock();
        let state = table.get_mut(seat).ok_or_else(|| SeatError::UnknownSeat {
            seat: seat.to_owned(),
        })?;
        if state.reconcile(self.lock_ttl) {
            tracing::info!(seat, "lock expired, seat released");
        }

        match state {
            SeatState::Available => {
                let locked_at = Instant::now();
                *state = SeatState::Locked {
                    holder: holder.to_owned(),
                    locked_at,
                };
                tracing::debug!(seat, holder, "seat locked");
                if let Some(deadlines) = &self.sweep {
                    let _ = deadlines.send(SweepDeadline {
                        seat: seat.to_owned(),
                        due: locked_at + self.lock_ttl,
                    });
                }
                Ok(SeatView {
                    id: seat.to_owned(),
                    status: SeatStatus::Locked,
                })
            }
            SeatState::Locked { holder: current, .. } => Err(SeatError::AlreadyLocked {
                seat: seat.to_owned(),
                holder: current.clone(),
            }),
            SeatState::Booked { .. } => Err(SeatError::AlreadyBooked {
                seat: seat.to_owned(),
            }),
        }
    }

    /// Confirm the lock on `seat`, turning it into a booking
    ///
    /// Only the holder of a still-valid lock may confirm; the seat is
    /// reconciled first, so an expired lock is not confirmable.
    pub fn confirm(&self, seat: &str, holder: &str) -> Result<SeatView, SeatError> {
        let mut table = self.table.lock();
        let state = table.get_mut(seat).ok_or_else(|| SeatError::UnknownSeat {
            seat: seat.to_owned(),
        })?;
        if state.reconcile(self.lock_ttl) {
            tracing::info!(seat, "lock expired, seat released");
        }

        match state {
            SeatState::Locked { holder: current, .. } if current.as_str() == holder => {
                *state = SeatState::Booked {
                    holder: holder.to_owned(),
                };
                tracing::info!(seat, holder, "seat booked");
                Ok(SeatView {
                    id: seat.to_owned(),
                    status: SeatStatus::Booked,
                })
            }
            SeatState::Available => Err(SeatError::NotLocked {
                seat: seat.to_owned(),
            }),
            SeatState::Booked { .. } => Err(SeatError::AlreadyBooked {
                seat: seat.to_owned(),
            }),
            SeatState::Locked { .. } => Err(SeatError::HeldByOther {
                seat: seat.to_owned(),
            }),
        }
    }
}

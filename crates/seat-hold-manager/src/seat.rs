//! Seat state and the lock expiry rule

use std::time::{Duration, Instant};

use seat_hold_core::SeatStatus;

/// State of a single seat
///
/// The variants carry their own data, so the status invariants hold by
/// construction: only a locked seat has a lock instant, and a booked seat
/// keeps the confirming holder but no lock instant.
#[derive(Clone, Debug)]
pub(crate) enum SeatState {
    /// Free to be locked
    Available,
    /// Held by `holder` since `locked_at`, pending confirmation
    Locked { holder: String, locked_at: Instant },
    /// Confirmed by `holder`; terminal
    Booked { holder: String },
}

impl SeatState {
    pub(crate) fn status(&self) -> SeatStatus {
        match self {
            SeatState::Available => SeatStatus::Available,
            SeatState::Locked { .. } => SeatStatus::Locked,
            SeatState::Booked { .. } => SeatStatus::Booked,
        }
    }

    /// Downgrade an expired lock to `Available`
    ///
    /// Idempotent and a no-op unless the seat is locked and strictly older
    /// than `ttl`. Never touches a booked seat. Returns whether the seat was
    /// released.
    pub(crate) fn reconcile(&mut self, ttl: Duration) -> bool {
        if let SeatState::Locked { locked_at, .. } = self {
            if locked_at.elapsed() > ttl {
                *self = SeatState::Available;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    use super::SeatState;

    #[test]
    fn unexpired_lock_survives_reconcile() {
        let mut seat = SeatState::Locked {
            holder: "alice".into(),
            locked_at: Instant::now(),
        };
        assert!(!seat.reconcile(Duration::from_secs(60)));
        assert!(matches!(seat, SeatState::Locked { .. }));
    }

    #[test]
    fn expired_lock_is_released() {
        let mut seat = SeatState::Locked {
            holder: "alice".into(),
            locked_at: Instant::now(),
        };
        sleep(Duration::from_millis(15));
        assert!(seat.reconcile(Duration::from_millis(10)));
        assert!(matches!(seat, SeatState::Available));
        // a second pass has nothing left to do
        assert!(!seat.reconcile(Duration::from_millis(10)));
    }

    #[test]
    fn booked_seat_is_never_released() {
        let mut seat = SeatState::Booked {
            holder: "alice".into(),
        };
        sleep(Duration::from_millis(15));
        assert!(!seat.reconcile(Duration::from_millis(1)));
        assert!(matches!(seat, SeatState::Booked { .. }));
    }
}

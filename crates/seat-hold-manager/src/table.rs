//! The shared seat table

use std::collections::HashMap;
use std::time::Duration;

use seat_hold_core::SeatView;

use crate::seat::SeatState;

/// The sole shared mutable resource: every seat's state
///
/// Lookup goes through the map, listing through the fixed id list, so
/// snapshots always come out in universe order.
pub(crate) struct SeatTable {
    /// map from seat id to its state
    seats: HashMap<String, SeatState>,
    /// seat ids in universe order, fixed at construction
    order: Vec<String>,
}

impl SeatTable {
    /// Create a table with every seat `Available`
    pub(crate) fn new(seat_ids: impl IntoIterator<Item = String>) -> Self {
        let order: Vec<String> = seat_ids.into_iter().collect();
        let seats = order
            .iter()
            .map(|id| (id.clone(), SeatState::Available))
            .collect();
        Self { seats, order }
    }

    /// Get a seat's state, or [`None`] for ids outside the universe
    pub(crate) fn get_mut(&mut self, seat: &str) -> Option<&mut SeatState> {
        self.seats.get_mut(seat)
    }

    /// Apply lock expiry to every seat
    pub(crate) fn reconcile_all(&mut self, ttl: Duration) {
        for (id, state) in self.seats.iter_mut() {
            if state.reconcile(ttl) {
                tracing::info!(seat = %id, "lock expired, seat released");
            }
        }
    }

    /// Snapshot every seat in universe order
    pub(crate) fn snapshot(&self) -> Vec<SeatView> {
        self.order
            .iter()
            .map(|id| SeatView {
                id: id.clone(),
                status: self.seats[id].status(),
            })
            .collect()
    }
}

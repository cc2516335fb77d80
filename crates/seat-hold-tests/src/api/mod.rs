use seat_hold_core::{Request, RequestHandler, RequestKind, SeatView};
use seat_hold_manager::SeatService;
use thiserror::Error;

pub mod mock;

/// Refusal as observed by a client: response status plus message body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error {status}: {message}")]
pub struct ApiError {
    /// The HTTP status the error maps to
    pub status: u16,
    /// The human-readable message body
    pub message: String,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub(crate) enum Response {
    Seat(SeatView),
    Seats(Vec<SeatView>),
    Error { status: u16, message: String },
}

/// Client-side view of the running system
///
/// Every call goes through [`SeatService::handle`] with a mock
/// [`RawRequest`](seat_hold_core::RawRequest), exactly as the HTTP server
/// would drive it.
pub struct Api {
    service: SeatService,
}

impl Api {
    pub(crate) fn new(service: SeatService) -> Self {
        Self { service }
    }

    fn call(&self, kind: RequestKind, seat: Option<&str>, holder: Option<&str>) -> Response {
        let (sender, receiver) = flume::bounded(1);
        let raw = mock::MockRawRequest::new(kind, seat, sender);
        self.service.handle(Request::from_raw(
            kind,
            seat.map(str::to_owned),
            // the transport applies the same default for bodies without a user
            holder.unwrap_or("anonymous").to_owned(),
            Box::new(raw),
        ));
        receiver
            .recv()
            .expect("request was dropped without a response")
    }

    /// `GET /seats`
    pub fn list_seats(&self) -> Vec<SeatView> {
        match self.call(RequestKind::ListSeats, None, None) {
            Response::Seats(seats) => seats,
            resp => panic!("ListSeats must not be answered by {resp:?}"),
        }
    }

    /// `POST /seats/lock/{seat}`
    pub fn lock(&self, seat: &str, holder: Option<&str>) -> ApiResult<SeatView> {
        match self.call(RequestKind::LockSeat, Some(seat), holder) {
            Response::Seat(view) => Ok(view),
            Response::Error { status, message } => Err(ApiError { status, message }),
            resp => panic!("LockSeat must not be answered by {resp:?}"),
        }
    }

    /// `POST /seats/confirm/{seat}`
    pub fn confirm(&self, seat: &str, holder: Option<&str>) -> ApiResult<SeatView> {
        match self.call(RequestKind::ConfirmSeat, Some(seat), holder) {
            Response::Seat(view) => Ok(view),
            Response::Error { status, message } => Err(ApiError { status, message }),
            resp => panic!("ConfirmSeat must not be answered by {resp:?}"),
        }
    }

    pub(crate) fn shutdown(self) {
        self.service.shutdown();
    }
}

//! Mock transport driving the service directly, without sockets

use flume::Sender;
use seat_hold_core::{RawRequest, RequestKind, RequestMethod, SeatError, SeatView};

use super::Response;

pub(crate) struct MockRawRequest {
    kind: RequestKind,
    url: String,
    response_channel: Sender<Response>,
}

impl MockRawRequest {
    pub(crate) fn new(
        kind: RequestKind,
        seat: Option<&str>,
        response_channel: Sender<Response>,
    ) -> Self {
        let url = match kind {
            RequestKind::ListSeats => String::from("/seats"),
            RequestKind::LockSeat => format!("/seats/lock/{}", seat.unwrap_or_default()),
            RequestKind::ConfirmSeat => format!("/seats/confirm/{}", seat.unwrap_or_default()),
        };
        Self {
            kind,
            url,
            response_channel,
        }
    }
}

impl RawRequest for MockRawRequest {
    fn url(&self) -> &str {
        &self.url
    }

    fn method(&self) -> RequestMethod {
        match self.kind {
            RequestKind::ListSeats => RequestMethod::Get,
            RequestKind::LockSeat | RequestKind::ConfirmSeat => RequestMethod::Post,
        }
    }

    fn respond_with_seat(self: Box<Self>, seat: SeatView) {
        self.response_channel.send(Response::Seat(seat)).unwrap()
    }

    fn respond_with_seat_list(self: Box<Self>, seats: &[SeatView]) {
        self.response_channel
            .send(Response::Seats(seats.to_vec()))
            .unwrap()
    }

    fn respond_with_err(self: Box<Self>, err: SeatError) {
        let response = Response::Error {
            status: err.kind().http_status(),
            message: err.to_string(),
        };
        self.response_channel.send(response).unwrap()
    }
}

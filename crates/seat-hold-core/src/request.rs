use crate::{SeatError, SeatView};

/// Kind of the request
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum RequestKind {
    /// Retrieve a snapshot of every seat and its status
    ListSeats,

    /// Temporarily lock a seat for the requesting holder
    LockSeat,

    /// Confirm a previously locked seat, turning the lock into a booking
    ConfirmSeat,
}

/// HTTP request method
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum RequestMethod {
    /// GET request
    Get,
    /// POST request, may have a payload
    Post,
}

/// Request sent from a client
///
/// The transport parses the seat id out of the URL and the holder out of the
/// request body before constructing one of these; missing holders default to
/// `"anonymous"`.
pub struct Request {
    kind: RequestKind,
    seat: Option<String>,
    holder: String,
    raw: Box<dyn RawRequest + Send>,
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("kind", &self.kind)
            .field("seat", &self.seat)
            .field("holder", &self.holder)
            .field("raw", &format_args!(".."))
            .finish()
    }
}

/// Interface for handling requests from clients
pub trait RequestHandler {
    /// Handle a request from a client
    ///
    /// This method may be called concurrently from different threads.
    fn handle(&self, request: Request);

    /// Shut the seat booking system down
    ///
    /// This method waits for all threads spawned for the system (i.e., the
    /// sweeper, if enabled) to have terminated.
    fn shutdown(self);
}

/// A raw request, implemented by the HTTP server (or a test mock)
pub trait RawRequest {
    /// Get the URL
    fn url(&self) -> &str;
    /// Get the request method
    fn method(&self) -> RequestMethod;

    /// Respond with a single seat snapshot
    fn respond_with_seat(self: Box<Self>, seat: SeatView);
    /// Respond with a snapshot of every seat, in universe order
    fn respond_with_seat_list(self: Box<Self>, seats: &[SeatView]);
    /// Respond with a refusal
    fn respond_with_err(self: Box<Self>, err: SeatError);
}

impl Request {
    /// Get the request's kind
    #[inline]
    pub fn kind(&self) -> &RequestKind {
        &self.kind
    }

    /// Get the seat id parsed from the URL, if the route carries one
    #[inline]
    pub fn seat_id(&self) -> Option<&str> {
        self.seat.as_deref()
    }

    /// Get the holder on whose behalf the request acts
    #[inline]
    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Get the request URL
    #[inline]
    #[allow(unused)]
    pub fn url(&self) -> &str {
        self.raw.url()
    }

    /// Get the request method
    #[inline]
    #[allow(unused)]
    pub fn method(&self) -> RequestMethod {
        self.raw.method()
    }

    /// Respond with a single seat snapshot
    ///
    /// This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_seat(self, seat: SeatView) {
        self.raw.respond_with_seat(seat);
    }

    /// Respond with a snapshot of every seat
    ///
    /// This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_seat_list(self, seats: &[SeatView]) {
        self.raw.respond_with_seat_list(seats);
    }

    /// Respond with a refusal
    ///
    /// The transport maps the error's [`kind`](SeatError::kind) to a status
    /// code. This method blocks until the response has been sent.
    #[inline]
    pub fn respond_with_err(self, err: SeatError) {
        self.raw.respond_with_err(err);
    }

    /// Create a new request from a [`RawRequest`]
    #[inline]
    pub fn from_raw(
        kind: RequestKind,
        seat: Option<String>,
        holder: String,
        raw: Box<dyn RawRequest + Send>,
    ) -> Self {
        Self {
            kind,
            seat,
            holder,
            raw,
        }
    }
}

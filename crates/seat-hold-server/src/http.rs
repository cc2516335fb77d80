//! 🏗 HTTP request implementation

use std::io::{Cursor, Read};

use seat_hold_core::{RequestKind, RequestMethod, SeatError, SeatView};
use serde::{Deserialize, Serialize};
use tiny_http::{Header, Response};

const LOCK_ROUTE: &str = "/seats/lock/";
const CONFIRM_ROUTE: &str = "/seats/confirm/";

/// Holder acting when the request body names no user
const DEFAULT_HOLDER: &str = "anonymous";

struct HTTPRequest(tiny_http::Request);

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct HolderBody {
    user: Option<String>,
}

impl seat_hold_core::RawRequest for HTTPRequest {
    fn url(&self) -> &str {
        self.0.url()
    }

    fn method(&self) -> RequestMethod {
        match self.0.method() {
            tiny_http::Method::Get => RequestMethod::Get,
            tiny_http::Method::Post => RequestMethod::Post,
            _ => unreachable!(),
        }
    }

    fn respond_with_seat(self: Box<Self>, seat: SeatView) {
        self.respond(json_response(200, &seat));
    }

    fn respond_with_seat_list(self: Box<Self>, seats: &[SeatView]) {
        self.respond(json_response(200, &seats));
    }

    fn respond_with_err(self: Box<Self>, err: SeatError) {
        let status = err.kind().http_status();
        let message = err.to_string();
        self.respond(json_response(status, &MessageBody { message: &message }));
    }
}

impl HTTPRequest {
    fn respond(self, res: Response<Cursor<Vec<u8>>>) {
        self.0.respond(res).expect("HTTP response failed");
    }
}

/// Build a JSON response with CORS headers
fn json_response<T: Serialize>(status: u16, body: &T) -> Response<Cursor<Vec<u8>>> {
    let data = serde_json::to_vec(body).expect("JSON serialization failed");
    let mut res = Response::from_data(data).with_status_code(status);
    res.add_header(Header::from_bytes(b"Content-Type", b"application/json").unwrap());
    add_response_cors_headers(&mut res);
    res
}

/// Parse the given HTTP request
///
/// If [`None`] is returned, the request was already answered with a
/// corresponding error message.
pub fn parse(mut rq: tiny_http::Request) -> Option<seat_hold_core::Request> {
    use tiny_http::Method::*;

    let (kind, seat) = match (rq.method(), rq.url()) {
        (Options, _) => {
            let mut res = Response::empty(204);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
        (Get, "/") => {
            let res = json_response(
                200,
                &MessageBody {
                    message: "Seat booking API is running.",
                },
            );
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
        (Get, "/seats") => (RequestKind::ListSeats, None),
        (Post, url) if url.starts_with(LOCK_ROUTE) => {
            (RequestKind::LockSeat, Some(url[LOCK_ROUTE.len()..].to_owned()))
        }
        (Post, url) if url.starts_with(CONFIRM_ROUTE) => (
            RequestKind::ConfirmSeat,
            Some(url[CONFIRM_ROUTE.len()..].to_owned()),
        ),
        (Get, _) | (Post, _) => {
            let mut res = Response::from_string(
                "Could not find the service you are looking for!

Valid requests are:
  GET  /
  GET  /seats
  POST /seats/lock/{seat}
  POST /seats/confirm/{seat}",
            )
            .with_status_code(404);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
        _ => {
            let mut res = Response::empty(405);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
    };

    let holder = read_holder(&mut rq);
    Some(seat_hold_core::Request::from_raw(
        kind,
        seat,
        holder,
        Box::new(HTTPRequest(rq)),
    ))
}

/// Read the holder out of the JSON body
///
/// An absent, empty, or malformed body acts on behalf of `"anonymous"`.
fn read_holder(rq: &mut tiny_http::Request) -> String {
    let mut body = String::with_capacity(rq.body_length().unwrap_or(0));
    if rq.as_reader().read_to_string(&mut body).is_err() {
        return String::from(DEFAULT_HOLDER);
    }
    serde_json::from_str::<HolderBody>(&body)
        .ok()
        .and_then(|b| b.user)
        .unwrap_or_else(|| String::from(DEFAULT_HOLDER))
}

/// Add CORS headers to `res`
fn add_response_cors_headers<R: Read>(res: &mut Response<R>) {
    res.add_header(Header::from_bytes(b"Access-Control-Request-Method", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Allow-Origin", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Allow-Headers", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Expose-Headers", b"*").unwrap());
}

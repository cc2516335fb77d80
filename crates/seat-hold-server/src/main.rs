//! Server implementation

#![warn(missing_docs)]

mod http;

use std::thread;
use std::time::Duration;

use seat_hold_core::{Config, RequestHandler};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Configuration of the seat booking system
    config: Config,

    /// Port for the HTTP server to listen on
    port: u16,
    /// Host for the HTTP server to listen on
    host: String,
    /// Number of handler threads
    threads: u32,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts {
            port: 3000,
            host: String::from("127.0.0.1"),
            config: Config {
                seats: 5,
                lock_ttl: Duration::from_millis(60_000),
                sweep: false,
            },
            threads: 16,
        };

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-port" => opts.port = arg.parse().expect("-port takes a decimal u16"),
                    "-host" => opts.host = arg,
                    "-seats" => {
                        opts.config.seats = arg.parse().expect("-seats takes a decimal u32")
                    }
                    "-lock-ttl-ms" => {
                        let ms: u64 = arg.parse().expect("-lock-ttl-ms takes a decimal u64");
                        opts.config.lock_ttl = Duration::from_millis(ms);
                    }
                    "-threads" => {
                        opts.threads = arg.parse().expect("-threads takes a decimal u32")
                    }
                    _ => {
                        eprintln!("Error: ignoring unknown option {opt}");
                        std::process::exit(1);
                    }
                }
                option = None;
            } else {
                match arg.as_str() {
                    "-sweep" => opts.config.sweep = true,
                    _ => option = Some(arg),
                }
            }
        }
        if let Some(opt) = option {
            eprintln!("Error: ignoring leftover option {opt}");
            std::process::exit(1);
        }

        opts
    }
}

fn http_loop<H: RequestHandler>(server: &tiny_http::Server, handler: &H) {
    loop {
        let rq = server.recv().expect("HTTP receive failed");
        if let Some(rq) = http::parse(rq) {
            handler.handle(rq);
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seat_hold_manager=info,seat_hold_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let opts = Opts::from_args();

    let server = tiny_http::Server::http((opts.host.as_str(), opts.port)).unwrap();
    let service = seat_hold_manager::launch(&opts.config);

    tracing::info!(
        host = %opts.host,
        port = opts.port,
        seats = opts.config.seats,
        lock_ttl_ms = opts.config.lock_ttl.as_millis() as u64,
        sweep = opts.config.sweep,
        "seat booking server running"
    );

    thread::scope(|s| {
        for i in 0..opts.threads {
            thread::Builder::new()
                .name(format!("handler_{i}"))
                .spawn_scoped(s, || http_loop(&server, &service))
                .unwrap();
        }
    });
}

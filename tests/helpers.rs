// Shared test helpers: log capture and mock HTTP servers.
//
// Log records from every test in a binary land in one global buffer, so tests
// select their own lines by something unique to them (usually the mock
// server's port).

use std::net::SocketAddr;
use std::sync::{Mutex, Once};
use std::time::Duration;

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use log::{LevelFilter, Log, Metadata, Record};
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;

/// Delay of the `/slow` route.
#[allow(dead_code)] // Used by other test files
pub const SLOW_ROUTE_DELAY: Duration = Duration::from_millis(1500);

/// Per-hop delay of the `/slow-chain/{hops}` route.
#[allow(dead_code)] // Used by other test files
pub const SLOW_HOP_DELAY: Duration = Duration::from_millis(400);

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("urltrace")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines
                .lock()
                .expect("log buffer lock")
                .push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

/// Installs the capturing logger once per test binary.
pub fn install_capture_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger installed");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Captured log lines (`LEVEL message`) containing `needle`.
pub fn captured_lines_containing(needle: &str) -> Vec<String> {
    LOGGER
        .lines
        .lock()
        .expect("log buffer lock")
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}

/// Captured hop status lines for a server, with the level prefix stripped.
#[allow(dead_code)] // Used by other test files
pub fn status_lines_for(addr: SocketAddr) -> Vec<String> {
    captured_lines_containing(&addr.to_string())
        .into_iter()
        .filter_map(|line| line.strip_prefix("INFO ").map(str::to_string))
        .filter(|line| line.starts_with("Status: "))
        .collect()
}

/// Router with the redirect scenarios used across tests.
///
/// - `/redirect-once` answers 302 to `/final`
/// - `/chain/{hops}` redirects `hops` times before answering 200
/// - `/loop` redirects to itself forever
/// - `/slow` answers 200 after `SLOW_ROUTE_DELAY`
/// - `/slow-chain/{hops}` is `/chain/{hops}` with `SLOW_HOP_DELAY` before every answer
pub fn redirect_app() -> Router {
    Router::new()
        .route(
            "/redirect-once",
            get(|| async { (StatusCode::FOUND, [(header::LOCATION, "/final")]) }),
        )
        .route("/final", get(|| async { "Final Destination" }))
        .route(
            "/chain/{hops}",
            get(|Path(hops): Path<usize>| async move {
                if hops == 0 {
                    "End of chain".into_response()
                } else {
                    let next = format!("/chain/{}?left={}", hops - 1, hops - 1);
                    (StatusCode::FOUND, [(header::LOCATION, next)]).into_response()
                }
            }),
        )
        .route(
            "/slow-chain/{hops}",
            get(|Path(hops): Path<usize>| async move {
                tokio::time::sleep(SLOW_HOP_DELAY).await;
                if hops == 0 {
                    "End of slow chain".into_response()
                } else {
                    let next = format!("/slow-chain/{}", hops - 1);
                    (StatusCode::FOUND, [(header::LOCATION, next)]).into_response()
                }
            }),
        )
        .route("/loop", get(|| async { Redirect::temporary("/loop") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(SLOW_ROUTE_DELAY).await;
                "Slow Destination"
            }),
        )
}

/// Serves `app` on an ephemeral localhost port and returns its address.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    });

    addr
}

/// Starts a server that reads each request and closes the connection
/// without answering.
#[allow(dead_code)] // Used by other test files
pub async fn spawn_hang_up_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            // Drain the request head first so closing sends FIN, not RST.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            drop(socket);
        }
    });

    addr
}

/// An address on which nothing is listening.
#[allow(dead_code)] // Used by other test files
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    listener.local_addr().expect("Failed to get address")
}

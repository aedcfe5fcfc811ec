//! Request pipeline demo
//!
//! Wires an access log, an authentication check and a handler into one
//! chain and drives it once per incoming request.
//!
//! Run with `RUST_LOG=trace cargo run --example request_pipeline` to see the
//! chain's own diagnostics.

use filter_chain::{Chain, Filter, FilterError, FilterResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Request {
    path: String,
    token: Option<String>,
    user: Option<String>,
}

impl Request {
    fn new(path: &str, token: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            token: token.map(str::to_string),
            user: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unauthorized request to {path}")]
struct Unauthorized {
    path: String,
}

/// Logs every request and how long the rest of the chain took
#[derive(Default)]
struct AccessLog {
    served: AtomicU64,
}

impl Filter<Request> for AccessLog {
    fn execute(&self, chain: &mut Chain<Request>, request: Request) -> FilterResult {
        let path = request.path.clone();
        let start = Instant::now();

        let result = chain.next(request);

        let n = self.served.fetch_add(1, Ordering::SeqCst) + 1;
        match &result {
            Ok(()) => tracing::info!(%path, elapsed = ?start.elapsed(), n, "request served"),
            Err(error) => tracing::warn!(%path, %error, n, "request rejected"),
        }
        result
    }

    fn name(&self) -> &str {
        "access_log"
    }
}

struct Authenticate;

impl Filter<Request> for Authenticate {
    fn execute(&self, chain: &mut Chain<Request>, mut request: Request) -> FilterResult {
        match request.token.as_deref() {
            Some("s3cret") => {
                request.user = Some("alice".to_string());
                chain.next(request)
            }
            _ => Err(FilterError::new(Unauthorized { path: request.path })),
        }
    }

    fn name(&self) -> &str {
        "authenticate"
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut chain: Chain<Request> = Chain::new()
        .with_name("http")
        .filter(AccessLog::default())
        .filter(Authenticate)
        .inline(|_chain, request| {
            println!(
                "  handling {} for {}",
                request.path,
                request.user.as_deref().unwrap_or("anonymous")
            );
            Ok(())
        });

    println!("{chain:?}\n");

    let requests = [
        Request::new("/orders", Some("s3cret")),
        Request::new("/admin", None),
        Request::new("/orders/42", Some("s3cret")),
    ];

    for request in requests {
        match chain.run(request) {
            Ok(()) => println!("  -> ok"),
            Err(error) => {
                let status = if error.is::<Unauthorized>() { 401 } else { 500 };
                println!("  -> {status} {error}");
            }
        }
    }
}

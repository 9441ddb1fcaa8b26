//! Minimal HTTP/1.1 server for integration tests: serves fixed bodies,
//! redirects and bare statuses by exact request target, and records each request.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub enum Route {
    /// 200 with the given body.
    Body(Vec<u8>),
    /// 302 to another path on the same server.
    Redirect(String),
    /// Arbitrary status with an empty body.
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub target: String,
    pub authorization: Option<String>,
}

pub struct ArtifactServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base_url: String,
    routes: Arc<Mutex<HashMap<String, Route>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ArtifactServer {
    /// Adds or replaces the route for `target`.
    pub fn route(&self, target: String, route: Route) {
        self.routes.lock().unwrap().insert(target, route);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn targets(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.target).collect()
    }
}

/// Starts a server in a background thread. Routes are keyed by request target
/// (path plus query). The server runs until the process exits.
pub fn start(routes: Vec<(String, Route)>) -> ArtifactServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base_url = format!("http://127.0.0.1:{}", port);
    let routes: Arc<Mutex<HashMap<String, Route>>> =
        Arc::new(Mutex::new(routes.into_iter().collect()));
    let requests = Arc::new(Mutex::new(Vec::new()));
    {
        let base_url = base_url.clone();
        let routes = Arc::clone(&routes);
        let requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let requests = Arc::clone(&requests);
                let base_url = base_url.clone();
                thread::spawn(move || handle(stream, &routes, &requests, &base_url));
            }
        });
    }
    ArtifactServer {
        base_url,
        routes,
        requests,
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &Mutex<HashMap<String, Route>>,
    requests: &Mutex<Vec<RecordedRequest>>,
    base_url: &str,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let recorded = parse_request(request);
    let target = recorded.target.clone();
    requests.lock().unwrap().push(recorded);

    let route = routes.lock().unwrap().get(&target).cloned();
    let (status, extra, body): (&str, String, &[u8]) = match &route {
        Some(Route::Body(body)) => ("200 OK", String::new(), body.as_slice()),
        Some(Route::Redirect(path)) => (
            "302 Found",
            format!("Location: {}{}\r\n", base_url, path),
            &b""[..],
        ),
        Some(Route::Status(code)) => {
            let _ = write!(
                stream,
                "HTTP/1.1 {} Status\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                code
            );
            return;
        }
        None => ("404 Not Found", String::new(), &b"{\"message\":\"Not Found\"}"[..]),
    };
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        body.len(),
        extra
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}

fn parse_request(request: &str) -> RecordedRequest {
    let mut lines = request.lines();
    let target = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    let mut authorization = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("authorization") {
                authorization = Some(value.trim().to_string());
            }
        }
    }
    RecordedRequest {
        target,
        authorization,
    }
}

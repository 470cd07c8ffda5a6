//! Minimal HTTP/1.1 server for fetch integration tests.
//!
//! Routes by request path:
//! - `/avatar/present.jpg` -> 200 with the configured body
//! - `/avatar/gone.jpg` -> 410
//! - `/avatar/broken.jpg` -> 500
//! - `/avatar/moved.jpg` -> 302 to `/avatar/present.jpg`
//! - anything else -> 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Starts a server in a background thread serving `body` for the present
/// avatar. Returns the base URL (e.g. "http://127.0.0.1:12345"). The server
/// runs until the process exits.
pub fn start(body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Returns a URL on a port that nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/avatar/present.jpg", port)
}

fn handle(mut stream: TcpStream, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request);
    let path = path.split('?').next().unwrap_or("");

    let (status, extra, payload): (&str, String, &[u8]) = match path {
        "/avatar/present.jpg" => ("200 OK", "Content-Type: image/jpeg\r\n".into(), body),
        "/avatar/gone.jpg" => ("410 Gone", String::new(), &b"gone"[..]),
        "/avatar/broken.jpg" => ("500 Internal Server Error", String::new(), &b"oops"[..]),
        "/avatar/moved.jpg" => (
            "302 Found",
            "Location: /avatar/present.jpg\r\n".into(),
            &b""[..],
        ),
        _ => ("404 Not Found", String::new(), &b"not found"[..]),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        payload.len(),
        extra
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(payload);
}

fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
}

// src/net.rs
// Minimal HTTP GET over plain TCP, no TLS.
// HTTP/1.0 with Connection: close, so the server ends the response at EOF
// and no chunked-transfer handling is needed.

use std::error::Error;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::params::USER_AGENT;

const TIMEOUT_SECS: u64 = 15;

/// GET `path` from `host` on port 80 and return the response body.
/// Non-200 statuses are errors.
pub fn http_get(host: &str, path: &str) -> Result<String, Box<dyn Error>> {
    let resp = request("GET", host, 80, path)?;
    let status = status_line(&resp);
    if !status.contains("200") {
        return Err(join!("HTTP error: ", status).into());
    }
    let body_idx = resp.find("\r\n\r\n").ok_or("malformed HTTP response")? + 4;
    Ok(s!(&resp[body_idx..]))
}

/// HEAD `path` and return only the numeric status code. No body is
/// transferred.
pub fn http_status(host: &str, port: u16, path: &str) -> Result<u16, Box<dyn Error>> {
    let resp = request("HEAD", host, port, path)?;
    let status = status_line(&resp);
    // "HTTP/1.x NNN reason"
    let code = status
        .split_whitespace()
        .nth(1)
        .and_then(|c| c.parse::<u16>().ok())
        .ok_or("malformed status line")?;
    Ok(code)
}

/// True when the URL answers with a non-error status. Only plain `http://`
/// URLs can actually be probed here; anything else is assumed live rather
/// than discarded on a guess.
pub fn link_is_live(url: &str) -> bool {
    let Some((host, port, path)) = split_http_url(url) else {
        return true;
    };
    match http_status(&host, port, &path) {
        Ok(code) => code < 400,
        Err(_) => false,
    }
}

/// Split an `http://host[:port]/path` URL. None for any other scheme.
pub fn split_http_url(url: &str) -> Option<(String, u16, String)> {
    let rest = url.strip_prefix("http://")?;
    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    let (host, port) = match authority.split_once(':') {
        Some((h, p)) => (h, p.parse::<u16>().ok()?),
        None => (authority, 80),
    };
    if host.is_empty() {
        return None;
    }
    Some((s!(host), port, s!(path)))
}

/// Percent-encode a query-string value. Space becomes '+'.
pub fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/* ---------- helpers ---------- */

fn request(method: &str, host: &str, port: u16, path: &str) -> Result<String, Box<dyn Error>> {
    let mut stream = TcpStream::connect((host, port))?;
    stream.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
    stream.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

    let req = format!(
        "{method} {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\n\r\n"
    );
    stream.write_all(req.as_bytes())?;
    stream.flush()?;

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn status_line(resp: &str) -> &str {
    match resp.find("\r\n") {
        Some(i) => &resp[..i],
        None => resp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_split() {
        assert_eq!(
            split_http_url("http://a.example/x?y=1"),
            Some((s!("a.example"), 80, s!("/x?y=1")))
        );
        assert_eq!(
            split_http_url("http://a.example:8080"),
            Some((s!("a.example"), 8080, s!("/")))
        );
        assert_eq!(split_http_url("https://a.example/x"), None);
        assert_eq!(split_http_url("not a url"), None);
        assert_eq!(split_http_url("http://"), None);
    }

    #[test]
    fn status_probe_sends_head() {
        use std::io::{Read, Write};
        use std::net::TcpListener;
        use std::thread;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 512];
            let n = stream.read(&mut buf).unwrap();
            stream.write_all(b"HTTP/1.0 404 Not Found\r\n\r\n").unwrap();
            String::from_utf8_lossy(&buf[..n]).into_owned()
        });

        let code = http_status("127.0.0.1", port, "/gone").unwrap();
        assert_eq!(code, 404);
        let received = server.join().unwrap();
        assert!(received.starts_with("HEAD /gone HTTP/1.0\r\n"), "{received}");
    }

    #[test]
    fn encoding() {
        assert_eq!(urlencode("software engineer"), "software+engineer");
        assert_eq!(urlencode("c++ & co"), "c%2B%2B+%26+co");
        assert_eq!(urlencode("safe-_.~"), "safe-_.~");
    }
}

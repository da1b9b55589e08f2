// src/core/net.rs

// HTTP/1.0 GET over TCP (std-only). The dashboard is served over plain http;
// HTTP/1.0 makes the server close the connection, so no chunked bodies.

use std::{io::{Read, Write}, net::TcpStream, time::Duration};

use log::debug;

use crate::config::consts::{DEFAULT_HTTP_PORT, TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

/// `http://host[:port]/path?query` → (host, port, path)
pub fn split_url(url: &str) -> Result<(&str, u16, &str), ScrapeError> {
    let bad = |reason| ScrapeError::Url { url: s!(url), reason };

    let rest = url.strip_prefix("http://").ok_or_else(|| {
        if url.contains("://") { bad("only http:// is supported") } else { bad("missing http:// scheme") }
    })?;

    let (authority, path) = match rest.find('/') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, "/"),
    };
    let (host, port) = match authority.rsplit_once(':') {
        Some((h, p)) => (h, p.parse::<u16>().map_err(|_| bad("invalid port"))?),
        None => (authority, DEFAULT_HTTP_PORT),
    };
    if host.is_empty() {
        return Err(bad("missing host"));
    }
    Ok((host, port, path))
}

/// Fetch `url` and return the response body.
pub fn http_get(url: &str) -> Result<Vec<u8>, ScrapeError> {
    let (host, port, path) = split_url(url)?;

    let mut s = TcpStream::connect((host, port))?;
    s.set_read_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(TIMEOUT_SECS)))?;

    let req = format!(
        "GET {path} HTTP/1.0\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\n\r\n"
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    debug!("GET {url}: {} bytes", buf.len());

    let status_end = buf.windows(2).position(|w| w == b"\r\n").unwrap_or(buf.len());
    let status = String::from_utf8_lossy(&buf[..status_end]);
    if status.split_whitespace().nth(1) != Some("200") {
        return Err(ScrapeError::Http { status: status.into_owned() });
    }

    let body_idx = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| ScrapeError::Http { status: s!("malformed response, no header end") })?
        + 4;
    buf.drain(..body_idx);
    Ok(buf)
}

//! Local HTTP server: one blocking listener, one connection at a time, one
//! document per request. Request bodies are binary (workbook uploads), so
//! reads are framed by Content-Length instead of a single fixed buffer.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

pub mod api;
pub mod routes;

/// Uploaded workbooks above this size are rejected outright.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;
const MAX_HEAD_BYTES: usize = 64 * 1024;
const READ_CHUNK: usize = 16_384;

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!("wellreport server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut buffer: Vec<u8> = Vec::with_capacity(READ_CHUNK);
    let mut chunk = [0_u8; READ_CHUNK];

    let head_end = loop {
        let bytes_read = stream.read(&mut chunk)?;
        if bytes_read == 0 {
            return Ok(());
        }
        buffer.extend_from_slice(&chunk[..bytes_read]);
        if let Some(position) = find_head_end(&buffer) {
            break position;
        }
        if buffer.len() > MAX_HEAD_BYTES {
            return Ok(());
        }
    };

    let head = String::from_utf8_lossy(&buffer[..head_end]).into_owned();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET").to_string();
    let path = request_parts.next().unwrap_or("/").to_string();
    let content_length = lines
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.trim().eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let response = if content_length > MAX_BODY_BYTES {
        routes::error_response(413, "Payload Too Large", "Workbook upload exceeds 20 MiB")
    } else {
        let body_start = (head_end + 4).min(buffer.len());
        let mut body = buffer.split_off(body_start);
        while body.len() < content_length {
            let bytes_read = stream.read(&mut chunk)?;
            if bytes_read == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..bytes_read]);
        }
        body.truncate(content_length);
        routes::route_request(&method, &path, &body)
    };

    stream.write_all(response.to_http_string().as_bytes())?;
    stream.flush()?;
    Ok(())
}

fn find_head_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

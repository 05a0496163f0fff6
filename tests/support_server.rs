use std::ffi::OsStr;
use std::fmt::Write as _;
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

/// A request as seen by the test server.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl SeenRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw bytes written back for a request; `None` keeps the connection open
/// without answering.
pub type Handler = dyn Fn(&SeenRequest) -> Option<Vec<u8>> + Send + Sync;

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Builds a complete response with a `Content-Length` matching `body`.
#[must_use]
pub fn respond(status: &str, headers: &[(&str, &str)], body: &[u8]) -> Vec<u8> {
    let mut head = format!("HTTP/1.1 {}\r\n", status);
    for (name, value) in headers {
        drop(write!(head, "{}: {}\r\n", name, value));
    }
    drop(write!(
        head,
        "Content-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    ));
    let mut raw = head.into_bytes();
    raw.extend_from_slice(body);
    raw
}

/// Spawn a lightweight HTTP server for tests, answering through `handler`.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_server<F>(handler: F) -> Result<(String, ServerHandle), String>
where
    F: Fn(&SeenRequest) -> Option<Vec<u8>> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let handler: Arc<Handler> = Arc::new(handler);
    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let handler = Arc::clone(&handler);
                    thread::spawn(move || handle_client(stream, handler.as_ref()));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(mut stream: TcpStream, handler: &Handler) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };
    match handler(&request) {
        Some(response) => {
            if stream.write_all(&response).is_err() || stream.flush().is_err() {
                return;
            }
            drop(stream.shutdown(Shutdown::Both));
        }
        None => thread::sleep(Duration::from_secs(30)),
    }
}

fn read_request(stream: &mut TcpStream) -> Option<SeenRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];
    let head_end = loop {
        if let Some(pos) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos;
        }
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(chunk.get(..read)?);
    };

    let head = String::from_utf8_lossy(buffer.get(..head_end)?).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_owned();
    let path = request_line.next()?.to_owned();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_owned(), value.trim().to_owned()))
        })
        .collect();

    let mut request = SeenRequest {
        method,
        path,
        headers,
        body: buffer.get(head_end.checked_add(4)?..)?.to_vec(),
    };
    let expected = request
        .header("content-length")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    while request.body.len() < expected {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            break;
        }
        request.body.extend_from_slice(chunk.get(..read)?);
    }
    Some(request)
}

/// Run the `fuzzsift` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_fuzzsift<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = fuzzsift_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("FUZZSIFT_LOG")
        .output()
        .map_err(|err| format!("run fuzzsift failed: {}", err))
}

fn fuzzsift_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_fuzzsift").map_or_else(
        || Err("CARGO_BIN_EXE_fuzzsift missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}

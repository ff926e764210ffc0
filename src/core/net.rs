// src/core/net.rs
//
// One blocking GET per run. The HTTP status is logged but never rejected:
// whatever body comes back goes to the payload locator.

use std::{
    fs,
    io::Read,
    path::PathBuf,
    time::Duration,
};

use tracing::{debug, info, warn};

use crate::error::{Result, ScrapeError};

/// Source of raw page bytes.
pub trait Fetcher {
    fn fetch(&self, url: &str, headers: &[(String, String)]) -> Result<Vec<u8>>;
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// `timeout` bounds the whole request; None keeps the transport defaults.
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Self { agent: builder.build() }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, headers: &[(String, String)]) -> Result<Vec<u8>> {
        let mut req = self.agent.get(url);
        for (name, value) in headers {
            req = req.set(name, value);
        }
        debug!(url, headers = headers.len(), "GET");

        let resp = match req.call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, resp)) => {
                warn!(url, status = code, "non-success status, reading body anyway");
                resp
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(ScrapeError::Transport(t.to_string()));
            }
        };

        let status = resp.status();
        let mut body = Vec::new();
        resp.into_reader()
            .read_to_end(&mut body)
            .map_err(|e| ScrapeError::Transport(format!("failed reading response body: {e}")))?;

        info!(url, status, bytes = body.len(), "fetched");
        Ok(body)
    }
}

/// A page saved to disk earlier; the url is ignored.
pub struct SavedPage {
    pub path: PathBuf,
}

impl SavedPage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetcher for SavedPage {
    fn fetch(&self, _url: &str, _headers: &[(String, String)]) -> Result<Vec<u8>> {
        let body = fs::read(&self.path)?;
        info!(path = %self.path.display(), bytes = body.len(), "read saved page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_page_reads_file() {
        let path = std::env::temp_dir().join("chart_scrape_saved_page.html");
        fs::write(&path, "<html></html>").unwrap();
        let body = SavedPage::new(&path).fetch("ignored", &[]).unwrap();
        assert_eq!(body, b"<html></html>");
    }

    #[test]
    fn saved_page_missing_is_io_error() {
        let path = std::env::temp_dir().join("chart_scrape_no_such_page.html");
        let _ = fs::remove_file(&path);
        let err = SavedPage::new(path).fetch("ignored", &[]).unwrap_err();
        assert!(matches!(err, ScrapeError::Io(_)));
    }

    /// One-shot HTTP server on a free local port. Answers `status_line` with
    /// `body` and hands back the raw request it saw.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, std::thread::JoinHandle<String>) {
        use std::{
            io::Write,
            net::TcpListener,
        };

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/chart/top", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "{status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });
        (url, handle)
    }

    #[test]
    fn http_error_status_still_returns_body() {
        let (url, server) = serve_once("HTTP/1.1 404 Not Found", "<html>gone</html>");
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5)));
        let headers = vec![(s!("User-Agent"), s!("chart-scrape-test/1.0"))];

        let body = fetcher.fetch(&url, &headers).unwrap();
        assert_eq!(body, b"<html>gone</html>");

        let request = server.join().unwrap().to_ascii_lowercase();
        assert!(request.starts_with("get /chart/top "));
        assert!(request.contains("user-agent: chart-scrape-test/1.0"));
    }

    #[test]
    fn http_ok_returns_body() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", "<html>ok</html>");
        let body = HttpFetcher::default().fetch(&url, &[]).unwrap();
        assert_eq!(body, b"<html>ok</html>");
        server.join().unwrap();
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5)));
        let err = fetcher.fetch(&format!("http://127.0.0.1:{port}/"), &[]).unwrap_err();
        assert!(matches!(err, ScrapeError::Transport(_)), "got {err:?}");
        assert!(err.is_run_failure());
    }
}

//! libcurl-backed [`Transport`]: one blocking GET per call, body streamed to the sink.

use std::io::{self, Write};
use std::time::Duration;

use super::{FetchError, Transport};

const USER_AGENT: &str = concat!("namecorpus/", env!("CARGO_PKG_VERSION"));

/// Curl easy-handle transport. No overall timeout: a stalled transfer is only
/// aborted by the low-speed limit.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        let curl_err = |source: ::curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut easy = ::curl::easy::Easy::new();
        easy.url(url).map_err(curl_err)?;
        easy.follow_location(true).map_err(curl_err)?;
        easy.max_redirections(10).map_err(curl_err)?;
        easy.useragent(USER_AGENT).map_err(curl_err)?;
        easy.connect_timeout(self.connect_timeout).map_err(curl_err)?;
        easy.low_speed_limit(1024).map_err(curl_err)?;
        easy.low_speed_time(Duration::from_secs(60)).map_err(curl_err)?;

        let mut written = 0u64;
        let mut sink_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| match sink.write_all(data) {
                    Ok(()) => {
                        written += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        sink_error = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(curl_err)?;
            transfer.perform()
        };

        if let Some(source) = sink_error {
            return Err(FetchError::Sink {
                url: url.to_string(),
                source,
            });
        }
        performed.map_err(curl_err)?;

        // file:// transfers have no status line and report 0.
        let code = easy.response_code().map_err(curl_err)?;
        if code != 0 && !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }

        sink.flush().map_err(|source| FetchError::Sink {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(url, code, bytes = written, "GET finished");
        Ok(written)
    }
}

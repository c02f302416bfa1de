use std::fmt;

// Failures of the single outbound fetch a page performs.
#[derive(Debug)]
pub enum FetchError {
    // Connection refused, DNS failure, reset mid-request.
    Transport(String),
    // Non-2xx answer; `reason` is the canonical status text when known.
    Status { code: u16, reason: Option<String> },
    // Generic failure raised by the bad page for any non-2xx answer.
    BadResponse,
    // The response arrived but its body could not be read as text.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "fetch failed: {err}"),
            FetchError::Status { code, reason } => match reason {
                Some(reason) => f.write_str(reason),
                None => write!(f, "status {code}"),
            },
            FetchError::BadResponse => f.write_str("Bad response from server"),
            FetchError::Decode(err) => write!(f, "failed to read response body: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

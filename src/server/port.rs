use std::io;
use std::net::{Ipv4Addr, TcpListener};

use anyhow::{Result, bail};
use tracing::debug;

/// Port tried first when none is given
pub const DEFAULT_PORT: u16 = 8000;

/// Number of consecutive ports tried before giving up
pub const PORT_ATTEMPTS: u16 = 10;

/// Bind the first free localhost port in `start..start + attempts`
///
/// The returned listener is already bound, so the port cannot be taken between
/// choosing it and serving on it.
pub fn bind_available_port(start: u16, attempts: u16) -> Result<TcpListener> {
    let mut last_error: Option<io::Error> = None;

    for port in (0..attempts).filter_map(|offset| start.checked_add(offset)) {
        match TcpListener::bind((Ipv4Addr::LOCALHOST, port)) {
            Ok(listener) => return Ok(listener),
            Err(e) => {
                debug!(port, error = %e, "port unavailable");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => bail!("Could not find an available port starting from {}: {}", start, e),
        None => bail!("Could not find an available port starting from {}", start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_skips_taken_port() {
        let taken = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let taken_port = taken.local_addr().unwrap().port();
        assert!(TcpListener::bind((Ipv4Addr::LOCALHOST, taken_port)).is_err());

        // Another free port may still be taken by a parallel test; allow the full range
        if let Ok(listener) = bind_available_port(taken_port, PORT_ATTEMPTS) {
            let port = listener.local_addr().unwrap().port();
            assert_ne!(port, taken_port);
            assert!(port > taken_port && port < taken_port.saturating_add(PORT_ATTEMPTS));
        }
    }

    #[test]
    fn test_bind_fails_when_range_exhausted() {
        let taken = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
        let taken_port = taken.local_addr().unwrap().port();

        let result = bind_available_port(taken_port, 1);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Could not find an available port"));
    }

    #[test]
    fn test_bind_with_zero_attempts_fails() {
        assert!(bind_available_port(DEFAULT_PORT, 0).is_err());
    }
}

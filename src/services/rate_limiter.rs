use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-client admission check consulted before any proxying happens.
///
/// Kept as a trait so handlers never touch the concrete bookkeeping and
/// tests can swap in a permissive stub.
pub trait ClientRateLimit: Send + Sync {
    /// Returns true if the client may proceed, recording the request.
    fn check(&self, client: IpAddr) -> bool;
}

struct Window {
    started: Instant,
    count: u32,
}

/// Fixed-window rate limiter keyed by client IP
///
/// Allows at most `limit` requests per `window`, counted from each client's
/// first request in the current window. Expired windows are reset lazily on
/// the client's next request.
pub struct FixedWindowLimiter {
    windows: DashMap<IpAddr, Window>,
    limit: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            limit,
            window,
        }
    }
}

impl ClientRateLimit for FixedWindowLimiter {
    fn check(&self, client: IpAddr) -> bool {
        let now = Instant::now();
        let mut entry = self.windows.entry(client).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }

        if entry.count >= self.limit {
            return false;
        }
        entry.count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(last: u8) -> IpAddr {
        IpAddr::from([127, 0, 0, last])
    }

    #[test]
    fn test_limit_enforced_within_window() {
        let limiter = FixedWindowLimiter::new(5, Duration::from_secs(60));

        for _ in 0..5 {
            assert!(limiter.check(addr(1)));
        }
        assert!(!limiter.check(addr(1)));
        assert!(!limiter.check(addr(1)));
    }

    #[test]
    fn test_clients_are_tracked_independently() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.check(addr(1)));
        assert!(!limiter.check(addr(1)));
        assert!(limiter.check(addr(2)));
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let limiter = FixedWindowLimiter::new(1, Duration::from_millis(40));

        assert!(limiter.check(addr(1)));
        assert!(!limiter.check(addr(1)));

        std::thread::sleep(Duration::from_millis(60));
        assert!(limiter.check(addr(1)));
    }
}

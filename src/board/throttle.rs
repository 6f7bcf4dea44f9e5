use std::time::{Duration, Instant};

/// resize 节流（尾沿触发）
///
/// 间隔内的 resize 不会立即生效，而是保持 pending，
/// 间隔过后的第一次 `poll` 返回 true。
#[derive(Debug, Clone)]
pub struct ResizeThrottle {
    interval: Duration,
    last_fired: Option<Instant>,
    pending: bool,
}

impl ResizeThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
            pending: false,
        }
    }

    /// 记录一次 resize
    pub fn note_resize(&mut self) {
        self.pending = true;
    }

    /// 是否应该在 `now` 重新计算
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }
        let ready = match self.last_fired {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        };
        if ready {
            self.pending = false;
            self.last_fired = Some(now);
        }
        ready
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_throttle_never_fires() {
        let mut throttle = ResizeThrottle::new(Duration::from_millis(250));
        assert!(!throttle.poll(Instant::now()));
    }

    #[test]
    fn test_first_resize_fires_immediately() {
        let mut throttle = ResizeThrottle::new(Duration::from_millis(250));
        throttle.note_resize();
        assert!(throttle.poll(Instant::now()));
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_burst_is_coalesced_and_applied_after_interval() {
        let start = Instant::now();
        let mut throttle = ResizeThrottle::new(Duration::from_millis(250));

        throttle.note_resize();
        assert!(throttle.poll(start));

        throttle.note_resize();
        throttle.note_resize();
        assert!(!throttle.poll(start + Duration::from_millis(100)));
        assert!(throttle.is_pending());

        assert!(throttle.poll(start + Duration::from_millis(250)));
        assert!(!throttle.poll(start + Duration::from_millis(600)));
    }
}

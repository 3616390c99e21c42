//! Timers for transition bookkeeping.

/// Resolve after `ms` milliseconds on the current platform's timer.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

/// Seconds (as written in transition descriptions) to whole milliseconds.
pub fn secs_to_ms(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs * 1000.0).round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_fractional_seconds() {
        assert_eq!(secs_to_ms(0.25), 250);
        assert_eq!(secs_to_ms(0.7), 700);
        assert_eq!(secs_to_ms(3.0), 3000);
    }

    #[test]
    fn clamps_invalid_durations_to_zero() {
        assert_eq!(secs_to_ms(-1.0), 0);
        assert_eq!(secs_to_ms(f64::NAN), 0);
        assert_eq!(secs_to_ms(f64::INFINITY), 0);
    }
}

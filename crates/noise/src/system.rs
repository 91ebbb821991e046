//! Non-deterministic seed sources.
//!
//! Nothing else in this crate reads the outside world. Both functions here are meant for
//! top-level entry points that explicitly want a fresh sequence on every run.

/// Returns a random `u64` value.
///
/// If the operating system cannot provide entropy, a warning is logged and the current time is
/// used instead.
pub fn entropy() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let bytes: [u8; 8] = std::array::from_fn(|_| (js_sys::Math::random() * 256.0) as u8);
        u64::from_ne_bytes(bytes)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => u64::from_ne_bytes(bytes),
            Err(err) => {
                squirrel_log::warning!("no entropy available ({err}), falling back on the clock");
                time_millis() as u64
            }
        }
    }
}

/// Returns the number of milliseconds elapsed since the Unix epoch.
///
/// A clock set before the epoch yields a negative value.
pub fn time_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis() as i64,
            Err(err) => -(err.duration().as_millis() as i64),
        }
    }
}

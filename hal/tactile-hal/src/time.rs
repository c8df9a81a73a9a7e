//! Monotonic millisecond time
//!
//! Time is a free-running `u32` millisecond counter that wraps after about
//! 49.7 days. All arithmetic on it is wrapping, and differences are signed so
//! that a reading taken just after the wrap compares correctly against one
//! taken just before it.

/// A reading of a wrapping millisecond counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Create an instant from a raw counter value
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw counter value in milliseconds
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Wrap-safe signed difference `a - b` in milliseconds
    ///
    /// Correct as long as the real distance between the two readings is
    /// less than half the counter period (~24.8 days).
    pub const fn diff(a: Instant, b: Instant) -> i32 {
        a.0.wrapping_sub(b.0) as i32
    }

    /// Milliseconds elapsed from `earlier` to `self`
    pub const fn since(&self, earlier: Instant) -> i32 {
        Self::diff(*self, earlier)
    }

    /// Advance by `ms`, wrapping at the counter period
    pub const fn wrapping_add(&self, ms: u32) -> Instant {
        Instant(self.0.wrapping_add(ms))
    }
}

/// Monotonic wrapping millisecond clock
///
/// Must be callable from both the interrupt and the main context; reading
/// the clock must not block.
pub trait Clock {
    /// Current counter value
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Clock backed by the embassy time driver, truncated to 32 bits
#[cfg(feature = "embassy-time")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy-time")]
impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_millis(embassy_time::Instant::now().as_millis() as u32)
    }
}

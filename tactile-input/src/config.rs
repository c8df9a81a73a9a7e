//! Button configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default hold time before a press counts as a long press
pub const DEFAULT_LONG_PRESS_MS: u32 = 1500;

/// Largest threshold the signed clock difference can represent
pub const MAX_LONG_PRESS_MS: u32 = i32::MAX as u32;

/// Button configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Long-press threshold of zero
    ZeroThreshold,
    /// Long-press threshold exceeds half the clock period
    ThresholdTooLarge,
}

/// Button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Hold time in milliseconds after which a press is a long press
    pub long_press_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }
}

impl ButtonConfig {
    /// Create a configuration with the given long-press threshold
    pub const fn with_long_press_ms(long_press_ms: u32) -> Self {
        Self { long_press_ms }
    }

    /// Check the configuration for values the state machine cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press_ms == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.long_press_ms > MAX_LONG_PRESS_MS {
            return Err(ConfigError::ThresholdTooLarge);
        }
        Ok(())
    }
}

//! Button gesture events

/// Gestures reported by [`Button::poll`](crate::Button::poll)
///
/// Listed in the order a single poll delivers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button went down
    Down,
    /// Button was released without a long press being reported
    Click,
    /// Button has been held past the long-press threshold
    LongPress,
    /// Button went up
    Up,
}

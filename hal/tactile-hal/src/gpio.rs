//! GPIO pin abstractions
//!
//! Provides traits for digital input pins with edge interrupts that can be
//! implemented by chip-specific HALs.

/// Logical level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Self::Output {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Edges an interrupt can be triggered on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high transition
    Rising,
    /// High to low transition
    Falling,
    /// Any transition
    Both,
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Pins used for buttons are expected to be
/// configured with a pull-up.
pub trait InputPin {
    /// Current level of the pin
    fn level(&mut self) -> Level;

    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool {
        self.level() == Level::High
    }

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        self.level() == Level::Low
    }
}

/// Edge-triggered interrupt control for an input line
///
/// The interrupt vector itself is bound by the application; this trait only
/// arms and disarms delivery for the line.
pub trait EdgeInterrupt {
    /// Arm the interrupt for the given edges
    fn listen(&mut self, edge: Edge);

    /// Disable interrupt delivery for this line
    fn unlisten(&mut self);

    /// Check whether the interrupt is currently armed
    fn is_listening(&self) -> bool;
}

/// An input pin paired with the interrupt control for its line
///
/// Chip HALs often expose level reads and interrupt arming on separate
/// objects; this joins them into one line usable by a button.
pub struct Line<P, I> {
    pin: P,
    irq: I,
}

impl<P: InputPin, I: EdgeInterrupt> Line<P, I> {
    pub fn new(pin: P, irq: I) -> Self {
        Self { pin, irq }
    }

    /// Split back into pin and interrupt control
    pub fn into_parts(self) -> (P, I) {
        (self.pin, self.irq)
    }
}

impl<P: InputPin, I> InputPin for Line<P, I> {
    fn level(&mut self) -> Level {
        self.pin.level()
    }
}

impl<P, I: EdgeInterrupt> EdgeInterrupt for Line<P, I> {
    fn listen(&mut self, edge: Edge) {
        self.irq.listen(edge);
    }

    fn unlisten(&mut self) {
        self.irq.unlisten();
    }

    fn is_listening(&self) -> bool {
        self.irq.is_listening()
    }
}

/// Adapter for infallible `embedded-hal` 1.0 input pins
#[cfg(feature = "embedded-hal")]
pub struct HalInput<P>(pub P);

#[cfg(feature = "embedded-hal")]
impl<P> InputPin for HalInput<P>
where
    P: embedded_hal::digital::InputPin<Error = core::convert::Infallible>,
{
    fn level(&mut self) -> Level {
        match self.0.is_high() {
            Ok(high) => Level::from(high),
            Err(never) => match never {},
        }
    }
}

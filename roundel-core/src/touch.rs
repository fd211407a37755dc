//! Touch data model
//!
//! Types produced by the touch controller driver and consumed by the
//! input pipeline. One [`TouchSample`] is produced per poll and never
//! stored; the render loop only ever sees the pointer events derived
//! from it.

/// Gesture reported by the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// No gesture
    None,
    /// Swipe up
    SwipeUp,
    /// Swipe down
    SwipeDown,
    /// Swipe left
    SwipeLeft,
    /// Swipe right
    SwipeRight,
    /// Single tap
    SingleClick,
    /// Double tap
    DoubleClick,
    /// Long press
    LongPress,
    /// Code not in the controller's documented set
    Unknown(u8),
}

impl Gesture {
    /// Decode the controller's gesture code byte
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => Gesture::None,
            0x01 => Gesture::SwipeUp,
            0x02 => Gesture::SwipeDown,
            0x03 => Gesture::SwipeLeft,
            0x04 => Gesture::SwipeRight,
            0x05 => Gesture::SingleClick,
            0x0B => Gesture::DoubleClick,
            0x0C => Gesture::LongPress,
            other => Gesture::Unknown(other),
        }
    }
}

/// Contact phase reported in bits 6-7 of the X high byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// No contact
    None = 0,
    /// Finger down
    Down = 1,
    /// Finger lifted
    Up = 2,
    /// Finger held in contact
    Contact = 3,
}

impl TouchEvent {
    /// Decode the 2-bit event field
    ///
    /// The raw codes follow the controller's numbering: 0 none, 1 down,
    /// 2 up, 3 contact.
    pub fn from_code(code: u8) -> Self {
        match code & 0x03 {
            0x01 => TouchEvent::Down,
            0x02 => TouchEvent::Up,
            0x03 => TouchEvent::Contact,
            _ => TouchEvent::None,
        }
    }
}

/// One decoded touch report
///
/// Invariant: `touched == (finger count > 0)`. When `touched` is false,
/// `event` is [`TouchEvent::None`] and x/y are zeroed (the raw register
/// contents are not meaningful without a contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    /// X position, 12-bit (0-4095)
    pub x: u16,
    /// Y position, 12-bit (0-4095)
    pub y: u16,
    /// Contact phase
    pub event: TouchEvent,
    /// Gesture, if the controller recognized one
    pub gesture: Gesture,
    /// Whether at least one finger is on the panel
    pub touched: bool,
}

impl TouchSample {
    /// A sample with no contact
    pub const RELEASED: Self = Self {
        x: 0,
        y: 0,
        event: TouchEvent::None,
        gesture: Gesture::None,
        touched: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_codes_follow_controller_numbering() {
        assert_eq!(TouchEvent::from_code(0x00), TouchEvent::None);
        assert_eq!(TouchEvent::from_code(0x01), TouchEvent::Down);
        assert_eq!(TouchEvent::from_code(0x02), TouchEvent::Up);
        assert_eq!(TouchEvent::from_code(0x03), TouchEvent::Contact);
    }

    #[test]
    fn event_code_ignores_high_bits() {
        // Callers pass the already-shifted 2-bit field; stray high bits
        // must not change the result
        assert_eq!(TouchEvent::from_code(0xFC), TouchEvent::None);
        assert_eq!(TouchEvent::from_code(0xFD), TouchEvent::Down);
    }

    #[test]
    fn gesture_codes_round_trip_known_set() {
        assert_eq!(Gesture::from_code(0x05), Gesture::SingleClick);
        assert_eq!(Gesture::from_code(0x0B), Gesture::DoubleClick);
        assert_eq!(Gesture::from_code(0x0C), Gesture::LongPress);
        assert_eq!(Gesture::from_code(0x7F), Gesture::Unknown(0x7F));
    }
}

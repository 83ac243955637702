//! Command vocabulary understood by the robot.
//!
//! Every decoder here is total: any byte maps to a command, and bytes
//! outside the vocabulary map to the safe default (Stop for motion, Off
//! for relays).  Invalid input is never an error.

use core::fmt;

// ───────────────────────────────────────────────────────────────
// Motion
// ───────────────────────────────────────────────────────────────

/// Byte written to the motion characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MotionCommand {
    Stop = 0,
    Forward = 1,
    Back = 2,
    Left = 3,
    Right = 4,
}

impl MotionCommand {
    /// Decode a client byte.  Unknown codes decode to [`MotionCommand::Stop`].
    pub const fn from_byte(b: u8) -> Self {
        match b {
            1 => Self::Forward,
            2 => Self::Back,
            3 => Self::Left,
            4 => Self::Right,
            _ => Self::Stop,
        }
    }

    /// Per-side drive directions as `(left, right)`.
    ///
    /// Turning is done in place: one side backs while the other drives.
    pub const fn drive_pair(self) -> (DriveDirection, DriveDirection) {
        use DriveDirection::{Back, Forward, Stop};
        match self {
            Self::Stop => (Stop, Stop),
            Self::Forward => (Forward, Forward),
            Self::Back => (Back, Back),
            Self::Left => (Back, Forward),
            Self::Right => (Forward, Back),
        }
    }

    /// Console phrase for the debug stream.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Stop => "Stop",
            Self::Forward => "Go Forward",
            Self::Back => "Go Back",
            Self::Left => "Rotate Left",
            Self::Right => "Rotate Right",
        }
    }
}

/// Direction one motor side can be driven in.  No speed control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveDirection {
    Stop,
    Forward,
    Back,
}

/// Physical motor side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotorSide {
    Left,
    Right,
}

// ───────────────────────────────────────────────────────────────
// Relays
// ───────────────────────────────────────────────────────────────

/// Byte written to a relay characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RelayCommand {
    On = 0,
    Off = 1,
}

impl RelayCommand {
    /// Decode a client byte.  Anything but `0` decodes to [`RelayCommand::Off`].
    pub const fn from_byte(b: u8) -> Self {
        match b {
            0 => Self::On,
            _ => Self::Off,
        }
    }
}

impl fmt::Display for RelayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "ON"),
            Self::Off => write!(f, "OFF"),
        }
    }
}

/// One of the four independent relay outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayId {
    One,
    Two,
    Three,
    Four,
}

impl RelayId {
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// 1-based relay number as printed on the board.
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// 0-based index into relay arrays.
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

//! GPIO pin assignments for the RelayBot main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Rear drive motors (dual-input H-bridge per side)
// ---------------------------------------------------------------------------

/// Left rear motor, bridge input A.
pub const MOTOR_LEFT_A_GPIO: i32 = 4;
/// Left rear motor, bridge input B.
pub const MOTOR_LEFT_B_GPIO: i32 = 5;
/// Right rear motor, bridge input A.
pub const MOTOR_RIGHT_A_GPIO: i32 = 6;
/// Right rear motor, bridge input B.
pub const MOTOR_RIGHT_B_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Relay bank (active-low inputs: LOW = energised)
// ---------------------------------------------------------------------------

pub const RELAY_1_GPIO: i32 = 15;
pub const RELAY_2_GPIO: i32 = 16;
pub const RELAY_3_GPIO: i32 = 17;
pub const RELAY_4_GPIO: i32 = 18;

/// Relay pins indexed by relay number minus one.
pub const RELAY_GPIOS: [i32; 4] = [RELAY_1_GPIO, RELAY_2_GPIO, RELAY_3_GPIO, RELAY_4_GPIO];

// ---------------------------------------------------------------------------
// Link indicator LED (HIGH = client connected)
// ---------------------------------------------------------------------------

pub const LINK_LED_GPIO: i32 = 38;

/// Every pin the firmware drives as a push-pull output.
pub const OUTPUT_GPIOS: [i32; 9] = [
    MOTOR_LEFT_A_GPIO,
    MOTOR_LEFT_B_GPIO,
    MOTOR_RIGHT_A_GPIO,
    MOTOR_RIGHT_B_GPIO,
    RELAY_1_GPIO,
    RELAY_2_GPIO,
    RELAY_3_GPIO,
    RELAY_4_GPIO,
    LINK_LED_GPIO,
];

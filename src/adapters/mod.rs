//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                 |
//! |------------|--------------|-----------------------------|
//! | `ble`      | RadioPort    | Bluedroid GATT server       |
//! | `hardware` | ActuatorPort | Motor, relay and LED GPIOs  |
//! | `log_sink` | EventSink    | Serial log output           |

pub mod ble;
pub mod hardware;
pub mod log_sink;
pub(crate) mod utils;

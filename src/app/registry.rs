//! Channel registry — the fixed table of addressable logical channels.
//!
//! Five channels exist for the whole life of the firmware: motion and
//! relays 1-4.  Each is bound once to the attribute handle the radio stack
//! assigned to its characteristic; incoming writes are routed by handle.

use crate::error::RadioError;
use crate::events::AttrHandle;

use super::commands::RelayId;

/// Identity of a logical channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelId {
    Motion = 0,
    Relay1 = 1,
    Relay2 = 2,
    Relay3 = 3,
    Relay4 = 4,
}

impl ChannelId {
    /// Total number of channels — used to size the table array.
    pub const COUNT: usize = 5;

    /// Registration order, which is also table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Motion,
        Self::Relay1,
        Self::Relay2,
        Self::Relay3,
        Self::Relay4,
    ];

    /// The relay this channel drives, or `None` for motion.
    pub const fn relay(self) -> Option<RelayId> {
        match self {
            Self::Motion => None,
            Self::Relay1 => Some(RelayId::One),
            Self::Relay2 => Some(RelayId::Two),
            Self::Relay3 => Some(RelayId::Three),
            Self::Relay4 => Some(RelayId::Four),
        }
    }

    /// Channel backing a relay.
    pub const fn for_relay(relay: RelayId) -> Self {
        match relay {
            RelayId::One => Self::Relay1,
            RelayId::Two => Self::Relay2,
            RelayId::Three => Self::Relay3,
            RelayId::Four => Self::Relay4,
        }
    }
}

/// One addressable logical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    id: ChannelId,
    handle: Option<AttrHandle>,
    /// Last byte accepted.  `None` until the first write (stop-equivalent).
    cached_value: Option<u8>,
}

impl Channel {
    const fn new(id: ChannelId) -> Self {
        Self {
            id,
            handle: None,
            cached_value: None,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn handle(&self) -> Option<AttrHandle> {
        self.handle
    }

    pub fn cached_value(&self) -> Option<u8> {
        self.cached_value
    }

    /// Write-through after a successful actuation.
    pub(crate) fn record(&mut self, value: u8) {
        self.cached_value = Some(value);
    }
}

/// Fixed table mapping handles to channels.
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    channels: [Channel; ChannelId::COUNT],
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self {
            channels: ChannelId::ALL.map(Channel::new),
        }
    }

    /// Bind every channel to the handle the stack assigned, indexed in
    /// [`ChannelId::ALL`] order.
    ///
    /// Handles must be pairwise distinct; on violation nothing is bound.
    pub fn bind(&mut self, handles: [AttrHandle; ChannelId::COUNT]) -> Result<(), RadioError> {
        for (i, h) in handles.iter().enumerate() {
            if handles[i + 1..].contains(h) {
                return Err(RadioError::DuplicateHandle(*h));
            }
        }
        for (channel, handle) in self.channels.iter_mut().zip(handles) {
            channel.handle = Some(handle);
        }
        Ok(())
    }

    /// Whether handles have been assigned.
    pub fn is_bound(&self) -> bool {
        self.channels.iter().all(|c| c.handle.is_some())
    }

    /// Route a handle to its channel.  Linear scan over five entries.
    pub fn resolve(&mut self, handle: AttrHandle) -> Option<&mut Channel> {
        self.channels
            .iter_mut()
            .find(|c| c.handle == Some(handle))
    }

    pub fn get(&self, id: ChannelId) -> &Channel {
        &self.channels[id as usize]
    }
}

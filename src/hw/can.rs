//! Compile-time selection of the CAN bus pin routing.
//!
//! CAN1 has a single RX/TX line pair that the F407 can bond out to one of
//! three pin pairs depending on board wiring. Exactly one routing is
//! active per build; moving the bus means editing [`CAN_ROUTING`] and
//! rebuilding, never switching at runtime.

use crate::hw::ports::PortId;

/// Alternate function number of CAN1 on the F4 family.
pub const CAN_AF: u8 = 9;

/// Physical routings for the CAN1 RX/TX pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanRouting {
    /// PA11 (RX) / PA12 (TX)
    PortA,
    /// PB8 (RX) / PB9 (TX)
    PortB,
    /// PD0 (RX) / PD1 (TX)
    PortD,
}

/// Active routing for this board.
pub const CAN_ROUTING: CanRouting = CanRouting::PortA;

impl CanRouting {
    pub const fn port(self) -> PortId {
        match self {
            CanRouting::PortA => PortId::A,
            CanRouting::PortB => PortId::B,
            CanRouting::PortD => PortId::D,
        }
    }

    /// (RX, TX) pin numbers within the routed port.
    pub const fn pin_pair(self) -> (u8, u8) {
        match self {
            CanRouting::PortA => (11, 12),
            CanRouting::PortB => (8, 9),
            CanRouting::PortD => (0, 1),
        }
    }
}

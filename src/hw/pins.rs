// SPDX-License-Identifier: MIT

//! Logical pin map and the pin driver for the CanNode board.
//!
//! Application code addresses pins by [`PinId`], never by port and pin
//! number; the mapping table below is the single place where the board
//! wiring is written down. [`Pins::init`] performs the one-time hardware
//! bring-up (port clocks plus the CAN routing selected in [`can`]).

use core::convert::Infallible;
use core::sync::atomic::AtomicBool;
use core::sync::atomic::Ordering;

use embedded_hal::digital::ErrorType;
use embedded_hal::digital::InputPin;
use embedded_hal::digital::OutputPin;
use embedded_hal::digital::StatefulOutputPin;

use crate::hw::can;
use crate::hw::can::CanRouting;
use crate::hw::ports;
use crate::hw::ports::GpioPort;
use crate::hw::ports::Mode;
use crate::hw::ports::PortId;
use crate::hw::ports::Rcc;
use crate::hw::ports::Speed;

/// Logical pins known to the board.
///
/// Adding a variant requires adding the matching [`PIN_MAP`] entry; the
/// table's length is tied to [`PinId::COUNT`], so the two cannot drift
/// apart without a compile error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinId {
    Led1,
    Led2,
    Led3,
    Led4,
    Led5,
}

impl PinId {
    /// Number of valid logical pins.
    pub const COUNT: usize = 5;

    /// All valid identifiers, in table order.
    pub const ALL: [PinId; Self::COUNT] = [
        PinId::Led1,
        PinId::Led2,
        PinId::Led3,
        PinId::Led4,
        PinId::Led5,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decode an untrusted index, e.g. a pin number received over the
    /// wire. Anything at or beyond [`PinId::COUNT`] is `None`.
    pub const fn from_index(index: u8) -> Option<PinId> {
        match index {
            0 => Some(PinId::Led1),
            1 => Some(PinId::Led2),
            2 => Some(PinId::Led3),
            3 => Some(PinId::Led4),
            4 => Some(PinId::Led5),
            _ => None,
        }
    }
}

struct PinMapping {
    port: PortId,
    pin: u8,
}

/// Logical pin to physical location, indexed by `PinId as usize`.
const PIN_MAP: [PinMapping; PinId::COUNT] = [
    PinMapping { port: PortId::A, pin: 0 }, // Led1
    PinMapping { port: PortId::A, pin: 1 }, // Led2
    PinMapping { port: PortId::A, pin: 2 }, // Led3
    PinMapping { port: PortId::A, pin: 3 }, // Led4
    PinMapping { port: PortId::A, pin: 4 }, // Led5
];

// Every mapped pin number must fit a 16-pin port.
const _: () = {
    let mut i = 0;
    while i < PIN_MAP.len() {
        assert!(PIN_MAP[i].pin < 16);
        i += 1;
    }
};

/// AHB1ENR bits for GPIOA..GPIOI — every port the map or the bus routing
/// may touch.
const GPIO_CLOCKS: u32 = 0x1FF;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// The board pin driver.
///
/// Holds one handle per GPIO block the pin map and the CAN routing can
/// reach. On target the handles alias device memory; under test they
/// point at register blocks in plain memory.
pub struct Pins<'r> {
    rcc: &'r Rcc,
    gpioa: &'r GpioPort,
    gpiob: &'r GpioPort,
    gpiod: &'r GpioPort,
}

impl Pins<'static> {
    /// Hand out the hardware-backed driver. Returns `None` after the
    /// first call.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(unsafe { Self::steal() })
        }
    }

    /// # Safety
    ///
    /// Bypasses the [`Pins::take`] singleton check; the caller must make
    /// sure no second driver instance races this one on the same pins.
    pub unsafe fn steal() -> Self {
        Pins {
            rcc: ports::rcc(),
            gpioa: ports::gpioa(),
            gpiob: ports::gpiob(),
            gpiod: ports::gpiod(),
        }
    }
}

impl<'r> Pins<'r> {
    /// Assemble a driver over explicit register blocks.
    pub fn new(rcc: &'r Rcc, gpioa: &'r GpioPort, gpiob: &'r GpioPort, gpiod: &'r GpioPort) -> Self {
        Pins {
            rcc,
            gpioa,
            gpiob,
            gpiod,
        }
    }

    /// One-time hardware bring-up: port clocks and the CAN pin routing,
    /// nothing else. Calling it again reasserts the same bit patterns.
    pub fn init(&self) {
        self.init_with(|_| {});
    }

    /// Bring-up plus board-specific pin setup.
    ///
    /// The closure runs after clocks and routing are programmed, with
    /// the driver available for [`Pins::configure_output`] and friends.
    pub fn init_with(&self, setup: impl FnOnce(&Self)) {
        self.rcc.enable_ahb1_clocks(GPIO_CLOCKS);
        self.apply_routing(can::CAN_ROUTING);

        #[cfg(feature = "defmt")]
        defmt::debug!("pins: CAN routed via {}", can::CAN_ROUTING);

        setup(self);
    }

    fn apply_routing(&self, routing: CanRouting) {
        let port = self.port(routing.port());
        let (rx, tx) = routing.pin_pair();
        for pin in [rx, tx] {
            port.set_alternate_function(pin, can::CAN_AF);
            port.set_output_speed(pin, Speed::VeryHigh); // EMF: keep bus edges clean
            port.set_mode(pin, Mode::Alternate);
        }
    }

    fn port(&self, id: PortId) -> &'r GpioPort {
        match id {
            PortId::A => self.gpioa,
            PortId::B => self.gpiob,
            PortId::D => self.gpiod,
        }
    }

    fn lookup(&self, id: PinId) -> (&'r GpioPort, u8) {
        let entry = &PIN_MAP[id.index()];
        (self.port(entry.port), entry.pin)
    }

    /// Drive a logical output pin high or low.
    pub fn set(&self, id: PinId, state: bool) {
        let (port, pin) = self.lookup(id);
        port.set_output(pin, state);
    }

    /// Sample a logical pin's input level.
    pub fn get(&self, id: PinId) -> bool {
        let (port, pin) = self.lookup(id);
        port.input(pin)
    }

    /// [`Pins::set`] for raw indices; out-of-range indices are silently
    /// ignored.
    pub fn set_index(&self, index: u8, state: bool) {
        if let Some(id) = PinId::from_index(index) {
            self.set(id, state);
        }
    }

    /// [`Pins::get`] for raw indices; out-of-range indices read as low.
    pub fn get_index(&self, index: u8) -> bool {
        match PinId::from_index(index) {
            Some(id) => self.get(id),
            None => false,
        }
    }

    /// Put a logical pin into general-purpose output mode.
    pub fn configure_output(&self, id: PinId) {
        let (port, pin) = self.lookup(id);
        port.set_mode(pin, Mode::Output);
    }

    /// Put a logical pin into input mode.
    pub fn configure_input(&self, id: PinId) {
        let (port, pin) = self.lookup(id);
        port.set_mode(pin, Mode::Input);
    }

    /// Handle for one logical pin, implementing the `embedded-hal`
    /// digital traits.
    pub fn pin(&self, id: PinId) -> PinHandle<'r> {
        let (port, pin) = self.lookup(id);
        PinHandle { port, pin }
    }
}

/// One logical pin, resolved to its port block and pin number.
pub struct PinHandle<'r> {
    port: &'r GpioPort,
    pin: u8,
}

impl ErrorType for PinHandle<'_> {
    type Error = Infallible;
}

impl OutputPin for PinHandle<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.port.set_output(self.pin, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.port.set_output(self.pin, true);
        Ok(())
    }
}

impl StatefulOutputPin for PinHandle<'_> {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.port.output_latch(self.pin))
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.port.output_latch(self.pin))
    }
}

impl InputPin for PinHandle<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.port.input(self.pin))
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.port.input(self.pin))
    }
}

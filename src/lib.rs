// SPDX-License-Identifier: MIT

//! # CanNode Firmware Pin Layer
//!
//! Board pin abstraction for a CanNode controller, targeting an STM32F407
//! MCU: logical pin names, one-time GPIO and CAN-routing bring-up, and
//! digital set/get addressed by logical identifier.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw::ports`] | F407 GPIO/RCC register blocks and field-level helpers |
//! | [`hw::can`] | Compile-time selection of the CAN bus pin routing |
//! | [`hw::pins`] | Logical pin map, hardware bring-up, set/get by id |
//! | [`hw::led`] | LED wrapper over an output pin |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Flash a board (pulls in the cortex-m runtime):
//!
//! ```bash
//! cargo run --release --features rt
//! ```

#![cfg_attr(not(test), no_std)]

pub mod hw;

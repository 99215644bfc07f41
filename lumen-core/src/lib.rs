//! Board-agnostic core logic for the optical Morse link firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Morse table and timing rules
//! - Emission schedule for the LED transmitter
//! - Pulse decoder state machine for the light sensor
//! - Message presenter (ticker for messages wider than the display)
//! - Mode controller routing SEND and RECEIVE flows
//! - Screen buffer, UI screens and hardware abstraction traits
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod config;
pub mod decoder;
pub mod display;
pub mod mode;
pub mod morse;
pub mod presenter;
pub mod sensor;
pub mod traits;

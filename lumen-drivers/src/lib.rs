//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lumen-core for the transceiver hardware:
//!
//! - LED emitter on a GPIO output
//! - HD44780 character LCD in 4-bit parallel mode
//! - Async Morse transmitter driving an emitter from the emission schedule

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod emitter;
pub mod transmit;

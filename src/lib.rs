//! # serialcmd - serial command dispatcher
//!
//! A small command tokenizer and dispatcher for byte streams arriving over a
//! serial port, a radio link or any other transport of a resource-constrained
//! device. Bytes are assembled into lines, the first word of each line selects
//! a registered handler, and the handler pulls the remaining words as its
//! arguments. This library is designed for embedded systems and supports
//! `no_std` environments; it never allocates.
//!
//! ## Features
//!
//! - **Bounded line assembly**: printable ASCII only, over-long lines truncated
//! - **Ordered command table**: case-sensitive names, first registration wins
//! - **Default handler**: receives any command nobody registered
//! - **Argument session**: handlers iterate the rest of the line as tokens
//! - **Transport agnostic**: anything implementing [`stream::ByteSource`]
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serialcmd = "0.1.0"
//! ```
//!
//! ### Basic Example
//!
//! ```rust
//! use serialcmd::{SerialCommand, Tokens};
//!
//! fn led(args: &mut Tokens<'_>) {
//!     match args.next() {
//!         Some("on") => { /* drive the pin high */ }
//!         Some("off") => { /* drive the pin low */ }
//!         _ => {}
//!     }
//! }
//!
//! let mut commands = SerialCommand::new();
//! commands.add_command("LED", led).unwrap();
//!
//! // Bytes usually come from `poll`ing a UART; `input` takes them directly.
//! assert_eq!(commands.input(b"LED on\r\n"), 1);
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices talking to a modem or serial peripheral
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

mod log;

/// Line assembly, tokenization and command dispatch.
///
/// Contains the [`SerialCommand`] dispatcher together with its building
/// blocks: the bounded line buffer, the command table, the per-line token
/// session and the configuration.
pub mod command;

/// Byte sources the dispatcher reads from.
///
/// Defines the non-blocking [`ByteSource`](stream::ByteSource) capability
/// and implements it for slices and `heapless` queues.
pub mod stream;

pub use command::{
    CommandFn, Config, DefaultFn, Dispatch, Error, OutputFn, SerialCommand, Tokens,
};

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/device/src/lib.rs
//!
//! # Overview
//!
//! `device` holds the small motor abstraction ctrlkit control loops drive.
//! A [`Motor`] accepts raw voltage commands in millivolts; its
//! [`VoltageControllerOutput`] accepts normalized setpoints in `[-1, 1]` and
//! scales them onto the motor's ±[`MAX_MILLIVOLTS`] range.
//!
//! # Invariants
//!
//! - Each motor has at most one [`VoltageControllerOutput`]. Repeated calls
//!   to [`Motor::voltage_output`] return the same [`Arc`](std::sync::Arc).
//! - The output holds only a weak reference to its motor, so it never keeps a
//!   dropped motor alive; setting a value after the motor is gone does
//!   nothing.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use device::{ControllerOutput, Motor, OutputSlot};
//!
//! #[derive(Default)]
//! struct Probe {
//!     millivolts: AtomicI32,
//!     output: OutputSlot,
//! }
//!
//! impl Motor for Probe {
//!     fn move_voltage(&self, millivolts: i32) {
//!         self.millivolts.store(millivolts, Ordering::SeqCst);
//!     }
//!
//!     fn output_slot(&self) -> &OutputSlot {
//!         &self.output
//!     }
//! }
//!
//! let motor = Arc::new(Probe::default());
//! let output = motor.voltage_output();
//! assert!(Arc::ptr_eq(&output, &motor.voltage_output()));
//!
//! output.controller_set(0.5);
//! assert_eq!(motor.millivolts.load(Ordering::SeqCst), 6000);
//! ```

mod motor;
mod output;

pub use motor::{Motor, OutputSlot};
pub use output::{ControllerOutput, MAX_MILLIVOLTS, VoltageControllerOutput, setpoint_to_millivolts};

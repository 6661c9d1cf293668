//! crates/device/src/motor.rs
//! The motor trait and the per-motor slot holding its voltage output.

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use crate::output::VoltageControllerOutput;

/// A device driven by raw voltage commands.
pub trait Motor: Send + Sync + 'static {
    /// Commands the motor with `millivolts`, positive or negative.
    fn move_voltage(&self, millivolts: i32);

    /// Returns the slot that memoizes this motor's voltage output.
    fn output_slot(&self) -> &OutputSlot;

    /// Returns this motor's voltage output, creating it on first use.
    ///
    /// Every call on the same motor returns the identical object.
    fn voltage_output(self: &Arc<Self>) -> Arc<VoltageControllerOutput>
    where
        Self: Sized,
    {
        self.output_slot().get_or_init(|| {
            let motor: Weak<Self> = Arc::downgrade(self);
            tracing::trace!(target: "ctrlkit::device", "creating voltage output");
            Arc::new(VoltageControllerOutput::new(motor))
        })
    }
}

/// Lazily filled storage for a motor's [`VoltageControllerOutput`].
///
/// Embed one in each [`Motor`] implementation and return it from
/// [`Motor::output_slot`].
#[derive(Default)]
pub struct OutputSlot {
    output: OnceLock<Arc<VoltageControllerOutput>>,
}

impl OutputSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            output: OnceLock::new(),
        }
    }

    /// Reports whether the output has been created.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.output.get().is_some()
    }

    pub(crate) fn get_or_init(
        &self,
        create: impl FnOnce() -> Arc<VoltageControllerOutput>,
    ) -> Arc<VoltageControllerOutput> {
        Arc::clone(self.output.get_or_init(create))
    }
}

impl fmt::Debug for OutputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSlot")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

//! Ready-line interrupt gate
//!
//! In interrupt mode the transport masks ready-line interrupt delivery
//! for the duration of every bus transaction and whenever the inbound
//! queue is full. This trait is that mask.

/// Gate controlling delivery of the ready-line interrupt
///
/// The underlying interrupt must be level-triggered on the active (low)
/// level of the ready line: if the line is already low when [`enable`]
/// is called, the handler must still fire. An edge-triggered setup would
/// miss a peripheral that asserted ready while the gate was closed.
///
/// [`enable`]: IrqGate::enable
pub trait IrqGate {
    /// Allow ready-line interrupt delivery
    fn enable(&mut self);

    /// Suppress ready-line interrupt delivery
    ///
    /// A ready line going (or staying) low while disabled is latched by
    /// the level trigger and serviced on the next [`enable`].
    ///
    /// [`enable`]: IrqGate::enable
    fn disable(&mut self);
}

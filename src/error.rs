use thiserror::Error;

use crate::{DATACENTER_MAX, MACHINE_MAX};

/// Errors returned when constructing a generator or generating an id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The datacenter id is outside of `0..=31`.
    #[error("invalid datacenter id {0}, expected a value in 0..={max}", max = DATACENTER_MAX)]
    InvalidDatacenterId(i64),

    /// The machine id is outside of `0..=31`.
    #[error("invalid machine id {0}, expected a value in 0..={max}", max = MACHINE_MAX)]
    InvalidMachineId(i64),

    /// The clock reported a millisecond earlier than the one of the last generated id.
    ///
    /// The generator refuses to create an id in this case. Its state is left untouched, so it
    /// can be used again once the clock has caught up.
    #[error("clock moved backwards from {last}ms to {now}ms, refusing to generate id")]
    ClockMovedBackward { last: i64, now: i64 },
}

//! A crate for generating unique, time-ordered 64-bit snowflake ids.
//!
//! Every id carries the millisecond it was created at, the datacenter and machine identity of the
//! generator that created it and a per-millisecond sequence number. As long as every generator in
//! a deployment is configured with a distinct `(datacenter_id, machine_id)` pair, no two
//! generators will ever produce the same id.
//!
//! # Layout
//!
//! ```text
//! | 1 bit: unused | 41 bits: timestamp | 5 bits: datacenter | 5 bits: machine | 12 bits: sequence |
//! ```
//!
//! The timestamp counts milliseconds since [`EPOCH_MILLIS`], 2022-11-22T00:00:00+08:00
//! (2022-11-21T16:00:00Z). The layout and epoch are fixed; changing either would break
//! compatibility with ids created by other generators.
//!
//! # Generating snowflake ids
//!
//! [`Generator`] can be used to generate unique snowflake ids. Additionally [`sync::Generator`]
//! can be shared between multiple threads (requires the `sync` feature, enabled by default).
//!
//! # Example
//! ```
//! use flakegen::{Generator, Snowflake};
//!
//! let mut generator = Generator::new(1, 2)?;
//! let id: i64 = generator.generate()?;
//!
//! assert_eq!(id.datacenter_id(), 1);
//! assert_eq!(id.machine_id(), 2);
//! # Ok::<(), flakegen::Error>(())
//! ```
//!
//! # Custom snowflake ids
//!
//! [`Generator::generate`] can also produce custom id types implementing [`Snowflake`]:
//! ```
//! use flakegen::{Generator, Snowflake};
//!
//! struct UserId(i64);
//!
//! impl Snowflake for UserId {
//!     fn from_parts(timestamp: u64, datacenter_id: u64, machine_id: u64, sequence: u64) -> Self {
//!         Self(i64::from_parts(timestamp, datacenter_id, machine_id, sequence))
//!     }
//!
//!     fn timestamp(&self) -> u64 {
//!         self.0.timestamp()
//!     }
//!
//!     fn datacenter_id(&self) -> u64 {
//!         self.0.datacenter_id()
//!     }
//!
//!     fn machine_id(&self) -> u64 {
//!         self.0.machine_id()
//!     }
//!
//!     fn sequence(&self) -> u64 {
//!         self.0.sequence()
//!     }
//! }
//!
//! let mut generator = Generator::new(0, 0)?;
//! let id: UserId = generator.generate()?;
//! # Ok::<(), flakegen::Error>(())
//! ```
//!
//! # Errors
//!
//! Generators refuse to produce an id when the clock moved backwards since the last id was
//! generated and return [`Error::ClockMovedBackward`] instead. The generator is not affected by
//! this and can be used again once the clock has caught up.
//!
//! # Feature flags
//! `sync`: Enables the [`sync`] module. Enabled by default.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "sync")]
#[cfg_attr(docsrs, doc(cfg(feature = "sync")))]
pub mod sync;

mod builder;
mod error;
#[cfg(feature = "sync")]
mod loom;
mod time;

use std::cmp::Ordering;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub use builder::Builder;
pub use error::Error;
pub use time::{Clock, SystemClock};

/// The epoch of all generated ids, 2022-11-22T00:00:00+08:00 (2022-11-21T16:00:00Z) in
/// milliseconds since the Unix epoch.
pub const EPOCH_MILLIS: i64 = 1_669_046_400_000;

const MACHINE_SHIFT: u32 = 12;
const DATACENTER_SHIFT: u32 = 17;
const TIMESTAMP_SHIFT: u32 = 22;

const BITMASK_TIMESTAMP: u64 = 0x7FFF_FFFF_FFC0_0000;
const BITMASK_DATACENTER: u64 = 0x3E_0000;
const BITMASK_MACHINE: u64 = 0x1_F000;
const BITMASK_SEQUENCE: u64 = 0xFFF;

pub(crate) const DATACENTER_MAX: i64 = 2_i64.pow(5) - 1;
pub(crate) const MACHINE_MAX: i64 = 2_i64.pow(5) - 1;
const SEQUENCE_MAX: u16 = 2_u16.pow(12) - 1;

/// A type that can be used as a snowflake id.
pub trait Snowflake {
    /// Creates a new value from the snowflake parts. Every part is truncated to the width of its
    /// field.
    fn from_parts(timestamp: u64, datacenter_id: u64, machine_id: u64, sequence: u64) -> Self;

    /// Returns the timestamp component of the snowflake, in milliseconds since [`EPOCH_MILLIS`].
    fn timestamp(&self) -> u64;

    /// Returns the datacenter component of the snowflake.
    fn datacenter_id(&self) -> u64;

    /// Returns the machine component of the snowflake.
    fn machine_id(&self) -> u64;

    /// Returns the sequence component of the snowflake.
    fn sequence(&self) -> u64;

    /// Returns the time the snowflake was created at in milliseconds since the Unix epoch.
    ///
    /// # Examples
    ///
    /// ```
    /// use flakegen::{Snowflake, EPOCH_MILLIS};
    ///
    /// let id = i64::from_parts(5000, 1, 2, 0);
    /// assert_eq!(id.unix_millis(), EPOCH_MILLIS + 5000);
    /// ```
    #[inline]
    fn unix_millis(&self) -> i64 {
        EPOCH_MILLIS + self.timestamp() as i64
    }
}

impl Snowflake for u64 {
    fn from_parts(timestamp: u64, datacenter_id: u64, machine_id: u64, sequence: u64) -> Self {
        let timestamp = (timestamp << TIMESTAMP_SHIFT) & BITMASK_TIMESTAMP;
        let datacenter_id = (datacenter_id << DATACENTER_SHIFT) & BITMASK_DATACENTER;
        let machine_id = (machine_id << MACHINE_SHIFT) & BITMASK_MACHINE;
        timestamp | datacenter_id | machine_id | (sequence & BITMASK_SEQUENCE)
    }

    #[inline]
    fn timestamp(&self) -> u64 {
        (self & BITMASK_TIMESTAMP) >> TIMESTAMP_SHIFT
    }

    #[inline]
    fn datacenter_id(&self) -> u64 {
        (self & BITMASK_DATACENTER) >> DATACENTER_SHIFT
    }

    #[inline]
    fn machine_id(&self) -> u64 {
        (self & BITMASK_MACHINE) >> MACHINE_SHIFT
    }

    #[inline]
    fn sequence(&self) -> u64 {
        self & BITMASK_SEQUENCE
    }
}

// The sign bit is never set, so converting between i64 and u64 is lossless.
impl Snowflake for i64 {
    #[inline]
    fn from_parts(timestamp: u64, datacenter_id: u64, machine_id: u64, sequence: u64) -> Self {
        u64::from_parts(timestamp, datacenter_id, machine_id, sequence) as i64
    }

    #[inline]
    fn timestamp(&self) -> u64 {
        (*self as u64).timestamp()
    }

    #[inline]
    fn datacenter_id(&self) -> u64 {
        (*self as u64).datacenter_id()
    }

    #[inline]
    fn machine_id(&self) -> u64 {
        (*self as u64).machine_id()
    }

    #[inline]
    fn sequence(&self) -> u64 {
        (*self as u64).sequence()
    }
}

/// The datacenter and machine identity of a generator.
///
/// Both components must be in the range `0..=31`. Generators with distinct identities never
/// produce the same id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    datacenter_id: u8,
    machine_id: u8,
}

impl Identity {
    /// Creates a new `Identity` from the given datacenter and machine ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDatacenterId`] if `datacenter_id` is not in `0..=31`, otherwise
    /// [`Error::InvalidMachineId`] if `machine_id` is not in `0..=31`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flakegen::{Error, Identity};
    ///
    /// assert!(Identity::new(31, 0).is_ok());
    /// assert_eq!(Identity::new(32, 0), Err(Error::InvalidDatacenterId(32)));
    /// assert_eq!(Identity::new(0, -1), Err(Error::InvalidMachineId(-1)));
    /// ```
    pub const fn new(datacenter_id: i64, machine_id: i64) -> Result<Self, Error> {
        if datacenter_id < 0 || datacenter_id > DATACENTER_MAX {
            return Err(Error::InvalidDatacenterId(datacenter_id));
        }

        if machine_id < 0 || machine_id > MACHINE_MAX {
            return Err(Error::InvalidMachineId(machine_id));
        }

        Ok(Self {
            datacenter_id: datacenter_id as u8,
            machine_id: machine_id as u8,
        })
    }

    /// Returns the datacenter component of this `Identity`.
    #[inline]
    pub const fn datacenter_id(&self) -> u8 {
        self.datacenter_id
    }

    /// Returns the machine component of this `Identity`.
    #[inline]
    pub const fn machine_id(&self) -> u8 {
        self.machine_id
    }
}

/// Sequencing state shared by all generators: the millisecond of the last generated id and the
/// sequence number used within it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct State {
    last_millis: i64,
    sequence: u16,
}

impl State {
    /// A state in which no id has been generated yet.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            last_millis: -1,
            sequence: 0,
        }
    }

    /// Moves to the millisecond and sequence of the next id. `self` is only updated if this
    /// returns `Ok`.
    ///
    /// When the sequence space of the current millisecond is exhausted this polls `clock`,
    /// calling `tick_wait` in between, until the clock moves past the current millisecond.
    pub(crate) fn advance<C, F>(&mut self, clock: &C, tick_wait: F) -> Result<Self, Error>
    where
        C: Clock + ?Sized,
        F: Fn(),
    {
        let now = clock.now_millis();

        let next = match now.cmp(&self.last_millis) {
            Ordering::Less => return Err(self.clock_moved_backward(now)),
            Ordering::Greater => Self {
                last_millis: now,
                sequence: 0,
            },
            Ordering::Equal if self.sequence < SEQUENCE_MAX => Self {
                last_millis: now,
                sequence: self.sequence + 1,
            },
            Ordering::Equal => {
                tracing::trace!(millis = now, "sequence exhausted, waiting for next millisecond");

                Self {
                    last_millis: self.wait_until_next_millisecond(clock, tick_wait)?,
                    sequence: 0,
                }
            }
        };

        *self = next;
        Ok(next)
    }

    fn wait_until_next_millisecond<C, F>(&self, clock: &C, tick_wait: F) -> Result<i64, Error>
    where
        C: Clock + ?Sized,
        F: Fn(),
    {
        loop {
            let now = clock.now_millis();
            match now.cmp(&self.last_millis) {
                Ordering::Greater => return Ok(now),
                Ordering::Less => return Err(self.clock_moved_backward(now)),
                Ordering::Equal => tick_wait(),
            }
        }
    }

    fn clock_moved_backward(&self, now: i64) -> Error {
        tracing::warn!(
            last = self.last_millis,
            now,
            "clock moved backwards, refusing to generate id"
        );

        Error::ClockMovedBackward {
            last: self.last_millis,
            now,
        }
    }

    #[inline]
    pub(crate) fn to_snowflake<T>(self, identity: Identity) -> T
    where
        T: Snowflake,
    {
        T::from_parts(
            self.last_millis.wrapping_sub(EPOCH_MILLIS) as u64,
            identity.datacenter_id as u64,
            identity.machine_id as u64,
            self.sequence as u64,
        )
    }
}

/// Returns the epoch of all generated ids as a [`SystemTime`].
#[inline]
pub(crate) fn epoch() -> SystemTime {
    UNIX_EPOCH + Duration::from_millis(EPOCH_MILLIS as u64)
}

/// A generator for unique snowflake ids.
///
/// `Generator` requires a `&mut` reference to generate ids. Use [`sync::Generator`] to share a
/// generator between threads.
///
/// # Cloning
///
/// Cloning a `Generator` copies its identity and its sequencing state. The clone and the original
/// are independent and will generate the same ids when used within the same millisecond. Never
/// use both for ids that have to be unique; give the clone a different identity instead.
#[derive(Clone, Debug)]
pub struct Generator<C = SystemClock> {
    identity: Identity,
    state: State,
    clock: C,
}

impl Generator {
    /// Creates a new `Generator` using the given `datacenter_id` and `machine_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDatacenterId`] or [`Error::InvalidMachineId`] if either id is not
    /// in `0..=31`.
    pub fn new(datacenter_id: i64, machine_id: i64) -> Result<Self, Error> {
        Self::with_clock(datacenter_id, machine_id, SystemClock)
    }

    /// Creates a new `Builder` used to configure a `Generator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flakegen::Generator;
    ///
    /// let generator: Generator = Generator::builder().datacenter_id(3).machine_id(4).build()?;
    ///
    /// assert_eq!(generator.datacenter_id(), 3);
    /// assert_eq!(generator.machine_id(), 4);
    /// # Ok::<(), flakegen::Error>(())
    /// ```
    #[inline]
    pub const fn builder() -> Builder {
        Builder::new()
    }
}

impl<C> Generator<C>
where
    C: Clock,
{
    /// Creates a new `Generator` reading the time from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDatacenterId`] or [`Error::InvalidMachineId`] if either id is not
    /// in `0..=31`.
    pub fn with_clock(datacenter_id: i64, machine_id: i64, clock: C) -> Result<Self, Error> {
        let identity = Identity::new(datacenter_id, machine_id)?;
        Ok(Self::with_identity(identity, clock))
    }

    /// Creates a new `Generator` from an already validated `identity`.
    #[inline]
    pub const fn with_identity(identity: Identity, clock: C) -> Self {
        Self {
            identity,
            state: State::new(),
            clock,
        }
    }

    /// Returns the [`Identity`] of this `Generator`.
    #[inline]
    pub fn identity(&self) -> Identity {
        self.identity
    }

    /// Returns the configured datacenter component of this `Generator`.
    #[inline]
    pub fn datacenter_id(&self) -> u8 {
        self.identity.datacenter_id()
    }

    /// Returns the configured machine component of this `Generator`.
    #[inline]
    pub fn machine_id(&self) -> u8 {
        self.identity.machine_id()
    }

    /// Returns the epoch of the generated ids, 2022-11-22T00:00:00+08:00 (2022-11-21T16:00:00Z).
    #[inline]
    pub fn epoch(&self) -> SystemTime {
        epoch()
    }

    /// Returns the [`Clock`] this `Generator` reads the time from.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Generate a new unique snowflake id.
    ///
    /// If all 4096 ids of the current millisecond have been generated already this blocks until
    /// the clock reaches the next millisecond.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockMovedBackward`] if the clock is behind the millisecond of the last
    /// generated id.
    pub fn generate<T>(&mut self) -> Result<T, Error>
    where
        T: Snowflake,
    {
        let state = self.state.advance(&self.clock, std::hint::spin_loop)?;
        Ok(state.to_snowflake(self.identity))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::{Duration, UNIX_EPOCH};

    use super::{Generator, Identity, Snowflake, State, EPOCH_MILLIS, SEQUENCE_MAX};
    use crate::time::testing::{ManualClock, StepClock};
    use crate::Error;

    #[test]
    fn test_identity_bounds() {
        for id in -3..=34 {
            let valid = (0..=31).contains(&id);

            assert_eq!(Identity::new(id, 0).is_ok(), valid, "datacenter id {}", id);
            assert_eq!(Identity::new(0, id).is_ok(), valid, "machine id {}", id);

            if !valid {
                assert_eq!(Identity::new(id, 0), Err(Error::InvalidDatacenterId(id)));
                assert_eq!(Identity::new(0, id), Err(Error::InvalidMachineId(id)));
            }
        }

        // The datacenter id is validated first.
        assert_eq!(Identity::new(40, 40), Err(Error::InvalidDatacenterId(40)));
    }

    #[test]
    fn test_generate_parts() {
        let clock = ManualClock::new(EPOCH_MILLIS + 5000);
        let mut generator = Generator::with_clock(1, 2, &clock).unwrap();

        let id: i64 = generator.generate().unwrap();
        assert_eq!(id, 20_971_659_264);
        assert_eq!(id.timestamp(), 5000);
        assert_eq!(id.datacenter_id(), 1);
        assert_eq!(id.machine_id(), 2);
        assert_eq!(id.sequence(), 0);
        assert_eq!(id.unix_millis(), EPOCH_MILLIS + 5000);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(EPOCH_MILLIS, 1_669_046_400_000);

        let generator = Generator::new(0, 0).unwrap();
        assert_eq!(
            generator.epoch(),
            UNIX_EPOCH + Duration::from_millis(1_669_046_400_000)
        );
        // 2022-11-21T16:00:00Z
        assert_eq!(
            generator.epoch().duration_since(UNIX_EPOCH).unwrap().as_secs(),
            1_669_046_400
        );
    }

    #[test]
    fn test_generate_absolute_time() {
        let clock = ManualClock::new(1_669_046_405_000);
        let mut generator = Generator::with_clock(1, 2, &clock).unwrap();

        let id: i64 = generator.generate().unwrap();
        assert_eq!(id, 20_971_659_264);
        assert_eq!(id.unix_millis(), 1_669_046_405_000);
    }

    #[test]
    fn test_generator_clone() {
        let clock = ManualClock::new(EPOCH_MILLIS + 3);
        let mut orig = Generator::with_clock(5, 5, &clock).unwrap();
        let _: i64 = orig.generate().unwrap();

        let mut cloned = orig.clone();
        assert_eq!(cloned.identity(), orig.identity());

        // The state is copied, not shared.
        let a: i64 = orig.generate().unwrap();
        let b: i64 = cloned.generate().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.sequence(), 1);
    }

    #[test]
    fn test_generate_same_millisecond() {
        let clock = ManualClock::new(EPOCH_MILLIS + 42);
        let mut generator = Generator::with_clock(7, 9, &clock).unwrap();

        let first: i64 = generator.generate().unwrap();
        let second: i64 = generator.generate().unwrap();
        assert_eq!(first.timestamp(), second.timestamp());
        assert_eq!(second.sequence(), first.sequence() + 1);
        assert_eq!(second, first + 1);

        clock.advance(1);
        let third: i64 = generator.generate().unwrap();
        assert_eq!(third.timestamp(), 43);
        assert_eq!(third.sequence(), 0);
    }

    #[test]
    fn test_generate_sequence_exhausted() {
        let start = EPOCH_MILLIS + 7;
        let clock = StepClock::new(start, 4097, start + 1);
        let mut generator = Generator::with_clock(0, 0, &clock).unwrap();

        for sequence in 0..4096 {
            let id: i64 = generator.generate().unwrap();
            assert_eq!(id.timestamp(), 7);
            assert_eq!(id.sequence(), sequence);
        }

        let id: i64 = generator.generate().unwrap();
        assert_eq!(id.timestamp(), 8);
        assert_eq!(id.sequence(), 0);
        // The 4097th call read the exhausted millisecond once more before moving on.
        assert_eq!(clock.reads(), 4098);
    }

    #[test]
    fn test_wait_until_next_millisecond() {
        let clock = ManualClock::new(100);
        let ticks = Cell::new(0);

        let mut state = State {
            last_millis: 100,
            sequence: SEQUENCE_MAX,
        };

        let next = state
            .advance(&clock, || {
                ticks.set(ticks.get() + 1);
                if ticks.get() == 3 {
                    clock.advance(1);
                }
            })
            .unwrap();

        assert_eq!(ticks.get(), 3);
        assert_eq!(
            next,
            State {
                last_millis: 101,
                sequence: 0
            }
        );
        assert_eq!(state, next);
    }

    #[test]
    fn test_clock_moved_backward_while_waiting() {
        let clock = ManualClock::new(100);
        let mut state = State {
            last_millis: 100,
            sequence: SEQUENCE_MAX,
        };

        let res = state.advance(&clock, || clock.set(99));
        assert_eq!(res, Err(Error::ClockMovedBackward { last: 100, now: 99 }));
        assert_eq!(state.last_millis, 100);
        assert_eq!(state.sequence, SEQUENCE_MAX);
    }

    #[test]
    fn test_clock_moved_backward() {
        let clock = ManualClock::new(EPOCH_MILLIS + 100);
        let mut generator = Generator::with_clock(1, 1, &clock).unwrap();

        let first: i64 = generator.generate().unwrap();

        clock.set(EPOCH_MILLIS + 99);
        assert_eq!(
            generator.generate::<i64>(),
            Err(Error::ClockMovedBackward {
                last: EPOCH_MILLIS + 100,
                now: EPOCH_MILLIS + 99,
            })
        );

        // The failed call must not have touched the sequence.
        clock.set(EPOCH_MILLIS + 100);
        let second: i64 = generator.generate().unwrap();
        assert_eq!(second.timestamp(), 100);
        assert_eq!(second.sequence(), 1);
        assert!(second > first);

        clock.set(EPOCH_MILLIS + 101);
        let third: i64 = generator.generate().unwrap();
        assert_eq!(third.timestamp(), 101);
        assert_eq!(third.sequence(), 0);
    }

    #[test]
    fn test_generate() {
        const DATACENTER: u64 = 3;
        const MACHINE: u64 = 17;

        let mut last_id = None;
        let mut generator = Generator::new(DATACENTER as i64, MACHINE as i64).unwrap();

        for _ in 0..10_000 {
            let id: i64 = generator.generate().unwrap();
            assert_eq!(id.datacenter_id(), DATACENTER);
            assert_eq!(id.machine_id(), MACHINE);
            assert!(id > 0);
            assert!(
                last_id < Some(id),
                "expected {:?} to be less than {:?}",
                last_id,
                Some(id)
            );
            last_id = Some(id);
        }
    }

    #[test]
    fn test_generate_no_duplicates() {
        let mut generator = Generator::new(0, 0).unwrap();
        let mut ids: Vec<u64> = Vec::with_capacity(10_000);

        for _ in 0..ids.capacity() {
            ids.push(generator.generate().unwrap());
        }

        ids.sort_unstable();
        for pair in ids.windows(2) {
            if pair[0] == pair[1] {
                panic!(
                    "Found duplicate id {} (SEQ {}, TS {})",
                    pair[0],
                    pair[0].sequence(),
                    pair[0].timestamp()
                );
            }
        }
    }

    #[test]
    fn test_distinct_identities() {
        let clock = ManualClock::new(EPOCH_MILLIS + 1);
        let mut a = Generator::with_clock(0, 1, &clock).unwrap();
        let mut b = Generator::with_clock(1, 0, &clock).unwrap();

        let id_a: i64 = a.generate().unwrap();
        let id_b: i64 = b.generate().unwrap();
        assert_ne!(id_a, id_b);
        assert_eq!(id_a.timestamp(), id_b.timestamp());
        assert_eq!(id_a.sequence(), id_b.sequence());
    }

    #[test]
    fn test_snowflake_u64() {
        let id = 20_971_659_264_u64;
        assert_eq!(id.timestamp(), 5000);
        assert_eq!(id.datacenter_id(), 1);
        assert_eq!(id.machine_id(), 2);
        assert_eq!(id.sequence(), 0);

        let id = 8_388_607_u64;
        assert_eq!(id.timestamp(), 1);
        assert_eq!(id.datacenter_id(), 31);
        assert_eq!(id.machine_id(), 31);
        assert_eq!(id.sequence(), 4095);
        assert_eq!(u64::from_parts(1, 31, 31, 4095), id);
    }

    #[test]
    fn test_snowflake_i64() {
        let id = 20_971_659_264_i64;
        assert_eq!(id.timestamp(), 5000);
        assert_eq!(id.datacenter_id(), 1);
        assert_eq!(id.machine_id(), 2);
        assert_eq!(id.sequence(), 0);

        // Oversized parts never spill into the neighbouring fields or the sign bit.
        let id = i64::from_parts(u64::MAX, 32, 33, 4096);
        assert!(id > 0);
        assert_eq!(id.timestamp(), 2_u64.pow(41) - 1);
        assert_eq!(id.datacenter_id(), 0);
        assert_eq!(id.machine_id(), 1);
        assert_eq!(id.sequence(), 0);
    }
}

//! Thread-safe Snowflake Generator
//!
//! This module provides [`Generator`] which can safely be shared between threads. Its sequencing
//! state lives behind a mutex, so concurrent callers are served one at a time and never receive
//! overlapping ids. [`Generator::with_identity`] is const, allowing to use it in a `static`
//! context.
//!
//! # Example
//! ```
//! use flakegen::sync::Generator;
//! use flakegen::{Error, Identity, SystemClock};
//!
//! const IDENTITY: Identity = match Identity::new(1, 2) {
//!     Ok(identity) => identity,
//!     Err(_) => panic!("invalid generator identity"),
//! };
//!
//! static GENERATOR: Generator = Generator::with_identity(IDENTITY, SystemClock);
//!
//! fn generate_id() -> Result<i64, Error> {
//!     GENERATOR.generate()
//! }
//! # generate_id().unwrap();
//! ```

use std::sync::PoisonError;
use std::time::SystemTime;

use crate::builder::Builder;
use crate::loom::Mutex;
use crate::time::{Clock, SystemClock};
use crate::{epoch, Error, Identity, Snowflake, State};

/// A generator for unique snowflake ids. Since [`generate`] accepts a `&self` reference this can
/// be used in a `static` context or shared through an [`Arc`].
///
/// The whole generation, from reading the clock to assembling the id, happens while holding the
/// generator's lock. When the sequence space of a millisecond is exhausted the lock stays held
/// until the clock reaches the next millisecond, blocking all other callers.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
///
/// use flakegen::sync::Generator;
///
/// let generator = Arc::new(Generator::new(0, 1)?);
///
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let generator = generator.clone();
///         thread::spawn(move || generator.generate::<i64>())
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap().is_ok());
/// }
/// # Ok::<(), flakegen::Error>(())
/// ```
///
/// [`generate`]: Self::generate
/// [`Arc`]: std::sync::Arc
#[derive(Debug)]
pub struct Generator<C = SystemClock> {
    identity: Identity,
    state: Mutex<State>,
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
    /// # use flakegen::sync::Generator;
    /// #
    /// let generator: Generator = Generator::builder().datacenter_id(9).machine_id(10).build()?;
    ///
    /// assert_eq!(generator.datacenter_id(), 9);
    /// assert_eq!(generator.machine_id(), 10);
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
    #[cfg(not(loom))]
    #[inline]
    pub const fn with_identity(identity: Identity, clock: C) -> Self {
        Self {
            identity,
            state: Mutex::new(State::new()),
            clock,
        }
    }

    // loom's Mutex is not const, we have to choose a different code path
    // than the regular `with_identity`.
    #[cfg(loom)]
    #[inline]
    pub fn with_identity(identity: Identity, clock: C) -> Self {
        Self {
            identity,
            state: Mutex::new(State::new()),
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
    /// # Errors
    ///
    /// Returns [`Error::ClockMovedBackward`] if the clock is behind the millisecond of the last
    /// generated id.
    pub fn generate<T>(&self) -> Result<T, Error>
    where
        T: Snowflake,
    {
        self.generate_with(std::hint::spin_loop)
    }

    fn generate_with<T, F>(&self, tick_wait: F) -> Result<T, Error>
    where
        T: Snowflake,
        F: Fn(),
    {
        // The state is only written once all checks passed, a panic while holding
        // the lock cannot leave it half updated.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let next = state.advance(&self.clock, tick_wait)?;
        Ok(next.to_snowflake(self.identity))
    }
}

impl<C> TryFrom<Builder<C>> for Generator<C>
where
    C: Clock,
{
    type Error = Error;

    fn try_from(builder: Builder<C>) -> Result<Self, Self::Error> {
        let identity = builder.identity()?;
        Ok(Self::with_identity(identity, builder.clock))
    }
}

use crate::time::{Clock, SystemClock};
use crate::{Error, Generator, Identity};

/// A builder for a snowflake Generator. This builder can be used for both [`Generator`] and
/// [`sync::Generator`].
///
/// The identity is validated when the generator is built.
///
/// [`Generator`]: crate::Generator
/// [`sync::Generator`]: crate::sync::Generator
#[derive(Copy, Clone, Debug)]
pub struct Builder<C = SystemClock> {
    pub(crate) datacenter_id: i64,
    pub(crate) machine_id: i64,
    pub(crate) clock: C,
}

impl Builder {
    /// Creates a new `Builder` with both the datacenter and machine id set to `0`, reading the
    /// time from the [`SystemClock`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use flakegen::{Builder, Generator};
    /// #
    /// let generator: Generator = Builder::new().build()?;
    ///
    /// assert_eq!(generator.datacenter_id(), 0);
    /// assert_eq!(generator.machine_id(), 0);
    /// # Ok::<(), flakegen::Error>(())
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            datacenter_id: 0,
            machine_id: 0,
            clock: SystemClock,
        }
    }
}

impl Default for Builder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Builder<C> {
    /// Sets the `datacenter_id` value of the `Builder`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flakegen::{Builder, Error, Generator};
    /// #
    /// let generator: Generator = Builder::new().datacenter_id(12).build()?;
    /// assert_eq!(generator.datacenter_id(), 12);
    ///
    /// // Only values in 0..=31 are accepted.
    /// let res = Builder::new().datacenter_id(32).build::<Generator>();
    /// assert_eq!(res.unwrap_err(), Error::InvalidDatacenterId(32));
    /// # Ok::<(), flakegen::Error>(())
    /// ```
    #[inline]
    pub const fn datacenter_id(mut self, datacenter_id: i64) -> Self {
        self.datacenter_id = datacenter_id;
        self
    }

    /// Sets the `machine_id` value of the `Builder`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use flakegen::{Builder, Error, Generator};
    /// #
    /// let generator: Generator = Builder::new().machine_id(5).build()?;
    /// assert_eq!(generator.machine_id(), 5);
    ///
    /// let res = Builder::new().machine_id(-1).build::<Generator>();
    /// assert_eq!(res.unwrap_err(), Error::InvalidMachineId(-1));
    /// # Ok::<(), flakegen::Error>(())
    /// ```
    #[inline]
    pub const fn machine_id(mut self, machine_id: i64) -> Self {
        self.machine_id = machine_id;
        self
    }

    /// Sets the [`Clock`] the generator reads the current time from.
    #[inline]
    pub fn clock<T>(self, clock: T) -> Builder<T>
    where
        T: Clock,
    {
        Builder {
            datacenter_id: self.datacenter_id,
            machine_id: self.machine_id,
            clock,
        }
    }

    /// Validates the configured ids and returns them as an [`Identity`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDatacenterId`] or [`Error::InvalidMachineId`] if either id is not
    /// in `0..=31`.
    #[inline]
    pub fn identity(&self) -> Result<Identity, Error> {
        Identity::new(self.datacenter_id, self.machine_id)
    }

    /// Consumes this `Builder`, returning the constructed generator. This function works with both
    /// [`Generator`] and [`sync::Generator`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDatacenterId`] or [`Error::InvalidMachineId`] if either id is not
    /// in `0..=31`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flakegen::{Builder, Generator};
    ///
    /// let mut generator = Builder::new().build::<Generator>()?;
    ///
    /// let id: i64 = generator.generate()?;
    /// # Ok::<(), flakegen::Error>(())
    /// ```
    ///
    /// A [`sync::Generator`] can be constructed in the same way:
    ///
    /// ```
    /// use flakegen::Builder;
    /// use flakegen::sync::Generator;
    ///
    /// let generator = Builder::new().build::<Generator>()?;
    ///
    /// let id: i64 = generator.generate()?;
    /// # Ok::<(), flakegen::Error>(())
    /// ```
    ///
    /// [`Generator`]: crate::Generator
    /// [`sync::Generator`]: crate::sync::Generator
    #[inline]
    pub fn build<T>(self) -> Result<T, Error>
    where
        T: TryFrom<Self, Error = Error>,
    {
        T::try_from(self)
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

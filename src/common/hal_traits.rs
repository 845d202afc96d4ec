// src/common/hal_traits.rs

use core::cell::RefCell;

/// Mutual exclusion around a sensor instance's bus handle.
///
/// One guard per instance. Every bus transaction issued on behalf of
/// the instance happens inside [`BusMutex::lock`], so two raw reads on
/// the same instance can never interleave. This guard is distinct from
/// the bus-segment lock the I2C handle itself takes during a
/// transaction (see [`crate::transport`]); the two are independent and
/// never nested by this crate.
///
/// Which primitive backs the guard depends on the host, so the driver
/// is generic over this trait rather than hard-wiring one.
pub trait BusMutex {
    /// The bus handle protected by this guard.
    type Bus;

    /// Wraps a bus handle in a fresh, unheld guard.
    fn create(bus: Self::Bus) -> Self;

    /// Runs `f` with exclusive access to the bus handle.
    ///
    /// Acquisition blocks the calling context until the guard is free.
    /// Release happens when `f` returns, whether it succeeded or not.
    fn lock<R>(&self, f: impl FnOnce(&mut Self::Bus) -> R) -> R;

    /// Dissolves the guard and hands the bus handle back.
    fn free(self) -> Self::Bus;
}

/// A [`BusMutex`] for hosts with a single calling context.
///
/// Provides the locking API without any real exclusion. Re-entering
/// [`BusMutex::lock`] panics (`RefCell` rules), which on a
/// single-context host can only mean a host bug.
pub struct NoopMutex<T> {
    bus: RefCell<T>,
}

impl<T> BusMutex for NoopMutex<T> {
    type Bus = T;

    fn create(bus: T) -> Self {
        NoopMutex {
            bus: RefCell::new(bus),
        }
    }

    fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.bus.borrow_mut())
    }

    fn free(self) -> T {
        self.bus.into_inner()
    }
}

/// Blocking, sleeping guard for threaded hosts.
///
/// A query that panics while holding the lock must not take the whole
/// instance down with it, so poisoning is absorbed rather than
/// propagated.
#[cfg(any(test, feature = "std"))]
impl<T> BusMutex for std::sync::Mutex<T> {
    type Bus = T;

    fn create(bus: T) -> Self {
        std::sync::Mutex::new(bus)
    }

    fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut bus = std::sync::Mutex::lock(self)
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut bus)
    }

    fn free(self) -> T {
        self.into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Guard for bare-metal hosts that share one instance between thread
/// mode and interrupt handlers.
///
/// Acquisition enters a critical section for the span of the
/// transaction; there is nothing to sleep on for such hosts.
#[cfg(feature = "critical-section")]
pub struct CriticalSectionMutex<T> {
    bus: critical_section::Mutex<RefCell<T>>,
}

#[cfg(feature = "critical-section")]
impl<T> BusMutex for CriticalSectionMutex<T> {
    type Bus = T;

    fn create(bus: T) -> Self {
        CriticalSectionMutex {
            bus: critical_section::Mutex::new(RefCell::new(bus)),
        }
    }

    fn lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| f(&mut self.bus.borrow_ref_mut(cs)))
    }

    fn free(self) -> T {
        self.bus.into_inner().into_inner()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_mutex_round_trips_the_bus_handle() {
        let mutex: NoopMutex<u32> = BusMutex::create(7);
        assert_eq!(
            mutex.lock(|bus| {
                *bus += 1;
                *bus
            }),
            8
        );
        assert_eq!(mutex.free(), 8);
    }

    #[test]
    fn std_mutex_survives_a_panicked_lock_holder() {
        let mutex: std::sync::Mutex<u32> = BusMutex::create(3);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            BusMutex::lock(&mutex, |_bus: &mut u32| panic!("transaction blew up"))
        }));
        assert!(result.is_err());

        // The poisoned lock must still serve later queries.
        assert_eq!(BusMutex::lock(&mutex, |bus| *bus), 3);
        assert_eq!(BusMutex::free(mutex), 3);
    }
}

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::{Condvar, Mutex};

use crate::core::errors::RenderError;

enum CallState<V> {
    Pending,
    Done(V),
    Abandoned,
}

struct Call<V> {
    state: Mutex<CallState<V>>,
    done: Condvar,
    waiters: Mutex<usize>,
}

impl<V: Clone> Call<V> {
    fn new() -> Self {
        Self {
            state: Mutex::new(CallState::Pending),
            done: Condvar::new(),
            waiters: Mutex::new(0),
        }
    }

    fn publish(&self, state: CallState<V>) {
        *self.state.lock() = state;
        self.done.notify_all();
    }

    fn wait(&self) -> Result<V, RenderError> {
        let mut state = self.state.lock();

        loop {
            match &*state {
                CallState::Done(value) => return Ok(value.clone()),
                CallState::Abandoned => return Err(RenderError::Abandoned),
                CallState::Pending => {}
            }
            self.done.wait(&mut state);
        }
    }
}

/// Collapses concurrent calls for the same key into one.
///
/// The first caller for a key runs the work; callers arriving while it runs
/// block and receive a clone of its result. Once the leader finishes the key
/// is forgotten, so later calls run the work again.
pub struct SingleFlight<K, V> {
    calls: Mutex<HashMap<K, Arc<Call<V>>>>,
}

impl<K, V> SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Runs `work` unless a call for `key` is already in flight, in which
    /// case waits for that call instead.
    ///
    /// If the leader unwinds, its waiters get [`RenderError::Abandoned`] and
    /// the panic continues on the leader's thread.
    pub fn run<F>(&self, key: &K, work: F) -> Result<V, RenderError>
    where
        F: FnOnce() -> V,
    {
        let (call, leader) = {
            let mut calls = self.calls.lock();
            match calls.get(key) {
                Some(call) => {
                    *call.waiters.lock() += 1;
                    (Arc::clone(call), false)
                }
                None => {
                    let call = Arc::new(Call::new());
                    calls.insert(key.clone(), Arc::clone(&call));
                    (call, true)
                }
            }
        };

        if !leader {
            return call.wait();
        }

        let mut guard = LeaderGuard {
            flight: self,
            key,
            call: &call,
            finished: false,
        };
        let value = work();
        guard.finish(value.clone());

        Ok(value)
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.calls.lock().len()
    }

    /// Callers currently blocked on `key`'s leader.
    #[must_use]
    pub fn waiters(&self, key: &K) -> usize {
        self.calls
            .lock()
            .get(key)
            .map_or(0, |call| *call.waiters.lock())
    }
}

impl<K, V> Default for SingleFlight<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

struct LeaderGuard<'a, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    flight: &'a SingleFlight<K, V>,
    key: &'a K,
    call: &'a Call<V>,
    finished: bool,
}

impl<K, V> LeaderGuard<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn finish(&mut self, value: V) {
        self.finished = true;
        self.call.publish(CallState::Done(value));
    }
}

impl<K, V> Drop for LeaderGuard<'_, K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn drop(&mut self) {
        self.flight.calls.lock().remove(self.key);

        if !self.finished {
            self.call.publish(CallState::Abandoned);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    fn wait_for_waiters(flight: &SingleFlight<u32, u32>, key: u32, expected: usize) {
        while flight.waiters(&key) < expected {
            thread::yield_now();
        }
    }

    #[test]
    fn test_single_caller_runs_work() {
        let flight: SingleFlight<u32, u32> = SingleFlight::new();

        assert_eq!(flight.run(&1, || 42), Ok(42));
        assert_eq!(flight.in_flight(), 0);
    }

    #[test]
    fn test_sequential_calls_each_run() {
        let flight: SingleFlight<u32, u32> = SingleFlight::new();
        let runs = AtomicUsize::new(0);

        for _ in 0..3 {
            flight
                .run(&7, || runs.fetch_add(1, Ordering::SeqCst) as u32)
                .unwrap();
        }

        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_concurrent_callers_share_one_run() {
        const CALLERS: usize = 8;
        let flight: SingleFlight<u32, u32> = SingleFlight::new();
        let runs = AtomicUsize::new(0);

        let results: Vec<Result<u32, RenderError>> = thread::scope(|scope| {
            let leader = scope.spawn(|| {
                flight.run(&5, || {
                    runs.fetch_add(1, Ordering::SeqCst);
                    wait_for_waiters(&flight, 5, CALLERS - 1);
                    99
                })
            });

            // make sure the leader has registered before the others arrive
            while flight.in_flight() == 0 {
                thread::yield_now();
            }

            let followers: Vec<_> = (1..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        flight.run(&5, || {
                            runs.fetch_add(1, Ordering::SeqCst);
                            0
                        })
                    })
                })
                .collect();

            std::iter::once(leader)
                .chain(followers)
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|result| *result == Ok(99)));
        assert_eq!(flight.in_flight(), 0);
    }

    #[test]
    fn test_distinct_keys_do_not_wait_on_each_other() {
        let flight: SingleFlight<u32, u32> = SingleFlight::new();

        let inner = flight.run(&1, || flight.run(&2, || 2).unwrap() + 1);

        assert_eq!(inner, Ok(3));
    }

    #[test]
    fn test_panicking_leader_abandons_waiters() {
        let flight: SingleFlight<u32, u32> = SingleFlight::new();

        let (leader, follower) = thread::scope(|scope| {
            let leader = scope.spawn(|| {
                catch_unwind(AssertUnwindSafe(|| {
                    flight.run(&3, || {
                        wait_for_waiters(&flight, 3, 1);
                        panic!("render blew up");
                    })
                }))
            });

            while flight.in_flight() == 0 {
                thread::yield_now();
            }
            let follower = scope.spawn(|| flight.run(&3, || 0));

            (leader.join().unwrap(), follower.join().unwrap())
        });

        assert!(leader.is_err());
        assert_eq!(follower, Err(RenderError::Abandoned));
        assert_eq!(flight.in_flight(), 0);
        assert_eq!(flight.run(&3, || 11), Ok(11));
    }
}

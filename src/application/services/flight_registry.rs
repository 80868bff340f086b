use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use futures::future::{BoxFuture, FutureExt, Shared};

/// Per-key single-flight execution.
///
/// Overlapping calls for the same key share one running computation instead
/// of racing duplicate downloads and analyses against the same cache file.
/// The entry expires once the computation completes, so a later identical
/// request starts fresh.
pub struct FlightRegistry<T, E> {
    in_flight: Mutex<HashMap<String, Shared<BoxFuture<'static, Result<T, E>>>>>,
}

impl<T, E> FlightRegistry<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub async fn run<F>(&self, key: &str, work: F) -> Result<T, E>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let flight = {
            let mut in_flight = self.in_flight.lock().unwrap();
            match in_flight.get(key) {
                Some(flight) => flight.clone(),
                None => {
                    let flight = work.boxed().shared();
                    in_flight.insert(key.to_string(), flight.clone());
                    flight
                }
            }
        };

        let result = flight.clone().await;

        // Expire the entry, but only if it is still ours: a later flight for
        // the same key must not be evicted by a straggling waiter.
        let mut in_flight = self.in_flight.lock().unwrap();
        if in_flight
            .get(key)
            .is_some_and(|current| current.ptr_eq(&flight))
        {
            in_flight.remove(key);
        }

        result
    }

    #[cfg(test)]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.lock().unwrap().len()
    }
}

impl<T, E> Default for FlightRegistry<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

//! Greet Use Case
//!
//! Produces sequentially numbered greetings. Owns the request counter for
//! the lifetime of the service instance, so the numbering invariant does not
//! depend on process-wide globals.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::models::greeting::{Greeting, DEFAULT_NAME};

/// Use case for producing a numbered greeting
///
/// The counter starts at zero and the first greeting carries id 1. The
/// fetch-and-increment is atomic, so concurrent callers never observe the
/// same id and no increment is lost.
pub struct GreetUseCase {
    counter: AtomicU64,
}

impl GreetUseCase {
    /// Create a new GreetUseCase with a fresh counter
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Execute the use case
    ///
    /// An absent or empty `name` falls back to `"World"`; any other string
    /// is substituted verbatim. This operation cannot fail.
    pub fn execute(&self, name: Option<&str>) -> Greeting {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => DEFAULT_NAME,
        };

        let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(greeting_id = id, name = %name, "Producing greeting");

        Greeting::new(id, name)
    }
}

impl Default for GreetUseCase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn should_number_greetings_sequentially() {
        let use_case = GreetUseCase::new();

        let first = use_case.execute(None);
        assert_eq!(first.id(), 1);
        assert_eq!(first.content(), "Hello, World!");

        let second = use_case.execute(Some("Ada"));
        assert_eq!(second.id(), 2);
        assert_eq!(second.content(), "Hello, Ada!");
    }

    #[test]
    fn should_default_to_world_when_name_is_empty() {
        let use_case = GreetUseCase::new();
        let greeting = use_case.execute(Some(""));
        assert_eq!(greeting.content(), "Hello, World!");
    }

    #[test]
    fn should_substitute_any_name_verbatim() {
        let use_case = GreetUseCase::new();
        assert_eq!(use_case.execute(Some(" ")).content(), "Hello,  !");
        assert_eq!(use_case.execute(Some("世界")).content(), "Hello, 世界!");
        assert_eq!(
            use_case.execute(Some("<script>")).content(),
            "Hello, <script>!"
        );
    }

    #[test]
    fn should_assign_unique_ids_under_concurrency() {
        let use_case = Arc::new(GreetUseCase::new());
        let threads = 8;
        let per_thread = 250;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let use_case = use_case.clone();
                std::thread::spawn(move || {
                    (0..per_thread)
                        .map(|_| use_case.execute(Some("Ada")).id())
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate greeting id {id}");
            }
        }

        assert_eq!(ids.len(), threads * per_thread);
        assert_eq!(ids.iter().max(), Some(&((threads * per_thread) as u64)));
        assert_eq!(ids.iter().min(), Some(&1));
    }

    #[test]
    fn should_observe_strictly_increasing_ids_per_caller() {
        let use_case = GreetUseCase::new();
        let mut last = 0;
        for _ in 0..100 {
            let id = use_case.execute(None).id();
            assert!(id > last);
            last = id;
        }
    }
}

//! One resolver and one snapshot shared by many threads.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::thread;

use stencil_application::variable_resolver::{ResolutionError, VariableResolver};
use stencil_domain::VariableSnapshot;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_resolver_and_snapshot_are_thread_safe() {
    assert_send_sync::<VariableResolver>();
    assert_send_sync::<VariableSnapshot>();
}

#[test]
fn test_parallel_calls_do_not_share_history() {
    let snapshot: Arc<VariableSnapshot> = Arc::new(
        [
            ("a", "{{b}}"),
            ("b", "{{c}}"),
            ("c", "leaf"),
            ("x", "{{y}}"),
            ("y", "{{x}}"),
        ]
        .into_iter()
        .collect(),
    );
    let resolver = VariableResolver::default();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let snapshot = Arc::clone(&snapshot);
            thread::spawn(move || {
                let mut results = Vec::new();
                for _ in 0..200 {
                    let text = if i % 2 == 0 { "{{a}}" } else { "{{x}}" };
                    results.push(resolver.resolve(text, &snapshot));
                }
                (i, results)
            })
        })
        .collect();

    for handle in handles {
        let (i, results) = handle.join().unwrap();
        for result in results {
            if i % 2 == 0 {
                assert_eq!(result, Ok("leaf".to_string()));
            } else {
                assert_eq!(result, Err(ResolutionError::circular("x → y → x")));
            }
        }
    }
}

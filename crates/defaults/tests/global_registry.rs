//! Integration test: process-wide registry
//!
//! Kept to a single test so nothing else in this binary initialises the
//! global before the "not yet initialised" check runs.

use std::thread;

use momentum_core::Timeframe;
use momentum_defaults::global;

#[test]
fn test_init_then_concurrent_reads() {
    let _ = env_logger::try_init();

    assert!(global::get().is_none());

    let registry = global::init().unwrap();
    let again = global::init().unwrap();
    assert!(std::ptr::eq(registry, again));
    assert!(std::ptr::eq(registry, global::get().unwrap()));

    let expected = registry.strategy_defaults(Timeframe::M5, Some("EURUSD")).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let registry = global::get().unwrap();
                    (0..100)
                        .map(|_| registry.strategy_defaults(Timeframe::M5, Some("EURUSD")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for params in handle.join().unwrap() {
                assert_eq!(params, expected);
            }
        }
    });
}

//! Property-based tests for the parallel run.

use proptest::prelude::*;

use picalc_core::series::estimate_pi;
use picalc_orchestration::orchestrator::{analyze_results, run_parallel};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Every worker gets its own slot and the same value as a direct call.
    #[test]
    fn each_worker_matches_direct_call(workers in 1usize..6, n in 0u64..5_000) {
        let report = run_parallel(workers, n).unwrap();
        prop_assert_eq!(report.results.len(), workers);
        let expected = estimate_pi(n).to_bits();
        for (i, r) in report.results.iter().enumerate() {
            prop_assert_eq!(r.worker, i);
            prop_assert_eq!(r.estimate.to_bits(), expected);
        }
        prop_assert!(analyze_results(&report.results).is_ok());
    }
}

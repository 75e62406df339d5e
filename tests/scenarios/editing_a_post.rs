//! Scenario: Editing a post's figures
//!
//! Journey: An author keeps chart generators next to a post and a shared
//! styling helper used by all of them.
//!
//! Steps:
//! 1. First build runs everything
//! 2. Rebuild with no edits does nothing
//! 3. Editing the shared helper rebuilds every chart
//! 4. A broken chart stops the build and nothing is recorded
//! 5. Fixing it rebuilds what was pending
//!
//! Success Criteria:
//! - Generators only rerun when something they depend on changed
//! - A failed build never marks work as done

use crate::common::*;

#[test]
fn scenario_editing_a_post_end_to_end() {
    let env = TestEnv::with_two_generators();

    // Step 1
    let result = env.run(&["run"]);
    assert!(result.is_success(), "Step 1: {}", result.combined_output());
    assert_eq!(env.run_count(OUT_ALPHA), 1);
    assert_eq!(env.run_count(OUT_BETA), 1);

    // Step 2
    let result = env.run(&["run"]);
    assert!(result.is_success());
    assert_eq!(env.run_count(OUT_ALPHA), 1);
    assert_eq!(env.run_count(OUT_BETA), 1);

    // Step 3
    env.write_project_file(SHARED, "palette=solarized\n");
    let result = env.run(&["run"]);
    assert!(result.is_success(), "Step 3: {}", result.combined_output());
    assert_eq!(env.run_count(OUT_ALPHA), 2);
    assert_eq!(env.run_count(OUT_BETA), 2);
    let recorded = env.read_state().unwrap();

    // Step 4
    env.write_project_file(SHARED, "palette=dracula\n");
    env.write_project_file(GEN_BETA, FAILING_GENERATOR);
    let result = env.run(&["run"]);
    assert!(!result.is_success());
    assert_eq!(env.run_count(OUT_ALPHA), 3);
    assert_eq!(env.read_state().unwrap(), recorded);

    // Step 5
    env.write_project_file(GEN_BETA, COUNTING_GENERATOR);
    let result = env.run(&["run"]);
    assert!(result.is_success(), "Step 5: {}", result.combined_output());
    assert_eq!(env.run_count(OUT_ALPHA), 4);
    assert_eq!(env.run_count(OUT_BETA), 3);
    assert_ne!(env.read_state().unwrap(), recorded);
}

//! Scenario: Calling regen from a site build
//!
//! Journey: A static site build links the library and calls `regen::run`
//! before rendering pages.
//!
//! Steps:
//! 1. First call runs every generator and reports them
//! 2. Second call reports the tree as up to date
//! 3. A project without generators is rejected
//!
//! Success Criteria:
//! - The library entry point reads regen.toml and records state like the CLI

use crate::common::*;

#[test]
fn scenario_embedding_in_a_build() {
    let env = TestEnv::with_two_generators();
    let root = env.project_root.path();

    // Step 1
    let report = regen::run(root).expect("first run");
    assert_eq!(report.executed, vec![GEN_ALPHA.to_string(), GEN_BETA.to_string()]);
    assert!(!report.dry_run);
    assert_eq!(env.run_count(OUT_ALPHA), 1);
    assert!(env.read_state().is_some());

    // Step 2
    let report = regen::run(root).expect("second run");
    assert!(report.is_up_to_date());
    assert_eq!(report.skipped_count(), 2);
    assert_eq!(env.run_count(OUT_ALPHA), 1);
}

#[test]
fn scenario_embedding_without_generators_is_rejected() {
    let env = TestEnv::new();
    env.write_project_file(SHARED, SHARED_HELPER);

    // Step 3
    let err = regen::run(env.project_root.path()).unwrap_err();
    assert!(matches!(err, regen::RegenError::NoGenerators { .. }));
    assert!(env.read_state().is_none());
}

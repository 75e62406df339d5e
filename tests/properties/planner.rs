//! Property tests for invalidation planning.

use std::path::Path;

use proptest::prelude::*;

use regen::domain::entities::FingerprintSet;
use regen::domain::services::{plan, SelectionReason};
use regen::domain::value_objects::{ContentHash, Unit, UnitKind};

/// (is_generator, current content, previous content if recorded)
type UnitCase = (bool, u8, Option<u8>);

fn unit_cases() -> impl Strategy<Value = Vec<UnitCase>> {
    proptest::collection::vec(
        (any::<bool>(), 0u8..4, proptest::option::of(0u8..4)),
        1..12,
    )
    .prop_filter("needs a generator", |cases| cases.iter().any(|s| s.0))
}

fn build(cases: &[UnitCase]) -> (Vec<Unit>, FingerprintSet, FingerprintSet) {
    let root = Path::new("/p");
    let mut units = Vec::new();
    let mut previous = FingerprintSet::new();
    let mut current = FingerprintSet::new();

    for (i, (is_generator, now, before)) in cases.iter().enumerate() {
        let (name, kind) = if *is_generator {
            (format!("u{i}.gen.py"), UnitKind::Generator)
        } else {
            (format!("u{i}.py"), UnitKind::Shared)
        };
        let unit = Unit::new(format!("/p/d/__generators__/{name}"), root, kind);
        current.set(unit.key(), ContentHash::from_bytes(&[*now]));
        if let Some(before) = before {
            previous.set(unit.key(), ContentHash::from_bytes(&[*before]));
        }
        units.push(unit);
    }

    (units, previous, current)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rerun_all holds exactly when some shared unit differs
    /// from its recorded fingerprint, and then every generator is selected.
    #[test]
    fn property_shared_change_selects_all(cases in unit_cases()) {
        let (units, previous, current) = build(&cases);
        let shared_changed = cases
            .iter()
            .any(|(is_gen, now, before)| !is_gen && *before != Some(*now));

        let plan = plan(&units, &previous, &current).unwrap();

        prop_assert_eq!(plan.rerun_all(), shared_changed);
        if shared_changed {
            prop_assert_eq!(plan.selected_count(), plan.total_generators());
        }
    }

    /// PROPERTY: without a shared change, a generator is selected iff its
    /// own fingerprint changed or was never recorded.
    #[test]
    fn property_isolated_selection(cases in unit_cases()) {
        let (units, previous, current) = build(&cases);

        let plan = plan(&units, &previous, &current).unwrap();

        if !plan.rerun_all() {
            for (unit, (is_gen, now, before)) in units.iter().zip(&cases) {
                if *is_gen {
                    prop_assert_eq!(plan.is_selected(unit.key()), *before != Some(*now));
                }
            }
        }
    }

    /// PROPERTY: selection preserves discovery order, partitions the
    /// generators, and gives own changes precedence over shared ones.
    #[test]
    fn property_selection_order_and_reasons(cases in unit_cases()) {
        let (units, previous, current) = build(&cases);

        let plan = plan(&units, &previous, &current).unwrap();

        let generators: Vec<&str> = units
            .iter()
            .filter(|u| u.is_generator())
            .map(|u| u.key())
            .collect();
        let selected: Vec<&str> = plan.selected().iter().map(|p| p.unit.key()).collect();
        let mut expected_order = generators.clone();
        expected_order.retain(|k| selected.contains(k));
        prop_assert_eq!(&selected, &expected_order);
        prop_assert_eq!(selected.len() + plan.skipped().len(), generators.len());

        for planned in plan.selected() {
            let key = planned.unit.key();
            let own_change = previous.get(key) != current.get(key);
            match planned.reason {
                SelectionReason::New => prop_assert!(previous.get(key).is_none()),
                SelectionReason::Changed => prop_assert!(own_change),
                SelectionReason::SharedChanged => {
                    prop_assert!(!own_change);
                    prop_assert!(plan.rerun_all());
                }
                SelectionReason::Forced => prop_assert!(false, "not forced"),
            }
        }
    }

    /// PROPERTY: planning against an identical previous state selects nothing.
    #[test]
    fn property_stable_tree_selects_nothing(cases in unit_cases()) {
        let (units, _previous, current) = build(&cases);

        let plan = plan(&units, &current, &current).unwrap();

        prop_assert!(plan.is_empty());
        prop_assert!(!plan.rerun_all());
    }
}

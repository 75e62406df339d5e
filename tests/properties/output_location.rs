//! Property tests for output location derivation.

use std::path::PathBuf;

use proptest::prelude::*;

use regen::domain::value_objects::Layout;

const MARKER: &str = "__generators__";
const OUTPUT: &str = "__generated__";

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap(),
        1 => Just(MARKER.to_string()),
    ]
}

fn segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=max)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: only the last marker is replaced; everything after it
    /// except the file name is kept.
    #[test]
    fn property_last_marker_is_replaced(
        prefix in segments(5),
        suffix in proptest::collection::vec(
            proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap(),
            0..=3,
        ),
        file in "[a-z]{1,8}\\.gen\\.py",
    ) {
        let layout = Layout::default();
        let mut path = PathBuf::from("/project");
        path.extend(&prefix);
        path.push(MARKER);
        path.extend(&suffix);
        path.push(&file);

        let out = layout.output_location(&path).unwrap();

        let mut expected = PathBuf::from("/project");
        expected.extend(&prefix);
        expected.push(OUTPUT);
        expected.extend(&suffix);
        prop_assert_eq!(out, expected);
    }

    /// PROPERTY: a path without a marker directory has no output location.
    #[test]
    fn property_no_marker_no_location(
        dirs in proptest::collection::vec(
            proptest::string::string_regex("[a-z0-9]{1,10}").unwrap(),
            0..=5,
        ),
        file in "[a-z_]{1,16}\\.gen\\.py",
    ) {
        let layout = Layout::default();
        let mut path = PathBuf::from("/project");
        path.extend(&dirs);
        path.push(&file);

        prop_assert_eq!(layout.output_location(&path), None);
    }

    /// PROPERTY: the output location never contains the generators marker
    /// after the replaced position and always has the same depth.
    #[test]
    fn property_depth_is_preserved(
        prefix in segments(4),
        suffix in segments(3),
    ) {
        let layout = Layout::default();
        let mut path = PathBuf::from("/project");
        path.extend(&prefix);
        path.push(MARKER);
        path.extend(&suffix);
        path.push("x.gen.py");

        let out = layout.output_location(&path).unwrap();

        prop_assert_eq!(
            out.components().count(),
            path.components().count() - 1
        );
        let after_output = out
            .components()
            .rev()
            .take_while(|c| c.as_os_str() != OUTPUT)
            .any(|c| c.as_os_str() == MARKER);
        prop_assert!(!after_output);
    }
}

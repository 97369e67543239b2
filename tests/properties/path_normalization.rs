//! Property tests for lexical path normalization.

use std::path::{Component, Path, PathBuf};

use proptest::prelude::*;

use ngtw::config::paths::{absolutize, normalize};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => proptest::string::string_regex("[a-z]{1,6}").unwrap(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn relative_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=8).prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalizing twice changes nothing.
    #[test]
    fn property_normalize_is_idempotent(path in relative_path()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    /// PROPERTY: absolute results carry no `.` or `..` components.
    #[test]
    fn property_absolutize_is_clean(path in relative_path()) {
        let abs = absolutize(Path::new("/proj/app"), &path);

        prop_assert!(abs.is_absolute());
        prop_assert!(abs
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
    }

    /// PROPERTY: a path and its `./`-prefixed spelling resolve to the same file.
    #[test]
    fn property_curdir_prefix_is_transparent(path in relative_path()) {
        let dotted = Path::new(".").join(&path);
        prop_assert_eq!(
            absolutize(Path::new("/proj"), &dotted),
            absolutize(Path::new("/proj"), &path)
        );
    }
}

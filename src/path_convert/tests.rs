//! Property-based tests for path conversion
//!
//! Generated paths cover every drive letter in both cases and an arbitrary
//! number of segments.

#[cfg(test)]
mod tests {
    use crate::path_convert::{
        classify, convert, convert_auto, to_double_windows, to_linux, to_windows,
        ConversionTarget, PathForm,
    };
    use proptest::prelude::*;

    /// Generate a drive letter
    fn arb_drive() -> impl Strategy<Value = char> {
        prop::char::ranges(vec!['a'..='z', 'A'..='Z'].into())
    }

    /// Generate a path segment without separators or colons
    fn arb_segment() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 _.-]{1,12}"
    }

    fn arb_segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(arb_segment(), 0..8)
    }

    /// `/mnt/<d>/seg/seg`
    fn arb_linux_path() -> impl Strategy<Value = String> {
        (arb_drive(), arb_segments()).prop_map(|(drive, segments)| {
            let mut path = format!("/mnt/{}", drive);
            for segment in segments {
                path.push('/');
                path.push_str(&segment);
            }
            path
        })
    }

    /// `<d>:\seg\seg`
    fn arb_windows_path() -> impl Strategy<Value = String> {
        (arb_drive(), arb_segments()).prop_map(|(drive, segments)| {
            let mut path = format!("{}:", drive);
            for segment in segments {
                path.push('\\');
                path.push_str(&segment);
            }
            path
        })
    }

    /// `<d>:\\seg\\seg`, at least one segment so the doubled separator is present
    fn arb_double_windows_path() -> impl Strategy<Value = String> {
        (arb_drive(), prop::collection::vec(arb_segment(), 1..8)).prop_map(|(drive, segments)| {
            format!("{}:\\\\{}", drive, segments.join("\\\\"))
        })
    }

    /// Single-step Windows -> Linux rewrite, used only to check the composed route
    fn direct_windows_to_linux(path: &str) -> String {
        let mut chars = path.chars();
        let drive = chars.next().unwrap();
        let rest: String = chars.skip(1).collect();
        format!("/mnt/{}{}", drive, rest.replace('\\', "/"))
    }

    fn drive_of(path: &str) -> char {
        match path.strip_prefix("/mnt/") {
            Some(rest) => rest.chars().next().unwrap(),
            None => path.chars().next().unwrap(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Every generated path is classified as the form it was built in
        #[test]
        fn prop_classification(
            drive in arb_drive(),
            segments in arb_segments(),
        ) {
            let lower = drive.to_ascii_lowercase();
            let suffix: String = segments.iter().map(|s| format!("\\{}", s)).collect();
            let posix_suffix: String = segments.iter().map(|s| format!("/{}", s)).collect();

            prop_assert_eq!(classify(&format!("/mnt/{}{}", lower, posix_suffix)).unwrap(), PathForm::Linux);
            prop_assert_eq!(classify(&format!("{}:{}", drive, suffix)).unwrap(), PathForm::Windows);
            prop_assert_eq!(
                classify(&format!("{}:\\\\{}", drive, segments.join("\\\\"))).unwrap(),
                PathForm::DoubleWindows
            );
        }

        /// Linux -> Windows -> Linux reproduces the input
        #[test]
        fn prop_linux_round_trip(path in arb_linux_path()) {
            let windows = to_windows(&path).unwrap();
            prop_assert_eq!(classify(&windows).unwrap(), PathForm::Windows);
            prop_assert_eq!(to_linux(&windows).unwrap(), path);
        }

        /// Windows -> DoubleWindows -> Windows reproduces the input
        #[test]
        fn prop_windows_round_trip(path in arb_windows_path()) {
            let double = to_double_windows(&path).unwrap();
            prop_assert_eq!(to_windows(&double).unwrap(), path);
        }

        /// Linux -> Windows -> DoubleWindows -> Linux reproduces the input
        #[test]
        fn prop_three_form_cycle(path in arb_linux_path()) {
            let windows = convert(&path, ConversionTarget::Windows).unwrap();
            let double = convert(&windows, ConversionTarget::DoubleWindows).unwrap();
            let linux = convert(&double, ConversionTarget::Linux).unwrap();
            prop_assert_eq!(linux, path);
        }

        /// DoubleWindows -> Windows -> DoubleWindows reproduces the input
        #[test]
        fn prop_double_windows_round_trip(path in arb_double_windows_path()) {
            let windows = to_windows(&path).unwrap();
            prop_assert_eq!(to_double_windows(&windows).unwrap(), path);
        }

        /// Converting to the input's own form returns it unchanged
        #[test]
        fn prop_identity(
            linux in arb_linux_path(),
            windows in arb_windows_path(),
            double in arb_double_windows_path(),
        ) {
            for path in [linux, windows, double] {
                let form = classify(&path).unwrap();
                prop_assert_eq!(convert(&path, ConversionTarget::from(form)).unwrap(), path);
            }
        }

        /// For Windows input, Linux and Auto targets agree with each other and with
        /// a single-step rewrite
        #[test]
        fn prop_windows_to_linux_equivalence(path in arb_windows_path()) {
            let via_linux = convert(&path, ConversionTarget::Linux).unwrap();
            let via_auto = convert_auto(&path).unwrap();
            prop_assert_eq!(&via_linux, &via_auto);
            prop_assert_eq!(via_linux, direct_windows_to_linux(&path));
        }

        /// Same as above with doubled separators already inside the path
        #[test]
        fn prop_windows_to_linux_equivalence_with_double_separators(
            drive in arb_drive(),
            segments in prop::collection::vec(arb_segment(), 1..6),
        ) {
            let path = format!("{}:\\{}", drive, segments.join("\\\\"));
            prop_assert_eq!(classify(&path).unwrap(), PathForm::Windows);
            let via_linux = convert(&path, ConversionTarget::Linux).unwrap();
            prop_assert_eq!(&via_linux, &convert_auto(&path).unwrap());
            prop_assert_eq!(via_linux, direct_windows_to_linux(&path));
        }

        /// The drive letter survives every conversion with its case
        #[test]
        fn prop_drive_letter_preserved(path in arb_linux_path()) {
            let drive = drive_of(&path);
            for target in ConversionTarget::ALL {
                let output = convert(&path, target).unwrap();
                prop_assert_eq!(drive_of(&output), drive);
            }
        }

        /// Auto always lands on the other side of the boundary
        #[test]
        fn prop_auto_switches_side(
            linux in arb_linux_path(),
            windows in arb_windows_path(),
            double in arb_double_windows_path(),
        ) {
            prop_assert_eq!(classify(&convert_auto(&linux).unwrap()).unwrap(), PathForm::Windows);
            prop_assert_eq!(classify(&convert_auto(&windows).unwrap()).unwrap(), PathForm::Linux);
            prop_assert_eq!(classify(&convert_auto(&double).unwrap()).unwrap(), PathForm::Linux);
        }

        /// Anything that does not start with a drive letter or /mnt/<letter> is rejected
        #[test]
        fn prop_relative_paths_rejected(path in "[a-z0-9_.-]{2,10}(/[a-z0-9_.-]{1,8}){0,4}") {
            prop_assume!(path.as_bytes().get(1) != Some(&b':'));
            prop_assert!(classify(&path).is_err());
        }
    }
}

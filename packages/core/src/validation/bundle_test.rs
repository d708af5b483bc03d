//! Tests for validator bundles

#[cfg(test)]
mod tests {
    use crate::validation::{MessageLevel, ModelValidator, SimpleValidator, ValidatorBundle};

    fn fixed(valid: bool) -> SimpleValidator<()> {
        SimpleValidator::new("Fixed outcome.", MessageLevel::Error, move |_| valid)
    }

    fn bundle_with(all_must_be_true: bool, outcomes: &[bool]) -> ValidatorBundle<()> {
        let mut bundle = ValidatorBundle::new("Bundle message.", MessageLevel::Error, all_must_be_true);
        for outcome in outcomes {
            bundle.add_validator(fixed(*outcome));
        }
        bundle
    }

    #[test]
    fn test_all_must_be_true_with_failing_child() {
        let bundle = bundle_with(true, &[true, false, true]);
        assert!(!bundle.is_valid(&()));
    }

    #[test]
    fn test_all_must_be_true_with_all_passing() {
        let bundle = bundle_with(true, &[true, true]);
        assert!(bundle.is_valid(&()));
    }

    #[test]
    fn test_empty_and_bundle_is_vacuously_valid() {
        let bundle = bundle_with(true, &[]);
        assert!(bundle.is_valid(&()));
    }

    #[test]
    fn test_or_bundle_with_no_passing_child() {
        let bundle = bundle_with(false, &[false, false]);
        assert!(!bundle.is_valid(&()));
    }

    #[test]
    fn test_or_bundle_with_one_passing_child() {
        let bundle = bundle_with(false, &[false, true]);
        assert!(bundle.is_valid(&()));
    }

    #[test]
    fn test_empty_or_bundle_is_invalid() {
        let bundle = bundle_with(false, &[]);
        assert!(!bundle.is_valid(&()));
    }

    #[test]
    fn test_header_message_reflects_combinator() {
        assert_eq!(
            bundle_with(true, &[]).message(),
            "All of the following are true:"
        );
        assert_eq!(
            bundle_with(false, &[]).message(),
            "One of the following is true:"
        );
    }

    #[test]
    fn test_bundle_message_and_accessors() {
        let bundle = bundle_with(true, &[true, false]);
        assert_eq!(bundle.bundle_message(), "Bundle message.");
        assert!(bundle.is_all_must_be_true());
        assert_eq!(bundle.validators().len(), 2);
        assert!(bundle.as_bundle().is_some());
    }

    #[test]
    fn test_add_all_validators() {
        let mut bundle: ValidatorBundle<()> =
            ValidatorBundle::new("Combined.", MessageLevel::Warning, false);
        bundle.add_all_validators(vec![Box::new(fixed(false)), Box::new(fixed(true))]);

        assert_eq!(bundle.validators().len(), 2);
        assert!(bundle.is_valid(&()));
    }

    #[test]
    fn test_unset_level_bundle() {
        let bundle: ValidatorBundle<()> = ValidatorBundle::new("No level.", None, true);
        assert_eq!(bundle.level(), None);
    }
}

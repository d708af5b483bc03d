//! Tests for leaf validators

#[cfg(test)]
mod tests {
    use crate::validation::{MessageLevel, ModelValidator, SimpleValidator};

    #[test]
    fn test_predicate_receives_model() {
        let validator: SimpleValidator<i32> =
            SimpleValidator::new("Is positive.", MessageLevel::Error, |value: &i32| *value > 0);

        assert!(validator.is_valid(&1));
        assert!(!validator.is_valid(&-1));
    }

    #[test]
    fn test_message_and_level() {
        let validator: SimpleValidator<()> =
            SimpleValidator::new("Checked.", MessageLevel::Warning, |_| true);

        assert_eq!(validator.message(), "Checked.");
        assert_eq!(validator.level(), Some(MessageLevel::Warning));
    }

    #[test]
    fn test_unset_level() {
        let validator: SimpleValidator<()> = SimpleValidator::new("No level.", None, |_| false);
        assert_eq!(validator.level(), None);
    }

    #[test]
    fn test_leaf_is_not_a_bundle() {
        let validator: SimpleValidator<()> =
            SimpleValidator::new("Leaf.", MessageLevel::Info, |_| true);
        assert!(validator.as_bundle().is_none());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(MessageLevel::Error.to_string(), "error");
        assert_eq!(MessageLevel::Warning.to_string(), "warning");
        assert_eq!(MessageLevel::Info.to_string(), "info");
    }
}

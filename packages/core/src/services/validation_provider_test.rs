//! Tests for the validation provider

#[cfg(test)]
mod tests {
    use crate::models::{ResourceModel, TypeDescriptor};
    use crate::repository::{MemoryRepository, Resource, RESOURCE_TYPE_DEFAULT};
    use crate::services::ValidationProvider;
    use crate::validation::{
        MessageLevel, ModelValidationService, SimpleValidator, ValidationMessages,
        ValidatorBundle, ValidatorSet,
    };
    use serde_json::json;
    use std::rc::Rc;

    struct SampleModel {
        resource: Resource,
        messages: ValidationMessages,
    }

    #[derive(Default)]
    struct SampleValidationService {
        validators: ValidatorSet<SampleModel>,
    }

    fn fixed(
        valid: bool,
        message: &str,
        level: impl Into<Option<MessageLevel>>,
    ) -> SimpleValidator<SampleModel> {
        SimpleValidator::new(message, level, move |_: &SampleModel| valid)
    }

    impl ModelValidationService<SampleModel> for SampleValidationService {
        fn validator_set(&self) -> &ValidatorSet<SampleModel> {
            &self.validators
        }

        fn validator_set_mut(&mut self) -> &mut ValidatorSet<SampleModel> {
            &mut self.validators
        }

        fn register_basic_validators(&mut self, _model: &SampleModel) {
            let set = &mut self.validators;
            set.add_basic_validator(fixed(false, "This is an error validator.", MessageLevel::Error));
            set.add_basic_validator(fixed(false, "This is a warning validator.", MessageLevel::Warning));
            set.add_basic_validator(fixed(false, "This is an info validator.", MessageLevel::Info));
            set.add_basic_validator(fixed(false, "Validator with unset level.", None));
            set.add_basic_validator(fixed(true, "Always true.", MessageLevel::Error));

            let mut all_pass =
                ValidatorBundle::new("All must be true bundle.", MessageLevel::Error, true);
            all_pass.add_validator(fixed(true, "True child.", MessageLevel::Error));
            set.add_basic_validator(all_pass);

            let mut one_false = ValidatorBundle::new(
                "All must be true bundle with a false validator.",
                MessageLevel::Error,
                true,
            );
            one_false.add_validator(fixed(false, "False child.", MessageLevel::Error));
            one_false.add_validator(fixed(true, "True child.", MessageLevel::Error));
            set.add_basic_validator(one_false);

            let mut one_true =
                ValidatorBundle::new("One must be true bundle.", MessageLevel::Error, false);
            one_true.add_validator(fixed(false, "False child.", MessageLevel::Error));
            one_true.add_validator(fixed(true, "True child.", MessageLevel::Error));
            set.add_basic_validator(one_true);

            let mut none_true = ValidatorBundle::new(
                "One must be true bundle where none pass.",
                MessageLevel::Error,
                false,
            );
            none_true.add_validator(fixed(false, "False child.", MessageLevel::Error));
            set.add_basic_validator(none_true);

            let mut unset_level = ValidatorBundle::new("Bundle with unset level.", None, true);
            unset_level.add_validator(fixed(false, "False child.", MessageLevel::Error));
            set.add_basic_validator(unset_level);
        }

        fn register_detailed_validators(&mut self, _model: &SampleModel) {
            self.validators.add_detailed_validator(fixed(
                false,
                "This validator is not always run.",
                MessageLevel::Error,
            ));
        }

        fn into_validator_set(self) -> ValidatorSet<SampleModel> {
            self.validators
        }
    }

    impl ResourceModel for SampleModel {
        const DESCRIPTOR: TypeDescriptor =
            TypeDescriptor::new("SampleModel", &[RESOURCE_TYPE_DEFAULT]);

        type ValidationService = SampleValidationService;

        fn bind(resource: Resource) -> Option<Self> {
            Some(Self {
                resource,
                messages: ValidationMessages::default(),
            })
        }

        fn resource(&self) -> &Resource {
            &self.resource
        }

        fn messages(&self) -> &ValidationMessages {
            &self.messages
        }

        fn messages_mut(&mut self) -> &mut ValidationMessages {
            &mut self.messages
        }
    }

    fn sample_model(repository: &Rc<MemoryRepository>) -> SampleModel {
        repository.put("/content/sample", json!({}));
        SampleModel::bind(Resource::open(repository.handle(), "/content/sample").unwrap()).unwrap()
    }

    #[test]
    fn test_basic_validation_routes_messages_by_level() {
        let repository = Rc::new(MemoryRepository::new());
        let mut model = sample_model(&repository);

        model.validate(Some(&ValidationProvider::new()));

        assert_eq!(
            model.error_messages(),
            [
                "This is an error validator.",
                "All must be true bundle with a false validator.",
                "One must be true bundle where none pass."
            ]
        );
        assert_eq!(model.warning_messages(), ["This is a warning validator."]);
        assert_eq!(
            model.info_messages(),
            ["This is an info validator.", "Bundle with unset level."]
        );
    }

    #[test]
    fn test_unset_level_leaf_is_skipped() {
        let repository = Rc::new(MemoryRepository::new());
        let mut model = sample_model(&repository);

        model.validate(Some(&ValidationProvider::new()));

        let all_messages: Vec<&String> = model
            .error_messages()
            .iter()
            .chain(model.warning_messages())
            .chain(model.info_messages())
            .collect();
        assert!(!all_messages
            .iter()
            .any(|m| m.contains("Validator with unset level.")));
    }

    #[test]
    fn test_failing_bundle_records_only_bundle_message() {
        let repository = Rc::new(MemoryRepository::new());
        let mut model = sample_model(&repository);

        model.validate(Some(&ValidationProvider::new()));

        assert!(!model.error_messages().iter().any(|m| m.contains("False child.")));
    }

    #[test]
    fn test_failing_bundle_with_unset_level_is_recorded_as_info() {
        let repository = Rc::new(MemoryRepository::new());
        let mut model = sample_model(&repository);

        model.validate(Some(&ValidationProvider::new()));

        assert!(model
            .info_messages()
            .iter()
            .any(|m| m == "Bundle with unset level."));
    }

    #[test]
    fn test_repeated_basic_validation_does_not_duplicate_messages() {
        let repository = Rc::new(MemoryRepository::new());
        let mut model = sample_model(&repository);
        let provider = ValidationProvider::new();

        model.validate(Some(&provider));
        let errors_after_first = model.error_messages().len();
        model.validate(Some(&provider));

        assert_eq!(model.error_messages().len(), errors_after_first);
    }

    #[test]
    fn test_detailed_validation_is_a_superset_of_basic() {
        let repository = Rc::new(MemoryRepository::new());
        let mut model = sample_model(&repository);
        let provider = ValidationProvider::new();

        model.validate(Some(&provider));
        let basic_errors = model.error_messages().to_vec();

        model.do_detailed_validation(Some(&provider));

        for message in &basic_errors {
            assert!(model.error_messages().contains(message));
        }
        assert!(model
            .error_messages()
            .iter()
            .any(|m| m == "This validator is not always run."));
        assert_eq!(model.error_messages().len(), basic_errors.len() + 1);
    }

    #[test]
    fn test_registration_runs_once_per_service_instance() {
        let repository = Rc::new(MemoryRepository::new());
        let model = sample_model(&repository);
        let provider = ValidationProvider::new();
        let mut service = SampleValidationService::default();

        let first = provider.basic_validators(&model, &mut service).len();
        let second = provider.basic_validators(&model, &mut service).len();

        assert!(first > 0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_validators_returns_basic_then_detailed() {
        let repository = Rc::new(MemoryRepository::new());
        let model = sample_model(&repository);
        let provider = ValidationProvider::new();
        let mut service = SampleValidationService::default();

        let basic = provider.basic_validators(&model, &mut service).len();
        let detailed = provider.detailed_validators(&model, &mut service).len();
        let all = provider.validators(&model, &mut service);

        assert_eq!(all.len(), basic + detailed);
    }

    #[test]
    fn test_model_validator_getters() {
        let repository = Rc::new(MemoryRepository::new());
        let model = sample_model(&repository);
        let provider = ValidationProvider::new();

        assert_eq!(model.basic_validators(Some(&provider)).len(), 10);
        assert_eq!(model.detailed_validators(Some(&provider)).len(), 1);
        assert_eq!(model.validators(Some(&provider)).len(), 11);
    }

    #[test]
    fn test_exactly_one_message_per_failing_level() {
        // Ten validators, three failing at distinct levels, one unset.
        struct TallyModel {
            resource: Resource,
            messages: ValidationMessages,
        }

        #[derive(Default)]
        struct TallyValidationService {
            validators: ValidatorSet<TallyModel>,
        }

        impl ModelValidationService<TallyModel> for TallyValidationService {
            fn validator_set(&self) -> &ValidatorSet<TallyModel> {
                &self.validators
            }

            fn validator_set_mut(&mut self) -> &mut ValidatorSet<TallyModel> {
                &mut self.validators
            }

            fn register_basic_validators(&mut self, _model: &TallyModel) {
                let outcomes: [(bool, Option<MessageLevel>); 10] = [
                    (true, Some(MessageLevel::Error)),
                    (false, Some(MessageLevel::Error)),
                    (true, Some(MessageLevel::Warning)),
                    (false, Some(MessageLevel::Warning)),
                    (true, Some(MessageLevel::Info)),
                    (false, Some(MessageLevel::Info)),
                    (false, None),
                    (true, Some(MessageLevel::Error)),
                    (true, Some(MessageLevel::Warning)),
                    (true, Some(MessageLevel::Info)),
                ];
                for (index, (valid, level)) in outcomes.into_iter().enumerate() {
                    self.validators.add_basic_validator(SimpleValidator::new(
                        format!("Validator {index} failed."),
                        level,
                        move |_: &TallyModel| valid,
                    ));
                }
            }

            fn register_detailed_validators(&mut self, _model: &TallyModel) {}

            fn into_validator_set(self) -> ValidatorSet<TallyModel> {
                self.validators
            }
        }

        impl ResourceModel for TallyModel {
            const DESCRIPTOR: TypeDescriptor =
                TypeDescriptor::new("TallyModel", &[RESOURCE_TYPE_DEFAULT]);

            type ValidationService = TallyValidationService;

            fn bind(resource: Resource) -> Option<Self> {
                Some(Self {
                    resource,
                    messages: ValidationMessages::default(),
                })
            }

            fn resource(&self) -> &Resource {
                &self.resource
            }

            fn messages(&self) -> &ValidationMessages {
                &self.messages
            }

            fn messages_mut(&mut self) -> &mut ValidationMessages {
                &mut self.messages
            }
        }

        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/tally", json!({}));
        let mut model =
            TallyModel::bind(Resource::open(repository.handle(), "/content/tally").unwrap())
                .unwrap();

        model.validate(Some(&ValidationProvider::new()));

        assert_eq!(model.error_messages().len(), 1);
        assert_eq!(model.warning_messages().len(), 1);
        assert_eq!(model.info_messages().len(), 1);
        assert_eq!(model.error_messages(), ["Validator 1 failed."]);
        assert_eq!(model.warning_messages(), ["Validator 3 failed."]);
        assert_eq!(model.info_messages(), ["Validator 5 failed."]);
    }
}

use hostscope_domain::{DomainNameRules, ValidationOutcome};

pub trait DomainValidator: Send + Sync {
    fn validate(&self, input: Option<&str>) -> ValidationOutcome;
}

impl DomainValidator for DomainNameRules {
    fn validate(&self, input: Option<&str>) -> ValidationOutcome {
        DomainNameRules::validate(self, input)
    }
}

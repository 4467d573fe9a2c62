use crate::domain::skeleton::TestSuite;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    pub class_name: String,
    pub source_path: String,
    pub mock_field_count: usize,
    pub test_count: usize,
    pub exception_test_count: usize,
    pub suite: TestSuite,
}

impl PlanResponse {
    pub fn new(class_name: &str, source_path: String, suite: TestSuite) -> Self {
        let exception_test_count = suite.cases.iter().filter(|c| c.is_exception_path()).count();
        Self {
            class_name: class_name.to_string(),
            source_path,
            mock_field_count: suite.mocks.len(),
            test_count: suite.cases.len(),
            exception_test_count,
            suite,
        }
    }
}

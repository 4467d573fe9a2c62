//! Structured form of a generated test class, before it is written out as Java text.

use crate::domain::resolver::MockCallSite;
use serde::{Deserialize, Serialize};

/// Suffix appended to the class under test to name the generated test class.
pub const TEST_CLASS_SUFFIX: &str = "Test";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Package of the class under test; empty for the default package.
    pub package: String,
    /// Sorted import statements without the trailing `;`.
    pub imports: Vec<String>,
    pub class_name: String,
    pub mocks: Vec<FieldDecl>,
    pub subject: FieldDecl,
    pub cases: Vec<TestCase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub type_name: String,
    pub name: String,
}

/// Local variable holding a default argument value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDefault {
    pub type_name: String,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expectation {
    /// Bare call statement, used for `void` methods.
    Completes,
    /// Call wrapped in a not-null assertion.
    ReturnsNonNull,
    /// Call expected to throw exactly `exception`, message left blank for the developer.
    Throws { exception: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    /// Checked exceptions declared on the test method itself.
    pub throws: Vec<String>,
    pub locals: Vec<LocalDefault>,
    pub stubs: Vec<MockCallSite>,
    pub method: String,
    /// Argument list passed to the method under test.
    pub arguments: String,
    pub expectation: Expectation,
}

impl TestCase {
    pub fn is_exception_path(&self) -> bool {
        matches!(self.expectation, Expectation::Throws { .. })
    }
}

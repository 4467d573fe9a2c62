use crate::domain::defaults::default_value;
use crate::domain::imports::collect_imports;
use crate::domain::model::{ClassModel, MethodModel};
use crate::domain::resolver::{MockCallSite, MockResolver};
use crate::domain::skeleton::{
    Expectation, FieldDecl, LocalDefault, TEST_CLASS_SUFFIX, TestCase, TestSuite,
};
use crate::domain::writer::write_suite;
use std::io::Write;

/// Test skeleton synthesizer - turns a `ClassModel` into a `TestSuite`.
///
/// Every public method gets one happy-path case plus one case per declared thrown type.
/// Stubs come from the reachable-mock resolver and are repeated in each case of a method.
pub struct TestSynthesizer;

impl Default for TestSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSynthesizer {
    pub fn new() -> Self {
        Self
    }

    pub fn synthesize(&self, class: &ClassModel) -> TestSuite {
        let resolver = MockResolver::for_class(class);

        let mocks = resolver
            .mock_fields()
            .iter()
            .map(|field| FieldDecl {
                type_name: field.field_type.simple_name.clone(),
                name: field.name.clone(),
            })
            .collect();

        let mut cases = Vec::new();
        for method in class.methods.iter().filter(|m| m.is_public()) {
            let stubs = resolver.resolve(method);
            cases.push(happy_path_case(method, &stubs));
            for thrown in &method.thrown_types {
                cases.push(exception_case(method, &thrown.simple_name, &stubs));
            }
        }

        TestSuite {
            package: class.package.clone(),
            imports: collect_imports(class).into_iter().collect(),
            class_name: format!("{}{}", class.name, TEST_CLASS_SUFFIX),
            mocks,
            subject: FieldDecl {
                type_name: class.name.clone(),
                name: class.subject_name(),
            },
            cases,
        }
    }

    /// Synthesize and write the Java source for `class` into `sink`.
    pub fn generate<W: Write>(&self, class: &ClassModel, sink: &mut W) -> std::io::Result<TestSuite> {
        let suite = self.synthesize(class);
        write_suite(&suite, sink)?;
        Ok(suite)
    }
}

fn locals(method: &MethodModel) -> Vec<LocalDefault> {
    method
        .parameters
        .iter()
        .map(|p| LocalDefault {
            type_name: p.param_type.simple_name.clone(),
            name: p.name.clone(),
            value: default_value(&p.param_type),
        })
        .collect()
}

fn happy_path_case(method: &MethodModel, stubs: &[MockCallSite]) -> TestCase {
    TestCase {
        name: method.name.clone(),
        throws: method
            .thrown_types
            .iter()
            .map(|t| t.simple_name.clone())
            .collect(),
        locals: locals(method),
        stubs: stubs.to_vec(),
        method: method.name.clone(),
        arguments: method.argument_list(),
        expectation: if method.is_void() {
            Expectation::Completes
        } else {
            Expectation::ReturnsNonNull
        },
    }
}

fn exception_case(method: &MethodModel, exception: &str, stubs: &[MockCallSite]) -> TestCase {
    TestCase {
        name: format!("{}Throws{}", method.name, exception),
        throws: vec![],
        locals: locals(method),
        stubs: stubs.to_vec(),
        method: method.name.clone(),
        arguments: method.argument_list(),
        expectation: Expectation::Throws {
            exception: exception.to_string(),
        },
    }
}

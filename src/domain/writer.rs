//! Java source emission for a synthesized `TestSuite`.
//!
//! Output goes straight to the sink; a failed write aborts the rest and whatever was already
//! written stays there.

use crate::domain::skeleton::{Expectation, TestCase, TestSuite};
use std::io::{self, Write};

pub fn write_suite<W: Write + ?Sized>(suite: &TestSuite, out: &mut W) -> io::Result<()> {
    if !suite.package.is_empty() {
        writeln!(out, "package {};", suite.package)?;
        writeln!(out)?;
    }

    for import in &suite.imports {
        writeln!(out, "{import};")?;
    }
    writeln!(out)?;

    writeln!(out, "@ExtendWith(MockitoExtension.class)")?;
    writeln!(out, "class {} {{", suite.class_name)?;
    writeln!(out)?;

    for mock in &suite.mocks {
        writeln!(out, "\t@Mock")?;
        writeln!(out, "\tprivate {} {};", mock.type_name, mock.name)?;
    }
    writeln!(out, "\t@InjectMocks")?;
    writeln!(out, "\tprivate {} {};", suite.subject.type_name, suite.subject.name)?;
    writeln!(out)?;

    for case in &suite.cases {
        write_case(case, &suite.subject.name, out)?;
    }

    writeln!(out, "}}")
}

fn write_case<W: Write + ?Sized>(case: &TestCase, subject: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "\t@Test")?;
    if case.throws.is_empty() {
        writeln!(out, "\tvoid {}() {{", case.name)?;
    } else {
        writeln!(out, "\tvoid {}() throws {} {{", case.name, case.throws.join(", "))?;
    }

    for local in &case.locals {
        writeln!(out, "\t\t{} {} = {};", local.type_name, local.name, local.value)?;
    }
    writeln!(out)?;

    for stub in &case.stubs {
        let matchers = vec!["any()"; stub.argument_count].join(", ");
        writeln!(
            out,
            "\t\twhen({}.{}({})).thenReturn(null);",
            stub.target_field, stub.callee, matchers
        )?;
    }
    writeln!(out)?;

    let call = format!("{}.{}({})", subject, case.method, case.arguments);
    match &case.expectation {
        Expectation::Completes => {
            writeln!(out, "\t\t{call};")?;
        }
        Expectation::ReturnsNonNull => {
            writeln!(out, "\t\tassertThat({call})")?;
            writeln!(out, "\t\t\t.isNotNull();")?;
        }
        Expectation::Throws { exception } => {
            writeln!(out, "\t\tassertThatThrownBy(() -> {call})")?;
            writeln!(out, "\t\t\t.isExactlyInstanceOf({exception}.class)")?;
            writeln!(out, "\t\t\t.hasMessage(\"\");")?;
        }
    }

    writeln!(out, "\t}}")?;
    writeln!(out)
}

/// Render a suite to a `String`.
pub fn render_suite(suite: &TestSuite) -> io::Result<String> {
    let mut buf = Vec::new();
    write_suite(suite, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

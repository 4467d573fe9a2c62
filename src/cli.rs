use crate::app::generator::TestGenerator;
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Generate the test skeleton for `class_name`, writing to `output` or stdout.
///
/// The output file is only created once the class has been located and parsed.
pub fn generate_test(
    generator: &TestGenerator,
    class_name: &str,
    output: Option<&Path>,
) -> Result<()> {
    let (_, class) = generator.load_class(class_name)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            generator.write_class(&class, &mut sink)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = stdout.lock();
            generator.write_class(&class, &mut sink)?;
        }
    }

    Ok(())
}

/// Print the resolved test plan (mock stubs per test case) as JSON.
pub fn print_plan(generator: &TestGenerator, class_name: &str) -> Result<()> {
    let plan = generator.plan(class_name)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &plan).context("Failed to serialize test plan")?;
    writeln!(out)?;
    Ok(())
}

use crate::adapters::fs::locator::FsSourceLocator;
use crate::adapters::fs::reader::FileSourceReader;
use crate::adapters::java::JavaClassParser;
use crate::app::dto::PlanResponse;
use crate::domain::error::GenerateError;
use crate::domain::model::ClassModel;
use crate::domain::ports::{ClassParser, SourceLocator, SourceReader};
use crate::domain::skeleton::TestSuite;
use crate::domain::synthesizer::TestSynthesizer;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Application service running one generation per requested class:
/// locate → read → parse → synthesize → write.
///
/// Holds no per-run state, so one generator can serve any number of independent runs.
pub struct TestGenerator {
    locator: Box<dyn SourceLocator>,
    reader: Box<dyn SourceReader>,
    parser: Box<dyn ClassParser>,
    synthesizer: TestSynthesizer,
}

impl TestGenerator {
    pub fn new(
        locator: Box<dyn SourceLocator>,
        reader: Box<dyn SourceReader>,
        parser: Box<dyn ClassParser>,
    ) -> Self {
        Self {
            locator,
            reader,
            parser,
            synthesizer: TestSynthesizer::new(),
        }
    }

    /// Generator wired to the filesystem and the tree-sitter Java parser.
    pub fn with_source_roots(roots: Vec<PathBuf>) -> Self {
        Self::new(
            Box::new(FsSourceLocator::new(roots)),
            Box::new(FileSourceReader::new()),
            Box::new(JavaClassParser::new()),
        )
    }

    /// Locate, read and parse `class_name`.
    pub fn load_class(&self, class_name: &str) -> Result<(PathBuf, ClassModel), GenerateError> {
        let path = self
            .locator
            .locate(class_name)
            .ok_or_else(|| GenerateError::ClassNotFound {
                name: class_name.to_string(),
                roots: self.locator.roots().to_vec(),
            })?;
        info!(class_name, path = %path.display(), "located class source");

        let source = self
            .reader
            .read(&path)
            .map_err(|source| GenerateError::Read {
                path: path.clone(),
                source,
            })?;

        let class = self
            .parser
            .parse(&source)
            .map_err(|e| GenerateError::ParseFailure {
                path: path.clone(),
                message: format!("{e:#}"),
            })?;
        debug!(class = %class.name, package = %class.package, "class model ready");

        Ok((path, class))
    }

    /// Build the structured test suite without writing anything.
    pub fn plan(&self, class_name: &str) -> Result<PlanResponse, GenerateError> {
        let (path, class) = self.load_class(class_name)?;
        let suite = self.synthesizer.synthesize(&class);
        Ok(PlanResponse::new(
            class_name,
            path.to_string_lossy().to_string(),
            suite,
        ))
    }

    /// Generate the test source for `class_name` into `sink`.
    ///
    /// Nothing is written unless the class was found and parsed.
    pub fn generate<W: Write>(
        &self,
        class_name: &str,
        sink: &mut W,
    ) -> Result<TestSuite, GenerateError> {
        let (_, class) = self.load_class(class_name)?;
        self.write_class(&class, sink)
    }

    /// Write the test source for an already parsed class. A sink failure aborts the run and
    /// leaves partial output behind.
    pub fn write_class<W: Write>(
        &self,
        class: &ClassModel,
        sink: &mut W,
    ) -> Result<TestSuite, GenerateError> {
        let suite = self.synthesizer.generate(class, sink)?;
        sink.flush()?;
        info!(
            test_class = %suite.class_name,
            tests = suite.cases.len(),
            mocks = suite.mocks.len(),
            "generated test skeleton"
        );
        Ok(suite)
    }
}

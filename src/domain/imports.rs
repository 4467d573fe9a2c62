use crate::domain::model::{ClassModel, TypeRef};
use std::collections::BTreeSet;

/// Framework imports every generated test needs.
pub const BASELINE_IMPORTS: &[&str] = &[
    "import org.junit.jupiter.api.Test",
    "import org.junit.jupiter.api.extension.ExtendWith",
    "import org.mockito.Mock",
    "import org.mockito.InjectMocks",
    "import org.mockito.junit.jupiter.MockitoExtension",
    "import static org.mockito.Mockito.when",
    "import static org.mockito.ArgumentMatchers.any",
    "import static org.assertj.core.api.Assertions.assertThat",
    "import static org.assertj.core.api.Assertions.assertThatThrownBy",
];

/// Sorted, deduplicated import statements (without the trailing `;`) for a test of `class`.
///
/// Mock field types are included, as are thrown types and parameter types of every method, not
/// just the public ones. Types without a package produce no import; on-demand imports of the
/// class are carried over so names it resolved through them stay visible.
pub fn collect_imports(class: &ClassModel) -> BTreeSet<String> {
    let mut imports: BTreeSet<String> = BASELINE_IMPORTS.iter().map(|s| s.to_string()).collect();

    let mut add = |ty: &TypeRef| {
        if let Some(path) = ty.import_path() {
            imports.insert(format!("import {path}"));
        }
    };

    for field in class.mock_field_map().iter() {
        add(&field.field_type);
    }
    for method in &class.methods {
        for thrown in &method.thrown_types {
            add(thrown);
        }
        for param in &method.parameters {
            add(&param.param_type);
        }
    }
    add(&class.type_ref());
    for package in &class.wildcard_imports {
        imports.insert(format!("import {package}.*"));
    }

    imports
}

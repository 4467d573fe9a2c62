//! Structural model of a Java class: the contract between the parser adapter and the
//! resolver/synthesizer.
//!
//! A `ClassModel` is built once per generation run and never mutated afterwards. Methods and
//! fields keep declaration order; the lookup maps used by the resolver are derived from it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Stable identity of one invocation occurrence inside a `ClassModel`.
///
/// Two textually identical calls in the same body still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InvocationId(pub u32);

/// Reference to a type by package and simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Dotted package path. Empty for primitives and default-package types.
    pub package: String,
    /// Simple name with generic arguments stripped (`List<String>` → `List`).
    /// Array types keep their `[]` suffix.
    pub simple_name: String,
}

impl TypeRef {
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_name: simple_name.into(),
        }
    }

    /// Element type name for arrays, the simple name otherwise.
    pub fn base_name(&self) -> &str {
        self.simple_name.trim_end_matches("[]")
    }

    pub fn is_array(&self) -> bool {
        self.simple_name.ends_with("[]")
    }

    /// Fully qualified import path, or `None` when the type cannot be imported
    /// (primitive or default package).
    pub fn import_path(&self) -> Option<String> {
        if self.package.is_empty() {
            return None;
        }
        Some(format!("{}.{}", self.package, self.base_name()))
    }
}

/// Method visibility as declared by modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldModel {
    pub name: String,
    pub field_type: TypeRef,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterModel {
    pub name: String,
    pub param_type: TypeRef,
}

/// A syntactic call found in a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationExpr {
    pub id: InvocationId,
    /// Receiver expression text; empty for an implicit same-instance call.
    pub target: String,
    pub callee: String,
    pub arguments: Vec<String>,
}

impl InvocationExpr {
    pub fn is_local(&self) -> bool {
        self.target.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodModel {
    pub name: String,
    pub visibility: Visibility,
    pub parameters: Vec<ParameterModel>,
    /// `None` for `void`.
    pub return_type: Option<TypeRef>,
    pub thrown_types: Vec<TypeRef>,
    /// Every invocation in the body subtree, pre-order.
    pub body: Vec<InvocationExpr>,
}

impl MethodModel {
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_void(&self) -> bool {
        self.return_type.is_none()
    }

    /// Parameter names joined as a call argument list.
    pub fn argument_list(&self) -> String {
        self.parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassModel {
    pub name: String,
    pub package: String,
    pub methods: Vec<MethodModel>,
    pub fields: Vec<FieldModel>,
    /// Packages (or enclosing types) pulled in by on-demand `import p.*;` declarations.
    #[serde(default)]
    pub wildcard_imports: Vec<String>,
}

impl ClassModel {
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.package.clone(), self.name.clone())
    }

    /// Name of the subject-under-test field: the class name with its first character lowercased.
    pub fn subject_name(&self) -> String {
        lower_first(&self.name)
    }

    /// Method Map: simple name → method. Overloads collapse, first declaration wins.
    pub fn method_map(&self) -> HashMap<&str, &MethodModel> {
        let mut map = HashMap::with_capacity(self.methods.len());
        for method in &self.methods {
            map.entry(method.name.as_str()).or_insert(method);
        }
        map
    }

    /// Mock Field Map over non-static fields, in declaration order.
    pub fn mock_field_map(&self) -> MockFieldMap<'_> {
        MockFieldMap::from_fields(&self.fields)
    }
}

/// Non-static fields keyed by simple name. Duplicate names keep the first field.
///
/// Iteration follows declaration order so generated `@Mock` fields are deterministic.
#[derive(Debug, Clone, Default)]
pub struct MockFieldMap<'a> {
    ordered: Vec<&'a FieldModel>,
    names: HashSet<&'a str>,
}

impl<'a> MockFieldMap<'a> {
    pub fn from_fields(fields: &'a [FieldModel]) -> Self {
        let mut map = Self::default();
        for field in fields.iter().filter(|f| !f.is_static) {
            if map.names.insert(field.name.as_str()) {
                map.ordered.push(field);
            }
        }
        map
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a FieldModel> + '_ {
        self.ordered.iter().copied()
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Class model builders for integration tests.
#![allow(dead_code)]

use junit_scaffold::domain::model::{
    ClassModel, FieldModel, InvocationExpr, InvocationId, MethodModel, ParameterModel, TypeRef,
    Visibility,
};

/// Builds a `ClassModel` while handing out unique invocation ids.
pub struct ClassBuilder {
    class: ClassModel,
    next_id: u32,
}

impl ClassBuilder {
    pub fn new(package: &str, name: &str) -> Self {
        Self {
            class: ClassModel {
                name: name.to_string(),
                package: package.to_string(),
                methods: Vec::new(),
                fields: Vec::new(),
                wildcard_imports: Vec::new(),
            },
            next_id: 0,
        }
    }

    pub fn field(mut self, name: &str, type_name: &str) -> Self {
        self.class.fields.push(FieldModel {
            name: name.to_string(),
            field_type: type_ref(type_name),
            is_static: false,
        });
        self
    }

    pub fn static_field(mut self, name: &str, type_name: &str) -> Self {
        self.class.fields.push(FieldModel {
            name: name.to_string(),
            field_type: type_ref(type_name),
            is_static: true,
        });
        self
    }

    pub fn method(mut self, spec: MethodSpec) -> Self {
        let body = spec
            .calls
            .iter()
            .map(|(target, callee, argc)| {
                self.next_id += 1;
                InvocationExpr {
                    id: InvocationId(self.next_id),
                    target: target.to_string(),
                    callee: callee.to_string(),
                    arguments: (0..*argc).map(|i| format!("arg{i}")).collect(),
                }
            })
            .collect();
        self.class.methods.push(MethodModel {
            name: spec.name,
            visibility: spec.visibility,
            parameters: spec.parameters,
            return_type: spec.return_type,
            thrown_types: spec.thrown,
            body,
        });
        self
    }

    pub fn build(self) -> ClassModel {
        self.class
    }
}

pub struct MethodSpec {
    name: String,
    visibility: Visibility,
    parameters: Vec<ParameterModel>,
    return_type: Option<TypeRef>,
    thrown: Vec<TypeRef>,
    calls: Vec<(String, String, usize)>,
}

impl MethodSpec {
    /// Public void method with no parameters.
    pub fn public(name: &str) -> Self {
        Self {
            name: name.to_string(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
            return_type: None,
            thrown: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub fn private(name: &str) -> Self {
        Self {
            visibility: Visibility::Private,
            ..Self::public(name)
        }
    }

    pub fn param(mut self, name: &str, type_name: &str) -> Self {
        self.parameters.push(ParameterModel {
            name: name.to_string(),
            param_type: type_ref(type_name),
        });
        self
    }

    pub fn returns(mut self, type_name: &str) -> Self {
        self.return_type = Some(type_ref(type_name));
        self
    }

    pub fn throws(mut self, type_name: &str) -> Self {
        self.thrown.push(type_ref(type_name));
        self
    }

    /// Local (same-instance) call.
    pub fn calls_local(mut self, callee: &str) -> Self {
        self.calls.push((String::new(), callee.to_string(), 0));
        self
    }

    pub fn calls(mut self, target: &str, callee: &str, argc: usize) -> Self {
        self.calls
            .push((target.to_string(), callee.to_string(), argc));
        self
    }
}

/// Package guess used by fixtures: primitives have none, well-known names live in `java.lang`,
/// everything else in `com.acme`.
pub fn type_ref(simple_name: &str) -> TypeRef {
    match simple_name {
        "int" | "long" | "double" | "boolean" | "char" => TypeRef::new("", simple_name),
        "String" | "Integer" | "Long" | "Double" | "Boolean" => {
            TypeRef::new("java.lang", simple_name)
        }
        "IOException" => TypeRef::new("java.io", simple_name),
        _ => TypeRef::new("com.acme", simple_name),
    }
}

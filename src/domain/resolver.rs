use crate::domain::model::{ClassModel, InvocationId, MethodModel, MockFieldMap};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A collaborator call reachable from a method under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockCallSite {
    pub target_field: String,
    pub callee: String,
    pub argument_count: usize,
}

/// Reachable-mock resolver - finds the collaborator calls a method triggers, following
/// same-instance calls transitively.
///
/// Local calls are expanded in place; calls on mock fields are leaves; everything else is
/// dropped. A visited set of invocation ids, shared by the whole walk, breaks cycles. It does
/// not deduplicate: the same collaborator call reached through two distinct call sites is
/// reported twice.
pub struct MockResolver<'a> {
    methods: HashMap<&'a str, &'a MethodModel>,
    mocks: MockFieldMap<'a>,
}

impl<'a> MockResolver<'a> {
    pub fn new(methods: HashMap<&'a str, &'a MethodModel>, mocks: MockFieldMap<'a>) -> Self {
        Self { methods, mocks }
    }

    pub fn for_class(class: &'a ClassModel) -> Self {
        Self::new(class.method_map(), class.mock_field_map())
    }

    pub fn mock_fields(&self) -> &MockFieldMap<'a> {
        &self.mocks
    }

    /// Resolve the mock call sites reachable from `start`, in depth-first pre-order.
    pub fn resolve(&self, start: &MethodModel) -> Vec<MockCallSite> {
        let mut visited = HashSet::new();
        let mut sites = Vec::new();
        self.walk(start, &mut visited, &mut sites);
        sites
    }

    fn walk(
        &self,
        method: &MethodModel,
        visited: &mut HashSet<InvocationId>,
        sites: &mut Vec<MockCallSite>,
    ) {
        for invocation in &method.body {
            if !visited.insert(invocation.id) {
                continue;
            }

            if invocation.is_local() {
                if let Some(&callee) = self.methods.get(invocation.callee.as_str()) {
                    self.walk(callee, visited, sites);
                }
            } else if self.mocks.contains(&invocation.target) {
                sites.push(MockCallSite {
                    target_field: invocation.target.clone(),
                    callee: invocation.callee.clone(),
                    argument_count: invocation.arguments.len(),
                });
            }
        }
    }
}

/// Free-standing form of [`MockResolver::resolve`] over prebuilt maps.
pub fn resolve(
    start: &MethodModel,
    methods: &HashMap<&str, &MethodModel>,
    mocks: &MockFieldMap<'_>,
) -> Vec<MockCallSite> {
    let resolver = MockResolver::new(methods.clone(), mocks.clone());
    resolver.resolve(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FieldModel, InvocationExpr, TypeRef, Visibility};

    struct Builder {
        next_id: u32,
    }

    impl Builder {
        fn call(&mut self, target: &str, callee: &str, args: usize) -> InvocationExpr {
            self.next_id += 1;
            InvocationExpr {
                id: InvocationId(self.next_id),
                target: target.to_string(),
                callee: callee.to_string(),
                arguments: (0..args).map(|i| format!("a{i}")).collect(),
            }
        }
    }

    fn method(name: &str, body: Vec<InvocationExpr>) -> MethodModel {
        MethodModel {
            name: name.to_string(),
            visibility: Visibility::Public,
            parameters: vec![],
            return_type: None,
            thrown_types: vec![],
            body,
        }
    }

    fn service(methods: Vec<MethodModel>) -> ClassModel {
        ClassModel {
            name: "Service".into(),
            package: "com.acme".into(),
            methods,
            fields: vec![
                FieldModel {
                    name: "repo".into(),
                    field_type: TypeRef::new("com.acme", "Repository"),
                    is_static: false,
                },
                FieldModel {
                    name: "CACHE".into(),
                    field_type: TypeRef::new("com.acme", "Cache"),
                    is_static: true,
                },
            ],
            wildcard_imports: vec![],
        }
    }

    fn site(field: &str, callee: &str, argc: usize) -> MockCallSite {
        MockCallSite {
            target_field: field.into(),
            callee: callee.into(),
            argument_count: argc,
        }
    }

    #[test]
    fn test_static_field_and_unknown_targets_are_dropped() {
        let mut b = Builder { next_id: 0 };
        let class = service(vec![method(
            "run",
            vec![
                b.call("CACHE", "get", 1),
                b.call("list", "add", 1),
                b.call("Math", "max", 2),
                b.call("", "missing", 0),
                b.call("repo", "save", 2),
            ],
        )]);
        let resolver = MockResolver::for_class(&class);
        assert_eq!(resolver.resolve(&class.methods[0]), vec![site("repo", "save", 2)]);
    }

    #[test]
    fn test_order_is_depth_first_preorder() {
        let mut b = Builder { next_id: 0 };
        let class = service(vec![
            method(
                "run",
                vec![b.call("repo", "first", 0), b.call("", "helper", 0), b.call("repo", "last", 0)],
            ),
            method("helper", vec![b.call("repo", "middle", 1)]),
        ]);
        let resolver = MockResolver::for_class(&class);
        let callees: Vec<_> = resolver
            .resolve(&class.methods[0])
            .into_iter()
            .map(|s| s.callee)
            .collect();
        assert_eq!(callees, vec!["first", "middle", "last"]);
    }

    #[test]
    fn test_distinct_paths_keep_duplicates() {
        let mut b = Builder { next_id: 0 };
        let class = service(vec![
            method("run", vec![b.call("", "helper", 0), b.call("", "helper", 0)]),
            method("helper", vec![b.call("repo", "load", 1)]),
        ]);
        let resolver = MockResolver::for_class(&class);
        // The helper's own invocation node is visited once, so the second expansion yields nothing.
        assert_eq!(resolver.resolve(&class.methods[0]), vec![site("repo", "load", 1)]);

        let mut b = Builder { next_id: 0 };
        let class = service(vec![
            method("run", vec![b.call("", "a", 0), b.call("", "b", 0)]),
            method("a", vec![b.call("repo", "load", 1)]),
            method("b", vec![b.call("repo", "load", 1)]),
        ]);
        let resolver = MockResolver::for_class(&class);
        assert_eq!(
            resolver.resolve(&class.methods[0]),
            vec![site("repo", "load", 1), site("repo", "load", 1)]
        );
    }

    #[test]
    fn test_each_resolve_starts_with_fresh_visited_set() {
        let mut b = Builder { next_id: 0 };
        let class = service(vec![method("run", vec![b.call("repo", "load", 0)])]);
        let resolver = MockResolver::for_class(&class);
        assert_eq!(resolver.resolve(&class.methods[0]).len(), 1);
        assert_eq!(resolver.resolve(&class.methods[0]).len(), 1);
    }

    #[test]
    fn test_free_function_matches_resolver() {
        let mut b = Builder { next_id: 0 };
        let class = service(vec![
            method("run", vec![b.call("", "helper", 0)]),
            method("helper", vec![b.call("repo", "load", 3)]),
        ]);
        let methods = class.method_map();
        let mocks = class.mock_field_map();
        assert_eq!(
            resolve(&class.methods[0], &methods, &mocks),
            vec![site("repo", "load", 3)]
        );
    }
}

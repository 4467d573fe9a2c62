use crate::domain::model::{
    ClassModel, FieldModel, InvocationExpr, InvocationId, MethodModel, ParameterModel, TypeRef,
    Visibility,
};
use crate::domain::ports::ClassParser;
use anyhow::{Context, Result, anyhow, bail};
use std::collections::{HashMap, HashSet};
use tracing::debug;
use tree_sitter::{Node, Parser};

/// Type declarations that can appear as members of a class body.
const MEMBER_TYPE_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

const PRIMITIVES: &[&str] = &[
    "byte", "short", "int", "long", "float", "double", "boolean", "char",
];

/// `java.lang` types that resolve without an import.
const JAVA_LANG: &[&str] = &[
    "AutoCloseable",
    "ArithmeticException",
    "ArrayIndexOutOfBoundsException",
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "ClassCastException",
    "CloneNotSupportedException",
    "Comparable",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "IllegalArgumentException",
    "IllegalStateException",
    "IndexOutOfBoundsException",
    "Integer",
    "InterruptedException",
    "Iterable",
    "Long",
    "Math",
    "NullPointerException",
    "Number",
    "NumberFormatException",
    "Object",
    "Record",
    "Runnable",
    "RuntimeException",
    "SecurityException",
    "Short",
    "String",
    "StringBuilder",
    "System",
    "Thread",
    "Throwable",
    "UnsupportedOperationException",
    "Void",
];

/// Structural parser for Java sources.
///
/// Takes the first top-level class of the compilation unit and extracts its fields, its
/// methods (constructors and nested types are left out) and every method invocation inside
/// each method body, in pre-order.
///
/// Type names resolve in Java's scoping order: type variables (erased to their first bound,
/// or `Object`), member types of the class, single-type imports, `java.lang`, then the class's
/// own package. When the file has on-demand imports, a name none of those cover is left
/// without a package, since it may come from any of them.
pub struct JavaClassParser;

impl JavaClassParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaClassParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassParser for JavaClassParser {
    fn parse(&self, source: &str) -> Result<ClassModel> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .context("Failed to load Java grammar")?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| anyhow!("tree-sitter returned no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error_position(root).unwrap_or((0, 0));
            bail!("syntax error at line {}, column {}", line + 1, column + 1);
        }

        let mut extractor = Extractor::new(source.as_bytes());
        extractor.read_header(root);

        let class_node = root
            .named_children(&mut root.walk())
            .find(|n| n.kind() == "class_declaration")
            .ok_or_else(|| anyhow!("no class declaration found"))?;

        let class = extractor.extract_class(class_node)?;
        debug!(
            class = %class.name,
            methods = class.methods.len(),
            fields = class.fields.len(),
            "parsed class model"
        );
        Ok(class)
    }
}

fn first_error_position(node: Node) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return Some((pos.row, pos.column));
    }
    let children: Vec<Node> = node.children(&mut node.walk()).collect();
    children
        .into_iter()
        .filter(|c| c.has_error())
        .find_map(first_error_position)
}

struct Extractor<'s> {
    source: &'s [u8],
    package: String,
    /// Simple name → package, from single-type imports.
    imports: HashMap<String, String>,
    /// Qualifiers of `import p.*;` declarations.
    wildcards: Vec<String>,
    /// Simple names of types declared in the class body.
    member_types: HashSet<String>,
    /// Type variable in scope → its erasure.
    type_variables: HashMap<String, TypeRef>,
    /// Qualifier for member types: `package.Outer`, empty in the default package.
    member_scope: String,
    next_id: u32,
}

impl<'s> Extractor<'s> {
    fn new(source: &'s [u8]) -> Self {
        Self {
            source,
            package: String::new(),
            imports: HashMap::new(),
            wildcards: Vec::new(),
            member_types: HashSet::new(),
            type_variables: HashMap::new(),
            member_scope: String::new(),
            next_id: 0,
        }
    }

    fn text(&self, node: Node) -> &'s str {
        node.utf8_text(self.source).unwrap_or("")
    }

    fn read_header(&mut self, root: Node) {
        let children: Vec<Node> = root.named_children(&mut root.walk()).collect();
        for child in children {
            match child.kind() {
                "package_declaration" => {
                    if let Some(name) = first_named_of(child, &["scoped_identifier", "identifier"])
                    {
                        self.package = self.text(name).to_string();
                    }
                }
                "import_declaration" => self.read_import(child),
                _ => {}
            }
        }
    }

    fn read_import(&mut self, node: Node) {
        let children: Vec<Node> = node.children(&mut node.walk()).collect();
        if children.iter().any(|c| c.kind() == "static") {
            return;
        }
        let Some(path) = first_named_of(node, &["scoped_identifier", "identifier"]) else {
            return;
        };
        let path = self.text(path).to_string();
        if children.iter().any(|c| c.kind() == "asterisk") {
            debug!(import = %path, "on-demand import");
            self.wildcards.push(path);
        } else if let Some((package, simple)) = path.rsplit_once('.') {
            self.imports.insert(simple.to_string(), package.to_string());
        }
    }

    fn extract_class(&mut self, node: Node) -> Result<ClassModel> {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
            .ok_or_else(|| anyhow!("class declaration without a name"))?;
        let body = node
            .child_by_field_name("body")
            .ok_or_else(|| anyhow!("class {name} has no body"))?;

        let members: Vec<Node> = body.named_children(&mut body.walk()).collect();
        self.member_scope = if self.package.is_empty() {
            String::new()
        } else {
            format!("{}.{name}", self.package)
        };
        for member in members.iter().filter(|m| MEMBER_TYPE_KINDS.contains(&m.kind())) {
            if let Some(member_name) = member.child_by_field_name("name") {
                self.member_types.insert(self.text(member_name).to_string());
            }
        }
        self.declare_type_parameters(node);

        let mut fields = Vec::new();
        let mut methods = Vec::new();
        for member in members {
            match member.kind() {
                "field_declaration" => fields.extend(self.extract_fields(member)),
                "method_declaration" => methods.push(self.extract_method(member)?),
                _ => {}
            }
        }

        Ok(ClassModel {
            name,
            package: self.package.clone(),
            methods,
            fields,
            wildcard_imports: self.wildcards.clone(),
        })
    }

    fn extract_fields(&self, node: Node) -> Vec<FieldModel> {
        let is_static = has_modifier(node, "static");
        let Some(type_node) = node.child_by_field_name("type") else {
            return Vec::new();
        };
        let base = self.type_ref(type_node);

        let declarators: Vec<Node> = node
            .children_by_field_name("declarator", &mut node.walk())
            .collect();
        declarators
            .into_iter()
            .filter_map(|declarator| {
                let name = self.text(declarator.child_by_field_name("name")?).to_string();
                let field_type = self.with_dimensions(&base, declarator.child_by_field_name("dimensions"));
                Some(FieldModel {
                    name,
                    field_type,
                    is_static,
                })
            })
            .collect()
    }

    fn extract_method(&mut self, node: Node) -> Result<MethodModel> {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
            .ok_or_else(|| anyhow!("method declaration without a name"))?;

        let enclosing = self.type_variables.clone();
        self.declare_type_parameters(node);

        let visibility = if has_modifier(node, "public") {
            Visibility::Public
        } else if has_modifier(node, "protected") {
            Visibility::Protected
        } else if has_modifier(node, "private") {
            Visibility::Private
        } else {
            Visibility::Package
        };

        let return_type = match node.child_by_field_name("type") {
            Some(t) if t.kind() == "void_type" => None,
            Some(t) => Some(self.type_ref(t)),
            None => None,
        };

        let parameters = match node.child_by_field_name("parameters") {
            Some(params) => self.extract_parameters(params),
            None => Vec::new(),
        };

        let thrown_types = match first_named_of(node, &["throws"]) {
            Some(throws) => {
                let types: Vec<Node> = throws.named_children(&mut throws.walk()).collect();
                types.into_iter().map(|t| self.type_ref(t)).collect()
            }
            None => Vec::new(),
        };

        let mut body = Vec::new();
        if let Some(block) = node.child_by_field_name("body") {
            self.collect_invocations(block, &mut body);
        }
        self.type_variables = enclosing;

        Ok(MethodModel {
            name,
            visibility,
            parameters,
            return_type,
            thrown_types,
            body,
        })
    }

    /// `<K, V extends Comparable<K>>`: each variable erases to its first bound, later
    /// declarations may refer to earlier ones.
    fn declare_type_parameters(&mut self, node: Node) {
        let Some(params) = first_named_of(node, &["type_parameters"]) else {
            return;
        };
        let params: Vec<Node> = params.named_children(&mut params.walk()).collect();
        for param in params.into_iter().filter(|p| p.kind() == "type_parameter") {
            let Some(name) = first_named_of(param, &["type_identifier", "identifier"]) else {
                continue;
            };
            let name = self.text(name).to_string();
            let erasure = first_named_of(param, &["type_bound"])
                .and_then(|bound| bound.named_child(0))
                .map(|bound| self.type_ref(bound))
                .unwrap_or_else(|| TypeRef::new("java.lang", "Object"));
            self.type_variables.insert(name, erasure);
        }
    }

    fn extract_parameters(&self, node: Node) -> Vec<ParameterModel> {
        let params: Vec<Node> = node.named_children(&mut node.walk()).collect();
        params
            .into_iter()
            .filter_map(|param| match param.kind() {
                "formal_parameter" => {
                    let name = self.text(param.child_by_field_name("name")?).to_string();
                    let base = self.type_ref(param.child_by_field_name("type")?);
                    Some(ParameterModel {
                        name,
                        param_type: self.with_dimensions(&base, param.child_by_field_name("dimensions")),
                    })
                }
                "spread_parameter" => {
                    // `T... name` is received as `T[]`.
                    let children: Vec<Node> = param.named_children(&mut param.walk()).collect();
                    let type_node = children
                        .iter()
                        .copied()
                        .find(|c| !matches!(c.kind(), "modifiers" | "variable_declarator"))?;
                    let declarator = children
                        .iter()
                        .copied()
                        .find(|c| c.kind() == "variable_declarator")?;
                    let name = self.text(declarator.child_by_field_name("name")?).to_string();
                    let mut param_type = self.type_ref(type_node);
                    param_type.simple_name.push_str("[]");
                    Some(ParameterModel { name, param_type })
                }
                _ => None,
            })
            .collect()
    }

    /// Pre-order walk: an invocation is recorded before the calls nested in its receiver and
    /// arguments.
    fn collect_invocations(&mut self, node: Node, out: &mut Vec<InvocationExpr>) {
        if node.kind() == "method_invocation"
            && let Some(name) = node.child_by_field_name("name")
        {
            self.next_id += 1;
            let arguments = match node.child_by_field_name("arguments") {
                Some(args) => {
                    let args: Vec<Node> = args.named_children(&mut args.walk()).collect();
                    args.into_iter()
                        .filter(|a| !a.is_extra())
                        .map(|a| self.text(a).to_string())
                        .collect()
                }
                None => Vec::new(),
            };
            out.push(InvocationExpr {
                id: InvocationId(self.next_id),
                target: self.target_text(node.child_by_field_name("object")),
                callee: self.text(name).to_string(),
                arguments,
            });
        }

        let children: Vec<Node> = node.named_children(&mut node.walk()).collect();
        for child in children {
            self.collect_invocations(child, out);
        }
    }

    /// Receiver text with an explicit `this` folded away: `this.foo()` is a local call and
    /// `this.repo.find()` targets `repo`.
    fn target_text(&self, object: Option<Node>) -> String {
        let Some(object) = object else {
            return String::new();
        };
        match object.kind() {
            "this" => String::new(),
            "field_access" => {
                let receiver = object.child_by_field_name("object");
                let field = object.child_by_field_name("field");
                match (receiver, field) {
                    (Some(r), Some(f)) if r.kind() == "this" => self.text(f).to_string(),
                    _ => self.text(object).to_string(),
                }
            }
            _ => self.text(object).to_string(),
        }
    }

    fn type_ref(&self, node: Node) -> TypeRef {
        match node.kind() {
            "generic_type" => match first_named_of(node, &["type_identifier", "scoped_type_identifier"]) {
                Some(inner) => self.type_ref(inner),
                None => self.resolve(self.text(node)),
            },
            "array_type" => {
                let mut element = match node.child_by_field_name("element") {
                    Some(e) => self.type_ref(e),
                    None => self.resolve(self.text(node)),
                };
                if let Some(dims) = node.child_by_field_name("dimensions") {
                    append_dimensions(&mut element, self.text(dims));
                }
                element
            }
            "scoped_type_identifier" => self.scoped_type_ref(node),
            "integral_type" | "floating_point_type" | "boolean_type" => {
                TypeRef::new("", self.text(node))
            }
            _ => self.resolve(self.text(node)),
        }
    }

    /// `java.util.List` → package `java.util`; `Map.Entry` → nested type `Entry` inside the
    /// resolved `Map`.
    fn scoped_type_ref(&self, node: Node) -> TypeRef {
        let mut segments = Vec::new();
        collect_identifiers(node, self.source, &mut segments);
        let Some((last, qualifier)) = segments.split_last() else {
            return self.resolve(self.text(node));
        };
        let Some(first) = qualifier.first() else {
            return self.resolve(last);
        };

        if first.starts_with(|c: char| c.is_ascii_lowercase()) {
            return TypeRef::new(qualifier.join("."), *last);
        }

        let outer = self.resolve(first);
        let mut package = if outer.package.is_empty() {
            outer.simple_name
        } else {
            format!("{}.{}", outer.package, outer.simple_name)
        };
        for segment in &qualifier[1..] {
            package.push('.');
            package.push_str(segment);
        }
        TypeRef::new(package, *last)
    }

    fn with_dimensions(&self, base: &TypeRef, dims: Option<Node>) -> TypeRef {
        let mut ty = base.clone();
        if let Some(dims) = dims {
            append_dimensions(&mut ty, self.text(dims));
        }
        ty
    }

    fn resolve(&self, simple_name: &str) -> TypeRef {
        let simple_name = simple_name.trim();
        if PRIMITIVES.contains(&simple_name) {
            return TypeRef::new("", simple_name);
        }
        if let Some(erasure) = self.type_variables.get(simple_name) {
            return erasure.clone();
        }
        if self.member_types.contains(simple_name) {
            return TypeRef::new(self.member_scope.clone(), simple_name);
        }
        if let Some(package) = self.imports.get(simple_name) {
            return TypeRef::new(package.clone(), simple_name);
        }
        if JAVA_LANG.contains(&simple_name) {
            return TypeRef::new("java.lang", simple_name);
        }
        if !self.wildcards.is_empty() {
            return TypeRef::new("", simple_name);
        }
        TypeRef::new(self.package.clone(), simple_name)
    }
}

fn first_named_of<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    let children: Vec<Node<'t>> = node.named_children(&mut node.walk()).collect();
    children.into_iter().find(|c| kinds.contains(&c.kind()))
}

fn has_modifier(node: Node, keyword: &str) -> bool {
    let Some(modifiers) = first_named_of(node, &["modifiers"]) else {
        return false;
    };
    let mut cursor = modifiers.walk();
    modifiers.children(&mut cursor).any(|c| c.kind() == keyword)
}

fn collect_identifiers<'s>(node: Node, source: &'s [u8], out: &mut Vec<&'s str>) {
    if node.kind() == "type_identifier" {
        out.push(node.utf8_text(source).unwrap_or(""));
        return;
    }
    if node.kind() == "type_arguments" || node.kind().ends_with("annotation") {
        return;
    }
    let children: Vec<Node> = node.named_children(&mut node.walk()).collect();
    for child in children {
        collect_identifiers(child, source, out);
    }
}

fn append_dimensions(ty: &mut TypeRef, dims: &str) {
    for _ in dims.matches('[') {
        ty.simple_name.push_str("[]");
    }
}

//! Default argument values for generated parameter declarations.

use crate::domain::model::TypeRef;

/// Recognized parameter type categories, matched case-sensitively on the simple type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Text,
    Integer,
    Double,
    Long,
    Boolean,
    Other,
}

impl TypeCategory {
    pub fn of(simple_name: &str) -> Self {
        match simple_name {
            "String" => TypeCategory::Text,
            "Integer" | "int" => TypeCategory::Integer,
            "Double" | "double" => TypeCategory::Double,
            "Long" | "long" => TypeCategory::Long,
            "Boolean" | "boolean" => TypeCategory::Boolean,
            _ => TypeCategory::Other,
        }
    }

    /// Default expression for a value of `ty` in this category.
    pub fn default_expression(self, ty: &TypeRef) -> String {
        match self {
            TypeCategory::Text => "\"\"".to_string(),
            TypeCategory::Integer => "1".to_string(),
            TypeCategory::Double => "1.0".to_string(),
            TypeCategory::Long => "1L".to_string(),
            TypeCategory::Boolean => "true".to_string(),
            TypeCategory::Other if ty.is_array() => format!("new {}[0]", ty.base_name()),
            TypeCategory::Other => format!("new {}()", ty.simple_name),
        }
    }
}

pub fn default_value(ty: &TypeRef) -> String {
    TypeCategory::of(&ty.simple_name).default_expression(ty)
}

use serde::Serialize;

/// How a recognized field's value is rendered inside the generated statement.
/// Array rendering is not a strategy of its own; it is selected by the
/// presence of an array length on the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Strategy {
    Scalar,
    Boolean,
    FlagSet,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatRule {
    pub fragment: &'static str,
    pub strategy: Strategy,
}

/// One recognized struct member: declared type, name, and optional fixed
/// array length, with the source position of the type token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub type_name: String,
    pub name:      String,
    pub array_len: Option<usize>,
    pub line:      usize,
    pub column:    usize,
}

/// Per-run emission configuration: the print function to invoke, the
/// expression prefix used to access each field, and the name of the helper
/// that renders flag-set values. The helper is only referenced by name in the
/// generated code; it is never called here.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitContext {
    pub function_name:     String,
    pub object_expression: String,
    pub flag_resolver:     String,
}

impl Default for EmitContext {
    fn default() -> Self {
        EmitContext {
            function_name:     "ImGui::BulletText".to_string(),
            object_expression: "p.limits".to_string(),
            flag_resolver:     "get_vk_sample_count_flag_names".to_string(),
        }
    }
}

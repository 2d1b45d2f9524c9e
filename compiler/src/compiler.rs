use crate::{
    emitter::emit_field,
    error::DumpError,
    tokenizer::tokenize_source,
    types::{EmitContext, Field},
    walker::FieldWalker,
};

/// Compile a struct declaration into the full list of print statements.
/// Returns `Err(DumpError)` if tokenization or field parsing fails.
pub fn generate_statements(text: &str, ctx: &EmitContext) -> Result<Vec<String>, DumpError> {
    let tokens = tokenize_source(text)?;
    let mut statements = Vec::new();
    for field in FieldWalker::new(&tokens) {
        if let Some(statement) = emit_field(&field?, ctx) {
            statements.push(statement);
        }
    }
    Ok(statements)
}

/// Parse a struct declaration into its recognized field descriptors without
/// rendering any statements.
pub fn collect_fields(text: &str) -> Result<Vec<Field>, DumpError> {
    let tokens = tokenize_source(text)?;
    FieldWalker::new(&tokens).collect()
}

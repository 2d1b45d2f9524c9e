use crate::{
    rules::format_rule,
    types::{EmitContext, Field, Strategy},
};

/// Render one recognized field as a single print-call statement, or `None`
/// when no formatting rule is registered for the field's declared type.
/// Array fields repeat the type's format fragment once per element and pass
/// the indexed accesses as arguments, in ascending index order.
pub fn emit_field(field: &Field, ctx: &EmitContext) -> Option<String> {
    let rule = format_rule(&field.type_name)?;

    let statement = if let Some(length) = field.array_len {
        let fragments = vec![rule.fragment; length].join(", ");
        let args: Vec<String> = (0..length)
            .map(|index| format!("{}.{}[{}]", ctx.object_expression, field.name, index))
            .collect();
        format!(
            "{}(\"{} = [{}]\", {});",
            ctx.function_name,
            field.name,
            fragments,
            args.join(", ")
        )
    } else {
        match rule.strategy {
            Strategy::Boolean => format!(
                "{}(\"{} = {}\", {}.{} ? \"true\" : \"false\");",
                ctx.function_name, field.name, rule.fragment, ctx.object_expression, field.name
            ),
            Strategy::FlagSet => format!(
                "{}(\"{} = {}\", {}({}.{}));",
                ctx.function_name, field.name, rule.fragment, ctx.flag_resolver, ctx.object_expression, field.name
            ),
            Strategy::Scalar => format!(
                "{}(\"{} = {}\", {}.{});",
                ctx.function_name, field.name, rule.fragment, ctx.object_expression, field.name
            ),
        }
    };

    Some(statement)
}

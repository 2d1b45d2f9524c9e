#![cfg(test)]

use dumpgen_compiler::{
    collect_fields,
    error::DumpError,
    generate_statements,
    tokenizer::tokenize_source,
    types::EmitContext,
};

const LIMITS_EXCERPT: &str = r#"
typedef struct VkPhysicalDeviceLimits {
    uint32_t              maxImageDimension1D;
    uint32_t              maxComputeWorkGroupCount[3];
    float                 maxSamplerLodBias;
    size_t                minMemoryMapAlignment;
    VkDeviceSize          minTexelBufferOffsetAlignment;
    int32_t               minTexelOffset;
    float                 pointSizeRange[2];
    VkSampleCountFlags    framebufferColorSampleCounts;
    VkBool32              strictLines;
} VkPhysicalDeviceLimits;
"#;

fn ctx() -> EmitContext {
    EmitContext {
        function_name:     "ImGui::BulletText".to_string(),
        object_expression: "p.limits".to_string(),
        flag_resolver:     "get_vk_sample_count_flag_names".to_string(),
    }
}

#[test]
fn test_generate_statements() {
    let statements = generate_statements(LIMITS_EXCERPT, &ctx()).expect("generate_statements failed");

    // `size_t` is not in the rule table, so its field contributes no line;
    // everything else emits exactly one, in declaration order.
    let expected = vec![
        "ImGui::BulletText(\"maxImageDimension1D = %u\", p.limits.maxImageDimension1D);",
        "ImGui::BulletText(\"maxComputeWorkGroupCount = [%u, %u, %u]\", p.limits.maxComputeWorkGroupCount[0], p.limits.maxComputeWorkGroupCount[1], p.limits.maxComputeWorkGroupCount[2]);",
        "ImGui::BulletText(\"maxSamplerLodBias = %0.3f\", p.limits.maxSamplerLodBias);",
        "ImGui::BulletText(\"minTexelBufferOffsetAlignment = %llu\", p.limits.minTexelBufferOffsetAlignment);",
        "ImGui::BulletText(\"minTexelOffset = %d\", p.limits.minTexelOffset);",
        "ImGui::BulletText(\"pointSizeRange = [%0.3f, %0.3f]\", p.limits.pointSizeRange[0], p.limits.pointSizeRange[1]);",
        "ImGui::BulletText(\"framebufferColorSampleCounts = %s\", get_vk_sample_count_flag_names(p.limits.framebufferColorSampleCounts));",
        "ImGui::BulletText(\"strictLines = %s\", p.limits.strictLines ? \"true\" : \"false\");",
    ];
    assert_eq!(statements, expected);
}

#[test]
fn test_collect_fields() {
    let fields = collect_fields(LIMITS_EXCERPT).expect("collect_fields failed");

    assert_eq!(fields.len(), 8);
    assert_eq!(fields[0].type_name, "uint32_t");
    assert_eq!(fields[0].name, "maxImageDimension1D");
    assert_eq!(fields[0].array_len, None);
    assert_eq!(fields[1].name, "maxComputeWorkGroupCount");
    assert_eq!(fields[1].array_len, Some(3));
    assert_eq!(fields[7].type_name, "VkBool32");
    assert_eq!(fields[7].name, "strictLines");

    // The wrapping typedef, braces, and trailing struct name never surface
    // as fields.
    assert!(fields.iter().all(|f| f.name != "VkPhysicalDeviceLimits"));
    assert!(fields.iter().all(|f| f.name != "minMemoryMapAlignment"));
}

#[test]
fn test_tokenize_is_idempotent() {
    let first = tokenize_source(LIMITS_EXCERPT).unwrap();
    let second = tokenize_source(LIMITS_EXCERPT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_is_idempotent() {
    let first = generate_statements(LIMITS_EXCERPT, &ctx()).unwrap();
    let second = generate_statements(LIMITS_EXCERPT, &ctx()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_lex_error_on_preprocessor_directive() {
    let input = "#include <vulkan/vulkan.h>\nuint32_t maxViewports;";
    let err = generate_statements(input, &ctx()).unwrap_err();
    assert!(
        matches!(err, DumpError::LexError { ch: '#', line: 1, column: 1 }),
        "expected a LexError but got {:?}",
        err
    );
}

#[test]
fn test_parse_error_on_unterminated_array() {
    let input = "uint32_t maxViewportDimensions[2";
    let err = generate_statements(input, &ctx()).unwrap_err();
    assert!(matches!(err, DumpError::ParseError { .. }), "got {:?}", err);
}

#[test]
fn test_default_context_targets_imgui() {
    let statements = generate_statements("VkBool32 strictLines;", &EmitContext::default()).unwrap();
    assert_eq!(
        statements,
        vec!["ImGui::BulletText(\"strictLines = %s\", p.limits.strictLines ? \"true\" : \"false\");"]
    );
}

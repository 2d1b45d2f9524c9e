// example/src/main.rs

use dumpgen_compiler::{generate_statements, DumpError, EmitContext};

// The Vulkan 1.0 device-limits struct, verbatim from vulkan_core.h.
const VK_LIMITS_DECL: &str = include_str!("limits.h");

fn main() -> Result<(), DumpError> {
    // Default context: ImGui::BulletText calls against a `p.limits` object,
    // with get_vk_sample_count_flag_names rendering the flag-set fields.
    let ctx = EmitContext::default();

    for statement in generate_statements(VK_LIMITS_DECL, &ctx)? {
        println!("{}", statement);
    }

    Ok(())
}

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::types::{FormatRule, Strategy};

lazy_static! {
    /// Declared-type whitelist. A field whose declared type has no entry here
    /// is skipped by the walker without error.
    pub static ref FORMAT_RULES: HashMap<&'static str, FormatRule> = {
        let mut rules = HashMap::new();
        rules.insert("uint32_t",           FormatRule { fragment: "%u",    strategy: Strategy::Scalar });
        rules.insert("int32_t",            FormatRule { fragment: "%d",    strategy: Strategy::Scalar });
        rules.insert("VkDeviceSize",       FormatRule { fragment: "%llu",  strategy: Strategy::Scalar });
        rules.insert("float",              FormatRule { fragment: "%0.3f", strategy: Strategy::Scalar });
        rules.insert("VkBool32",           FormatRule { fragment: "%s",    strategy: Strategy::Boolean });
        rules.insert("VkSampleCountFlags", FormatRule { fragment: "%s",    strategy: Strategy::FlagSet });
        rules
    };
}

pub fn format_rule(type_name: &str) -> Option<&'static FormatRule> {
    FORMAT_RULES.get(type_name)
}

pub fn is_known_type(type_name: &str) -> bool {
    FORMAT_RULES.contains_key(type_name)
}

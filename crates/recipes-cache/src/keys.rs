//! Cache key generation.
//!
//! Keys are namespaced by the configured prefix so several deployments can
//! share one Redis instance.

fn build_key(prefix: &str, parts: &[&str]) -> String {
    format!("{}:{}", prefix, parts.join(":"))
}

/// Cache keys for recipe data.
pub mod recipes {
    use super::*;

    /// Key holding the full recipe list.
    pub fn list(prefix: &str) -> String {
        build_key(prefix, &["recipes", "list"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_key_is_prefixed() {
        assert_eq!(recipes::list("recipes"), "recipes:recipes:list");
        assert_eq!(recipes::list("staging"), "staging:recipes:list");
    }
}

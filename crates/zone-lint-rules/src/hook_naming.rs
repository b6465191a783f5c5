//! Rule requiring `useX` hook file names.

use std::path::Path;

use zone_lint_core::utils::{base_name, has_extension, in_directory, is_camel_case};
use zone_lint_core::{Category, CheckOutcome, FileContext, Rule, RuleError};

/// Rule name for hook naming.
pub const NAME: &str = "Hook naming";

/// Requires files under `hooks/` to be named `useSomething`.
#[derive(Debug, Clone, Default)]
pub struct HookNaming;

impl HookNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// `useAuth`, `useLocalStorage2`; not `use`, `user`, `useauth`.
fn is_hook_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
        && is_camel_case(name)
}

impl Rule for HookNaming {
    fn name(&self) -> &str {
        NAME
    }

    fn category(&self) -> Category {
        Category::Naming
    }

    fn message(&self) -> &str {
        "Hook files should be named useSomething (e.g. useAuth.ts)"
    }

    fn description(&self) -> &str {
        "Files under hooks/ must start with `use` followed by an uppercase letter"
    }

    fn check(&self, _content: &str, path: &Path) -> Result<CheckOutcome, RuleError> {
        if !in_directory(path, "hooks")
            || !has_extension(path, &[".ts", ".tsx", ".js", ".jsx"])
            || FileContext::detect_index_file(path)
        {
            return Ok(CheckOutcome::Pass);
        }
        let name = base_name(path).ok_or_else(|| RuleError::check("file name is not UTF-8"))?;
        Ok((!is_hook_name(name)).into())
    }
}

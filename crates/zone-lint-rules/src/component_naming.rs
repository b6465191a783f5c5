//! Rule requiring PascalCase component file names.
//!
//! Applies to `.tsx`/`.jsx` files under a `components/` directory. Module
//! index files are exempt.

use std::path::Path;

use zone_lint_core::utils::{base_name, has_extension, in_directory, is_pascal_case};
use zone_lint_core::{Category, CheckOutcome, FileContext, Rule, RuleError};

/// Rule name for component naming.
pub const NAME: &str = "Component naming";

/// Requires component files to be named in PascalCase.
#[derive(Debug, Clone, Default)]
pub struct ComponentNaming;

impl ComponentNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ComponentNaming {
    fn name(&self) -> &str {
        NAME
    }

    fn category(&self) -> Category {
        Category::Naming
    }

    fn message(&self) -> &str {
        "Component files should be named in PascalCase (e.g. UserCard.tsx)"
    }

    fn description(&self) -> &str {
        "Files under components/ with a .tsx or .jsx extension must be PascalCase"
    }

    fn check(&self, _content: &str, path: &Path) -> Result<CheckOutcome, RuleError> {
        if !in_directory(path, "components")
            || !has_extension(path, &[".tsx", ".jsx"])
            || FileContext::detect_index_file(path)
        {
            return Ok(CheckOutcome::Pass);
        }
        let name = base_name(path).ok_or_else(|| RuleError::check("file name is not UTF-8"))?;
        Ok((!is_pascal_case(name)).into())
    }
}

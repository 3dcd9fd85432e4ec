//! Gemfile dependency injection.

use std::path::Path;

use crate::error::ScaffoldError;
use crate::fsops;
use crate::step::DependencyGroup;

/// Render one Bundler dependency line.
pub fn gem_line(name: &str, version: Option<&str>, group: Option<DependencyGroup>) -> String {
    let mut line = format!("gem '{name}'");
    if let Some(version) = version {
        line.push_str(&format!(", '{version}'"));
    }
    if let Some(group) = group {
        line.push_str(&format!(", group: :{}", group.as_str()));
    }
    line.push('\n');
    line
}

/// Append a dependency declaration to the Gemfile, creating the file when
/// the skeleton did not provide one. The recipe never lists a gem twice;
/// duplicate entries are not detected here.
pub fn add_dependency(
    root: &Path,
    name: &str,
    version: Option<&str>,
    group: Option<DependencyGroup>,
) -> Result<(), ScaffoldError> {
    fsops::append_file(&root.join("Gemfile"), &gem_line(name, version, group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_gem_line_variants() {
        assert_eq!(gem_line("unicorn", None, None), "gem 'unicorn'\n");
        assert_eq!(
            gem_line("foreman", None, Some(DependencyGroup::Development)),
            "gem 'foreman', group: :development\n"
        );
        assert_eq!(
            gem_line("compass-rails", Some("~> 2.0.alpha.0"), None),
            "gem 'compass-rails', '~> 2.0.alpha.0'\n"
        );
        assert_eq!(
            gem_line("rails_12factor", None, Some(DependencyGroup::Production)),
            "gem 'rails_12factor', group: :production\n"
        );
    }

    #[test]
    fn test_add_dependency_appends_and_creates() {
        let dir = TempDir::new().unwrap();
        add_dependency(dir.path(), "unicorn", None, None).unwrap();
        add_dependency(dir.path(), "pry", None, None).unwrap();
        let gemfile = std::fs::read_to_string(dir.path().join("Gemfile")).unwrap();
        assert_eq!(gemfile, "gem 'unicorn'\ngem 'pry'\n");
    }
}

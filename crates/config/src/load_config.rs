// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub const DEFAULT_CONFIG_NAME: &str = "polydiv.config.yaml";

/// Where the configuration file path was resolved from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Given with `--config`. The file must exist.
    Explicit(PathBuf),
    /// Found in the working directory or one of its parents.
    Discovered(PathBuf),
    /// The per-user config dir. A missing file here means "use defaults".
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(p)
            | ConfigLocation::Discovered(p)
            | ConfigLocation::Default(p) => p,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ConfigLocation::Explicit(_))
    }
}

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

pub fn resolve_config_location(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: &Path,
    filename: &str,
    cli_file: Option<&Path>,
) -> ConfigLocation {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return ConfigLocation::Explicit(cli_file.to_path_buf());
        }
        return ConfigLocation::Explicit(clean(cwd.join(cli_file)));
    }

    if let Some(found) = find_in_parent(cwd, filename) {
        return ConfigLocation::Discovered(found);
    }

    ConfigLocation::Default(clean(default_config_dir.join(filename)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
        None
    }

    fn found(_: &Path, _: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/work/polydiv.config.yaml"))
    }

    #[test]
    fn test_resolve_falls_back_to_config_dir() {
        let location = resolve_config_location(
            not_found,
            Path::new("/work/sub"),
            Path::new("/home/me/.config/polydiv"),
            DEFAULT_CONFIG_NAME,
            None,
        );

        assert_eq!(
            location,
            ConfigLocation::Default(PathBuf::from("/home/me/.config/polydiv/polydiv.config.yaml"))
        );
        assert!(!location.is_required());
    }

    #[test]
    fn test_resolve_prefers_cli_file() {
        let absolute = resolve_config_location(
            found,
            Path::new("/work/sub"),
            Path::new("/home/me/.config/polydiv"),
            DEFAULT_CONFIG_NAME,
            Some(Path::new("/etc/poly.yaml")),
        );
        assert_eq!(absolute, ConfigLocation::Explicit(PathBuf::from("/etc/poly.yaml")));
        assert!(absolute.is_required());

        let relative = resolve_config_location(
            found,
            Path::new("/work/sub"),
            Path::new("/home/me/.config/polydiv"),
            DEFAULT_CONFIG_NAME,
            Some(Path::new("../conf/poly.yaml")),
        );
        assert_eq!(relative.path(), Path::new("/work/conf/poly.yaml"));
    }

    #[test]
    fn test_resolve_discovers_in_parent() {
        let location = resolve_config_location(
            found,
            Path::new("/work/sub"),
            Path::new("/home/me/.config/polydiv"),
            DEFAULT_CONFIG_NAME,
            None,
        );

        assert_eq!(
            location,
            ConfigLocation::Discovered(PathBuf::from("/work/polydiv.config.yaml"))
        );
    }
}

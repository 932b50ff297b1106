//! Config file discovery

use crate::domain::{
    FileLocations, PRIMARY_CONFIG_FILE_NAME, SECRET_STORE_FILE_NAME,
    SECRET_STORE_PASSWORD_FILE_NAME,
};
use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Well-known project checkout, relative to the home directory.
const HOME_CONFIG_DIR: &str = "IdeaProjects/JetProfile/config";

/// Finds `dev-config.toml` and its sibling KeePass files.
#[derive(Debug, Clone)]
pub struct Locator {
    candidates: Vec<PathBuf>,
}

impl Locator {
    /// Search exactly these paths, in order.
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// `./dev-config.toml`, `./config/dev-config.toml`, then the well-known
    /// checkout under `home` (skipped when there is no home directory).
    pub fn with_default_candidates(home: Option<&Path>) -> Self {
        let mut candidates = vec![
            Path::new(".").join(PRIMARY_CONFIG_FILE_NAME),
            Path::new(".").join("config").join(PRIMARY_CONFIG_FILE_NAME),
        ];
        if let Some(home) = home {
            candidates.push(home.join(HOME_CONFIG_DIR).join(PRIMARY_CONFIG_FILE_NAME));
        }
        Self::new(candidates)
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    pub fn locate(&self) -> Result<FileLocations, ConfigError> {
        let primary_config_path = self.find_primary()?;
        let secret_store_path = find_sibling(&primary_config_path, SECRET_STORE_FILE_NAME)?;
        let secret_store_password_path =
            find_sibling(&primary_config_path, SECRET_STORE_PASSWORD_FILE_NAME)?;

        Ok(FileLocations { primary_config_path, secret_store_path, secret_store_password_path })
    }

    fn find_primary(&self) -> Result<PathBuf, ConfigError> {
        for candidate in &self.candidates {
            if candidate.exists() {
                return Ok(candidate.clone());
            }
            tracing::debug!("No config at {}", candidate.display());
        }
        Err(ConfigError::NotFound {
            name: PRIMARY_CONFIG_FILE_NAME,
            searched: self.candidates.clone(),
        })
    }
}

/// Companion files must live in the same directory as the primary config.
fn find_sibling(primary: &Path, file_name: &'static str) -> Result<PathBuf, ConfigError> {
    let dir = primary.parent().unwrap_or_else(|| Path::new("."));
    let path = dir.join(file_name);
    if path.exists() {
        Ok(path)
    } else {
        Err(ConfigError::NotFound { name: file_name, searched: vec![path] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch_all(dir: &Path) {
        fs::create_dir_all(dir).expect("mkdir");
        for name in
            [PRIMARY_CONFIG_FILE_NAME, SECRET_STORE_FILE_NAME, SECRET_STORE_PASSWORD_FILE_NAME]
        {
            fs::write(dir.join(name), "").expect("write");
        }
    }

    fn candidates_under(root: &Path) -> Vec<PathBuf> {
        vec![
            root.join(PRIMARY_CONFIG_FILE_NAME),
            root.join("config").join(PRIMARY_CONFIG_FILE_NAME),
            root.join("home").join(HOME_CONFIG_DIR).join(PRIMARY_CONFIG_FILE_NAME),
        ]
    }

    #[test]
    fn selects_config_subdirectory_when_only_candidate() {
        let tmp = TempDir::new().expect("tmp");
        touch_all(&tmp.path().join("config"));

        let locations = Locator::new(candidates_under(tmp.path())).locate().expect("locate");
        let dir = tmp.path().join("config");
        assert_eq!(locations.primary_config_path, dir.join(PRIMARY_CONFIG_FILE_NAME));
        assert_eq!(locations.secret_store_path, dir.join(SECRET_STORE_FILE_NAME));
        assert_eq!(locations.secret_store_password_path, dir.join(SECRET_STORE_PASSWORD_FILE_NAME));
    }

    #[test]
    fn earlier_candidate_wins() {
        let tmp = TempDir::new().expect("tmp");
        touch_all(tmp.path());
        touch_all(&tmp.path().join("config"));

        let locations = Locator::new(candidates_under(tmp.path())).locate().expect("locate");
        assert_eq!(locations.primary_config_path, tmp.path().join(PRIMARY_CONFIG_FILE_NAME));
    }

    #[test]
    fn falls_back_to_home_checkout() {
        let tmp = TempDir::new().expect("tmp");
        touch_all(&tmp.path().join("home").join(HOME_CONFIG_DIR));

        let locations = Locator::new(candidates_under(tmp.path())).locate().expect("locate");
        assert!(locations.primary_config_path.ends_with("JetProfile/config/dev-config.toml"));
    }

    #[test]
    fn missing_primary_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = Locator::new(candidates_under(tmp.path())).locate().expect_err("should fail");
        match err {
            ConfigError::NotFound { name, searched } => {
                assert_eq!(name, "dev-config.toml");
                assert_eq!(searched.len(), 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_sibling_names_the_file() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(PRIMARY_CONFIG_FILE_NAME), "").expect("write");
        fs::write(tmp.path().join(SECRET_STORE_FILE_NAME), "").expect("write");

        let err = Locator::new(candidates_under(tmp.path())).locate().expect_err("should fail");
        assert!(matches!(err, ConfigError::NotFound { name: ".password-dev", .. }));
    }

    #[test]
    fn sibling_in_other_candidate_dir_does_not_count() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(PRIMARY_CONFIG_FILE_NAME), "").expect("write");
        touch_all(&tmp.path().join("config"));
        fs::remove_file(tmp.path().join("config").join(PRIMARY_CONFIG_FILE_NAME)).expect("rm");

        let err = Locator::new(candidates_under(tmp.path())).locate().expect_err("should fail");
        assert!(matches!(err, ConfigError::NotFound { name: "dev-config.kdbx", .. }));
    }

    #[test]
    fn default_candidates_skip_missing_home() {
        assert_eq!(Locator::with_default_candidates(None).candidates().len(), 2);

        let locator = Locator::with_default_candidates(Some(Path::new("/home/dev")));
        assert_eq!(
            locator.candidates()[2],
            PathBuf::from("/home/dev/IdeaProjects/JetProfile/config/dev-config.toml")
        );
        assert_eq!(locator.candidates()[1], PathBuf::from("./config/dev-config.toml"));
    }
}

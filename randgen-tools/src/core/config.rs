// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Deployment parameters and where they come from.
//!
//! The parameters are resolved once, up front, and then handed to the
//! [`DeploymentStep`](crate::core::step::DeploymentStep). Nothing here validates them: an absent
//! or malformed value is forwarded as is and surfaces when the deployer binds constructor
//! arguments.

use std::{
    env, fmt,
    path::{Path, PathBuf},
};

/// Environment variable holding the seed constructor argument.
pub const SEED_VAR: &str = "SEED";
/// Environment variable holding the owner constructor argument.
pub const OWNER_VAR: &str = "OWNER";

/// Constructor arguments for the `RandomGenerator` contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeploymentParameters {
    /// Opaque seed token.
    pub seed: Option<String>,
    /// Owner address, as written in the configuration.
    pub owner: Option<String>,
}

impl DeploymentParameters {
    pub fn new(seed: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            seed: Some(seed.into()),
            owner: Some(owner.into()),
        }
    }

    /// Reads `SEED` and `OWNER` from the process environment.
    ///
    /// Variables that are unset or not valid unicode are left as `None`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the parameters through `lookup`, which is only ever asked for `SEED` and `OWNER`.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR);
        let owner = lookup(OWNER_VAR);
        Self { seed, owner }
    }

    /// Constructor arguments in declaration order: `(seed, owner)`.
    pub fn constructor_args(&self) -> Vec<Option<String>> {
        vec![self.seed.clone(), self.owner.clone()]
    }

    /// Names of the variables that did not resolve to a value.
    pub fn missing(&self) -> Vec<&'static str> {
        [(SEED_VAR, &self.seed), (OWNER_VAR, &self.owner)]
            .into_iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name)
            .collect()
    }
}

impl fmt::Display for DeploymentParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNSET: &str = "<unset>";
        writeln!(f, "{SEED_VAR}: {}", self.seed.as_deref().unwrap_or(UNSET))?;
        write!(f, "{OWNER_VAR}: {}", self.owner.as_deref().unwrap_or(UNSET))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },
    #[error("could not read current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// Loads a `.env` file into the process environment.
///
/// With an explicit `path` the file must exist. Otherwise `.env` is searched for from the current
/// directory upward, and not finding one is fine. Variables already set in the environment are
/// not overridden. Returns the path of the file that was loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => {
            dotenv::from_path(path).map_err(|source| ConfigError::EnvFile {
                path: path.to_owned(),
                source,
            })?;
            Ok(Some(path.to_owned()))
        }
        None => {
            let cwd = env::current_dir().map_err(ConfigError::CurrentDir)?;
            match find_env_file(&cwd) {
                Some(found) => load_env_file(Some(&found)),
                None => Ok(None),
            }
        }
    }
}

/// First `.env` file in `start` or one of its ancestors.
fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write};

    use super::*;

    #[test]
    fn lookup_only_asks_for_seed_and_owner() {
        let vars = HashMap::from([
            ("SEED", "123"),
            ("OWNER", "0xABC"),
            ("PRIVATE_KEY", "0xdead"),
        ]);
        let mut asked = Vec::new();
        let params = DeploymentParameters::from_lookup(|key| {
            asked.push(key.to_owned());
            vars.get(key).map(|v| v.to_string())
        });
        assert_eq!(asked, vec!["SEED", "OWNER"]);
        assert_eq!(params, DeploymentParameters::new("123", "0xABC"));
        assert!(params.missing().is_empty());
    }

    #[test]
    fn absent_values_stay_absent() {
        let params = DeploymentParameters::from_lookup(|key| (key == "OWNER").then(String::new));
        assert_eq!(params.seed, None);
        assert_eq!(params.owner.as_deref(), Some(""));
        assert_eq!(params.missing(), vec!["SEED"]);
        assert_eq!(params.constructor_args(), vec![None, Some(String::new())]);
    }

    #[test]
    fn display_marks_unset() {
        let params = DeploymentParameters {
            seed: Some("7".to_owned()),
            owner: None,
        };
        assert_eq!(params.to_string(), "SEED: 7\nOWNER: <unset>");
    }

    #[test]
    fn explicit_env_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.env");
        let err = load_env_file(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.env"));
    }

    #[test]
    fn env_file_is_found_in_an_ancestor() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("contracts").join("random");
        std::fs::create_dir_all(&nested).unwrap();

        let env_file = root.path().join(".env");
        std::fs::write(&env_file, "NOT A VALID LINE\n").unwrap();
        assert_eq!(find_env_file(&nested), Some(env_file.clone()));
        // a directory named .env is skipped
        std::fs::create_dir(nested.join(".env")).unwrap();
        assert_eq!(find_env_file(&nested), Some(env_file.clone()));

        let err = load_env_file(find_env_file(&nested).as_deref()).unwrap_err();
        let shown = format!("failed to load env file {}", env_file.display());
        assert!(err.to_string().starts_with(&shown), "{err}");
    }

    #[test]
    fn explicit_env_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "RANDGEN_TOOLS_TEST_ENV_FILE=loaded").unwrap();
        let loaded = load_env_file(Some(file.path())).unwrap();
        assert_eq!(loaded.as_deref(), Some(file.path()));
        assert_eq!(
            env::var("RANDGEN_TOOLS_TEST_ENV_FILE").as_deref(),
            Ok("loaded")
        );
    }
}

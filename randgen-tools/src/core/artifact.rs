// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Artifacts are the JSON files a contract build writes to its build directory, one per
//! contract, named `<ContractName>.json`. Only the fields needed to deploy are read.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

/// Default location of compiled artifacts, relative to the project root.
pub const DEFAULT_BUILD_DIR: &str = "build/contracts";

/// Name of the random generator contract artifact.
pub const RANDOM_GENERATOR: &str = "RandomGenerator";

/// Named reference to an artifact, resolved by an [`ArtifactRegistry`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn random_generator() -> Self {
        Self::new(RANDOM_GENERATOR)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A compiled contract: its interface and creation bytecode.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact {name} not found at {}", .path.display())]
    NotFound { name: String, path: PathBuf },
    #[error("failed to read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed artifact {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("artifact {0} has no bytecode (is it an interface or abstract contract?)")]
    EmptyBytecode(String),
    #[error("artifact at {} is for contract {found}, expected {expected}", .path.display())]
    NameMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
}

/// Looks up artifacts by name in a build directory.
#[derive(Clone, Debug)]
pub struct ArtifactRegistry {
    build_dir: PathBuf,
}

impl Default for ArtifactRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_DIR)
    }
}

impl ArtifactRegistry {
    pub fn new(build_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
        }
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// Path the artifact for `artifact` is expected at.
    pub fn path_of(&self, artifact: &ArtifactRef) -> PathBuf {
        self.build_dir.join(format!("{}.json", artifact.name()))
    }

    /// Loads and checks the artifact named by `artifact`.
    pub fn require(&self, artifact: &ArtifactRef) -> Result<Artifact, ArtifactError> {
        let path = self.path_of(artifact);
        debug!(@grey, "reading artifact {} from {}", artifact, path.display());
        let contents = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ArtifactError::NotFound {
                name: artifact.name().to_owned(),
                path: path.clone(),
            },
            _ => ArtifactError::Read {
                path: path.clone(),
                source,
            },
        })?;
        let parsed: Artifact =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Malformed {
                path: path.clone(),
                source,
            })?;
        if parsed.contract_name != artifact.name() {
            return Err(ArtifactError::NameMismatch {
                path,
                expected: artifact.name().to_owned(),
                found: parsed.contract_name,
            });
        }
        if parsed.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(parsed.contract_name));
        }
        Ok(parsed)
    }
}

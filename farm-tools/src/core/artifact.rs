// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Both the Hardhat layout (`artifacts/contracts/<Source>.sol/<Name>.json` with a hex
//! `bytecode` string) and the Foundry layout (`out/<Source>.sol/<Name>.json` with a
//! `bytecode.object` string) are understood.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use eyre::{bail, WrapErr};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default)]
    pub contract_name: Option<String>,
    pub abi: JsonAbi,
    bytecode: Bytecode,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Bytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

impl Artifact {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Contract creation code, without constructor arguments.
    pub fn bytecode(&self) -> &Bytes {
        match &self.bytecode {
            Bytecode::Hex(bytes) => bytes,
            Bytecode::Object { object } => object,
        }
    }

    /// Creation code followed by the ABI-encoded constructor arguments.
    pub fn initcode(&self, args: &[String]) -> eyre::Result<Vec<u8>> {
        let mut initcode = self.bytecode().to_vec();
        initcode.extend(encode_constructor_args(&self.abi, args)?);
        Ok(initcode)
    }
}

/// Encodes textual constructor arguments according to the constructor in `abi`.
pub fn encode_constructor_args(abi: &JsonAbi, args: &[String]) -> eyre::Result<Vec<u8>> {
    let Some(constructor) = abi.constructor() else {
        if !args.is_empty() {
            bail!(
                "contract has no constructor, but {} argument(s) were given",
                args.len()
            );
        }
        return Ok(Vec::new());
    };
    if args.len() != constructor.inputs.len() {
        bail!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            constructor.inputs,
            constructor.inputs.len(),
            args.len(),
        );
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let ty = param
            .resolve()
            .wrap_err_with(|| format!("could not resolve constructor arg: {param}"))?;
        let value = ty
            .coerce_str(arg)
            .wrap_err_with(|| format!("could not parse constructor arg: {param}"))?;
        values.push(value);
    }
    Ok(constructor.abi_encode_input_raw(&values)?)
}

/// Directory tree holding compiled artifacts.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds the single artifact file named `<name>.json` anywhere below the root.
    pub fn find(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        let pattern = format!("{}/**/{name}.json", self.root.display());
        let mut found = Vec::new();
        for entry in glob::glob(&pattern)? {
            found.push(entry?);
        }
        match found.len() {
            0 => Err(ArtifactError::NotFound {
                name: name.to_owned(),
                root: self.root.clone(),
            }),
            1 => Ok(found.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_owned(),
                paths: found,
            }),
        }
    }

    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let path = self.find(name)?;
        debug!(@grey, "loading artifact {}", path.display());
        let json = fs::read_to_string(&path)?;
        let artifact =
            Artifact::from_json(&json).map_err(|source| ArtifactError::Json { path, source })?;
        if artifact.bytecode().is_empty() {
            return Err(ArtifactError::EmptyBytecode(name.to_owned()));
        }
        Ok(artifact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid artifact pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("failed to read artifact directory: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("no artifact for contract \"{name}\" under {}", .root.display())]
    NotFound { name: String, root: PathBuf },
    #[error("multiple artifacts for contract \"{name}\": {paths:?}")]
    Ambiguous { name: String, paths: Vec<PathBuf> },
    #[error("malformed artifact {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact for \"{0}\" has no bytecode (abstract contract or interface?)")]
    EmptyBytecode(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/artifacts");

    const CONSTRUCTOR_ABI: &str = r#"[
        {
            "type": "constructor",
            "stateMutability": "nonpayable",
            "inputs": [
                { "name": "rewardRate", "type": "uint256", "internalType": "uint256" },
                { "name": "token", "type": "address", "internalType": "address" }
            ]
        }
    ]"#;

    #[test]
    fn loads_hardhat_artifact() {
        let store = ArtifactStore::new(FIXTURES);
        let artifact = store.load("YieldFarming").unwrap();
        assert_eq!(artifact.contract_name.as_deref(), Some("YieldFarming"));
        assert!(artifact.abi.constructor().is_none());
        assert_eq!(artifact.bytecode().len(), 22);
        // no constructor means the initcode is the bytecode as-is
        assert_eq!(artifact.initcode(&[]).unwrap(), artifact.bytecode().to_vec());
    }

    #[test]
    fn loads_foundry_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Token.sol");
        fs::create_dir_all(&out).unwrap();
        fs::write(
            out.join("Token.json"),
            r#"{ "abi": [], "bytecode": { "object": "0x6001600c60003960016000f300", "linkReferences": {} } }"#,
        )
        .unwrap();

        let artifact = ArtifactStore::new(dir.path()).load("Token").unwrap();
        assert_eq!(artifact.contract_name, None);
        assert_eq!(artifact.bytecode().len(), 13);
    }

    #[test]
    fn missing_artifact() {
        let store = ArtifactStore::new(FIXTURES);
        let err = store.load("Nope").unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound { name, .. } if name == "Nope"));
    }

    #[test]
    fn debug_files_are_not_artifacts() {
        // YieldFarming.dbg.json sits next to YieldFarming.json in the fixture tree
        let store = ArtifactStore::new(FIXTURES);
        let path = store.find("YieldFarming").unwrap();
        assert!(path.ends_with("YieldFarming.sol/YieldFarming.json"));
    }

    #[test]
    fn ambiguous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        for source in ["A.sol", "B.sol"] {
            let path = dir.path().join(source);
            fs::create_dir_all(&path).unwrap();
            fs::write(path.join("Pool.json"), r#"{ "abi": [], "bytecode": "0x00" }"#).unwrap();
        }
        let err = ArtifactStore::new(dir.path()).find("Pool").unwrap_err();
        assert!(matches!(err, ArtifactError::Ambiguous { paths, .. } if paths.len() == 2));
    }

    #[test]
    fn empty_bytecode_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("IFarm.json"),
            r#"{ "contractName": "IFarm", "abi": [], "bytecode": "0x" }"#,
        )
        .unwrap();
        let err = ArtifactStore::new(dir.path()).load("IFarm").unwrap_err();
        assert!(matches!(err, ArtifactError::EmptyBytecode(_)));
    }

    #[test]
    fn encodes_constructor_args() {
        let abi: JsonAbi = serde_json::from_str(CONSTRUCTOR_ABI).unwrap();
        let args = vec![
            "100".to_owned(),
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_owned(),
        ];
        let encoded = encode_constructor_args(&abi, &args).unwrap();
        assert_eq!(encoded.len(), 64);
        assert_eq!(encoded[31], 100);
        let token = alloy::hex::decode("70997970C51812dc3A010C7d01b50e0d17dc79C8").unwrap();
        assert_eq!(encoded[44..64], token[..]);
    }

    #[test]
    fn constructor_arg_count_must_match() {
        let abi: JsonAbi = serde_json::from_str(CONSTRUCTOR_ABI).unwrap();
        let err = encode_constructor_args(&abi, &["100".to_owned()]).unwrap_err();
        assert!(err.to_string().contains("mismatch number of constructor arguments"));

        let no_constructor = JsonAbi::default();
        assert!(encode_constructor_args(&no_constructor, &[]).unwrap().is_empty());
        assert!(encode_constructor_args(&no_constructor, &["1".to_owned()]).is_err());
    }

    #[test]
    fn unparsable_constructor_arg() {
        let abi: JsonAbi = serde_json::from_str(CONSTRUCTOR_ABI).unwrap();
        let args = vec!["lots".to_owned(), "0x00".to_owned()];
        let err = encode_constructor_args(&abi, &args).unwrap_err();
        assert!(err.to_string().contains("could not parse constructor arg"));
    }
}

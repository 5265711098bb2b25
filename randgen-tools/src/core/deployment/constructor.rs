// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Binding constructor arguments to an artifact's constructor.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::{Constructor, StateMutability},
    primitives::U256,
};

use super::DeploymentError;
use crate::core::artifact::Artifact;

/// Builds contract creation code: the artifact bytecode followed by the ABI-encoded constructor
/// arguments.
///
/// Arguments are given as strings and coerced to the constructor's parameter types. A `None`
/// argument cannot be bound and is reported as [`DeploymentError::MissingConstructorArg`].
pub fn init_code(
    artifact: &Artifact,
    args: &[Option<String>],
    value: U256,
) -> Result<Vec<u8>, DeploymentError> {
    let mut code = artifact.bytecode.to_vec();
    match artifact.abi.constructor() {
        Some(constructor) => code.extend(encode_args(constructor, args, value)?),
        None if args.is_empty() && value.is_zero() => {}
        None => {
            return Err(DeploymentError::InvalidConstructor(format!(
                "{} has no constructor but {} argument(s) and {} wei were given",
                artifact.contract_name,
                args.len(),
                value,
            )))
        }
    }
    Ok(code)
}

fn encode_args(
    constructor: &Constructor,
    args: &[Option<String>],
    value: U256,
) -> Result<Vec<u8>, DeploymentError> {
    if constructor.state_mutability != StateMutability::Payable && !value.is_zero() {
        return Err(DeploymentError::InvalidConstructor(
            "attempting to send Ether to non-payable constructor".to_string(),
        ));
    }
    if args.len() != constructor.inputs.len() {
        return Err(DeploymentError::InvalidConstructor(format!(
            "mismatch number of constructor arguments (want ({}); got {})",
            constructor
                .inputs
                .iter()
                .map(|param| param.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(args.len());
    for (arg, param) in args.iter().zip(constructor.inputs.iter()) {
        let arg = arg
            .as_deref()
            .ok_or_else(|| DeploymentError::MissingConstructorArg {
                name: param.name.clone(),
                ty: param.ty.clone(),
            })?;
        let ty = param
            .resolve()
            .map_err(|err| DeploymentError::InvalidConstructor(format!("{param}: {err}")))?;
        let value = ty
            .coerce_str(arg)
            .map_err(|err| DeploymentError::InvalidConstructorArg {
                name: param.name.clone(),
                ty: param.ty.clone(),
                arg: arg.to_owned(),
                reason: err.to_string(),
            })?;
        values.push(value);
    }

    Ok(constructor.abi_encode_input_raw(&values)?)
}

#[cfg(test)]
mod tests {
    use alloy::{
        json_abi::JsonAbi,
        primitives::{address, Bytes},
    };

    use super::*;

    fn artifact(signature: Option<&str>) -> Artifact {
        let abi = JsonAbi {
            constructor: signature.map(|sig| Constructor::parse(sig).unwrap()),
            ..Default::default()
        };
        Artifact {
            contract_name: "RandomGenerator".to_owned(),
            abi,
            bytecode: Bytes::from_static(&[0x60, 0x80]),
        }
    }

    fn args(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_owned)).collect()
    }

    #[test]
    fn appends_encoded_args_to_bytecode() {
        let artifact = artifact(Some("constructor(uint256 seed, address owner)"));
        let owner = address!("0x3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E");
        let owner_arg = owner.to_string();
        let code = init_code(
            &artifact,
            &args(&[Some("123"), Some(owner_arg.as_str())]),
            U256::ZERO,
        )
        .unwrap();

        assert_eq!(code.len(), 2 + 64);
        assert_eq!(&code[..2], &[0x60, 0x80]);
        assert_eq!(&code[2..34], &U256::from(123).to_be_bytes::<32>());
        assert_eq!(&code[34..46], &[0u8; 12]);
        assert_eq!(&code[46..66], owner.as_slice());
    }

    #[test]
    fn missing_arg_fails_binding() {
        let artifact = artifact(Some("constructor(uint256 seed, address owner)"));
        let err = init_code(&artifact, &args(&[Some("123"), None]), U256::ZERO).unwrap_err();
        match err {
            DeploymentError::MissingConstructorArg { name, ty } => {
                assert_eq!(name, "owner");
                assert_eq!(ty, "address");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn uncoercible_arg_fails_binding() {
        let artifact = artifact(Some("constructor(uint256 seed, address owner)"));
        let err = init_code(&artifact, &args(&[Some("123"), Some("0xABC")]), U256::ZERO)
            .unwrap_err();
        match err {
            DeploymentError::InvalidConstructorArg { arg, .. } => assert_eq!(arg, "0xABC"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn arg_count_must_match() {
        let artifact = artifact(Some("constructor(uint256 seed)"));
        let err = init_code(&artifact, &args(&[Some("1"), Some("2")]), U256::ZERO).unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[test]
    fn value_requires_payable_constructor() {
        let non_payable = artifact(Some("constructor(uint256 seed)"));
        let err = init_code(&non_payable, &args(&[Some("1")]), U256::from(1)).unwrap_err();
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));

        let payable = artifact(Some("constructor(uint256 seed) payable"));
        assert!(init_code(&payable, &args(&[Some("1")]), U256::from(1)).is_ok());
    }

    #[test]
    fn no_constructor() {
        let artifact = artifact(None);
        assert_eq!(init_code(&artifact, &[], U256::ZERO).unwrap(), vec![0x60, 0x80]);
        assert!(init_code(&artifact, &args(&[Some("1")]), U256::ZERO).is_err());
    }
}

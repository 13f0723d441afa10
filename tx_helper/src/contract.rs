//! Read-only contract calls encoded and decoded through an ABI definition

use alloy::{
    dyn_abi::{DynSolType, DynSolValue, FunctionExt, JsonAbiExt, Specifier},
    eips::BlockNumberOrTag,
    json_abi::{Function, JsonAbi},
};
use alloy_primitives::{Address, Bytes, B256, I256, U256};
use alloy_sol_types::SolCall;

use crate::utils::{
    common::call_request,
    error::{HelperError, HelperResult},
    evm_rpc::EthRpc,
};

/// Call argument. The bit width of numbers and fixed bytes is taken from the ABI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiValue {
    Int(I256),
    Uint(U256),
    Address(Address),
    Bool(bool),
    Bytes(Vec<u8>),
    FixedBytes(Vec<u8>),
    String(String),
    Array(Vec<AbiValue>),
    /// Struct argument, members in declaration order
    Tuple(Vec<AbiValue>),
}

impl AbiValue {
    fn into_dyn(self, ty: &DynSolType) -> HelperResult<DynSolValue> {
        let value = match (self, ty) {
            (AbiValue::Int(value), DynSolType::Int(size)) => {
                // bits needed besides the sign bit
                let magnitude = if value.is_negative() {
                    (value + I256::ONE).unsigned_abs()
                } else {
                    value.unsigned_abs()
                };
                if magnitude.bit_len() >= *size {
                    return Err(HelperError::Abi(format!("{} does not fit in int{}", value, size)));
                }
                DynSolValue::Int(value, *size)
            }
            (AbiValue::Uint(value), DynSolType::Uint(size)) => {
                if value.bit_len() > *size {
                    return Err(HelperError::Abi(format!("{} does not fit in uint{}", value, size)));
                }
                DynSolValue::Uint(value, *size)
            }
            (AbiValue::Address(value), DynSolType::Address) => DynSolValue::Address(value),
            (AbiValue::Bool(value), DynSolType::Bool) => DynSolValue::Bool(value),
            (AbiValue::Bytes(value), DynSolType::Bytes) => DynSolValue::Bytes(value),
            (AbiValue::String(value), DynSolType::String) => DynSolValue::String(value),
            (AbiValue::FixedBytes(value), DynSolType::FixedBytes(size)) => {
                if value.len() != *size {
                    return Err(HelperError::Abi(format!(
                        "expected {} bytes, got {}",
                        size,
                        value.len()
                    )));
                }
                DynSolValue::FixedBytes(B256::right_padding_from(&value), *size)
            }
            (AbiValue::Array(values), DynSolType::Array(inner)) => DynSolValue::Array(
                values
                    .into_iter()
                    .map(|value| value.into_dyn(inner))
                    .collect::<HelperResult<_>>()?,
            ),
            (AbiValue::Array(values), DynSolType::FixedArray(inner, len)) => {
                if values.len() != *len {
                    return Err(HelperError::Abi(format!(
                        "expected {} array items, got {}",
                        len,
                        values.len()
                    )));
                }
                DynSolValue::FixedArray(
                    values
                        .into_iter()
                        .map(|value| value.into_dyn(inner))
                        .collect::<HelperResult<_>>()?,
                )
            }
            (AbiValue::Tuple(values), DynSolType::Tuple(types))
            | (AbiValue::Array(values), DynSolType::Tuple(types)) => {
                if values.len() != types.len() {
                    return Err(HelperError::Abi(format!(
                        "expected {} tuple members, got {}",
                        types.len(),
                        values.len()
                    )));
                }
                DynSolValue::Tuple(
                    values
                        .into_iter()
                        .zip(types)
                        .map(|(value, ty)| value.into_dyn(ty))
                        .collect::<HelperResult<_>>()?,
                )
            }
            (value, ty) => {
                return Err(HelperError::Abi(format!(
                    "{:?} can not be encoded as {}",
                    value,
                    ty.sol_type_name()
                )))
            }
        };

        Ok(value)
    }
}

/// Picks the overload of `method` taking `arg_count` arguments.
fn find_function<'a>(abi: &'a JsonAbi, method: &str, arg_count: usize) -> HelperResult<&'a Function> {
    abi.function(method)
        .and_then(|overloads| overloads.iter().find(|f| f.inputs.len() == arg_count))
        .ok_or_else(|| {
            HelperError::Abi(format!(
                "method {} with {} argument(s) not found in abi",
                method, arg_count
            ))
        })
}

/// ABI-encodes the call data (selector included) of `method`.
pub fn pack(function: &Function, args: Vec<AbiValue>) -> HelperResult<Bytes> {
    let values = function
        .inputs
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ty = param
                .resolve()
                .map_err(|err| HelperError::Abi(err.to_string()))?;
            arg.into_dyn(&ty)
        })
        .collect::<HelperResult<Vec<_>>>()?;

    function
        .abi_encode_input(&values)
        .map(Bytes::from)
        .map_err(|err| HelperError::Abi(format!("failed to pack {}: {}", function.name, err)))
}

/// ABI-decodes the output of `method`.
pub fn unpack(function: &Function, data: &[u8]) -> HelperResult<Vec<DynSolValue>> {
    function.abi_decode_output(data).map_err(|err| {
        HelperError::Abi(format!(
            "failed to unpack {} output 0x{}: {}",
            function.name,
            hex::encode(data),
            err
        ))
    })
}

/// Calls `method` of the contract at `address` at the given block, without a transaction.
pub async fn contract_function_call(
    rpc: &dyn EthRpc,
    address: Address,
    abi: &JsonAbi,
    block: BlockNumberOrTag,
    method: &str,
    args: Vec<AbiValue>,
) -> HelperResult<Vec<DynSolValue>> {
    let function = find_function(abi, method, args.len())?;
    let data = pack(function, args)?;

    let output = match rpc
        .call(call_request(None, Some(address), U256::ZERO, data), block)
        .await
    {
        Ok(output) => output,
        Err(mut err) => {
            err.add_context(format!("calling {} on {}", method, address));
            return Err(err);
        }
    };

    unpack(function, &output)
}

pub async fn contract_function_call_no_arguments(
    rpc: &dyn EthRpc,
    address: Address,
    abi: &JsonAbi,
    block: BlockNumberOrTag,
    method: &str,
) -> HelperResult<Vec<DynSolValue>> {
    contract_function_call(rpc, address, abi, block, method, Vec::new()).await
}

/// Returns `T` from Solidity struct.
pub fn decode_abi_response<T, F: SolCall<Return = T>>(data: &[u8]) -> HelperResult<T> {
    F::abi_decode_returns(data).map_err(|err| HelperError::Decoding(err.to_string()))
}

/// Typed read-only call through a `sol!` generated call struct.
pub async fn sol_call<C: SolCall + Send + Sync>(
    rpc: &dyn EthRpc,
    address: Address,
    block: BlockNumberOrTag,
    call: &C,
) -> HelperResult<C::Return> {
    let data = Bytes::from(call.abi_encode());

    let output = match rpc
        .call(call_request(None, Some(address), U256::ZERO, data), block)
        .await
    {
        Ok(output) => output,
        Err(mut err) => {
            err.add_context(format!("calling {} on {}", C::SIGNATURE, address));
            return Err(err);
        }
    };

    decode_abi_response::<C::Return, C>(&output)
}

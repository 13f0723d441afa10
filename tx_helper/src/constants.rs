//! Tx Helper's Constants

/// Fallback tip (max priority fee per gas) in wei, applied when the configured tip is `<= 0`.
///
/// Tuned for Ethereum mainnet. On L2 networks it is far above the base fee, and since
/// the total prepaid cost is `gas_limit * (2 * base_fee + tip)`, it can exceed the value being
/// transferred and fail with "insufficient funds for gas * price + value".
/// Pass an explicit tip on L2s, see [`L2_RECOMMENDED_GAS_TIP_CAP`].
pub const DEFAULT_GAS_TIP_CAP: u128 = 2_000_000_000; // 2 gwei

/// Tip recommended for L2 networks (Base, Arbitrum, Optimism...)
pub const L2_RECOMMENDED_GAS_TIP_CAP: i64 = 100_000_000; // 0.1 gwei

/// `max_fee_per_gas = BASE_FEE_MULTIPLIER * base_fee + tip`
/// Doubling the base fee keeps the transaction marketable for six consecutive 100% full blocks.
pub const BASE_FEE_MULTIPLIER: u128 = 2;

/// How long to wait for a transaction to be mined, in seconds
pub const DEFAULT_RECEIPT_TIMEOUT_SECS: u64 = 300;

/// Delay between two receipt polls, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MILLIS: u64 = 1_000;

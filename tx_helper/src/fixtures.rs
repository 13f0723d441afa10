//! Receipts recreated from real Sushi V3 transactions on Base, used as test data.

use alloy::{
    consensus::{Eip658Value, Receipt, ReceiptEnvelope, ReceiptWithBloom},
    rpc::types::{Log, TransactionReceipt},
};
use alloy_primitives::{address, b256, Address, Bloom, Bytes, LogData, B256, U256};
use alloy_sol_types::{sol, SolEvent};

sol! {
    event Transfer(address indexed from, address indexed to, uint256 value);
    event Approval(address indexed owner, address indexed spender, uint256 value);
    event Mint(address sender, address indexed owner, int24 indexed tickLower, int24 indexed tickUpper, uint128 amount, uint256 amount0, uint256 amount1);
    event Burn(address indexed owner, int24 indexed tickLower, int24 indexed tickUpper, uint128 amount, uint256 amount0, uint256 amount1);
    event IncreaseLiquidity(uint256 indexed tokenId, uint128 liquidity, uint256 amount0, uint256 amount1);
    event DecreaseLiquidity(uint256 indexed tokenId, uint128 liquidity, uint256 amount0, uint256 amount1);
}

pub const USDC: Address = address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
pub const AXL_USDC: Address = address!("0xEB466342C4d449BC9f53A865D5Cb90586f405215");
pub const WETH: Address = address!("0x4200000000000000000000000000000000000006");
pub const USDC_AXL_USDC_POOL: Address = address!("0x9EFe71955931C31c1c63395Df11063289332bF8b");
pub const ETH_USDC_POOL: Address = address!("0x57713F7716e0b0F65ec116912F834E49805480d2");
pub const POSITION_MANAGER: Address = address!("0x80C7DD17B01855a6D2347444a0FCC36136a314de");
pub const WALLET: Address = address!("0x35976f39BCe40Ce858fB66360c49231E6B8Ee4A1");

const MINT_TX: B256 = b256!("0x95c53b8314e782b73942f9bab9afaefbcef5b44d88b3ee40c764d6b0ae41646d");
const MINT_BLOCK: B256 = b256!("0x6c10cbca8a2ec7fc0a26a36c7b12d34b49d77dd85c1e3484791a4c29c3f3b532");
const CLOSE_TX: B256 = b256!("0x5ac58019d20d412cb9cc6ed6d7218d0416b45f801ef2a1bfc1614c8b4b0ffd47");
const CLOSE_BLOCK: B256 = b256!("0x2a07791dc22682dab6f458df8a8c7cf16fb4dc1da39629085783952094fc4b6c");

/// Left-pads a word the way indexed parameters are stored in topics
pub fn word(value: u64) -> B256 {
    B256::from(U256::from(value))
}

fn data(hex: &str) -> Bytes {
    hex.parse().expect("valid hex fixture")
}

struct LogPosition {
    tx_hash: B256,
    block_hash: B256,
    block_number: u64,
}

impl LogPosition {
    fn log(&self, address: Address, topics: Vec<B256>, data: Bytes, index: u64) -> Log {
        Log {
            inner: alloy_primitives::Log {
                address,
                data: LogData::new_unchecked(topics, data),
            },
            block_hash: Some(self.block_hash),
            block_number: Some(self.block_number),
            block_timestamp: None,
            transaction_hash: Some(self.tx_hash),
            transaction_index: Some(1),
            log_index: Some(index),
            removed: false,
        }
    }
}

fn receipt(
    position: &LogPosition,
    logs: Vec<Log>,
    cumulative_gas_used: u64,
    gas_used: u64,
    effective_gas_price: u128,
) -> TransactionReceipt {
    TransactionReceipt {
        inner: ReceiptEnvelope::Eip1559(ReceiptWithBloom {
            receipt: Receipt {
                status: Eip658Value::Eip658(true),
                cumulative_gas_used,
                logs,
            },
            logs_bloom: Bloom::ZERO,
        }),
        transaction_hash: position.tx_hash,
        transaction_index: Some(1),
        block_hash: Some(position.block_hash),
        block_number: Some(position.block_number),
        gas_used,
        effective_gas_price,
        blob_gas_used: None,
        blob_gas_price: None,
        from: WALLET,
        to: Some(POSITION_MANAGER),
        contract_address: None,
    }
}

/// Logs of a USDC + axlUSDC position mint (no native token)
/// https://basescan.org/tx/0x95c53b8314e782b73942f9bab9afaefbcef5b44d88b3ee40c764d6b0ae41646d#eventlog
pub fn mint_usdc_axlusdc_logs() -> Vec<Log> {
    let position = LogPosition {
        tx_hash: MINT_TX,
        block_hash: MINT_BLOCK,
        block_number: 19_206_086,
    };

    vec![
        position.log(
            USDC,
            vec![
                Transfer::SIGNATURE_HASH,
                WALLET.into_word(),
                USDC_AXL_USDC_POOL.into_word(),
            ],
            data("0x00000000000000000000000000000000000000000000000000000000000d9b40"), // 891712
            0,
        ),
        position.log(
            AXL_USDC,
            vec![
                Approval::SIGNATURE_HASH,
                WALLET.into_word(),
                POSITION_MANAGER.into_word(),
            ],
            data("0x0000000000000000000000000000000000000000000000000000000000000000"),
            1,
        ),
        position.log(
            AXL_USDC,
            vec![
                Transfer::SIGNATURE_HASH,
                WALLET.into_word(),
                USDC_AXL_USDC_POOL.into_word(),
            ],
            data("0x00000000000000000000000000000000000000000000000000000000000f4cec"), // 1002732
            2,
        ),
        position.log(
            USDC_AXL_USDC_POOL,
            vec![
                Mint::SIGNATURE_HASH,
                POSITION_MANAGER.into_word(),
                word(0x16),
                word(0x20),
            ],
            data("0x00000000000000000000000080c7dd17b01855a6d2347444a0fcc36136a314de00000000000000000000000000000000000000000000000000000000e1db69fc00000000000000000000000000000000000000000000000000000000000d9b4000000000000000000000000000000000000000000000000000000000000f4cec"),
            3,
        ),
        position.log(
            POSITION_MANAGER,
            vec![
                Transfer::SIGNATURE_HASH,
                B256::ZERO,
                WALLET.into_word(),
                word(0xe3df),
            ],
            Bytes::new(),
            4,
        ),
        position.log(
            POSITION_MANAGER,
            vec![IncreaseLiquidity::SIGNATURE_HASH, word(0xe3df)],
            data("0x00000000000000000000000000000000000000000000000000000000e1db69fc00000000000000000000000000000000000000000000000000000000000d9b4000000000000000000000000000000000000000000000000000000000000f4cec"),
            5,
        ),
    ]
}

pub fn mint_usdc_axlusdc_receipt() -> TransactionReceipt {
    let position = LogPosition {
        tx_hash: MINT_TX,
        block_hash: MINT_BLOCK,
        block_number: 19_206_086,
    };
    receipt(
        &position,
        mint_usdc_axlusdc_logs(),
        535_880,
        492_053,
        2_006_033_430,
    )
}

/// Logs of an ETH + USDC position close
/// https://basescan.org/tx/0x5ac58019d20d412cb9cc6ed6d7218d0416b45f801ef2a1bfc1614c8b4b0ffd47#eventlog
pub fn close_eth_usdc_logs() -> Vec<Log> {
    let position = LogPosition {
        tx_hash: CLOSE_TX,
        block_hash: CLOSE_BLOCK,
        block_number: 19_163_726,
    };
    let tick_lower = b256!("0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffcf36a");
    let tick_upper = b256!("0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd01ac");
    let amounts = "0x0000000000000000000000000000000000000000000000000000006a8c7a04840000000000000000000000000000000000000000000000000002cda839e3074500000000000000000000000000000000000000000000000000000000001ecbbd";

    vec![
        position.log(
            ETH_USDC_POOL,
            vec![
                Burn::SIGNATURE_HASH,
                POSITION_MANAGER.into_word(),
                tick_lower,
                tick_upper,
            ],
            data(amounts),
            0,
        ),
        position.log(
            POSITION_MANAGER,
            vec![DecreaseLiquidity::SIGNATURE_HASH, word(0xe2cc)],
            data(amounts),
            1,
        ),
        position.log(
            WETH,
            vec![
                Transfer::SIGNATURE_HASH,
                ETH_USDC_POOL.into_word(),
                POSITION_MANAGER.into_word(),
            ],
            data("0x0000000000000000000000000000000000000000000000000002ce4f7f977b07"), // 789790791793415
            2,
        ),
        position.log(
            USDC,
            vec![
                Transfer::SIGNATURE_HASH,
                ETH_USDC_POOL.into_word(),
                POSITION_MANAGER.into_word(),
            ],
            data("0x00000000000000000000000000000000000000000000000000000000001ed2c7"), // 2020039
            3,
        ),
        position.log(
            USDC,
            vec![
                Transfer::SIGNATURE_HASH,
                POSITION_MANAGER.into_word(),
                WALLET.into_word(),
            ],
            data("0x00000000000000000000000000000000000000000000000000000000001ed2c7"),
            4,
        ),
    ]
}

pub fn close_eth_usdc_receipt() -> TransactionReceipt {
    let position = LogPosition {
        tx_hash: CLOSE_TX,
        block_hash: CLOSE_BLOCK,
        block_number: 19_163_726,
    };
    receipt(
        &position,
        close_eth_usdc_logs(),
        365_592,
        321_753,
        2_006_120_122,
    )
}

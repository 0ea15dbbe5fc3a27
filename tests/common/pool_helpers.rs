/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Pool Creation and Operation Utilities
//!
//! This module provides helpers that build pool instructions through the
//! client SDK and submit them with the environment payer as fee payer, so
//! the balances of the acting user move only by the amounts under test.

use borsh::BorshDeserialize;
use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_program_test::BanksClientError;
use solana_sdk::{
    instruction::InstructionError,
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};

use crate::common::{TestEnvironment, TestResult, PROGRAM_ID};
use remi_vault::{client_sdk::PoolClient, PoolState};

/// Client bound to the test program id
pub fn pool_client() -> PoolClient {
    PoolClient::new(PROGRAM_ID)
}

/// Sign `instructions` with the environment payer plus `signers` and submit them.
pub async fn submit(
    env: &mut TestEnvironment,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> TestResult {
    let mut all_signers: Vec<&Keypair> = vec![&env.payer];
    all_signers.extend_from_slice(signers);

    let mut transaction = Transaction::new_with_payer(instructions, Some(&env.payer.pubkey()));
    transaction.sign(&all_signers, env.recent_blockhash);
    env.banks_client.process_transaction(transaction).await
}

/// Initialize the pool for `mint`, paid by the environment payer
pub async fn initialize_pool(env: &mut TestEnvironment, mint: &Pubkey) -> TestResult {
    let instruction = pool_client()
        .initialize_pool(&env.payer.pubkey(), mint)
        .unwrap();
    submit(env, &[instruction], &[]).await
}

/// Deposit SOL and tokens from `provider`
pub async fn add_liquidity(
    env: &mut TestEnvironment,
    provider: &Keypair,
    provider_token_account: &Pubkey,
    mint: &Pubkey,
    sol_amount: u64,
    token_amount: u64,
) -> TestResult {
    let instruction = pool_client()
        .add_liquidity(&provider.pubkey(), provider_token_account, mint, sol_amount, token_amount)
        .unwrap();
    submit(env, &[instruction], &[provider]).await
}

/// Swap `amount` tokens from `sender` for `amount` lamports
pub async fn swap_token_for_sol(
    env: &mut TestEnvironment,
    sender: &Keypair,
    sender_token_account: &Pubkey,
    mint: &Pubkey,
    amount: u64,
) -> TestResult {
    let instruction = pool_client()
        .swap_token_for_sol(&sender.pubkey(), sender_token_account, mint, amount)
        .unwrap();
    submit(env, &[instruction], &[sender]).await
}

/// Read and decode the Pool State Record
pub async fn get_pool_state(env: &mut TestEnvironment) -> PoolState {
    let (pool_state_pda, _) = remi_vault::utils::derive_pool_authority(&PROGRAM_ID);
    let account = env
        .banks_client
        .get_account(pool_state_pda)
        .await
        .expect("Failed to fetch pool state")
        .expect("Pool state not found");
    PoolState::try_from_slice(&account.data).expect("Failed to deserialize pool state")
}

/// Pool state PDA address
pub fn pool_state_address() -> Pubkey {
    remi_vault::utils::derive_pool_authority(&PROGRAM_ID).0
}

/// Assert that a transaction failed in its first instruction with a custom program error
pub fn assert_custom_error(result: Result<(), BanksClientError>, expected_code: u32) {
    match result {
        Err(BanksClientError::TransactionError(TransactionError::InstructionError(
            0,
            InstructionError::Custom(code),
        ))) => {
            assert_eq!(code, expected_code, "Unexpected custom error code");
        }
        other => panic!("Expected custom error {}, got {:?}", expected_code, other),
    }
}

/// Simulate `GetPoolInfo` and decode the returned Pool State Record
///
/// The runtime trims trailing zero bytes from return data, so the payload
/// is padded back to the packed length before decoding.
pub async fn simulate_get_pool_info(env: &mut TestEnvironment) -> PoolState {
    let instruction = pool_client().get_pool_info().unwrap();
    let mut transaction = Transaction::new_with_payer(&[instruction], Some(&env.payer.pubkey()));
    transaction.sign(&[&env.payer], env.recent_blockhash);

    let simulation = env
        .banks_client
        .simulate_transaction(transaction)
        .await
        .expect("Simulation failed to run");
    assert!(
        matches!(simulation.result, Some(Ok(()))),
        "GetPoolInfo failed: {:?}",
        simulation.result
    );

    let return_data = simulation
        .simulation_details
        .and_then(|details| details.return_data)
        .expect("GetPoolInfo returned no data");
    assert_eq!(return_data.program_id, PROGRAM_ID);

    let mut data = return_data.data;
    data.resize(PoolState::get_packed_len(), 0);
    PoolState::try_from_slice(&data).expect("Failed to decode pool info")
}

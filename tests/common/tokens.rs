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

//! # Token Creation and Management Utilities
//!
//! This module provides utilities for creating and managing SPL tokens
//! in integration tests, including mint creation, token account setup,
//! and token minting operations.

use solana_program::pubkey::Pubkey;
use solana_sdk::{program_pack::Pack, signature::Keypair, signer::Signer, transaction::Transaction};
use spl_token::{instruction as token_instruction, state::Account as TokenAccount, state::Mint};

use crate::common::{constants, TestEnvironment, TestResult};

/// Helper function to create a token mint
///
/// The environment payer becomes the mint authority.
///
/// # Arguments
/// * `env` - Test environment
/// * `mint` - Keypair for the new mint account
/// * `decimals` - Number of decimal places (defaults to 9 if None)
pub async fn create_mint(
    env: &mut TestEnvironment,
    mint: &Keypair,
    decimals: Option<u8>,
) -> TestResult {
    let decimals = decimals.unwrap_or(constants::TOKEN_DECIMALS);
    let rent = env.banks_client.get_rent().await?;
    let lamports = rent.minimum_balance(Mint::LEN);

    let create_account_ix = solana_sdk::system_instruction::create_account(
        &env.payer.pubkey(),
        &mint.pubkey(),
        lamports,
        Mint::LEN as u64,
        &spl_token::id(),
    );

    let initialize_mint_ix = token_instruction::initialize_mint(
        &spl_token::id(),
        &mint.pubkey(),
        &env.payer.pubkey(),
        None,
        decimals,
    )
    .unwrap();

    let mut transaction = Transaction::new_with_payer(
        &[create_account_ix, initialize_mint_ix],
        Some(&env.payer.pubkey()),
    );
    transaction.sign(&[&env.payer, mint], env.recent_blockhash);
    env.banks_client.process_transaction(transaction).await
}

/// Helper function to create a token account
///
/// # Arguments
/// * `env` - Test environment
/// * `account` - Keypair for the new token account
/// * `mint` - Mint the account holds
/// * `owner` - SPL owner of the account
pub async fn create_token_account(
    env: &mut TestEnvironment,
    account: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> TestResult {
    let rent = env.banks_client.get_rent().await?;
    let lamports = rent.minimum_balance(TokenAccount::LEN);

    let create_account_ix = solana_sdk::system_instruction::create_account(
        &env.payer.pubkey(),
        &account.pubkey(),
        lamports,
        TokenAccount::LEN as u64,
        &spl_token::id(),
    );

    let initialize_account_ix = token_instruction::initialize_account(
        &spl_token::id(),
        &account.pubkey(),
        mint,
        owner,
    )
    .unwrap();

    let mut transaction = Transaction::new_with_payer(
        &[create_account_ix, initialize_account_ix],
        Some(&env.payer.pubkey()),
    );
    transaction.sign(&[&env.payer, account], env.recent_blockhash);
    env.banks_client.process_transaction(transaction).await
}

/// Helper function to mint tokens
///
/// The environment payer signs as mint authority.
pub async fn mint_tokens(
    env: &mut TestEnvironment,
    mint: &Pubkey,
    account: &Pubkey,
    amount: u64,
) -> TestResult {
    let mint_to_ix = token_instruction::mint_to(
        &spl_token::id(),
        mint,
        account,
        &env.payer.pubkey(),
        &[],
        amount,
    )
    .unwrap();

    let mut transaction = Transaction::new_with_payer(&[mint_to_ix], Some(&env.payer.pubkey()));
    transaction.sign(&[&env.payer], env.recent_blockhash);
    env.banks_client.process_transaction(transaction).await
}

/// Get the token balance of an SPL token account
pub async fn get_token_balance(env: &mut TestEnvironment, account: &Pubkey) -> u64 {
    let account = env
        .banks_client
        .get_account(*account)
        .await
        .expect("Failed to fetch token account")
        .expect("Token account not found");
    TokenAccount::unpack(&account.data)
        .expect("Failed to unpack token account")
        .amount
}

/// Get the lamport balance of any account (0 if it does not exist)
pub async fn get_lamports(env: &mut TestEnvironment, account: &Pubkey) -> u64 {
    env.banks_client
        .get_balance(*account)
        .await
        .expect("Failed to fetch balance")
}

//! vaultfees: operator tool for the fee module's state database.
//!
//! Subcommands:
//!   init-genesis    load a genesis JSON file into a fresh data dir
//!   export-genesis  print the current module state as genesis JSON
//!   query           print params, counters or the reward-supply peak
//!   simulate        run blocks against in-memory collaborators and print
//!                   the emission curve for a candidate period

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use vaultfees_core::params::{ModuleConfig, Params};
use vaultfees_core::types::{Amount, BlockContext, DepositEvent, EthAddress, TokenContract, VaultId};
use vaultfees_genesis::{export_genesis, init_genesis, GenesisState};
use vaultfees_keeper::memory::{
    InMemoryAuctionHouse, InMemoryBank, MemoryKeeper, StaticTokenRegistry, StaticVaultRegistry,
};
use vaultfees_keeper::{Bank, FeeQuery};
use vaultfees_state::{FeeStore, MemoryStore, StateDb};

const DEFAULT_DATA_DIR: &str = "~/.vaultfees/data";

#[derive(Parser, Debug)]
#[command(
    name = "vaultfees",
    version,
    about = "Fee accrual, reward emission and auction trigger state tool"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a genesis file into the state database.
    InitGenesis {
        /// Directory for the persistent state database.
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Path to the genesis JSON.
        #[arg(long)]
        genesis: PathBuf,
    },

    /// Print the module state as genesis JSON.
    ExportGenesis {
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },

    /// Print one module record.
    Query {
        #[arg(value_enum)]
        what: QueryTarget,

        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },

    /// Run blocks against in-memory collaborators and print each emission.
    Simulate {
        /// Number of blocks to run.
        #[arg(long, default_value_t = 100)]
        blocks: u64,

        /// Native tokens credited to the fee account before each block.
        #[arg(long, default_value_t = 0)]
        native_inflow: Amount,

        /// Native tokens in the fee account before the first block.
        #[arg(long, default_value_t = 0)]
        initial_balance: Amount,

        /// Reward emission period in blocks.
        #[arg(long, default_value_t = Params::default().reward_emission_period)]
        period: u64,

        /// Bridged fee deposits landing in the fee account per block.
        #[arg(long, default_value_t = 0)]
        fee_deposits: u64,

        /// Size of each bridged fee deposit.
        #[arg(long, default_value_t = 1_000)]
        fee_amount: Amount,

        /// Qualifying deposits between auctions.
        #[arg(long, default_value_t = Params::default().auction_interval)]
        auction_interval: u64,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QueryTarget {
    Params,
    Counters,
    Peak,
    Summary,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,vaultfees=debug")),
        )
        .init();

    match Args::parse().command {
        Command::InitGenesis { data_dir, genesis } => cmd_init_genesis(&data_dir, &genesis),
        Command::ExportGenesis { data_dir } => cmd_export_genesis(&data_dir),
        Command::Query { what, data_dir } => cmd_query(what, &data_dir),
        Command::Simulate {
            blocks,
            native_inflow,
            initial_balance,
            period,
            fee_deposits,
            fee_amount,
            auction_interval,
        } => {
            let params = Params {
                reward_emission_period: period,
                auction_interval,
                ..Params::default()
            };
            params.validate().context("simulation params")?;
            cmd_simulate(
                &params,
                blocks,
                initial_balance,
                native_inflow,
                fee_deposits,
                fee_amount,
            )
        }
    }
}

// ── Subcommands ──────────────────────────────────────────────────────────────

fn cmd_init_genesis(data_dir: &Path, genesis_path: &Path) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(genesis_path)
        .with_context(|| format!("reading genesis from {}", genesis_path.display()))?;
    let genesis = GenesisState::from_json(&json).context("parsing genesis JSON")?;

    let mut db = open_db(data_dir, true)?;
    init_genesis(&mut db, &genesis).context("applying genesis")?;
    db.flush().context("flushing state database")?;
    info!(data_dir = %expand_tilde(data_dir).display(), "genesis state committed to disk");
    Ok(())
}

fn cmd_export_genesis(data_dir: &Path) -> anyhow::Result<()> {
    let db = open_db(data_dir, false)?;
    let genesis = export_genesis(&db).context("reading module state")?;
    println!("{}", genesis.to_json()?);
    Ok(())
}

fn cmd_query(what: QueryTarget, data_dir: &Path) -> anyhow::Result<()> {
    let db = open_db(data_dir, false)?;
    let q = FeeQuery::new(&db);
    match what {
        QueryTarget::Params => println!("{}", serde_json::to_string_pretty(&q.params()?)?),
        QueryTarget::Counters => {
            println!("{}", serde_json::to_string_pretty(&q.fee_accrual_counters()?)?)
        }
        QueryTarget::Peak => println!("{}", q.last_reward_supply_peak()?),
        QueryTarget::Summary => println!("{}", q.describe()?),
    }
    Ok(())
}

fn cmd_simulate(
    params: &Params,
    blocks: u64,
    initial_balance: Amount,
    native_inflow: Amount,
    fee_deposits: u64,
    fee_amount: Amount,
) -> anyhow::Result<()> {
    let config = ModuleConfig::default();
    let vault = EthAddress::from_hex("0x00000000000000000000000000000000000000aa")?;
    let fee_token = EthAddress::from_hex("0x00000000000000000000000000000000000000bb")?;
    let fee_denom = format!("gravity{fee_token}");

    let mut keeper: MemoryKeeper = MemoryKeeper::new(
        config.clone(),
        StaticVaultRegistry::new().with_vault(VaultId(vault)),
        StaticTokenRegistry::new().with_token(TokenContract(fee_token), false, &fee_denom),
        InMemoryBank::new(),
        InMemoryAuctionHouse::new(),
    );
    keeper
        .bank_mut()
        .set_balance(&config.fees_account, &config.native_denom, initial_balance);

    let mut store = MemoryStore::new();
    store.set_params(params)?;

    let deposit = DepositEvent {
        ethereum_sender: vault.to_hex(),
        receiver: config.fees_account.clone(),
        token_contract: fee_token.to_hex(),
        amount: fee_amount,
    };

    println!("height\tbalance\tpeak\temission\tauctions");
    let mut total: Amount = 0;
    for height in 1..=blocks {
        keeper
            .bank_mut()
            .credit(&config.fees_account, &config.native_denom, native_inflow);
        for _ in 0..fee_deposits {
            keeper
                .bank_mut()
                .credit(&config.fees_account, &fee_denom, fee_amount);
            keeper.on_deposit(&mut store, &deposit)?;
        }

        let balance = keeper
            .bank()
            .get_balance(&config.fees_account, &config.native_denom);
        let report = keeper
            .begin_block(&mut store, &BlockContext::new(height, 0))
            .with_context(|| format!("block {height}"))?;
        keeper.end_block(&mut store, &BlockContext::new(height, 0))?;

        let emitted = report.emitted.unwrap_or(0);
        total = total.saturating_add(emitted);
        println!(
            "{height}\t{balance}\t{}\t{emitted}\t{}",
            store.get_last_reward_supply_peak()?,
            report.auctions.len()
        );
    }

    let remaining = keeper
        .bank()
        .get_balance(&config.fees_account, &config.native_denom);
    if remaining > 0 && native_inflow == 0 {
        warn!(remaining, "fee account not drained within simulated blocks");
    }
    info!(
        blocks,
        total_emitted = total,
        remaining,
        auctions = keeper.auctions().requests().len(),
        "simulation finished"
    );
    Ok(())
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Open the state database, creating the directory only when `create` is set.
fn open_db(data_dir: &Path, create: bool) -> anyhow::Result<StateDb> {
    let data_dir = expand_tilde(data_dir);
    if create {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("creating data dir {}", data_dir.display()))?;
    } else if !data_dir.exists() {
        anyhow::bail!("no state database at {}", data_dir.display());
    }
    StateDb::open(&data_dir).context("opening state database")
}

/// Expand a leading `~` to the user's home directory (`HOME` or `USERPROFILE`).
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            return PathBuf::from(home).join(stripped);
        }
    }
    path.to_path_buf()
}

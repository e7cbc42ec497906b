use std::io::Write;

use alloy::primitives::{Address, aliases::U24};
use dashboard::{
    Dashboard, DashboardDriver, PoolAction, PoolPanel, SessionAction, TokenAction, TokenScreen
};
use poolscope_eth::{ContractHandle, LocalKeyConnector, RpcChainClient};
use poolscope_types::{
    contract_bindings::{
        ContractAbi, Erc20, FunctionDescriptor, IERC20, Mutability, UniswapV3Factory,
        UniswapV3Pool
    },
    input::format_amount
};
use tokio::io::{AsyncBufReadExt, BufReader};
use uniswap_v3::PoolReader;

use crate::{
    Cli, Command,
    config::DashboardConfig,
    repl::{HELP, Input, parse_line}
};

type LiveDriver = DashboardDriver<RpcChainClient, LocalKeyConnector>;

pub(crate) async fn execute(cli: Cli) -> eyre::Result<()> {
    let Cli { config, command, .. } = cli;
    tracing::debug!(?command, rpc_url = %config.rpc_url, chain = %config.chain, "starting");

    let mut driver = build_driver(&config)?;

    match command {
        Command::Pool { json } => pool(&mut driver, json).await,
        Command::PoolAddress { token_a, token_b, fee } => {
            let pool = driver
                .pools()
                .get_pool_address(token_a, token_b, U24::from(fee))
                .await?;
            if pool.is_zero() {
                println!("no pool for {token_a}/{token_b} at fee {fee}");
            } else {
                println!("{pool}");
            }
            Ok(())
        }
        Command::Balance { owner: Some(owner) } => {
            let raw = driver
                .token()
                .read(IERC20::balanceOfCall { owner })
                .await?;
            println!("{} {}", format_amount(raw, config.token_decimals), config.token_symbol);
            Ok(())
        }
        Command::Balance { owner: None } => {
            connect(&mut driver).await?;
            driver.dispatch(TokenAction::FetchBalance).await;
            print_balance(&driver.state().token)
        }
        Command::Transfer { to, amount } => transfer(&mut driver, to, amount).await,
        Command::Abi => {
            print_abi(&config);
            Ok(())
        }
        Command::Dashboard => interactive(driver).await
    }
}

fn build_driver(config: &DashboardConfig) -> eyre::Result<LiveDriver> {
    let rpc_url = config.rpc_url()?;
    let chain_id = config.chain_id()?;

    let client = RpcChainClient::connect_http(rpc_url.clone());
    let connector = LocalKeyConnector::new(
        config.key_config.local_secret_key_location.clone(),
        rpc_url,
        chain_id
    );
    let token = ContractHandle::new(config.token_contract(), Some(client.clone()), None);
    let pools = PoolReader::new(config.pool_contract(), config.factory_contract(), Some(client));
    let state = Dashboard::new(config.token_meta(), config.pool_decimals());

    Ok(DashboardDriver::new(state, connector, token, pools))
}

async fn connect(driver: &mut LiveDriver) -> eyre::Result<()> {
    driver.dispatch(SessionAction::Connect).await;
    match driver.state().session.error() {
        Some(message) => Err(eyre::eyre!("{message}")),
        None => Ok(())
    }
}

async fn pool(driver: &mut LiveDriver, json: bool) -> eyre::Result<()> {
    driver.dispatch(PoolAction::Fetch).await;

    let state = driver.state();
    if let Some(message) = state.pool.error() {
        return Err(eyre::eyre!("{message}"))
    }
    let Some(info) = state.pool.snapshot() else {
        return Err(eyre::eyre!("no pool info was fetched"))
    };

    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
    } else {
        print!("{}", PoolPanel { screen: &state.pool, decimals: state.pool_decimals });
    }
    Ok(())
}

fn print_balance(token: &TokenScreen) -> eyre::Result<()> {
    if let Some(message) = token.error() {
        return Err(eyre::eyre!("{message}"))
    }
    if let Some(balance) = &token.balance {
        println!("Balance: {balance} {}", token.meta.symbol);
    }
    Ok(())
}

async fn transfer(driver: &mut LiveDriver, to: String, amount: String) -> eyre::Result<()> {
    connect(driver).await?;
    driver.dispatch(TokenAction::SetRecipient(to)).await;
    driver.dispatch(TokenAction::SetAmount(amount)).await;
    driver.dispatch(TokenAction::SubmitTransfer).await;

    report_transfer(&driver.state().token)
}

/// A failed balance refresh after a submitted transfer is only a warning.
fn report_transfer(token: &TokenScreen) -> eyre::Result<()> {
    let Some(hash) = token.last_transfer else {
        return Err(eyre::eyre!("{}", token.error().unwrap_or("Transfer failed: form incomplete")))
    };
    println!("submitted transfer {hash}");

    if let Err(e) = print_balance(token) {
        tracing::warn!(%hash, "balance refresh after transfer failed: {e}");
    }
    Ok(())
}

fn print_abi(config: &DashboardConfig) {
    print_contract::<Erc20>(config.token_address);
    print_contract::<UniswapV3Pool>(config.pool_address);
    print_contract::<UniswapV3Factory>(config.factory_address);
}

fn print_contract<A: ContractAbi>(address: Address) {
    println!("{} at {address}", A::NAME);
    for FunctionDescriptor { signature, mutability } in A::FUNCTIONS {
        let class = match mutability {
            Mutability::View => "view",
            Mutability::NonPayable => "nonpayable"
        };
        println!("  {signature} {class}");
    }
}

async fn interactive(mut driver: LiveDriver) -> eyre::Result<()> {
    driver.dispatch(PoolAction::Fetch).await;
    show(&driver)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            None => {}
            Some(Input::Action(action)) => driver.dispatch(action).await,
            Some(Input::Help) => println!("{HELP}"),
            Some(Input::Quit) => break,
            Some(Input::Unknown(line)) => println!("unknown command `{line}`, try `help`")
        }
        show(&driver)?;
    }

    Ok(())
}

fn show(driver: &LiveDriver) -> eyre::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", driver.render())?;
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

//! Plain-text rendering of the dashboard. Pure: the same state always
//! renders the same text.
use std::fmt::{self, Display, Formatter};

use alloy::primitives::Address;
use poolscope_types::pool::PoolInfo;

use crate::{
    app::{Dashboard, PoolDecimals},
    pool::PoolScreen,
    session::Session,
    token::{Pending, Phase, TokenScreen}
};

const DISABLED: &str = " (disabled)";

pub fn render(state: &Dashboard) -> String {
    state.to_string()
}

/// The pool panel on its own, for output that has no session.
pub struct PoolPanel<'a> {
    pub screen:   &'a PoolScreen,
    pub decimals: PoolDecimals
}

impl Display for PoolPanel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_pool(f, self.screen, self.decimals)
    }
}

impl Display for Dashboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_session(f, &self.session)?;
        writeln!(f)?;
        PoolPanel { screen: &self.pool, decimals: self.pool_decimals }.fmt(f)?;

        if let Some(account) = self.session.account() {
            writeln!(f)?;
            write_token(f, &self.token, account)?;
        }
        Ok(())
    }
}

fn write_session(f: &mut Formatter<'_>, session: &Session) -> fmt::Result {
    match session {
        Session::Disconnected => writeln!(f, "[Connect Wallet]"),
        Session::Connecting => writeln!(f, "[Connecting...]{DISABLED}"),
        Session::Connected(account) => {
            writeln!(f, "Connected: {account}")?;
            writeln!(f, "[Disconnect]")
        }
        Session::Failed(message) => {
            writeln!(f, "[Connect Wallet]")?;
            writeln!(f, "Error: {message}")
        }
    }
}

fn write_pool(f: &mut Formatter<'_>, screen: &PoolScreen, decimals: PoolDecimals) -> fmt::Result {
    writeln!(f, "Uniswap V3 Pool Info")?;

    match screen.snapshot() {
        Some(info) => write_pool_info(f, info, decimals)?,
        None if screen.error().is_none() => writeln!(f, "Loading pool info...")?,
        None => {}
    }
    if let Some(message) = screen.error() {
        writeln!(f, "Error: {message}")?;
    }

    if screen.is_loading() {
        writeln!(f, "[Refreshing...]{DISABLED}")
    } else {
        writeln!(f, "[Refresh Pool]")
    }
}

fn write_pool_info(f: &mut Formatter<'_>, info: &PoolInfo, decimals: PoolDecimals) -> fmt::Result {
    writeln!(f, "Current Tick: {}", info.tick)?;
    writeln!(f, "SqrtPriceX96: {}", *info.sqrt_price_x96)?;
    writeln!(f, "Liquidity: {}", info.liquidity)?;
    writeln!(f, "Price: {} token1 per token0", info.adjusted_price(decimals.token0, decimals.token1))
}

fn write_token(f: &mut Formatter<'_>, screen: &TokenScreen, account: Address) -> fmt::Result {
    let account = Some(account);
    let symbol = &screen.meta.symbol;

    match screen.phase {
        Phase::Loading(Pending::Balance) => writeln!(f, "[Loading...]{DISABLED}")?,
        _ if screen.can_fetch_balance(account) => writeln!(f, "[Fetch Balance]")?,
        _ => writeln!(f, "[Fetch Balance]{DISABLED}")?
    }
    if let Some(balance) = &screen.balance {
        writeln!(f, "Balance: {balance} {symbol}")?;
    }

    writeln!(f, "Recipient Address: {}", placeholder(&screen.form.recipient))?;
    writeln!(f, "Amount: {}", placeholder(&screen.form.amount))?;
    match screen.phase {
        Phase::Loading(Pending::Transfer) => writeln!(f, "[Processing...]{DISABLED}")?,
        _ if screen.can_transfer(account) => writeln!(f, "[Transfer]")?,
        _ => writeln!(f, "[Transfer]{DISABLED}")?
    }

    if let Some(hash) = screen.last_transfer {
        writeln!(f, "Last transfer: {hash}")?;
    }
    if let Some(message) = screen.error() {
        writeln!(f, "Error: {message}")?;
    }
    Ok(())
}

fn placeholder(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

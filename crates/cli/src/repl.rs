//! Line commands for the interactive dashboard.
use dashboard::{Action, PoolAction, SessionAction, TokenAction};

pub const HELP: &str = "\
commands:
  connect            connect the wallet from --local-secret-key-location
  disconnect         forget the connected wallet
  pool | refresh     fetch pool info again
  balance            fetch the token balance of the connected account
  to <address>       set the transfer recipient
  amount <amount>    set the transfer amount, in whole tokens
  transfer           submit the transfer
  help               show this message
  quit | exit        leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Help,
    Quit,
    Unknown(String)
}

/// Parses one line. Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    let input = match (command.to_ascii_lowercase().as_str(), rest) {
        ("connect", "") => Input::Action(SessionAction::Connect.into()),
        ("disconnect", "") => Input::Action(SessionAction::Disconnect.into()),
        ("pool" | "refresh", "") => Input::Action(PoolAction::Fetch.into()),
        ("balance", "") => Input::Action(TokenAction::FetchBalance.into()),
        ("to", recipient) => Input::Action(TokenAction::SetRecipient(recipient.to_string()).into()),
        ("amount", amount) => Input::Action(TokenAction::SetAmount(amount.to_string()).into()),
        ("transfer", "") => Input::Action(TokenAction::SubmitTransfer.into()),
        ("help" | "?", _) => Input::Help,
        ("quit" | "exit", _) => Input::Quit,
        _ => Input::Unknown(line.to_string())
    };

    Some(input)
}

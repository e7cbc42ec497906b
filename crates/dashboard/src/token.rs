use alloy::primitives::{Address, TxHash, U256};
use poolscope_types::input::{format_amount, parse_amount, parse_recipient};

use crate::app::Effect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMeta {
    pub symbol:   String,
    pub decimals: u8
}

/// Raw user input, kept exactly as typed until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub recipient: String,
    pub amount:    String
}

impl TransferForm {
    pub fn is_complete(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.amount.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Balance,
    Transfer
}

/// At most one request is in flight and at most one error is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading(Pending),
    Failed(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAction {
    SetRecipient(String),
    SetAmount(String),
    FetchBalance,
    BalanceFetched(Result<U256, String>),
    SubmitTransfer,
    TransferSubmitted(Result<TxHash, String>)
}

/// Balance lookup and transfer form for one ERC20 token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenScreen {
    pub meta:          TokenMeta,
    pub form:          TransferForm,
    /// formatted at the token's decimals, kept when a later fetch fails
    pub balance:       Option<String>,
    pub phase:         Phase,
    pub last_transfer: Option<TxHash>
}

impl TokenScreen {
    pub fn new(meta: TokenMeta) -> Self {
        Self {
            meta,
            form:          TransferForm::default(),
            balance:       None,
            phase:         Phase::Idle,
            last_transfer: None
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None
        }
    }

    pub fn can_fetch_balance(&self, account: Option<Address>) -> bool {
        account.is_some() && !self.is_loading()
    }

    pub fn can_transfer(&self, account: Option<Address>) -> bool {
        self.can_fetch_balance(account) && self.form.is_complete()
    }

    /// Drops everything tied to the previous account.
    pub fn reset(&mut self) {
        *self = Self::new(self.meta.clone());
    }

    pub fn reduce(&mut self, action: TokenAction, account: Option<Address>) -> Option<Effect> {
        match action {
            TokenAction::SetRecipient(recipient) => {
                self.form.recipient = recipient;
                None
            }
            TokenAction::SetAmount(amount) => {
                self.form.amount = amount;
                None
            }
            TokenAction::FetchBalance => {
                let owner = account.filter(|_| !self.is_loading())?;
                self.phase = Phase::Loading(Pending::Balance);
                Some(Effect::ReadBalance(owner))
            }
            TokenAction::BalanceFetched(result) => {
                if self.phase != Phase::Loading(Pending::Balance) {
                    return None
                }
                self.phase = match result {
                    Ok(raw) => {
                        self.balance = Some(format_amount(raw, self.meta.decimals));
                        Phase::Idle
                    }
                    Err(message) => Phase::Failed(message)
                };
                None
            }
            TokenAction::SubmitTransfer => {
                if !self.can_transfer(account) {
                    return None
                }

                match self.parse_form() {
                    Ok((to, amount)) => {
                        self.phase = Phase::Loading(Pending::Transfer);
                        Some(Effect::Transfer { to, amount })
                    }
                    Err(message) => {
                        self.phase = Phase::Failed(message);
                        None
                    }
                }
            }
            TokenAction::TransferSubmitted(result) => {
                if self.phase != Phase::Loading(Pending::Transfer) {
                    return None
                }
                match result {
                    Ok(hash) => {
                        self.last_transfer = Some(hash);
                        self.form = TransferForm::default();
                        match account {
                            Some(owner) => {
                                self.phase = Phase::Loading(Pending::Balance);
                                Some(Effect::ReadBalance(owner))
                            }
                            None => {
                                self.phase = Phase::Idle;
                                None
                            }
                        }
                    }
                    Err(message) => {
                        self.phase = Phase::Failed(message);
                        None
                    }
                }
            }
        }
    }

    fn parse_form(&self) -> Result<(Address, U256), String> {
        let to = parse_recipient(&self.form.recipient)
            .map_err(|e| format!("Transfer failed: {e}"))?;
        let amount = parse_amount(&self.form.amount, self.meta.decimals)
            .map_err(|e| format!("Transfer failed: {e}"))?;
        Ok((to, amount))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use assert_matches::assert_matches;

    use super::*;

    const ACCOUNT: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const DEAD: Address = address!("000000000000000000000000000000000000dEaD");

    fn usdc() -> TokenScreen {
        TokenScreen::new(TokenMeta { symbol: "USDC".into(), decimals: 6 })
    }

    fn filled(recipient: &str, amount: &str) -> TokenScreen {
        let mut screen = usdc();
        screen.reduce(TokenAction::SetRecipient(recipient.into()), Some(ACCOUNT));
        screen.reduce(TokenAction::SetAmount(amount.into()), Some(ACCOUNT));
        screen
    }

    #[test]
    fn fetch_balance_needs_account() {
        let mut screen = usdc();
        assert_eq!(screen.reduce(TokenAction::FetchBalance, None), None);
        assert_eq!(screen.phase, Phase::Idle);

        assert_eq!(
            screen.reduce(TokenAction::FetchBalance, Some(ACCOUNT)),
            Some(Effect::ReadBalance(ACCOUNT))
        );
        assert_eq!(screen.phase, Phase::Loading(Pending::Balance));
    }

    #[test]
    fn fetch_balance_ignored_while_loading() {
        let mut screen = usdc();
        screen.phase = Phase::Loading(Pending::Transfer);
        assert_eq!(screen.reduce(TokenAction::FetchBalance, Some(ACCOUNT)), None);
        assert_eq!(screen.phase, Phase::Loading(Pending::Transfer));
    }

    #[test]
    fn balance_is_formatted_at_token_decimals() {
        let mut screen = usdc();
        screen.reduce(TokenAction::FetchBalance, Some(ACCOUNT));
        screen.reduce(
            TokenAction::BalanceFetched(Ok(U256::from(12_340_000u64))),
            Some(ACCOUNT)
        );
        assert_eq!(screen.balance.as_deref(), Some("12.34"));
        assert_eq!(screen.phase, Phase::Idle);
    }

    #[test]
    fn failed_balance_keeps_stale_value() {
        let mut screen = usdc();
        screen.balance = Some("1".into());
        screen.reduce(TokenAction::FetchBalance, Some(ACCOUNT));
        screen.reduce(TokenAction::BalanceFetched(Err("rate limited".into())), Some(ACCOUNT));

        assert_eq!(screen.error(), Some("rate limited"));
        assert_eq!(screen.balance.as_deref(), Some("1"));
    }

    #[test]
    fn transfer_scales_amount() {
        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "5");
        assert_eq!(
            screen.reduce(TokenAction::SubmitTransfer, Some(ACCOUNT)),
            Some(Effect::Transfer { to: DEAD, amount: U256::from(5_000_000u64) })
        );
        assert_eq!(screen.phase, Phase::Loading(Pending::Transfer));
    }

    #[test]
    fn incomplete_form_does_nothing() {
        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "");
        assert_eq!(screen.reduce(TokenAction::SubmitTransfer, Some(ACCOUNT)), None);
        assert_eq!(screen.phase, Phase::Idle);

        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "5");
        assert_eq!(screen.reduce(TokenAction::SubmitTransfer, None), None);
    }

    #[test]
    fn malformed_amount_fails_without_effect() {
        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "five");
        assert_eq!(screen.reduce(TokenAction::SubmitTransfer, Some(ACCOUNT)), None);
        assert_matches!(screen.error(), Some(msg) if msg.starts_with("Transfer failed: "));
    }

    #[test]
    fn malformed_recipient_fails_without_effect() {
        let mut screen = filled("vitalik.eth", "5");
        assert_eq!(screen.reduce(TokenAction::SubmitTransfer, Some(ACCOUNT)), None);
        assert_matches!(screen.phase, Phase::Failed(_));
    }

    #[test]
    fn new_attempt_clears_previous_error() {
        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "5");
        screen.phase = Phase::Failed("old".into());
        screen.reduce(TokenAction::SubmitTransfer, Some(ACCOUNT));
        assert_eq!(screen.error(), None);
    }

    #[test]
    fn successful_transfer_resets_form_and_refreshes_balance() {
        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "5");
        screen.reduce(TokenAction::SubmitTransfer, Some(ACCOUNT));

        let hash = TxHash::with_last_byte(9);
        assert_eq!(
            screen.reduce(TokenAction::TransferSubmitted(Ok(hash)), Some(ACCOUNT)),
            Some(Effect::ReadBalance(ACCOUNT))
        );
        assert_eq!(screen.form, TransferForm::default());
        assert_eq!(screen.last_transfer, Some(hash));
        assert_eq!(screen.phase, Phase::Loading(Pending::Balance));
    }

    #[test]
    fn failed_transfer_keeps_form() {
        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "5");
        screen.reduce(TokenAction::SubmitTransfer, Some(ACCOUNT));
        screen.reduce(
            TokenAction::TransferSubmitted(Err("insufficient funds".into())),
            Some(ACCOUNT)
        );

        assert_eq!(screen.error(), Some("insufficient funds"));
        assert_eq!(screen.form.amount, "5");
    }

    #[test]
    fn reset_keeps_token_meta() {
        let mut screen = filled("0x0000000000000000000000000000000000dEaD", "5");
        screen.balance = Some("3".into());
        screen.reset();
        assert_eq!(screen, usdc());
    }
}

use poolscope_types::pool::PoolInfo;

use crate::app::Effect;

/// The pool panel. A failed fetch keeps whatever snapshot was on screen
/// before it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PoolScreen {
    #[default]
    Idle,
    Loading {
        previous: Option<PoolInfo>
    },
    Loaded(PoolInfo),
    Failed {
        message:  String,
        previous: Option<PoolInfo>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolAction {
    Fetch,
    Fetched(Result<PoolInfo, String>)
}

impl PoolScreen {
    /// The most recent successful snapshot, if any.
    pub fn snapshot(&self) -> Option<&PoolInfo> {
        match self {
            Self::Idle => None,
            Self::Loaded(info) => Some(info),
            Self::Loading { previous } | Self::Failed { previous, .. } => previous.as_ref()
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None
        }
    }

    pub fn reduce(&mut self, action: PoolAction) -> Option<Effect> {
        match action {
            PoolAction::Fetch => {
                if self.is_loading() {
                    return None
                }
                *self = Self::Loading { previous: self.snapshot().copied() };
                Some(Effect::FetchPool)
            }
            PoolAction::Fetched(result) => {
                let Self::Loading { previous } = *self else { return None };
                *self = match result {
                    Ok(info) => Self::Loaded(info),
                    Err(message) => Self::Failed { message, previous }
                };
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U160;
    use poolscope_types::pool::SqrtPriceX96;

    use super::*;

    fn info(tick: i32) -> PoolInfo {
        PoolInfo { sqrt_price_x96: SqrtPriceX96::from(U160::from(1u128 << 96)), tick, liquidity: 42 }
    }

    #[test]
    fn fetch_then_loaded() {
        let mut screen = PoolScreen::default();
        assert_eq!(screen.reduce(PoolAction::Fetch), Some(Effect::FetchPool));
        assert_eq!(screen, PoolScreen::Loading { previous: None });

        screen.reduce(PoolAction::Fetched(Ok(info(7))));
        assert_eq!(screen, PoolScreen::Loaded(info(7)));
    }

    #[test]
    fn fetch_while_loading_is_ignored() {
        let mut screen = PoolScreen::Loading { previous: None };
        assert_eq!(screen.reduce(PoolAction::Fetch), None);
        assert!(screen.is_loading());
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut screen = PoolScreen::Loaded(info(-5));
        screen.reduce(PoolAction::Fetch);
        screen.reduce(PoolAction::Fetched(Err("execution reverted".into())));

        assert_eq!(screen.error(), Some("execution reverted"));
        assert_eq!(screen.snapshot(), Some(&info(-5)));
    }

    #[test]
    fn retry_after_failure_clears_error() {
        let mut screen =
            PoolScreen::Failed { message: "timeout".into(), previous: Some(info(1)) };
        assert_eq!(screen.reduce(PoolAction::Fetch), Some(Effect::FetchPool));
        assert_eq!(screen.error(), None);
        assert_eq!(screen.snapshot(), Some(&info(1)));
    }

    #[test]
    fn unsolicited_result_is_dropped() {
        let mut screen = PoolScreen::Idle;
        screen.reduce(PoolAction::Fetched(Ok(info(3))));
        assert_eq!(screen, PoolScreen::Idle);
    }
}

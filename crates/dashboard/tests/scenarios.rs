use alloy::primitives::{Address, TxHash, U160, U256, address, aliases::I24};
use dashboard::{
    Dashboard, DashboardDriver, PoolAction, PoolDecimals, PoolScreen, Session, SessionAction,
    TokenAction, TokenMeta, driver::CONNECT_FALLBACK, token::Phase
};
use poolscope_eth::ContractHandle;
use poolscope_types::{
    client::{ConnectionStatus, WalletConnector},
    contract_bindings::{IERC20, IUniswapV3Pool, UNISWAP_V3_FACTORY, USDC, USDC_ETH_POOL},
    pool::{PoolInfo, SqrtPriceX96}
};
use testing_tools::mocks::{MockChainClient, MockConnector, MockWallet};
use uniswap_v3::PoolReader;

const ACCOUNT: Address = address!("ABCD00000000000000000000000000000000a11c");
const DEAD: Address = address!("000000000000000000000000000000000000dEaD");

struct Harness {
    client:    MockChainClient,
    connector: MockConnector,
    driver:    DashboardDriver<MockChainClient, MockConnector>
}

fn harness() -> Harness {
    let client = MockChainClient::new();
    let connector = MockConnector::new(MockWallet::new(ACCOUNT));
    let state = Dashboard::new(
        TokenMeta { symbol: "USDC".into(), decimals: 6 },
        PoolDecimals { token0: 6, token1: 18 }
    );
    let driver = DashboardDriver::new(
        state,
        connector.clone(),
        ContractHandle::new(USDC, Some(client.clone()), None),
        PoolReader::new(USDC_ETH_POOL, UNISWAP_V3_FACTORY, Some(client.clone()))
    );

    Harness { client, connector, driver }
}

fn slot0(tick: i32) -> IUniswapV3Pool::slot0Return {
    IUniswapV3Pool::slot0Return {
        sqrtPriceX96:               U160::from(1u128 << 96),
        tick:                       I24::try_from(tick).unwrap(),
        observationIndex:           0,
        observationCardinality:     1,
        observationCardinalityNext: 1,
        feeProtocol:                0,
        unlocked:                   true
    }
}

#[tokio::test]
async fn connecting_shows_the_reported_address() {
    let mut h = harness();
    assert!(h.driver.render().contains("[Connect Wallet]"));

    h.driver.dispatch(SessionAction::Connect).await;

    assert_eq!(h.driver.state().session, Session::Connected(ACCOUNT));
    assert_eq!(h.connector.status(), ConnectionStatus::Connected(ACCOUNT));
    let text = h.driver.render();
    assert!(text.contains(&format!("Connected: {ACCOUNT}")));
    assert!(!text.contains("[Connect Wallet]"));
}

#[tokio::test]
async fn failed_connect_is_retryable() {
    let mut h = harness();
    h.connector.fail_with("");

    h.driver.dispatch(SessionAction::Connect).await;
    assert_eq!(h.driver.state().session, Session::Failed(CONNECT_FALLBACK.to_string()));

    h.connector.succeed();
    h.driver.dispatch(SessionAction::Connect).await;
    assert_eq!(h.driver.state().account(), Some(ACCOUNT));
    assert_eq!(h.connector.connect_count(), 2);
}

#[tokio::test]
async fn transfer_writes_scaled_amount() {
    let mut h = harness();
    h.client
        .respond::<IERC20::balanceOfCall>(&U256::from(7_000_000u64));

    h.driver.dispatch(SessionAction::Connect).await;
    h.driver
        .dispatch(TokenAction::SetRecipient("0x0000000000000000000000000000000000dEaD".into()))
        .await;
    h.driver.dispatch(TokenAction::SetAmount("5".into())).await;
    h.driver.dispatch(TokenAction::SubmitTransfer).await;

    assert_eq!(
        h.client.simulated_calls::<IERC20::transferCall>(),
        vec![IERC20::transferCall { to: DEAD, amount: U256::from(5_000_000u64) }]
    );
    assert_eq!(h.connector.wallet().write_count(), 1);

    let token = &h.driver.state().token;
    assert_eq!(token.last_transfer, Some(TxHash::with_last_byte(1)));
    assert!(token.form.recipient.is_empty() && token.form.amount.is_empty());
    assert_eq!(token.balance.as_deref(), Some("7"));
    assert_eq!(token.phase, Phase::Idle);
}

#[tokio::test]
async fn transfer_with_bad_amount_never_reaches_client() {
    let mut h = harness();
    h.driver.dispatch(SessionAction::Connect).await;
    h.driver
        .dispatch(TokenAction::SetRecipient(DEAD.to_string()))
        .await;
    h.driver.dispatch(TokenAction::SetAmount("12,5".into())).await;
    h.driver.dispatch(TokenAction::SubmitTransfer).await;

    assert_eq!(h.client.simulate_count(), 0);
    assert!(
        h.driver
            .state()
            .token
            .error()
            .unwrap()
            .starts_with("Transfer failed: ")
    );
}

#[tokio::test]
async fn reverted_transfer_surfaces_message() {
    let mut h = harness();
    h.client
        .revert_simulation::<IERC20::transferCall>("ERC20: transfer amount exceeds balance");

    h.driver.dispatch(SessionAction::Connect).await;
    h.driver
        .dispatch(TokenAction::SetRecipient(DEAD.to_string()))
        .await;
    h.driver.dispatch(TokenAction::SetAmount("5".into())).await;
    h.driver.dispatch(TokenAction::SubmitTransfer).await;

    assert_eq!(h.connector.wallet().write_count(), 0);
    assert!(
        h.driver
            .render()
            .contains("Error: ERC20: transfer amount exceeds balance")
    );
    assert_eq!(h.driver.state().token.form.amount, "5");
}

#[tokio::test]
async fn balance_read_uses_connected_account() {
    let mut h = harness();
    h.client
        .respond::<IERC20::balanceOfCall>(&U256::from(12_340_000u64));

    h.driver.dispatch(TokenAction::FetchBalance).await;
    assert_eq!(h.client.read_count(), 0);

    h.driver.dispatch(SessionAction::Connect).await;
    h.driver.dispatch(TokenAction::FetchBalance).await;

    let request = &h.client.read_requests()[0];
    assert_eq!(request.address, USDC.address);
    assert!(h.driver.render().contains("Balance: 12.34 USDC"));
}

#[tokio::test]
async fn liquidity_failure_keeps_previous_snapshot() {
    let mut h = harness();
    h.client
        .respond::<IUniswapV3Pool::slot0Call>(&slot0(-197_000))
        .respond::<IUniswapV3Pool::liquidityCall>(&1_000u128);
    h.driver.dispatch(PoolAction::Fetch).await;

    let first = PoolInfo {
        sqrt_price_x96: SqrtPriceX96::from(U160::from(1u128 << 96)),
        tick:           -197_000,
        liquidity:      1_000
    };
    assert_eq!(h.driver.state().pool, PoolScreen::Loaded(first));

    h.client
        .respond::<IUniswapV3Pool::slot0Call>(&slot0(-196_000))
        .fail::<IUniswapV3Pool::liquidityCall>("execution reverted");
    h.driver.dispatch(PoolAction::Fetch).await;

    let pool = &h.driver.state().pool;
    assert_eq!(pool.error(), Some("execution reverted"));
    assert_eq!(pool.snapshot(), Some(&first));

    let text = h.driver.render();
    assert!(text.contains("Error: execution reverted"));
    assert!(text.contains("Current Tick: -197000"));
}

#[tokio::test]
async fn disconnect_drops_wallet_and_token_state() {
    let mut h = harness();
    h.client
        .respond::<IERC20::balanceOfCall>(&U256::from(1u64));
    h.driver.dispatch(SessionAction::Connect).await;
    h.driver.dispatch(TokenAction::FetchBalance).await;
    assert!(h.driver.token().wallet().is_some());

    h.driver.dispatch(SessionAction::Disconnect).await;

    assert_eq!(h.driver.state().session, Session::Disconnected);
    assert_eq!(h.driver.state().token.balance, None);
    assert!(h.driver.token().wallet().is_none());
    assert_eq!(h.connector.status(), ConnectionStatus::Disconnected);
}

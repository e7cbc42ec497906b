alloy::sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

contract_abi!(
    /// Fungible token, only the balance query and transfer are used.
    Erc20, "ERC20",
    view { IERC20::balanceOfCall },
    mutating { IERC20::transferCall }
);

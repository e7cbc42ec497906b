alloy::sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IUniswapV3Pool {
        function slot0() external view returns (
            uint160 sqrtPriceX96,
            int24 tick,
            uint16 observationIndex,
            uint16 observationCardinality,
            uint16 observationCardinalityNext,
            uint8 feeProtocol,
            bool unlocked
        );
        function liquidity() external view returns (uint128);
    }

    #[derive(Debug, PartialEq, Eq)]
    interface IUniswapV3Factory {
        function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool);
    }
}

contract_abi!(
    UniswapV3Pool, "UniswapV3Pool",
    view { IUniswapV3Pool::slot0Call, IUniswapV3Pool::liquidityCall },
    mutating {}
);

contract_abi!(
    UniswapV3Factory, "UniswapV3Factory",
    view { IUniswapV3Factory::getPoolCall },
    mutating {}
);

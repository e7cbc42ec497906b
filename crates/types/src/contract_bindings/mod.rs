//! Static contract configuration: sol bindings for the handful of functions
//! the dashboard calls, and the descriptor set each contract exposes.
//!
//! A contract is described by a zero-sized [`ContractAbi`] marker. The call
//! types generated by `sol!` are registered against that marker as either
//! [`ViewFunction`]s or [`MutatingFunction`]s, so asking a contract for a
//! function it does not have, or writing through a view function, fails to
//! compile.
use alloy::sol_types::SolCall;
use alloy_primitives::Address;

/// Registers a set of sol call types as the function descriptor set of a new
/// [`ContractAbi`] marker.
macro_rules! contract_abi {
    (
        $(#[$meta:meta])*
        $abi:ident, $name:literal,
        view { $($view:ty),* $(,)? },
        mutating { $($mutating:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $abi;

        impl $crate::contract_bindings::ContractAbi for $abi {
            const NAME: &'static str = $name;
            const FUNCTIONS: &'static [$crate::contract_bindings::FunctionDescriptor] = &[
                $(
                    $crate::contract_bindings::FunctionDescriptor::new(
                        <$view as alloy::sol_types::SolCall>::SIGNATURE,
                        $crate::contract_bindings::Mutability::View
                    ),
                )*
                $(
                    $crate::contract_bindings::FunctionDescriptor::new(
                        <$mutating as alloy::sol_types::SolCall>::SIGNATURE,
                        $crate::contract_bindings::Mutability::NonPayable
                    ),
                )*
            ];
        }

        $(impl $crate::contract_bindings::ViewFunction<$abi> for $view {})*
        $(impl $crate::contract_bindings::MutatingFunction<$abi> for $mutating {})*
    };
}

pub mod erc20;
pub mod uniswap_v3;

pub use erc20::{Erc20, IERC20};
pub use uniswap_v3::{IUniswapV3Factory, IUniswapV3Pool, UniswapV3Factory, UniswapV3Pool};

use crate::primitive::{UNISWAP_V3_FACTORY_ADDRESS, USDC_ADDRESS, USDC_ETH_POOL_ADDRESS};

pub const USDC: ContractConfig<Erc20> = ContractConfig::new(USDC_ADDRESS, Erc20);
pub const USDC_ETH_POOL: ContractConfig<UniswapV3Pool> =
    ContractConfig::new(USDC_ETH_POOL_ADDRESS, UniswapV3Pool);
pub const UNISWAP_V3_FACTORY: ContractConfig<UniswapV3Factory> =
    ContractConfig::new(UNISWAP_V3_FACTORY_ADDRESS, UniswapV3Factory);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    /// Reads state only, no signature or fee required.
    View,
    /// Changes state, needs a signed transaction.
    NonPayable
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionDescriptor {
    /// Canonical signature, e.g. `balanceOf(address)`.
    pub signature:  &'static str,
    pub mutability: Mutability
}

impl FunctionDescriptor {
    pub const fn new(signature: &'static str, mutability: Mutability) -> Self {
        Self { signature, mutability }
    }

    pub fn name(&self) -> &'static str {
        function_name(self.signature)
    }

    pub fn is_view(&self) -> bool {
        self.mutability == Mutability::View
    }
}

/// The static descriptor set of one contract.
pub trait ContractAbi: Copy + Send + Sync + Unpin + 'static {
    const NAME: &'static str;
    const FUNCTIONS: &'static [FunctionDescriptor];

    fn function(name: &str) -> Option<&'static FunctionDescriptor> {
        Self::FUNCTIONS.iter().find(|f| f.name() == name)
    }
}

/// A call that may be issued as a read against contract `A`.
pub trait ViewFunction<A: ContractAbi>: SolCall + Send + Sync {}

/// A call that must be simulated and signed against contract `A`.
pub trait MutatingFunction<A: ContractAbi>: SolCall + Send + Sync {}

/// Address plus descriptor set. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractConfig<A> {
    pub address: Address,
    pub abi:     A
}

impl<A: ContractAbi> ContractConfig<A> {
    pub const fn new(address: Address, abi: A) -> Self {
        Self { address, abi }
    }

    pub fn name(&self) -> &'static str {
        A::NAME
    }

    pub fn functions(&self) -> &'static [FunctionDescriptor] {
        A::FUNCTIONS
    }
}

/// Strips the parameter list off a canonical signature.
pub fn function_name(signature: &str) -> &str {
    signature
        .split_once('(')
        .map_or(signature, |(name, _)| name)
}

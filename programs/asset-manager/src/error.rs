//! Error types for the yield asset manager

use anchor_lang::prelude::*;

#[error_code]
pub enum AssetManagerError {
    // General errors
    #[msg("Overflow in arithmetic operation")]
    MathOverflow,

    #[msg("Invalid request")]
    InvalidRequest,

    // Construction errors
    #[msg("zero custodian")]
    ZeroCustodian,

    #[msg("zero ERC4626 vault")]
    ZeroYieldVault,

    #[msg("zero token")]
    ZeroToken,

    #[msg("zero reward forwarder")]
    ZeroRewardForwarder,

    // Lifecycle errors
    #[msg("Already initialised")]
    AlreadyInitialized,

    #[msg("Asset manager is not initialised")]
    NotInitialized,

    #[msg("Pool id cannot be empty")]
    EmptyPoolId,

    #[msg("AssetManager called with incorrect poolId")]
    IncorrectPoolId,

    // Authorization errors
    #[msg("Only callable by pool")]
    OnlyPool,

    #[msg("Only callable by authorized rebalancer")]
    OnlyRebalancer,

    #[msg("Only callable by the registered asset manager")]
    OnlyAssetManager,

    #[msg("Only relayer can join pool")]
    OnlyRelayerJoin,

    #[msg("Only relayer can exit pool")]
    OnlyRelayerExit,

    #[msg("Account does not match the asset manager configuration")]
    InvalidDependency,

    // Investment config errors
    #[msg("Upper critical level must be less than or equal to 100%")]
    UpperCriticalTooHigh,

    #[msg("Target must be less than or equal to upper critical level")]
    TargetAboveUpperCritical,

    #[msg("Lower critical level must be less than or equal to target")]
    LowerCriticalAboveTarget,

    // Vault integrity errors
    #[msg("AM should receive shares after the deposit")]
    NoSharesReceived,

    #[msg("AM should receive requested tokens after the withdraw")]
    InsufficientTokensReceived,

    #[msg("AM should burn shares on the withdraw")]
    NoSharesBurned,

    #[msg("Vault asset does not match the managed token")]
    VaultAssetMismatch,

    // Relayer errors
    #[msg("Rebalancing relayer reentered")]
    RelayerReentered,

    // Ledger errors
    #[msg("Token is not supported")]
    UnsupportedToken,

    #[msg("Token is already registered")]
    TokenAlreadyRegistered,

    #[msg("Token already has a different asset manager")]
    AssetManagerAlreadyRegistered,

    #[msg("Insufficient cash balance")]
    InsufficientCash,

    #[msg("Insufficient managed balance")]
    InsufficientManaged,

    #[msg("Insufficient vault shares")]
    InsufficientShares,

    #[msg("Insufficient vault liquidity")]
    InsufficientVaultLiquidity,

    #[msg("Ledger capacity reached")]
    CapacityReached,

    #[msg("Invalid ledger configuration")]
    InvalidLedgerConfig,

    #[msg("Invalid fee configuration")]
    InvalidFee,

    #[msg("Gauge account was not provided")]
    GaugeNotProvided,
}

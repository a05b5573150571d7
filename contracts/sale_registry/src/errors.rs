use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    NotAuthorized = 3,

    // --- Sale records (4–5) ---
    SaleNotFound = 4,
    SaleAlreadyExists = 5,

    // --- Input validation (6–7) ---
    InvalidTokenData = 6,
    InvalidAmount = 7,

    // --- State transitions (8–14) ---
    SaleInactive = 8,
    SalePaused = 9,
    TokensNotSold = 10,
    ClaimPeriodStarted = 11,
    TokensAlreadySold = 12,
    TokensNotAvailable = 13,
    UnsupportedAction = 14,

    // --- Arithmetic (15) ---
    ArithmeticOverflow = 15,
}

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

    // --- Bonds (4) ---
    InvalidBondData = 4,

    // --- Positions (5–7) ---
    AmountTooBig = 5,
    InsufficientClaimable = 6,
    TokenPaused = 7,

    // --- Input validation (8–9) ---
    InvalidAmount = 8,
    UnsupportedAction = 9,

    // --- Arithmetic (10) ---
    ArithmeticOverflow = 10,
}

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

    // --- Referral graph (4–8) ---
    FatherExists = 4,
    ChildExists = 5,
    FatherNotFound = 6,
    LevelNotFound = 7,
    SelfReferral = 8,

    // --- Input validation (9–11) ---
    InvalidLevelTable = 9,
    InvalidAmount = 10,
    EmptyBatch = 11,

    // --- Arithmetic (12) ---
    ArithmeticOverflow = 12,
}

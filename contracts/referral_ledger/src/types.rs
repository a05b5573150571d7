use soroban_sdk::{contracttype, Address};

/// One row of the level table: fathers at `level` earn `percent` basis points.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LevelPercent {
    pub level: u32,
    pub percent: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReferralNode {
    pub is_present: bool,
    pub level: u32,          // Index into the level table
    pub children_count: u32, // Children live under DataKey::Child(father, 0..count)
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReferralPair {
    pub father: Address,
    pub child: Address,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LevelUpdate {
    pub father: Address,
    pub level: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReferralConfig {
    pub referral_token: Address, // Fees are paid from this token's balance
    pub root_caller: Address,    // Contract allowed to trigger payouts (the sale registry)
    pub helper_account: Address, // May link children and update levels
    /// Privileged callers linking a child to an unknown father create the
    /// father node on the fly instead of failing.
    pub auto_create_father: bool,
}

#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    Levels,
    Node(Address),     // Father -> ReferralNode
    FatherOf(Address), // Child -> father
    Child(Address, u32), // (father, index) -> child
}

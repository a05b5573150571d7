use crate::errors::Error;
use crate::types::{LockPosition, SecondaryDeposit};
use soroban_sdk::Map;

/// Result of one catch-up pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Accrual {
    pub boundaries: u32,
    pub reward: i128,
}

fn add(a: i128, b: i128) -> Result<i128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}

impl LockPosition {
    /// Whether the position holds an open bucket.
    pub fn is_open(&self) -> bool {
        self.init_time_create != 0
    }

    /// Matured principal plus every pending secondary deposit.
    pub fn total_locked(&self) -> Result<i128, Error> {
        let mut total = self.init_locked;
        for deposit in self.secondary.iter() {
            total = add(total, deposit.amount)?;
        }
        Ok(total)
    }

    /// Fold every registered bond boundary up to `now` into `earned` and
    /// `to_claim`.
    ///
    /// Boundaries are visited in increasing order. Before accrual starts the
    /// first eligible boundary is `init_time_create` itself; afterwards only
    /// boundaries strictly after `last_calculation_timestamp` count. At each
    /// boundary deposits that matured earlier join the principal, the reward
    /// is taken on that principal, and only then are deposits maturing at the
    /// boundary folded. Deposits matured by `now` are folded at the end.
    pub fn catch_up(&mut self, bonds: &Map<u64, u32>, now: u64) -> Result<Accrual, Error> {
        let mut accrual = Accrual::default();
        if !self.is_open() {
            return Ok(accrual);
        }

        for (timestamp, percent) in bonds.iter() {
            if timestamp > now {
                break;
            }
            let pending = if self.accruing {
                timestamp > self.last_calculation_timestamp
            } else {
                timestamp >= self.init_time_create
            };
            if !pending {
                continue;
            }

            self.fold_matured(timestamp, false)?;
            let reward =
                fp_math::percent_of(self.init_locked, percent).ok_or(Error::ArithmeticOverflow)?;
            self.earned = add(self.earned, reward)?;
            self.to_claim = add(self.to_claim, reward)?;
            self.fold_matured(timestamp, true)?;

            self.last_calculation_timestamp = timestamp;
            self.accruing = true;
            accrual.boundaries += 1;
            accrual.reward = add(accrual.reward, reward)?;
        }

        self.fold_matured(now, true)?;
        Ok(accrual)
    }

    /// Add `amount` maturing at `bucket`.
    ///
    /// An empty position opens a new bucket. A deposit landing in the open
    /// bucket before accrual starts joins the principal; otherwise it merges
    /// into a pending deposit with the same bucket or is appended.
    pub fn deposit(&mut self, amount: i128, bucket: u64) -> Result<(), Error> {
        if !self.is_open() {
            self.init_locked = add(self.init_locked, amount)?;
            self.init_time_create = bucket;
            self.last_calculation_timestamp = bucket;
            self.accruing = false;
            return Ok(());
        }
        if !self.accruing && bucket == self.init_time_create {
            self.init_locked = add(self.init_locked, amount)?;
            return Ok(());
        }

        for index in 0..self.secondary.len() {
            if let Some(mut pending) = self.secondary.get(index) {
                if pending.timestamp == bucket {
                    pending.amount = add(pending.amount, amount)?;
                    self.secondary.set(index, pending);
                    return Ok(());
                }
            }
        }
        self.secondary.push_back(SecondaryDeposit {
            amount,
            timestamp: bucket,
        });
        Ok(())
    }

    /// Take `amount` out, pending deposits first (oldest first), then the
    /// principal. Closes the bucket once nothing is left.
    pub fn withdraw(&mut self, amount: i128) -> Result<(), Error> {
        if amount > self.total_locked()? {
            return Err(Error::AmountTooBig);
        }

        let mut remaining = amount;
        while remaining > 0 {
            let Some(mut pending) = self.secondary.first() else {
                break;
            };
            if pending.amount <= remaining {
                remaining -= pending.amount;
                self.secondary.pop_front();
            } else {
                pending.amount -= remaining;
                remaining = 0;
                self.secondary.set(0, pending);
            }
        }
        self.init_locked -= remaining;

        if self.init_locked == 0 && self.secondary.is_empty() {
            self.init_time_create = 0;
            self.last_calculation_timestamp = 0;
            self.accruing = false;
        }
        Ok(())
    }

    /// Debit up to `amount` from `to_claim`, returning what was taken.
    pub fn take_claimable(&mut self, amount: i128) -> i128 {
        let taken = amount.min(self.to_claim);
        self.to_claim -= taken;
        taken
    }

    // Move pending deposits maturing before (or at, when `inclusive`)
    // `boundary` into the principal.
    fn fold_matured(&mut self, boundary: u64, inclusive: bool) -> Result<(), Error> {
        while let Some(pending) = self.secondary.first() {
            let matured = if inclusive {
                pending.timestamp <= boundary
            } else {
                pending.timestamp < boundary
            };
            if !matured {
                break;
            }
            self.init_locked = add(self.init_locked, pending.amount)?;
            self.secondary.pop_front();
        }
        Ok(())
    }
}

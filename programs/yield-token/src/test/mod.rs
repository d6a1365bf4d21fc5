//! In-memory ledger used by the scenario suites. It drives the same
//! settlement and state functions the instruction handlers call.


use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;

use crate::constants::{UNCLAIMED_YIELD_ACCOUNT, UNDISTRIBUTED_YIELD_ACCOUNT};
use crate::error::YieldTokenError;
use crate::state::{Holding, Ledger};
use crate::utils::settlement::{self, Distribution};

pub const TOKEN: u64 = 1_000_000_000;

pub struct Bench {
    pub ledger: Ledger,
    pub holdings: HashMap<Pubkey, Holding>,
}

impl Bench {
    /// Ledger with `undistributed` in the yield sink and the rest held by
    /// `holder`.
    pub fn deploy(
        total_supply: u64,
        undistributed: u64,
        holder: Pubkey,
        permanent_exclusions: Vec<Pubkey>,
    ) -> Self {
        let ledger = Ledger {
            total_supply,
            permanent_exclusions,
            ..Default::default()
        };
        let mut bench = Bench {
            ledger,
            holdings: HashMap::new(),
        };
        bench.open(UNDISTRIBUTED_YIELD_ACCOUNT);
        bench.open(UNCLAIMED_YIELD_ACCOUNT);
        bench.open(holder);

        let holder_exempt = bench.ledger.is_yield_exempt(&holder);
        bench.holding_mut(UNDISTRIBUTED_YIELD_ACCOUNT).balance = undistributed;
        bench.holding_mut(holder).balance = total_supply - undistributed;
        bench.ledger.exempt_supply = if holder_exempt {
            total_supply
        } else {
            undistributed
        };
        bench
    }

    pub fn open(&mut self, owner: Pubkey) {
        let exempt = self.ledger.is_yield_exempt(&owner);
        self.holdings
            .entry(owner)
            .or_insert_with(|| Holding::new(owner, self.ledger.global_index, exempt, 0));
    }

    /// Opens the holding of `owner` as an escrow, like the vesting and lock
    /// initializers do.
    pub fn open_escrow(&mut self, owner: Pubkey) {
        self.open(owner);
        let holding = self.holdings.get_mut(&owner).unwrap();
        settlement::adopt_escrow(&self.ledger, holding, owner, 0);
    }

    pub fn holding(&self, owner: Pubkey) -> &Holding {
        &self.holdings[&owner]
    }

    pub fn holding_mut(&mut self, owner: Pubkey) -> &mut Holding {
        self.holdings.get_mut(&owner).unwrap()
    }

    pub fn balance(&self, owner: Pubkey) -> u64 {
        self.holding(owner).balance
    }

    pub fn unclaimed(&self, owner: Pubkey) -> u64 {
        self.holding(owner)
            .pending_yield(self.ledger.global_index)
            .unwrap()
    }

    fn take(&mut self, owner: Pubkey) -> Holding {
        self.holdings.remove(&owner).unwrap()
    }

    fn put(&mut self, holding: Holding) {
        self.holdings.insert(holding.owner, holding);
    }

    /// Runs `f` over the ledger and the holdings of `owners` (distinct,
    /// opened on demand), then puts the holdings back.
    pub fn with<const N: usize, R>(
        &mut self,
        owners: [Pubkey; N],
        f: impl FnOnce(&mut Ledger, &mut [Holding; N]) -> R,
    ) -> R {
        for owner in owners {
            self.open(owner);
        }
        let mut taken = owners.map(|owner| self.take(owner));
        let res = f(&mut self.ledger, &mut taken);
        for holding in taken {
            self.put(holding);
        }
        res
    }

    pub fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<(), YieldTokenError> {
        if from == to {
            let h = self.holdings.get_mut(&from).unwrap();
            let mut twin = h.clone();
            return settlement::transfer(&mut self.ledger, h, &mut twin, amount);
        }
        self.open(to);
        let mut f = self.take(from);
        let mut t = self.take(to);
        let res = settlement::transfer(&mut self.ledger, &mut f, &mut t, amount);
        self.put(f);
        self.put(t);
        res
    }

    pub fn distribute(
        &mut self,
        amount: u64,
        excluded: &[Pubkey],
    ) -> Result<Distribution, YieldTokenError> {
        let mut undistributed = self.take(UNDISTRIBUTED_YIELD_ACCOUNT);
        let mut unclaimed = self.take(UNCLAIMED_YIELD_ACCOUNT);
        let mut taken: Vec<Holding> = Vec::new();
        for owner in excluded {
            match self.holdings.remove(owner) {
                Some(h) => taken.push(h),
                // a repeated owner: hand the same record in twice
                None => {
                    let twin = taken.iter().find(|h| h.owner == *owner).unwrap().clone();
                    taken.push(twin);
                }
            }
        }
        let res = {
            let mut refs: Vec<&mut Holding> = taken.iter_mut().collect();
            settlement::distribute(
                &mut self.ledger,
                &mut undistributed,
                &mut unclaimed,
                &mut refs,
                amount,
            )
        };
        for h in taken {
            self.put(h);
        }
        self.put(undistributed);
        self.put(unclaimed);
        res
    }

    pub fn claim(&mut self, owner: Pubkey) -> Result<u64, YieldTokenError> {
        let mut h = self.take(owner);
        let mut unclaimed = self.take(UNCLAIMED_YIELD_ACCOUNT);
        let res = settlement::claim_yield(&mut self.ledger, &mut h, &mut unclaimed);
        self.put(h);
        self.put(unclaimed);
        res
    }

    pub fn sum_balances(&self) -> u64 {
        self.holdings.values().map(|h| h.balance).sum()
    }

    pub fn sum_pending(&self) -> u64 {
        self.holdings
            .values()
            .map(|h| h.pending_yield(self.ledger.global_index).unwrap())
            .sum()
    }

    /// Conservation and reserve coverage; returns the dust left in the
    /// unclaimed sink.
    pub fn check_invariants(&self) -> u64 {
        assert_eq!(self.sum_balances(), self.ledger.total_supply);
        let exempt: u64 = self
            .holdings
            .values()
            .filter(|h| h.yield_exempt)
            .map(|h| h.balance)
            .sum();
        assert_eq!(exempt, self.ledger.exempt_supply);
        let reserve = self.balance(UNCLAIMED_YIELD_ACCOUNT);
        let pending = self.sum_pending();
        assert!(reserve >= pending, "reserve {reserve} < pending {pending}");
        reserve - pending
    }
}

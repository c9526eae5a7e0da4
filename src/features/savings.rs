use super::account::{Account, AccountResult, Ledger};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// Savings account. Deposits are unlimited, but more than
/// [`SavingsAccount::FREE_WITHDRAWALS`] withdrawals in a month cost
/// [`SavingsAccount::EXCESS_WITHDRAWAL_FEE`] at monthly maintenance.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SavingsAccount {
    #[serde(flatten)]
    ledger: Ledger,
}

impl SavingsAccount {
    pub const FREE_WITHDRAWALS: u32 = 6;
    pub const EXCESS_WITHDRAWAL_FEE: Decimal = dec!(14.00);

    pub fn new(starter_amount: Decimal) -> AccountResult<Self> {
        Ledger::new(starter_amount).map(|ledger| Self { ledger })
    }
}

impl Account for SavingsAccount {
    fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        self.ledger.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount < Decimal::ZERO {
            warn!("Rejected negative savings withdrawal of {amount}");
            return false;
        }
        self.ledger.withdraw(amount)
    }

    fn get_balance(&self) -> Decimal {
        self.ledger.balance()
    }

    fn transaction_count(&self) -> u32 {
        self.ledger.transaction_count()
    }

    fn perform_monthly_maintenance(&mut self) -> Decimal {
        let withdrawals = self.ledger.transaction_count();
        let mut fee = Decimal::ZERO;

        if withdrawals > Self::FREE_WITHDRAWALS {
            fee = Self::EXCESS_WITHDRAWAL_FEE;
            self.ledger.charge_fee(fee);
            info!(
                "Charged {fee} for {withdrawals} savings withdrawals, balance is now {}",
                self.ledger.balance()
            );
        }
        self.ledger.reset_transaction_count();

        fee
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ledger, f)
    }
}

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Smallest amount an account can be opened with.
pub const MINIMUM_STARTER_AMOUNT: Decimal = dec!(0.01);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid starter amount {0}. An account must be opened with at least one cent")]
    InvalidConstructionArgument(Decimal),

    #[error("Invalid deposit amount {0}. Deposits cannot be negative")]
    InvalidDepositArgument(Decimal),

    #[error("Deposit of {amount} would overflow the balance of {balance}")]
    DepositOverflow { amount: Decimal, balance: Decimal },
}

pub type AccountResult<T> = Result<T, AccountError>;

/// Rounds to whole cents, half a cent rounding away from zero.
fn round_cents(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

/// Renders an amount in dollars/cents format, e.g. `$10.00`
pub fn format_balance(amount: Decimal) -> String {
    format!("${}", round_cents(amount))
}

fn round_serialize<S>(amount: &Decimal, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Serialize to 2 decimal
    s.serialize_str(round_cents(*amount).to_string().as_str())
}

/// Balance and withdrawal bookkeeping shared by every kind of account
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Ledger {
    #[serde(serialize_with = "round_serialize")]
    balance: Decimal,

    /// Successful withdrawals since the last monthly maintenance
    transaction_count: u32,
}

impl Ledger {
    pub(crate) fn new(starter_amount: Decimal) -> AccountResult<Self> {
        if starter_amount < MINIMUM_STARTER_AMOUNT {
            warn!("Refusing to open account with {starter_amount}");
            return Err(AccountError::InvalidConstructionArgument(starter_amount));
        }

        Ok(Self {
            balance: starter_amount,
            transaction_count: 0,
        })
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transaction_count(&self) -> u32 {
        self.transaction_count
    }

    pub(crate) fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        if amount < Decimal::ZERO {
            warn!("Rejected deposit of {amount}");
            return Err(AccountError::InvalidDepositArgument(amount));
        }

        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            warn!("Rejected deposit of {amount}, balance {} would overflow", self.balance);
            AccountError::DepositOverflow {
                amount,
                balance: self.balance,
            }
        })?;
        debug!("Deposited {amount}, balance is now {}", self.balance);
        Ok(())
    }

    pub(crate) fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount < Decimal::ZERO || amount > self.balance {
            warn!(
                "Rejected withdrawal of {amount}, {} available",
                self.balance
            );
            return false;
        }

        self.balance -= amount;
        self.transaction_count = self.transaction_count.saturating_add(1);
        debug!(
            "Withdrew {amount}, balance is now {} after {} withdrawal(s)",
            self.balance, self.transaction_count
        );
        true
    }

    /// Fees are not floored, so they can leave the balance negative.
    pub(crate) fn charge_fee(&mut self, fee: Decimal) {
        self.balance -= fee;
    }

    pub(crate) fn reset_transaction_count(&mut self) {
        self.transaction_count = 0;
    }
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(format_balance(self.balance).as_str())
    }
}

/// A bank account holding a balance which can be deposited into, withdrawn from and
/// which is charged its fees once a month.
///
/// Accounts keep their ledger private, so the balance only ever changes through
/// these operations:
///
/// ```compile_fail
/// use bank_accounts::{Account, CheckingAccount};
/// use rust_decimal_macros::dec;
///
/// let mut checking = CheckingAccount::new(dec!(500)).unwrap();
/// let account: &mut dyn Account = &mut checking;
/// account.ledger_mut();
/// ```
pub trait Account: fmt::Display {
    /// Credits `amount` to the account. Negative amounts are rejected and leave the
    /// account untouched.
    fn deposit(&mut self, amount: Decimal) -> AccountResult<()>;

    /// Debits `amount` from the account, returning whether the withdrawal went through.
    /// Negative amounts and amounts above the balance are refused.
    fn withdraw(&mut self, amount: Decimal) -> bool;

    fn get_balance(&self) -> Decimal;

    fn transaction_count(&self) -> u32;

    /// Charges the month's fees and resets the transaction counter for the next month.
    /// Returns the fee charged, zero when none applied.
    fn perform_monthly_maintenance(&mut self) -> Decimal;
}

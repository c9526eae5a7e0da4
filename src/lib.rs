//! Checking and savings accounts with month-end maintenance fees.
//!
//! Every account keeps a private ledger of its balance and of the withdrawals made since the
//! last maintenance. Each kind of [`Account`] applies its own fee rule when
//! [`Account::perform_monthly_maintenance`] is called:
//!
//! - [`CheckingAccount`] charges a flat fee if the balance dipped under the minimum
//!   during the month.
//! - [`SavingsAccount`] charges a flat fee if more withdrawals than the free limit were
//!   made during the month.
//!
//! Accounts are plain owned values with no internal locking. Callers sharing one across
//! threads must serialize access themselves.
#[macro_use]
extern crate log;

mod features;

pub use features::{
    format_balance, Account, AccountError, AccountResult, CheckingAccount,
    SavingsAccount, MINIMUM_STARTER_AMOUNT,
};

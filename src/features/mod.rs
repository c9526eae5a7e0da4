mod account;
mod checking;
mod savings;

pub use self::{
    account::{
        format_balance, Account, AccountError, AccountResult, MINIMUM_STARTER_AMOUNT,
    },
    checking::CheckingAccount,
    savings::SavingsAccount,
};

use super::account::{Account, AccountResult, Ledger};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// Checking account. If the balance falls below [`CheckingAccount::MINIMUM_BALANCE`] at
/// any time during the month, [`CheckingAccount::MAINTENANCE_FEE`] is charged when the
/// monthly maintenance is performed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckingAccount {
    #[serde(flatten)]
    ledger: Ledger,

    /// Set by any withdrawal leaving the balance under the minimum. Only a deposit
    /// bringing the balance back to the minimum clears it.
    below_minimum: bool,
}

impl CheckingAccount {
    pub const MINIMUM_BALANCE: Decimal = dec!(100.00);
    pub const MAINTENANCE_FEE: Decimal = dec!(5.00);

    pub fn new(starter_amount: Decimal) -> AccountResult<Self> {
        Ok(Self {
            ledger: Ledger::new(starter_amount)?,
            below_minimum: starter_amount < Self::MINIMUM_BALANCE,
        })
    }

    pub fn is_below_minimum(&self) -> bool {
        self.below_minimum
    }
}

impl Account for CheckingAccount {
    fn deposit(&mut self, amount: Decimal) -> AccountResult<()> {
        self.ledger.deposit(amount)?;
        if self.ledger.balance() >= Self::MINIMUM_BALANCE {
            self.below_minimum = false;
        }
        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> bool {
        let withdrawn = self.ledger.withdraw(amount);
        // Checked even when the withdrawal was refused
        if self.ledger.balance() < Self::MINIMUM_BALANCE {
            self.below_minimum = true;
        }
        withdrawn
    }

    fn get_balance(&self) -> Decimal {
        self.ledger.balance()
    }

    fn transaction_count(&self) -> u32 {
        self.ledger.transaction_count()
    }

    fn perform_monthly_maintenance(&mut self) -> Decimal {
        let fee = if self.below_minimum {
            Self::MAINTENANCE_FEE
        } else {
            Decimal::ZERO
        };

        if !fee.is_zero() {
            self.ledger.charge_fee(fee);
            info!(
                "Charged {fee} checking maintenance fee, balance is now {}",
                self.ledger.balance()
            );
        }
        self.ledger.reset_transaction_count();

        fee
    }
}

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ledger, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::account::AccountError;
    use test_case::test_case;

    fn account(starter_amount: Decimal) -> CheckingAccount {
        let _ = env_logger::builder().is_test(true).try_init();
        CheckingAccount::new(starter_amount).unwrap()
    }

    #[test_case(dec!(100.0), false ; "at the minimum")]
    #[test_case(dec!(99.99), true ; "just under the minimum")]
    #[test_case(dec!(0.01), true ; "one cent")]
    fn flag_starts_from_starter_amount(starter_amount: Decimal, below_minimum: bool) {
        assert_eq!(account(starter_amount).is_below_minimum(), below_minimum);
    }

    #[test]
    fn refuses_starter_amount_under_a_cent() {
        assert_eq!(
            CheckingAccount::new(dec!(0)),
            Err(AccountError::InvalidConstructionArgument(dec!(0)))
        );
    }

    #[test]
    fn maintenance_charges_fee_after_dipping_under_minimum() {
        let mut account = account(dec!(100.0));

        assert!(account.withdraw(dec!(10.0)));
        assert_eq!(account.get_balance(), dec!(90.0));
        assert!(account.is_below_minimum());

        assert_eq!(account.perform_monthly_maintenance(), dec!(5.00));
        assert_eq!(account.get_balance(), dec!(85.0));
        assert_eq!(account.transaction_count(), 0);
        assert_eq!(account.to_string(), "$85.00");
    }

    #[test]
    fn deposit_back_to_minimum_clears_flag() {
        let mut account = account(dec!(50.0));
        assert!(account.is_below_minimum());

        account.deposit(dec!(60.0)).unwrap();
        assert_eq!(account.get_balance(), dec!(110.0));
        assert!(!account.is_below_minimum());

        assert_eq!(account.perform_monthly_maintenance(), Decimal::ZERO);
        assert_eq!(account.get_balance(), dec!(110.0));
    }

    #[test]
    fn deposit_short_of_minimum_keeps_flag() {
        let mut account = account(dec!(50.0));
        account.deposit(dec!(49.99)).unwrap();

        assert!(account.is_below_minimum());
    }

    #[test]
    fn flag_sticks_until_a_deposit_clears_it() {
        let mut account = account(dec!(150.0));

        assert!(account.withdraw(dec!(60.0)));
        assert!(account.is_below_minimum());

        account.deposit(dec!(5.0)).unwrap();
        assert!(account.is_below_minimum());
        account.deposit(dec!(5.0)).unwrap();
        assert_eq!(account.get_balance(), dec!(100.0));
        assert!(!account.is_below_minimum());
    }

    #[test]
    fn refused_withdrawal_at_minimum_leaves_flag_clear() {
        let mut account = account(dec!(100.0));

        assert!(!account.withdraw(dec!(-1.0)));
        assert!(!account.withdraw(dec!(500.0)));
        assert_eq!(account.get_balance(), dec!(100.0));
        assert_eq!(account.transaction_count(), 0);
        assert!(!account.is_below_minimum());
    }

    #[test]
    fn refused_withdrawal_under_minimum_keeps_flag() {
        let mut account = account(dec!(50.0));

        assert!(!account.withdraw(dec!(50.01)));
        assert_eq!(account.get_balance(), dec!(50.0));
        assert!(account.is_below_minimum());
    }

    #[test]
    fn negative_deposit_is_rejected_without_changes() {
        let mut account = account(dec!(50.0));

        assert_eq!(
            account.deposit(dec!(-60.0)),
            Err(AccountError::InvalidDepositArgument(dec!(-60.0)))
        );
        assert_eq!(account.get_balance(), dec!(50.0));
        assert!(account.is_below_minimum());
    }

    #[test]
    fn overflowing_deposit_keeps_flag() {
        let mut account = account(dec!(50.0));

        assert_eq!(
            account.deposit(Decimal::MAX),
            Err(AccountError::DepositOverflow {
                amount: Decimal::MAX,
                balance: dec!(50.0),
            })
        );
        assert_eq!(account.get_balance(), dec!(50.0));
        assert!(account.is_below_minimum());
    }

    #[test]
    fn fee_can_overdraw_the_account() {
        let mut account = account(dec!(3.0));

        assert_eq!(account.perform_monthly_maintenance(), dec!(5.00));
        assert_eq!(account.get_balance(), dec!(-2.0));
        assert_eq!(account.to_string(), "$-2.00");
    }

    #[test]
    fn maintenance_leaves_flag_as_is() {
        let mut account = account(dec!(104.0));
        assert_eq!(account.perform_monthly_maintenance(), Decimal::ZERO);
        assert!(!account.is_below_minimum());

        // Charged every month until a deposit clears the flag
        let mut flagged = CheckingAccount::new(dec!(99.0)).unwrap();
        assert_eq!(flagged.perform_monthly_maintenance(), dec!(5.00));
        assert!(flagged.is_below_minimum());
        assert_eq!(flagged.perform_monthly_maintenance(), dec!(5.00));
        assert_eq!(flagged.get_balance(), dec!(89.0));
    }

    #[test]
    fn serializes_flag_alongside_ledger() {
        let mut account = account(dec!(100.0));
        assert!(account.withdraw(dec!(10.0)));

        let json = serde_json::to_string(&account).unwrap();
        assert_eq!(
            json,
            r#"{"balance":"90.00","transaction_count":1,"below_minimum":true}"#
        );
    }
}

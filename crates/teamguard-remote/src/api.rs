use crate::error::RemoteError;
use teamguard_types::Account;

/// Membership operations the action executor needs.
///
/// [`HerokuClient`](crate::HerokuClient) is the production implementation;
/// tests substitute an in-memory fake.
pub trait MembershipApi {
    /// Fetch the full roster, following pagination until exhausted.
    ///
    /// Duplicate emails across pages are an error, not a dedup.
    fn fetch_roster(&self) -> Result<Vec<Account>, RemoteError>;

    /// Resolve a single email to an account, preferring a targeted lookup
    /// where the API supports one. `Ok(None)` means not a member.
    fn find_account(&self, email: &str) -> Result<Option<Account>, RemoteError>;

    /// Remove the membership for an already-resolved account.
    fn revoke_membership(&self, account: &Account) -> Result<(), RemoteError>;
}

use cc_core::User;
use cc_db::Result as DbErrorResult;

use async_trait::async_trait;

/// Side effect run once a new account has been committed.
///
/// Listeners run in registration order. A failure is logged and does not
/// undo the registration or stop later listeners.
#[async_trait]
pub trait RegistrationListener: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &'static str;

    async fn on_registered(&self, user: &User) -> DbErrorResult<()>;
}

use std::time::Duration;

use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Single-shot timer for the copy confirmation.
///
/// At most one expiry is pending: scheduling again cancels the previous one, and
/// dropping the timer cancels whatever is still pending.
pub struct CopyTimer {
    runtime: Handle,
    pending: Option<CancellationToken>,
}

impl CopyTimer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
        }
    }

    /// Runs `on_expire` after `delay` unless cancelled or replaced first.
    pub fn schedule<F>(&mut self, delay: Duration, on_expire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let token = CancellationToken::new();
        let guard = token.clone();
        self.runtime.spawn(async move {
            let elapsed = guard
                .run_until_cancelled(tokio::time::sleep(delay))
                .await
                .is_some();
            if elapsed && !guard.is_cancelled() {
                guard.cancel();
                on_expire();
            }
        });
        self.pending = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }
}

impl Drop for CopyTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

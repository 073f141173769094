//! Bounded graceful shutdown
//!
//! The server future keeps running until every open connection has closed.
//! Once a shutdown signal has been observed, `drain` gives it a fixed grace
//! period and then returns so `main` can exit normally.

use std::{future::Future, time::Duration};

use tokio::sync::oneshot;

/// How the server future ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drain {
    /// All connections closed in time
    Complete,
    /// The grace period elapsed with connections still open
    TimedOut,
}

/// Drive `server` to completion, bounding the wait after `signalled` fires
///
/// Errors from `server` are passed through unchanged.
pub async fn drain<F, E>(
    server: F,
    signalled: oneshot::Receiver<()>,
    grace: Duration,
) -> Result<Drain, E>
where
    F: Future<Output = Result<(), E>>,
{
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map(|()| Drain::Complete),
        received = signalled => {
            if received.is_err() {
                // Sender gone without a signal: no deadline applies.
                return server.await.map(|()| Drain::Complete);
            }
        }
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => result.map(|()| Drain::Complete),
        Err(_) => Ok(Drain::TimedOut),
    }
}

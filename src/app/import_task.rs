use crate::import::{ImportError, SheetSource};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;
use tracing::debug;

pub type ImportOutcome = Result<Vec<String>, ImportError>;

/// A remote import running on its own thread.
///
/// Nothing guards against several of these being in flight at once; whichever
/// finishes last decides the final email list.
pub struct PendingImport {
    pub url: String,
    rx: Receiver<(Instant, ImportOutcome)>,
}

impl PendingImport {
    pub fn spawn<S>(source: S, url: String) -> Self
    where
        S: SheetSource + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker_url = url.clone();

        thread::spawn(move || {
            let outcome = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(source.fetch_first_column(&worker_url)),
                Err(e) => Err(ImportError::Io(e)),
            };
            debug!(url = %worker_url, ok = outcome.is_ok(), "Remote import finished");
            let _ = tx.send((Instant::now(), outcome));
        });

        Self { url, rx }
    }

    /// The outcome and the moment the worker finished, once it has.
    pub fn try_take(&self) -> Option<(Instant, ImportOutcome)> {
        match self.rx.try_recv() {
            Ok(finished) => Some(finished),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some((
                Instant::now(),
                Err(ImportError::Service(
                    "Import stopped unexpectedly".to_string(),
                )),
            )),
        }
    }
}

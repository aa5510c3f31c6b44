//! Screen-scoped task ownership.

use std::future::Future;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Owns the tasks spawned on behalf of one screen.
///
/// Every task is aborted when the owning state holder is dropped — the only
/// cancellation semantic in the system.
#[derive(Default)]
pub(crate) struct TaskScope {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl TaskScope {
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut handles = self.handles.lock();
        handles.retain(|handle| !handle.is_finished());
        handles.push(tokio::spawn(future));
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        for handle in self.handles.lock().drain(..) {
            handle.abort();
        }
    }
}

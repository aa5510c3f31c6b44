//! Live-query plumbing.
//!
//! A live query hands out a [`watch::Receiver`]: a fresh subscriber reads the
//! current value immediately and observes every subsequent write, until it
//! unsubscribes by dropping the receiver. Writers publish with
//! `send_replace`, which multicasts the new value to all current subscribers.

use tokio::sync::watch;

/// Derives one live value from another.
///
/// Spawns a forwarding task that applies `f` to the source's current value
/// and to every change. The task ends when the source closes or when every
/// derived receiver has been dropped.
pub fn map_watch<T, U, F>(mut source: watch::Receiver<T>, f: F) -> watch::Receiver<U>
where
    T: Send + Sync + 'static,
    U: Send + Sync + 'static,
    F: Fn(&T) -> U + Send + 'static,
{
    let initial = f(&source.borrow());
    let (tx, rx) = watch::channel(initial);

    tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = source.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let next = f(&source.borrow_and_update());
                    if tx.send(next).is_err() {
                        break;
                    }
                }
                () = tx.closed() => break,
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_subscriber_sees_current_value() {
        let (tx, rx) = watch::channel(3);
        let doubled = map_watch(rx, |n| n * 2);

        assert_eq!(*doubled.borrow(), 6);
        drop(tx);
    }

    #[tokio::test]
    async fn test_changes_propagate() {
        let (tx, rx) = watch::channel(1);
        let mut doubled = map_watch(rx, |n| n * 2);

        tx.send(5).unwrap();
        doubled.changed().await.unwrap();
        assert_eq!(*doubled.borrow(), 10);
    }

    #[tokio::test]
    async fn test_derived_channel_closes_with_source() {
        let (tx, rx) = watch::channel(1);
        let mut doubled = map_watch(rx, |n| n * 2);

        drop(tx);
        assert!(doubled.changed().await.is_err());
    }

    #[tokio::test]
    async fn test_multicast_to_all_subscribers() {
        let (tx, rx) = watch::channel(0);
        let mapped = map_watch(rx, |n| *n);
        let mut first = mapped.clone();
        let mut second = mapped;

        tx.send(7).unwrap();
        first.changed().await.unwrap();
        second.changed().await.unwrap();
        assert_eq!(*first.borrow(), 7);
        assert_eq!(*second.borrow(), 7);
    }
}

//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to dispatch follow-up actions, it uses the Dispatcher.
//! Queued actions are drained by the `Store` at the end of the current dispatch
//! and each one goes back through the full middleware chain.
//!
//! This enables patterns like:
//! - WishListAction::MoveToCart expanding into WishListAction::Remove + CartAction::Add

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's pending action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action; it is processed after the current action, in dispatch order
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_dispatcher_preserves_order() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        dispatcher.dispatch(Action::None);
        dispatcher.dispatch(Action::Global(crate::actions::GlobalAction::Reset));

        assert_eq!(rx.try_recv(), Ok(Action::None));
        assert_eq!(
            rx.try_recv(),
            Ok(Action::Global(crate::actions::GlobalAction::Reset))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_after_receiver_dropped_does_not_panic() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        Dispatcher::new(tx).dispatch(Action::None);
    }
}

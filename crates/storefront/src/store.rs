use std::sync::mpsc::{self, Receiver};

use storefront_config::StorefrontConfig;

use crate::actions::{Action, CatalogAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::Product;
use crate::error::StoreError;
use crate::middleware::{default_middleware, Middleware};
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;

/// Observer notified with the new state and the action that produced it
pub type Subscriber = Box<dyn FnMut(&AppState, &Action) + Send>;

/// Handle returned by `Store::subscribe`, used to unsubscribe again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Store - holds application state and manages the Redux loop
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    /// Create a store without any middleware
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Create a store with the default middleware, honouring the startup preferences
    pub fn from_config(config: &StorefrontConfig) -> Self {
        let mut store = Self::new(AppState::from_config(config));
        for middleware in default_middleware() {
            store.add_middleware(middleware);
        }
        store
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Register an observer called after every reduced action
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&AppState, &Action) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        let mut should_reduce = true;

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        // If no middleware consumed the action, send to reducer
        if should_reduce {
            self.state = reduce(std::mem::take(&mut self.state), &action);
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&self.state, &action);
            }
        }

        // Process any actions dispatched by middleware
        while let Ok(action) = self.pending.try_recv() {
            self.dispatch(action);
        }
    }

    /// Add a product to the catalog, rejecting invalid ones
    ///
    /// Fails with `StoreError::NotAdded` when a middleware consumed the insertion.
    pub fn add_product(&mut self, product: Product) -> Result<(), StoreError> {
        product.validate()?;
        let id = product.id();
        let before = self.state.catalog.len();
        self.dispatch(CatalogAction::AddProduct(product));
        if self.state.catalog.len() == before {
            return Err(StoreError::NotAdded(id));
        }
        Ok(())
    }

    /// Empty cart and wish list and restore the default selection.
    /// Catalog, theme, middleware and subscribers are kept.
    pub fn reset(&mut self) {
        self.dispatch(GlobalAction::Reset);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::from_config(&StorefrontConfig::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("middleware", &format!("{} middleware", self.middleware.len()))
            .field("subscribers", &format!("{} subscribers", self.subscribers.len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CartAction, SelectionAction, WishListAction};
    use crate::domain_models::{Price, ProductCategory, ProductId};
    use crate::error::ValidationError;
    use std::sync::{Arc, Mutex};

    fn cheese() -> Product {
        Product::new(2, "Emmental cheese", ProductCategory::Products, Price::from_cents(249))
    }

    /// Swallows every catalog insertion
    struct DropCatalogMiddleware;

    impl Middleware for DropCatalogMiddleware {
        fn handle(
            &mut self,
            action: &Action,
            _state: &AppState,
            _dispatcher: &Dispatcher,
        ) -> bool {
            !matches!(action, Action::Catalog(CatalogAction::AddProduct(_)))
        }
    }

    /// Answers every wish list addition with a follow-up cart addition
    struct FollowUpMiddleware;

    impl Middleware for FollowUpMiddleware {
        fn handle(
            &mut self,
            action: &Action,
            _state: &AppState,
            dispatcher: &Dispatcher,
        ) -> bool {
            if let Action::WishList(WishListAction::Add(product)) = action {
                dispatcher.dispatch(CartAction::Add(product.clone()).into());
            }
            true
        }
    }

    fn recorded(store: &mut Store) -> Arc<Mutex<Vec<Action>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |_state, action| sink.lock().unwrap().push(action.clone()));
        seen
    }

    #[test]
    fn test_subscribers_see_reduced_actions() {
        let mut store = Store::default();
        let seen = recorded(&mut store);

        store.dispatch(CartAction::Add(cheese()));
        store.dispatch(SelectionAction::ToggleDarkMode);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Action::Cart(CartAction::Add(cheese())),
                Action::Selection(SelectionAction::ToggleDarkMode),
            ]
        );
    }

    #[test]
    fn test_subscriber_sees_new_state() {
        let mut store = Store::default();
        let counts = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&counts);
        store.subscribe(move |state, _| sink.lock().unwrap().push(state.cart.item_count()));

        store.dispatch(CartAction::Add(cheese()));
        store.dispatch(CartAction::Add(cheese()));
        store.dispatch(CartAction::Checkout);

        assert_eq!(*counts.lock().unwrap(), vec![1, 2, 0]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = Store::default();
        let seen = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |_, _| *sink.lock().unwrap() += 1);

        store.dispatch(Action::None);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Action::None);

        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_move_to_cart_runs_primitives_in_order() {
        let mut store = Store::default();
        store.dispatch(WishListAction::Add(cheese()));
        let seen = recorded(&mut store);

        store.dispatch(WishListAction::MoveToCart(cheese()));

        assert!(!store.state().wish_list.contains(cheese().id()));
        assert_eq!(store.state().cart.quantity_of(cheese().id()), 1);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                Action::WishList(WishListAction::Remove(cheese().id())),
                Action::Cart(CartAction::Add(cheese())),
            ]
        );
    }

    #[test]
    fn test_move_to_cart_needs_middleware() {
        let mut store = Store::new(AppState::default());
        store.dispatch(WishListAction::Add(cheese()));
        store.dispatch(WishListAction::MoveToCart(cheese()));

        assert!(store.state().wish_list.contains(cheese().id()));
        assert!(store.state().cart.is_empty());
    }

    #[test]
    fn test_add_product_rejects_negative_price() {
        let mut store = Store::default();
        let broken = Product::new(5, "Broken", ProductCategory::Devices, Price::from_cents(-1));

        assert_eq!(
            store.add_product(broken),
            Err(StoreError::Validation(ValidationError::NegativePrice {
                id: ProductId::new(5),
                price: Price::from_cents(-1),
            }))
        );
        assert!(store.state().catalog.is_empty());

        assert!(store.add_product(cheese()).is_ok());
        assert_eq!(store.state().catalog.len(), 1);
    }

    #[test]
    fn test_add_product_reports_consumed_insertion() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(DropCatalogMiddleware));

        assert_eq!(
            store.add_product(cheese()),
            Err(StoreError::NotAdded(cheese().id()))
        );
        assert!(store.state().catalog.is_empty());
    }

    #[test]
    fn test_follow_up_actions_applied_before_dispatch_returns() {
        let mut store = Store::new(AppState::default());
        store.add_middleware(Box::new(FollowUpMiddleware));

        store.dispatch(WishListAction::Add(cheese()));

        assert!(store.state().wish_list.contains(cheese().id()));
        assert_eq!(store.state().cart.quantity_of(cheese().id()), 1);
    }

    #[test]
    fn test_reset() {
        let mut store = Store::default();
        store.add_product(cheese()).unwrap();
        store.dispatch(CartAction::Add(cheese()));
        store.dispatch(WishListAction::Add(cheese()));
        store.dispatch(SelectionAction::SetDarkMode(true));

        store.reset();

        assert_eq!(store.state().catalog.len(), 1);
        assert!(store.state().cart.is_empty());
        assert!(store.state().wish_list.is_empty());
        assert!(store.state().selection.dark_mode);
    }

    #[test]
    fn test_isolated_instances() {
        let mut first = Store::default();
        let second = Store::default();
        first.dispatch(CartAction::Add(cheese()));

        assert_eq!(first.state().cart.item_count(), 1);
        assert_eq!(second.state().cart.item_count(), 0);
    }
}

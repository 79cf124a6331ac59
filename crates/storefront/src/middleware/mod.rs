use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod logging_middleware;
pub mod wish_list_middleware;

pub use logging_middleware::LoggingMiddleware;
pub use wish_list_middleware::WishListMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

/// The middleware chain installed by `Store::default` and `Store::from_config`, in order
pub fn default_middleware() -> Vec<Box<dyn Middleware>> {
    vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(WishListMiddleware::new()),
    ]
}

// 🧭 Stack Navigator
// Screen routes + back stack. The session container never restricts
// navigation itself; guarding happens here.

use crate::session::Session;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    Signup,
    Home,
    /// Amount as typed on the home screen
    Checkout { amount: String },
    /// Amount plus convenience fee
    PaymentOptions { total: f64 },
    Upi,
    CardPayment,
    Profile,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Login => "LoginScreen",
            Route::Signup => "SignupScreen",
            Route::Home => "HomeScreen",
            Route::Checkout { .. } => "CheckoutScreen",
            Route::PaymentOptions { .. } => "PaymentOptionsScreen",
            Route::Upi => "UPIScreen",
            Route::CardPayment => "CardpaymentScreen",
            Route::Profile => "UserProfile",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Welcome Back!",
            Route::Signup => "Create Account",
            Route::Home => "Payment Transfer",
            Route::Checkout { .. } => "Checkout",
            Route::PaymentOptions { .. } => "Payment Method",
            Route::Upi => "UPI Payment",
            Route::CardPayment => "Enter Card Details",
            Route::Profile => "Profile",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }
}

// ============================================================================
// NAVIGATOR
// ============================================================================

/// Back stack that always holds at least one route.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Navigator {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> &Route {
        // The stack is never emptied: go_back() stops at the root
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn navigate(&mut self, route: Route) {
        info!(from = self.current().name(), to = route.name(), "navigate");
        self.stack.push(route);
    }

    /// Push `route`, or fall back to the login screen when the route needs an
    /// authenticated session and there is none.
    pub fn navigate_guarded(&mut self, route: Route, session: &Session) -> &Route {
        if route.requires_auth() && !session.is_logged_in() {
            debug!(to = route.name(), "route requires login, redirecting");
            self.reset(Route::Login);
        } else {
            self.navigate(route);
        }
        self.current()
    }

    /// Pop the top route. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        if let Some(left) = self.stack.pop() {
            debug!(from = left.name(), to = self.current().name(), "back");
        }
        true
    }

    /// Replace the whole stack, e.g. after login or logout
    pub fn reset(&mut self, route: Route) {
        info!(to = route.name(), "reset navigation");
        self.stack.clear();
        self.stack.push(route);
    }

    /// Most recent route matching `pred`, searching from the top
    pub fn find(&self, pred: impl Fn(&Route) -> bool) -> Option<&Route> {
        self.stack.iter().rev().find(|r| pred(r))
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::UserIdentity;

    fn logged_in() -> Session {
        let mut session = Session::new();
        session.login(UserIdentity::new("a@b.com")).unwrap();
        session
    }

    #[test]
    fn test_starts_at_login() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), &Route::Login);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_push_and_back() {
        let mut nav = Navigator::new(Route::Home);
        nav.navigate(Route::Checkout { amount: "250".to_string() });
        nav.navigate(Route::PaymentOptions { total: 350.0 });

        assert_eq!(nav.depth(), 3);
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::Checkout { amount: "250".to_string() });
        assert!(nav.go_back());
        assert_eq!(nav.current(), &Route::Home);
        assert!(!nav.go_back());
        assert_eq!(nav.current(), &Route::Home);
    }

    #[test]
    fn test_guard_redirects_when_logged_out() {
        let mut nav = Navigator::default();
        nav.navigate(Route::Signup);

        let session = Session::new();
        assert_eq!(nav.navigate_guarded(Route::Home, &session), &Route::Login);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_guard_allows_public_routes() {
        let mut nav = Navigator::default();
        let session = Session::new();
        assert_eq!(nav.navigate_guarded(Route::Signup, &session), &Route::Signup);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_guard_allows_when_logged_in() {
        let mut nav = Navigator::new(Route::Home);
        let session = logged_in();
        assert_eq!(nav.navigate_guarded(Route::Profile, &session), &Route::Profile);
    }

    #[test]
    fn test_reset_clears_history() {
        let mut nav = Navigator::new(Route::Home);
        nav.navigate(Route::Profile);
        nav.reset(Route::Login);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), &Route::Login);
    }

    #[test]
    fn test_find_payment_total() {
        let mut nav = Navigator::new(Route::Home);
        nav.navigate(Route::PaymentOptions { total: 150.0 });
        nav.navigate(Route::Upi);

        let total = nav.find(|r| matches!(r, Route::PaymentOptions { .. }));
        assert_eq!(total, Some(&Route::PaymentOptions { total: 150.0 }));
    }

    #[test]
    fn test_route_auth_requirements() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Signup.requires_auth());
        assert!(Route::Home.requires_auth());
        assert!(Route::CardPayment.requires_auth());
    }
}

// 🖥️ Terminal UI - screens over the validation core
// App owns session, theme and navigator and hands them to the renderers
// explicitly. Every key event is applied synchronously before the next draw.

mod render;

use crate::checkout::{CheckoutSummary, PaymentMethod};
use crate::config::AppConfig;
use crate::display::{format_money, masked_card_number};
use crate::form::FormState;
use crate::navigation::{Navigator, Route};
use crate::session::{Session, UserIdentity};
use crate::theme::Theme;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::collections::HashMap;
use std::io;
use tracing::{error, info};

pub const DRAWER_ITEMS: [&str; 6] = ["Profile", "E-KYC", "FAQ's", "Help", "Settings", "Dashboard"];
pub const PICTURE_OPTIONS: [&str; 3] = ["Change Picture", "Remove Picture", "Cancel"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Modal alert; the next key press dismisses it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub config: AppConfig,
    pub session: Session,
    pub theme: Theme,
    pub navigator: Navigator,
    /// Form for the current screen, rebuilt on every route change
    pub form: FormState,
    pub notice: Option<Notice>,
    /// Selected drawer item while the drawer is open
    pub drawer: Option<usize>,
    /// Selected option while the profile picture modal is open
    pub picture_modal: Option<usize>,
    pub method_index: usize,
    /// Names captured at signup, keyed by email. Lost on exit.
    signups: HashMap<String, String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let navigator = Navigator::default();
        let form = form_for(navigator.current());

        App {
            config,
            session: Session::new(),
            theme,
            navigator,
            form,
            notice: None,
            drawer: None,
            picture_modal: None,
            method_index: 0,
            signups: HashMap::new(),
            should_quit: false,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    /// Card preview flips to its back while the CVV has focus
    pub fn showing_card_back(&self) -> bool {
        *self.current_route() == Route::CardPayment
            && self.form.focused().map(|f| f.name) == Some("cvv")
    }

    /// Total carried by the payment-options route below the current screen
    pub fn payment_total(&self) -> Option<f64> {
        match self
            .navigator
            .find(|r| matches!(r, Route::PaymentOptions { .. }))
        {
            Some(Route::PaymentOptions { total }) => Some(*total),
            _ => None,
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
        });
    }

    fn money(&self, amount: f64) -> String {
        format_money(&self.config.currency_symbol, amount)
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    fn go(&mut self, route: Route) {
        self.navigator.navigate_guarded(route, &self.session);
        self.enter_screen();
    }

    fn back(&mut self) {
        if self.navigator.go_back() {
            self.enter_screen();
        } else {
            self.should_quit = true;
        }
    }

    fn reset(&mut self, route: Route) {
        self.navigator.reset(route);
        self.enter_screen();
    }

    fn enter_screen(&mut self) {
        self.form = form_for(self.navigator.current());
        self.drawer = None;
        self.picture_modal = None;
        self.method_index = 0;
    }

    // ------------------------------------------------------------------------
    // Key handling
    // ------------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }

        if self.notice.take().is_some() {
            return;
        }

        if ctrl && key.code == KeyCode::Char('t') {
            self.theme.toggle_theme();
            return;
        }

        if self.drawer.is_some() {
            self.handle_drawer_key(key);
            return;
        }
        if self.picture_modal.is_some() {
            self.handle_picture_key(key);
            return;
        }

        if key.code == KeyCode::Esc {
            self.back();
            return;
        }

        match self.current_route().clone() {
            Route::Login => match key.code {
                KeyCode::Enter => self.submit_login(),
                KeyCode::Char('n') if ctrl => self.go(Route::Signup),
                _ => self.handle_form_key(key, ctrl),
            },
            Route::Signup => match key.code {
                KeyCode::Enter => self.submit_signup(),
                KeyCode::Char('l') if ctrl => self.reset(Route::Login),
                _ => self.handle_form_key(key, ctrl),
            },
            Route::Home => match key.code {
                KeyCode::Enter => self.send_money(),
                KeyCode::Char('d') if ctrl => self.drawer = Some(0),
                KeyCode::Char('p') if ctrl => self.go(Route::Profile),
                _ => self.handle_form_key(key, ctrl),
            },
            Route::Checkout { amount } => match key.code {
                KeyCode::Enter => self.proceed_to_payment(&amount),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Route::PaymentOptions { .. } => self.handle_method_key(key),
            Route::Upi => match key.code {
                KeyCode::Enter => self.pay_with_upi(),
                _ => self.handle_form_key(key, ctrl),
            },
            Route::CardPayment => match key.code {
                KeyCode::Enter => self.pay_with_card(),
                _ => self.handle_form_key(key, ctrl),
            },
            Route::Profile => match key.code {
                KeyCode::Char('e') => self.picture_modal = Some(0),
                KeyCode::Char('l') => self.logout(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_previous(),
            KeyCode::Backspace => {
                self.form.erase_focused();
            }
            KeyCode::Char(ch) if !ctrl => {
                self.form.type_char(ch);
            }
            _ => {}
        }
    }

    fn handle_method_key(&mut self, key: KeyEvent) {
        let len = PaymentMethod::ALL.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.method_index = (self.method_index + 1) % len,
            KeyCode::Up | KeyCode::Char('k') => self.method_index = (self.method_index + len - 1) % len,
            KeyCode::Enter => {
                let method = PaymentMethod::ALL[self.method_index];
                match method.route() {
                    Some(route) => self.go(route),
                    None => self.notify(NoticeKind::Info, method.unavailable_notice()),
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_drawer_key(&mut self, key: KeyEvent) {
        let Some(selected) = self.drawer else {
            return;
        };
        let len = DRAWER_ITEMS.len();

        match key.code {
            KeyCode::Esc => self.drawer = None,
            KeyCode::Down | KeyCode::Char('j') => self.drawer = Some((selected + 1) % len),
            KeyCode::Up | KeyCode::Char('k') => self.drawer = Some((selected + len - 1) % len),
            KeyCode::Enter => {
                self.drawer = None;
                match DRAWER_ITEMS[selected] {
                    "Profile" => self.go(Route::Profile),
                    "Dashboard" => self.reset(Route::Home),
                    item => self.notify(NoticeKind::Info, format!("{} is coming soon", item)),
                }
            }
            _ => {}
        }
    }

    fn handle_picture_key(&mut self, key: KeyEvent) {
        let Some(selected) = self.picture_modal else {
            return;
        };
        let len = PICTURE_OPTIONS.len();

        match key.code {
            KeyCode::Esc => self.picture_modal = None,
            KeyCode::Down | KeyCode::Char('j') => self.picture_modal = Some((selected + 1) % len),
            KeyCode::Up | KeyCode::Char('k') => {
                self.picture_modal = Some((selected + len - 1) % len)
            }
            KeyCode::Enter => {
                self.picture_modal = None;
                let option = PICTURE_OPTIONS[selected];
                if option != "Cancel" {
                    info!(option, "profile picture action");
                }
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------------
    // Screen actions
    // ------------------------------------------------------------------------

    fn submit_login(&mut self) {
        let values = match self.form.submit() {
            Ok(values) => values,
            Err(err) => return self.notify(NoticeKind::Error, err.to_string()),
        };

        let email = values.get("email").cloned().unwrap_or_default();
        let mut identity = UserIdentity::new(email.clone());
        if let Some(name) = self.signups.get(&email) {
            identity = identity.with_name(name.clone());
        }

        match self.session.login(identity) {
            Ok(()) => self.reset(Route::Home),
            Err(err) => self.notify(NoticeKind::Error, err.to_string()),
        }
    }

    fn submit_signup(&mut self) {
        let values = match self.form.submit() {
            Ok(values) => values,
            Err(err) => return self.notify(NoticeKind::Error, err.to_string()),
        };

        let email = values.get("email").cloned().unwrap_or_default();
        let name = values.get("full_name").cloned().unwrap_or_default();
        info!(email = %email, "account created");
        self.signups.insert(email, name.trim().to_string());

        self.reset(Route::Login);
        self.notify(NoticeKind::Success, "Account created. Please log in.");
    }

    fn send_money(&mut self) {
        if let Err(err) = self.form.submit() {
            return self.notify(NoticeKind::Error, err.to_string());
        }

        let amount = self.form.value("amount").to_string();
        match CheckoutSummary::from_input(&amount, self.config.convenience_fee) {
            Ok(_) => self.go(Route::Checkout { amount }),
            Err(err) => self.notify(NoticeKind::Error, err.to_string()),
        }
    }

    fn proceed_to_payment(&mut self, amount: &str) {
        match CheckoutSummary::from_input(amount, self.config.convenience_fee) {
            Ok(summary) => self.go(Route::PaymentOptions {
                total: summary.total,
            }),
            Err(err) => {
                error!(amount, error = %err, "checkout reached with unusable amount");
                self.notify(NoticeKind::Error, err.to_string());
            }
        }
    }

    fn pay_with_upi(&mut self) {
        if let Err(err) = self.form.submit() {
            return self.notify(NoticeKind::Error, err.to_string());
        }

        let upi_id = self.form.value("upi_id").to_string();
        let total = self.payment_total().unwrap_or_default();
        info!(upi_id = %upi_id, total, "upi payment submitted");

        let message = format!("Payment request of {} sent to {}", self.money(total), upi_id);
        self.reset(Route::Home);
        self.notify(NoticeKind::Success, message);
    }

    fn pay_with_card(&mut self) {
        if let Err(err) = self.form.submit() {
            return self.notify(NoticeKind::Error, err.to_string());
        }

        let total = self.payment_total().unwrap_or_default();
        let number = self.form.value("card_number").to_string();
        info!(card = %masked_card_number(&number), total, "card payment submitted");

        let message = if number.len() >= 4 {
            format!(
                "Card ending {} charged {}",
                &number[number.len() - 4..],
                self.money(total)
            )
        } else {
            format!("Card payment of {} submitted", self.money(total))
        };
        self.reset(Route::Home);
        self.notify(NoticeKind::Success, message);
    }

    fn logout(&mut self) {
        self.session.logout();
        self.reset(Route::Login);
    }
}

fn form_for(route: &Route) -> FormState {
    match route {
        Route::Login => FormState::login(),
        Route::Signup => FormState::signup(),
        Route::Home => FormState::send_money(),
        Route::Upi => FormState::upi(),
        Route::CardPayment => FormState::card_payment(),
        Route::Checkout { .. } | Route::PaymentOptions { .. } | Route::Profile => FormState::default(),
    }
}

// ============================================================================
// TERMINAL LOOP
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "ui loop failed");
        return Err(err.into());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

// 🎨 Screen rendering
// Header, content and status bar, coloured from the active palette.

use super::{App, NoticeKind, DRAWER_ITEMS, PICTURE_OPTIONS};
use crate::checkout::{CheckoutSummary, PaymentMethod};
use crate::display::{
    card_holder_preview, card_number_preview, cvv_preview, expiry_preview, format_money, secret,
};
use crate::form::{FormField, FormState};
use crate::navigation::Route;
use crate::theme::{parse_hex, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

fn color(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}

fn text_style(palette: &Palette) -> Style {
    Style::default().fg(color(palette.text)).bg(color(palette.background))
}

fn boxed<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(palette.accent)))
        .title(title)
}

pub(super) fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    f.render_widget(Block::default().style(text_style(palette)), f.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen
            Constraint::Length(3), // Key hints
        ])
        .split(f.size());

    render_header(f, chunks[0], app, palette);

    match app.current_route() {
        Route::Login | Route::Signup => render_form_screen(f, chunks[1], &app.form, palette),
        Route::Home => render_home(f, chunks[1], app, palette),
        Route::Checkout { amount } => render_checkout(f, chunks[1], app, amount, palette),
        Route::PaymentOptions { total } => render_payment_options(f, chunks[1], app, *total, palette),
        Route::Upi => render_upi(f, chunks[1], app, palette),
        Route::CardPayment => render_card_payment(f, chunks[1], app, palette),
        Route::Profile => render_profile(f, chunks[1], app, palette),
    }

    render_status_bar(f, chunks[2], app, palette);

    if let Some(selected) = app.drawer {
        render_drawer(f, chunks[1], selected, palette);
    }
    if let Some(selected) = app.picture_modal {
        render_picture_modal(f, f.size(), selected, palette);
    }
    if app.notice.is_some() {
        render_notice(f, f.size(), app, palette);
    }
}

// ============================================================================
// CHROME
// ============================================================================

fn render_header(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let user = app
        .session
        .current_identity()
        .map(|id| id.display_name().to_string())
        .unwrap_or_else(|| "Guest".to_string());

    let mode = if app.theme.is_dark() { "☾ dark" } else { "☀ light" };

    let spans = vec![
        Span::styled(
            app.current_route().title(),
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(user, Style::default().fg(color(palette.text))),
        Span::raw("  |  "),
        Span::styled(mode, Style::default().fg(color(palette.muted))),
    ];

    let header = Paragraph::new(vec![Line::from(spans)]).block(boxed(" UdyamPay ", palette));
    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hints = match app.current_route() {
        Route::Login => "Tab: Next field | Enter: Login | Ctrl+N: Sign up | Ctrl+T: Theme | Esc: Quit",
        Route::Signup => "Tab: Next field | Enter: Sign up | Ctrl+L: Login | Esc: Back",
        Route::Home => "Enter: Send money | Ctrl+D: Menu | Ctrl+P: Profile | Ctrl+T: Theme | Esc: Quit",
        Route::Checkout { .. } => "Enter: Proceed to payment | Esc: Back | q: Quit",
        Route::PaymentOptions { .. } => "↑↓: Select | Enter: Choose | Esc: Back",
        Route::Upi => "Enter: Pay | Esc: Back",
        Route::CardPayment => "Tab: Next field | Enter: Proceed | Esc: Back",
        Route::Profile => "e: Edit picture | l: Logout | Esc: Back",
    };

    let status = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(color(palette.muted)),
    )))
    .block(boxed("", palette));

    f.render_widget(status, area);
}

// ============================================================================
// FORMS
// ============================================================================

fn field_lines(form: &FormState, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, field) in form.fields().iter().enumerate() {
        let focused = i == form.focus_index();
        lines.push(field_label(field, focused, palette));
        lines.push(field_value(field, focused, palette));

        match field.message() {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(color(palette.error)),
            ))),
            None => lines.push(Line::from("")),
        }
    }

    lines
}

fn field_label(field: &FormField, focused: bool, palette: &Palette) -> Line<'static> {
    let marker = if focused { "→ " } else { "  " };
    let mut style = Style::default().fg(color(palette.muted));
    if focused {
        style = style.fg(color(palette.accent)).add_modifier(Modifier::BOLD);
    }
    Line::from(Span::styled(format!("{}{}", marker, field.label), style))
}

fn field_value(field: &FormField, focused: bool, palette: &Palette) -> Line<'static> {
    let shown = if field.is_secret() {
        secret(&field.value)
    } else {
        field.value.clone()
    };
    let cursor = if focused { "▏" } else { "" };

    let border = if field.error.is_some() {
        palette.error
    } else {
        palette.text
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("[ {}{} ]", shown, cursor), Style::default().fg(color(border))),
    ])
}

fn render_form_screen(f: &mut Frame, area: Rect, form: &FormState, palette: &Palette) {
    let panel = Paragraph::new(field_lines(form, palette))
        .block(boxed(" Details ", palette))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, centered_rect(60, 90, area));
}

// ============================================================================
// SCREENS
// ============================================================================

fn render_home(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let form = Paragraph::new(field_lines(&app.form, palette)).block(boxed(" Send Money ", palette));
    f.render_widget(form, chunks[0]);

    let header = Row::new(["Date", "Title", "Amount"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows = app.config.recent_transactions.iter().map(|tx| {
        Row::new(vec![
            Cell::from(tx.date_label()),
            Cell::from(tx.title.clone()),
            Cell::from(format_money(&app.config.currency_symbol, tx.amount))
                .style(Style::default().fg(color(palette.error))),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(boxed(" Transaction Details ", palette));

    f.render_widget(table, chunks[1]);
}

fn render_checkout(f: &mut Frame, area: Rect, app: &App, amount: &str, palette: &Palette) {
    let symbol = &app.config.currency_symbol;
    let lines = match CheckoutSummary::from_input(amount, app.config.convenience_fee) {
        Ok(summary) => vec![
            Line::from(format!("Amount:           {}", format_money(symbol, summary.amount))),
            Line::from(format!(
                "Convenience Fee:  {}",
                format_money(symbol, summary.convenience_fee)
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Total:            {}", format_money(symbol, summary.total)),
                Style::default()
                    .fg(color(palette.accent))
                    .add_modifier(Modifier::BOLD),
            )),
        ],
        Err(err) => vec![Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(color(palette.error)),
        ))],
    };

    let panel = Paragraph::new(lines).block(boxed(" Order Summary ", palette));
    f.render_widget(panel, centered_rect(60, 50, area));
}

fn render_payment_options(f: &mut Frame, area: Rect, app: &App, total: f64, palette: &Palette) {
    let mut lines = vec![
        Line::from(format!(
            "Total: {}",
            format_money(&app.config.currency_symbol, total)
        )),
        Line::from(""),
    ];

    for (i, method) in PaymentMethod::ALL.iter().enumerate() {
        let selected = i == app.method_index;
        let mut style = if method.is_available() {
            Style::default().fg(color(palette.text))
        } else {
            Style::default().fg(color(palette.muted))
        };
        if selected {
            style = style.bg(color(palette.surface)).add_modifier(Modifier::BOLD);
        }

        let marker = if selected { "→ " } else { "  " };
        let providers = method.providers().join(" · ");
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<12}", marker, method.name()), style),
            Span::styled(providers, Style::default().fg(color(palette.muted))),
        ]));
    }

    let panel = Paragraph::new(lines).block(boxed(" Select Payment Method ", palette));
    f.render_widget(panel, centered_rect(70, 60, area));
}

fn render_upi(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut lines = Vec::new();
    if let Some(total) = app.payment_total() {
        lines.push(Line::from(format!(
            "Paying {}",
            format_money(&app.config.currency_symbol, total)
        )));
        lines.push(Line::from(""));
    }
    lines.extend(field_lines(&app.form, palette));
    lines.push(Line::from(Span::styled(
        PaymentMethod::Upi.providers().join(" · "),
        Style::default().fg(color(palette.muted)),
    )));

    let panel = Paragraph::new(lines).block(boxed(" UPI ", palette));
    f.render_widget(panel, centered_rect(60, 60, area));
}

fn render_card_payment(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    render_card_preview(f, centered_rect(60, 100, chunks[0]), app, palette);

    let form = Paragraph::new(field_lines(&app.form, palette)).block(boxed(" Card Details ", palette));
    f.render_widget(form, chunks[1]);
}

fn render_card_preview(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form = &app.form;
    let on_card = Style::default().fg(Color::White).bg(color(palette.card));

    let lines = if app.showing_card_back() {
        vec![
            Line::from(""),
            Line::from(Span::styled("▇".repeat(area.width as usize), on_card)),
            Line::from(""),
            Line::from(Span::styled(
                format!("CVV  {}", cvv_preview(form.value("cvv"))),
                on_card.add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        ]
    } else {
        vec![
            Line::from(Span::styled("VISA / Mastercard", on_card)).alignment(Alignment::Right),
            Line::from(""),
            Line::from(Span::styled(
                card_number_preview(form.value("card_number")),
                on_card.add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(card_holder_preview(form.value("card_holder")), on_card),
                Span::styled("    ", on_card),
                Span::styled(expiry_preview(form.value("expiry_date")).to_string(), on_card),
            ]),
        ]
    };

    let card = Paragraph::new(lines).style(on_card).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(on_card),
    );
    f.render_widget(card, area);
}

fn render_profile(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let identity = app.session.current_identity();
    let name = identity
        .and_then(|id| id.name.clone())
        .unwrap_or_else(|| app.config.profile.name.clone());
    let email = identity.map(|id| id.email.clone()).unwrap_or_default();
    let since = identity
        .map(|id| id.logged_in_at.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_default();

    let label = Style::default().fg(color(palette.muted));
    let lines = vec![
        Line::from(Span::styled(
            name,
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Email:   ", label), Span::raw(email)]),
        Line::from(vec![
            Span::styled("Mobile:  ", label),
            Span::raw(app.config.profile.mobile.clone()),
        ]),
        Line::from(vec![Span::styled("Since:   ", label), Span::raw(since)]),
    ];

    let panel = Paragraph::new(lines).block(boxed(" Profile ", palette));
    f.render_widget(panel, centered_rect(60, 60, area));
}

// ============================================================================
// OVERLAYS
// ============================================================================

fn menu_lines(items: &[&str], selected: usize, palette: &Palette) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("→ {}", item),
                    Style::default()
                        .fg(color(palette.accent))
                        .bg(color(palette.surface))
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", item))
            }
        })
        .collect()
}

fn render_drawer(f: &mut Frame, area: Rect, selected: usize, palette: &Palette) {
    let width = area.width.min(28);
    let drawer_area = Rect::new(area.x, area.y, width, area.height);

    let drawer = Paragraph::new(menu_lines(&DRAWER_ITEMS, selected, palette))
        .style(text_style(palette))
        .block(boxed(" Menu ", palette));

    f.render_widget(Clear, drawer_area);
    f.render_widget(drawer, drawer_area);
}

fn render_picture_modal(f: &mut Frame, area: Rect, selected: usize, palette: &Palette) {
    let modal_area = centered_rect(40, 30, area);
    let modal = Paragraph::new(menu_lines(&PICTURE_OPTIONS, selected, palette))
        .style(text_style(palette))
        .block(boxed(" Profile Picture ", palette));

    f.render_widget(Clear, modal_area);
    f.render_widget(modal, modal_area);
}

fn render_notice(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(notice) = &app.notice else {
        return;
    };

    let (title, accent) = match notice.kind {
        NoticeKind::Info => (" Info ", palette.accent),
        NoticeKind::Success => (" Success ", palette.success),
        NoticeKind::Error => (" Error ", palette.error),
    };

    let lines = vec![
        Line::from(Span::styled(
            notice.message.clone(),
            Style::default().fg(color(accent)).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(color(palette.muted)),
        )),
    ];

    let popup_area = centered_rect(50, 25, area);
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(text_style(palette))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(accent)))
                .title(title),
        );

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

/// Rect of `percent_x` by `percent_y` centred inside `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_login_screen_renders_fields() {
        let app = App::new(AppConfig::default(), Theme::default());
        let screen = rendered(&app);
        assert!(screen.contains("Welcome Back!"));
        assert!(screen.contains("Email"));
        assert!(screen.contains("Guest"));
    }

    #[test]
    fn test_card_preview_front_and_back() {
        let mut app = App::new(AppConfig::default(), Theme::default());
        app.session
            .login(crate::session::UserIdentity::new("a@b.com"))
            .unwrap();
        app.navigator.reset(Route::CardPayment);
        app.form = crate::form::FormState::card_payment();
        app.form.input("card_number", "4111111111111111");

        assert!(rendered(&app).contains("4111 1111 1111 1111"));

        app.form.set_focus("cvv");
        app.form.input("cvv", "12");
        assert!(rendered(&app).contains("CVV  12"));
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, area);
        assert!(inner.x >= 25 && inner.right() <= 75);
        assert!(inner.y >= 10 && inner.bottom() <= 30);
    }
}

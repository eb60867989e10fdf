//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, main_area, app);

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{FieldName, Form};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        render_sized(app, 100, 32)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_all_fields() {
        let app = App::new(TuiConfig::default()).unwrap();
        let screen = render(&app);
        assert!(screen.contains("Contact Us"));
        assert!(screen.contains("First Name"));
        assert!(screen.contains("Last Name"));
        assert!(screen.contains("Email Address"));
        assert!(screen.contains("General Enquiry"));
        assert!(screen.contains("Support Request"));
        assert!(screen.contains("Message"));
        assert!(screen.contains("[ ]"));
        assert!(screen.contains("Submit"));
    }

    #[test]
    fn test_no_errors_before_submit() {
        let app = App::new(TuiConfig::default()).unwrap();
        let screen = render(&app);
        assert!(!screen.contains("is required"));
        assert!(!screen.contains("need attention"));
    }

    #[test]
    fn test_renders_inline_errors_after_submit() {
        let mut app = App::new(TuiConfig::default()).unwrap();
        app.form.on_submit(&app.validator);
        let screen = render(&app);
        assert!(screen.contains("First name must contain only letters"));
        assert!(screen.contains("Query type is required"));
        assert!(screen.contains("You must consent to proceed"));
        assert!(screen.contains("6 field(s) need attention"));
    }

    #[test]
    fn test_renders_typed_values() {
        let mut app = App::new(TuiConfig::default()).unwrap();
        app.form.state.email = "jane@example.com".to_string();
        app.form.state.consent = true;
        app.form.set_active_field(FieldName::Consent.index());
        let screen = render(&app);
        assert!(screen.contains("jane@example.com"));
        assert!(screen.contains("[x]"));
    }

    #[test]
    fn test_long_message_scrolls_to_cursor() {
        let mut app = App::new(TuiConfig::default()).unwrap();
        app.form.state.message = format!("{}ZZZZZZZZZZ", "a".repeat(990));
        app.form.set_active_field(FieldName::Message.index());
        let screen = render_sized(&app, 60, 26);
        assert!(screen.contains("ZZZZZZZZZZ"));
        assert!(screen.contains("1000/1000"));
    }

    #[test]
    fn test_unfocused_message_shows_its_start() {
        let mut app = App::new(TuiConfig::default()).unwrap();
        app.form.state.message = format!("START{}", "a".repeat(995));
        let screen = render_sized(&app, 60, 26);
        assert!(screen.contains("START"));
    }
}

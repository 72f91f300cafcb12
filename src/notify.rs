use redirect_client::Notifier;

use crate::style::Style;

/// Shows user-facing errors on stderr. Debug messages only go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn debug_log(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn display_error_message_to_user(&self, message: &str) {
        eprintln!("{} {}", Style::ErrorPrefix.paint("error:"), message);
    }
}

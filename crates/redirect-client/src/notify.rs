/// Receives diagnostics and messages meant for the person using the device.
pub trait Notifier: Send + Sync {
    /// records a debug message
    fn debug_log(&self, message: &str);

    /// shows an error to the user
    fn display_error_message_to_user(&self, message: &str);
}

/// Notifier that forwards everything to [`tracing`]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn debug_log(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn display_error_message_to_user(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

use costlens_core::{Notification, NotificationVariant, Notifier};

/// Writes notifications to stderr and the log
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        let title = notification.title.as_deref().unwrap_or("Notice");
        match notification.variant {
            NotificationVariant::Destructive => {
                tracing::warn!(title, description = %notification.description, "Notification");
                eprintln!("! {title}: {}", notification.description);
            }
            NotificationVariant::Default => {
                tracing::info!(title, description = %notification.description, "Notification");
                eprintln!("{title}: {}", notification.description);
            }
        }
    }
}

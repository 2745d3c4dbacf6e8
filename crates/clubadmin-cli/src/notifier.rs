use clubadmin_core::notify::{Level, Notice, Notifier};

/// Prints notices on stderr so they never mix with table output
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            Level::Error => eprintln!("error: {}", notice.text),
            Level::Success => eprintln!("ok: {}", notice.text),
            Level::Info => eprintln!("{}", notice.text),
        }
    }
}

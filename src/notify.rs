use std::cell::RefCell;

/// Outcome signal emitted by mutation operations. How it is displayed
/// (toast, flash message, status line) is up to the embedder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);

    fn success(&self, message: &str) {
        self.notify(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::Error(message.to_string()));
    }
}

/// Default sink: routes notices to the `log` facade.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(msg) => log::info!("{}", msg),
            Notice::Error(msg) => log::warn!("{}", msg),
        }
    }
}

/// Buffering sink for embedders that render toasts, and for tests.
/// Single-threaded like the rest of the core, hence the `RefCell`.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        MemoryNotifier::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Drain pending notices, oldest first.
    pub fn take(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

//! Toast notification state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<ToastState>` context. Pages call `show`; the toast
//! outlet renders `current` and dismisses it by id, so a timer belonging to a
//! replaced toast cannot close its successor.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Auto-dismiss delay when none is given.
pub const DEFAULT_DELAY_MS: u32 = 5000;

/// Delay used for form validation notices.
pub const VALIDATION_DELAY_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Success,
    Destructive,
}

impl ToastVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "toast",
            Self::Success => "toast toast--success",
            Self::Destructive => "toast toast--destructive",
        }
    }
}

/// What one toast shows and how long it stays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastConfig {
    pub message: String,
    pub title: Option<String>,
    pub delay_ms: u32,
    pub variant: ToastVariant,
}

impl ToastConfig {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            delay_ms: DEFAULT_DELAY_MS,
            variant: ToastVariant::Default,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).variant(ToastVariant::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).variant(ToastVariant::Destructive)
    }
}

/// A toast on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveToast {
    pub id: u64,
    pub config: ToastConfig,
}

/// At most one toast is visible; a new one replaces the old.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<ActiveToast>,
    pub next_id: u64,
}

impl ToastState {
    /// Display `config`, returning its id.
    pub fn show(&mut self, config: ToastConfig) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(ActiveToast { id, config });
        id
    }

    /// Close toast `id`; ignored if a newer toast is showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
        }
    }
}

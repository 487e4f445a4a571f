/// Classification of a notification's intent; selects the modal icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

/// Modal state as a tagged variant, so a closed notification cannot carry
/// stale title or message fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notification {
    #[default]
    Closed,
    Open {
        title: String,
        message: String,
        severity: Severity,
    },
}

impl Notification {
    pub fn open(
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Notification::Open {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Notification::Open { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Notification::Open { title, .. } => Some(title),
            Notification::Closed => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Notification::Open { message, .. } => Some(message),
            Notification::Closed => None,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Notification::Open { severity, .. } => Some(*severity),
            Notification::Closed => None,
        }
    }
}

/// Flash message shown at the top of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Info,
    Error,
}

impl FlashKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashKind::Success => "flash success",
            FlashKind::Info => "flash info",
            FlashKind::Error => "flash error",
        }
    }
}

impl Flash {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Flash messages that survive a redirect, carried as `?notice=<code>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EntrySaved,
    LimitUpdated,
    LastDeleted,
    NothingToDelete,
    DayCleared,
}

impl Notice {
    pub fn code(&self) -> &'static str {
        match self {
            Notice::EntrySaved => "entry-saved",
            Notice::LimitUpdated => "limit-updated",
            Notice::LastDeleted => "last-deleted",
            Notice::NothingToDelete => "nothing-to-delete",
            Notice::DayCleared => "day-cleared",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "entry-saved" => Some(Notice::EntrySaved),
            "limit-updated" => Some(Notice::LimitUpdated),
            "last-deleted" => Some(Notice::LastDeleted),
            "nothing-to-delete" => Some(Notice::NothingToDelete),
            "day-cleared" => Some(Notice::DayCleared),
            _ => None,
        }
    }

    /// `path?notice=<code>`
    pub fn redirect_target(&self, path: &str) -> String {
        format!("{path}?notice={}", self.code())
    }

    pub fn flash(&self) -> Flash {
        let (kind, message) = match self {
            Notice::EntrySaved => (FlashKind::Success, "Entry saved successfully!"),
            Notice::LimitUpdated => (FlashKind::Success, "Daily sugar limit updated."),
            Notice::LastDeleted => (FlashKind::Success, "Last entry deleted."),
            Notice::NothingToDelete => (FlashKind::Info, "No entries today."),
            Notice::DayCleared => (FlashKind::Success, "All of today's entries were deleted."),
        };

        Flash {
            kind,
            message: message.to_string(),
        }
    }
}

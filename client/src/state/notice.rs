//! Dismissable success/error notifications.
//!
//! Pages push notices after auth and plant operations; the `Toasts`
//! component renders them and drops each one after a short delay or when
//! the user dismisses it.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub text: Option<String>,
}

/// Queue of visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

/// At most this many notices are shown; older ones are dropped.
pub const MAX_NOTICES: usize = 4;

impl NoticeState {
    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, text: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, title: title.into(), text });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, title: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, title, None)
    }

    pub fn error(&mut self, title: impl Into<String>, text: impl ToString) -> u64 {
        self.push(NoticeKind::Error, title, Some(text.to_string()))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

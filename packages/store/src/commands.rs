//! Row and bulk commands of the admin list screens.
//!
//! Every action a list row can trigger is a variant carrying the id it
//! targets, so a new action is a compiler-checked change at each `match`.
//! [`ArticleCommand::parse`] and [`CommentCommand::parse`] accept the wire
//! action names (`"publish"`, `"approve"`, ...) for URLs and buttons that
//! carry them as strings.

use serde::{Deserialize, Serialize};

use crate::models::Id;

/// A single-row mutation.
pub trait Command {
    /// Action name as the backend spells it.
    fn name(&self) -> &'static str;

    fn target(&self) -> Id;

    /// Confirmation prompt shown before irreversible commands.
    fn confirmation(&self) -> Option<&'static str> {
        None
    }

    /// Notification shown after the backend accepted the command.
    fn success_message(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArticleCommand {
    Publish(Id),
    Archive(Id),
    Duplicate(Id),
    Delete(Id),
}

impl ArticleCommand {
    pub fn parse(action: &str, id: Id) -> Option<Self> {
        match action {
            "publish" => Some(Self::Publish(id)),
            "archive" => Some(Self::Archive(id)),
            "duplicate" => Some(Self::Duplicate(id)),
            "delete" => Some(Self::Delete(id)),
            _ => None,
        }
    }
}

impl Command for ArticleCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Publish(_) => "publish",
            Self::Archive(_) => "archive",
            Self::Duplicate(_) => "duplicate",
            Self::Delete(_) => "delete",
        }
    }

    fn target(&self) -> Id {
        match *self {
            Self::Publish(id) | Self::Archive(id) | Self::Duplicate(id) | Self::Delete(id) => id,
        }
    }

    fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::Delete(_) => Some("Удалить статью? Это действие нельзя отменить."),
            _ => None,
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Self::Publish(_) => "Статья опубликована",
            Self::Archive(_) => "Статья перемещена в архив",
            Self::Duplicate(_) => "Создана копия статьи",
            Self::Delete(_) => "Статья удалена",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentCommand {
    Approve(Id),
    Reject(Id),
    Spam(Id),
    Delete(Id),
}

impl CommentCommand {
    pub fn parse(action: &str, id: Id) -> Option<Self> {
        match action {
            "approve" => Some(Self::Approve(id)),
            "reject" => Some(Self::Reject(id)),
            "spam" => Some(Self::Spam(id)),
            "delete" => Some(Self::Delete(id)),
            _ => None,
        }
    }
}

impl Command for CommentCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Approve(_) => "approve",
            Self::Reject(_) => "reject",
            Self::Spam(_) => "spam",
            Self::Delete(_) => "delete",
        }
    }

    fn target(&self) -> Id {
        match *self {
            Self::Approve(id) | Self::Reject(id) | Self::Spam(id) | Self::Delete(id) => id,
        }
    }

    fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::Delete(_) => Some("Удалить комментарий?"),
            _ => None,
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Self::Approve(_) => "Комментарий одобрен",
            Self::Reject(_) => "Комментарий отклонён",
            Self::Spam(_) => "Комментарий помечен как спам",
            Self::Delete(_) => "Комментарий удалён",
        }
    }
}

/// Commands of the organization users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserCommand {
    Activate(Id),
    Deactivate(Id),
    Delete(Id),
}

impl Command for UserCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Activate(_) => "activate",
            Self::Deactivate(_) => "deactivate",
            Self::Delete(_) => "delete",
        }
    }

    fn target(&self) -> Id {
        match *self {
            Self::Activate(id) | Self::Deactivate(id) | Self::Delete(id) => id,
        }
    }

    fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::Delete(_) => Some("Удалить пользователя из организации?"),
            _ => None,
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Self::Activate(_) => "Пользователь активирован",
            Self::Deactivate(_) => "Пользователь деактивирован",
            Self::Delete(_) => "Пользователь удалён",
        }
    }
}

/// Actions applicable to a selection of articles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleBulkAction {
    Publish,
    Archive,
    Delete,
}

impl ArticleBulkAction {
    pub const ALL: [ArticleBulkAction; 3] = [
        ArticleBulkAction::Publish,
        ArticleBulkAction::Archive,
        ArticleBulkAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Publish => "Опубликовать",
            Self::Archive => "В архив",
            Self::Delete => "Удалить",
        }
    }
}

/// Actions applicable to a selection of comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentBulkAction {
    Approve,
    Reject,
    Spam,
    Delete,
}

impl CommentBulkAction {
    pub const ALL: [CommentBulkAction; 4] = [
        CommentBulkAction::Approve,
        CommentBulkAction::Reject,
        CommentBulkAction::Spam,
        CommentBulkAction::Delete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "Одобрить",
            Self::Reject => "Отклонить",
            Self::Spam => "В спам",
            Self::Delete => "Удалить",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_wire_names() {
        assert_eq!(ArticleCommand::parse("duplicate", 5), Some(ArticleCommand::Duplicate(5)));
        assert_eq!(CommentCommand::parse("approve", 42), Some(CommentCommand::Approve(42)));
        assert_eq!(CommentCommand::parse("publish", 42), None);
    }

    #[test]
    fn test_name_and_target_roundtrip() {
        for action in ["publish", "archive", "duplicate", "delete"] {
            let command = ArticleCommand::parse(action, 9).unwrap();
            assert_eq!(command.name(), action);
            assert_eq!(command.target(), 9);
        }
    }

    #[test]
    fn test_only_delete_asks_for_confirmation() {
        assert!(ArticleCommand::Delete(1).confirmation().is_some());
        assert!(ArticleCommand::Publish(1).confirmation().is_none());
        assert!(CommentCommand::Spam(1).confirmation().is_none());
        assert!(UserCommand::Delete(1).confirmation().is_some());
    }

    #[test]
    fn test_bulk_actions_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&CommentBulkAction::Spam).unwrap(), "\"spam\"");
        assert_eq!(serde_json::to_string(&ArticleBulkAction::Archive).unwrap(), "\"archive\"");
    }
}

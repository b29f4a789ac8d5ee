//! User-facing Russian strings shared by several screens.
//!
//! Failures are shown with these generic texts; the backend's own message is
//! only written to the log.

pub const LOAD_ARTICLES_FAILED: &str = "Ошибка загрузки статей";
pub const LOAD_ARTICLE_FAILED: &str = "Ошибка загрузки статьи";
pub const LOAD_CATEGORIES_FAILED: &str = "Ошибка загрузки категорий";
pub const LOAD_COMMENTS_FAILED: &str = "Ошибка загрузки комментариев";
pub const LOAD_USERS_FAILED: &str = "Ошибка загрузки пользователей";
pub const LOAD_ROLES_FAILED: &str = "Ошибка загрузки ролей";
pub const LOAD_SEO_FAILED: &str = "Ошибка загрузки настроек SEO";
pub const LOAD_STATS_FAILED: &str = "Ошибка загрузки статистики";
pub const LOAD_ORGANIZATIONS_FAILED: &str = "Ошибка загрузки организаций";

pub const SAVE_FAILED: &str = "Не удалось сохранить изменения";
pub const ACTION_FAILED: &str = "Не удалось выполнить действие";
pub const REORDER_FAILED: &str = "Не удалось изменить порядок, список обновлён с сервера";
pub const FORM_HAS_ERRORS: &str = "Исправьте ошибки в форме";
pub const SAVED: &str = "Изменения сохранены";

pub const LOGIN_FAILED: &str = "Неверный email или пароль";
pub const SESSION_EXPIRED: &str = "Сессия истекла, войдите снова";

pub const EMPTY_LIST: &str = "Ничего не найдено";
pub const LOADING: &str = "Загрузка…";

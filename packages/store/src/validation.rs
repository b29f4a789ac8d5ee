//! Synchronous presence checks run by form submit handlers.
//!
//! Errors are collected per field; a non-empty [`FieldErrors`] blocks
//! submission. Uniqueness and permission checks belong to the backend.

use std::collections::BTreeMap;

use crate::models::{ArticleInput, CategoryInput, CommentInput, InvitationInput, RoleInput, SeoSettings};
use crate::slug::is_valid_slug;

/// Field name → message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

const REQUIRED: &str = "Обязательное поле";

fn require(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

pub fn validate_article(input: &ArticleInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "title", &input.title);
    require(&mut errors, "content", &input.content);
    if input.category_id.is_none() {
        errors.add("category_id", "Выберите категорию");
    }
    if !input.slug.is_empty() && !is_valid_slug(&input.slug) {
        errors.add("slug", "Только латинские буквы в нижнем регистре, цифры и дефисы");
    }
    if let Some(title) = &input.seo.meta_title {
        if title.chars().count() > 70 {
            errors.add("meta_title", "Не более 70 символов");
        }
    }
    if let Some(description) = &input.seo.meta_description {
        if description.chars().count() > 160 {
            errors.add("meta_description", "Не более 160 символов");
        }
    }
    errors.into_result()
}

pub fn validate_category(input: &CategoryInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &input.name);
    if !input.slug.is_empty() && !is_valid_slug(&input.slug) {
        errors.add("slug", "Только латинские буквы в нижнем регистре, цифры и дефисы");
    }
    if !is_hex_color(&input.color) {
        errors.add("color", "Цвет в формате #rrggbb");
    }
    errors.into_result()
}

pub fn validate_seo(settings: &SeoSettings) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "site_name", &settings.site_name);
    for (network, url) in &settings.social_links {
        if !url.is_empty() && !url.starts_with("https://") && !url.starts_with("http://") {
            tracing::debug!("social link {network} is not an absolute url");
            errors.add("social_links", "Ссылки должны начинаться с http:// или https://");
        }
    }
    errors.into_result()
}

pub fn validate_comment(input: &CommentInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "author_name", &input.author_name);
    require(&mut errors, "content", &input.content);
    if !input.author_email.trim().is_empty() && !looks_like_email(&input.author_email) {
        errors.add("author_email", "Некорректный email");
    }
    errors.into_result()
}

pub fn validate_invitation(input: &InvitationInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if input.email.trim().is_empty() {
        errors.add("email", REQUIRED);
    } else if !looks_like_email(&input.email) {
        errors.add("email", "Некорректный email");
    }
    require(&mut errors, "role", &input.role);
    errors.into_result()
}

pub fn validate_role(input: &RoleInput) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require(&mut errors, "name", &input.name);
    if !input.slug.is_empty() && !is_valid_slug(&input.slug) {
        errors.add("slug", "Только латинские буквы в нижнем регистре, цифры и дефисы");
    }
    errors.into_result()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if email.trim().is_empty() {
        errors.add("email", REQUIRED);
    } else if !looks_like_email(email) {
        errors.add("email", "Некорректный email");
    }
    if password.is_empty() {
        errors.add("password", REQUIRED);
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_article_collects_every_required_field() {
        let errors = validate_article(&ArticleInput::default()).unwrap_err();
        assert!(errors.has("title"));
        assert!(errors.has("content"));
        assert!(errors.has("category_id"));
        assert!(!errors.has("slug"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let input = ArticleInput {
            title: "   ".into(),
            content: "Текст".into(),
            category_id: Some(1),
            ..Default::default()
        };
        let errors = validate_article(&input).unwrap_err();
        assert_eq!(errors.get("title"), Some(REQUIRED));
    }

    #[test]
    fn test_valid_article_passes() {
        let input = ArticleInput {
            title: "Смета".into(),
            slug: "smeta".into(),
            content: "Текст".into(),
            category_id: Some(1),
            ..Default::default()
        };
        assert!(validate_article(&input).is_ok());
    }

    #[test]
    fn test_category_color_and_slug_shape() {
        let input = CategoryInput {
            name: "Кровля".into(),
            slug: "Krovlya".into(),
            color: "blue".into(),
            ..Default::default()
        };
        let errors = validate_category(&input).unwrap_err();
        assert!(errors.has("slug"));
        assert!(errors.has("color"));
        assert!(validate_category(&CategoryInput { name: "Кровля".into(), ..Default::default() }).is_ok());
    }

    #[test]
    fn test_invitation_email_shape() {
        let bad = InvitationInput { email: "ivan@".into(), role: "editor".into() };
        assert!(validate_invitation(&bad).unwrap_err().has("email"));
        let good = InvitationInput { email: "ivan@stroy.ru".into(), role: "editor".into() };
        assert!(validate_invitation(&good).is_ok());
    }

    #[test]
    fn test_seo_requires_site_name() {
        let errors = validate_seo(&SeoSettings::default()).unwrap_err();
        assert!(errors.has("site_name"));
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.add("email", "first");
        errors.add("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
        errors.clear_field("email");
        assert!(errors.is_empty());
    }
}

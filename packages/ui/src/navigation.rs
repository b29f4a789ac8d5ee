//! Where a view wants to go. The web crate maps each [`Destination`] to a
//! route; views never touch the router.

use store::Id;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Home,
    About,
    Contacts,
    Pricing,
    Login,
    Blog,
    BlogArticle(String),
    BlogCategory(String),
    BlogTag(String),
    Dashboard,
    Articles,
    NewArticle,
    EditArticle(Id),
    Categories,
    Comments,
    Seo,
    Users,
    Roles,
    MultiOrgUsers,
}

impl Destination {
    /// Sidebar entries of the admin console, grouped.
    pub fn admin_menu() -> Vec<(&'static str, Vec<Destination>)> {
        vec![
            ("Обзор", vec![Destination::Dashboard]),
            (
                "Блог",
                vec![
                    Destination::Articles,
                    Destination::Categories,
                    Destination::Comments,
                    Destination::Seo,
                ],
            ),
            (
                "Организация",
                vec![Destination::Users, Destination::Roles, Destination::MultiOrgUsers],
            ),
        ]
    }

    pub fn site_menu() -> Vec<Destination> {
        vec![
            Destination::Home,
            Destination::Pricing,
            Destination::Blog,
            Destination::About,
            Destination::Contacts,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Destination::Home => "Главная",
            Destination::About => "О компании",
            Destination::Contacts => "Контакты",
            Destination::Pricing => "Тарифы",
            Destination::Login => "Вход",
            Destination::Blog => "Блог",
            Destination::BlogArticle(_) => "Статья",
            Destination::BlogCategory(_) => "Категория",
            Destination::BlogTag(_) => "Тег",
            Destination::Dashboard => "Панель управления",
            Destination::Articles => "Статьи",
            Destination::NewArticle => "Новая статья",
            Destination::EditArticle(_) => "Редактирование статьи",
            Destination::Categories => "Категории",
            Destination::Comments => "Комментарии",
            Destination::Seo => "SEO",
            Destination::Users => "Пользователи",
            Destination::Roles => "Роли и права",
            Destination::MultiOrgUsers => "Все организации",
        }
    }

    /// Whether `self` is the menu entry for `current`.
    pub fn covers(&self, current: &Destination) -> bool {
        match (self, current) {
            (Destination::Articles, Destination::NewArticle | Destination::EditArticle(_)) => true,
            (Destination::Blog, Destination::BlogArticle(_) | Destination::BlogCategory(_) | Destination::BlogTag(_)) => {
                true
            }
            _ => self == current,
        }
    }
}

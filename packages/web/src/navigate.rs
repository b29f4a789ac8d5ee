//! Translation between view destinations and routes.

use dioxus::prelude::*;
use ui::Destination;

use crate::Route;

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::About => Route::About {},
            Destination::Contacts => Route::Contacts {},
            Destination::Pricing => Route::Pricing {},
            Destination::Login => Route::Login {},
            Destination::Blog => Route::Blog {},
            Destination::BlogArticle(slug) => Route::BlogArticle { slug },
            Destination::BlogCategory(slug) => Route::BlogCategory { slug },
            Destination::BlogTag(slug) => Route::BlogTag { slug },
            Destination::Dashboard => Route::Dashboard {},
            Destination::Articles => Route::Articles {},
            Destination::NewArticle => Route::NewArticle {},
            Destination::EditArticle(id) => Route::EditArticle { id },
            Destination::Categories => Route::Categories {},
            Destination::Comments => Route::Comments {},
            Destination::Seo => Route::Seo {},
            Destination::Users => Route::Users {},
            Destination::Roles => Route::Roles {},
            Destination::MultiOrgUsers => Route::MultiOrgUsers {},
        }
    }
}

impl Route {
    /// Menu position of the route. Unknown paths count as the landing page.
    pub(crate) fn destination(&self) -> Destination {
        match self {
            Route::Home {} | Route::NotFound { .. } => Destination::Home,
            Route::About {} => Destination::About,
            Route::Contacts {} => Destination::Contacts,
            Route::Pricing {} => Destination::Pricing,
            Route::Login {} => Destination::Login,
            Route::Blog {} => Destination::Blog,
            Route::BlogArticle { slug } => Destination::BlogArticle(slug.clone()),
            Route::BlogCategory { slug } => Destination::BlogCategory(slug.clone()),
            Route::BlogTag { slug } => Destination::BlogTag(slug.clone()),
            Route::Dashboard {} => Destination::Dashboard,
            Route::Articles {} => Destination::Articles,
            Route::NewArticle {} => Destination::NewArticle,
            Route::EditArticle { id } => Destination::EditArticle(*id),
            Route::Categories {} => Destination::Categories,
            Route::Comments {} => Destination::Comments,
            Route::Seo {} => Destination::Seo,
            Route::Users {} => Destination::Users,
            Route::Roles {} => Destination::Roles,
            Route::MultiOrgUsers {} => Destination::MultiOrgUsers,
        }
    }
}

/// Handler passed to views as `on_navigate`.
pub(crate) fn use_go() -> Callback<Destination> {
    let nav = use_navigator();
    use_callback(move |destination: Destination| {
        nav.push(Route::from(destination));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        let cases = [
            (Destination::Home, "/"),
            (Destination::Blog, "/blog"),
            (Destination::BlogArticle("fundament".into()), "/blog/fundament"),
            (Destination::BlogCategory("news".into()), "/blog/category/news"),
            (Destination::BlogTag("beton".into()), "/blog/tag/beton"),
            (Destination::Dashboard, "/admin"),
            (Destination::NewArticle, "/admin/blog/articles/new"),
            (Destination::EditArticle(42), "/admin/blog/articles/42/edit"),
            (Destination::Seo, "/admin/blog/seo"),
            (Destination::Users, "/dashboard/users"),
            (Destination::MultiOrgUsers, "/dashboard/organizations/users"),
        ];
        for (destination, path) in cases {
            assert_eq!(Route::from(destination).to_string(), path);
        }
    }

    #[test]
    fn test_route_maps_back_to_its_destination() {
        let all = [
            Destination::About,
            Destination::Contacts,
            Destination::Pricing,
            Destination::Login,
            Destination::BlogTag("kirpich".into()),
            Destination::Articles,
            Destination::EditArticle(3),
            Destination::Categories,
            Destination::Comments,
            Destination::Roles,
        ];
        for destination in all {
            assert_eq!(Route::from(destination.clone()).destination(), destination);
        }
    }

    #[test]
    fn test_paths_parse_into_routes() {
        assert_eq!(
            "/admin/blog/articles/7/edit".parse::<Route>().ok(),
            Some(Route::EditArticle { id: 7 })
        );
        assert_eq!(
            "/blog/category/news".parse::<Route>().ok(),
            Some(Route::BlogCategory { slug: "news".into() })
        );
        let unknown = "/nowhere".parse::<Route>().ok();
        assert!(matches!(unknown, Some(Route::NotFound { .. })));
        assert_eq!(unknown.map(|r| r.destination()), Some(Destination::Home));
    }
}

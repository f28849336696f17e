//! # Route Table
//!
//! Static mapping from URL path patterns to pages. Patterns may contain
//! `:name` segments, captured on match. There are no guards, redirects or
//! async resolution; navigation is a plain table lookup.

use std::collections::BTreeMap;

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page with featured courses
    Home,
    /// Course catalog with filters and search
    CourseList,
    /// Single course with reviews and AI summary
    CourseDetail,
    /// Personal dashboard
    MyPage,
    /// Community boards and posts
    Community,
    /// New post editor
    CommunityWrite,
    /// Existing post editor
    CommunityEdit,
    /// Single post with comments
    PostDetail,
    /// Usage guide
    Guide,
    Login,
    Signup,
    /// Learning preference survey
    Preferences,
}

impl Page {
    /// Get all pages in route table order
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::CourseList,
            Page::CourseDetail,
            Page::MyPage,
            Page::Community,
            Page::CommunityWrite,
            Page::CommunityEdit,
            Page::PostDetail,
            Page::Guide,
            Page::Login,
            Page::Signup,
            Page::Preferences,
        ]
    }

    /// The route that mounts this page.
    pub fn route(&self) -> &'static RouteEntry {
        // Every page has exactly one entry; enforced by the table tests
        ROUTES
            .iter()
            .find(|entry| entry.page == *self)
            .unwrap_or(&ROUTES[0])
    }
}

/// One row of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    /// Unique symbolic name used for navigation
    pub name: &'static str,
    pub page: Page,
}

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        name: "home",
        page: Page::Home,
    },
    RouteEntry {
        path: "/courses",
        name: "courses",
        page: Page::CourseList,
    },
    RouteEntry {
        path: "/courses/:id",
        name: "course-detail",
        page: Page::CourseDetail,
    },
    RouteEntry {
        path: "/mypage",
        name: "mypage",
        page: Page::MyPage,
    },
    RouteEntry {
        path: "/community",
        name: "community",
        page: Page::Community,
    },
    RouteEntry {
        path: "/community/write",
        name: "community-write",
        page: Page::CommunityWrite,
    },
    RouteEntry {
        path: "/community/write/:id",
        name: "community-edit",
        page: Page::CommunityEdit,
    },
    RouteEntry {
        path: "/community/posts/:id",
        name: "post-detail",
        page: Page::PostDetail,
    },
    RouteEntry {
        path: "/guide",
        name: "guide",
        page: Page::Guide,
    },
    RouteEntry {
        path: "/login",
        name: "login",
        page: Page::Login,
    },
    RouteEntry {
        path: "/signup",
        name: "signup",
        page: Page::Signup,
    },
    RouteEntry {
        path: "/preferences",
        name: "preferences",
        page: Page::Preferences,
    },
];

/// A resolved navigation: the matching entry and its captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: BTreeMap<String, String>,
}

impl RouteMatch {
    pub fn page(&self) -> Page {
        self.entry.page
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Resolve a URL path against [`ROUTES`]. First match in table order wins.
///
/// Query string and fragment are ignored; a trailing slash is tolerated.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let actual: Vec<&str> = segments(path).collect();

    ROUTES.iter().find_map(|entry| {
        let pattern: Vec<&str> = segments(entry.path).collect();
        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, found) in pattern.iter().zip(&actual) {
            match expected.strip_prefix(':') {
                Some(name) => {
                    let value = urlencoding::decode(found)
                        .map(|decoded| decoded.into_owned())
                        .unwrap_or_else(|_| found.to_string());
                    params.insert(name.to_string(), value);
                }
                None if expected == found => {}
                None => return None,
            }
        }

        Some(RouteMatch { entry, params })
    })
}

/// Build the URL for a named route, filling `:name` segments from `params`.
///
/// Returns `None` for an unknown route or a missing parameter.
pub fn href(name: &str, params: &[(&str, &str)]) -> Option<String> {
    let entry = ROUTES.iter().find(|entry| entry.name == name)?;

    let mut url = String::new();
    for segment in segments(entry.path) {
        url.push('/');
        match segment.strip_prefix(':') {
            Some(param) => {
                let (_, value) = params.iter().find(|(key, _)| *key == param)?;
                url.push_str(&urlencoding::encode(value));
            }
            None => url.push_str(segment),
        }
    }

    if url.is_empty() {
        url.push('/');
    }
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_route_names_unique() {
        let names: HashSet<_> = ROUTES.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), ROUTES.len());
    }

    #[test]
    fn test_every_page_routed_once() {
        for page in Page::all() {
            let count = ROUTES.iter().filter(|entry| entry.page == *page).count();
            assert_eq!(count, 1, "{:?}", page);
            assert_eq!(page.route().page, *page);
        }
        assert_eq!(Page::all().len(), ROUTES.len());
    }

    #[test]
    fn test_resolve_static_paths() {
        assert_eq!(resolve("/").unwrap().page(), Page::Home);
        assert_eq!(resolve("/courses").unwrap().page(), Page::CourseList);
        assert_eq!(resolve("/community/write").unwrap().page(), Page::CommunityWrite);
        assert_eq!(resolve("/preferences").unwrap().page(), Page::Preferences);
    }

    #[test]
    fn test_resolve_captures_params() {
        let matched = resolve("/courses/42").unwrap();
        assert_eq!(matched.page(), Page::CourseDetail);
        assert_eq!(matched.param("id"), Some("42"));

        let matched = resolve("/community/write/7").unwrap();
        assert_eq!(matched.page(), Page::CommunityEdit);
        assert_eq!(matched.param("id"), Some("7"));

        assert_eq!(resolve("/community/posts/9").unwrap().page(), Page::PostDetail);
    }

    #[test]
    fn test_resolve_ignores_query_fragment_and_trailing_slash() {
        assert_eq!(resolve("/courses/?page=2").unwrap().page(), Page::CourseList);
        assert_eq!(resolve("/guide#faq").unwrap().page(), Page::Guide);
        assert_eq!(resolve("/courses/5/").unwrap().param("id"), Some("5"));
    }

    #[test]
    fn test_resolve_decodes_params() {
        let matched = resolve("/courses/%EC%9D%B8%EB%AC%B8").unwrap();
        assert_eq!(matched.param("id"), Some("인문"));
    }

    #[test]
    fn test_resolve_unknown_path() {
        assert!(resolve("/admin").is_none());
        assert!(resolve("/courses/1/reviews").is_none());
        assert!(resolve("/community/posts").is_none());
    }

    #[test]
    fn test_href_builds_paths() {
        assert_eq!(href("home", &[]).as_deref(), Some("/"));
        assert_eq!(href("course-detail", &[("id", "12")]).as_deref(), Some("/courses/12"));
        assert_eq!(href("community-edit", &[("id", "3")]).as_deref(), Some("/community/write/3"));
    }

    #[test]
    fn test_href_rejects_missing_param_or_unknown_name() {
        assert_eq!(href("post-detail", &[]), None);
        assert_eq!(href("nowhere", &[]), None);
    }

    #[test]
    fn test_href_then_resolve() {
        for entry in ROUTES {
            let url = href(entry.name, &[("id", "1")]).unwrap();
            assert_eq!(resolve(&url).unwrap().entry, entry);
        }
    }
}

use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// One entry of the top navigation bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

const NAV_ITEMS: [(&str, &str, &str); 3] = [
    ("/users", "Users", "users"),
    ("/organizations", "Organizations", "organizations"),
    ("/roles_permissions", "Roles&Permissions", "roles"),
];

/// Links for the current location; only an exact path match is highlighted
pub fn nav_links(pathname: &str) -> Vec<NavLink> {
    NAV_ITEMS
        .iter()
        .map(|&(href, label, icon)| NavLink {
            href,
            label,
            icon,
            active: href == pathname,
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="main-nav-bar">
            <span class="main-nav-bar__brand">"Admin"</span>
            <ul>
                {move || {
                    location
                        .pathname
                        .with(|path| nav_links(path))
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li
                                    class="main-nav-bar__item"
                                    class:main-nav-bar__item--active=link.active
                                >
                                    <A href=link.href>
                                        {icons::icon(link.icon)}
                                        <span>{link.label}</span>
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(pathname: &str) -> Vec<&'static str> {
        nav_links(pathname)
            .into_iter()
            .filter(|l| l.active)
            .map(|l| l.label)
            .collect()
    }

    #[test]
    fn test_links_in_fixed_order() {
        let hrefs: Vec<&str> = nav_links("/").iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["/users", "/organizations", "/roles_permissions"]);
    }

    #[test]
    fn test_exact_match_is_highlighted() {
        assert_eq!(active("/organizations"), ["Organizations"]);
        assert_eq!(active("/roles_permissions"), ["Roles&Permissions"]);
    }

    #[test]
    fn test_unknown_or_nested_path_highlights_nothing() {
        assert!(active("/settings").is_empty());
        assert!(active("/users/42").is_empty());
    }
}

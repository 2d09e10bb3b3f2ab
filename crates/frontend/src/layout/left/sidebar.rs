//! Sidebar navigation: the dashboard plus one entry per catalog collection

use crate::shared::icons::icon;
use crate::shared::service::Resource;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    href: String,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    let mut items = vec![MenuItem {
        href: "/".to_string(),
        label: "Dashboard",
        icon: "dashboard",
    }];
    items.extend(Resource::ALL.into_iter().map(|resource| MenuItem {
        href: resource.list_route(),
        label: resource.title(),
        icon: resource.icon(),
    }));
    items
}

/// `/product` is active on `/product/edit/1` but not on `/product-variant`
fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            <div class="sidebar__section-title">"Katalog"</div>
            {menu_items()
                .into_iter()
                .map(|item| {
                    let href = item.href.clone();
                    let active = move || location.pathname.with(|p| is_active(&href, p));
                    view! {
                        <A href=item.href attr:class=move || {
                            if active() { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
                        }>
                            <span class="sidebar__icon">{icon(item.icon)}</span>
                            <span class="sidebar__label">{item.label}</span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_prefix_needs_segment_boundary() {
        assert!(is_active("/product", "/product"));
        assert!(is_active("/product", "/product/edit/3"));
        assert!(!is_active("/product", "/product-variant"));
        assert!(!is_active("/", "/product"));
        assert!(is_active("/", "/"));
    }

    #[test]
    fn test_menu_lists_every_collection() {
        let hrefs: Vec<String> = menu_items().into_iter().map(|i| i.href).collect();
        assert_eq!(
            hrefs,
            vec!["/", "/product", "/product-categories", "/product-variant"]
        );
    }
}

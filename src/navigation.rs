use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const BURGER_TRANSITION: &str = "all 0.3s cubic-bezier(0.25, 0.46, 0.45, 0.94)";

fn set_burger(menu_toggle: &web::Element, open: bool) {
    for (index, bar) in dom::query_all_in(menu_toggle, ".hamburger").iter().enumerate() {
        if !open {
            dom::set_style(bar, "transform", "");
            dom::set_style(bar, "opacity", "");
            continue;
        }
        dom::set_style(bar, "transition", BURGER_TRANSITION);
        match index {
            0 => dom::set_style(bar, "transform", "rotate(45deg) translate(5px, 5px)"),
            1 => {
                dom::set_style(bar, "opacity", "0");
                dom::set_style(bar, "transform", "scale(0)");
            }
            2 => dom::set_style(bar, "transform", "rotate(-45deg) translate(7px, -6px)"),
            _ => {}
        }
    }
}

fn close_menu(menu_toggle: &web::Element, nav_links: &web::Element) {
    _ = nav_links.class_list().remove_1("active");
    set_burger(menu_toggle, false);
}

/// Mobile menu: burger toggles `.nav-links.active`; clicks outside or on a
/// link close it.
pub fn wire_menu(document: &web::Document) {
    let Some(menu_toggle) = document.get_element_by_id("menuToggle") else {
        return;
    };
    let Some(nav_links) = document.query_selector(".nav-links").ok().flatten() else {
        return;
    };

    {
        let toggle = menu_toggle.clone();
        let links = nav_links.clone();
        dom::listen(&menu_toggle, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let open = links.class_list().toggle("active").unwrap_or(false);
            set_burger(&toggle, open);
        });
    }

    {
        let toggle = menu_toggle.clone();
        let links = nav_links.clone();
        dom::listen(document, "click", move |ev: web::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
            let inside = target
                .as_ref()
                .map(|node| toggle.contains(Some(node)) || links.contains(Some(node)))
                .unwrap_or(false);
            if !inside {
                close_menu(&toggle, &links);
            }
        });
    }

    for link in dom::query_all_in(&nav_links, "a") {
        let toggle = menu_toggle.clone();
        let links = nav_links.clone();
        dom::listen(&link, "click", move |_ev: web::MouseEvent| {
            close_menu(&toggle, &links);
        });
    }
}

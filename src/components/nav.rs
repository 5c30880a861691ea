use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::content::{NavItem, FIRM_NAME, NAV_ITEMS};
use crate::hooks::{scroll_y, Debouncer, WindowListener};
use crate::view_state::active_section::{
    ActiveNav, ScrollSnapshot, SectionBounds, CLICK_SETTLE_MS, HOME_HREF, SCROLL_DEBOUNCE_MS,
};
use crate::view_state::nav_menu::{header_scrolled, MobileMenu};

/// Measures the hero and every `<section>` on the page.
fn measure_page() -> Option<ScrollSnapshot> {
    let document = web_sys::window()?.document()?;

    let hero_height = document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|hero| hero.dyn_into::<HtmlElement>().ok())
        .map(|hero| f64::from(hero.offset_height()))
        .unwrap_or(0.0);

    let nodes = document.query_selector_all("section").ok()?;
    let sections = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                Some(section.id().as_str()),
                f64::from(section.offset_top()),
                f64::from(section.client_height()),
            )
        })
        .collect();

    Some(ScrollSnapshot {
        scroll_y: scroll_y(),
        hero_height,
        sections,
    })
}

fn refresh(active: &UseStateHandle<ActiveNav>) {
    if let Some(snapshot) = measure_page() {
        let next = ActiveNav::next(&snapshot);
        log::debug!("Active nav link at {}: {:?}", snapshot.scroll_y, next.active_href());
        active.set(next);
    }
}

#[deny(deprecated)]
fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state_eq(MobileMenu::default);
    let active = use_state_eq(ActiveNav::default);
    let (_, window_scroll_y) = use_window_scroll();
    // Fallback for browsers without `scrollend`; cancelled when it arrives.
    let settle = use_memo(|_| Debouncer::default(), ());

    {
        let active = active.clone();
        let settle = settle.clone();
        use_effect_with_deps(
            move |_| {
                refresh(&active);

                let debounce = Debouncer::default();
                let on_scroll = {
                    let active = active.clone();
                    WindowListener::new("scroll", move || {
                        let active = active.clone();
                        debounce.schedule(SCROLL_DEBOUNCE_MS, move || refresh(&active));
                    })
                };
                let on_scroll_end = WindowListener::new("scrollend", move || {
                    settle.cancel();
                    refresh(&active);
                });

                move || {
                    drop(on_scroll);
                    drop(on_scroll_end);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let on_link_click = |href: &'static str| {
        let menu = menu.clone();
        let active = active.clone();
        let settle = Rc::clone(&settle);
        Callback::from(move |e: MouseEvent| {
            menu.set(menu.closed());
            if href == HOME_HREF {
                e.prevent_default();
                scroll_to_top();
            }
            let active = active.clone();
            settle.schedule(CLICK_SETTLE_MS, move || refresh(&active));
        })
    };

    html! {
        <header class={classes!(header_scrolled(window_scroll_y).then(|| "scrolled"))}>
            <nav class="navbar">
                <a href={HOME_HREF} class="logo" onclick={on_link_click(HOME_HREF)}>
                    {FIRM_NAME}
                </a>
                <ul id="nav-links" class={classes!("nav-links", menu.is_open().then(|| "active"))}>
                    { for NAV_ITEMS.iter().map(|NavItem { label, href }| html! {
                        <li>
                            <a
                                href={*href}
                                class={classes!(active.is_active(*href).then(|| "active"))}
                                onclick={on_link_click(*href)}
                            >
                                {*label}
                            </a>
                        </li>
                    }) }
                </ul>
                <button id="hamburger" class="hamburger" onclick={toggle_menu}>
                    <i class={menu.icon_class()}></i>
                </button>
            </nav>
        </header>
    }
}

use super::search_box::SearchBox;
use crate::routing::use_routing;
use crate::search::use_search;
use contracts::catalog::Category;
use contracts::routing::Page;
use leptos::ev;
use leptos::prelude::*;

/// Секции главной страницы, доступные из шапки
const SECTION_LINKS: [(&str, &str); 4] = [
    ("Início", "#home"),
    ("Sobre", "#sobre"),
    ("Cardápio", "#menu"),
    ("Contato", "#contato"),
];

const SCROLLED_OFFSET: f64 = 50.0;

#[component]
pub fn Header() -> impl IntoView {
    let routing = use_routing();
    let search = use_search();

    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(false);

    let scroll = window_event_listener(ev::scroll, move |_| {
        let y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        scrolled.set(y > SCROLLED_OFFSET);
    });
    on_cleanup(move || scroll.remove());

    // Переход всегда сбрасывает поиск, чтобы отложенный результат не всплыл
    let go = move |page: Page, anchor: Option<&'static str>| {
        search.clear();
        menu_open.set(false);
        routing.navigate(page, anchor);
    };

    let sections = SECTION_LINKS
        .into_iter()
        .map(|(label, anchor)| {
            view! {
                <li>
                    <a
                        href=anchor
                        on:click=move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            go(Page::Home, Some(anchor));
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let categories = Category::all()
        .into_iter()
        .map(|category| {
            let page = Page::Category(category);
            view! {
                <li>
                    <a
                        href=page.path()
                        on:click=move |ev: ev::MouseEvent| {
                            ev.prevent_default();
                            go(page, None);
                        }
                    >
                        {category.title()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class=move || if scrolled.get() { "site-header site-header--scrolled" } else { "site-header" }>
            <a
                class="site-header__logo"
                href="/"
                on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    go(Page::Home, None);
                }
            >
                "Tapiocaria"
            </a>

            <button
                class="site-header__toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <nav class=move || if menu_open.get() { "site-nav site-nav--open" } else { "site-nav" }>
                <ul class="site-nav__sections">{sections}</ul>
                <ul class="site-nav__categories">{categories}</ul>
            </nav>

            <SearchBox />
        </header>
    }
}

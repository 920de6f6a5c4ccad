use crate::app::use_site;
use crate::routing::use_routing;
use crate::shared::components::ItemCard;
use contracts::catalog::Category;
use leptos::prelude::*;

/// Страница категории: заголовок, кнопка "voltar" и сетка карточек
#[component]
pub fn MenuPage(category: Category) -> impl IntoView {
    let site = use_site();
    let routing = use_routing();

    let items: Vec<_> = site.catalog.in_category(category).cloned().collect();
    let is_empty = items.is_empty();
    let cards = items
        .into_iter()
        .map(|item| view! { <ItemCard item=item /> })
        .collect_view();

    // Карточки в DOM, якорь `#item-{id}` уже можно найти
    Effect::new(move |_| routing.content_mounted());

    let header_style = format!(
        "background-image: url('{}');",
        category.background_image()
    );

    view! {
        <div class="menu-page">
            <header class="menu-page__header" style=header_style>
                <button class="menu-page__back" on:click=move |_| routing.go_home()>
                    "← Voltar"
                </button>
                <h1 class="menu-page__title">{category.title()}</h1>
            </header>

            <Show when=move || is_empty>
                <p class="menu-page__empty">"Nenhum item nesta categoria."</p>
            </Show>

            <div class="menu-page__grid">{cards}</div>
        </div>
    }
}

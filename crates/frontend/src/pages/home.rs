use super::hero::Hero;
use crate::routing::use_routing;
use contracts::catalog::Category;
use contracts::routing::Page;
use leptos::prelude::*;

/// Карточка категории в секции меню
#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let routing = use_routing();
    let style = format!("background-image: url('{}');", category.background_image());

    view! {
        <button
            class="category-card"
            style=style
            on:click=move |_| routing.navigate(Page::Category(category), None)
        >
            <span class="category-card__title">{category.title()}</span>
        </button>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let routing = use_routing();

    // Страница смонтирована: можно прокручивать к отложенному якорю
    Effect::new(move |_| routing.content_mounted());

    let categories = Category::all()
        .into_iter()
        .map(|category| view! { <CategoryCard category=category /> })
        .collect_view();

    view! {
        <div class="home-page">
            <Hero />

            <section id="sobre" class="about">
                <h2>"Sobre nós"</h2>
                <p>
                    "Há mais de 20 anos servimos tapiocas feitas na hora, com goma fresca "
                    "e recheios preparados todos os dias. Doces ou salgadas, do jeito que "
                    "você gosta."
                </p>
            </section>

            <section id="menu" class="menu-section">
                <h2>"Nosso Cardápio"</h2>
                <div class="menu-section__categories">{categories}</div>
            </section>
        </div>
    }
}

use crate::routing::use_routing;
use contracts::catalog::CatalogItem;
use leptos::prelude::*;

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x600/FFF/333?text=Imagem+Indisponível";

/// Строка звёзд рейтинга, `filled` из пяти
pub fn rating_stars(filled: u8) -> String {
    let filled = filled.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Карточка позиции на странице категории. Клик открывает детали.
#[component]
pub fn ItemCard(item: CatalogItem) -> impl IntoView {
    let routing = use_routing();

    let image_url = item
        .main_image()
        .map(|img| img.url.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let image_style = format!("object-fit: {};", item.image_fit().css_value());
    let stars = item.rating.map(rating_stars);
    let dom_id = item.dom_id();
    let alt = item.name.clone();
    let name = item.name.clone();
    let description = item.description.clone();
    let price = item.price.clone();

    let on_click = move |_| routing.select_item(&item);

    view! {
        <article id=dom_id class="item-card" on:click=on_click>
            <img class="item-card__image" src=image_url alt=alt style=image_style />
            <div class="item-card__body">
                <h3 class="item-card__name">{name}</h3>
                {stars.map(|s| view! { <div class="item-card__rating">{s}</div> })}
                <p class="item-card__description">{description}</p>
                <span class="item-card__price">{price}</span>
            </div>
        </article>
    }
}

use crate::routing::{use_routing, RoutingContext};
use crate::shared::components::item_card::rating_stars;
use crate::shared::components::PLACEHOLDER_IMAGE;
use contracts::catalog::CatalogItem;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Закрытие через следующий тик: оверлей удаляется из DOM во время
/// собственного click-обработчика
fn close_deferred(routing: RoutingContext) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        routing.close_selection();
    });
}

/// Детали позиции поверх текущей страницы.
/// Escape, клик по оверлею и кнопка закрытия ведут в `close_selection`.
#[component]
pub fn ProductDetail(item: CatalogItem) -> impl IntoView {
    let routing = use_routing();

    let main_url = item
        .main_image()
        .map(|img| img.url.clone())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let active_image = RwSignal::new(main_url);

    let keydown = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            routing.close_selection();
        }
    });

    set_body_overflow("hidden");
    on_cleanup(move || {
        keydown.remove();
        set_body_overflow("");
    });

    let overlay_mouse_down = RwSignal::new(false);
    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };
    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_deferred(routing);
        }
    };

    let thumbnails = if item.images.len() > 1 {
        let thumbs = item
            .images
            .iter()
            .map(|img| {
                let url = img.url.clone();
                let src = url.clone();
                let is_active = {
                    let url = url.clone();
                    move || active_image.with(|current| *current == url)
                };
                view! {
                    <button
                        class=move || {
                            if is_active() {
                                "product-detail__thumb product-detail__thumb--active"
                            } else {
                                "product-detail__thumb"
                            }
                        }
                        on:click=move |_| active_image.set(url.clone())
                    >
                        <img src=src alt="" />
                    </button>
                }
            })
            .collect_view();
        Some(view! { <div class="product-detail__thumbs">{thumbs}</div> })
    } else {
        None
    };

    let image_style = format!("object-fit: {};", item.image_fit().css_value());
    let stars = item.rating.map(rating_stars);

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal product-detail">
                <button class="product-detail__close" on:click=move |_| close_deferred(routing)>
                    "×"
                </button>
                <img
                    class="product-detail__image"
                    src=move || active_image.get()
                    alt=item.name.clone()
                    style=image_style
                />
                {thumbnails}
                <div class="product-detail__info">
                    <h2>{item.name.clone()}</h2>
                    {stars.map(|s| view! { <div class="product-detail__rating">{s}</div> })}
                    <p>{item.description.clone()}</p>
                    <span class="product-detail__price">{item.price.clone()}</span>
                </div>
            </div>
        </div>
    }
}

use crate::routing::use_routing;
use crate::search::{use_search, Dropdown};
use crate::shared::components::PLACEHOLDER_IMAGE;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Строка поиска с выпадающим списком результатов
#[component]
pub fn SearchBox() -> impl IntoView {
    let routing = use_routing();
    let search = use_search();

    let container = NodeRef::<html::Div>::new();
    let dropdown_open = RwSignal::new(false);

    // Клик вне блока поиска прячет список, запрос остаётся
    let outside = window_event_listener(ev::mousedown, move |ev: ev::MouseEvent| {
        let Some(root) = container.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            dropdown_open.set(false);
        }
    });
    on_cleanup(move || outside.remove());

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        dropdown_open.set(true);
        search.input(value);
    };

    let results = move || {
        search.state.with(|state| match state.dropdown() {
            Dropdown::Hidden => ().into_any(),
            Dropdown::Searching => view! {
                <div class="search-box__status">"Buscando..."</div>
            }
            .into_any(),
            Dropdown::NoResults => view! {
                <div class="search-box__status">{state.no_results_message()}</div>
            }
            .into_any(),
            Dropdown::Results => state
                .results
                .iter()
                .map(|item| {
                    let id = item.id;
                    let image = item
                        .main_image()
                        .map(|img| img.url.clone())
                        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
                    view! {
                        <button
                            class="search-box__result"
                            on:click=move |_| {
                                dropdown_open.set(false);
                                if let Some(item) = search.select_result(id) {
                                    routing.reveal_item(&item);
                                }
                            }
                        >
                            <img src=image alt="" />
                            <span class="search-box__name">{item.name.clone()}</span>
                            <span class="search-box__price">{item.price.clone()}</span>
                        </button>
                    }
                })
                .collect_view()
                .into_any(),
        })
    };

    let show_dropdown = move || {
        dropdown_open.get() && search.state.with(|s| s.dropdown() != Dropdown::Hidden)
    };

    view! {
        <div class="search-box" node_ref=container>
            <input
                type="text"
                class="search-box__input"
                placeholder="Buscar no cardápio..."
                prop:value=move || search.state.with(|s| s.query.clone())
                on:input=on_input
                on:focus=move |_| dropdown_open.set(true)
            />
            <Show when=show_dropdown>
                <div class="search-box__dropdown">{results}</div>
            </Show>
        </div>
    }
}

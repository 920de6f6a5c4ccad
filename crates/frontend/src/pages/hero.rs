use crate::app::use_site;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Следующий слайд по кругу. Пустой список остаётся на нуле.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Карусель на главной: фон и подзаголовок меняются каждые `rotate_secs`
#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site();
    let hero = site.config.hero.clone();
    let images = hero.images.clone();
    let subtitles = hero.subtitles.clone();

    let image_index = RwSignal::new(0usize);
    let subtitle_index = RwSignal::new(0usize);

    let image_count = images.len();
    let subtitle_count = subtitles.len();
    let rotate_ms = hero.rotate_secs.max(1) * 1000;

    let timer = StoredValue::new_local(Some(Interval::new(rotate_ms, move || {
        image_index.update(|i| *i = next_slide(*i, image_count));
        subtitle_index.update(|i| *i = next_slide(*i, subtitle_count));
    })));
    on_cleanup(move || timer.dispose());

    let background = move || {
        image_index.with(|i| {
            images
                .get(*i)
                .map(|url| format!("background-image: url('{}');", url))
                .unwrap_or_default()
        })
    };
    let subtitle = move || subtitle_index.with(|i| subtitles.get(*i).cloned().unwrap_or_default());

    let dots = (0..image_count)
        .map(|n| {
            view! {
                <button
                    class=move || {
                        if image_index.get() == n {
                            "hero__dot hero__dot--active"
                        } else {
                            "hero__dot"
                        }
                    }
                    on:click=move |_| image_index.set(n)
                ></button>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="hero" style=background>
            <div class="hero__overlay">
                <h1 class="hero__title">"Tapiocaria"</h1>
                <p class="hero__subtitle">{subtitle}</p>
                <div class="hero__dots">{dots}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_slide_wraps() {
        assert_eq!(next_slide(0, 5), 1);
        assert_eq!(next_slide(4, 5), 0);
        assert_eq!(next_slide(3, 0), 0);
    }
}

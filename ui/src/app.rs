use leptos::*;

#[cfg(target_arch = "wasm32")]
use app_shell::DEFAULT_CATEGORY;
#[cfg(target_arch = "wasm32")]
use chrono::{Local, NaiveDate};
#[cfg(target_arch = "wasm32")]
use futures::future::join_all;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
#[cfg(target_arch = "wasm32")]
use js_sys::{encode_uri_component, Reflect};
#[cfg(target_arch = "wasm32")]
use leptos_meta::{provide_meta_context, Style, Title};
#[cfg(target_arch = "wasm32")]
use predict_core::{
    sort_by_proximity, DecodeError, PredictResponse, SearchEntry, StockDetail, StockSummary,
    CATEGORY_NAMES,
};
#[cfg(target_arch = "wasm32")]
use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use web_sys::ScrollBehavior;

#[cfg(target_arch = "wasm32")]
use crate::cards::{EmptyCategoryCard, StockCard};
#[cfg(target_arch = "wasm32")]
use crate::detail::StockDetailView;
#[cfg(target_arch = "wasm32")]
use crate::state::provide_app_ctx;
#[cfg(target_arch = "wasm32")]
use crate::theme::GLOBAL_CSS;

const DEFAULT_API_BASE: &str = "https://earnings-predictor.onrender.com";

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn api_base_default() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        read_global("EARNINGS_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_API_BASE.to_string()
    }
}

// ---------- Fetch boundary --------------------------------------------------

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("status {0}")]
    Status(u16),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(target_arch = "wasm32")]
async fn fetch_response(api: &str, ticker: &str) -> Result<PredictResponse, FetchError> {
    let url = format!("{}/predict?ticker={}", api, encode_uri_component(ticker));
    let resp = Request::get(&url).send().await?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let body = resp.text().await?;
    Ok(predict_core::decode_response(&body)?)
}

/// Per-ticker fetch for the card grid. Every failure path resolves to a
/// stub record so a batch join can never lose a ticker.
#[cfg(target_arch = "wasm32")]
async fn fetch_summary(api: &str, ticker: &str, today: NaiveDate) -> StockSummary {
    match fetch_response(api, ticker).await {
        Ok(resp) => StockSummary::from_response(ticker, &resp, today),
        Err(err) => {
            web_sys::console::warn_1(&format!("{ticker} fetch failed: {err}").into());
            StockSummary::stub(ticker)
        }
    }
}

// ---------- Browser glue ----------------------------------------------------

#[cfg(target_arch = "wasm32")]
fn replace_fragment(fragment: Option<&str>) {
    let Some(win) = web_sys::window() else { return };
    let Ok(history) = win.history() else { return };
    let url = match fragment {
        Some(f) => format!("#{f}"),
        None => win.location().pathname().unwrap_or_else(|_| "/".to_string()),
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
}

#[cfg(target_arch = "wasm32")]
fn scroll_window_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

#[cfg(target_arch = "wasm32")]
fn scroll_nav_start(nav: &web_sys::Element) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_left(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    nav.scroll_to_with_scroll_to_options(&opts);
}

// ---------- App -------------------------------------------------------------

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
enum Screen {
    Grid,
    Detail(StockDetail),
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn App() -> impl IntoView {
    let _ = api_base_default();
    view! { <div>"UI available in browser build."</div> }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let ctx = provide_app_ctx(api_base_default());

    let (view_state, set_view_state) = create_signal(Screen::Grid);
    let (selected_category, set_selected_category) = create_signal(ctx.state.selected_category());
    let cards = create_rw_signal::<Vec<StockSummary>>(Vec::new());
    let empty_category = create_rw_signal::<Option<String>>(None);
    let (loading, set_loading) = create_signal(false);
    // Batch generation: a pipeline run only publishes its results while it
    // is still the newest run, so a slow batch can never clobber a fresh one.
    let generation = create_rw_signal(0_u64);

    let search_query = create_rw_signal(String::new());
    let search_results = create_rw_signal::<Vec<SearchEntry>>(Vec::new());

    // Category strip scroll/fade state.
    let nav_ref = create_node_ref::<html::Nav>();
    let (at_start, set_at_start) = create_signal(true);
    let (at_end, set_at_end) = create_signal(false);

    let update_fade = move || {
        if let Some(nav) = nav_ref.get_untracked() {
            let left = nav.scroll_left();
            set_at_start.set(left == 0);
            set_at_end.set(left + nav.client_width() >= nav.scroll_width());
        }
    };

    // Restore the persisted nav offset once the strip is mounted.
    {
        let state = ctx.state.clone();
        create_effect(move |_| {
            if let Some(nav) = nav_ref.get() {
                nav.set_scroll_left(state.nav_scroll());
                update_fade();
            }
        });
    }

    let run_pipeline = {
        let api_base = ctx.api_base;
        move |category: String| {
            let my_gen = generation.get_untracked() + 1;
            generation.set(my_gen);
            match predict_core::category_tickers(&category) {
                Some(tickers) if !tickers.is_empty() => {
                    empty_category.set(None);
                    set_loading.set(true);
                    let api = api_base.get_untracked();
                    spawn_local(async move {
                        let today = Local::now().date_naive();
                        let mut items =
                            join_all(tickers.iter().map(|t| fetch_summary(&api, t, today))).await;
                        if generation.get_untracked() != my_gen {
                            return;
                        }
                        sort_by_proximity(&mut items, today);
                        cards.set(items);
                        set_loading.set(false);
                    });
                }
                _ => {
                    cards.set(Vec::new());
                    empty_category.set(Some(category));
                    set_loading.set(false);
                }
            }
        }
    };

    let show_detail = {
        let state = ctx.state.clone();
        let api_base = ctx.api_base;
        move |ticker: String| {
            set_loading.set(true);
            let api = api_base.get_untracked();
            let state = state.clone();
            spawn_local(async move {
                match fetch_response(&api, &ticker).await {
                    Ok(resp) => {
                        let detail = StockDetail::from_response(&ticker, &resp);
                        state.set_last_stock(&ticker);
                        replace_fragment(Some(&format!("stock={ticker}")));
                        set_view_state.set(Screen::Detail(detail));
                        search_query.set(String::new());
                        scroll_window_top();
                        if let Some(nav) = nav_ref.get_untracked() {
                            scroll_nav_start(&nav);
                        }
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("{ticker} detail fetch failed: {err}").into(),
                        );
                    }
                }
                set_loading.set(false);
            });
        }
    };

    let go_home = {
        let state = ctx.state.clone();
        move || {
            state.clear_last_stock();
            replace_fragment(None);
            set_view_state.set(Screen::Grid);
            run_pipeline(selected_category.get_untracked());
        }
    };

    let select_category = {
        let state = ctx.state.clone();
        move |category: String| {
            state.set_selected_category(&category);
            state.clear_last_stock();
            set_selected_category.set(category.clone());
            set_view_state.set(Screen::Grid);
            replace_fragment(None);
            run_pipeline(category);
            scroll_window_top();
            update_fade();
        }
    };

    let header_click = {
        let state = ctx.state.clone();
        let select_category = select_category.clone();
        move |_| {
            state.clear_nav_scroll();
            select_category(DEFAULT_CATEGORY.to_string());
            if let Some(nav) = nav_ref.get_untracked() {
                scroll_nav_start(&nav);
            }
            // The smooth scroll is still in flight; re-check the fade edges
            // once it has settled.
            spawn_local(async move {
                TimeoutFuture::new(400).await;
                update_fade();
            });
        }
    };

    let run_filter = move |query: &str| {
        search_results.set(predict_core::search_stocks(query));
    };

    // Clicking outside the search container closes the dropdown without
    // altering the input.
    let outside_click = window_event_listener(ev::click, move |ev| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.closest(".search-container").ok().flatten().is_some())
            .unwrap_or(false);
        if !inside {
            search_results.set(Vec::new());
        }
    });
    on_cleanup(move || outside_click.remove());

    let select_search_hit = {
        let show_detail = show_detail.clone();
        move |ticker: String| {
            search_results.set(Vec::new());
            search_query.set(ticker.clone());
            show_detail(ticker);
        }
    };

    // On load: a remembered stock goes straight to its detail view,
    // otherwise the persisted category (default "All") populates the grid.
    {
        let show_detail = show_detail.clone();
        match ctx.state.last_stock() {
            Some(ticker) => show_detail(ticker),
            None => run_pipeline(selected_category.get_untracked()),
        }
    }

    let footer_text = move || {
        if loading.get() {
            "Loading\u{2026}"
        } else {
            "Earnings Radar \u{2014} model predictions, not investment advice."
        }
    };

    let grid_view = {
        let show_detail = show_detail.clone();
        move || {
            if let Some(category) = empty_category.get() {
                return view! {
                    <div class="cards-grid">
                        <EmptyCategoryCard category=category/>
                    </div>
                }
                .into_view();
            }
            let open = show_detail.clone();
            view! {
                <div class="cards-grid">
                    {cards.get().into_iter().map(|stock| {
                        let open = open.clone();
                        view! { <StockCard stock=stock on_open=move |t| open(t)/> }
                    }).collect_view()}
                </div>
            }
            .into_view()
        }
    };

    let nav_state = ctx.state.clone();
    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text="Earnings Radar"/>
        <main class="app">
            <div class="shell">
                <header class="header-top">
                    <h1 on:click=header_click>"Earnings Radar"</h1>
                    <div class="search-container">
                        <div class="search-box">
                            <input
                                type="text"
                                placeholder="Search stocks..."
                                prop:value=move || search_query.get()
                                on:input=move |ev| {
                                    let q = event_target_value(&ev);
                                    run_filter(&q);
                                    search_query.set(q);
                                }
                                on:focus=move |_| {
                                    let q = search_query.get_untracked();
                                    if !q.trim().is_empty() {
                                        run_filter(&q);
                                    }
                                }
                            />
                        </div>
                        <div
                            class="search-results"
                            style:display=move || {
                                if search_results.get().is_empty() { "none" } else { "block" }
                            }
                        >
                            {
                                let select = select_search_hit.clone();
                                move || {
                                    let select = select.clone();
                                    search_results
                                        .get()
                                        .into_iter()
                                        .map(|hit| {
                                            let select = select.clone();
                                            view! {
                                                <div
                                                    class="search-item"
                                                    on:click=move |_| select(hit.ticker.to_string())
                                                >
                                                    <div class="item-ticker">
                                                        <strong>{hit.ticker}</strong>
                                                    </div>
                                                    <div class="item-name">{hit.name}</div>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }
                            }
                        </div>
                    </div>
                </header>

                <div
                    class="categories-wrapper"
                    class=("scrolled", move || !at_start.get())
                    class=("at-start", move || at_start.get())
                    class=("at-end", move || at_end.get())
                >
                    <nav
                        class="categories-nav"
                        node_ref=nav_ref
                        on:scroll=move |_| {
                            if let Some(nav) = nav_ref.get_untracked() {
                                nav_state.set_nav_scroll(nav.scroll_left());
                            }
                            update_fade();
                        }
                    >
                        {CATEGORY_NAMES.iter().map(|&name| {
                            let select = select_category.clone();
                            view! {
                                <button
                                    class:selected=move || selected_category.get() == name
                                    on:click=move |_| select(name.to_string())
                                >
                                    {name}
                                </button>
                            }
                        }).collect_view()}
                    </nav>
                </div>

                <section class="content">
                    {
                        let go_home = go_home.clone();
                        move || match view_state.get() {
                            Screen::Grid => grid_view().into_view(),
                            Screen::Detail(stock) => {
                                let back = go_home.clone();
                                view! {
                                    <StockDetailView stock=stock on_back=move |_| back()/>
                                }
                                .into_view()
                            }
                        }
                    }
                </section>

                <footer class="footer">{footer_text}</footer>
            </div>
        </main>
    }
}

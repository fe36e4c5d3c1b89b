use leptos::*;
use predict_core::{
    countdown_display, format_earnings_date, format_market_cap, format_number, resolve_logo,
    CardVisual, StockSummary,
};

/// Semicircular arc shared by the card and detail gauges. The fill length is
/// derived from the rendered path geometry, not from this constant.
pub const GAUGE_ARC: &str = "M10,50 A40,40 0 0,1 90,50";

#[component]
pub fn PredictionGauge(pct: f64, #[prop(optional)] detail: bool) -> impl IntoView {
    let fg_ref = create_node_ref::<svg::Path>();

    // The dash geometry and color tier are applied once the path has been
    // rendered and can be measured.
    #[cfg(target_arch = "wasm32")]
    {
        create_effect(move |_| {
            let Some(path) = fg_ref.get() else {
                return;
            };
            let length = path.get_total_length() as f64;
            let style = path.style();
            let _ = style.set_property("stroke-dasharray", &length.to_string());
            let _ = style.set_property(
                "stroke-dashoffset",
                &(length * (1.0 - pct / 100.0)).to_string(),
            );
            let classes = path.class_list();
            for tier in ["red", "yellow", "green"] {
                let _ = classes.remove_1(tier);
            }
            let _ = classes.add_1(predict_core::GaugeColor::for_pct(pct).class());
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = &fg_ref;

    let wrapper_class = if detail {
        "visual prediction detail-visual"
    } else {
        "visual prediction"
    };
    view! {
        <div class=wrapper_class>
            <svg class="gauge" viewBox="0 0 100 50">
                <path class="bg" d=GAUGE_ARC fill="none"/>
                <path class="fg" d=GAUGE_ARC fill="none" node_ref=fg_ref/>
            </svg>
            <div class="percent">{format!("{pct:.1}%")}</div>
        </div>
    }
}

#[component]
pub fn CountdownDisplay(days_until: Option<i64>, #[prop(optional)] detail: bool) -> impl IntoView {
    let (count, unit) = countdown_display(days_until);
    let wrapper_class = if detail {
        "visual countdown detail-visual"
    } else {
        "visual countdown"
    };
    view! {
        <div class=wrapper_class>
            <div class="count">{count}</div>
            <div class="days">{unit}</div>
            <div class="until">"until prediction"</div>
        </div>
    }
}

/// One grid card. Click handling lives on the grid container in `App`, keyed
/// off the ticker carried here in `data-ticker`.
#[component]
pub fn StockCard<F>(stock: StockSummary, on_open: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let mode_class = match stock.visual() {
        CardVisual::Prediction(_) => "card mode-prediction",
        CardVisual::Countdown(_) => "card mode-countdown",
    };
    let visual = match stock.visual() {
        CardVisual::Prediction(pct) => view! { <PredictionGauge pct=pct/> }.into_view(),
        CardVisual::Countdown(days) => {
            view! { <CountdownDisplay days_until=days/> }.into_view()
        }
    };
    let logo = resolve_logo(&stock.ticker, stock.logo.as_deref());
    let alt = format!("{} logo", stock.name);
    let ticker = stock.ticker.clone();
    view! {
        <div class=mode_class data-ticker=stock.ticker.clone() on:click=move |_| on_open(ticker.clone())>
            <div class="card-content">
                <div class="header-row">
                    <div class="logo">
                        {logo.map(|src| view! { <img src=src alt=alt.clone()/> })}
                    </div>
                    <div class="header">
                        <h2 class="company">{stock.name.clone()}</h2>
                        <span class="ticker">{stock.ticker.clone()}</span>
                    </div>
                </div>
                <div class="information">
                    <div class="details">
                        <div class="info">
                            <span class="label">"Next Earnings:"</span>
                            <span class="value">{format_earnings_date(stock.date)}</span>
                        </div>
                        <div class="info">
                            <span class="label">"Expected EPS:"</span>
                            <span class="value">{format_number(stock.expected_eps, 2)}</span>
                        </div>
                        <div class="info">
                            <span class="label">"Market Cap:"</span>
                            <span class="value">{format_market_cap(stock.market_cap)}</span>
                        </div>
                    </div>
                    {visual}
                </div>
            </div>
        </div>
    }
}

/// Placeholder card shown when a category resolves to no tickers.
#[component]
pub fn EmptyCategoryCard(category: String) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-content">
                {format!("No tickers found for \u{201c}{category}.\u{201d}")}
            </div>
        </div>
    }
}

use leptos::*;
use predict_core::{
    description_parts, format_earnings_date, format_market_cap, format_number,
    parse_earnings_date, resolve_logo, CardVisual, StockDetail,
};

use crate::cards::{CountdownDisplay, PredictionGauge};

#[component]
pub fn StockDetailView(stock: StockDetail, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);

    let visual = match stock.visual() {
        CardVisual::Prediction(pct) => view! { <PredictionGauge pct=pct detail=true/> }.into_view(),
        CardVisual::Countdown(days) => {
            view! { <CountdownDisplay days_until=days detail=true/> }.into_view()
        }
    };

    let logo = resolve_logo(&stock.ticker, stock.logo.as_deref());
    let alt = format!("{} logo", stock.name);
    let next_earnings = format_earnings_date(
        stock
            .next_earnings_date
            .as_deref()
            .and_then(parse_earnings_date),
    );
    let (lead, rest) = description_parts(&stock.description);
    let has_more = !rest.is_empty();

    let website = match stock.website.clone() {
        Some(url) => view! {
            <a href=url class="link-button" target="_blank" rel="noopener noreferrer">
                "View Website"
            </a>
        }
        .into_view(),
        None => view! { <span class="no-website">"No website available"</span> }.into_view(),
    };

    view! {
        <div class="stock-detail">
            <button class="back-btn" on:click=move |_| on_back.call(())>
                "\u{2190} Back to all stocks"
            </button>

            <div class="detail-header">
                <div class="company-info">
                    {logo.map(|src| view! { <img src=src alt=alt.clone() class="logo"/> })}
                    <div>
                        <h1>
                            {stock.name.clone()}
                            <span class="ticker">{stock.ticker.clone()}</span>
                        </h1>
                        <div class="tags">
                            <span class="tag sector">{stock.sector.clone().unwrap_or_default()}</span>
                            <span class="tag industry">{stock.industry.clone().unwrap_or_default()}</span>
                        </div>
                    </div>
                </div>
                {visual}
            </div>

            <div class="metrics-grid">
                <div><strong>"Next Earnings: "</strong>{next_earnings}</div>
                <div><strong>"Expected EPS: "</strong>{format_number(stock.expected_eps, 2)}</div>
                <div><strong>"Trailing P/E: "</strong>{format_number(stock.trailing_pe, 2)}</div>
                <div><strong>"Beta: "</strong>{format_number(stock.beta, 2)}</div>
                <div><strong>"Market Cap: "</strong>{format_market_cap(stock.market_cap)}</div>
            </div>

            <div class="description">
                <p>{website}</p>
                <p>
                    {lead}
                    <Show when=move || expanded.get()>
                        <span class="more-text">{format!(" {rest}")}</span>
                    </Show>
                </p>
                <Show when=move || has_more>
                    <button
                        class="toggle-btn"
                        on:click=move |_| set_expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Show less" } else { "\u{2026}Read more" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

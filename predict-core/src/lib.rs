use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Placeholder shown for any missing or non-numeric metric.
pub const PLACEHOLDER: &str = "N/A";
/// Placeholder shown for a missing or unparseable earnings date.
pub const DATE_PLACEHOLDER: &str = "TBD";
/// Placeholder shown in countdown mode when no day count is known.
pub const COUNTDOWN_PLACEHOLDER: &str = "–";

/// The API's `days_until` counts to a forecast window seven days ahead of
/// the actual earnings event; subtract this to get the true day count.
pub const FORECAST_LEAD_DAYS: i64 = 7;

// ---------- Wire schema -----------------------------------------------------

/// Typed decode of a `GET /predict?ticker=…` response body.
///
/// Every field is optional on the wire. Numeric fields are decoded leniently:
/// the backend emits `expected_eps` either as a number or as the literal
/// string `"TBD"`, and `earnings_date` may be `"TBD"` as well.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    pub ticker: Option<String>,
    pub company_name: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub earnings_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub expected_eps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub pe_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub beta: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub days_until: Option<i64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub raw_beat_pct: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub scaled_beat_pct: Option<f64>,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response body is not a valid predict payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a raw response body into the typed schema.
pub fn decode_response(body: &str) -> Result<PredictResponse, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

/// Accepts a JSON number or a numeric string; anything else becomes `None`.
fn lenient_f64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

fn lenient_i64<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v as i64)),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

// ---------- Derived records -------------------------------------------------

/// Per-ticker card record, rebuilt on every category fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSummary {
    pub ticker: String,
    pub name: String,
    pub logo: Option<String>,
    pub date: Option<NaiveDate>,
    pub expected_eps: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub market_cap: Option<f64>,
    pub beta: Option<f64>,
    pub days_until: Option<i64>,
    pub raw_beat_pct: Option<f64>,
}

impl StockSummary {
    /// Derive the card record from a decoded response.
    ///
    /// Date resolution prefers `today + days_until` for a non-negative
    /// `days_until`, then a parseable `earnings_date`, then nothing.
    /// `days_until` keeps the API value when present, otherwise it is derived
    /// from the resolved date.
    pub fn from_response(ticker: &str, resp: &PredictResponse, today: NaiveDate) -> Self {
        let date = match resp.days_until {
            Some(d) if d >= 0 => Some(today + Duration::days(d)),
            _ => resp.earnings_date.as_deref().and_then(parse_earnings_date),
        };
        let days_until = resp
            .days_until
            .or_else(|| date.map(|d| (d - today).num_days()));
        Self {
            ticker: ticker.to_string(),
            name: resp
                .company_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| ticker.to_string()),
            logo: resp.logo.clone(),
            date,
            expected_eps: resp.expected_eps,
            trailing_pe: resp.pe_ratio,
            market_cap: resp.market_cap,
            beta: resp.beta,
            days_until,
            raw_beat_pct: resp.raw_beat_pct.filter(|p| p.is_finite()),
        }
    }

    /// Degraded record for a ticker whose fetch failed. Never dropped from
    /// the list: the ticker doubles as the display name, all metrics absent.
    pub fn stub(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            logo: None,
            date: None,
            expected_eps: None,
            trailing_pe: None,
            market_cap: None,
            beta: None,
            days_until: None,
            raw_beat_pct: None,
        }
    }

    pub fn visual(&self) -> CardVisual {
        CardVisual::from_parts(self.raw_beat_pct, self.days_until)
    }

    /// Absolute distance in days from `today`; dateless records sort last.
    pub fn proximity_days(&self, today: NaiveDate) -> i64 {
        self.date
            .map(|d| (d - today).num_days().abs())
            .unwrap_or(i64::MAX)
    }
}

/// Expanded single-ticker record for the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct StockDetail {
    pub ticker: String,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub description: String,
    pub next_earnings_date: Option<String>,
    pub expected_eps: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub beta: Option<f64>,
    pub market_cap: Option<f64>,
    pub days_until: Option<i64>,
    pub raw_beat_pct: Option<f64>,
}

impl StockDetail {
    pub fn from_response(ticker: &str, resp: &PredictResponse) -> Self {
        Self {
            ticker: ticker.to_string(),
            name: resp
                .company_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| ticker.to_string()),
            logo: resp.logo.clone(),
            website: resp.website.clone().filter(|w| !w.is_empty()),
            sector: resp.sector.clone(),
            industry: resp.industry.clone(),
            description: resp.description.clone().unwrap_or_default(),
            next_earnings_date: resp.earnings_date.clone(),
            expected_eps: resp.expected_eps,
            trailing_pe: resp.pe_ratio,
            beta: resp.beta,
            market_cap: resp.market_cap,
            days_until: resp.days_until,
            raw_beat_pct: resp.raw_beat_pct.filter(|p| p.is_finite()),
        }
    }

    pub fn visual(&self) -> CardVisual {
        CardVisual::from_parts(self.raw_beat_pct, self.days_until)
    }
}

// ---------- Visual mode -----------------------------------------------------

/// The two mutually exclusive card visuals. A finite `raw_beat_pct` selects
/// the gauge; otherwise the countdown runs off `days_until`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardVisual {
    Prediction(f64),
    Countdown(Option<i64>),
}

impl CardVisual {
    pub fn from_parts(raw_beat_pct: Option<f64>, days_until: Option<i64>) -> Self {
        match raw_beat_pct.filter(|p| p.is_finite()) {
            Some(pct) => CardVisual::Prediction(pct),
            None => CardVisual::Countdown(days_until),
        }
    }
}

/// Gauge fill tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeColor {
    Red,
    Yellow,
    Green,
}

impl GaugeColor {
    pub fn for_pct(pct: f64) -> Self {
        if pct < 40.0 {
            GaugeColor::Red
        } else if pct < 60.0 {
            GaugeColor::Yellow
        } else {
            GaugeColor::Green
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            GaugeColor::Red => "red",
            GaugeColor::Yellow => "yellow",
            GaugeColor::Green => "green",
        }
    }
}

/// Countdown number and unit label. The displayed count is `days_until`
/// minus the forecast lead; the unit is singular only at exactly 1.
pub fn countdown_display(days_until: Option<i64>) -> (String, &'static str) {
    match days_until {
        Some(raw) => {
            let left = raw - FORECAST_LEAD_DAYS;
            let unit = if left == 1 { "day" } else { "days" };
            (left.to_string(), unit)
        }
        None => (COUNTDOWN_PLACEHOLDER.to_string(), "days"),
    }
}

/// Stable ascending sort by absolute time-distance from `today`. Dateless
/// entries land at the end; ties keep insertion order.
pub fn sort_by_proximity(items: &mut [StockSummary], today: NaiveDate) {
    items.sort_by_key(|s| s.proximity_days(today));
}

// ---------- Formatters ------------------------------------------------------

const MONTH_ABBREV: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "Jun.", "Jul.", "Aug.", "Sept.", "Oct.", "Nov.", "Dec.",
];

/// Lenient parse of an API date string. `"TBD"`, empty and garbage all
/// yield `None`.
pub fn parse_earnings_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%m/%d/%Y"))
        .ok()
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    let rem = day % 100;
    if (11..=13).contains(&rem) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `"{Month abbrev}. {day}{ordinal}, {year}"`, or the TBD placeholder.
pub fn format_earnings_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!(
            "{} {}{}, {}",
            MONTH_ABBREV[d.month0() as usize],
            d.day(),
            ordinal_suffix(d.day()),
            d.year()
        ),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// Magnitude-banded market cap with a leading currency symbol.
pub fn format_market_cap(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return PLACEHOLDER.to_string(),
    };
    let abs = v.abs();
    let formatted = if abs >= 1e12 {
        format!("{:.1} Trillion", v / 1e12)
    } else if abs >= 1e9 {
        format!("{:.1} Billion", v / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1} Million", v / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1} Thousand", v / 1e3)
    } else {
        format!("{:.1}", v)
    };
    format!("${formatted}")
}

pub fn format_number(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => PLACEHOLDER.to_string(),
    }
}

// ---------- Description splitting -------------------------------------------

/// Split a long-form description into sentences on `". "` boundaries,
/// keeping the period with its sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if c == '.' && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            sentences.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// First four sentences inline, the remainder behind the read-more toggle.
pub fn description_parts(text: &str) -> (String, String) {
    let sentences = split_sentences(text);
    let lead = sentences
        .iter()
        .take(4)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    let rest = sentences
        .iter()
        .skip(4)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    (lead, rest)
}

// ---------- Static configuration data ---------------------------------------

/// Category names in nav order.
pub const CATEGORY_NAMES: [&str; 12] = [
    "All",
    "Technology",
    "Healthcare",
    "Financials",
    "Consumer Discretionary",
    "Consumer Staples",
    "Energy",
    "Industrials",
    "Materials",
    "Utilities",
    "Real Estate",
    "Communication Services",
];

/// Fixed category → ticker table, compiled into the client.
pub fn category_tickers(category: &str) -> Option<&'static [&'static str]> {
    let list: &'static [&'static str] = match category {
        "All" => &[
            "NVDA", "MSFT", "AAPL", "AMZN", "GOOG", "META", "AVGO", "TSM", "BRK-B", "TSLA", "JPM",
            "WMT", "LLY", "V", "ORCL", "TCEHY", "NFLX", "MA", "XOM", "COST",
        ],
        "Technology" => &[
            "NVDA", "MSFT", "AAPL", "AVGO", "TSM", "ORCL", "SAP", "PLTR", "ASML", "CSCO", "IBM",
            "CRM", "AMD", "INTU", "NOW", "UBER", "TXN", "ACN", "QCOM", "ADBE",
        ],
        "Healthcare" => &[
            "LLY", "JNJ", "ABBV", "NVO", "UNH", "NVS", "ABT", "AZN", "MRK", "ISRG", "TMO", "AMGN",
            "BSX", "SYK", "DHR", "PFE", "GILD", "SNY", "VRTX", "MDT",
        ],
        "Financials" => &[
            "BRK-B", "JPM", "V", "MA", "BAC", "WFC", "MS", "AXP", "HSBC", "GS", "BX", "RY", "HDB",
            "SCHW", "BLK", "SPGI", "C", "MUFG", "PGR", "TD",
        ],
        "Consumer Discretionary" => &[
            "AMZN", "TSLA", "HD", "BABA", "TM", "MCD", "BKNG", "PDD", "TJX", "LOW", "MELI", "NKE",
            "SBUX", "DASH", "SE", "RACE", "RCL", "ABNB", "CMG", "ORLY",
        ],
        "Consumer Staples" => &[
            "WMT", "COST", "PG", "KO", "PM", "PEP", "UL", "BUD", "BTI", "MO", "MDLZ", "CL", "MNST",
            "DEO", "TGT", "KR", "KDP", "KMB", "CCEP", "KVUE",
        ],
        "Energy" => &[
            "XOM", "CVX", "SHEL", "TTE", "COP", "ENB", "BP", "PBR", "CVX", "WMB", "EQNR", "EPD",
            "EOG", "CNQ", "KMI", "ET", "LNG", "MPC", "MPLX", "OKE",
        ],
        "Industrials" => &[
            "GE", "RTX", "CAT", "BA", "HON", "UNP", "ETN", "GEV", "DE", "LMT", "RELX", "TT", "WM",
            "CTAS", "TRI", "PH", "UPS", "TDG", "MMM", "GD",
        ],
        "Materials" => &[
            "LIN", "BHP", "RIO", "SHW", "SCCO", "ECL", "NEM", "APD", "FCX", "CRH", "AEM", "CTVA",
            "VALE", "WPM", "B", "VMC", "MLM", "FNV", "NUE", "DD",
        ],
        "Utilities" => &[
            "NEE", "SO", "CEG", "DUK", "NGG", "VST", "AEP", "SRE", "D", "EXC", "PEG", "XEL", "ED",
            "ETR", "WEC", "PCG", "NRG", "AWK", "DTE", "AEE",
        ],
        "Real Estate" => &[
            "AMT", "PLD", "WELL", "EQIX", "SPG", "DLR", "PSA", "O", "CCI", "CBRE", "VICI", "CSGP",
            "EXR", "IRM", "AVB", "VTR", "EQR", "SBAC", "BEKE", "INVH",
        ],
        "Communication Services" => &[
            "GOOG", "META", "NFLX", "TMUS", "DIS", "T", "VZ", "SPOT", "CMCSA", "APP", "NTES",
            "RBLX", "CHTR", "AMX", "TTWO", "EA", "TTD", "CHT", "TKO", "LYV",
        ],
        _ => return None,
    };
    Some(list)
}

/// Explicit logo overrides for tickers whose API-provided logo resolves
/// badly. Takes precedence over the API value.
pub fn custom_logo(ticker: &str) -> Option<&'static str> {
    match ticker {
        "BRK-B" => Some("https://logo.clearbit.com/berkshirehathaway.com?size=512"),
        "TCEHY" => Some("https://logo.clearbit.com/tencent.com?size=512"),
        "GOOG" => Some("https://logo.clearbit.com/google.com?size=512"),
        "TM" => Some("https://logo.clearbit.com/toyota.com?size=512"),
        "MUFG" => Some("https://logo.clearbit.com/mufg.jp?size=512"),
        "RY" => Some("https://logo.clearbit.com/rbc.com?size=512"),
        "B" => Some("https://logo.clearbit.com/barrick.com?size=512"),
        _ => None,
    }
}

/// Override table first, API logo second.
pub fn resolve_logo(ticker: &str, api_logo: Option<&str>) -> Option<String> {
    custom_logo(ticker)
        .map(str::to_string)
        .or_else(|| api_logo.map(str::to_string))
}

// ---------- Search ----------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEntry {
    pub ticker: &'static str,
    pub name: &'static str,
}

/// Preloaded search universe, compiled in. Matched case-insensitively as a
/// substring against ticker and name.
pub const SEARCH_STOCKS: &[SearchEntry] = &[
    SearchEntry { ticker: "NVDA", name: "NVIDIA Corporation" },
    SearchEntry { ticker: "MSFT", name: "Microsoft Corporation" },
    SearchEntry { ticker: "AAPL", name: "Apple Inc." },
    SearchEntry { ticker: "AMZN", name: "Amazon.com, Inc." },
    SearchEntry { ticker: "GOOG", name: "Alphabet Inc." },
    SearchEntry { ticker: "META", name: "Meta Platforms, Inc." },
    SearchEntry { ticker: "AVGO", name: "Broadcom Inc." },
    SearchEntry { ticker: "TSM", name: "Taiwan Semiconductor Manufacturing" },
    SearchEntry { ticker: "BRK-B", name: "Berkshire Hathaway Inc." },
    SearchEntry { ticker: "TSLA", name: "Tesla, Inc." },
    SearchEntry { ticker: "JPM", name: "JPMorgan Chase & Co." },
    SearchEntry { ticker: "WMT", name: "Walmart Inc." },
    SearchEntry { ticker: "LLY", name: "Eli Lilly and Company" },
    SearchEntry { ticker: "V", name: "Visa Inc." },
    SearchEntry { ticker: "ORCL", name: "Oracle Corporation" },
    SearchEntry { ticker: "TCEHY", name: "Tencent Holdings Limited" },
    SearchEntry { ticker: "NFLX", name: "Netflix, Inc." },
    SearchEntry { ticker: "MA", name: "Mastercard Incorporated" },
    SearchEntry { ticker: "XOM", name: "Exxon Mobil Corporation" },
    SearchEntry { ticker: "COST", name: "Costco Wholesale Corporation" },
    SearchEntry { ticker: "SAP", name: "SAP SE" },
    SearchEntry { ticker: "PLTR", name: "Palantir Technologies Inc." },
    SearchEntry { ticker: "ASML", name: "ASML Holding N.V." },
    SearchEntry { ticker: "CSCO", name: "Cisco Systems, Inc." },
    SearchEntry { ticker: "IBM", name: "International Business Machines" },
    SearchEntry { ticker: "CRM", name: "Salesforce, Inc." },
    SearchEntry { ticker: "AMD", name: "Advanced Micro Devices, Inc." },
    SearchEntry { ticker: "INTU", name: "Intuit Inc." },
    SearchEntry { ticker: "NOW", name: "ServiceNow, Inc." },
    SearchEntry { ticker: "UBER", name: "Uber Technologies, Inc." },
    SearchEntry { ticker: "TXN", name: "Texas Instruments Incorporated" },
    SearchEntry { ticker: "ACN", name: "Accenture plc" },
    SearchEntry { ticker: "QCOM", name: "QUALCOMM Incorporated" },
    SearchEntry { ticker: "ADBE", name: "Adobe Inc." },
    SearchEntry { ticker: "JNJ", name: "Johnson & Johnson" },
    SearchEntry { ticker: "ABBV", name: "AbbVie Inc." },
    SearchEntry { ticker: "NVO", name: "Novo Nordisk A/S" },
    SearchEntry { ticker: "UNH", name: "UnitedHealth Group Incorporated" },
    SearchEntry { ticker: "MRK", name: "Merck & Co., Inc." },
    SearchEntry { ticker: "ISRG", name: "Intuitive Surgical, Inc." },
    SearchEntry { ticker: "PFE", name: "Pfizer Inc." },
    SearchEntry { ticker: "BAC", name: "Bank of America Corporation" },
    SearchEntry { ticker: "WFC", name: "Wells Fargo & Company" },
    SearchEntry { ticker: "MS", name: "Morgan Stanley" },
    SearchEntry { ticker: "AXP", name: "American Express Company" },
    SearchEntry { ticker: "GS", name: "The Goldman Sachs Group, Inc." },
    SearchEntry { ticker: "BLK", name: "BlackRock, Inc." },
    SearchEntry { ticker: "HD", name: "The Home Depot, Inc." },
    SearchEntry { ticker: "BABA", name: "Alibaba Group Holding Limited" },
    SearchEntry { ticker: "TM", name: "Toyota Motor Corporation" },
    SearchEntry { ticker: "MCD", name: "McDonald's Corporation" },
    SearchEntry { ticker: "BKNG", name: "Booking Holdings Inc." },
    SearchEntry { ticker: "NKE", name: "NIKE, Inc." },
    SearchEntry { ticker: "SBUX", name: "Starbucks Corporation" },
    SearchEntry { ticker: "ABNB", name: "Airbnb, Inc." },
    SearchEntry { ticker: "PG", name: "The Procter & Gamble Company" },
    SearchEntry { ticker: "KO", name: "The Coca-Cola Company" },
    SearchEntry { ticker: "PEP", name: "PepsiCo, Inc." },
    SearchEntry { ticker: "TGT", name: "Target Corporation" },
    SearchEntry { ticker: "CVX", name: "Chevron Corporation" },
    SearchEntry { ticker: "SHEL", name: "Shell plc" },
    SearchEntry { ticker: "COP", name: "ConocoPhillips" },
    SearchEntry { ticker: "BP", name: "BP p.l.c." },
    SearchEntry { ticker: "GE", name: "GE Aerospace" },
    SearchEntry { ticker: "RTX", name: "RTX Corporation" },
    SearchEntry { ticker: "CAT", name: "Caterpillar Inc." },
    SearchEntry { ticker: "BA", name: "The Boeing Company" },
    SearchEntry { ticker: "HON", name: "Honeywell International Inc." },
    SearchEntry { ticker: "LMT", name: "Lockheed Martin Corporation" },
    SearchEntry { ticker: "UPS", name: "United Parcel Service, Inc." },
    SearchEntry { ticker: "LIN", name: "Linde plc" },
    SearchEntry { ticker: "BHP", name: "BHP Group Limited" },
    SearchEntry { ticker: "RIO", name: "Rio Tinto Group" },
    SearchEntry { ticker: "NEM", name: "Newmont Corporation" },
    SearchEntry { ticker: "FCX", name: "Freeport-McMoRan Inc." },
    SearchEntry { ticker: "NEE", name: "NextEra Energy, Inc." },
    SearchEntry { ticker: "SO", name: "The Southern Company" },
    SearchEntry { ticker: "DUK", name: "Duke Energy Corporation" },
    SearchEntry { ticker: "AMT", name: "American Tower Corporation" },
    SearchEntry { ticker: "PLD", name: "Prologis, Inc." },
    SearchEntry { ticker: "SPG", name: "Simon Property Group, Inc." },
    SearchEntry { ticker: "O", name: "Realty Income Corporation" },
    SearchEntry { ticker: "TMUS", name: "T-Mobile US, Inc." },
    SearchEntry { ticker: "DIS", name: "The Walt Disney Company" },
    SearchEntry { ticker: "T", name: "AT&T Inc." },
    SearchEntry { ticker: "VZ", name: "Verizon Communications Inc." },
    SearchEntry { ticker: "SPOT", name: "Spotify Technology S.A." },
    SearchEntry { ticker: "CMCSA", name: "Comcast Corporation" },
    SearchEntry { ticker: "RBLX", name: "Roblox Corporation" },
    SearchEntry { ticker: "EA", name: "Electronic Arts Inc." },
];

/// Case-insensitive substring filter over the search universe. Empty and
/// whitespace-only queries match nothing.
pub fn search_stocks(query: &str) -> Vec<SearchEntry> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    SEARCH_STOCKS
        .iter()
        .filter(|s| s.ticker.to_lowercase().contains(&q) || s.name.to_lowercase().contains(&q))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn ordinal_suffixes_follow_english_rules() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn earnings_date_formatting() {
        assert_eq!(format_earnings_date(None), "TBD");
        assert_eq!(format_earnings_date(Some(d(2026, 8, 21))), "Aug. 21st, 2026");
        assert_eq!(format_earnings_date(Some(d(2026, 5, 3))), "May 3rd, 2026");
        assert_eq!(format_earnings_date(Some(d(2025, 9, 12))), "Sept. 12th, 2025");
    }

    #[test]
    fn earnings_date_parse_is_lenient() {
        assert_eq!(parse_earnings_date("2026-08-21"), Some(d(2026, 8, 21)));
        assert_eq!(parse_earnings_date("8/21/2026"), Some(d(2026, 8, 21)));
        assert_eq!(parse_earnings_date("TBD"), None);
        assert_eq!(parse_earnings_date(""), None);
        assert_eq!(parse_earnings_date("not a date"), None);
    }

    #[test]
    fn market_cap_bands() {
        assert_eq!(format_market_cap(None), "N/A");
        assert_eq!(format_market_cap(Some(f64::NAN)), "N/A");
        assert_eq!(format_market_cap(Some(999.9)), "$999.9");
        assert_eq!(format_market_cap(Some(1_000.0)), "$1.0 Thousand");
        assert_eq!(format_market_cap(Some(2_500_000.0)), "$2.5 Million");
        assert_eq!(format_market_cap(Some(3.2e9)), "$3.2 Billion");
        assert_eq!(format_market_cap(Some(2.5e12)), "$2.5 Trillion");
        assert_eq!(format_market_cap(Some(-3.0e9)), "$-3.0 Billion");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(None, 2), "N/A");
        assert_eq!(format_number(Some(f64::NAN), 2), "N/A");
        assert_eq!(format_number(Some(1.234), 2), "1.23");
        assert_eq!(format_number(Some(2.0), 1), "2.0");
    }

    #[test]
    fn decode_accepts_tbd_strings() {
        let resp = decode_response(
            r#"{
                "company_name": "Nike, Inc.",
                "earnings_date": "TBD",
                "expected_eps": "TBD",
                "pe_ratio": 21.3,
                "days_until": null
            }"#,
        )
        .unwrap();
        assert_eq!(resp.company_name.as_deref(), Some("Nike, Inc."));
        assert_eq!(resp.earnings_date.as_deref(), Some("TBD"));
        assert_eq!(resp.expected_eps, None);
        assert_eq!(resp.pe_ratio, Some(21.3));
        assert_eq!(resp.days_until, None);
    }

    #[test]
    fn decode_accepts_numeric_strings_and_numbers() {
        let resp = decode_response(
            r#"{"expected_eps": "1.25", "days_until": 4, "raw_beat_pct": 61.4}"#,
        )
        .unwrap();
        assert_eq!(resp.expected_eps, Some(1.25));
        assert_eq!(resp.days_until, Some(4));
        assert_eq!(resp.raw_beat_pct, Some(61.4));
    }

    #[test]
    fn decode_rejects_non_json() {
        assert!(decode_response("<html>oops</html>").is_err());
    }

    #[test]
    fn summary_prefers_days_until_for_date() {
        let resp = PredictResponse {
            days_until: Some(3),
            earnings_date: Some("2099-01-01".into()),
            ..Default::default()
        };
        let today = d(2026, 8, 6);
        let s = StockSummary::from_response("NVDA", &resp, today);
        assert_eq!(s.date, Some(d(2026, 8, 9)));
        assert_eq!(s.days_until, Some(3));
    }

    #[test]
    fn summary_falls_back_to_earnings_date() {
        let resp = PredictResponse {
            days_until: None,
            earnings_date: Some("2026-08-16".into()),
            ..Default::default()
        };
        let today = d(2026, 8, 6);
        let s = StockSummary::from_response("MSFT", &resp, today);
        assert_eq!(s.date, Some(d(2026, 8, 16)));
        // Derived from the resolved date when the API gave none.
        assert_eq!(s.days_until, Some(10));
    }

    #[test]
    fn summary_with_no_resolvable_date() {
        let resp = PredictResponse {
            earnings_date: Some("TBD".into()),
            ..Default::default()
        };
        let s = StockSummary::from_response("XOM", &resp, d(2026, 8, 6));
        assert_eq!(s.date, None);
        assert_eq!(s.days_until, None);
    }

    #[test]
    fn stub_keeps_ticker_as_name() {
        let s = StockSummary::stub("BRK-B");
        assert_eq!(s.ticker, "BRK-B");
        assert_eq!(s.name, "BRK-B");
        assert_eq!(s.date, None);
        assert_eq!(s.raw_beat_pct, None);
        assert!(matches!(s.visual(), CardVisual::Countdown(None)));
    }

    #[test]
    fn visual_mode_selected_by_beat_pct() {
        assert!(matches!(
            CardVisual::from_parts(Some(55.0), Some(10)),
            CardVisual::Prediction(p) if p == 55.0
        ));
        assert!(matches!(
            CardVisual::from_parts(None, Some(10)),
            CardVisual::Countdown(Some(10))
        ));
        assert!(matches!(
            CardVisual::from_parts(Some(f64::NAN), None),
            CardVisual::Countdown(None)
        ));
    }

    #[test]
    fn gauge_color_tiers() {
        assert_eq!(GaugeColor::for_pct(39.9), GaugeColor::Red);
        assert_eq!(GaugeColor::for_pct(40.0), GaugeColor::Yellow);
        assert_eq!(GaugeColor::for_pct(59.9), GaugeColor::Yellow);
        assert_eq!(GaugeColor::for_pct(60.0), GaugeColor::Green);
    }

    #[test]
    fn countdown_subtracts_forecast_lead() {
        assert_eq!(countdown_display(Some(17)), ("10".to_string(), "days"));
        assert_eq!(countdown_display(Some(8)), ("1".to_string(), "day"));
        assert_eq!(countdown_display(Some(7)), ("0".to_string(), "days"));
        assert_eq!(countdown_display(None), ("–".to_string(), "days"));
    }

    #[test]
    fn proximity_sort_orders_by_distance_with_dateless_last() {
        let today = d(2026, 8, 6);
        let mk = |ticker: &str, date: Option<NaiveDate>| StockSummary {
            date,
            ..StockSummary::stub(ticker)
        };
        let mut items = vec![
            mk("FAR", Some(d(2026, 9, 10))),
            mk("NONE", None),
            mk("NEAR", Some(d(2026, 8, 7))),
            mk("MID", Some(d(2026, 8, 20))),
        ];
        sort_by_proximity(&mut items, today);
        let order: Vec<&str> = items.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(order, vec!["NEAR", "MID", "FAR", "NONE"]);
    }

    #[test]
    fn proximity_sort_is_stable_on_ties() {
        let today = d(2026, 8, 6);
        let mk = |ticker: &str| StockSummary {
            date: Some(d(2026, 8, 10)),
            ..StockSummary::stub(ticker)
        };
        let mut items = vec![mk("A"), mk("B"), mk("C")];
        sort_by_proximity(&mut items, today);
        let order: Vec<&str> = items.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn past_dates_sort_by_absolute_distance() {
        let today = d(2026, 8, 6);
        let mk = |ticker: &str, date: NaiveDate| StockSummary {
            date: Some(date),
            ..StockSummary::stub(ticker)
        };
        let mut items = vec![mk("PAST", d(2026, 8, 1)), mk("SOON", d(2026, 8, 8))];
        sort_by_proximity(&mut items, today);
        let order: Vec<&str> = items.iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(order, vec!["SOON", "PAST"]);
    }

    #[test]
    fn sentences_keep_their_periods() {
        let text = "Alpha one. Beta two.  Gamma three. Delta four. Epsilon five. Zeta six.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 6);
        assert_eq!(sentences[0], "Alpha one.");
        assert_eq!(sentences[2], "Gamma three.");
        let (lead, rest) = description_parts(text);
        assert_eq!(lead, "Alpha one. Beta two. Gamma three. Delta four.");
        assert_eq!(rest, "Epsilon five. Zeta six.");
    }

    #[test]
    fn short_descriptions_have_empty_rest() {
        let (lead, rest) = description_parts("Just one sentence.");
        assert_eq!(lead, "Just one sentence.");
        assert!(rest.is_empty());
    }

    #[test]
    fn search_matches_ticker_and_name_case_insensitively() {
        let by_ticker = search_stocks("nvd");
        assert!(by_ticker.iter().any(|s| s.ticker == "NVDA"));
        let by_name = search_stocks("apple");
        assert!(by_name.iter().any(|s| s.ticker == "AAPL"));
        assert!(search_stocks("").is_empty());
        assert!(search_stocks("   ").is_empty());
        assert!(search_stocks("zzzzqqqq").is_empty());
    }

    #[test]
    fn category_table_shape() {
        for name in CATEGORY_NAMES {
            let tickers = category_tickers(name).expect("known category");
            assert!(!tickers.is_empty());
            assert!(tickers.len() <= 20);
        }
        assert!(category_tickers("Crypto").is_none());
    }

    #[test]
    fn logo_overrides_win() {
        let resolved = resolve_logo("BRK-B", Some("https://api.example/logo.png"));
        assert_eq!(
            resolved.as_deref(),
            Some("https://logo.clearbit.com/berkshirehathaway.com?size=512")
        );
        let api = resolve_logo("AAPL", Some("https://api.example/aapl.png"));
        assert_eq!(api.as_deref(), Some("https://api.example/aapl.png"));
        assert_eq!(resolve_logo("AAPL", None), None);
    }
}

pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #05090f;
  --bg-elev-1: #0b111a;
  --bg-elev-2: #111a26;
  --panel: #0d1520;
  --border: rgba(255, 255, 255, 0.08);
  --border-strong: rgba(255, 255, 255, 0.16);
  --text: #e6edf7;
  --text-dim: #b7c6d9;
  --text-muted: #7f8ba0;
  --accent: #5cb0ff;
  --accent-strong: #7ac6ff;
  --gauge-red: #f0635c;
  --gauge-yellow: #f7c843;
  --gauge-green: #3fb68b;
  --surface-hover: rgba(255, 255, 255, 0.05);
  --surface-active: rgba(255, 255, 255, 0.1);
  --shadow-soft: 0 14px 42px rgba(0, 0, 0, 0.38);
  --radius: 10px;
  --radius-pill: 999px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --font-body: "Inter", "SF Pro Text", system-ui, -apple-system, sans-serif;
  --font-size-xs: 11px;
  --font-size-sm: 13px;
  --font-size-md: 15px;
  --font-size-lg: 17px;
  --transition: 140ms ease-out;
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: var(--font-size-sm);
  line-height: 1.4;
  min-height: 100%;
}

a { color: var(--accent); text-decoration: none; }
a:hover { color: var(--accent-strong); }

button { font-family: var(--font-body); }

input {
  background: var(--bg-elev-1);
  border: 1px solid var(--border);
  color: var(--text);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius);
  font-size: var(--font-size-sm);
  outline: none;
  transition: border-color var(--transition), box-shadow var(--transition);
}

input:focus {
  border-color: var(--accent);
  box-shadow: 0 0 0 1px rgba(77, 163, 255, 0.35);
}

.shell {
  max-width: 1180px;
  margin: 0 auto;
  padding: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  min-height: 100vh;
}

/* ---------- Header + search ---------- */

.header-top {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.header-top h1 {
  margin: 0;
  font-size: 22px;
  letter-spacing: 0.02em;
  cursor: pointer;
  user-select: none;
}

.search-container {
  position: relative;
  width: 280px;
}

.search-box input { width: 100%; }

.search-results {
  display: none;
  position: absolute;
  top: calc(100% + 4px);
  left: 0;
  right: 0;
  max-height: 320px;
  overflow-y: auto;
  background: var(--panel);
  border: 1px solid var(--border-strong);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  z-index: 30;
}

.search-item {
  display: flex;
  align-items: baseline;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-3);
  cursor: pointer;
}

.search-item:hover { background: var(--surface-hover); }

.search-item .item-ticker { font-size: var(--font-size-sm); }
.search-item .item-name {
  color: var(--text-muted);
  font-size: var(--font-size-xs);
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

/* ---------- Category strip ---------- */

.categories-wrapper { position: relative; }

.categories-wrapper::before,
.categories-wrapper::after {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  width: 36px;
  pointer-events: none;
  opacity: 1;
  transition: opacity var(--transition);
  z-index: 10;
}

.categories-wrapper::before {
  left: 0;
  background: linear-gradient(to right, var(--bg), transparent);
}

.categories-wrapper::after {
  right: 0;
  background: linear-gradient(to left, var(--bg), transparent);
}

.categories-wrapper.at-start::before { opacity: 0; }
.categories-wrapper.at-end::after { opacity: 0; }

.categories-nav {
  display: flex;
  gap: var(--space-2);
  overflow-x: auto;
  scrollbar-width: none;
  padding: var(--space-1) 0;
}

.categories-nav::-webkit-scrollbar { display: none; }

.categories-nav button {
  flex: 0 0 auto;
  background: var(--bg-elev-1);
  color: var(--text-dim);
  border: 1px solid var(--border);
  border-radius: var(--radius-pill);
  padding: var(--space-2) var(--space-4);
  font-size: var(--font-size-sm);
  cursor: pointer;
  transition: background var(--transition), color var(--transition),
    border-color var(--transition);
}

.categories-nav button:hover { background: var(--surface-hover); color: var(--text); }

.categories-nav button.selected {
  background: var(--accent);
  border-color: var(--accent);
  color: #06121f;
}

/* ---------- Card grid ---------- */

.cards-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: var(--space-4);
}

.card {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  cursor: pointer;
  transition: border-color var(--transition), transform var(--transition);
}

.card:hover {
  border-color: var(--border-strong);
  transform: translateY(-2px);
}

.card-content {
  padding: var(--space-4);
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.header-row {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.header-row .logo img {
  width: 40px;
  height: 40px;
  border-radius: 8px;
  object-fit: contain;
  background: #fff;
}

.header-row .company {
  margin: 0;
  font-size: var(--font-size-md);
  line-height: 1.2;
}

.ticker {
  color: var(--text-muted);
  font-size: var(--font-size-xs);
  letter-spacing: 0.08em;
}

.information {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-3);
}

.details {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.info .label { color: var(--text-muted); margin-right: var(--space-1); }
.info .value { color: var(--text-dim); }

/* ---------- Gauge + countdown visuals ---------- */

.visual { flex: 0 0 auto; text-align: center; }

.gauge { width: 110px; height: 55px; overflow: visible; }

.gauge path.bg {
  stroke: var(--bg-elev-2);
  stroke-width: 8;
  stroke-linecap: round;
}

.gauge path.fg {
  stroke: var(--text-muted);
  stroke-width: 8;
  stroke-linecap: round;
  transition: stroke-dashoffset 400ms ease-out, stroke var(--transition);
}

.gauge path.fg.red { stroke: var(--gauge-red); }
.gauge path.fg.yellow { stroke: var(--gauge-yellow); }
.gauge path.fg.green { stroke: var(--gauge-green); }

.percent {
  margin-top: -18px;
  font-size: var(--font-size-md);
  font-weight: 600;
}

.countdown .count {
  font-size: 30px;
  font-weight: 700;
  line-height: 1;
}

.countdown .days { font-size: var(--font-size-sm); color: var(--text-dim); }
.countdown .until { font-size: var(--font-size-xs); color: var(--text-muted); }

.detail-visual .gauge { width: 160px; height: 80px; }
.detail-visual .count { font-size: 44px; }

/* ---------- Detail view ---------- */

.back-btn {
  align-self: flex-start;
  background: none;
  border: none;
  color: var(--accent);
  font-size: var(--font-size-sm);
  cursor: pointer;
  padding: 0;
  margin-bottom: var(--space-3);
}

.back-btn:hover { color: var(--accent-strong); }

.stock-detail {
  display: flex;
  flex-direction: column;
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: var(--space-5);
}

.detail-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  flex-wrap: wrap;
}

.company-info {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.company-info .logo {
  width: 64px;
  height: 64px;
  border-radius: 10px;
  object-fit: contain;
  background: #fff;
}

.company-info h1 {
  margin: 0 0 var(--space-1);
  font-size: 24px;
}

.company-info h1 .ticker { margin-left: var(--space-2); }

.tags { display: flex; gap: var(--space-2); }

.tag {
  background: var(--bg-elev-2);
  border-radius: var(--radius-pill);
  padding: 2px var(--space-3);
  font-size: var(--font-size-xs);
  color: var(--text-dim);
}

.metrics-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: var(--space-3);
  margin: var(--space-5) 0;
  padding: var(--space-4);
  background: var(--bg-elev-1);
  border-radius: var(--radius);
}

.description { color: var(--text-dim); }
.description p { margin: 0 0 var(--space-3); }

.link-button {
  display: inline-block;
  background: var(--bg-elev-2);
  border-radius: var(--radius-pill);
  padding: var(--space-2) var(--space-4);
}

.no-website { color: var(--text-muted); }

.toggle-btn {
  background: none;
  border: none;
  color: var(--accent);
  cursor: pointer;
  padding: 0;
  font-size: var(--font-size-sm);
}

.toggle-btn:hover { color: var(--accent-strong); }

/* ---------- Footer ---------- */

.footer {
  margin-top: auto;
  padding: var(--space-4) 0;
  text-align: center;
  color: var(--text-muted);
  font-size: var(--font-size-xs);
}
"#;

pub fn render_index(reading_count: usize, insights_enabled: bool) -> String {
    INDEX_HTML
        .replace("{{COUNT}}", &reading_count.to_string())
        .replace("{{INSIGHTS_ENABLED}}", if insights_enabled { "true" } else { "false" })
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>GlucoTrack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3fb;
      --bg-2: #cddcf5;
      --ink: #1f2a37;
      --muted: #6b7585;
      --accent: #2563eb;
      --accent-2: #1e293b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(30, 41, 59, 0.16);
      --hypo: #dc2626;
      --normal: #059669;
      --pre: #d97706;
      --diab: #be123c;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f5f8ff 60%, #ffffff 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .top {
      display: grid;
      grid-template-columns: minmax(240px, 1fr) 2fr;
      gap: 20px;
    }

    @media (max-width: 760px) {
      .top {
        grid-template-columns: 1fr;
      }
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(30, 41, 59, 0.08);
    }

    label {
      display: block;
      font-size: 0.85rem;
      color: var(--muted);
      margin-bottom: 6px;
    }

    input[type="number"] {
      width: 100%;
      padding: 10px 14px;
      border-radius: 12px;
      border: 1px solid #cbd5e1;
      font: inherit;
    }

    .contexts {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 6px;
      margin: 14px 0;
    }

    .contexts label {
      margin: 0;
      text-align: center;
      padding: 8px 4px;
      border: 1px solid #cbd5e1;
      border-radius: 10px;
      cursor: pointer;
      font-size: 0.75rem;
      text-transform: uppercase;
    }

    .contexts input {
      display: none;
    }

    .contexts input:checked + span {
      color: var(--accent);
      font-weight: 600;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .btn-primary {
      width: 100%;
      background: var(--accent);
      color: white;
    }

    .btn-dark {
      background: var(--accent-2);
      color: white;
    }

    .btn-ghost {
      background: transparent;
      color: var(--muted);
      padding: 6px 10px;
    }

    .latest .value {
      font-size: 2.2rem;
      font-weight: 600;
    }

    .badge {
      display: inline-block;
      padding: 4px 12px;
      border-radius: 999px;
      font-size: 0.75rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      border: 1px solid currentColor;
    }

    .HYPOGLYCEMIA { color: var(--hypo); }
    .NORMAL { color: var(--normal); }
    .PREDIABETES { color: var(--pre); }
    .DIABETES { color: var(--diab); }

    .insight {
      position: relative;
      background: #eef2ff;
      border-color: #c7d2fe;
      margin-top: 16px;
    }

    .insight[hidden] {
      display: none;
    }

    .insight .close {
      position: absolute;
      top: 10px;
      right: 10px;
    }

    .insight p {
      margin: 0 0 8px;
    }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .metric .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .metric .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    #chart {
      width: 100%;
      height: 260px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: var(--accent);
      stroke: white;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(30, 41, 59, 0.08);
    }

    .chart-ref-high {
      stroke: var(--pre);
      stroke-dasharray: 5 5;
    }

    .chart-ref-low {
      stroke: var(--hypo);
      stroke-dasharray: 5 5;
    }

    .chart-label {
      fill: #94a3b8;
      font-size: 11px;
    }

    .history {
      list-style: none;
      margin: 0;
      padding: 0;
      max-height: 400px;
      overflow-y: auto;
    }

    .history li {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 12px 4px;
      border-bottom: 1px solid #f1f5f9;
    }

    .history .when {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .history-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--hypo);
    }

    .status[data-type="ok"] {
      color: var(--normal);
    }

    footer {
      font-size: 0.75rem;
      color: var(--muted);
      text-align: center;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>GlucoTrack</h1>
        <p class="subtitle">Smart glucose management</p>
      </div>
      <button id="insight-btn" class="btn-dark" type="button">AI Insights</button>
    </header>

    <section class="top">
      <form id="add-form" class="card" method="post" action="/readings/add">
        <h2>Add new reading</h2>
        <label for="value">Glucose value (mg/dL)</label>
        <input id="value" name="value" type="number" step="any" min="1" max="1000" placeholder="e.g., 95" required />
        <div class="contexts">
          <label><input type="radio" name="context" value="FASTING" checked /><span>Fasting</span></label>
          <label><input type="radio" name="context" value="AFTER_MEAL" /><span>After meal</span></label>
          <label><input type="radio" name="context" value="RANDOM" /><span>Random</span></label>
        </div>
        <button class="btn-primary" type="submit">Track reading</button>
        <div class="status" id="status"></div>
      </form>

      <div>
        <div class="card latest" id="latest">
          <h2>Welcome to GlucoTrack</h2>
          <p class="subtitle">Enter your first reading to start tracking.</p>
        </div>
        <div class="card insight" id="insight" hidden>
          <button class="btn-ghost close" id="insight-close" type="button" aria-label="Dismiss">&times;</button>
          <h2>Health insights</h2>
          <div id="insight-text"></div>
        </div>
      </div>
    </section>

    <section class="metrics">
      <div class="card metric"><div class="label">Readings</div><div class="value" id="m-count">{{COUNT}}</div></div>
      <div class="card metric"><div class="label">Average</div><div class="value" id="m-average">--</div></div>
      <div class="card metric"><div class="label">In normal range</div><div class="value" id="m-normal">--</div></div>
    </section>

    <section class="card">
      <h2>Glucose trend</h2>
      <svg id="chart" viewBox="0 0 600 260" role="img" aria-label="Glucose trend"></svg>
    </section>

    <section class="card">
      <div class="history-header">
        <h2>Reading history</h2>
        <button class="btn-ghost" id="clear-btn" type="button">Clear all</button>
      </div>
      <ul class="history" id="history"></ul>
    </section>

    <footer>
      <strong>Disclaimer:</strong> This application is for informational purposes only and does not
      constitute medical advice. Always seek the guidance of your physician or other qualified health
      provider with any questions you may have regarding a medical condition.
    </footer>
  </main>

  <script>
    const insightsEnabled = {{INSIGHTS_ENABLED}};
    const statusEl = document.getElementById('status');
    const latestEl = document.getElementById('latest');
    const insightEl = document.getElementById('insight');
    const insightTextEl = document.getElementById('insight-text');
    const insightBtn = document.getElementById('insight-btn');
    const chartEl = document.getElementById('chart');
    const historyEl = document.getElementById('history');
    const form = document.getElementById('add-form');
    const valueInput = document.getElementById('value');

    let summary = null;
    let insightPending = false;
    let categoryInfo = {};

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const el = (tag, className, text) => {
      const node = document.createElement(tag);
      if (className) node.className = className;
      if (text !== undefined) node.textContent = text;
      return node;
    };

    const contextLabel = (context) => context.replace('_', ' ').toLowerCase();

    const refreshInsightButton = () => {
      const empty = !summary || summary.count === 0;
      insightBtn.disabled = !insightsEnabled || empty || insightPending;
      insightBtn.textContent = insightPending ? 'Thinking...' : 'AI Insights';
      insightBtn.title = insightsEnabled ? '' : 'Set GEMINI_API_KEY to enable insights';
    };

    const renderLatest = () => {
      latestEl.replaceChildren();
      if (!summary.latest) {
        latestEl.append(el('h2', '', 'Welcome to GlucoTrack'));
        latestEl.append(el('p', 'subtitle', 'Enter your first reading to start tracking.'));
        return;
      }
      const { reading, info } = summary.latest;
      latestEl.append(el('div', 'label subtitle', 'Last reading'));
      const value = el('div', `value ${reading.category}`, `${reading.value} mg/dL`);
      latestEl.append(value);
      latestEl.append(el('span', `badge ${reading.category}`, info.label));
      latestEl.append(el('p', 'subtitle', info.description));
    };

    const renderMetrics = () => {
      document.getElementById('m-count').textContent = summary.count;
      document.getElementById('m-average').textContent =
        summary.average === null ? '--' : `${Math.round(summary.average)} mg/dL`;
      const normal = summary.category_counts.find((c) => c.category === 'NORMAL');
      document.getElementById('m-normal').textContent =
        summary.count === 0 ? '--' : `${Math.round((normal.count / summary.count) * 100)}%`;
    };

    const renderChart = () => {
      const points = summary.chart;
      if (!points.length) {
        chartEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data to display yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;

      const refs = summary.reference_lines.map((line) => line.value);
      const values = points.map((point) => point.value);
      const min = 40;
      const max = Math.max(...values, ...refs) + 20;
      const range = max - min;
      const xStep = points.length > 1 ? (width - paddingX * 2) / (points.length - 1) : 0;
      const scaleY = (height - top - paddingY) / range;
      const x = (index) => paddingX + index * xStep;
      const y = (value) => height - paddingY - (Math.max(value, min) - min) * scaleY;

      const path = points
        .map((point, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(point.value).toFixed(2)}`)
        .join(' ');

      let grid = '';
      const ticks = 4;
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + (range * i) / ticks;
        const yPos = y(value);
        grid += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingX - 10}" y="${yPos + 4}" text-anchor="end">${Math.round(value)}</text>`;
      }

      const refLines = summary.reference_lines
        .map((line) => {
          const cls = line.value >= 100 ? 'chart-ref-high' : 'chart-ref-low';
          const yPos = y(line.value);
          return `<line class="${cls}" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />` +
            `<text class="chart-label" x="${width - paddingX + 4}" y="${yPos + 4}">${line.label}</text>`;
        })
        .join('');

      const circles = points
        .map((point, index) => `<circle class="chart-point" cx="${x(index)}" cy="${y(point.value)}" r="5"><title>${point.value} mg/dL</title></circle>`)
        .join('');

      const xLabels = points
        .map((point, index) => {
          const time = new Date(point.timestamp).toLocaleTimeString([], { hour: '2-digit', minute: '2-digit' });
          return `<text class="chart-label" x="${x(index)}" y="${height - paddingY + 18}" text-anchor="middle">${time}</text>`;
        })
        .join('');

      chartEl.innerHTML = `${grid}${refLines}<path class="chart-line" d="${path}" />${circles}${xLabels}`;
    };

    const renderHistory = () => {
      historyEl.replaceChildren();
      if (!summary.history.length) {
        historyEl.append(el('li', 'subtitle', 'No history recorded yet'));
        return;
      }
      for (const reading of summary.history) {
        const item = el('li');
        const left = el('div');
        left.append(el('strong', reading.category, `${reading.value} `));
        left.append(el('span', `badge ${reading.category}`, categoryInfo[reading.category] || reading.category));
        left.append(el('span', 'when', ` ${contextLabel(reading.context)} · ${new Date(reading.timestamp).toLocaleString()}`));
        const remove = el('button', 'btn-ghost', 'Delete');
        remove.type = 'button';
        remove.addEventListener('click', () => deleteReading(reading.id).catch((err) => setStatus(err.message, 'error')));
        item.append(left, remove);
        historyEl.append(item);
      }
    };

    const render = () => {
      renderLatest();
      renderMetrics();
      renderChart();
      renderHistory();
      refreshInsightButton();
    };

    const loadCategories = async () => {
      const res = await fetch('/api/categories');
      if (!res.ok) {
        throw new Error('Unable to load categories');
      }
      const catalog = await res.json();
      categoryInfo = Object.fromEntries(catalog.categories.map((c) => [c.category, c.label]));
    };

    const loadSummary = async () => {
      const res = await fetch('/api/readings');
      if (!res.ok) {
        throw new Error('Unable to load readings');
      }
      summary = await res.json();
      render();
    };

    const addReading = async (value, context) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/readings', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ value, context })
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      valueInput.value = '';
      await loadSummary();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const deleteReading = async (id) => {
      const res = await fetch(`/api/readings/${encodeURIComponent(id)}`, { method: 'DELETE' });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      await loadSummary();
    };

    const clearAll = async () => {
      if (!window.confirm('Delete all readings? This cannot be undone.')) {
        return;
      }
      const res = await fetch('/api/readings', { method: 'DELETE' });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      await loadSummary();
    };

    const showInsight = (text) => {
      insightTextEl.replaceChildren(...text.split('\n').map((line) => el('p', '', line)));
      insightEl.hidden = false;
    };

    const applyInsightStatus = (status) => {
      insightPending = status.state === 'pending';
      if (status.state === 'ready') {
        showInsight(status.text);
      } else if (status.state === 'failed') {
        showInsight(`Unable to generate insights at this time. Please consult your physician.\n(${status.text})`);
      }
      refreshInsightButton();
    };

    const pollInsight = async () => {
      const res = await fetch('/api/insight');
      const status = await res.json();
      applyInsightStatus(status);
      if (status.state === 'pending') {
        setTimeout(() => pollInsight().catch((err) => setStatus(err.message, 'error')), 800);
      }
    };

    const requestInsight = async () => {
      if (insightPending || !summary || summary.count === 0) {
        return;
      }
      insightPending = true;
      refreshInsightButton();
      const res = await fetch('/api/insight', { method: 'POST' });
      if (!res.ok) {
        insightPending = res.status === 409;
        refreshInsightButton();
        throw new Error(await res.text());
      }
      await pollInsight();
    };

    const dismissInsight = async () => {
      insightEl.hidden = true;
      await fetch('/api/insight', { method: 'DELETE' });
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const value = Number.parseFloat(valueInput.value);
      if (Number.isNaN(value) || value <= 0) {
        setStatus('Enter a positive number', 'error');
        return;
      }
      const context = new FormData(form).get('context');
      addReading(value, context).catch((err) => setStatus(err.message, 'error'));
    });

    insightBtn.addEventListener('click', () => requestInsight().catch((err) => setStatus(err.message, 'error')));
    document.getElementById('insight-close').addEventListener('click', () => dismissInsight().catch(() => {}));
    document.getElementById('clear-btn').addEventListener('click', () => clearAll().catch((err) => setStatus(err.message, 'error')));

    Promise.all([loadCategories(), loadSummary()])
      .then(() => pollInsight())
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;

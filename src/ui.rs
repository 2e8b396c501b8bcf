pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Daily Activity Journal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f8;
      --bg-2: #cfe3ef;
      --ink: #24313a;
      --accent: #2f7d6d;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f0e9 60%, #f2f6f3 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .screen {
      display: none;
      width: min(860px, 100%);
    }

    .screen.active {
      display: block;
    }

    .card {
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5c6a72;
      font-size: 1rem;
    }

    .topbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7b858c;
      display: block;
      margin-bottom: 6px;
    }

    input, textarea {
      width: 100%;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 14px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      color: var(--ink);
      background: white;
    }

    input:focus, textarea:focus {
      outline: 2px solid var(--accent);
      outline-offset: 1px;
    }

    textarea {
      min-height: 72px;
      resize: vertical;
    }

    .field-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 125, 109, 0.3);
    }

    .btn-primary.saved {
      background: var(--accent-2);
    }

    .btn-ghost {
      background: rgba(47, 72, 88, 0.08);
      color: var(--accent-2);
      box-shadow: none;
    }

    .error {
      color: var(--danger);
      font-size: 0.95rem;
      min-height: 1.2em;
      opacity: 0;
      transition: opacity 200ms ease;
    }

    .error.show {
      opacity: 1;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: #667076;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .history {
      display: grid;
      gap: 16px;
    }

    .history-item {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 14px;
    }

    .history-header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: baseline;
      gap: 8px;
    }

    .history-date {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .history-time {
      color: #8b959c;
      font-size: 0.875rem;
    }

    .history-stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      background: rgba(47, 125, 109, 0.06);
      border-radius: 14px;
      padding: 12px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7b858c;
    }

    .stat .value {
      display: block;
      font-size: 1.3rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .detail-title {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7b858c;
      margin-bottom: 4px;
    }

    .detail-content {
      white-space: pre-wrap;
    }

    .empty-state {
      text-align: center;
      color: #667076;
      padding: 28px 0;
    }

    .status {
      font-size: 0.95rem;
      color: #667076;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .card {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main id="login-screen" class="screen active">
    <div class="card" style="width: min(420px, 100%); margin: 0 auto;">
      <header>
        <h1>Daily Activity Journal</h1>
        <p class="subtitle">Enter your password. First visit creates your journal.</p>
      </header>
      <form id="login-form">
        <label for="password">Password</label>
        <input type="password" id="password" autocomplete="current-password" />
      </form>
      <button class="btn-primary" type="submit" form="login-form">Unlock</button>
      <div id="login-error" class="error"></div>
    </div>
  </main>

  <main id="dashboard-screen" class="screen">
    <div class="card">
      <div class="topbar">
        <div>
          <h1 id="welcome">Ready to track your progress?</h1>
          <p id="current-date" class="subtitle">{{DATE}}</p>
        </div>
        <button class="btn-ghost" id="logout-btn" type="button">Log out</button>
      </div>

      <form id="activity-form" class="history">
        <div class="field-grid">
          <div>
            <label for="steps">Steps</label>
            <input type="number" id="steps" min="0" step="1" required />
          </div>
          <div>
            <label for="walking">Walking (km)</label>
            <input type="number" id="walking" min="0" step="0.1" required />
          </div>
          <div>
            <label for="money-spent">Money spent ($)</label>
            <input type="number" id="money-spent" min="0" step="0.01" required />
          </div>
        </div>
        <div>
          <label for="learned">What I learned</label>
          <textarea id="learned"></textarea>
        </div>
        <div>
          <label for="goals">Goals &amp; achievements</label>
          <textarea id="goals"></textarea>
        </div>
        <button class="btn-primary" id="submit-btn" type="submit">Save today's entry</button>
        <div class="status" id="status"></div>
      </form>

      <section class="history">
        <div class="topbar">
          <h1 style="font-size: 1.4rem;">History</h1>
          <div class="tabs" role="tablist">
            <button class="tab active" type="button" data-filter="all" role="tab">All</button>
            <button class="tab" type="button" data-filter="week" role="tab">Last 7 days</button>
            <button class="tab" type="button" data-filter="month" role="tab">Last 30 days</button>
          </div>
        </div>
        <div class="history" id="history-container"></div>
      </section>
    </div>
  </main>

  <script>
    const loginScreen = document.getElementById('login-screen');
    const dashboardScreen = document.getElementById('dashboard-screen');
    const loginForm = document.getElementById('login-form');
    const loginError = document.getElementById('login-error');
    const passwordEl = document.getElementById('password');
    const welcomeEl = document.getElementById('welcome');
    const statusEl = document.getElementById('status');
    const submitBtn = document.getElementById('submit-btn');
    const historyEl = document.getElementById('history-container');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = text || '';
      return div.innerHTML;
    };

    const formatNumber = (value) => new Intl.NumberFormat('en-US').format(value);

    const formatMoney = (value) =>
      new Intl.NumberFormat('en-US', {
        minimumFractionDigits: 2,
        maximumFractionDigits: 2
      }).format(value);

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showLoginError = (message) => {
      loginError.textContent = message;
      loginError.classList.add('show');
      setTimeout(() => loginError.classList.remove('show'), 3000);
    };

    const greeting = () => {
      const hour = new Date().getHours();
      if (hour < 12) return 'Good morning!';
      if (hour < 18) return 'Good afternoon!';
      return 'Good evening!';
    };

    const renderHistoryItem = (entry) => {
      const when = new Date(entry.timestamp);
      const date = when.toLocaleDateString('en-US', {
        weekday: 'long', year: 'numeric', month: 'long', day: 'numeric'
      });
      const time = when.toLocaleTimeString('en-US', { hour: '2-digit', minute: '2-digit' });
      return `
        <div class="history-item">
          <div class="history-header">
            <div class="history-date">${date}</div>
            <div class="history-time">${time}</div>
          </div>
          <div class="history-stats">
            <div class="stat">
              <span class="label">Steps</span>
              <span class="value">${formatNumber(entry.steps)}</span>
            </div>
            <div class="stat">
              <span class="label">Walking</span>
              <span class="value">${entry.walking} km</span>
            </div>
            <div class="stat">
              <span class="label">Spent</span>
              <span class="value">$${formatMoney(entry.moneySpent)}</span>
            </div>
          </div>
          <div>
            <div class="detail-title">What I learned</div>
            <div class="detail-content">${escapeHtml(entry.learned)}</div>
          </div>
          <div>
            <div class="detail-title">Goals &amp; achievements</div>
            <div class="detail-content">${escapeHtml(entry.goals)}</div>
          </div>
        </div>
      `;
    };

    const renderHistory = (entries) => {
      if (!entries.length) {
        historyEl.innerHTML =
          '<div class="empty-state">No activities in this window yet. Start tracking your progress today!</div>';
        return;
      }
      historyEl.innerHTML = entries.map(renderHistoryItem).join('');
    };

    const activeFilter = () => {
      const active = tabs.find((tab) => tab.classList.contains('active'));
      return active ? active.dataset.filter : 'all';
    };

    const loadHistory = async () => {
      const res = await fetch(`/api/history?filter=${activeFilter()}`);
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load history');
      }
      renderHistory(await res.json());
    };

    const prefillForm = (entry) => {
      if (!entry) {
        return;
      }
      document.getElementById('steps').value = entry.steps;
      document.getElementById('walking').value = entry.walking;
      document.getElementById('money-spent').value = entry.moneySpent;
      document.getElementById('learned').value = entry.learned;
      document.getElementById('goals').value = entry.goals;
    };

    const loadDashboard = async () => {
      welcomeEl.textContent = `${greeting()} Ready to track your progress?`;
      document.getElementById('current-date').textContent = new Date().toLocaleDateString('en-US', {
        weekday: 'long', year: 'numeric', month: 'long', day: 'numeric'
      });
      const res = await fetch('/api/dashboard');
      if (!res.ok) {
        throw new Error(await res.text() || 'Unable to load dashboard');
      }
      const data = await res.json();
      prefillForm(data.today);
      renderHistory(data.history);
    };

    const showDashboard = () => {
      loginScreen.classList.remove('active');
      dashboardScreen.classList.add('active');
      loadDashboard().catch((err) => setStatus(err.message, 'error'));
    };

    const showLogin = () => {
      dashboardScreen.classList.remove('active');
      loginScreen.classList.add('active');
      passwordEl.value = '';
    };

    loginForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      const res = await fetch('/api/login', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ password: passwordEl.value })
      });
      if (!res.ok) {
        showLoginError(await res.text() || 'Login failed');
        return;
      }
      sessionStorage.setItem('journalUnlocked', '1');
      showDashboard();
    });

    document.getElementById('logout-btn').addEventListener('click', () => {
      if (confirm('Are you sure you want to log out?')) {
        sessionStorage.removeItem('journalUnlocked');
        showLogin();
      }
    });

    document.getElementById('activity-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      setStatus('Saving...', '');
      const payload = {
        steps: parseInt(document.getElementById('steps').value, 10),
        walking: parseFloat(document.getElementById('walking').value),
        moneySpent: parseFloat(document.getElementById('money-spent').value),
        learned: document.getElementById('learned').value,
        goals: document.getElementById('goals').value
      };
      const res = await fetch('/api/activity', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });
      if (!res.ok) {
        setStatus(await res.text() || 'Save failed', 'error');
        return;
      }
      setStatus('Saved', 'ok');
      submitBtn.classList.add('saved');
      submitBtn.textContent = 'Saved successfully!';
      setTimeout(() => {
        submitBtn.classList.remove('saved');
        submitBtn.textContent = "Save today's entry";
        setStatus('', '');
      }, 2000);
      loadHistory().catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        tabs.forEach((tab) => tab.classList.remove('active'));
        button.classList.add('active');
        loadHistory().catch((err) => setStatus(err.message, 'error'));
      });
    });

    if (sessionStorage.getItem('journalUnlocked')) {
      showDashboard();
    }
  </script>
</body>
</html>
"#;

//! Global CSS styles for the classifier window.
//!
//! Dark card layout: drop area, preview, predict button and result card.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #0a0a0a;
  --void-lighter: #12161a;
  --void-border: #24292e;

  /* Accents */
  --primary: #00d4aa;
  --primary-glow: rgba(0, 212, 170, 0.3);
  --gold: #d4af37;

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Semantic */
  --danger: #ff3366;

  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--void-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  min-height: 100vh;
}

.container {
  max-width: 640px;
  margin: 0 auto;
  padding: 2rem 1rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

/* === Header === */
.app-header { text-align: center; }
.page-title { font-size: 2rem; font-weight: 600; }
.tagline { color: var(--text-secondary); margin-top: 0.5rem; }

.app-footer {
  text-align: center;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

/* === Upload Card === */
.upload-card {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 12px;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.upload-area {
  display: block;
  border: 2px dashed var(--void-border);
  border-radius: 10px;
  padding: 3rem 1rem;
  text-align: center;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.upload-area:hover,
.upload-area.dragover {
  border-color: var(--primary);
  background: rgba(0, 212, 170, 0.05);
}

.upload-icon { font-size: 2.5rem; }
.upload-title { margin-top: 0.75rem; font-weight: 500; }
.upload-hint { margin-top: 0.25rem; color: var(--text-muted); font-size: 0.875rem; }

/* === Preview === */
.image-preview {
  display: none;
  position: relative;
  text-align: center;
}

.image-preview.active { display: block; }

.preview-img {
  max-width: 100%;
  max-height: 360px;
  border-radius: 10px;
  object-fit: contain;
}

.preview-caption {
  margin-top: 0.5rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
}

.remove-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: rgba(0, 0, 0, 0.6);
  font-size: 1.25rem;
  line-height: 1;
}

.remove-btn:hover { background: var(--danger); }

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-height: 2.75rem;
  padding: 0.75rem 1.5rem;
  border-radius: 8px;
  font-size: 1rem;
  cursor: pointer;
  transition: box-shadow var(--transition-fast), opacity var(--transition-fast);
  background: var(--primary);
  border: none;
  color: var(--void-black);
  font-weight: 600;
}

.btn-primary:hover:not(:disabled) { box-shadow: 0 0 16px var(--primary-glow); }

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.loader {
  width: 1.25rem;
  height: 1.25rem;
  border: 2px solid rgba(10, 10, 10, 0.3);
  border-top-color: var(--void-black);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Result Card === */
.result-card {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 12px;
  padding: 1.5rem;
  animation: fade-in var(--transition-normal);
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: none; }
}

.result-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.result-caption {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-muted);
}

.prediction-text {
  font-size: 2rem;
  color: var(--gold);
  text-transform: capitalize;
}

.confidence-badge {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  background: rgba(0, 212, 170, 0.15);
  color: var(--primary);
  font-family: var(--font-mono);
  font-size: 0.875rem;
}

.section-header {
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-bottom: 0.75rem;
}

.prob-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.prob-item {
  display: grid;
  grid-template-columns: 7rem 1fr 4rem;
  align-items: center;
  gap: 0.75rem;
}

.prob-label {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
  text-transform: capitalize;
}

.prob-bar-container {
  height: 0.5rem;
  background: var(--void-border);
  border-radius: 4px;
  overflow: hidden;
}

.prob-bar {
  height: 100%;
  background: var(--primary);
  border-radius: 4px;
  transition: width var(--transition-normal);
}

.prob-item--top .prob-bar { background: var(--gold); }

.prob-value {
  text-align: right;
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* === Narrow windows === */
@media (max-width: 767px) {
  .container { padding: 1rem 0.75rem; }
  .prob-item { grid-template-columns: 5rem 1fr 3.5rem; }
}
"#;

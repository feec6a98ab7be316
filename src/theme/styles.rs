//! Global CSS styles for the invitation.
//!
//! Black and gold with a faded floral texture. Animations are keyframes
//! selected by the motion classes from `invitation_core::motion`; timing
//! comes from inline `animation-duration` / `animation-delay`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Palette */
  --black: #000000;
  --gold: #d4af37;
  --gold-soft: rgba(212, 175, 55, 0.8);
  --gold-faint: rgba(212, 175, 55, 0.2);
  --gold-border: rgba(212, 175, 55, 0.3);
  --beige: #f5f0e1;
  --beige-muted: rgba(245, 240, 225, 0.8);
  --beige-dim: rgba(245, 240, 225, 0.7);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-script: 'Great Vibes', 'Dancing Script', cursive;
  --font-arabic: 'Amiri', 'Scheherazade New', serif;

  /* Type Scale */
  --text-lg: 1.25rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.5rem;
  --text-4xl: 3rem;
  --text-6xl: 4.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --ease-out: cubic-bezier(0.16, 1, 0.3, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-serif);
  background: var(--black);
  color: var(--beige);
  line-height: 1.6;
  min-height: 100vh;
}

.page {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
}

/* === Background === */
.floral-backdrop {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.cover-fit {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.contain-fit {
  width: 100%;
  height: 100%;
  object-fit: contain;
  display: block;
}

.image-placeholder {
  width: 100%;
  height: 100%;
  background: rgba(212, 175, 55, 0.05);
}

.ornament {
  display: flex;
  justify-content: center;
  margin: 1.5rem 0;
  opacity: 0.8;
}

/* === Typography === */
.font-script {
  font-family: var(--font-script);
  font-weight: 400;
}

.font-arabic {
  font-family: var(--font-arabic);
}

.text-gold { color: var(--gold); }
.text-center { text-align: center; }
.shrink-0 { flex-shrink: 0; }

.heading-xl { font-size: var(--text-4xl); margin-bottom: 2rem; }
.heading-lg { font-size: var(--text-3xl); margin-bottom: 3rem; }
.heading-md { font-size: var(--text-2xl); margin-bottom: 1rem; }
.heading-sm { font-size: var(--text-xl); margin-bottom: 1.5rem; }
.spaced { margin-bottom: 4rem; }

.lead {
  font-size: var(--text-xl);
  margin-bottom: 2rem;
}

.body-muted {
  font-size: var(--text-lg);
  color: var(--beige-muted);
  line-height: 1.8;
  max-width: 42rem;
  margin: 0 auto 2rem;
}

.relation { font-size: var(--text-lg); margin-bottom: 1rem; }
.name-line { font-size: var(--text-xl); }

/* === Cover === */
.cover {
  position: relative;
  z-index: 10;
  height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 0 1rem;
}

.cover.motion-exit-zoom {
  position: fixed;
  inset: 0;
  z-index: 40;
  animation-name: exit-zoom;
  animation-fill-mode: both;
  animation-timing-function: ease-in;
  pointer-events: none;
}

.cover-title {
  font-size: var(--text-6xl);
  color: var(--gold);
  margin-bottom: 1.5rem;
}

.cover-date {
  font-size: var(--text-2xl);
  color: rgba(245, 240, 225, 0.9);
  margin-bottom: 2.5rem;
}

/* === Buttons === */
.btn-gold {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--gold);
  color: var(--black);
  font-family: var(--font-serif);
  font-weight: 500;
  font-size: var(--text-lg);
  border: none;
  border-radius: 6px;
  padding: 1rem 1.5rem;
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-gold:hover { background: var(--gold-soft); transform: scale(1.05); }
.btn-gold:active { transform: scale(0.98); }
.btn-gold:disabled { cursor: default; transform: none; }

.btn-large {
  padding: 1.5rem 2rem;
  font-size: var(--text-xl);
}

.btn-floating {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  background: var(--gold-soft);
  color: var(--black);
  border: none;
  border-radius: 9999px;
  padding: 0.75rem;
  cursor: pointer;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
  transition: background var(--transition-fast);
}

.btn-floating:hover { background: var(--gold); }
.btn-floating:disabled { opacity: 0.4; cursor: not-allowed; }

.music-toggle {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  z-index: 50;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--beige);
  font-size: var(--text-2xl);
  line-height: 1;
  cursor: pointer;
}

.close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
  z-index: 1;
}

.btn-link { margin-top: 2.5rem; }

/* === Reveal Animations === */
.reveal {
  opacity: 0;
  animation-fill-mode: both;
  animation-timing-function: var(--ease-out);
  animation-play-state: paused;
}

.reveal.in-view,
.reveal.reveal--immediate {
  animation-play-state: running;
}

.motion-fade-up { animation-name: fade-up; }
.motion-fade-in { animation-name: fade-in; }
.motion-slide-left { animation-name: slide-left; }
.motion-slide-right { animation-name: slide-right; }
.motion-rise { animation-name: rise; }

@keyframes fade-up {
  from { opacity: 0; transform: translateY(50px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-left {
  from { opacity: 0; transform: translateX(-30px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes slide-right {
  from { opacity: 0; transform: translateX(30px); }
  to { opacity: 1; transform: translateX(0); }
}

@keyframes rise {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes exit-zoom {
  from { opacity: 1; transform: scale(1); }
  to { opacity: 0; transform: scale(1.1); }
}

/* === Sections === */
.content {
  position: relative;
  z-index: 10;
  padding-bottom: 5rem;
}

.page-section {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 4rem 1rem;
}

.section-inner { width: 100%; margin: 0 auto; }
.max-w-3xl { max-width: 48rem; }
.max-w-4xl { max-width: 56rem; }
.max-w-5xl { max-width: 64rem; }
.max-w-6xl { max-width: 72rem; }

.two-column {
  display: grid;
  grid-template-columns: 1fr;
  gap: 3rem;
}

@media (min-width: 768px) {
  .two-column { grid-template-columns: 1fr 1fr; gap: 4rem; }
  .cover-title { font-size: 6rem; }
  .heading-lg { font-size: var(--text-6xl); }
}

.portrait {
  position: relative;
  width: 12rem;
  height: 12rem;
  margin: 0 auto 2rem;
  border-radius: 9999px;
  overflow: hidden;
  border: 4px solid var(--gold-border);
}

/* === Cards === */
.hover-lift { transition: transform 300ms var(--ease-out); }
.hover-lift:hover { transform: scale(1.02); }

.detail-card {
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
  border: 1px solid var(--gold-faint);
  border-radius: 12px;
  padding: 2rem;
  margin: 0 auto 2rem;
  max-width: 48rem;
}

.detail-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.detail-row:last-child { margin-bottom: 0; }
.detail-row__text { font-size: var(--text-xl); }

.glass-card {
  background: rgba(0, 0, 0, 0.3);
  backdrop-filter: blur(4px);
  border: 1px solid var(--gold-faint);
  border-radius: 12px;
  padding: 2rem;
}

.name-list {
  list-style: none;
  font-size: var(--text-lg);
}

.name-list li + li { margin-top: 0.75rem; }

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

@media (min-width: 768px) {
  .gallery-grid { grid-template-columns: repeat(3, 1fr); gap: 2rem; }
}

.gallery-thumb {
  position: relative;
  aspect-ratio: 3 / 4;
  border: none;
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  padding: 0;
  background: transparent;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
}

.zoom-on-hover { transition: transform 700ms ease; }
.gallery-thumb:hover .zoom-on-hover { transform: scale(1.1); }

.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.85);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 1.5rem;
  animation: fade-in 300ms ease-out;
}

.lightbox {
  position: relative;
  width: 100%;
  max-width: 56rem;
  background: rgba(0, 0, 0, 0.9);
  border: 1px solid var(--gold-border);
  border-radius: 8px;
  padding: 1.5rem;
}

.lightbox__frame {
  aspect-ratio: 3 / 4;
  width: 100%;
  max-height: 80vh;
}

/* === Location === */
.map-card {
  background: rgba(0, 0, 0, 0.5);
  border: 1px solid var(--gold-faint);
  border-radius: 12px;
  overflow: hidden;
}

.aspect-video {
  aspect-ratio: 16 / 9;
  width: 100%;
}

/* === Footer === */
.page-footer {
  text-align: center;
  padding: 2.5rem 0;
  border-top: 1px solid var(--gold-faint);
}

.footer-date {
  font-size: var(--text-xl);
  color: var(--beige-dim);
}
"#;

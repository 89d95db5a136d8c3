//! Global CSS styles for the portfolio page.
//!
//! Light page with cyan accents; the root container's background and text
//! colors are set inline from the theme flag, so nothing here hardcodes them
//! on `.page-root`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Accents */
  --cyan-400: #22d3ee;
  --cyan-500: #06b6d4;
  --green-500: #22c55e;
  --violet-500: #8b5cf6;
  --fuchsia-500: #d946ef;
  --blue-100: #dbeafe;
  --blue-500: #3b82f6;
  --blue-800: #1e40af;
  --purple-500: #a855f7;
  --pink-500: #ec4899;

  /* Neutrals */
  --gray-200: #e5e7eb;
  --gray-300: #d1d5db;
  --backdrop: rgba(0, 0, 0, 0.4);

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-bar: 800ms ease-out;
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
}

body {
  font-family: ui-sans-serif, system-ui, sans-serif;
  line-height: 1.5;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
}

/* === Layout === */
.page-root {
  min-height: 100vh;
  transition: background-color var(--transition-normal), color var(--transition-normal);
}

.container {
  max-width: 1280px;
  margin: 0 auto;
  padding: 3.75rem 3.75rem 0;
}

.container.footer-container {
  padding-top: 0;
  padding-bottom: 2.5rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  padding-bottom: 0.75rem;
}

.section-title:hover {
  text-decoration: underline;
}

.section {
  margin-bottom: 2rem;
  text-align: center;
}

/* === Hero === */
.hero {
  display: flex;
  flex-direction: column-reverse;
  align-items: center;
  padding-bottom: 2.5rem;
}

.hero-greeting {
  font-size: var(--text-3xl);
  font-weight: 700;
  text-align: center;
  padding-bottom: 1rem;
}

.hero-tagline {
  font-size: var(--text-base);
  font-weight: 400;
  text-align: center;
  padding-bottom: 1.25rem;
}

.hero-role {
  display: flex;
  font-size: var(--text-xl);
  font-weight: 600;
  padding-bottom: 1rem;
  background: linear-gradient(to right, var(--blue-500), var(--purple-500), var(--pink-500));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding-bottom: 1rem;
  color: black;
}

.hero-actions {
  display: flex;
  gap: 0.75rem;
}

.bounce {
  display: inline-flex;
  animation: bounce 1s infinite;
}

/* === Portrait === */
.portrait {
  width: 200px;
  height: auto;
  margin-bottom: 1rem;
}

.portrait-image {
  transform: scale(1.2);
}

/* === Buttons === */
.btn-badge {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem;
  font-size: var(--text-xs);
  font-weight: 600;
  border-radius: 0.75rem;
  background: var(--cyan-400);
  color: black;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-badge:hover {
  background: var(--cyan-500);
}

.btn-pill {
  display: inline-flex;
  justify-content: center;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem;
  font-size: var(--text-sm);
  border: 1px solid var(--cyan-400);
  border-radius: 9999px;
  background: white;
  color: black;
  cursor: pointer;
}

.btn-plain {
  display: inline-flex;
  align-items: center;
  cursor: pointer;
}

/* === Education === */
.education-card {
  border-bottom: 2px solid var(--gray-300);
  border-radius: 1rem;
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  padding: 1.5rem;
  transition: box-shadow var(--transition-normal);
}

.education-card:hover {
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.education-year {
  margin-bottom: 0.5rem;
}

.education-focus {
  font-size: var(--text-sm);
  margin-top: 0.75rem;
}

/* === Accordion === */
.accordion {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  width: 100%;
}

.accordion-trigger {
  display: flex;
  width: 100%;
  padding: 1rem;
  justify-content: space-between;
  align-items: center;
  font-size: var(--text-xl);
  font-weight: 600;
  border-radius: 1rem;
  cursor: pointer;
}

.accordion-trigger:hover {
  text-decoration: underline;
}

.accordion-chevron {
  flex-shrink: 0;
  opacity: 0.6;
  transition: transform 200ms;
}

.accordion-trigger[data-state="open"] .accordion-chevron {
  transform: rotate(180deg);
}

.accordion-content[hidden] {
  display: none;
}

/* === Skills === */
.skill-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.skill-card {
  border-radius: 0.75rem;
  padding: 1rem;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
  transition: box-shadow var(--transition-normal);
}

.skill-card:hover {
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.skill-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 0.5rem;
}

.skill-name {
  font-weight: 500;
}

.skill-level {
  font-size: var(--text-sm);
  font-weight: 600;
}

.progress-track {
  width: 100%;
  height: 0.5rem;
  background: var(--gray-200);
  border-radius: 0.25rem;
}

.progress-fill {
  height: 0.5rem;
  width: 0;
  background: var(--green-500);
  border-radius: 0.25rem;
  transition: width var(--transition-bar);
}

.progress-fill.revealed {
  width: var(--fill);
}

/* === Projects === */
.projects {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2.5rem 1rem;
}

.projects-inner {
  max-width: 80rem;
  width: 100%;
}

.projects-inner .section-title {
  margin-bottom: 1.5rem;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(1, minmax(0, 1fr));
  gap: 2rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  height: 100%;
  padding: 1.5rem;
  border: 1px solid var(--gray-200);
  border-radius: 1rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
  transition: all var(--transition-normal);
}

.project-card:hover {
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
  transform: scale(1.02);
}

.project-title {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.project-description {
  font-size: var(--text-sm);
}

.tag-pill {
  font-size: var(--text-xs);
  font-weight: 500;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: var(--blue-100);
  color: var(--blue-800);
}

/* === Typewriter === */
.typewriter-cursor {
  animation: blink 1s step-end infinite;
}

/* === Footer === */
.footer {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  padding-top: 2.5rem;
}

.footer-copyright {
  text-align: center;
}

.footer-links {
  display: flex;
  justify-content: center;
  column-gap: 1rem;
}

/* === Navigation Dock === */
.nav-dock {
  position: fixed;
  bottom: 3.25rem;
  left: 50%;
  transform: translateX(-7.5rem);
  display: flex;
  justify-content: center;
  width: 250px;
  border-radius: 9999px;
  background: linear-gradient(to bottom left, var(--violet-500), var(--fuchsia-500));
}

.nav-dock-group {
  display: flex;
  align-items: center;
  padding: 0.5rem;
  gap: 0.5rem;
}

.nav-dock-divider {
  border-left: 2px solid white;
  height: 2.5rem;
  margin: 0 0.5rem;
}

.nav-dock .icon {
  color: white;
}

/* === Dialog === */
.dialog-overlay {
  position: fixed;
  inset: 0;
  background: var(--backdrop);
  z-index: 40;
}

.dialog-content {
  position: fixed;
  bottom: 0;
  left: 0;
  width: 100%;
  max-height: 90vh;
  overflow: auto;
  background: white;
  color: black;
  border-radius: 1rem 1rem 0 0;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
  z-index: 50;
  outline: none;
  animation: slide-up 300ms ease-out;
}

.dialog-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  cursor: pointer;
}

.dialog-body {
  padding: 1.5rem;
  margin: 2.5rem;
}

.dialog-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 0.5rem;
}

.contact-intro {
  text-align: center;
  margin-bottom: 2.5rem;
}

.contact-actions {
  display: grid;
  place-items: center;
}

/* === Keyframes === */
@keyframes bounce {
  0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

@keyframes slide-up {
  from { transform: translateY(100%); }
  to { transform: translateY(0); }
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Responsive === */
@media (min-width: 640px) {
  .hero-greeting,
  .hero-tagline,
  .section,
  .footer-copyright {
    text-align: left;
  }

  .portrait {
    width: 350px;
    margin-bottom: 0;
  }

  .footer {
    flex-direction: row;
  }
}

@media (min-width: 768px) {
  .hero {
    flex-direction: row;
    justify-content: space-evenly;
  }

  .hero-links {
    flex-direction: row;
  }

  .project-grid {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }
}

@media (min-width: 1024px) {
  .project-grid {
    grid-template-columns: repeat(3, minmax(0, 1fr));
  }

  .project-card--col-start-2 {
    grid-column-start: 2;
  }
}
"#;

//! Global CSS styles for the business card.
//!
//! Light card on a dark slate gradient; stacks vertically on narrow windows.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backdrop and text) */
  --slate-50: #f8fafc;
  --slate-100: #f1f5f9;
  --slate-200: #e2e8f0;
  --slate-500: #64748b;
  --slate-600: #475569;
  --slate-700: #334155;
  --slate-800: #1e293b;
  --slate-900: #0f172a;

  /* SEMANTIC */
  --success: #15803d;
  --danger: #b91c1c;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  color: var(--slate-700);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Backdrop === */
.card-backdrop {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  background: linear-gradient(135deg, var(--slate-900), var(--slate-800), var(--slate-900));
}

/* === Card === */
.business-card {
  width: 100%;
  max-width: 42rem;
  padding: 2rem;
  border-radius: 0.75rem;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(8px);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.business-card__header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}

.business-card__identity {
  flex: 1;
  text-align: center;
}

.business-card__name {
  color: var(--slate-900);
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 0.25rem;
}

.business-card__title {
  color: var(--slate-600);
  margin-bottom: 0.25rem;
}

.business-card__company {
  color: var(--slate-500);
}

.business-card__bio {
  margin-top: 1.5rem;
  color: var(--slate-600);
  text-align: center;
}

.separator {
  border: none;
  height: 1px;
  background: var(--slate-200);
  margin: 1.5rem 0;
}

/* === Avatar === */
.avatar {
  width: 8rem;
  height: 8rem;
  border-radius: 50%;
  border: 4px solid var(--slate-200);
  object-fit: cover;
  flex-shrink: 0;
}

.avatar--fallback {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--slate-100);
  color: var(--slate-700);
  font-size: 2rem;
  font-weight: 600;
}

/* === Contact Rows === */
.business-card__contacts {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.contact-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--slate-700);
}

.contact-row__icon {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--slate-100);
  transition: background var(--transition-fast);
}

.contact-row--link {
  transition: color var(--transition-fast);
}

.contact-row--link:hover {
  color: var(--slate-900);
}

.contact-row--link:hover .contact-row__icon {
  background: var(--slate-200);
}

/* === Actions === */
.business-card__actions {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
}

.business-card__social {
  display: flex;
  gap: 0.5rem;
}

.icon-link {
  width: 2.5rem;
  height: 2.5rem;
  padding: 0;
  justify-content: center;
}

/* === Buttons === */
.btn-primary,
.btn-outline {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 0.5rem;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  border: none;
  background: var(--slate-900);
  color: var(--slate-50);
}

.btn-primary:hover {
  background: var(--slate-800);
}

.btn-outline {
  border: 1px solid var(--slate-200);
  background: transparent;
  color: var(--slate-700);
}

.btn-outline:hover {
  background: var(--slate-100);
}

/* === Save Status === */
.save-contact {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.save-status {
  font-size: 0.75rem;
  max-width: 20rem;
  overflow-wrap: anywhere;
}

.save-status--ok {
  color: var(--success);
}

.save-status--error {
  color: var(--danger);
}

/* === Responsive === */
@media (min-width: 640px) {
  .business-card__actions {
    flex-direction: row;
  }

  .save-contact {
    align-items: flex-end;
  }
}

@media (min-width: 768px) {
  .business-card__header {
    flex-direction: row;
    align-items: flex-start;
  }

  .business-card__identity,
  .business-card__bio {
    text-align: left;
  }
}
"#;

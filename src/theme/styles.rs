//! Global CSS styles for PropertyHub.
//!
//! Coastal daylight look: white surfaces, ocean-blue accents, card grids.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #ffffff;
  --surface-muted: #f9fafb;
  --surface-sunken: #f3f4f6;
  --border: #e5e7eb;

  /* OCEAN BLUE (Actions, Links, Active) */
  --ocean: #2563eb;
  --ocean-deep: #1d4ed8;
  --ocean-tint: #dbeafe;

  /* TEXT */
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* ACCENTS */
  --star-gold: #f59e0b;
  --discount-red: #dc2626;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Shape */
  --radius-sm: 0.375rem;
  --radius-md: 0.5rem;
  --radius-lg: 0.75rem;
  --radius-pill: 999px;

  /* Elevation */
  --shadow-card: 0 1px 3px rgba(17, 24, 39, 0.1), 0 1px 2px rgba(17, 24, 39, 0.06);
  --shadow-card-hover: 0 10px 20px rgba(17, 24, 39, 0.12);
  --shadow-header: 0 1px 2px rgba(17, 24, 39, 0.08);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

button {
  font-family: inherit;
  cursor: pointer;
  border: none;
  background: none;
}

input {
  font-family: inherit;
}

.page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.section-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  width: 100%;
}

.section-title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--text-primary);
}

/* === Site Header === */
.site-header {
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  box-shadow: var(--shadow-header);
  position: sticky;
  top: 0;
  z-index: 20;
}

.site-header-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
}

.brand-title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--ocean);
}

.header-search {
  flex: 1;
  max-width: 28rem;
}

.header-nav {
  display: flex;
  align-items: center;
  gap: 1.5rem;
}

.type-shortcuts {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}

.type-btn {
  color: var(--text-secondary);
  padding: 0.5rem 0.75rem;
  border-radius: var(--radius-sm);
  font-size: var(--text-sm);
  font-weight: 500;
  transition: color var(--transition-fast), background var(--transition-fast);
}

.type-btn:hover {
  color: var(--ocean);
  background: var(--surface-sunken);
}

.auth-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.auth-btn {
  color: var(--text-secondary);
  padding: 0.5rem 1rem;
  border-radius: var(--radius-sm);
  font-size: var(--text-sm);
  font-weight: 500;
  transition: color var(--transition-fast), background var(--transition-fast);
}

.auth-btn:hover {
  color: var(--ocean);
}

.auth-btn.primary {
  background: var(--ocean);
  color: #ffffff;
}

.auth-btn.primary:hover {
  background: var(--ocean-deep);
  color: #ffffff;
}

.menu-toggle {
  display: none;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border-radius: var(--radius-sm);
  color: var(--text-muted);
  transition: color var(--transition-fast), background var(--transition-fast);
}

.menu-toggle:hover {
  color: var(--text-secondary);
  background: var(--surface-sunken);
}

/* === Mobile Menu === */
.mobile-menu {
  display: none;
  border-top: 1px solid var(--border);
  padding: 0.75rem 1.5rem 1rem;
  flex-direction: column;
  gap: 0.5rem;
  background: var(--surface);
}

.mobile-menu-search {
  margin-bottom: 0.5rem;
}

.mobile-menu-types {
  display: flex;
  flex-direction: column;
}

.mobile-menu-auth {
  display: flex;
  flex-direction: column;
  border-top: 1px solid var(--border);
  padding-top: 0.75rem;
  gap: 0.5rem;
}

.mobile-menu-btn {
  text-align: left;
  width: 100%;
  color: var(--text-secondary);
  padding: 0.5rem 0.75rem;
  border-radius: var(--radius-sm);
  font-size: var(--text-base);
  font-weight: 500;
  transition: color var(--transition-fast), background var(--transition-fast);
}

.mobile-menu-btn:hover {
  color: var(--ocean);
  background: var(--surface-sunken);
}

.mobile-menu-btn.primary {
  background: var(--ocean);
  color: #ffffff;
}

/* === Search Input === */
.search-input {
  position: relative;
  width: 100%;
}

.search-icon {
  position: absolute;
  left: 0.75rem;
  top: 50%;
  transform: translateY(-50%);
  color: var(--text-muted);
  display: flex;
  align-items: center;
  pointer-events: none;
}

.search-field {
  width: 100%;
  padding: 0.5rem 0.75rem 0.5rem 2.5rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background: var(--surface);
  color: var(--text-primary);
  font-size: var(--text-sm);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.search-field::placeholder {
  color: var(--text-muted);
}

.search-field:focus {
  outline: none;
  border-color: var(--ocean);
  box-shadow: 0 0 0 2px var(--ocean-tint);
}

/* === Hero === */
.hero {
  background-size: cover;
  background-position: center;
  padding: 6rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.hero-content {
  max-width: 42rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 700;
  color: #ffffff;
  line-height: 1.15;
}

.hero-subtitle {
  font-size: var(--text-lg);
  color: rgba(255, 255, 255, 0.85);
}

.hero-search {
  max-width: 26rem;
  margin-top: 1rem;
}

.hero-search .search-field {
  padding-top: 0.75rem;
  padding-bottom: 0.75rem;
  font-size: var(--text-base);
}

/* === Filter Section === */
.filter-section {
  background: var(--surface);
  box-shadow: var(--shadow-header);
  padding: 2rem 0;
}

.filter-bar {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

.filter-pill {
  padding: 0.5rem 1.25rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-pill);
  background: var(--surface);
  color: var(--text-secondary);
  font-size: var(--text-sm);
  font-weight: 500;
  transition: all var(--transition-fast);
}

.filter-pill:hover {
  border-color: var(--ocean);
  color: var(--ocean);
}

.filter-pill.active {
  background: var(--ocean);
  border-color: var(--ocean);
  color: #ffffff;
}

.results-counter {
  margin-top: 1.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.results-filter-label {
  color: var(--ocean);
  font-weight: 600;
}

/* === Listings === */
.listings-section {
  padding: 3rem 0;
}

.listing-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(17rem, 1fr));
  gap: 1.5rem;
}

.empty-state {
  text-align: center;
  padding: 3rem 1.5rem;
  max-width: 28rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.empty-title {
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--text-primary);
}

.empty-hint {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.btn-primary {
  margin-top: 0.75rem;
  background: var(--ocean);
  color: #ffffff;
  padding: 0.6rem 1.5rem;
  border-radius: var(--radius-md);
  font-size: var(--text-sm);
  font-weight: 600;
  transition: background var(--transition-fast);
}

.btn-primary:hover {
  background: var(--ocean-deep);
}

/* === Property Card === */
.property-card {
  background: var(--surface);
  border-radius: var(--radius-lg);
  overflow: hidden;
  box-shadow: var(--shadow-card);
  display: flex;
  flex-direction: column;
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.property-card:hover {
  box-shadow: var(--shadow-card-hover);
  transform: translateY(-2px);
}

.card-image-area {
  position: relative;
  aspect-ratio: 4 / 3;
  background: var(--surface-sunken);
}

.card-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.card-badge {
  position: absolute;
  top: 0.75rem;
  left: 0.75rem;
  padding: 0.25rem 0.6rem;
  border-radius: var(--radius-pill);
  font-size: var(--text-xs);
  font-weight: 700;
  color: #ffffff;
}

.card-badge--discount {
  background: var(--discount-red);
}

.card-body {
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  flex: 1;
}

.card-title-row {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  gap: 0.75rem;
}

.card-name {
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--text-primary);
}

.card-rating {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-primary);
  white-space: nowrap;
}

.rating-star {
  color: var(--star-gold);
}

.card-location {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.card-tag {
  background: var(--surface-sunken);
  color: var(--text-secondary);
  padding: 0.15rem 0.6rem;
  border-radius: var(--radius-pill);
  font-size: var(--text-xs);
  font-weight: 500;
}

.card-footer {
  margin-top: auto;
  padding-top: 0.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.card-price {
  font-size: var(--text-base);
  font-weight: 700;
  color: var(--ocean);
}

/* === Featured === */
.featured-section {
  background: var(--surface-sunken);
  padding: 3rem 0 4rem;
}

.featured-header {
  text-align: center;
  max-width: 42rem;
  margin: 0 auto 2.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.featured-subtitle {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

.featured-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(19rem, 1fr));
  gap: 1.5rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .header-search,
  .header-nav {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .mobile-menu {
    display: flex;
  }

  .hero {
    padding: 4rem 1.5rem;
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .listing-grid,
  .featured-grid {
    grid-template-columns: 1fr;
  }
}
"#;

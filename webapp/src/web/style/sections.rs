pub const NAV_STYLES: &str = r#"
/* Floating pill navigation */
.navbar {
  position: fixed;
  top: var(--space-6);
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  max-width: 90vw;
  transition: transform var(--transition-normal) var(--easing-standard),
              opacity var(--transition-normal) var(--easing-standard);
}

.navbar.scrolled {
  transform: translateX(-50%) scale(0.98);
  opacity: 0.95;
}

.nav-pill {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-8);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  box-shadow: var(--shadow-lg);
}

.nav-logo {
  font-weight: 800;
  font-size: 1.1rem;
}

.nav-links {
  display: flex;
  gap: var(--space-1);
  list-style: none;
}

.nav-link {
  display: block;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--bg-tertiary);
}

.nav-link.active {
  color: var(--text-primary);
  background-color: var(--border);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  position: fixed;
  top: 96px;
  left: 50%;
  transform: translateX(-50%);
  width: 90vw;
  max-width: 350px;
  z-index: 40;
  padding: var(--space-4);
  border-radius: var(--radius-xl);
  animation: fade-in-up var(--transition-normal) var(--easing-standard);
}

.mobile-menu .nav-links {
  flex-direction: column;
  gap: var(--space-2);
}

.mobile-menu .nav-link {
  text-align: center;
  border-radius: var(--radius-lg);
}

@media (max-width: 768px) {
  .navbar .nav-links {
    display: none;
  }

  .mobile-menu .nav-links {
    display: flex;
  }

  .menu-toggle {
    display: inline-block;
  }
}
"#;

pub const SECTION_STYLES: &str = r#"
/* Page sections */
.page-section {
  padding: var(--space-24) 0;
  position: relative;
  overflow: hidden;
}

.page-section.alt {
  background-color: var(--bg-secondary);
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-12);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
  display: inline-block;
}

.section-desc {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 600px;
  margin: 0 auto;
}

.glow {
  position: absolute;
  border-radius: var(--radius-full);
  background-color: var(--accent);
  filter: blur(120px);
  opacity: 0.15;
  pointer-events: none;
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  text-align: center;
  padding-top: 80px;
  position: relative;
  overflow: hidden;
}

.hero-orb {
  position: absolute;
  border-radius: var(--radius-full);
  filter: blur(100px);
  animation: drift 8s ease-in-out infinite;
}

.hero-orb.one {
  opacity: calc(var(--orb-in, 1) * 0.35);
  width: 500px;
  height: 500px;
  top: 5%;
  left: -15%;
  background-color: var(--accent);
}

.hero-orb.two {
  opacity: calc(var(--orb-in, 1) * 0.12);
  width: 400px;
  height: 400px;
  bottom: 5%;
  right: -10%;
  background-color: #FFFFFF;
  animation-duration: 10s;
  animation-direction: reverse;
}

.hero-content {
  max-width: 900px;
  padding: 0 var(--space-6);
  position: relative;
  z-index: 1;
}

.hero-greeting {
  color: var(--accent);
  font-size: 1.25rem;
  font-weight: 600;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  min-height: 28px;
  margin-bottom: var(--space-4);
}

.hero-name {
  font-size: 4rem;
  font-weight: 800;
  min-height: 90px;
  margin-bottom: var(--space-6);
}

.hero-title {
  font-size: 2.25rem;
  font-weight: 700;
  position: relative;
  display: inline-block;
  min-height: 50px;
  margin-bottom: var(--space-8);
}

.hero-underline {
  position: absolute;
  left: 0;
  bottom: -8px;
  width: 100%;
  height: 4px;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, var(--accent), #FFFFFF);
  transform-origin: left;
}

.hero-bio {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 650px;
  margin: 0 auto var(--space-12);
  min-height: 90px;
  line-height: 1.7;
}

.hero-caret::after {
  content: "|";
  color: var(--accent);
  margin-inline-start: 2px;
}

.scroll-indicator {
  position: absolute;
  bottom: 40px;
  left: 50%;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-3);
  color: var(--text-muted);
  font-size: 0.875rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  background: none;
  border: none;
  cursor: pointer;
}

.scroll-arrow {
  font-size: 1.75rem;
  animation: bounce 1s ease-in-out 2s infinite;
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-16);
  align-items: center;
}

.avatar {
  width: 300px;
  height: 300px;
  margin: 0 auto;
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 5rem;
  font-weight: 800;
  animation: float 4s ease-in-out infinite;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.stat-card {
  text-align: center;
  padding: var(--space-4);
  border-radius: var(--radius-lg);
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
}

.stat-label {
  font-size: 0.75rem;
  color: var(--text-muted);
  margin-top: var(--space-1);
}

.about-text {
  color: var(--text-secondary);
  line-height: 1.7;
  margin-bottom: var(--space-6);
}

.highlights {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
}

.highlight {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: var(--space-6);
}

.skill-card {
  padding: var(--space-6);
  border-radius: var(--radius-xl);
  height: 100%;
}

.skill-card:hover {
  transform: translateY(-4px);
}

.skill-icon {
  width: 56px;
  height: 56px;
  border-radius: var(--radius-lg);
  background-color: var(--bg-tertiary);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.skill-name {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.skill-desc {
  font-size: 0.875rem;
  color: var(--text-secondary);
  line-height: 1.6;
  margin-bottom: var(--space-4);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Projects */
.projects-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

.project-card {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
  padding: var(--space-8);
  border-radius: var(--radius-xl);
}

.project-visual {
  height: 240px;
  border-radius: var(--radius-xl);
  background: radial-gradient(circle at center, var(--accent-glow), transparent 70%), var(--bg-tertiary);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
}

.project-visual span {
  animation: float 4s ease-in-out infinite;
}

.project-index {
  margin-bottom: var(--space-4);
}

.project-name {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.project-desc {
  color: var(--text-secondary);
  line-height: 1.7;
  margin-bottom: var(--space-6);
}

.project-links {
  display: flex;
  gap: var(--space-4);
  margin-top: var(--space-8);
}

/* Experience */
.timeline {
  position: relative;
  max-width: 800px;
  margin: 0 auto;
  border-inline-start: 2px solid var(--accent);
}

.timeline-item {
  position: relative;
  padding-inline-start: var(--space-8);
  padding-bottom: var(--space-8);
}

.timeline-dot {
  position: absolute;
  inset-inline-start: -9px;
  top: 0;
  width: 16px;
  height: 16px;
  border-radius: var(--radius-full);
  background: linear-gradient(135deg, var(--accent), var(--accent-dark));
  border: 3px solid var(--bg-primary);
  box-shadow: 0 0 20px var(--accent-glow);
}

.experience-card {
  padding: var(--space-6);
  border-radius: var(--radius-xl);
}

.experience-head {
  display: flex;
  justify-content: space-between;
  gap: var(--space-4);
  margin-bottom: var(--space-4);
}

.experience-role {
  font-size: 1.25rem;
  font-weight: 600;
}

.experience-company {
  color: var(--accent);
  font-weight: 500;
}

.experience-desc {
  color: var(--text-secondary);
  line-height: 1.7;
  margin-bottom: var(--space-4);
}

.achievements {
  list-style: none;
  margin-bottom: var(--space-4);
}

.achievements li {
  display: flex;
  gap: var(--space-3);
  font-size: 0.875rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-2);
}

.achievements li::before {
  content: "✓";
  color: var(--accent);
}

.experience-skills {
  padding-top: var(--space-4);
  border-top: 1px solid var(--border);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  max-width: 1000px;
  margin: 0 auto;
  align-items: center;
}

.contact-links {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.contact-link {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  color: var(--text-primary);
}

.contact-link:hover {
  border-color: var(--accent);
  transform: translateX(8px);
}

.contact-link-label {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.contact-link-value {
  font-weight: 500;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.back-to-top {
  margin-top: var(--space-24);
  width: 56px;
  height: 56px;
  border-radius: var(--radius-full);
  font-size: 1.5rem;
}

/* Footer */
.footer {
  padding: var(--space-8) 0;
  border-top: 1px solid var(--border);
}

.footer-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
}

.footer-copy {
  font-size: 0.875rem;
  color: var(--accent);
}

.social-links {
  display: flex;
  gap: var(--space-3);
}

.social-link {
  width: 48px;
  height: 48px;
  border-radius: var(--radius-lg);
  border: 1px solid var(--border);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--accent);
  font-weight: 700;
}

.social-link:hover {
  border-color: var(--accent);
  transform: translateY(-4px);
}

/* Not found */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-6);
}

@media (max-width: 768px) {
  .about-grid,
  .project-card,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .hero-name {
    font-size: 2.5rem;
  }

  .hero-title {
    font-size: 1.5rem;
  }

  .footer-row {
    flex-direction: column;
  }
}
"#;

pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Containers */
.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.glass {
  background-color: var(--bg-glass);
  border: 1px solid var(--border);
  backdrop-filter: blur(12px);
  transition: border-color var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.glass:hover {
  border-color: var(--border-hover);
}

.gradient-text {
  background: linear-gradient(90deg, var(--accent), var(--text-primary));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-lg);
  font-weight: 600;
  cursor: pointer;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--accent);
  transition: transform var(--transition-fast) var(--easing-standard),
              border-color var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  transform: translateY(-2px);
  border-color: var(--accent);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
  transform: none;
}

.btn-solid {
  background-color: var(--text-primary);
  color: var(--bg-primary);
}

.icon-btn {
  width: 36px;
  height: 36px;
  border-radius: var(--radius-full);
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font-weight: 700;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--text-primary);
  background-color: var(--bg-tertiary);
}

/* Tags */
.tag {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  font-size: 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background-color: var(--bg-secondary);
  color: var(--text-muted);
}

.tag-accent {
  border: none;
  color: var(--accent);
  font-weight: 500;
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--bg-glass);
  color: var(--text-primary);
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
  outline: none;
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

/* Toasts */
.toaster {
  position: fixed;
  bottom: var(--space-6);
  right: var(--space-6);
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.toast {
  padding: var(--space-3) var(--space-4);
  border-radius: var(--radius-lg);
  background-color: var(--bg-secondary);
  color: var(--text-primary);
  border-left: 4px solid var(--success);
  box-shadow: var(--shadow-lg);
  cursor: pointer;
  animation: fade-in-up var(--transition-normal) var(--easing-standard);
}

.toast.error {
  border-left-color: var(--error);
}

/* Entrance reveal */
.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity var(--transition-slow) var(--easing-standard),
              transform var(--transition-slow) var(--easing-standard);
}

.reveal.from-side {
  transform: translateX(-30px);
}

.reveal.revealed {
  opacity: 1;
  transform: none;
}

@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(12px); }
  to { opacity: 1; transform: none; }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-15px); }
}

@keyframes drift {
  0%, 100% { translate: 0 0; }
  50% { translate: 100px -50px; }
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(10px); }
}
"#;

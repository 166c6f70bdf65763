pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --accent: #1AE66B;            /* Signature green */
  --accent-dark: #16C45B;       /* Hover and gradient end */
  --accent-glow: rgba(26, 230, 107, 0.3);

  /* Light theme surfaces */
  --bg-primary: #F9FAFB;
  --bg-secondary: #FFFFFF;
  --bg-tertiary: #F3F4F6;
  --bg-glass: rgba(255, 255, 255, 0.7);

  /* Light theme text */
  --text-primary: #111827;
  --text-secondary: #4B5563;
  --text-muted: #6B7280;

  /* Borders */
  --border: rgba(17, 24, 39, 0.1);
  --border-hover: rgba(17, 24, 39, 0.25);

  /* Feedback */
  --success: #10B981;
  --error: #EF4444;

  /* Layout */
  --container-width: 1200px;
  --nav-clearance: 100px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-md: 8px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 600ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

[data-theme="dark"] {
  --bg-primary: #0A0A0A;
  --bg-secondary: #111111;
  --bg-tertiary: #1C1C1C;
  --bg-glass: rgba(20, 20, 20, 0.7);

  --text-primary: #F9FAFB;
  --text-secondary: #D1D5DB;
  --text-muted: #9CA3AF;

  --border: rgba(255, 255, 255, 0.1);
  --border-hover: rgba(255, 255, 255, 0.25);

  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.5), 0 4px 6px -2px rgba(0, 0, 0, 0.3);
}"#;

//! Built-in rule tables.

/// Path pattern → documentation files. Patterns are anchored at the start
/// of the project-relative path when compiled.
pub const DEFAULT_PATH_RULES: &[(&str, &[&str])] = &[
    // API
    (r"app/api/.*", &["api/README.md", "api/endpoints.md"]),
    (r"lib/api/.*", &["api/README.md", "api/endpoints.md"]),
    // Architecture
    (
        r"app/.*\.tsx?$",
        &["architecture/frontend.md", "architecture/components.md"],
    ),
    (r"components/.*\.tsx?$", &["architecture/components.md"]),
    (
        r"lib/.*\.ts$",
        &["architecture/backend.md", "architecture/services.md"],
    ),
    (r"hooks/.*", &["architecture/integrations.md"]),
    // Database / backend
    (
        r".*convex.*",
        &["convex_backend_guide.md", "architecture/database.md"],
    ),
    (r"prisma/.*", &["architecture/database.md"]),
    (r".*\.sql$", &["architecture/database.md"]),
    // Configuration
    (r".*config.*", &["deployment/configuration.md"]),
    (
        r"package\.json",
        &["development/setup.md", "deployment/dependencies.md"],
    ),
    (r".*\.env.*", &["deployment/environment-variables.md"]),
    // Testing
    (r".*\.test\.(ts|tsx|js|jsx)$", &["development/testing.md"]),
    (r".*\.spec\.(ts|tsx|js|jsx)$", &["development/testing.md"]),
    // Components
    (r"components/Header\.tsx", &["components/navigation.md"]),
    (r"components/.*CTA.*", &["components/conversion.md"]),
    (r"components/.*Form.*", &["components/forms.md"]),
    // Features
    (
        r"app/signup/.*",
        &["features/authentication.md", "user-guides/onboarding.md"],
    ),
    (
        r"app/pricing/.*",
        &["features/pricing.md", "user-guides/pricing-setup.md"],
    ),
    (
        r"app/booking/.*",
        &["features/booking.md", "user-guides/booking-system.md"],
    ),
];

/// Lowercase keyword → documentation files, checked against completed todo text
pub const DEFAULT_KEYWORD_RULES: &[(&str, &[&str])] = &[
    ("api", &["api/README.md", "api/endpoints.md"]),
    ("endpoint", &["api/endpoints.md"]),
    ("component", &["architecture/components.md"]),
    ("database", &["architecture/database.md"]),
    ("schema", &["architecture/database.md"]),
    ("authentication", &["features/authentication.md"]),
    ("auth", &["features/authentication.md"]),
    ("pricing", &["features/pricing.md"]),
    ("booking", &["features/booking.md"]),
    ("payment", &["features/payments.md"]),
    ("integration", &["architecture/integrations.md"]),
    ("deploy", &["deployment/README.md"]),
    ("config", &["deployment/configuration.md"]),
    ("test", &["development/testing.md"]),
];

/// Doc file updated when an API route handler is added
pub const API_ENDPOINTS_DOC: &str = "api/endpoints.md";
/// Doc file updated when a component is exported
pub const COMPONENTS_DOC: &str = "architecture/components.md";
/// Doc file updated on schema statements
pub const DATABASE_DOC: &str = "architecture/database.md";
/// Doc file updated when new env vars are referenced
pub const ENV_VARS_DOC: &str = "deployment/environment-variables.md";

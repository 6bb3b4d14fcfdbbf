//! Markdown skeletons for documentation files that don't exist yet.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

const API_TEMPLATE: &str = r#"# API Endpoint: {endpoint_name}

## Overview
{description}

## Request
- **Method**: {method}
- **Path**: `/api/{path}`
- **Authentication**: Required/Optional

### Headers
```json
{
  "Content-Type": "application/json",
  "Authorization": "Bearer {token}"
}
```

### Body Parameters
| Parameter | Type | Required | Description |
|-----------|------|----------|-------------|
| {param} | {type} | {required} | {description} |

## Response
### Success (200 OK)
```json
{response_example}
```

### Error Responses
- **400 Bad Request**: Invalid parameters
- **401 Unauthorized**: Missing or invalid authentication
- **500 Internal Server Error**: Server error

## Examples
### cURL
```bash
curl -X {method} \
  https://{host}/api/{path} \
  -H "Authorization: Bearer {token}" \
  -d '{request_body}'
```

---
*Last Updated: {date}*
"#;

const COMPONENT_TEMPLATE: &str = r#"## Component: {component_name}

### Purpose
{description}

### Props
| Prop | Type | Required | Default | Description |
|------|------|----------|---------|-------------|
| {prop} | {type} | {required} | {default} | {description} |

### Usage
```tsx
import {component_name} from '@/components/{component_name}'

<{component_name}
  {props}
/>
```

### Events
- `{event}`: {event_description}

### Styling
- Uses Tailwind CSS classes
- Responsive breakpoints: {breakpoints}
- Theme variables: {theme_vars}

---
*Last Updated: {date}*
"#;

const FEATURE_TEMPLATE: &str = r#"# Feature: {feature_name}

## Overview
{description}

## User Flow
1. {step1}
2. {step2}
3. {step3}

## Technical Implementation
### Frontend Components
- {component1}
- {component2}

### Backend Services
- {service1}
- {service2}

### Database Tables
- {table1}
- {table2}

## Configuration
```env
{env_vars}
```

## Testing
- Unit tests: `{test_file}`
- Integration tests: `{integration_test}`

---
*Last Updated: {date}*
"#;

const ARCHITECTURE_TEMPLATE: &str = r#"# Architecture: {section_name}

## Overview
{description}

## Components
### {component_category}
- **{component}**: {component_description}

## Data Flow
```mermaid
graph LR
    A[{source}] --> B[{processor}]
    B --> C[{destination}]
```

## Dependencies
- {dependency1}: {version}
- {dependency2}: {version}

## Considerations
- **Performance**: {performance_notes}
- **Scalability**: {scalability_notes}
- **Security**: {security_notes}

---
*Last Updated: {date}*
"#;

/// Kinds of documentation skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTemplate {
    Api,
    Component,
    Feature,
    Architecture,
}

impl DocTemplate {
    pub const ALL: [DocTemplate; 4] = [
        DocTemplate::Api,
        DocTemplate::Component,
        DocTemplate::Feature,
        DocTemplate::Architecture,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DocTemplate::Api => "api",
            DocTemplate::Component => "component",
            DocTemplate::Feature => "feature",
            DocTemplate::Architecture => "architecture",
        }
    }

    /// Raw template text with `{placeholder}` markers
    pub fn body(&self) -> &'static str {
        match self {
            DocTemplate::Api => API_TEMPLATE,
            DocTemplate::Component => COMPONENT_TEMPLATE,
            DocTemplate::Feature => FEATURE_TEMPLATE,
            DocTemplate::Architecture => ARCHITECTURE_TEMPLATE,
        }
    }

    /// Template text with `{date}` filled in. Other placeholders are left for the author.
    pub fn render(&self, date: &str) -> String {
        self.body().replace("{date}", date)
    }

    /// Pick a template for a doc file path, e.g. `api/endpoints.md` → Api
    pub fn for_doc(doc: &str) -> Option<Self> {
        if doc.starts_with("api/") {
            Some(DocTemplate::Api)
        } else if doc.starts_with("components/") || doc == "architecture/components.md" {
            Some(DocTemplate::Component)
        } else if doc.starts_with("features/") {
            Some(DocTemplate::Feature)
        } else if doc.starts_with("architecture/") {
            Some(DocTemplate::Architecture)
        } else {
            None
        }
    }
}

impl fmt::Display for DocTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DocTemplate {
    type Err = anyhow::Error;

    /// Accepts a kind name (`api`) or a doc path (`api/endpoints.md`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(template) = Self::ALL.iter().find(|t| t.name() == s) {
            return Ok(*template);
        }
        if let Some(template) = Self::for_doc(s) {
            return Ok(template);
        }

        let names: Vec<&str> = Self::ALL.iter().map(DocTemplate::name).collect();
        bail!(
            "Unknown template '{s}'. Expected one of: {}, or a doc path under api/, components/, features/ or architecture/",
            names.join(", ")
        )
    }
}

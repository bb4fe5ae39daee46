//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn name() -> String {
        "Mi Sitio Optimizado".into()
    }

    pub fn description() -> String {
        "Aprende sobre optimización SEO y rendimiento web".into()
    }

    pub fn locale() -> String {
        "es_ES".into()
    }

    pub fn url() -> String {
        "http://localhost:3000".into()
    }
}

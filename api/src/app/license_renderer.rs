//! License description renderer
//!
//! Renders license terms to human-readable lines for the dashboard and for
//! asset metadata. Line order and the conditional-inclusion rules are part
//! of the contract - clients diff these strings.

use crate::domain::entities::LicenseTerms;

/// Render license terms as ordered description lines
///
/// Emits, in order: commercial-use, derivatives, attribution (only when
/// required), territory (only when non-empty), channels (only when
/// non-empty), exactly one of duration/perpetual, royalty (only when > 0).
pub fn describe_terms(terms: &LicenseTerms) -> Vec<String> {
    let mut lines = Vec::new();

    if terms.commercial_use {
        lines.push("Commercial use permitted".to_string());
    } else {
        lines.push("Commercial use prohibited".to_string());
    }

    if terms.derivatives {
        lines.push("Derivative works permitted".to_string());
    } else {
        lines.push("Derivative works prohibited".to_string());
    }

    if terms.attribution {
        lines.push("Attribution required".to_string());
    }

    if !terms.territory.is_empty() {
        lines.push(format!("Licensed territory: {}", terms.territory.join(", ")));
    }

    if !terms.channels.is_empty() {
        lines.push(format!("Permitted channels: {}", terms.channels.join(", ")));
    }

    if terms.timeframe > 0 {
        lines.push(format!("License term: {} months", terms.timeframe));
    } else {
        lines.push("Perpetual license".to_string());
    }

    if let Some(royalty) = terms.royalty {
        if royalty > 0 {
            lines.push(format!("Royalty: {}%", royalty));
        }
    }

    lines
}

/// Render license terms as a single newline-joined description
pub fn render_description(terms: &LicenseTerms) -> String {
    describe_terms(terms).join("\n")
}

//! Insert a sensitivity directive into the header section of an autoexec
//! template.
//!
//! The header is a block delimited by two identical marker rule lines with a
//! title line between them. The directive is inserted immediately after the
//! closing marker; templates without the header pass through unchanged.

/// The marker/title pair that demarcates the template header.
/// Matching is by substring containment per line.
#[derive(Debug, Clone)]
pub struct HeaderSpec {
    pub marker: String,
    pub title: String,
}

impl Default for HeaderSpec {
    fn default() -> Self {
        Self {
            marker: "// =========================".to_string(),
            title: "CS2 AUTOEXEC".to_string(),
        }
    }
}

/// Comment emitted above the inserted directive.
const SENSITIVITY_COMMENT: &str = "// Sensitivity (randomized)";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scan {
    Outside,
    InsideHeader,
}

/// Copy `template` line by line, inserting a blank line, a comment, and
/// `sensitivity "<value>"` right after the header's closing marker.
///
/// Splits on `'\n'` rather than `str::lines` so a trailing newline in the
/// template survives the round trip.
pub fn insert_sensitivity(template: &str, sensitivity: f64, header: &HeaderSpec) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut scan = Scan::Outside;

    for line in template.split('\n') {
        out.push(line.to_string());
        match scan {
            Scan::Outside => {
                // The opening rule line is just copied; the title is what
                // arms the insertion.
                if !line.contains(&header.marker) && line.contains(&header.title) {
                    scan = Scan::InsideHeader;
                }
            }
            Scan::InsideHeader => {
                if line.contains(&header.marker) {
                    out.push(String::new());
                    out.push(SENSITIVITY_COMMENT.to_string());
                    out.push(format!("sensitivity \"{sensitivity}\""));
                    scan = Scan::Outside;
                }
            }
        }
    }

    out.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn short_header() -> HeaderSpec {
        HeaderSpec {
            marker: "// ====".to_string(),
            title: "CS2 AUTOEXEC".to_string(),
        }
    }

    #[test]
    fn inserts_after_closing_marker() {
        let template = "// ====\nCS2 AUTOEXEC\n// ====";
        let out = insert_sensitivity(template, 1.234, &short_header());
        assert_eq!(
            out,
            "// ====\nCS2 AUTOEXEC\n// ====\n\n// Sensitivity (randomized)\nsensitivity \"1.234\""
        );
    }

    #[test]
    fn inserts_exactly_once() {
        let template = "// ====\nCS2 AUTOEXEC\n// ====\nbind \"w\" \"+forward\"\n";
        let out = insert_sensitivity(template, 0.85, &short_header());
        assert_eq!(out.matches("sensitivity \"0.85\"").count(), 1);
    }

    #[test]
    fn template_without_header_is_unchanged() {
        let template = "bind \"w\" \"+forward\"\nbind \"s\" \"+back\"\n";
        let out = insert_sensitivity(template, 1.5, &short_header());
        assert_eq!(out, template);
    }

    #[test]
    fn title_without_markers_never_inserts() {
        let template = "CS2 AUTOEXEC\nbind \"w\" \"+forward\"";
        let out = insert_sensitivity(template, 1.5, &short_header());
        assert_eq!(out, template);
    }

    #[test]
    fn extra_markers_only_trigger_on_the_transition() {
        // A third rule line after the header must not produce a second insert.
        let template = "// ====\nCS2 AUTOEXEC\n// ====\nbind \"w\" \"+forward\"\n// ====";
        let out = insert_sensitivity(template, 2.0, &short_header());
        assert_eq!(out.matches("sensitivity").count(), 1);
        let lines: Vec<&str> = out.split('\n').collect();
        // Inserted block sits directly after the closing marker.
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "// Sensitivity (randomized)");
        assert_eq!(lines[5], "sensitivity \"2\"");
    }

    #[test]
    fn trailing_newline_survives() {
        let template = "// ====\nCS2 AUTOEXEC\n// ====\n";
        let out = insert_sensitivity(template, 1.1, &short_header());
        assert!(out.ends_with("sensitivity \"1.1\"\n"));
    }

    #[test]
    fn default_header_matches_full_rule_lines() {
        let template = concat!(
            "// =========================\n",
            "// CS2 AUTOEXEC\n",
            "// =========================\n",
            "cl_radar_scale \"0.4\"\n",
        );
        let out = insert_sensitivity(template, 1.337, &HeaderSpec::default());
        assert!(out.contains("sensitivity \"1.337\""));
        let pos_marker = out.rfind("// =========================").unwrap();
        let pos_sens = out.find("sensitivity").unwrap();
        assert!(pos_sens > pos_marker);
    }

    #[test]
    fn default_header_ignores_short_rules() {
        let template = "// ====\nCS2 AUTOEXEC\n// ====\n";
        let out = insert_sensitivity(template, 1.0, &HeaderSpec::default());
        assert_eq!(out, template);
    }
}

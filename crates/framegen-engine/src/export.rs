//! Download artifacts built from the current framework.
//!
//! Both artifacts are pure functions of the framework, its type record and a
//! timestamp; the controller supplies the clock.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use framegen_types::{FrameworkTypeInfo, GeneratedFramework};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use crate::error::Result;

pub const JSON_MIME: &str = "application/json";
pub const TEXT_MIME: &str = "text/plain";

/// A file the page hands to the browser (or, headless, to disk).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Lower-case `[A-Za-z0-9]` and replace everything else with `_`.
///
/// One `_` per UTF-16 code unit, so astral characters such as emoji
/// become two, matching a browser's per-unit regex replace.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(std::iter::repeat_n('_', c.len_utf16()));
        }
    }
    out
}

pub fn json_filename(name: &str) -> String {
    format!("{}_framework.json", slug(name))
}

pub fn text_filename(name: &str) -> String {
    format!("{}_framework.txt", slug(name))
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    #[serde(flatten)]
    framework: &'a GeneratedFramework,
    generated_at: String,
    framework_type_info: &'a FrameworkTypeInfo,
}

/// Keys the export writes itself; copies passed through from the payload are dropped.
const EXPORT_KEYS: [&str; 2] = ["generated_at", "framework_type_info"];

/// Pretty-printed JSON: the framework's fields, then `generated_at` and `framework_type_info`.
pub fn json_document(
    framework: &GeneratedFramework,
    type_info: &FrameworkTypeInfo,
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let mut framework = Cow::Borrowed(framework);
    if EXPORT_KEYS.iter().any(|key| framework.extra.contains_key(*key)) {
        for key in EXPORT_KEYS {
            framework.to_mut().extra.remove(key);
        }
    }

    let document = ExportDocument {
        framework: &framework,
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        framework_type_info: type_info,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn json_download(
    framework: &GeneratedFramework,
    type_info: &FrameworkTypeInfo,
    generated_at: DateTime<Utc>,
) -> Result<Download> {
    Ok(Download {
        filename: json_filename(&framework.name),
        mime: JSON_MIME,
        contents: json_document(framework, type_info, generated_at)?,
    })
}

pub fn text_download(
    framework: &GeneratedFramework,
    type_info: &FrameworkTypeInfo,
    generated_on: NaiveDate,
) -> Download {
    Download {
        filename: text_filename(&framework.name),
        mime: TEXT_MIME,
        contents: TextReport::new(framework, type_info, generated_on).to_string(),
    }
}

/// Human-readable plain-text report.
pub struct TextReport<'a> {
    framework: &'a GeneratedFramework,
    type_info: &'a FrameworkTypeInfo,
    generated_on: NaiveDate,
}

impl<'a> TextReport<'a> {
    pub fn new(
        framework: &'a GeneratedFramework,
        type_info: &'a FrameworkTypeInfo,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            framework,
            type_info,
            generated_on,
        }
    }

    fn write_banner(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fw = self.framework;
        let width = fw.name.chars().count() + self.type_info.name.chars().count() + 11;
        writeln!(f, "{}", fw.name)?;
        writeln!(f, "{} Framework", self.type_info.name)?;
        writeln!(f, "{}", "=".repeat(width))?;
        writeln!(f)?;
        writeln!(f, "Description: {}", fw.description)?;
        writeln!(f)
    }

    fn write_elements(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Framework Elements:")?;
        writeln!(f, "-----------------")?;
        for (index, element) in self.framework.elements.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {}", index + 1, element.name)?;
            writeln!(f, "   {}", element.description)?;
            writeln!(f, "   ")?;
            writeln!(f, "   Key Activities:")?;
            for activity in &element.activities {
                writeln!(f, "   • {}", activity)?;
            }
            writeln!(f, "   ")?;
            writeln!(f, "   Success Criteria: {}", element.success_criteria)?;
        }
        Ok(())
    }

    fn write_guidance(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fw = self.framework;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Implementation Guidance:")?;
        writeln!(f, "------------------------")?;
        writeln!(f, "When to Use: {}", fw.when_to_use)?;
        writeln!(f)?;

        writeln!(f, "Best Practices:")?;
        for practice in &fw.best_practices {
            writeln!(f, "• {}", practice)?;
        }

        writeln!(f)?;
        writeln!(f, "Common Pitfalls:")?;
        for pitfall in &fw.pitfalls {
            writeln!(f, "• {}", pitfall)?;
        }

        writeln!(f)?;
        writeln!(f, "Psychological Foundation:")?;
        writeln!(f, "{}", fw.psychology_principle)?;

        writeln!(f)?;
        writeln!(f, "Visual Concept:")?;
        writeln!(f, "{}", fw.visual_concept)
    }

    fn write_footer(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Generated by AI SYSTEM GENERATOR")?;
        writeln!(f, "Generated on: {}", self.generated_on.format("%-m/%-d/%Y"))
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_banner(f)?;
        self.write_elements(f)?;
        self.write_guidance(f)?;
        self.write_footer(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn type_info() -> FrameworkTypeInfo {
        FrameworkTypeInfo {
            name: "Linear".into(),
            description: "One-way sequence".into(),
            characteristics: vec!["Causality".into()],
            ideal_steps: "3-8 steps".into(),
            examples: vec![],
        }
    }

    fn framework(best_practices: &str) -> GeneratedFramework {
        GeneratedFramework::from_json(&format!(
            r#"{{
                "name": "Ship It",
                "type": "linear",
                "description": "Get to launch",
                "elements": [
                    {{"name": "Plan", "description": "Decide scope.",
                      "activities": "Write the brief", "success_criteria": "Brief approved"}}
                ],
                "when_to_use": "New products",
                "best_practices": {},
                "pitfalls": "Scope creep",
                "psychology_principle": "Progress principle",
                "visual_concept": "Arrow"
            }}"#,
            best_practices
        ))
        .unwrap()
    }

    #[test]
    fn test_slug_replaces_each_character_individually() {
        assert_eq!(slug("Growth & Retention!"), "growth___retention_");
        assert_eq!(
            json_filename("Growth & Retention!"),
            "growth___retention__framework.json"
        );
        assert_eq!(
            text_filename("Growth & Retention!"),
            "growth___retention__framework.txt"
        );
    }

    #[test]
    fn test_slug_keeps_digits_and_lowercases() {
        assert_eq!(slug("S.T.A.R. 5-Step"), "s_t_a_r__5_step");
        assert_eq!(slug("Café"), "caf_");
    }

    #[test]
    fn test_slug_counts_utf16_units() {
        assert_eq!(slug("Go🚀"), "go__");
        assert_eq!(json_filename("🚀"), "___framework.json");
    }

    #[test]
    fn test_text_report_exact_layout() {
        let fw = framework(r#""Keep it short""#);
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let report = TextReport::new(&fw, &type_info(), date).to_string();

        let expected = "Ship It\n\
Linear Framework\n\
========================\n\
\n\
Description: Get to launch\n\
\n\
Framework Elements:\n\
-----------------\n\
\n\
1. Plan\n   Decide scope.\n   \n   Key Activities:\n   • Write the brief\n   \n   Success Criteria: Brief approved\n\
\n\
\n\
Implementation Guidance:\n\
------------------------\n\
When to Use: New products\n\
\n\
Best Practices:\n\
• Keep it short\n\
\n\
Common Pitfalls:\n\
• Scope creep\n\
\n\
Psychological Foundation:\n\
Progress principle\n\
\n\
Visual Concept:\n\
Arrow\n\
\n\
\n\
Generated by AI SYSTEM GENERATOR\n\
Generated on: 3/7/2026\n";

        assert_eq!(report, expected);
    }

    #[test]
    fn test_banner_width_counts_characters() {
        let fw = framework(r#"[]"#);
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let report = TextReport::new(&fw, &type_info(), date).to_string();
        let underline = report.lines().nth(2).unwrap();
        assert_eq!(underline.len(), "Ship It".len() + "Linear".len() + 11);
    }

    #[test]
    fn test_single_string_matches_one_element_list() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let info = type_info();
        let from_string = framework(r#""Keep it short""#);
        let from_list = framework(r#"["Keep it short"]"#);

        assert_eq!(
            TextReport::new(&from_string, &info, date).to_string(),
            TextReport::new(&from_list, &info, date).to_string()
        );
    }

    #[test]
    fn test_json_document_appends_metadata() {
        let fw = framework(r#"["A", "B"]"#);
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let doc = json_document(&fw, &type_info(), at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();

        assert_eq!(value["generated_at"], "2026-10-19T08:30:00.000Z");
        assert_eq!(value["framework_type_info"]["name"], "Linear");
        assert_eq!(value["best_practices"], serde_json::json!(["A", "B"]));
        assert_eq!(value["pitfalls"], serde_json::json!(["Scope creep"]));
        assert!(doc.starts_with("{\n  \"name\": \"Ship It\""));
    }

    #[test]
    fn test_json_document_overrides_payload_metadata() {
        let fw = GeneratedFramework::from_json(
            r#"{"name": "X", "type": "linear", "generated_at": "old",
                "framework_type_info": {"stale": true}, "source": "llm"}"#,
        )
        .unwrap();
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let doc = json_document(&fw, &type_info(), at).unwrap();

        assert_eq!(doc.matches("\"generated_at\"").count(), 1);
        assert_eq!(doc.matches("\"framework_type_info\"").count(), 1);
        assert!(!doc.contains("\"old\""));

        let value: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(value["generated_at"], "2026-01-01T00:00:00.000Z");
        assert_eq!(value["framework_type_info"]["name"], "Linear");
        assert_eq!(value["source"], "llm");
        assert_eq!(fw.extra["generated_at"], "old");
    }

    #[test]
    fn test_downloads_carry_filenames_and_mime() {
        let fw = framework(r#"[]"#);
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let json = json_download(&fw, &type_info(), at).unwrap();
        let text = text_download(&fw, &type_info(), at.date_naive());

        assert_eq!(json.filename, "ship_it_framework.json");
        assert_eq!(json.mime, JSON_MIME);
        assert_eq!(text.filename, "ship_it_framework.txt");
        assert_eq!(text.mime, TEXT_MIME);
    }
}

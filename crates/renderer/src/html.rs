//! Static HTML output
//!
//! The render description is embedded as JSON in a fixed template. The page
//! script draws the traces with Plotly and swaps in precomputed visibility
//! vectors when a control changes.

use crate::assembler::RenderSpec;
use energy_dashboard_shared::{DashboardError, DashboardResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const TEMPLATE: &str = include_str!("templates/dashboard.html");

pub struct HtmlWriter;

impl HtmlWriter {
    /// Render the complete document
    pub fn render(spec: &RenderSpec, plotly_js_url: &str) -> DashboardResult<String> {
        let json = serde_json::to_string(spec).map_err(|e| DashboardError::Output {
            path: "<render description>".to_string(),
            message: e.to_string(),
        })?;

        let title = escape_html(&spec.title);
        let plotly_url = escape_html(plotly_js_url);
        let spec_json = escape_script_json(&json);

        Ok(fill_template(
            TEMPLATE,
            &[
                ("TITLE", title.as_str()),
                ("PLOTLY_URL", plotly_url.as_str()),
                ("SPEC_JSON", spec_json.as_str()),
            ],
        ))
    }

    /// Write `html` to `path` through a temporary sibling, so a failed build
    /// never leaves a truncated document behind.
    pub fn write(path: impl AsRef<Path>, html: &str) -> DashboardResult<()> {
        let path = path.as_ref();
        let output_err = |e: std::io::Error| DashboardError::Output {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(output_err)?;
        }

        let tmp = temp_sibling(path)?;
        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(html.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(output_err(e));
        }

        log::info!("Wrote dashboard ({} bytes) to {}", html.len(), path.display());
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> DashboardResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| DashboardError::Output {
        path: path.display().to_string(),
        message: "output path has no file name".to_string(),
    })?;

    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// Single pass over `template`: each `{{NAME}}` with a known name is
/// replaced, substituted text is never scanned again and unknown
/// placeholders are copied through as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let value = after.find("}}").and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });

        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON stays valid but can no longer close the surrounding script element
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

//! Plotly Page Backend
//! Produces a standalone HTML document that draws the traces with plotly.js.

use crate::charts::{BackendError, ChartBackend, Layout, PlotOptions, Trace};
use serde::Serialize;
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::info;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Chart backend that renders into an HTML document held in memory.
#[derive(Debug, Default)]
pub struct PlotlyPage {
    title: String,
    document: Option<String>,
}

impl PlotlyPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            document: None,
        }
    }

    /// Last rendered document, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn write_to(&self, path: &Path) -> Result<(), BackendError> {
        let document = self
            .document
            .as_deref()
            .ok_or_else(|| BackendError::new("nothing has been rendered yet"))?;
        std::fs::write(path, document)
            .map_err(|e| BackendError::new(format!("writing {}: {e}", path.display())))?;
        info!(path = %path.display(), "wrote plotly page");
        Ok(())
    }

    fn wrap(&self, body: &str) -> Result<String, std::fmt::Error> {
        let mut html = String::with_capacity(body.len() + 512);
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "<meta charset=\"utf-8\"/>")?;
        writeln!(html, "<title>{}</title>", escape_html(&self.title))?;
        writeln!(html, "<script src=\"{PLOTLY_CDN}\"></script>")?;
        writeln!(html, "<style>")?;
        writeln!(html, "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;}}")?;
        writeln!(
            html,
            ".hist-error{{color:#9c0006;background:#ffc7ce;padding:12px;max-width:576px;}}"
        )?;
        writeln!(html, "</style>")?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        html.push_str(body);
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;
        Ok(html)
    }
}

impl ChartBackend for PlotlyPage {
    fn new_plot(
        &mut self,
        target: &str,
        traces: &[Trace],
        layout: &Layout,
        options: &PlotOptions,
    ) -> Result<(), BackendError> {
        let mut body = String::new();
        let call = format!(
            "Plotly.newPlot({}, {}, {}, {});",
            script_json(&target)?,
            script_json(&traces)?,
            script_json(layout)?,
            script_json(options)?
        );
        writeln!(body, "<div id=\"{}\"></div>", escape_html(target)).map_err(fmt_failed)?;
        writeln!(body, "<script>{call}</script>").map_err(fmt_failed)?;

        self.document = Some(self.wrap(&body).map_err(fmt_failed)?);
        Ok(())
    }

    fn placeholder(&mut self, target: &str, message: &str) -> Result<(), BackendError> {
        let body = format!(
            "<div id=\"{}\"><p class=\"hist-error\">Histogram unavailable: {}</p></div>\n",
            escape_html(target),
            escape_html(message)
        );
        self.document = Some(self.wrap(&body).map_err(fmt_failed)?);
        Ok(())
    }
}

/// JSON that is safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` only occur inside JSON strings, where the `\uXXXX` forms
/// decode to the same text; no markup sequence survives into the script body.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, BackendError> {
    let json = serde_json::to_string(value)
        .map_err(|e| BackendError::new(format!("serializing plot arguments: {e}")))?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    Ok(out)
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

fn fmt_failed(_: std::fmt::Error) -> BackendError {
    BackendError::new("formatting html document")
}

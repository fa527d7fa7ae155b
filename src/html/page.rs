use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::cloud::options::{HEIGHT_RANGE, MAX_WORDS_RANGE, WIDTH_RANGE};
use crate::cloud::Background;
use crate::document::{InputMode, ACCEPTED_UPLOADS};
use crate::notice::{Notice, NoticeLevel};
use crate::pipeline::{PipelineOutput, RenderConfig};

const TITLE: &str = "Word Cloud";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;display:flex;min-height:100vh}\
aside{width:320px;padding:1rem 1.25rem;background:#f4f5f7;box-sizing:border-box}\
main{flex:1;padding:1rem 2rem}\
label{display:block;margin-top:.9rem;font-weight:600}\
textarea{width:100%;min-height:10rem;box-sizing:border-box}\
input[type=range]{width:80%}\
.notice{padding:.6rem .8rem;border-radius:4px;margin:.5rem 0}\
.notice-info{background:#e7f1fb}\
.notice-warning{background:#fdf4dc}\
.notice-error{background:#fbe4e4}\
table{border-collapse:collapse;margin-top:1rem}\
th,td{border:1px solid #ccc;padding:.25rem .75rem;text-align:left}\
.language{color:#555}";

// Shows the active input panel and keeps the slider labels in sync
const SCRIPT: &str = "\
document.querySelectorAll('input[name=mode]').forEach(function(r){\
r.addEventListener('change',function(){\
document.getElementById('panel-upload').hidden=r.value!=='upload';\
document.getElementById('panel-type').hidden=r.value!=='type';});});\
document.querySelectorAll('input[type=range]').forEach(function(s){\
s.addEventListener('input',function(){s.nextElementSibling.value=s.value;});});";

/// What the controls currently hold
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub mode: InputMode,
    pub text: String,
    /// Name of the file that produced the results, if any
    pub file_name: Option<String>,
    pub config: RenderConfig,
}

/// Render the whole page
pub fn render_page(form: &FormView, output: &PipelineOutput) -> String {
    let mut html = String::with_capacity(
        4096 + form.text.len() + output.cloud.as_ref().map_or(0, |c| c.svg.len()),
    );

    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{TITLE}</title><style>{STYLE}</style></head><body>"
    );

    write_controls(&mut html, form, output);
    write_results(&mut html, output);

    let _ = write!(html, "<script>{SCRIPT}</script></body></html>");
    html
}

fn write_controls(html: &mut String, form: &FormView, output: &PipelineOutput) {
    let config = form.config.cloud_options();

    html.push_str(r#"<aside><form method="post" action="/" enctype="multipart/form-data">"#);

    html.push_str("<fieldset><legend>Input</legend>");
    for (mode, label) in [(InputMode::Upload, "Upload File"), (InputMode::Type, "Type Text")] {
        let _ = write!(
            html,
            r#"<label><input type="radio" name="mode" value="{}"{}> {}</label>"#,
            mode.as_str(),
            checked(form.mode == mode),
            label
        );
    }
    html.push_str("</fieldset>");

    let _ = write!(
        html,
        r#"<div id="panel-upload"{}><label for="file">Choose a PDF or DOCX file</label><input type="file" id="file" name="file" accept="{}">"#,
        hidden(form.mode != InputMode::Upload),
        ACCEPTED_UPLOADS
    );
    if let Some(name) = &form.file_name {
        let _ = write!(html, "<p>Current file: {}</p>", text(name));
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        r#"<div id="panel-type"{}><label for="text">Enter text</label><textarea id="text" name="text">{}</textarea></div>"#,
        hidden(form.mode != InputMode::Type),
        text(&form.text)
    );

    if let Some(language) = &output.language {
        let _ = write!(
            html,
            r#"<p class="language">Detected Language: <em>{}</em></p>"#,
            text(&language.display_code())
        );
    }

    write_slider(html, "max_words", "Max words", MAX_WORDS_RANGE, 10, config.max_words);

    html.push_str(r#"<label for="background">Background color</label><select id="background" name="background">"#);
    for background in Background::ALL {
        let _ = write!(
            html,
            r#"<option value="{0}"{1}>{0}</option>"#,
            background.as_str(),
            if background == config.background { " selected" } else { "" }
        );
    }
    html.push_str("</select>");

    write_slider(
        html,
        "width",
        "Width",
        (WIDTH_RANGE.0 as usize, WIDTH_RANGE.1 as usize),
        50,
        config.width as usize,
    );
    write_slider(
        html,
        "height",
        "Height",
        (HEIGHT_RANGE.0 as usize, HEIGHT_RANGE.1 as usize),
        50,
        config.height as usize,
    );

    let _ = write!(
        html,
        r#"<label for="stopwords">Additional stopwords (space separated)</label><input type="text" id="stopwords" name="stopwords" value="{}">"#,
        attr(&form.config.extra_stopwords)
    );

    html.push_str(r#"<p><button type="submit">Generate</button></p></form>"#);

    for notice in &output.notices {
        write_notice(html, notice);
    }

    html.push_str("</aside>");
}

fn write_results(html: &mut String, output: &PipelineOutput) {
    let _ = write!(html, "<main><h1>{TITLE}</h1>");

    if let Some(cloud) = &output.cloud {
        // generated markup; words inside are already escaped
        let _ = write!(html, r#"<figure class="cloud">{}</figure>"#, cloud.svg);
    }

    if let Some(rows) = &output.table {
        html.push_str("<h2>Word Frequency</h2><table><thead><tr><th>Word</th><th>Frequency</th></tr></thead><tbody>");
        for row in rows {
            let _ = write!(html, "<tr><td>{}</td><td>{}</td></tr>", text(&row.word), row.count);
        }
        html.push_str("</tbody></table>");
    }

    html.push_str("</main>");
}

fn write_slider(
    html: &mut String,
    name: &str,
    label: &str,
    (min, max): (usize, usize),
    step: usize,
    value: usize,
) {
    let _ = write!(
        html,
        r#"<label for="{name}">{label}</label><input type="range" id="{name}" name="{name}" min="{min}" max="{max}" step="{step}" value="{value}"><output>{value}</output>"#
    );
}

fn write_notice(html: &mut String, notice: &Notice) {
    let class = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    let _ = write!(
        html,
        r#"<div class="notice notice-{}" role="status">{}</div>"#,
        class,
        text(&notice.message)
    );
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn hidden(on: bool) -> &'static str {
    if on {
        " hidden"
    } else {
        ""
    }
}

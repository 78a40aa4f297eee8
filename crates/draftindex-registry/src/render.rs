//! Static index page generation.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use draftindex_core::fs::write_string_atomic;

use crate::config::Config;
use crate::names;
use crate::registry::Registry;

/// Render the listing page for a finished registry.
///
/// One row per spec record, families in shortname-alphabetical order,
/// members in level-ascending order.
pub fn render_index(registry: &Registry, config: &Config) -> String {
    let mut rows = String::new();
    for members in registry.groups.values() {
        for record in members {
            let title = escape_html(record.display_title());
            let level_suffix = if record.level != 0 {
                format!(" Level {}", record.level)
            } else {
                String::new()
            };
            let current_label = if record.current_work {
                " <span class=\"current-work\">(Current Work)</span>"
            } else {
                ""
            };
            let date = registry
                .timestamps
                .get(&record.dir)
                .map(|&timestamp| format_date(timestamp))
                .unwrap_or_default();

            let _ = write!(
                rows,
                "      <tr>\n        \
                 <td><a href=\"./{dir}/\">{title}{level_suffix}</a>{current_label}</td>\n        \
                 <td>{date}</td>\n      </tr>\n",
                dir = record.dir,
            );
        }
    }

    page_shell(&escape_html(&config.page_title), &rows)
}

/// Write the rendered page to `<root>/index.html`.
pub fn write_index(root: &Path, html: &str) -> Result<(), draftindex_core::Error> {
    write_string_atomic(root.join(names::INDEX_FILE), html)
}

/// Escape the characters an untrusted title could use to break out of the
/// surrounding markup.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a Unix timestamp as a UTC `YYYY-MM-DD` date.
fn format_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn page_shell(title: &str, rows: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"utf-8\">\n\
         \x20 <title>{title}</title>\n\
         \x20 <style>\n{STYLESHEET}\x20 </style>\n\
         </head>\n\
         <body>\n\
         \x20 <h1>{title}</h1>\n\
         \x20 <table>\n\
         \x20   <thead>\n\
         \x20     <tr>\n\
         \x20       <th>Specification</th>\n\
         \x20       <th>Last Update</th>\n\
         \x20     </tr>\n\
         \x20   </thead>\n\
         \x20   <tbody>\n\
         {rows}\
         \x20   </tbody>\n\
         \x20 </table>\n\
         </body>\n\
         </html>\n"
    )
}

const STYLESHEET: &str = "    body {
      font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif;
      max-width: 900px;
      margin: 2em auto;
      padding: 0 1em;
      color: #333;
    }
    h1 {
      border-bottom: 1px solid #ccc;
      padding-bottom: 0.3em;
    }
    table {
      width: 100%;
      border-collapse: collapse;
      margin-top: 1em;
    }
    th, td {
      text-align: left;
      padding: 0.5em 0.75em;
      border-bottom: 1px solid #eee;
    }
    th {
      border-bottom: 2px solid #ccc;
      font-weight: 600;
    }
    td:last-child {
      white-space: nowrap;
      color: #666;
    }
    a {
      color: #0366d6;
      text-decoration: none;
    }
    a:hover {
      text-decoration: underline;
    }
    .current-work {
      color: #080;
      font-size: 0.9em;
    }
";

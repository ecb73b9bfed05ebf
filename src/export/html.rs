// src/export/html.rs

use crate::models::monthly_report::MonthlyReport;

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Self-contained HTML document, ready to print or share.
pub fn render_html(report: &MonthlyReport) -> String {
    let title = escape(&report.title);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", title));
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 4px 10px; text-align: center; }\n\
         th { background: #d9dee6; }\n\
         tr:nth-child(even) td { background: #f5f5f5; }\n\
         .na { color: #999; }\n\
         </style>\n",
    );
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str(&format!(
        "<p>Standard workday: {}</p>\n",
        escape(&report.standard_workday)
    ));

    html.push_str("<table>\n<thead>\n<tr>");
    for h in MonthlyReport::headers() {
        html.push_str(&format!("<th>{}</th>", escape(h)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &report.days {
        html.push_str("<tr>");
        for cell in row.cells() {
            if cell == "--" || cell == "N/A" {
                html.push_str(&format!("<td class=\"na\">{}</td>", escape(&cell)));
            } else {
                html.push_str(&format!("<td>{}</td>", escape(&cell)));
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(&format!(
        "<p><strong>Total extra hours: {}</strong></p>\n",
        escape(&report.total_extra)
    ));
    html.push_str("</body>\n</html>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>R&D</b>"), "&lt;b&gt;R&amp;D&lt;/b&gt;");
    }
}

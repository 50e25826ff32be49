//! One-time credential page.

use checkin_core::config::qrcode::QrcodeConfig;
use checkin_entity::{SeatAssignment, SignInfo};

/// Shown when the token is unknown or already used.
pub const INVALID_ADDRESS: &str = "This address is invalid. Please contact the staff.";

/// Shown when redemption failed for any other reason.
pub const UNEXPECTED_ERROR: &str = "An error occurred. Please contact the staff.";

/// Renders the credentials of a redeemed token.
pub fn render_credentials(config: &QrcodeConfig, info: &SignInfo) -> String {
    let id = info.id.map(|id| id.to_string()).unwrap_or_default();
    let seat = match info.seat {
        Some(SeatAssignment::Assigned(n)) => n.to_string(),
        _ => "none".to_string(),
    };
    let site = info.site.map(|s| s.to_string()).unwrap_or_default();

    let body = format!(
        "<h1>{title}</h1>\n\
         <p>Note: this page can be visited only once. Please take a screenshot!</p>\n\
         <p>Student ID: {id}</p>\n\
         <p>Name: {name}</p>\n\
         <p>Seat: {seat} (site {site})</p>\n\
         <p>OJ username: <code>{username}</code></p>\n\
         <p>OJ password: <code>{password}</code></p>\n\
         <p>OJ address: {oj_url}</p>\n",
        title = escape_html(&config.title),
        id = escape_html(&id),
        name = escape_html(info.name.as_deref().unwrap_or_default()),
        seat = escape_html(&seat),
        site = escape_html(&site),
        username = escape_html(&info.username),
        password = escape_html(&info.password),
        oj_url = escape_html(&config.oj_url),
    );
    page(&config.title, &body)
}

/// Renders a page carrying only `message`.
pub fn render_message(config: &QrcodeConfig, message: &str) -> String {
    page(
        &config.title,
        &format!("<p>{}</p>\n", escape_html(message)),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; }}\n\
         p {{ font-family: monospace; }}\n\
         </style>\n\
         </head>\n\
         <body>\n<div>\n{}</div>\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Escapes text for interpolation into HTML element content and
/// attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

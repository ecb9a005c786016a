//! Landing page and the shared page shell.
//!
//! Serves the dealership hub landing page at `/`: static hero text and one
//! link to the campaign page. Also owns the HTML head and stylesheet every
//! page is wrapped in, and the 404 fallback.

use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use axum::response::Html;
use axum::routing::get;

use zerostress_core::content::{LANDING_CTA, LANDING_SUBTITLE, LANDING_TAGLINE, LANDING_TITLE};

use crate::error::AppError;
use crate::html::{ARROW_RIGHT_SVG, escape};
use crate::routes::campaign::CAMPAIGN_PATH;
use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(landing_page))
}

async fn landing_page() -> Html<String> {
    Html(render_landing())
}

/// Fallback for any unmatched path.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}

/// Render the landing page.
#[must_use]
pub fn render_landing() -> String {
    let mut body = String::with_capacity(1024);
    body.push_str(r#"<main class="landing"><div class="landing-inner">"#);
    body.push_str("<h1>");
    body.push_str(&escape(LANDING_TITLE));
    body.push_str("</h1><p class=\"landing-sub\">");
    body.push_str(&escape(LANDING_SUBTITLE));
    body.push_str("</p><a class=\"btn btn-cta btn-xl\" href=\"");
    body.push_str(CAMPAIGN_PATH);
    body.push_str("\"><span>");
    body.push_str(&escape(LANDING_CTA));
    body.push_str("</span>");
    body.push_str(ARROW_RIGHT_SVG);
    body.push_str("</a><p class=\"landing-tagline\">");
    body.push_str(&escape(LANDING_TAGLINE));
    body.push_str("</p></div></main>");
    page_shell(LANDING_TITLE, &body)
}

/// Wrap a page body in the shared `<head>` and stylesheet.
#[must_use]
pub fn page_shell(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(PAGE_CSS.len() + body.len() + 256);
    html.push_str(r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/><title>"#);
    html.push_str(&escape(title));
    html.push_str("</title>");
    html.push_str(PAGE_CSS);
    html.push_str("</head><body>");
    html.push_str(body);
    html.push_str("</body></html>");
    html
}

/// Stylesheet shared by the landing and campaign pages.
const PAGE_CSS: &str = r##"<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#FFFFFF;--fg:#111827;--muted:#6B7280;--muted-bg:#F3F4F6;--border:#E5E7EB;--primary:#C3002F;--primary-fg:#FFFFFF;--success:#16A34A;--black:#0B0B0C;--font:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif}
body{font-family:var(--font);background:var(--bg);color:var(--fg);line-height:1.6;-webkit-font-smoothing:antialiased}
a{color:inherit;text-decoration:none}
svg{width:20px;height:20px;flex-shrink:0}
.container{max-width:1200px;margin:0 auto;padding:0 16px}
.btn{display:inline-flex;align-items:center;justify-content:center;gap:8px;padding:10px 20px;border-radius:8px;font-size:14px;font-weight:700;font-family:var(--font);border:none;cursor:pointer;transition:all .2s}
.btn-sm{padding:6px 12px;font-size:13px}
.btn-xl{padding:16px 32px;font-size:18px}
.btn-cta{background:var(--primary);color:var(--primary-fg);box-shadow:0 4px 14px rgba(195,0,47,.25)}.btn-cta:hover{filter:brightness(1.08)}
.btn-dealership{background:var(--black);color:#fff}.btn-dealership:hover{background:#27272A}
.btn-outline{background:transparent;color:var(--black);border:2px solid var(--black)}
.btn-ghost{background:transparent;color:var(--fg)}.btn-ghost:hover{background:var(--muted-bg)}
.btn-block{width:100%}
.badge{display:inline-block;padding:2px 10px;border-radius:999px;font-size:12px;font-weight:700;background:var(--muted-bg);color:var(--fg)}
.shadow{box-shadow:0 4px 20px rgba(0,0,0,.08)}
.muted{color:var(--muted)}
.section{padding:80px 0}
.section-alt{background:rgba(243,244,246,.5)}
.section-head{text-align:center;margin-bottom:48px}
.section-head h2{font-size:36px;font-weight:800;margin-bottom:12px}
.section-head p{font-size:20px;color:var(--muted)}
.grid{display:grid;gap:24px}
.grid-2{grid-template-columns:repeat(2,1fr)}
.grid-3{grid-template-columns:repeat(3,1fr)}
.card{background:var(--bg);border:1px solid var(--border);border-radius:10px;padding:24px}
.landing{display:flex;min-height:100vh;align-items:center;justify-content:center}
.landing-inner{text-align:center}
.landing h1{font-size:36px;font-weight:800;margin-bottom:16px}
.landing-sub{font-size:20px;color:var(--muted);margin-bottom:32px}
.landing-tagline{font-size:14px;color:var(--muted);margin-top:16px}
.header{position:sticky;top:0;z-index:50;background:rgba(255,255,255,.95);backdrop-filter:blur(8px);border-bottom:1px solid var(--border)}
.header-inner{height:64px;display:flex;align-items:center;justify-content:space-between}
.brand{display:flex;align-items:center;gap:8px;font-weight:800;font-size:18px}
.brand-mark{width:40px;height:40px;border-radius:6px;background:var(--primary);color:var(--primary-fg);display:flex;align-items:center;justify-content:center;font-size:20px}
.brand .badge{margin-left:16px}
.header-actions{display:flex;align-items:center;gap:12px}
.hero{padding:80px 0;background:linear-gradient(135deg,#FFF5F7 0%,#FFFFFF 60%)}
.hero-grid{display:grid;grid-template-columns:1fr 1fr;gap:48px;align-items:center}
.hero h1{font-size:56px;font-weight:800;line-height:1.1;margin-bottom:24px}
.hero h1 span{color:var(--primary)}
.hero-sub{font-size:20px;color:var(--muted);margin-bottom:24px}
.hero-actions{display:flex;gap:16px;flex-wrap:wrap}
.checklist{display:grid;grid-template-columns:repeat(3,1fr);gap:16px;padding-top:24px}
.check{display:flex;align-items:center;gap:8px;font-size:14px;font-weight:600}
.check svg{color:var(--success)}
.hero img{width:100%;aspect-ratio:4/3;object-fit:cover;border-radius:10px}
.scarcity{text-align:center;margin-bottom:32px}
.scarcity-box{display:inline-flex;align-items:center;gap:16px;background:var(--bg);padding:16px;border-radius:10px}
.scarcity-count{font-size:24px;font-weight:800;color:var(--primary)}
.scarcity-track{width:128px;height:8px;background:var(--muted-bg);border-radius:999px;overflow:hidden}
.scarcity-bar{height:100%;background:linear-gradient(90deg,var(--primary),#FF4D6D);transition:width .5s}
.vehicle h3{font-size:18px;font-weight:800}
.vehicle .badge{margin:12px 0 8px}
.vehicle ul{list-style:none;margin-bottom:16px}
.vehicle li{display:flex;align-items:center;gap:8px;font-size:14px}
.vehicle li svg{width:16px;height:16px;color:var(--success)}
.footnote{text-align:center;font-size:14px;color:var(--muted);margin-top:24px}
.step{text-align:center}
.step-num{width:64px;height:64px;border-radius:50%;background:var(--primary);color:var(--primary-fg);display:flex;align-items:center;justify-content:center;font-size:24px;font-weight:800;margin:0 auto 16px}
.step h3{font-size:20px;font-weight:800;margin-bottom:8px}
.step-note{font-size:14px;color:var(--muted);margin-top:8px}
.benefit-icon{color:var(--primary);margin-bottom:16px}
.benefit-icon svg{width:24px;height:24px}
.benefit h3,.testimonial .author{font-weight:800;margin-bottom:8px}
.stars{display:flex;margin-bottom:16px}
.testimonial blockquote{color:var(--muted);margin-bottom:16px}
.faq-list{max-width:900px;margin:0 auto;display:flex;flex-direction:column;gap:16px}
.faq summary{font-weight:700;font-size:18px;cursor:pointer;list-style:none;display:flex;justify-content:space-between;align-items:center}
.faq summary::-webkit-details-marker{display:none}
.faq-toggle{flex:1;display:flex;justify-content:space-between;align-items:center}
.faq summary .chevron{transition:transform .2s}
.faq details[open] summary .chevron{transform:rotate(180deg)}
.faq .answer{margin-top:16px;color:var(--muted)}
.compliance{background:var(--black);color:#fff;padding:32px 0 112px;font-size:14px}
.compliance h3{font-weight:700;margin-bottom:8px}
.compliance div+div{margin-top:24px}
.mobile-bar{position:fixed;left:0;right:0;bottom:0;z-index:40;background:var(--bg);border-top:1px solid var(--border);padding:16px;display:none;align-items:center;justify-content:space-between}
.dialog-backdrop{position:fixed;inset:0;z-index:60;background:rgba(0,0,0,.5);display:flex;align-items:center;justify-content:center;padding:16px}
.dialog{width:100%;max-width:448px}
.dialog h3{font-size:20px;font-weight:800;margin-bottom:16px}
.dialog p{margin-bottom:16px}
.dialog-actions{display:flex;justify-content:flex-end;gap:8px}
@media(max-width:1024px){.hero-grid,.grid-3{grid-template-columns:1fr 1fr}.hero h1{font-size:40px}.checklist{grid-template-columns:1fr 1fr}.mobile-bar{display:flex}}
@media(max-width:768px){.hero-grid,.grid-2,.grid-3{grid-template-columns:1fr}.hide-sm{display:none}.brand .badge{margin-left:8px}}
</style>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_links_to_campaign() {
        let html = render_landing();
        assert!(html.contains(LANDING_TITLE));
        assert!(html.contains(LANDING_SUBTITLE));
        assert!(html.contains("href=\"/zero-stress-nissan\""));
        assert!(html.contains(LANDING_TAGLINE));
    }

    #[test]
    fn shell_escapes_title() {
        let html = page_shell("A & B", "<p>x</p>");
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.ends_with("<p>x</p></body></html>"));
    }
}

//! The Zero-Stress bundle campaign page.
//!
//! Each request is one view initialization: the catalog is loaded from the
//! configured source, filtered to available listings, rendered, and dropped.
//! The dialog and FAQ state arrive in the query string
//! (`?dialog=open&stock=N1234&faq=0,2`), and every reserve/cancel button is a
//! link to the URL of the state that click produces.

use std::fmt::Write as _;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use serde::Deserialize;
use tracing::{debug, warn};

use zerostress_core::contact::DealerContact;
use zerostress_core::content::{
    BENEFITS, BENEFITS_HEADING, BENEFITS_SUBHEADING, DEALER_NAME, DISCLOSURES, FAQ_HEADING, FAQS,
    HERO_CHECKLIST, HERO_HEADLINE, HERO_IMAGE, HERO_IMAGE_ALT, HERO_PRIMARY_CTA,
    HERO_SECONDARY_CTA, HERO_SUBHEAD, INVENTORY_FOOTNOTE, Icon, STEPS, STEPS_HEADING,
    STEPS_SUBHEADING, TESTIMONIALS, TESTIMONIALS_HEADING,
};
use zerostress_core::faq::FaqDisclosure;
use zerostress_core::inventory::Inventory;
use zerostress_core::listing::{Catalog, VehicleListing};
use zerostress_core::reservation::{DIALOG_TITLE, DialogEvent, ReservationDialog};
use zerostress_core::view::{CampaignUiState, UiEvent};

use crate::error::AppError;
use crate::html::{MESSAGE_SVG, PHONE_SVG, STAR_SVG, escape, icon_svg};
use crate::routes::ui::page_shell;
use crate::state::AppState;

/// Path of the campaign page.
pub const CAMPAIGN_PATH: &str = "/zero-stress-nissan";

/// Build the campaign router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(CAMPAIGN_PATH, get(campaign_page))
}

/// Query parameters carrying the page's UI state.
#[derive(Debug, Default, Deserialize)]
pub struct CampaignQuery {
    /// `open` shows the reservation dialog.
    pub dialog: Option<String>,
    /// Stock number selected in the dialog.
    pub stock: Option<String>,
    /// Comma-separated indices of expanded FAQ entries.
    pub faq: Option<String>,
}

impl CampaignQuery {
    /// Decode into view state.
    #[must_use]
    pub fn into_state(self) -> CampaignUiState {
        let open = self.dialog.as_deref() == Some("open");
        CampaignUiState {
            dialog: ReservationDialog::from_parts(open, self.stock.as_deref()),
            faq: self
                .faq
                .as_deref()
                .map(FaqDisclosure::parse)
                .unwrap_or_default(),
        }
    }
}

/// URL of the campaign page in the given state. Inverse of
/// [`CampaignQuery::into_state`].
#[must_use]
pub fn state_href(state: &CampaignUiState) -> String {
    let mut params = Vec::with_capacity(3);
    if state.dialog.is_open() {
        params.push("dialog=open".to_owned());
        if let Some(stock) = state.dialog.selected_stock() {
            params.push(format!("stock={}", urlencoding::encode(stock)));
        }
    }
    if !state.faq.is_empty() {
        params.push(format!("faq={}", urlencoding::encode(&state.faq.to_param())));
    }

    if params.is_empty() {
        CAMPAIGN_PATH.to_owned()
    } else {
        format!("{CAMPAIGN_PATH}?{}", params.join("&"))
    }
}

/// Escaped `href` value for the page after `event`.
fn event_href(state: &CampaignUiState, event: impl Into<UiEvent>) -> String {
    escape(&state_href(&state.apply(event)))
}

async fn campaign_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CampaignQuery>,
) -> Result<Html<String>, AppError> {
    let ui = query.into_state();
    let catalog = Catalog::load(state.listings.as_ref()).await?;
    let inventory = Inventory::from_catalog(&catalog);

    let scarcity = inventory.scarcity();
    if scarcity.is_over_capacity() {
        warn!(
            remaining = scarcity.remaining,
            capacity = scarcity.capacity,
            "more listings available than bundles; scarcity bar exceeds 100%"
        );
    }
    debug!(
        listings = catalog.len(),
        available = scarcity.remaining,
        dialog_open = ui.dialog.is_open(),
        "rendering campaign page"
    );

    Ok(Html(render_campaign(&inventory, &ui, &state.contact)))
}

/// Render the whole campaign page.
#[must_use]
pub fn render_campaign(
    inventory: &Inventory<'_>,
    ui: &CampaignUiState,
    contact: &DealerContact,
) -> String {
    let mut body = String::with_capacity(32768);
    render_header(&mut body, inventory, ui, contact);
    render_hero(&mut body, inventory, ui);
    render_inventory(&mut body, inventory, ui);
    render_steps(&mut body);
    render_benefits(&mut body);
    render_testimonials(&mut body);
    render_faq(&mut body, ui);
    render_compliance(&mut body);
    render_mobile_bar(&mut body, ui, contact);
    if ui.dialog.is_open() {
        render_dialog(&mut body, ui);
    }
    page_shell("Zero-Stress Nissan Bundle", &body)
}

// ── Sections ─────────────────────────────────────────────────────────
//
// `write!` into a `String` cannot fail, so results are discarded.

fn render_header(
    out: &mut String,
    inventory: &Inventory<'_>,
    ui: &CampaignUiState,
    contact: &DealerContact,
) {
    let scarcity = inventory.scarcity();
    out.push_str(r#"<header class="header"><div class="container header-inner"><div class="brand"><div class="brand-mark">N</div><span>"#);
    out.push_str(&escape(DEALER_NAME));
    out.push_str("</span>");
    if scarcity.shows_badge() {
        let _ = write!(
            out,
            r#"<span class="badge" id="bundles-badge">{} bundles left</span>"#,
            scarcity.remaining
        );
    }
    let _ = write!(
        out,
        r#"</div><div class="header-actions"><a class="btn btn-ghost btn-sm" href="{tel}">{PHONE_SVG}<span class="hide-sm">{phone}</span></a><a class="btn btn-ghost btn-sm" href="{sms}">{MESSAGE_SVG}<span class="hide-sm">Text Us</span></a><a class="btn btn-cta btn-sm" href="{reserve}">{cta}</a></div></div></header>"#,
        tel = escape(&contact.tel_href()),
        phone = escape(&contact.phone),
        sms = escape(&contact.sms_href()),
        reserve = event_href(ui, DialogEvent::reserve_any()),
        cta = escape(HERO_PRIMARY_CTA),
    );
}

fn render_hero(out: &mut String, inventory: &Inventory<'_>, ui: &CampaignUiState) {
    let reserve = event_href(ui, DialogEvent::reserve_any());
    let _ = write!(
        out,
        r#"<section class="hero"><div class="container hero-grid"><div><h1>{headline} <span>{capacity} bundles only.</span></h1><p class="hero-sub">{subhead}</p><div class="hero-actions"><a class="btn btn-cta btn-xl" href="{reserve}">{primary}</a><a class="btn btn-outline btn-xl" href="{reserve}">{secondary}</a></div><div class="checklist">"#,
        headline = escape(HERO_HEADLINE),
        capacity = inventory.scarcity().capacity,
        subhead = escape(HERO_SUBHEAD),
        primary = escape(HERO_PRIMARY_CTA),
        secondary = escape(HERO_SECONDARY_CTA),
    );
    for item in HERO_CHECKLIST {
        let _ = write!(
            out,
            r#"<div class="check">{check}<span>{item}</span></div>"#,
            check = icon_svg(Icon::Check),
            item = escape(item),
        );
    }
    let _ = write!(
        out,
        r#"</div></div><div><img class="shadow" src="/assets/{image}" alt="{alt}"/></div></div></section>"#,
        image = escape(HERO_IMAGE),
        alt = escape(HERO_IMAGE_ALT),
    );
}

fn render_inventory(out: &mut String, inventory: &Inventory<'_>, ui: &CampaignUiState) {
    let scarcity = inventory.scarcity();
    let _ = write!(
        out,
        r#"<section class="section section-alt" id="inventory"><div class="container"><div class="scarcity"><div class="scarcity-box shadow"><span class="scarcity-count">{remaining}</span><span class="muted">of {capacity} bundles left</span><div class="scarcity-track"><div class="scarcity-bar" style="width:{percentage}%"></div></div></div></div><div class="grid grid-3">"#,
        remaining = scarcity.remaining,
        capacity = scarcity.capacity,
        percentage = scarcity.percentage(),
    );
    for vehicle in inventory.available() {
        render_vehicle_card(out, vehicle, ui);
    }
    let _ = write!(
        out,
        r#"</div><p class="footnote">{footnote}</p></div></section>"#,
        footnote = escape(INVENTORY_FOOTNOTE),
    );
}

fn render_vehicle_card(out: &mut String, vehicle: &VehicleListing, ui: &CampaignUiState) {
    let _ = write!(
        out,
        r#"<article class="card shadow vehicle" data-listing-id="{id}"><h3>{title}</h3><p class="muted">Stock #{stock}</p><p class="muted" style="font-size:14px">VIN: {vin}</p><span class="badge">{color}</span><ul>"#,
        id = escape(&vehicle.id),
        title = escape(&vehicle.title()),
        stock = escape(&vehicle.stock),
        vin = escape(&vehicle.vin),
        color = escape(&vehicle.color),
    );
    for highlight in &vehicle.highlights {
        let _ = write!(
            out,
            "<li>{check}<span>{highlight}</span></li>",
            check = icon_svg(Icon::Check),
            highlight = escape(highlight),
        );
    }
    let _ = write!(
        out,
        r#"</ul><a class="btn btn-dealership btn-block" href="{href}">Reserve This VIN</a></article>"#,
        href = event_href(ui, DialogEvent::reserve_stock(vehicle.stock.clone())),
    );
}

fn render_steps(out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="section"><div class="container"><div class="section-head"><h2>{heading}</h2><p>{subheading}</p></div><div class="grid grid-3">"#,
        heading = escape(STEPS_HEADING),
        subheading = escape(STEPS_SUBHEADING),
    );
    for step in STEPS {
        let _ = write!(
            out,
            r#"<div class="step"><div class="step-num">{number}</div><h3>{title}</h3><p class="muted">{description}</p>"#,
            number = escape(step.number),
            title = escape(step.title),
            description = escape(step.description),
        );
        if let Some(note) = step.note {
            let _ = write!(out, r#"<p class="step-note">{}</p>"#, escape(note));
        }
        out.push_str("</div>");
    }
    out.push_str("</div></div></section>");
}

fn render_benefits(out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="section section-alt"><div class="container"><div class="section-head"><h2>{heading}</h2><p>{subheading}</p></div><div class="grid grid-3">"#,
        heading = escape(BENEFITS_HEADING),
        subheading = escape(BENEFITS_SUBHEADING),
    );
    for benefit in BENEFITS {
        let _ = write!(
            out,
            r#"<div class="card shadow benefit"><div class="benefit-icon">{icon}</div><h3>{title}</h3><p class="muted">{description}</p></div>"#,
            icon = icon_svg(benefit.icon),
            title = escape(benefit.title),
            description = escape(benefit.description),
        );
    }
    out.push_str("</div></div></section>");
}

fn render_testimonials(out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="section"><div class="container"><div class="section-head"><h2>{heading}</h2></div><div class="grid grid-3">"#,
        heading = escape(TESTIMONIALS_HEADING),
    );
    for testimonial in TESTIMONIALS {
        let _ = write!(
            out,
            r#"<div class="card shadow testimonial"><div class="stars" aria-label="{rating} out of 5 stars">"#,
            rating = testimonial.rating,
        );
        for _ in 0..testimonial.rating {
            out.push_str(STAR_SVG);
        }
        let _ = write!(
            out,
            r#"</div><blockquote>"{quote}"</blockquote><p class="author">{author}</p></div>"#,
            quote = escape(testimonial.quote),
            author = escape(testimonial.author),
        );
    }
    out.push_str("</div></div></section>");
}

fn render_faq(out: &mut String, ui: &CampaignUiState) {
    let _ = write!(
        out,
        r#"<section class="section section-alt" id="faq"><div class="container"><div class="section-head"><h2>{heading}</h2></div><div class="faq-list">"#,
        heading = escape(FAQ_HEADING),
    );
    for (index, faq) in FAQS.iter().enumerate() {
        let open = if ui.faq.is_open(index) { " open" } else { "" };
        let _ = write!(
            out,
            r##"<div class="card shadow faq"><details id="faq-{index}"{open}><summary><a class="faq-toggle" href="{toggle}#faq-{index}">{question}<span class="chevron">&darr;</span></a></summary><div class="answer">{answer}</div></details></div>"##,
            toggle = event_href(ui, UiEvent::ToggleFaq(index)),
            question = escape(faq.question),
            answer = escape(faq.answer),
        );
    }
    out.push_str("</div></div></section>");
}

fn render_compliance(out: &mut String) {
    out.push_str(r#"<footer class="compliance"><div class="container">"#);
    for disclosure in DISCLOSURES {
        let _ = write!(
            out,
            "<div><h3>{heading}</h3><p>{body}</p></div>",
            heading = escape(disclosure.heading),
            body = escape(disclosure.body),
        );
    }
    out.push_str("</div></footer>");
}

fn render_mobile_bar(out: &mut String, ui: &CampaignUiState, contact: &DealerContact) {
    let _ = write!(
        out,
        r#"<div class="mobile-bar"><a class="btn btn-ghost btn-sm" href="{tel}" aria-label="Call us">{PHONE_SVG}</a><a class="btn btn-cta" href="{reserve}">{cta}</a><a class="btn btn-ghost btn-sm" href="{sms}" aria-label="Text us">{MESSAGE_SVG}</a></div>"#,
        tel = escape(&contact.tel_href()),
        sms = escape(&contact.sms_href()),
        reserve = event_href(ui, DialogEvent::reserve_any()),
        cta = escape(HERO_PRIMARY_CTA),
    );
}

fn render_dialog(out: &mut String, ui: &CampaignUiState) {
    // Submit has no bound behavior.
    let _ = write!(
        out,
        r#"<div class="dialog-backdrop" id="reserve-dialog" role="dialog" aria-modal="true" aria-labelledby="reserve-title"><div class="card dialog"><h3 id="reserve-title">{title}</h3><p class="muted">{prompt}</p><div class="dialog-actions"><a class="btn btn-ghost" href="{cancel}">Cancel</a><button type="button" class="btn btn-dealership">Submit</button></div></div></div>"#,
        title = escape(DIALOG_TITLE),
        prompt = escape(&ui.dialog.prompt()),
        cancel = event_href(ui, DialogEvent::Cancel),
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn listing(id: &str, stock: &str, available: bool) -> VehicleListing {
        VehicleListing {
            id: id.to_owned(),
            year: "2025".to_owned(),
            model: "Kicks".to_owned(),
            trim: "SR".to_owned(),
            stock: stock.to_owned(),
            vin: "3N1CP5DV1SL506238".to_owned(),
            color: "Super Black".to_owned(),
            highlights: vec!["Around View Monitor".to_owned()],
            available,
        }
    }

    fn render(listings: Vec<VehicleListing>, ui: &CampaignUiState) -> String {
        let catalog = Catalog::from_listings(listings).unwrap();
        let inventory = Inventory::from_catalog(&catalog);
        render_campaign(&inventory, ui, &DealerContact::default())
    }

    fn query(dialog: Option<&str>, stock: Option<&str>, faq: Option<&str>) -> CampaignQuery {
        CampaignQuery {
            dialog: dialog.map(str::to_owned),
            stock: stock.map(str::to_owned),
            faq: faq.map(str::to_owned),
        }
    }

    // ── query state ──────────────────────────────────────────────────

    #[test]
    fn empty_query_is_initial_state() {
        assert_eq!(CampaignQuery::default().into_state(), CampaignUiState::default());
    }

    #[test]
    fn query_decodes_open_dialog_with_stock() {
        let state = query(Some("open"), Some("N1234"), Some("0,1")).into_state();
        assert_eq!(state.dialog.selected_stock(), Some("N1234"));
        assert!(state.faq.is_open(0));
        assert!(state.faq.is_open(1));
    }

    #[test]
    fn stock_without_open_is_closed() {
        let state = query(None, Some("N1234"), None).into_state();
        assert!(!state.dialog.is_open());
    }

    #[test]
    fn href_of_initial_state_is_bare_path() {
        assert_eq!(state_href(&CampaignUiState::default()), CAMPAIGN_PATH);
    }

    #[test]
    fn href_encodes_stock_and_faq() {
        let state = CampaignUiState::default()
            .apply(DialogEvent::reserve_stock("N 12&4"))
            .apply(UiEvent::ToggleFaq(2))
            .apply(UiEvent::ToggleFaq(0));
        assert_eq!(
            state_href(&state),
            "/zero-stress-nissan?dialog=open&stock=N%2012%264&faq=0%2C2"
        );
    }

    // ── rendering ────────────────────────────────────────────────────

    #[test]
    fn renders_only_available_listings_in_order() {
        let html = render(
            vec![
                listing("a", "N1", true),
                listing("b", "N2", false),
                listing("c", "N3", true),
            ],
            &CampaignUiState::default(),
        );
        let a = html.find(r#"data-listing-id="a""#).unwrap();
        let c = html.find(r#"data-listing-id="c""#).unwrap();
        assert!(a < c);
        assert!(!html.contains(r#"data-listing-id="b""#));
        assert!(html.contains("2 of 25 bundles left"));
        assert!(html.contains("width:8%"));
    }

    #[test]
    fn reserve_button_links_to_open_dialog_for_stock() {
        let html = render(vec![listing("a", "N1234", true)], &CampaignUiState::default());
        assert!(html.contains(r#"href="/zero-stress-nissan?dialog=open&amp;stock=N1234""#));
        assert!(!html.contains("reserve-dialog"));
    }

    #[test]
    fn open_dialog_shows_selected_stock() {
        let ui = query(Some("open"), Some("N1234"), None).into_state();
        let html = render(vec![listing("a", "N1234", true)], &ui);
        assert!(html.contains("reserve-dialog"));
        assert!(html.contains("Stock #N1234 selected"));
        assert!(html.contains(r#"<a class="btn btn-ghost" href="/zero-stress-nissan">Cancel</a>"#));
    }

    #[test]
    fn generic_dialog_prompts_for_choice() {
        let ui = query(Some("open"), None, None).into_state();
        let html = render(vec![listing("a", "N1", true)], &ui);
        assert!(html.contains("Choose your preferred vehicle"));
    }

    #[test]
    fn zero_remaining_hides_badge_and_grid() {
        let html = render(vec![listing("a", "N1", false)], &CampaignUiState::default());
        assert!(!html.contains("bundles-badge"));
        assert!(!html.contains("data-listing-id"));
        assert!(html.contains("0 of 25 bundles left"));
        assert!(html.contains("width:0%"));
    }

    #[test]
    fn faq_entries_open_independently() {
        let ui = query(None, None, Some("0,1")).into_state();
        let html = render(vec![], &ui);
        assert!(html.contains(r#"<details id="faq-0" open>"#));
        assert!(html.contains(r#"<details id="faq-1" open>"#));
        assert!(html.contains(r#"<details id="faq-2">"#));
    }

    #[test]
    fn faq_toggle_links_flip_only_their_entry() {
        let ui = query(None, None, Some("0")).into_state();
        let html = render(vec![], &ui);
        assert!(html.contains(r#"href="/zero-stress-nissan#faq-0""#));
        assert!(html.contains(r#"href="/zero-stress-nissan?faq=0%2C1#faq-1""#));
    }

    #[test]
    fn faq_toggle_links_keep_dialog_open() {
        let ui = query(Some("open"), Some("N1"), Some("2")).into_state();
        let html = render(vec![], &ui);
        assert!(html.contains(
            r#"href="/zero-stress-nissan?dialog=open&amp;stock=N1&amp;faq=2%2C3#faq-3""#
        ));
    }

    #[test]
    fn static_copy_is_rendered_escaped() {
        let html = render(vec![], &CampaignUiState::default());
        for text in [
            DEALER_NAME,
            HERO_HEADLINE,
            HERO_SUBHEAD,
            STEPS_HEADING,
            BENEFITS_HEADING,
            TESTIMONIALS_HEADING,
            FAQ_HEADING,
        ] {
            assert!(html.contains(&escape(text)), "missing: {text}");
        }
        for step in STEPS {
            assert!(html.contains(&escape(step.title)));
            assert!(html.contains(&escape(step.description)));
        }
    }

    #[test]
    fn listing_text_is_escaped() {
        let mut evil = listing("x", "N<1>", true);
        evil.color = "<script>alert(1)</script>".to_owned();
        let html = render(vec![evil], &CampaignUiState::default());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Stock #N&lt;1&gt;"));
    }
}

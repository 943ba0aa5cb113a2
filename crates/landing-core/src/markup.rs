//! HTML rendering of the landing page.
//!
//! `render_page` produces the whole page body for a given `ViewState`. The
//! web front-end injects it once at mount and afterwards only patches the
//! nodes named in [`ids`], so every id and `data-*` hook used there is
//! emitted here.

use crate::content::*;
use crate::state::{Action, Dialog, ViewState};
use std::borrow::Cow;
use std::fmt::Write;

/// Element ids and attributes shared with the DOM wiring.
pub mod ids {
    use crate::state::Dialog;

    pub const CANVAS: &str = "particle-network";
    pub const PDF_STUDENT_NAME: &str = "pdf-student-name";
    pub const NFT_STUDENT_NAME: &str = "nft-student-name";
    pub const NAME_INPUT: &str = "student-name-input";
    pub const ACTION_ATTR: &str = "data-action";
    pub const STATE_ATTR: &str = "data-state";

    pub fn dialog(dialog: Dialog) -> &'static str {
        match dialog {
            Dialog::Alter => "alter-dialog",
            Dialog::Verify => "verify-dialog",
        }
    }

    pub fn faq_item(index: usize) -> String {
        format!("faq-item-{}", index)
    }
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[inline]
pub fn open_state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

pub fn icon_svg(icon: Icon, class: &str) -> String {
    let body = match icon {
        Icon::ShieldCheck => {
            r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
        }
        Icon::Lock => {
            r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
        }
        Icon::SearchCheck => {
            r#"<path d="m8 11 2 2 4-4"/><circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#
        }
        Icon::Wallet => {
            r#"<path d="M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1"/><path d="M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4"/>"#
        }
        Icon::Cpu => {
            r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2"/>"#
        }
        Icon::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        Icon::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
    };
    format!(
        r#"<svg class="icon {}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
        class, body
    )
}

fn action_attr(action: &Action) -> String {
    format!(r#" {}="{}""#, ids::ACTION_ATTR, escape_html(&action.to_string()))
}

fn brand(out: &mut String, icon_class: &str) {
    let _ = write!(
        out,
        r#"<div class="brand">{}<span class="brand-name">{}<span class="accent">{}</span></span></div>"#,
        icon_svg(Icon::ShieldCheck, icon_class),
        BRAND_PREFIX,
        BRAND_SUFFIX
    );
}

fn header(out: &mut String) {
    out.push_str(r#"<header class="site-header"><nav class="nav">"#);
    brand(out, "icon-lg accent");
    let _ = write!(
        out,
        r#"<button type="button" class="btn btn-outline btn-sm">{}</button>"#,
        CONNECT_WALLET
    );
    out.push_str("</nav></header>");
}

fn hero(out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="hero"><h1>{}<br><span class="gradient-text">{}</span></h1><p class="lead">{}</p><div class="button-row"><button type="button" class="btn btn-primary btn-lg">{}</button><button type="button" class="btn btn-outline btn-lg"{}>{}</button></div></section>"#,
        HERO.headline,
        HERO.headline_accent,
        HERO.lead,
        HERO.issue_label,
        action_attr(&Action::OpenDialog(Dialog::Verify)),
        HERO.verify_label
    );
}

fn certificate(out: &mut String, card: &ComparisonCard, state: &ViewState) {
    let (name, name_id, frame_class, date_class) = match card.kind {
        CertificateKind::Pdf => (
            escape_html(&state.student_name),
            ids::PDF_STUDENT_NAME,
            "certificate certificate-pdf",
            "muted",
        ),
        CertificateKind::Nft => (
            Cow::Borrowed(DEFAULT_STUDENT_NAME),
            ids::NFT_STUDENT_NAME,
            "certificate certificate-nft",
            "accent-soft",
        ),
    };
    let _ = write!(
        out,
        r#"<div class="{}"><h4>Certificate of Completion</h4><p class="cert-line">This certifies that</p><p class="cert-name" id="{}">{}</p><p class="cert-line">has successfully completed the</p><p class="cert-course">{}</p><p class="cert-date {}">{}: {}</p></div>"#,
        frame_class, name_id, name, COURSE_NAME, date_class, card.date_label, ISSUE_DATE
    );
}

fn comparison(out: &mut String, state: &ViewState) {
    let _ = write!(
        out,
        r#"<section class="band"><div class="container"><h2 class="section-title">{}</h2><div class="grid grid-2">"#,
        COMPARISON_TITLE
    );

    let _ = write!(
        out,
        r#"<article class="card card-danger"><header class="card-header"><h3 class="card-title danger">{}</h3><p class="card-description">{}</p></header><div class="card-content">"#,
        OLD_WAY.title, OLD_WAY.description
    );
    certificate(out, &OLD_WAY, state);
    let _ = write!(
        out,
        r#"</div><footer class="card-footer"><button type="button" class="btn btn-destructive btn-block"{}>{}</button></footer></article>"#,
        action_attr(&Action::OpenDialog(Dialog::Alter)),
        ALTER_DIALOG.trigger
    );

    let _ = write!(
        out,
        r#"<article class="card card-glow"><header class="card-header"><h3 class="card-title accent">{}</h3><p class="card-description">{}</p></header><div class="card-content">"#,
        NEW_WAY.title, NEW_WAY.description
    );
    certificate(out, &NEW_WAY, state);
    let _ = write!(
        out,
        r#"</div><footer class="card-footer card-footer-stack"><button type="button" class="btn btn-primary btn-block"{}>{}</button><button type="button" class="btn btn-destructive btn-block" disabled>{}</button></footer></article>"#,
        action_attr(&Action::OpenDialog(Dialog::Verify)),
        VERIFICATION.trigger,
        ALTER_DIALOG.impossible
    );

    out.push_str("</div></div></section>");
}

fn features(out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="section"><div class="container"><h2 class="eyebrow">{}</h2><p class="section-title">{}</p><div class="grid grid-3">"#,
        FEATURES_EYEBROW, FEATURES_TITLE
    );
    for f in FEATURES.iter() {
        let _ = write!(
            out,
            r#"<article class="card card-feature"><header class="card-header"><h3 class="card-title with-icon">{}{}</h3></header><div class="card-content"><p class="card-description">{}</p></div></article>"#,
            icon_svg(f.icon, "accent"),
            f.title,
            f.body
        );
    }
    out.push_str("</div></div></section>");
}

fn steps(out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="band"><div class="container container-narrow"><h2 class="section-title">{}</h2><div class="steps">"#,
        STEPS_TITLE
    );
    for (i, s) in STEPS.iter().enumerate() {
        if i > 0 {
            out.push_str(r#"<div class="step-connector" aria-hidden="true"></div>"#);
        }
        let _ = write!(
            out,
            r#"<div class="step"><div class="step-badge">{}</div><h3>{}</h3><p>{}</p></div>"#,
            icon_svg(s.icon, "icon-lg"),
            escape_html(s.title),
            s.body
        );
    }
    out.push_str("</div></div></section>");
}

fn faq(out: &mut String, state: &ViewState) {
    let _ = write!(
        out,
        r#"<section class="section"><div class="container container-tight"><h2 class="section-title">{}</h2><div class="accordion">"#,
        FAQ_TITLE
    );
    for (i, item) in FAQ.iter().enumerate() {
        let open = state.open_faq == Some(i);
        let _ = write!(
            out,
            r#"<div class="accordion-item" id="{}" {}="{}"><button type="button" class="accordion-trigger" aria-expanded="{}"{}>{}{}</button><div class="accordion-content"{}><p>{}</p></div></div>"#,
            ids::faq_item(i),
            ids::STATE_ATTR,
            open_state(open),
            open,
            action_attr(&Action::ToggleFaq(i)),
            escape_html(item.question),
            icon_svg(Icon::ChevronDown, "chevron"),
            if open { "" } else { " hidden" },
            escape_html(item.answer)
        );
    }
    out.push_str("</div></div></section>");
}

fn call_to_action(out: &mut String) {
    let _ = write!(
        out,
        r#"<section class="band"><div class="container container-narrow center"><h2 class="section-title">{}</h2><p class="lead">{}</p><div class="button-row"><button type="button" class="btn btn-primary btn-lg">{}</button><button type="button" class="btn btn-outline btn-lg">{}</button></div></div></section>"#,
        CTA.title,
        escape_html(CTA.body),
        CTA.primary,
        CTA.secondary
    );
}

fn footer(out: &mut String) {
    out.push_str(r#"<footer class="site-footer"><div class="container center">"#);
    brand(out, "accent");
    let _ = write!(
        out,
        r#"<p>{}</p><p class="small">{}</p></div></footer>"#,
        FOOTER_LINES[0], FOOTER_LINES[1]
    );
}

fn dialog_start(
    out: &mut String,
    dialog: Dialog,
    open: bool,
    title_class: &str,
    title: &str,
    description: &str,
) {
    let close = action_attr(&Action::CloseDialog(dialog));
    let _ = write!(
        out,
        r#"<div class="dialog" id="{}" role="dialog" aria-modal="true" {}="{}"{}><div class="dialog-backdrop"{}></div><div class="dialog-content"><button type="button" class="dialog-close" aria-label="Close"{}>{}</button><header class="dialog-header"><h2 class="dialog-title {}">{}</h2><p class="dialog-description">{}</p></header>"#,
        ids::dialog(dialog),
        ids::STATE_ATTR,
        open_state(open),
        if open { "" } else { " hidden" },
        close,
        close,
        icon_svg(Icon::X, ""),
        title_class,
        escape_html(title),
        escape_html(description)
    );
}

fn alter_dialog(out: &mut String, state: &ViewState) {
    dialog_start(
        out,
        Dialog::Alter,
        state.alter_dialog_open,
        "",
        ALTER_DIALOG.title,
        ALTER_DIALOG.description,
    );
    let _ = write!(
        out,
        r#"<div class="dialog-body"><input type="text" class="input" id="{}" value="{}" placeholder="{}" autocomplete="off"></div><footer class="dialog-footer"><button type="button" class="btn btn-primary"{}>{}</button></footer></div></div>"#,
        ids::NAME_INPUT,
        escape_html(&state.student_name),
        ALTER_DIALOG.placeholder,
        action_attr(&Action::CloseDialog(Dialog::Alter)),
        ALTER_DIALOG.done
    );
}

fn verify_dialog(out: &mut String, state: &ViewState) {
    let v = &VERIFICATION;
    dialog_start(
        out,
        Dialog::Verify,
        state.verify_dialog_open,
        "success",
        v.title,
        v.description,
    );
    let _ = write!(
        out,
        r#"<div class="dialog-body mono"><div class="record-row"><strong>Token ID:</strong> <span class="accent-soft">{}</span></div><div class="record-row"><strong>Contract:</strong> <span class="accent-soft">{}</span></div><div class="record-row"><strong>Owner:</strong> <span class="accent-soft">{}</span></div><div class="record-metadata"><p><strong>[Metadata]</strong></p><pre>{}</pre></div></div></div></div>"#,
        v.token_id,
        v.contract,
        v.owner,
        escape_html(&v.metadata_json())
    );
}

/// Full page body: background canvas, content sections and both dialogs.
pub fn render_page(state: &ViewState) -> String {
    let mut out = String::with_capacity(24 * 1024);
    let _ = write!(
        out,
        r#"<div class="page"><canvas id="{}" class="particle-network" aria-hidden="true"></canvas><div class="page-content">"#,
        ids::CANVAS
    );
    header(&mut out);
    hero(&mut out);
    comparison(&mut out, state);
    features(&mut out);
    steps(&mut out);
    faq(&mut out, state);
    call_to_action(&mut out);
    footer(&mut out);
    out.push_str("</div>");
    alter_dialog(&mut out, state);
    verify_dialog(&mut out, state);
    out.push_str("</div>");
    out
}

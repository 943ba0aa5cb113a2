// Host-side tests for page markup.

use landing_core::content::{FAQ, FEATURES, STEPS, VERIFICATION};
use landing_core::markup::{escape_html, ids, open_state, render_page};
use landing_core::{Action, Dialog, ViewState};

#[test]
fn escape_leaves_plain_text_borrowed() {
    assert!(matches!(escape_html("John Doe"), std::borrow::Cow::Borrowed(_)));
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
}

#[test]
fn user_name_cannot_inject_markup() {
    let mut s = ViewState::default();
    s.apply(Action::SetStudentName(r#""><script>alert(1)</script>"#.into()));
    let html = render_page(&s);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;"#));
}

#[test]
fn page_has_every_section() {
    let html = render_page(&ViewState::default());
    for needle in [
        "Connect Wallet",
        "Stop Faking It.",
        "Start Scribing It.",
        "See The Difference",
        "The Old Way: The PDF",
        "The New Way: SoulScribe NFT",
        "Built for Trust",
        "How It Works",
        "Frequently Asked Questions",
        "Ready to Secure Your Legacy?",
        "Start Minting Now",
        "Contact Sales",
        "Photoshop Simulator",
    ] {
        assert!(html.contains(needle), "missing {:?}", needle);
    }
    for f in FEATURES.iter() {
        assert!(html.contains(f.title));
    }
    assert_eq!(html.matches(r#"class="step""#).count(), STEPS.len());
    assert_eq!(html.matches("step-connector").count(), STEPS.len() - 1);
    assert!(html.contains(&format!(r#"id="{}""#, ids::CANVAS)));
}

#[test]
fn closed_dialogs_render_hidden() {
    let html = render_page(&ViewState::default());
    for d in Dialog::ALL {
        let open_tag = format!(
            r#"id="{}" role="dialog" aria-modal="true" data-state="closed" hidden>"#,
            ids::dialog(d)
        );
        assert!(html.contains(&open_tag), "{}", open_tag);
    }
}

#[test]
fn open_dialog_renders_visible() {
    let mut s = ViewState::default();
    s.apply(Action::OpenDialog(Dialog::Verify));
    let html = render_page(&s);
    assert!(html.contains(r#"id="verify-dialog" role="dialog" aria-modal="true" data-state="open">"#));
    assert!(html.contains(r#"id="alter-dialog" role="dialog" aria-modal="true" data-state="closed" hidden>"#));
}

#[test]
fn verification_record_is_placeholder_data() {
    let html = render_page(&ViewState::default());
    assert!(html.contains("✓ Transaction Verified"));
    assert!(html.contains(">721<"));
    assert!(html.contains("0x...SoulScribe"));
    assert!(html.contains("0x...JohnDoe"));
    assert!(html.contains("ipfs://QmX..."));

    let json: serde_json::Value = serde_json::from_str(&VERIFICATION.metadata_json()).unwrap();
    assert_eq!(json["name"], "AI Fundamentals");
    assert_eq!(json["student"], "John Doe");
    assert_eq!(json["date"], "2025-10-26");
}

#[test]
fn trigger_buttons_carry_actions() {
    let html = render_page(&ViewState::default());
    // Hero "Verify a Credential" and card "Verify on-Chain" share the dialog
    assert_eq!(html.matches(r#"data-action="open-dialog:verify""#).count(), 2);
    assert_eq!(html.matches(r#"data-action="open-dialog:alter""#).count(), 1);
    // backdrop, close button and "Done"
    assert_eq!(html.matches(r#"data-action="close-dialog:alter""#).count(), 3);
    assert_eq!(html.matches(r#"data-action="close-dialog:verify""#).count(), 2);
    for i in 0..FAQ.len() {
        assert!(html.contains(&format!(r#"data-action="toggle-faq:{}""#, i)));
    }
    assert!(html.contains("Alter this Certificate (Impossible)</button>"));
    assert!(html.contains(r#"btn-block" disabled>"#));
}

#[test]
fn faq_items_reflect_open_state() {
    let mut s = ViewState::default();
    s.apply(Action::ToggleFaq(2));
    let html = render_page(&s);
    for i in 0..FAQ.len() {
        let expect = format!(
            r#"id="{}" data-state="{}""#,
            ids::faq_item(i),
            open_state(i == 2)
        );
        assert!(html.contains(&expect), "{}", expect);
    }
    assert_eq!(html.matches(r#"aria-expanded="true""#).count(), 1);
}

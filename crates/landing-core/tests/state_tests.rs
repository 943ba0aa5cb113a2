// Host-side tests for view state and action parsing.

use landing_core::content::DEFAULT_STUDENT_NAME;
use landing_core::markup::{ids, render_page};
use landing_core::{Action, Dialog, ParseActionError, ViewState};

#[test]
fn starts_with_default_name_and_closed_dialogs() {
    let s = ViewState::default();
    assert_eq!(s.student_name, DEFAULT_STUDENT_NAME);
    assert!(!s.alter_dialog_open);
    assert!(!s.verify_dialog_open);
    assert!(!s.any_dialog_open());
    assert_eq!(s.open_faq, None);
}

#[test]
fn dialog_flags_are_independent() {
    let mut s = ViewState::default();
    assert!(s.apply(Action::OpenDialog(Dialog::Verify)));
    assert!(s.is_open(Dialog::Verify));
    assert!(!s.is_open(Dialog::Alter));

    assert!(s.apply(Action::OpenDialog(Dialog::Alter)));
    assert!(s.is_open(Dialog::Verify) && s.is_open(Dialog::Alter));

    assert!(s.apply(Action::CloseDialog(Dialog::Verify)));
    assert!(s.is_open(Dialog::Alter));
    assert!(!s.is_open(Dialog::Verify));

    // No-op transitions report no change
    assert!(!s.apply(Action::OpenDialog(Dialog::Alter)));
    assert!(!s.apply(Action::CloseDialog(Dialog::Verify)));
}

#[test]
fn close_dialogs_closes_both() {
    let mut s = ViewState::default();
    assert!(!s.apply(Action::CloseDialogs));
    s.apply(Action::OpenDialog(Dialog::Alter));
    s.apply(Action::OpenDialog(Dialog::Verify));
    assert!(s.apply(Action::CloseDialogs));
    assert!(!s.any_dialog_open());
}

#[test]
fn name_edit_only_touches_old_way_certificate() {
    let mut s = ViewState::default();
    assert!(s.apply(Action::SetStudentName("Jane Smith".into())));
    assert!(!s.apply(Action::SetStudentName("Jane Smith".into())));

    let html = render_page(&s);
    assert!(html.contains(&format!(r#"id="{}">Jane Smith<"#, ids::PDF_STUDENT_NAME)));
    assert!(html.contains(&format!(r#"id="{}">John Doe<"#, ids::NFT_STUDENT_NAME)));
    // Verification metadata keeps the minted recipient too
    assert!(html.contains("&quot;student&quot;: &quot;John Doe&quot;"));
}

#[test]
fn edited_name_survives_closing_the_dialog() {
    let mut s = ViewState::default();
    s.apply(Action::OpenDialog(Dialog::Alter));
    s.apply(Action::SetStudentName("Jane Smith".into()));
    s.apply(Action::CloseDialog(Dialog::Alter));
    assert!(!s.alter_dialog_open);
    assert_eq!(s.student_name, "Jane Smith");

    s.apply(Action::OpenDialog(Dialog::Alter));
    let html = render_page(&s);
    assert!(html.contains(r#"value="Jane Smith""#));
    assert!(html.contains(&format!(r#"id="{}">Jane Smith<"#, ids::PDF_STUDENT_NAME)));
}

#[test]
fn empty_name_is_allowed() {
    let mut s = ViewState::default();
    assert!(s.apply(Action::SetStudentName(String::new())));
    assert_eq!(s.student_name, "");
}

#[test]
fn faq_is_single_open_and_collapsible() {
    let mut s = ViewState::default();
    assert!(s.apply(Action::ToggleFaq(1)));
    assert_eq!(s.open_faq, Some(1));
    assert!(s.apply(Action::ToggleFaq(3)));
    assert_eq!(s.open_faq, Some(3));
    assert!(s.apply(Action::ToggleFaq(3)));
    assert_eq!(s.open_faq, None);
    assert!(!s.apply(Action::ToggleFaq(99)));
    assert_eq!(s.open_faq, None);
}

#[test]
fn actions_parse_from_attribute_text() {
    assert_eq!("open-dialog:alter".parse::<Action>(), Ok(Action::OpenDialog(Dialog::Alter)));
    assert_eq!("close-dialog:verify".parse::<Action>(), Ok(Action::CloseDialog(Dialog::Verify)));
    assert_eq!(" close-dialogs ".parse::<Action>(), Ok(Action::CloseDialogs));
    assert_eq!("toggle-faq:2".parse::<Action>(), Ok(Action::ToggleFaq(2)));
}

#[test]
fn bad_action_text_is_rejected() {
    assert_eq!(
        "open-dialog:wallet".parse::<Action>(),
        Err(ParseActionError::UnknownDialog("wallet".into()))
    );
    assert_eq!(
        "toggle-faq:x".parse::<Action>(),
        Err(ParseActionError::InvalidFaqIndex("x".into()))
    );
    assert_eq!(
        "connect-wallet".parse::<Action>(),
        Err(ParseActionError::UnknownAction("connect-wallet".into()))
    );
    assert!("close-dialogs:alter".parse::<Action>().is_err());
    assert!("open-dialog".parse::<Action>().is_err());
}

#[test]
fn action_text_round_trips() {
    let actions = [
        Action::OpenDialog(Dialog::Alter),
        Action::OpenDialog(Dialog::Verify),
        Action::CloseDialog(Dialog::Alter),
        Action::CloseDialogs,
        Action::ToggleFaq(0),
        Action::SetStudentName("Jane Smith".into()),
        Action::SetStudentName(" a:b ".into()),
        Action::SetStudentName(String::new()),
    ];
    for a in actions {
        let text = a.to_string();
        assert_eq!(text.parse::<Action>().as_ref(), Ok(&a), "{}", text);
    }
    assert_eq!(Action::OpenDialog(Dialog::Verify).to_string(), "open-dialog:verify");
    assert_eq!(Action::ToggleFaq(3).to_string(), "toggle-faq:3");
}

#[test]
fn escape_key_closes_dialogs() {
    assert_eq!(Action::for_key("Escape"), Some(Action::CloseDialogs));
    assert_eq!(Action::for_key("Enter"), None);
    assert_eq!(Action::for_key("e"), None);
}

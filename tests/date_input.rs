//! Date field behaviour: display, typing, blur and owner re-renders

mod common;

use common::{midnight, reference_day, Harness};
use datefield::editable::{MoveTarget, TextEditMsg};
use datefield::field::{BlurEvent, DateInputProps, FieldError, FieldState};
use datefield::mask::mask_shape;

// ========================================================================
// Display State
// ========================================================================

#[test]
fn test_committed_value_is_formatted() {
    let h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    assert_eq!(h.field.state(), FieldState::Display);
    assert_eq!(h.text(), "03-05-2021");
}

#[test]
fn test_no_value_shows_empty_text() {
    let h = Harness::day_first();
    assert_eq!(h.text(), "");
    assert_eq!(h.caret(), 0);
}

#[test]
fn test_each_registry_format_displays_its_layout() {
    let value = midnight(2021, 5, 3);
    let cases = [
        ("dd-LL-yyyy", "03-05-2021"),
        ("LL-dd-yyyy", "05-03-2021"),
        ("yyyy-LL-dd", "2021-05-03"),
        ("HH:mm", "00:00"),
    ];
    for (format, expected) in cases {
        let h = Harness::new(DateInputProps::new(format).with_value(value));
        assert_eq!(h.text(), expected, "format {}", format);
    }
}

#[test]
fn test_render_passes_attributes_through() {
    let props = DateInputProps::default()
        .with_attribute("placeholder", "dd-mm-yyyy")
        .with_attribute("id", "birthday");
    let h = Harness::new(props);
    let view = h.field.render();
    assert_eq!(view.attributes.len(), 2);
    assert_eq!(view.attributes["placeholder"], "dd-mm-yyyy");
    assert_eq!(view.attributes["id"], "birthday");
    assert!(view.keep_char_positions);
    assert_eq!(mask_shape(view.mask.unwrap()), "__-__-____");
}

// ========================================================================
// Typing
// ========================================================================

#[test]
fn test_typing_inserts_separators_and_commits_once() {
    let mut h = Harness::day_first();
    let texts = h.type_text("12052021");
    assert_eq!(
        texts,
        vec![
            "1",
            "12-",
            "12-0",
            "12-05-",
            "12-05-2",
            "12-05-20",
            "12-05-202",
            "12-05-2021"
        ]
    );
    assert_eq!(*h.commits.borrow(), vec![midnight(2021, 5, 12)]);
    assert_eq!(h.field.state(), FieldState::Typing);
}

#[test]
fn test_commit_happens_on_the_final_keystroke() {
    let mut h = Harness::day_first();
    h.type_text("1205202");
    assert_eq!(h.commit_count(), 0);
    h.type_text("1");
    assert_eq!(h.commit_count(), 1);
}

#[test]
fn test_typing_99_never_shows_99() {
    let mut h = Harness::day_first();
    let texts = h.type_text("99");
    assert_eq!(texts, vec!["09-", "09-09-"]);
    assert!(texts.iter().all(|t| !t.starts_with("99")));
}

#[test]
fn test_out_of_range_key_is_dropped() {
    let mut h = Harness::day_first();
    h.type_text("3");
    assert!(!h.field.apply(TextEditMsg::InsertChar('5')));
    assert_eq!(h.text(), "3");
    assert_eq!(h.caret(), 1);
}

#[test]
fn test_letters_are_refused_by_masked_field() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    h.select_all();
    assert!(!h.field.apply(TextEditMsg::InsertChar('a')));
    assert_eq!(h.field.state(), FieldState::Display);
    assert_eq!(h.text(), "03-05-2021");
}

#[test]
fn test_year_first_typing() {
    let mut h = Harness::new(DateInputProps::new("yyyy-LL-dd"));
    let texts = h.type_text("20210229");
    assert_eq!(texts[3], "2021-");
    assert_eq!(texts[5], "2021-02-");
    // Feb 29 passes the mask but not the calendar
    assert_eq!(h.text(), "2021-02-29");
    assert_eq!(h.commit_count(), 0);
}

#[test]
fn test_clock_uses_reference_date() {
    let props = DateInputProps::new("HH:mm").with_reference_date(reference_day());
    let mut h = Harness::new(props);
    assert_eq!(h.type_text("0930").last().unwrap(), "09:30");
    assert_eq!(
        *h.commits.borrow(),
        vec![reference_day().at(9, 30, 0, 0)]
    );
}

#[test]
fn test_typing_into_a_full_field_changes_nothing() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    assert!(!h.field.apply(TextEditMsg::InsertChar('1')));
    assert_eq!(h.field.state(), FieldState::Display);
    assert_eq!(h.commit_count(), 0);
}

// ========================================================================
// Deleting
// ========================================================================

#[test]
fn test_backspace_removes_orphaned_separator() {
    let mut h = Harness::day_first();
    h.type_text("12");
    assert_eq!(h.text(), "12-");

    assert!(h.backspace());
    assert_eq!(h.text(), "12");
    assert_eq!(h.caret(), 2);

    assert!(h.backspace());
    assert_eq!(h.text(), "1");
}

#[test]
fn test_clearing_the_field_keeps_the_value() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    h.select_all();
    assert!(h.backspace());
    assert_eq!(h.text(), "");
    assert_eq!(h.field.state(), FieldState::Typing);
    assert_eq!(h.field.value(), Some(midnight(2021, 5, 3)));

    h.blur();
    assert_eq!(h.text(), "03-05-2021");
}

// ========================================================================
// Editing Inside a Value
// ========================================================================

fn may_12() -> Harness {
    Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 12)))
}

#[test]
fn test_backspace_in_the_middle_blanks_one_cell() {
    let mut h = may_12();
    h.move_caret_to(1);
    assert!(h.backspace());
    assert_eq!(h.text(), "_2-05-2021");
    assert_eq!(h.caret(), 0);
    assert_eq!(h.field.state(), FieldState::Typing);
    assert_eq!(h.commit_count(), 0);

    h.blur();
    assert_eq!(h.text(), "12-05-2021");
}

#[test]
fn test_delete_forward_in_the_middle_blanks_one_cell() {
    let mut h = may_12();
    h.move_caret_to(3);
    assert!(h.delete_forward());
    assert_eq!(h.text(), "12-_5-2021");
    assert_eq!(h.caret(), 3);
    assert_eq!(h.commit_count(), 0);
}

#[test]
fn test_typing_at_the_start_overwrites_digits() {
    let mut h = may_12();
    h.move_caret_to(0);

    // Same digit: nothing changes
    assert!(!h.field.apply(TextEditMsg::InsertChar('1')));
    assert_eq!(h.text(), "12-05-2021");
    assert_eq!(h.field.state(), FieldState::Display);

    assert!(h.field.apply(TextEditMsg::InsertChar('5')));
    assert_eq!(h.text(), "15-05-2021");
    assert_eq!(h.caret(), 3);
    assert_eq!(*h.commits.borrow(), vec![midnight(2021, 5, 15)]);
}

#[test]
fn test_out_of_range_overwrite_is_refused() {
    let mut h = may_12();
    h.move_caret_to(0);
    assert!(!h.field.apply(TextEditMsg::InsertChar('3')));
    assert_eq!(h.text(), "12-05-2021");
    assert_eq!(h.caret(), 0);
    assert_eq!(h.commit_count(), 0);
}

#[test]
fn test_filling_a_blank_commits_the_typed_date() {
    let mut h = may_12();
    h.move_caret_to(1);
    h.backspace();
    assert_eq!(h.text(), "_2-05-2021");

    h.type_text("0");
    assert_eq!(h.text(), "02-05-2021");
    assert_eq!(*h.commits.borrow(), vec![midnight(2021, 5, 2)]);
}

#[test]
fn test_deleting_anywhere_never_commits() {
    for offset in 0..=10 {
        let mut h = may_12();
        h.move_caret_to(offset);
        h.backspace();
        assert_eq!(h.commit_count(), 0, "backspace at {offset}: {}", h.text());

        let mut h = may_12();
        h.move_caret_to(offset);
        h.delete_forward();
        assert_eq!(h.commit_count(), 0, "delete at {offset}: {}", h.text());
    }
}

// ========================================================================
// Paste and Selection
// ========================================================================

#[test]
fn test_paste_is_conformed_and_committed() {
    let mut h = Harness::day_first();
    assert!(h.paste("1205202199"));
    assert_eq!(h.text(), "12-05-2021");
    assert_eq!(h.caret(), 10);
    assert_eq!(*h.commits.borrow(), vec![midnight(2021, 5, 12)]);
}

#[test]
fn test_paste_with_foreign_separator_is_refused() {
    let mut h = Harness::day_first();
    assert!(!h.paste("12/05/2021"));
    assert_eq!(h.text(), "");
    assert_eq!(h.field.state(), FieldState::Display);
}

#[test]
fn test_select_all_then_type_replaces_value() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    h.select_all();
    let texts = h.type_text("150");
    assert_eq!(texts, vec!["1", "15-", "15-0"]);
    assert_eq!(h.commit_count(), 0);
}

#[test]
fn test_caret_moves_do_not_start_typing() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    assert!(!h.field.apply(TextEditMsg::Move(MoveTarget::LineStart)));
    assert!(!h.field.apply(TextEditMsg::Move(MoveTarget::Right)));
    assert_eq!(h.field.state(), FieldState::Display);
    assert_eq!(h.caret(), 1);
}

// ========================================================================
// Blur
// ========================================================================

#[test]
fn test_blur_reverts_to_committed_text() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    h.field.input("15-0");
    assert_eq!(h.text(), "15-0");

    h.blur();
    assert_eq!(h.field.state(), FieldState::Display);
    assert_eq!(h.text(), "03-05-2021");
    assert_eq!(h.field.typed_text(), None);
}

#[test]
fn test_blur_without_value_clears_text() {
    let mut h = Harness::day_first();
    h.type_text("120");
    h.blur();
    assert_eq!(h.text(), "");
}

#[test]
fn test_blur_shows_value_accepted_by_owner() {
    let mut h = Harness::day_first();
    h.type_text("12052021");
    h.accept_latest();
    h.blur();
    assert_eq!(h.text(), "12-05-2021");
    assert_eq!(h.field.value(), Some(midnight(2021, 5, 12)));
}

#[test]
fn test_blur_event_is_forwarded() {
    let mut h = Harness::day_first();
    h.blur();
    h.type_text("1");
    h.field.blur(BlurEvent {
        related_target: Some("submit".to_string()),
    });

    let blurs = h.blurs.borrow();
    assert_eq!(blurs.len(), 2);
    assert_eq!(blurs[1].related_target.as_deref(), Some("submit"));
}

#[test]
fn test_typing_after_blur_starts_from_display_text() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    h.field.input("1");
    h.blur();
    assert!(h.backspace());
    assert_eq!(h.text(), "03-05-202");
}

// ========================================================================
// Owner Re-renders
// ========================================================================

#[test]
fn test_new_value_shows_in_display_state() {
    let mut h = Harness::day_first();
    h.field
        .set_props(DateInputProps::default().with_value(midnight(2022, 1, 31)))
        .unwrap();
    assert_eq!(h.text(), "31-01-2022");
}

#[test]
fn test_typed_text_outranks_new_value() {
    let mut h = Harness::day_first();
    h.type_text("1");
    h.field.set_value(Some(midnight(2022, 1, 31)));
    assert_eq!(h.text(), "1");

    h.blur();
    assert_eq!(h.text(), "31-01-2022");
}

#[test]
fn test_format_change_is_refused() {
    let mut h = Harness::new(DateInputProps::default().with_value(midnight(2021, 5, 3)));
    let err = h
        .field
        .set_props(DateInputProps::new("yyyy-LL-dd"))
        .unwrap_err();
    assert_eq!(
        err,
        FieldError::FormatChanged {
            from: "dd-LL-yyyy".to_string(),
            to: "yyyy-LL-dd".to_string(),
        }
    );
    assert_eq!(h.field.format(), "dd-LL-yyyy");
    assert_eq!(h.text(), "03-05-2021");
}

// ========================================================================
// Unsupported Formats
// ========================================================================

#[test]
fn test_unsupported_format_is_plain_text() {
    let mut h = Harness::new(DateInputProps::new("dd/LL/yyyy"));
    assert!(!h.field.is_masked());
    assert!(h.field.render().mask.is_none());

    let texts = h.type_text("12/05/2021");
    assert_eq!(texts[2], "12/");
    assert_eq!(h.text(), "12/05/2021");
    assert_eq!(*h.commits.borrow(), vec![midnight(2021, 5, 12)]);
}

#[test]
fn test_unsupported_format_accepts_any_printable_text() {
    let mut h = Harness::new(DateInputProps::new("dd/LL/yyyy"));
    h.type_text("soon!");
    assert_eq!(h.text(), "soon!");
    assert_eq!(h.commit_count(), 0);
}

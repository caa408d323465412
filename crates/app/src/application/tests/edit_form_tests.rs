//! Edit form toggling through the delegated click listener.

use std::rc::Rc;

use todoform_adapters::infrastructure::testing::FakeElement;
use todoform_domain::{TodoId, Visibility};

use super::TodoPage;

#[test]
fn edit_button_toggles_unset_form_block_then_none() {
    let page = TodoPage::new();
    let (button, form) = page.add_row("7", "");
    let _controller = page.attach();

    button.click();
    assert_eq!(form.display(), "block");

    button.click();
    assert_eq!(form.display(), "none");
}

#[test]
fn toggle_has_period_two_for_every_item() {
    let page = TodoPage::new();
    let rows: Vec<_> = ["1", "abc", "x-9", "42"]
        .iter()
        .map(|id| page.add_row(id, "none"))
        .collect();
    let _controller = page.attach();

    for (button, form) in &rows {
        button.click();
        assert_eq!(form.display(), "block");
        button.click();
        assert_eq!(form.display(), "none");
    }
}

#[test]
fn rows_toggle_independently() {
    let page = TodoPage::new();
    let (first_button, first_form) = page.add_row("1", "none");
    let (_, second_form) = page.add_row("2", "none");
    let _controller = page.attach();

    first_button.click();

    assert_eq!(first_form.display(), "block");
    assert_eq!(second_form.display(), "none");
    assert_eq!(second_form.display_writes(), 0);
}

#[test]
fn visible_non_block_display_toggles_to_none() {
    let page = TodoPage::new();
    let (button, form) = page.add_row("3", "flex");
    let _controller = page.attach();

    button.click();

    assert_eq!(form.display(), "none");
}

#[test]
fn clicks_on_unmarked_elements_change_nothing() {
    let page = TodoPage::new();
    let (_, form) = page.add_row("1", "none");
    let plain = FakeElement::new()
        .with_class("btn")
        .with_attribute("data-todo-id", "1");
    page.root.append_child(&plain);
    let _controller = page.attach();

    plain.click();
    page.root.click();
    form.click();

    assert_eq!(form.display(), "none");
    assert_eq!(form.display_writes(), 0);
}

#[test]
fn edit_button_for_unknown_item_is_silent() {
    let page = TodoPage::new();
    let (_, form) = page.add_row("1", "none");
    let orphan = FakeElement::new()
        .with_class("edit-button")
        .with_attribute("data-todo-id", "999");
    page.root.append_child(&orphan);
    let controller = page.attach();

    orphan.click();
    controller.toggle_edit_form("999");
    controller.toggle_edit_form("");

    assert_eq!(form.display_writes(), 0);
}

#[test]
fn edit_button_without_item_id_is_ignored() {
    let page = TodoPage::new();
    let (_, form) = page.add_row("1", "none");
    let bare = FakeElement::new().with_class("edit-button");
    page.root.append_child(&bare);
    let _controller = page.attach();

    bare.click();

    assert_eq!(form.display_writes(), 0);
}

#[test]
fn nested_click_inside_edit_button_is_not_a_trigger() {
    let page = TodoPage::new();
    let (button, form) = page.add_row("1", "none");
    let icon = FakeElement::new().with_class("icon");
    button.append_child(&icon);
    let _controller = page.attach();

    icon.click();

    assert_eq!(form.display_writes(), 0);
}

#[test]
fn rows_added_after_attach_are_handled() {
    let page = TodoPage::new();
    let controller = page.attach();

    let (button, form) = page.add_row("late", "none");
    button.click();

    assert_eq!(form.display(), "block");
    assert_eq!(controller.registered_forms(), 0);
}

#[test]
fn rerendered_form_is_toggled_instead_of_detached_one() {
    let page = TodoPage::new();
    let (button, old_form) = page.add_row("5", "none");
    let _controller = page.attach();

    button.click();
    assert_eq!(old_form.display(), "block");

    // Re-render the row's form under the same id.
    let row = old_form.parent().expect("form sits in a row");
    old_form.remove();
    let new_form = FakeElement::new()
        .with_id("update-form-5")
        .with_display("none");
    row.append_child(&new_form);

    button.click();

    assert_eq!(new_form.display(), "block");
    assert_eq!(old_form.display(), "block");
    assert_eq!(old_form.display_writes(), 1);
}

#[test]
fn earliest_duplicate_in_document_wins_even_outside_root() {
    let page = TodoPage::new();
    let outside = FakeElement::new()
        .with_id("update-form-8")
        .with_display("none");
    page.doc.body().append_child(&outside);
    // Move the root after the outside form.
    page.root.remove();
    page.doc.body().append_child(&page.root);
    let (button, inside) = page.add_row("8", "none");
    let _controller = page.attach();

    button.click();

    assert_eq!(outside.display(), "block");
    assert_eq!(inside.display_writes(), 0);
}

#[test]
fn registered_form_takes_precedence_over_convention() {
    let page = TodoPage::new();
    let controller = page.attach();

    let button = FakeElement::new()
        .with_class("edit-button")
        .with_attribute("data-todo-id", "r1");
    let custom_form = FakeElement::new().with_id("row-r1-editor");
    page.root.append_child(&button);
    page.root.append_child(&custom_form);

    controller.register_edit_form(TodoId::new("r1").expect("id"), Rc::new(custom_form.clone()));
    button.click();

    assert_eq!(custom_form.display(), "block");
    assert_eq!(controller.registered_forms(), 1);
    assert_eq!(
        controller.edit_form_visibility(&TodoId::new("r1").expect("id")),
        Some(Visibility::Visible)
    );
}

#[test]
fn forgotten_form_falls_back_to_document_lookup() {
    let page = TodoPage::new();
    let (button, conventional) = page.add_row("5", "none");
    let registered = FakeElement::new().with_id("row-5-editor");
    page.root.append_child(&registered);
    let controller = page.attach();
    let id = TodoId::new("5").expect("id");
    controller.register_edit_form(id.clone(), Rc::new(registered.clone()));

    button.click();
    assert_eq!(registered.display(), "block");
    assert_eq!(conventional.display_writes(), 0);

    assert!(controller.forget_edit_form(&id).is_some());
    button.click();

    assert_eq!(conventional.display(), "block");
    assert_eq!(registered.display_writes(), 1);
}

#[test]
fn removed_form_is_silently_skipped() {
    let page = TodoPage::new();
    let (button, form) = page.add_row("6", "none");
    let controller = page.attach();

    form.remove();
    button.click();

    assert_eq!(form.display_writes(), 0);
    assert_eq!(
        controller.edit_form_visibility(&TodoId::new("6").expect("id")),
        None
    );
}

#[test]
fn custom_markup_contract_is_honored() {
    let page = TodoPage::new();
    let button = FakeElement::new()
        .with_class("js-edit")
        .with_attribute("data-item", "q");
    let form = FakeElement::new().with_id("editor-q");
    page.root.append_child(&button);
    page.root.append_child(&form);

    let _controller = page.attach_with(todoform_ports::ControllerConfig {
        edit_trigger_class: "js-edit".to_string(),
        todo_id_attribute: "data-item".to_string(),
        edit_form_id_prefix: "editor-".to_string(),
        ..Default::default()
    });

    button.click();

    assert_eq!(form.display(), "block");
}

#[test]
fn edit_toggling_outlives_dropped_handle() {
    let page = TodoPage::new();
    let (button, form) = page.add_row("1", "none");
    drop(page.attach());

    button.click();
    assert_eq!(form.display(), "block");

    button.click();
    assert_eq!(form.display(), "none");
}

use crate::core::{actions_for_keydown, ViewAction, ViewState};
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Update the hint overlay after a view change
fn update_hint_after_change(view: &Rc<RefCell<ViewState>>) {
    if let Some(document) = dom::window_document() {
        let (name, animating) = {
            let v = view.borrow();
            (v.environment().name, v.animate())
        };
        overlay::update_hint(&document, name, animating);
    }
}

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    view: &Rc<RefCell<ViewState>>,
    canvas: &web::HtmlCanvasElement,
) {
    let key = ev.key();
    let target_is_input = ev
        .target()
        .is_some_and(|t| t.dyn_ref::<web::HtmlInputElement>().is_some());
    let actions = actions_for_keydown(&key, target_is_input);
    if !actions.is_empty() {
        let mut changed = false;
        {
            let mut v = view.borrow_mut();
            for action in &actions {
                changed |= v.apply(*action);
            }
            match actions[0] {
                ViewAction::ToggleAnimation => {
                    log::info!(
                        "[keys] animate={} auto_rotate={}",
                        v.animate(),
                        v.controls.auto_rotate
                    );
                }
                ViewAction::NextEnvironment | ViewAction::PreviousEnvironment => {
                    log::info!(
                        "[env] index={} name={}",
                        v.environment_index(),
                        v.environment().name
                    );
                }
                ViewAction::RandomizeColor | ViewAction::ResetColor => {
                    log::info!("[keys] blob color={:?}", v.blob_color());
                }
            }
        }
        if changed {
            update_hint_after_change(view);
        }
        // Space and arrows would otherwise scroll the page
        ev.prevent_default();
        return;
    }
    if target_is_input {
        return;
    }
    match key.as_str() {
        "f" | "F" | "Enter" => {
            dom::toggle_fullscreen(canvas);
            ev.prevent_default();
        }
        "Escape" => dom::exit_fullscreen(),
        "g" | "G" => {
            if let Some(doc) = dom::window_document() {
                overlay::toggle_panel(&doc);
            }
        }
        _ => {}
    }
}

// Wire an 'H' key handler to toggle the help overlay
pub fn wire_help_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if key == "h" || key == "H" {
                overlay::toggle_help(&doc);
                ev.prevent_default();
            }
        });
    }
}

pub fn wire_global_keydown(view: Rc<RefCell<ViewState>>, canvas: web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &view, &canvas);
        });
    }
}

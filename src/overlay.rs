use crate::core::{ViewState, DISTANCE_STEP, MAX_DISTANCE, MIN_DISTANCE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const HELP_ID: &str = "help-overlay";
const HINT_ID: &str = "hint-overlay";
const PANEL_ID: &str = "debug-panel";
const DISTANCE_INPUT_ID: &str = "camera-distance";
const DISTANCE_READOUT_ID: &str = "camera-distance-value";

#[inline]
fn show(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
    // fallback for environments without CSS class
    _ = el.set_attribute("style", "");
}

#[inline]
fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    // fallback
    _ = el.set_attribute("style", "display:none");
}

#[inline]
fn is_hidden(el: &web::Element) -> bool {
    el.class_list().contains("hidden")
        || el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
}

#[inline]
fn toggle_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        if is_hidden(&el) {
            show(&el);
        } else {
            hide(&el);
        }
    }
}

/// Show or hide the key-binding help.
pub fn toggle_help(document: &web::Document) {
    toggle_by_id(document, HELP_ID);
}

/// Show or hide the debug panel.
pub fn toggle_panel(document: &web::Document) {
    toggle_by_id(document, PANEL_ID);
}

/// Update the hint overlay with the current environment and animation state
pub fn update_hint(document: &web::Document, env_name: &str, animating: bool) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let anim_text = if animating { "Animating" } else { "Paused" };
        let hint_html = format!(
            "<div style='color: #e8e8e8; font: 13px system-ui; background: rgba(20, 20, 20, 0.75); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(120, 120, 120, 0.35);'>Environment: {} • {}</div>",
            env_name, anim_text
        );
        el.set_inner_html(&hint_html);
        _ = el.set_attribute("style", "");
    }
}

fn distance_input(document: &web::Document) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(DISTANCE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

fn set_readout(document: &web::Document, distance: f32) {
    if let Some(el) = document.get_element_by_id(DISTANCE_READOUT_ID) {
        el.set_text_content(Some(&format!("{:.1}", distance)));
    }
}

/// Reflect a distance changed elsewhere (wheel zoom) into the panel.
pub fn sync_panel_distance(document: &web::Document, distance: f32) {
    if let Some(input) = distance_input(document) {
        input.set_value(&format!("{:.1}", distance));
    }
    set_readout(document, distance);
}

/// Build the debug panel: a single camera distance slider bound to the view.
/// The panel starts collapsed.
pub fn mount_debug_panel(document: &web::Document, view: Rc<RefCell<ViewState>>) {
    let Some(panel) = document.get_element_by_id(PANEL_ID) else {
        log::warn!("[panel] missing #{}", PANEL_ID);
        return;
    };
    let distance = view.borrow().camera_distance();
    panel.set_inner_html(&format!(
        "<label style='color: #e8e8e8; font: 12px system-ui;'>Camera distance \
         <input id='{DISTANCE_INPUT_ID}' type='range' min='{MIN_DISTANCE}' max='{MAX_DISTANCE}' step='{DISTANCE_STEP}' value='{distance:.1}'> \
         <span id='{DISTANCE_READOUT_ID}'>{distance:.1}</span></label>"
    ));
    hide(&panel);

    let Some(input) = distance_input(document) else {
        return;
    };
    let doc = document.clone();
    let input_for_handler = input.clone();
    crate::dom::add_listener(&input, "input", move |_ev: web::Event| {
        let Ok(requested) = input_for_handler.value().parse::<f32>() else {
            return;
        };
        let applied = view.borrow_mut().set_camera_distance(requested);
        set_readout(&doc, applied);
        log::debug!("[panel] camera distance={:.1}", applied);
    });
}

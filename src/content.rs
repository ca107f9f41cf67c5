/// Selection Overlay Controller: per-page event wiring

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, MouseEvent, Node, Selection, Window};
use yew::Callback;

use crate::browser;
use crate::geometry::Rect;
use crate::selection::{ReleaseAction, SelectionTracker};
use crate::ui::overlay::{OverlayHandle, PopoverLabels};

/// One controller per page load. Exclusively owns the popover element: the
/// handle exists exactly while the tracker holds captured text.
struct Controller {
    tracker: SelectionTracker,
    overlay: Option<OverlayHandle>,
}

impl Controller {
    fn new() -> Controller {
        Controller {
            tracker: SelectionTracker::new(),
            overlay: None,
        }
    }

    fn owns(&self, node: &Node) -> bool {
        self.overlay
            .as_ref()
            .is_some_and(|overlay| overlay.contains(node))
    }

    fn dismiss(&mut self) {
        self.tracker.dismiss();
        if let Some(overlay) = self.overlay.take() {
            overlay.destroy();
        }
    }
}

/// Install the controller on the current page.
///
/// The listeners are leaked: they live until the page itself goes away.
pub fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let controller = Rc::new(RefCell::new(Controller::new()));

    // Check for a fresh selection when the mouse button is released
    {
        let controller = controller.clone();
        let window = window.clone();
        let document_for_handler = document.clone();
        let on_mouseup = Closure::wrap(Box::new(move |event: MouseEvent| {
            handle_pointer_release(&controller, &window, &document_for_handler, &event);
        }) as Box<dyn FnMut(MouseEvent)>);
        document
            .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref())?;
        on_mouseup.forget();
    }

    // Any of these may leave the anchor rectangle stale, so they all dismiss
    for event in ["scroll", "visibilitychange", "keydown"] {
        register_dismissal(document.as_ref(), event, &controller)?;
    }
    register_dismissal(window.as_ref(), "resize", &controller)?;

    log::debug!("selection overlay controller installed");
    Ok(())
}

fn register_dismissal(
    target: &EventTarget,
    event: &str,
    controller: &Rc<RefCell<Controller>>,
) -> Result<(), JsValue> {
    let controller = controller.clone();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        controller.borrow_mut().dismiss();
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn handle_pointer_release(
    controller: &Rc<RefCell<Controller>>,
    window: &Window,
    document: &Document,
    event: &MouseEvent,
) {
    // Shadow retargeting resolves releases inside the popover to its host
    let inside = event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok())
        .map(|node| controller.borrow().owns(&node))
        .unwrap_or(false);

    let selection = window.get_selection().ok().flatten();
    let raw = selection
        .as_ref()
        .map(|selection| String::from(js_sys::Object::to_string(selection.as_ref())))
        .unwrap_or_default();

    let action = controller
        .borrow_mut()
        .tracker
        .on_pointer_release(inside, &raw);

    match action {
        ReleaseAction::Ignore => {}
        ReleaseAction::Dismiss => controller.borrow_mut().dismiss(),
        ReleaseAction::Show => {
            let anchor = selection.as_ref().and_then(selection_anchor);
            let mut ctrl = controller.borrow_mut();
            if let Some(overlay) = ctrl.overlay.take() {
                overlay.destroy();
            }
            match anchor {
                Some(anchor) => match build_overlay(controller, document, anchor) {
                    Ok(overlay) => ctrl.overlay = Some(overlay),
                    Err(err) => {
                        log::error!("failed to build popover: {err:?}");
                        ctrl.tracker.dismiss();
                    }
                },
                // No range to anchor on; keep overlay and text in lockstep
                None => ctrl.tracker.dismiss(),
            }
        }
    }
}

/// Bounding rectangle of the selection's first range, in viewport
/// coordinates.
fn selection_anchor(selection: &Selection) -> Option<Rect> {
    if selection.range_count() == 0 {
        return None;
    }
    let rect = selection.get_range_at(0).ok()?.get_bounding_client_rect();
    Some(Rect::new(rect.top(), rect.left(), rect.width(), rect.height()))
}

fn build_overlay(
    controller: &Rc<RefCell<Controller>>,
    document: &Document,
    anchor: Rect,
) -> Result<OverlayHandle, JsValue> {
    // Search leaves the popover up; dismissal happens on the next
    // qualifying release elsewhere
    let on_search = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let query = controller.borrow().tracker.text().to_string();
            browser::send_search(&query);
        })
    };

    // Copy tears the popover down on its own
    let on_copy = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let text = controller.borrow().tracker.text().to_string();
            browser::write_clipboard(&text);
            controller.borrow_mut().dismiss();
        })
    };

    OverlayHandle::create(document, anchor, labels(), on_search, on_copy)
}

fn labels() -> PopoverLabels {
    PopoverLabels {
        search: browser::localized("search").unwrap_or_else(|| "Search".to_string()),
        copy: browser::localized("copy").unwrap_or_else(|| "Copy".to_string()),
    }
}

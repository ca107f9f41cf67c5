/// Floating popover rendered over the current text selection

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, ShadowRootInit, ShadowRootMode};
use yew::prelude::*;
use yew::AppHandle;

use crate::geometry::{self, Placement, Rect, Size, Viewport};

/// Host element styles. The host sits at the document origin, so absolute
/// coordinates inside the shadow tree are document coordinates.
const HOST_STYLE: &str = "position: absolute; top: 0; left: 0; z-index: 99999;";

/// Stylesheet installed inside the shadow root. The shadow boundary keeps
/// page styles out and these rules in.
const POPOVER_CSS: &str = r#"
.popover {
    position: absolute;
    display: block;
    white-space: nowrap;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    font-size: 14px;
    padding: 2px;
    border-radius: 5px;
    background-color: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(2px);
    box-shadow: 2px 11px 10px -6px rgba(0, 0, 0, 0.5);
    color: rgb(255, 255, 255);
}
.action {
    display: inline-block;
    cursor: pointer;
    padding: 4px;
    border-radius: 5px;
}
.action:hover {
    background-color: rgba(255, 255, 255, 0.25);
}
.divider {
    margin-left: 4px;
    margin-right: 4px;
    border-left: 1px solid rgba(255, 255, 255, 0.25);
}
"#;

/// Button labels, already localized.
#[derive(Debug, Clone, PartialEq)]
pub struct PopoverLabels {
    pub search: String,
    pub copy: String,
}

#[derive(Properties, PartialEq)]
pub struct PopoverProps {
    pub anchor: Rect,
    pub labels: PopoverLabels,
    pub on_search: Callback<()>,
    pub on_copy: Callback<()>,
}

#[function_component(Popover)]
pub fn popover(props: &PopoverProps) -> Html {
    let root = use_node_ref();
    let placement = use_state(|| None::<Placement>);

    // Two-pass placement: render hidden, measure, then position. The anchor
    // never changes for a mounted popover, so this runs once per mount.
    {
        let root = root.clone();
        let placement = placement.clone();
        let anchor = props.anchor;
        use_effect_with(anchor, move |_| {
            if let (Some(element), Some(viewport)) =
                (root.cast::<HtmlElement>(), capture_viewport())
            {
                let size = Size {
                    width: f64::from(element.offset_width()),
                    height: f64::from(element.offset_height()),
                };
                placement.set(Some(geometry::place_popover(&anchor, size, &viewport)));
            }
            || ()
        });
    }

    let style = match *placement {
        Some(at) => format!("top: {}px; left: {}px;", at.top, at.left),
        None => "visibility: hidden; top: 0px; left: 0px;".to_string(),
    };

    let on_search = {
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(()))
    };
    let on_copy = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(()))
    };

    html! {
        <div ref={root} class="popover" style={style}>
            <span class="action" onclick={on_search}>{ props.labels.search.clone() }</span>
            <span class="divider"></span>
            <span class="action" onclick={on_copy}>{ props.labels.copy.clone() }</span>
        </div>
    }
}

fn capture_viewport() -> Option<Viewport> {
    let window = web_sys::window()?;
    Some(Viewport {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
        scroll_x: window.scroll_x().ok()?,
        scroll_y: window.scroll_y().ok()?,
    })
}

/// Owning handle for a mounted popover. The controller holds at most one.
pub struct OverlayHandle {
    host: HtmlElement,
    app: AppHandle<Popover>,
}

impl OverlayHandle {
    /// Build the shadow-isolated popover and mount it on `document.body`.
    pub fn create(
        document: &Document,
        anchor: Rect,
        labels: PopoverLabels,
        on_search: Callback<()>,
        on_copy: Callback<()>,
    ) -> Result<OverlayHandle, JsValue> {
        let host: HtmlElement = document.create_element("div")?.dyn_into()?;
        host.set_attribute("style", HOST_STYLE)?;

        let shadow = host.attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;

        let style = document.create_element("style")?;
        style.set_text_content(Some(POPOVER_CSS));
        shadow.append_child(&style)?;

        let mount: Element = document.create_element("div")?;
        shadow.append_child(&mount)?;

        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&host)?;

        let props = PopoverProps {
            anchor,
            labels,
            on_search,
            on_copy,
        };
        let app = yew::Renderer::<Popover>::with_root_and_props(mount, props).render();

        Ok(OverlayHandle { host, app })
    }

    /// True when `node` lives inside the popover. Shadow retargeting makes
    /// document-level listeners see inner targets as the host itself.
    pub fn contains(&self, node: &Node) -> bool {
        self.host.contains(Some(node))
    }

    /// Unmount the component and drop the host from the document.
    pub fn destroy(self) {
        self.app.destroy();
        self.host.remove();
    }
}

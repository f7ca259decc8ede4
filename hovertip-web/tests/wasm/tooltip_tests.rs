#![cfg(target_arch = "wasm32")]

use hovertip_core::TriggerEvent;
use hovertip_web::components::{Popover, PopoverContent, PopoverProps, Tooltip};
use hovertip_web::dom;
use hovertip_web::TooltipOptions;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_test::*;
use web_sys::{
    Element, EventTarget, FocusEvent, FocusEventInit, KeyboardEvent, KeyboardEventInit,
    MouseEvent, MouseEventInit,
};
use yew::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Fixture)]
fn fixture() -> Html {
    html! {
        <Tooltip id={AttrValue::from("fixture")} content={html! { <>{ "Hi" }</> }}>
            { "Hover me" }
        </Tooltip>
    }
}

#[function_component(DelayedFixture)]
fn delayed_fixture() -> Html {
    html! {
        <Tooltip
            id={AttrValue::from("delayed")}
            content={html! { <>{ "Later" }</> }}
            options={TooltipOptions::default().with_delay(50, 0)}
        >
            { "Wait for it" }
        </Tooltip>
    }
}

fn mount<C>() -> Element
where
    C: BaseComponent,
    C::Properties: Default,
{
    let doc = dom::document().expect("document available");
    let root = doc.create_element("div").expect("create root");
    doc.body().expect("body").append_child(&root).expect("attach root");
    yew::Renderer::<C>::with_root(root.clone()).render();
    root
}

fn dispatch_mouse(el: &Element, kind: &str) {
    let init = MouseEventInit::new();
    init.set_bubbles(false);
    let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("mouse event");
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

fn dispatch_focus(el: &Element, kind: &str, related: Option<&Element>) {
    let init = FocusEventInit::new();
    init.set_bubbles(true);
    let related: Option<EventTarget> = related.map(|el| el.clone().into());
    init.set_related_target(related.as_ref());
    let event = FocusEvent::new_with_focus_event_init_dict(kind, &init).expect("focus event");
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

fn click(el: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("click event");
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

fn dispatch_key(el: &Element, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    let target: EventTarget = el.clone().into();
    let _ = target.dispatch_event(&event);
}

fn host(root: &Element) -> Element {
    root.query_selector(".hovertip-host")
        .expect("query host")
        .expect("host rendered")
}

fn popper_hidden(root: &Element) -> bool {
    root.query_selector("[role='tooltip']")
        .expect("query popper")
        .expect("popper rendered")
        .get_attribute("aria-hidden")
        .as_deref()
        == Some("true")
}

#[wasm_bindgen_test]
async fn hover_shows_and_leave_hides() {
    let root = mount::<Fixture>();
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root));

    dispatch_mouse(&host(&root), "mouseenter");
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root));
    assert_eq!(
        host(&root).get_attribute("aria-describedby").as_deref(),
        Some("fixture-tooltip")
    );

    dispatch_mouse(&host(&root), "mouseleave");
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root));
}

#[wasm_bindgen_test]
async fn escape_dismisses_open_tooltip() {
    let root = mount::<Fixture>();
    dom::sleep_ms(0).await.expect("render tick");
    dispatch_mouse(&host(&root), "mouseenter");
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root));

    dispatch_key(&host(&root), "Escape");
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root));
}

#[wasm_bindgen_test]
async fn show_delay_is_honored() {
    let root = mount::<DelayedFixture>();
    dom::sleep_ms(0).await.expect("render tick");
    dispatch_mouse(&host(&root), "mouseenter");
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root), "panel should wait for the delay");

    dom::sleep_ms(120).await.expect("delay elapsed");
    assert!(!popper_hidden(&root));
}

/// Show and hide counts reported through the popover callbacks.
#[derive(Clone, Default)]
struct Counts {
    shows: Rc<Cell<u32>>,
    hides: Rc<Cell<u32>>,
}

impl Counts {
    fn get(&self) -> (u32, u32) {
        (self.shows.get(), self.hides.get())
    }
}

fn popover_props(trigger: TriggerEvent, options: TooltipOptions, counts: &Counts) -> PopoverProps {
    let shows = Rc::clone(&counts.shows);
    let hides = Rc::clone(&counts.hides);
    PopoverProps {
        trigger,
        content: PopoverContent::Rich(html! { <a href="#more" class="more">{ "More" }</a> }),
        options,
        id: None,
        style: None,
        aria_label: None,
        on_show: Callback::from(move |()| shows.set(shows.get() + 1)),
        on_hide: Callback::from(move |()| hides.set(hides.get() + 1)),
        children: Children::new(vec![html! { <button class="reference">{ "Ref" }</button> }]),
    }
}

fn mount_popover(props: PopoverProps) -> (Element, yew::AppHandle<Popover>) {
    let doc = dom::document().expect("document available");
    let root = doc.create_element("div").expect("create root");
    doc.body().expect("body").append_child(&root).expect("attach root");
    let handle = yew::Renderer::<Popover>::with_root_and_props(root.clone(), props).render();
    (root, handle)
}

fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} rendered"))
}

#[wasm_bindgen_test]
async fn hover_reports_show_and_hide_once() {
    let counts = Counts::default();
    let (root, _app) = mount_popover(popover_props(
        TriggerEvent::MouseEnter,
        TooltipOptions::default(),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");
    assert_eq!(counts.get(), (0, 0));

    dispatch_mouse(&host(&root), "mouseenter");
    dom::sleep_ms(0).await.expect("render tick");
    assert_eq!(counts.get(), (1, 0));

    dispatch_mouse(&host(&root), "mouseleave");
    dom::sleep_ms(0).await.expect("render tick");
    assert_eq!(counts.get(), (1, 1));
}

#[wasm_bindgen_test]
async fn focus_moving_into_panel_keeps_it_open() {
    let counts = Counts::default();
    let (root, _app) = mount_popover(popover_props(
        TriggerEvent::Focus,
        TooltipOptions::default(),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");
    let reference = find(&root, ".reference");
    let link = find(&root, ".more");

    dispatch_focus(&reference, "focusin", None);
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root));

    dispatch_focus(&reference, "focusout", Some(&link));
    dispatch_focus(&link, "focusin", Some(&reference));
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root));
    assert_eq!(counts.get(), (1, 0));

    dispatch_focus(&link, "focusout", None);
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root));
    assert_eq!(counts.get(), (1, 1));
}

#[wasm_bindgen_test]
async fn click_toggles_and_clicks_inside_panel_do_not() {
    let counts = Counts::default();
    let (root, _app) = mount_popover(popover_props(
        TriggerEvent::Click,
        TooltipOptions::default(),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");
    let reference = find(&root, ".reference");

    click(&reference);
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root));

    click(&find(&root, ".more"));
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root), "panel clicks keep it open");

    click(&reference);
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root));
    assert_eq!(counts.get(), (1, 1));
}

#[wasm_bindgen_test]
async fn reentering_during_hide_delay_keeps_panel() {
    let counts = Counts::default();
    let (root, _app) = mount_popover(popover_props(
        TriggerEvent::MouseEnter,
        TooltipOptions::default().with_delay(0, 60),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");

    dispatch_mouse(&host(&root), "mouseenter");
    dom::sleep_ms(0).await.expect("render tick");
    dispatch_mouse(&host(&root), "mouseleave");
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root), "hide waits for the delay");

    dispatch_mouse(&host(&root), "mouseenter");
    dom::sleep_ms(120).await.expect("delay elapsed");
    assert!(!popper_hidden(&root), "stale hide timer is ignored");
    assert_eq!(counts.get(), (1, 0));

    dispatch_mouse(&host(&root), "mouseleave");
    dom::sleep_ms(120).await.expect("delay elapsed");
    assert!(popper_hidden(&root));
    assert_eq!(counts.get(), (1, 1));
}

#[wasm_bindgen_test]
async fn disabled_hover_does_not_show_after_reenable() {
    let counts = Counts::default();
    let (root, mut app) = mount_popover(popover_props(
        TriggerEvent::MouseEnter,
        TooltipOptions::default().with_disabled(true),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");

    dispatch_mouse(&host(&root), "mouseenter");
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root));
    assert_eq!(counts.get(), (0, 0));

    app.update(popover_props(
        TriggerEvent::MouseEnter,
        TooltipOptions::default(),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root), "re-enabling alone does not show");
    assert_eq!(counts.get(), (0, 0));
}

#[wasm_bindgen_test]
async fn controlled_open_reports_show_on_mount_and_hide_on_close() {
    let counts = Counts::default();
    let (root, mut app) = mount_popover(popover_props(
        TriggerEvent::Manual,
        TooltipOptions::default().with_open(Some(true)),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");
    assert!(!popper_hidden(&root));
    assert_eq!(counts.get(), (1, 0));

    dispatch_mouse(&host(&root), "mouseenter");
    app.update(popover_props(
        TriggerEvent::Manual,
        TooltipOptions::default().with_open(Some(false)),
        &counts,
    ));
    dom::sleep_ms(0).await.expect("render tick");
    assert!(popper_hidden(&root));
    assert_eq!(counts.get(), (1, 1));
}

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use yellow_core::{SiteConfig, Theme};
use yellow_web::{bindings, dom, mount_with, parse_options, progress, theme_toggle};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_element(tag: &str, id: &str) -> HtmlElement {
    use wasm_bindgen::JsCast;

    let doc = dom::document().expect("document");
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.remove();
    }
    let el = doc.create_element(tag).expect("create element");
    el.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&el)
        .expect("append element");
    el.dyn_into::<HtmlElement>().expect("html element")
}

fn config(suffix: &str) -> SiteConfig {
    SiteConfig {
        progress_id: format!("progress-{suffix}"),
        toggle_id: format!("toggle-{suffix}"),
        storage_key: format!("yellow.test.{suffix}"),
        theme_attribute: format!("data-theme-{suffix}"),
        ..SiteConfig::default()
    }
}

fn root_attr(name: &str) -> Option<String> {
    dom::root_element().expect("root element").get_attribute(name)
}

fn stored(key: &str) -> Option<String> {
    dom::local_storage()
        .expect("localStorage")
        .get_item(key)
        .expect("read localStorage")
}

#[wasm_bindgen_test]
fn missing_elements_leave_page_untouched() {
    let cfg = config("absent");
    let _ = dom::local_storage().expect("localStorage").remove_item(&cfg.storage_key);

    let mounted = mount_with(&cfg);
    assert!(!mounted.progress);
    assert_eq!(mounted.theme, None);
    assert_eq!(root_attr(&cfg.theme_attribute), None);
    assert_eq!(stored(&cfg.storage_key), None);
}

#[wasm_bindgen_test]
fn progress_width_tracks_scroll_position() {
    let cfg = config("scroll");
    let spacer = ensure_element("div", "scroll-spacer");
    spacer
        .style()
        .set_property("height", "6000px")
        .expect("spacer height");
    let bar = ensure_element("div", &cfg.progress_id);

    assert!(progress::install(&cfg).expect("install progress"));
    let width = bar.style().get_property_value("width").expect("width");
    assert!(width.ends_with('%'), "unexpected width {width:?}");

    let win = dom::window().expect("window");
    let root = dom::root_element().expect("root");
    win.scroll_to_with_x_and_y(0.0, 0.0);
    progress::update(&win, &root, &bar);
    assert_eq!(
        bar.style().get_property_value("width").expect("width"),
        "0%"
    );

    win.scroll_to_with_x_and_y(0.0, 300.0);
    progress::update(&win, &root, &bar);
    let metrics = progress::read_metrics(&win, &root);
    assert!(metrics.percent() > 0.0);
    assert_eq!(
        bar.style().get_property_value("width").expect("width"),
        metrics.width_style()
    );

    win.scroll_to_with_x_and_y(0.0, 0.0);
    spacer.remove();
    bar.remove();
}

#[wasm_bindgen_test]
fn stored_light_preference_applies_and_clicks_flip() {
    let cfg = config("stored");
    dom::local_storage()
        .expect("localStorage")
        .set_item(&cfg.storage_key, "light")
        .expect("seed preference");
    let control = ensure_element("button", &cfg.toggle_id);

    let initial = theme_toggle::install(&cfg).expect("install toggle");
    assert_eq!(initial, Some(Theme::Light));
    assert_eq!(root_attr(&cfg.theme_attribute).as_deref(), Some("light"));
    assert_eq!(control.get_attribute("aria-pressed").as_deref(), Some("false"));

    control.click();
    assert_eq!(root_attr(&cfg.theme_attribute).as_deref(), Some("dark"));
    assert_eq!(stored(&cfg.storage_key).as_deref(), Some("dark"));
    assert_eq!(control.get_attribute("aria-pressed").as_deref(), Some("true"));

    control.click();
    assert_eq!(root_attr(&cfg.theme_attribute).as_deref(), Some("light"));
    assert_eq!(stored(&cfg.storage_key).as_deref(), Some("light"));
    control.remove();
}

#[wasm_bindgen_test]
fn absent_preference_follows_system_scheme() {
    let cfg = config("system");
    let storage = dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(&cfg.storage_key);
    let control = ensure_element("button", &cfg.toggle_id);

    let system_dark = dom::window()
        .expect("window")
        .match_media(&cfg.dark_query)
        .expect("matchMedia")
        .is_some_and(|list| list.matches());
    let expected = if system_dark { Theme::Dark } else { Theme::Light };

    let mounted = mount_with(&cfg);
    assert_eq!(mounted.theme, Some(expected));
    assert_eq!(
        root_attr(&cfg.theme_attribute).as_deref(),
        Some(expected.as_str())
    );
    assert_eq!(stored(&cfg.storage_key).as_deref(), Some(expected.as_str()));
    control.remove();
}

#[wasm_bindgen_test]
fn options_object_overrides_defaults() {
    assert_eq!(
        parse_options(JsValue::UNDEFINED).expect("undefined options"),
        SiteConfig::default()
    );

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("toggle_id"),
        &JsValue::from_str("mode-switch"),
    )
    .expect("set option");
    let cfg = parse_options(options.into()).expect("object options");
    assert_eq!(cfg.toggle_id, "mode-switch");
    assert_eq!(cfg.progress_id, "progress");

    let err = parse_options(JsValue::from_f64(3.0)).expect_err("number is not an options object");
    assert!(err.to_string().starts_with("Invalid options"));
}

#[wasm_bindgen_test]
fn remounting_with_new_storage_key_keeps_one_click_handler() {
    let defaults = SiteConfig::default();
    let renamed = SiteConfig {
        storage_key: "yellow.theme".to_string(),
        ..SiteConfig::default()
    };
    let storage = dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(&defaults.storage_key);
    let _ = storage.remove_item(&renamed.storage_key);
    let control = ensure_element("button", &defaults.toggle_id);

    assert!(mount_with(&defaults).theme.is_some());
    let before = stored(&defaults.storage_key);
    assert!(mount_with(&renamed).theme.is_some());
    assert!(bindings::is_bound(&control));

    let marker_before = root_attr(&renamed.theme_attribute).expect("marker set by mount");
    control.click();
    let marker_after = root_attr(&renamed.theme_attribute).expect("marker after click");
    assert_ne!(marker_before, marker_after, "one click must flip the theme");
    assert_eq!(stored(&renamed.storage_key), Some(marker_after));
    assert_eq!(
        stored(&defaults.storage_key),
        before,
        "replaced binding must not write its old key"
    );

    assert!(bindings::unbind(&control));
    assert!(!bindings::is_bound(&control));
    control.remove();
}

#[wasm_bindgen_test]
fn toggle_works_without_progress_indicator() {
    let cfg = config("only-toggle");
    let _ = dom::local_storage().expect("localStorage").remove_item(&cfg.storage_key);
    let control = ensure_element("button", &cfg.toggle_id);

    let mounted = mount_with(&cfg);
    assert!(!mounted.progress);
    let initial = mounted.theme.expect("toggle mounted");
    control.click();
    assert_eq!(
        root_attr(&cfg.theme_attribute).as_deref(),
        Some(initial.toggled().as_str())
    );
    control.remove();
}

#[wasm_bindgen_test]
fn progress_works_without_toggle_control() {
    let cfg = config("only-progress");
    let bar = ensure_element("div", &cfg.progress_id);

    let mounted = mount_with(&cfg);
    assert!(mounted.progress);
    assert_eq!(mounted.theme, None);
    assert_eq!(root_attr(&cfg.theme_attribute), None);
    assert_eq!(stored(&cfg.storage_key), None);
    assert!(
        bar.style()
            .get_property_value("width")
            .expect("width")
            .ends_with('%')
    );
    bar.remove();
}

#[wasm_bindgen_test]
fn page_without_overflow_is_fully_read() {
    let cfg = config("no-overflow");
    let body = dom::document().expect("document").body().expect("body");
    body.style()
        .set_property("display", "none")
        .expect("hide body");
    let bar = ensure_element("div", &cfg.progress_id);

    assert!(progress::install(&cfg).expect("install progress"));
    let width = bar.style().get_property_value("width").expect("width");

    let _ = body.style().remove_property("display");
    bar.remove();
    assert_eq!(width, "100%");
}

#[wasm_bindgen_test]
fn invalid_theme_attribute_is_rejected() {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("theme_attribute"),
        &JsValue::from_str("data theme"),
    )
    .expect("set option");
    let err = parse_options(options.into()).expect_err("attribute with a space");
    assert!(err.to_string().starts_with("Invalid options"));

    let cfg = SiteConfig {
        theme_attribute: "data theme".to_string(),
        ..config("bad-attr")
    };
    let _ = dom::local_storage().expect("localStorage").remove_item(&cfg.storage_key);
    let control = ensure_element("button", &cfg.toggle_id);
    assert!(theme_toggle::install(&cfg).is_err());
    assert!(!bindings::is_bound(&control));
    assert_eq!(stored(&cfg.storage_key), None, "refused marker must not be persisted");
    control.remove();
}

// Browser smoke tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const WORDS: &str = r#"["kuku", "kukuku"]"#;
const WEIGHTS: &str = r#"{"ku": 1}"#;

#[wasm_bindgen_test]
fn board_mounts_canvas_and_hud() {
    kupu::start_game(WORDS, WEIGHTS).unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("kupu-canvas").is_some());
    let time = doc.get_element_by_id("kupu-time").unwrap();
    assert_eq!(time.text_content().as_deref(), Some("3:00"));
    assert!(doc.get_element_by_id("kupu-submit").is_some());
}

#[wasm_bindgen_test]
fn bad_dictionary_is_reported() {
    assert!(kupu::start_game("[", WEIGHTS).is_err());
    assert!(kupu::start_game(WORDS, r#"{"xyz": 1}"#).is_err());
}

#[wasm_bindgen_test]
fn enter_is_consumed_by_the_board() {
    kupu::start_game(WORDS, WEIGHTS).unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_cancelable(true);
    let evt = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    doc.dispatch_event(&evt).unwrap();
    assert!(evt.default_prevented());
}

//! Browser tests for the `KifuViewer` facade. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use reversi_kifu::wasm::KifuViewer;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const STORE: &str = r#"{
    "bigFolders": [{ "name": "Openings" }],
    "smallByBig": { "Openings": ["Tiger"] },
    "kifuByPath": { "Openings/Tiger": [
        { "name": "main", "comment": "tiger line", "moves": ["F5", "D6", "C3", "D3"] }
    ] }
}"#;

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

fn viewer_with_store() -> KifuViewer {
    let mut viewer = KifuViewer::new(JsValue::UNDEFINED).unwrap();
    viewer.load_store(STORE).unwrap();
    viewer
}

#[wasm_bindgen_test]
fn wasm_ready_returns_true() {
    assert!(reversi_kifu::wasm_ready());
}

#[wasm_bindgen_test]
fn select_and_navigate_returns_state_objects() {
    let mut viewer = viewer_with_store();

    let state = viewer.select_kifu("Openings", "Tiger", 0).unwrap();
    assert_eq!(field(&state, "move_index").as_f64(), Some(0.0));
    assert_eq!(field(&state, "total_moves").as_f64(), Some(4.0));
    assert_eq!(field(&state, "next_player").as_string().as_deref(), Some("black"));

    let state = viewer.goto(99).unwrap();
    assert_eq!(field(&state, "move_index").as_f64(), Some(4.0));
    assert_eq!(field(&field(&state, "nav"), "next").as_bool(), Some(false));

    let state = viewer.previous().unwrap();
    assert_eq!(field(&state, "move_index").as_f64(), Some(3.0));
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
}

#[wasm_bindgen_test]
fn kifu_list_is_filtered_by_query() {
    let viewer = viewer_with_store();

    assert_eq!(Array::from(&viewer.kifus("Openings", "Tiger", "TIGER").unwrap()).length(), 1);
    assert_eq!(Array::from(&viewer.kifus("Openings", "Tiger", "rabbit").unwrap()).length(), 0);
}

#[wasm_bindgen_test]
fn unknown_record_is_an_error() {
    let mut viewer = viewer_with_store();

    assert!(viewer.select_kifu("Openings", "Rabbit", 0).is_err());
}

#[wasm_bindgen_test]
fn toggling_auto_play_flips_running_flag() {
    let mut viewer = viewer_with_store();
    viewer.select_kifu("Openings", "Tiger", 0).unwrap();

    assert!(viewer.toggle_auto());
    assert!(viewer.is_auto_playing());
    assert!(viewer.tick().unwrap().is_null());
    assert!(!viewer.toggle_auto());
}

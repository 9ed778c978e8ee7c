//! High score persistence over `localStorage`.
//!
//! One key, decimal text. Storage trouble is never fatal: an absent key, a
//! denied storage area, or garbage in the slot all read back as 0, and a
//! failed write only costs durability.

use wasm_bindgen::JsValue;

pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_high_score() -> u32 {
    let Some(storage) = local_storage() else {
        return 0;
    };
    let Some(raw) = storage.get_item(HIGH_SCORE_KEY).ok().flatten() else {
        return 0;
    };
    match raw.parse() {
        Ok(score) => score,
        Err(_) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "ignoring malformed stored high score {raw:?}"
            )));
            0
        }
    }
}

pub fn store_high_score(score: u32) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(HIGH_SCORE_KEY, &score.to_string());
    }
}

// Logging helper shared by the DOM glue

pub fn clog(msg: &str) {
    // Browser debug builds only; native test builds cannot reach the console import.
    #[cfg(all(target_arch = "wasm32", debug_assertions))]
    web_sys::console::debug_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
    let _ = msg;
}

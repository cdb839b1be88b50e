// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-side checks for the DOM helpers. Run with
//! `wasm-pack test --headless --firefox vitrine_web`.

#![cfg(target_arch = "wasm32")]

use vitrine_web::dom::{query_all, query_all_within};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn scoped_query_ignores_links_outside_root() {
    let document = web_sys::window().unwrap().document().unwrap();
    let page = document.create_element("div").unwrap();
    page.set_inner_html(
        r##"<ul id="menu-under-test">
             <li><a class="nav-link" href="#about">About</a></li>
             <li><a class="nav-link" href="#contact">Contact</a></li>
           </ul>
           <footer><a class="nav-link" href="#home">Home</a></footer>"##,
    );
    document.body().unwrap().append_child(&page).unwrap();

    let menu = document.get_element_by_id("menu-under-test").unwrap();
    let inside = query_all_within(&menu, ".nav-link");
    assert_eq!(inside.len(), 2);
    assert!(inside.iter().all(|link| menu.contains(Some(link.as_ref()))));
    assert_eq!(query_all(&document, ".nav-link").len(), 3, "footer link exists");

    page.remove();
}

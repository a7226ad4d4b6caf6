#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate stencil;

use stencil::{Bindings, Row, Stencil};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = String::from_utf8(data.to_vec()) {
        let mut bindings = Bindings::new();
        let _ = bindings.insert_scalar("a", "A");
        let _ = bindings.insert_list("l", vec![Row::new(), vec![("b", "B")].into_iter().collect()]);
        let _ = Stencil::one_off(&s, &bindings);
    }
});

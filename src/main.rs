//! client-launch - Open an installed client, or install it
//!
//! This is the binary entry point. All logic lives in the library.

use client_launch::App;
use leptos::prelude::*;

fn main() {
    client_launch_web::logging::init(log::Level::Debug).expect("error initializing logger");
    mount_to_body(App);
}

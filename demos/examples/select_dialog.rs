// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A settings dialog containing a theme select.
//!
//! This example shows how to:
//! - wire accessible ids between a dialog and its title and description,
//! - open a select with a focus strategy and pick a value,
//! - gate the select listbox on `SelectPortal::should_render`,
//! - dismiss the dialog with Escape.
//!
//! Run:
//! - `cargo run -p understory_demos --example select_dialog`

use understory_collection::{FocusStrategy, ItemDescriptor, Navigation};
use understory_overlay::dialog::{DialogContext, DialogProps};
use understory_overlay::disclosure::DisclosureOptions;
use understory_overlay::host::OverlayHost;
use understory_overlay::select::{SelectContext, SelectPortal, SelectProps};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let host = OverlayHost::new(|el: &&str| println!("focus -> {el}"));

    let dialog = DialogContext::new(
        DialogProps {
            disclosure: DisclosureOptions::default()
                .with_on_open_change(|open| println!("dialog open: {open}")),
            ..DialogProps::default()
        },
        &host,
    );
    let _content = dialog.register_content_id(dialog.generate_id("content"));
    let _title = dialog.register_title_id(dialog.generate_id("title"));
    let _description = dialog.register_description_id(dialog.generate_id("description"));
    dialog.open();
    println!(
        "dialog {:?} labelled by {:?}, described by {:?}",
        dialog.content_id(),
        dialog.title_id(),
        dialog.description_id()
    );
    println!("overlay: {:?}", dialog.overlay_config());

    let theme = SelectContext::new(
        SelectProps {
            id: Some("theme".into()),
            on_value_change: Some(Box::new(|value: Option<&str>| {
                println!("theme -> {value:?}");
            })),
            ..SelectProps::default()
        },
        &host,
    );
    let _label = theme.register_label_id(theme.generate_id("label"));
    let _options: Vec<_> = [("light", "Light"), ("dark", "Dark"), ("system", "System")]
        .into_iter()
        .zip(0_u32..)
        .map(|((key, text), pos)| {
            theme
                .register_option(ItemDescriptor::new(key, pos, key).with_text_value(text))
                .expect("unique option keys")
        })
        .collect();

    println!("listbox rendered: {}", SelectPortal::should_render(&theme));
    theme.open(Some(FocusStrategy::Selected));
    println!("listbox rendered: {}", SelectPortal::should_render(&theme));
    println!("initial option: {:?}", theme.initial_focus());

    let next = theme.list_state_mut().navigate(Navigation::Next);
    if let Some(key) = next {
        theme.select(&key);
    }
    println!("value: {:?}, open: {}", theme.value(), theme.is_open());

    dialog.escape();
    println!("dialog mounted: {}", dialog.should_mount());
}

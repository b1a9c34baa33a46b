// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A menu bar "File" menu with an "Open Recent" submenu, driven by simulated input.
//!
//! This example shows how to:
//! - mount menu levels through a `Provider` so submenus find their parent,
//! - register a submenu trigger into the parent's collection,
//! - navigate with arrow keys and typeahead,
//! - activate an item in the submenu, which closes the whole chain.
//!
//! Run:
//! - `cargo run -p understory_demos --example nested_menu`

use understory_collection::{FocusStrategy, ItemDescriptor, Navigation};
use understory_menu::{FocusTarget, MenuContext, MenuProps, use_menu_context};
use understory_overlay::context::Provider;
use understory_overlay::disclosure::DisclosureOptions;
use understory_overlay::host::{OverlayHost, Placement};

/// Stand-in for a widget handle.
type Element = &'static str;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let host = OverlayHost::new(|el: &Element| println!("focus -> {el}"));
    let provider: Provider<MenuContext<Element>> = Provider::new();

    let file = MenuContext::from_provider(
        MenuProps {
            id: Some("file".into()),
            disclosure: DisclosureOptions::default()
                .with_on_open_change(|open| println!("file open: {open}")),
            ..MenuProps::default()
        }
        .with_on_action(|key| println!("file action: {key}")),
        &provider,
        &host,
    );
    file.set_trigger_ref(Some("#file-button"));
    let _file_trigger = file.register_trigger_id(file.generate_id("trigger"));

    provider.provide(file.clone(), || {
        let menu = use_menu_context(&provider).expect("mounted inside the file menu");
        let items: Vec<_> = [
            ItemDescriptor::new("new", 0, "#new").with_text_value("New"),
            ItemDescriptor::new("save", 2, "#save").with_text_value("Save"),
            ItemDescriptor::new("quit", 3, "#quit").with_text_value("Quit"),
        ]
        .into_iter()
        .map(|item| menu.register_item(item).expect("unique keys"))
        .collect();

        let recent = MenuContext::from_provider(
            MenuProps {
                id: Some("recent".into()),
                placement: Placement::RightStart,
                disclosure: DisclosureOptions::default()
                    .with_on_open_change(|open| println!("recent open: {open}")),
                ..MenuProps::default()
            }
            .with_on_action(|key| println!("recent action: {key}")),
            &provider,
            &host,
        );
        recent
            .register_item_to_parent_collection(
                ItemDescriptor::new("recent", 1, "#recent").with_text_value("Open Recent"),
            )
            .expect("recent is nested under file");
        recent.set_trigger_ref(Some("#recent"));

        let recent_items: Vec<_> = provider.provide(recent.clone(), || {
            let sub = use_menu_context(&provider).expect("mounted inside the submenu");
            ["notes.txt", "todo.md"]
                .into_iter()
                .zip(0_u32..)
                .map(|(name, pos)| {
                    sub.register_item(ItemDescriptor::new(name, pos, name))
                        .expect("unique keys")
                })
                .collect()
        });

        println!("file items: {:?}", menu.collection().keys());

        // Click the trigger: open and focus the first item.
        menu.toggle(FocusStrategy::First);
        println!("initial focus: {:?}", menu.initial_focus());

        // ArrowDown onto the submenu trigger, then ArrowRight to open it.
        let focused = menu.list_state_mut().navigate(Navigation::Next);
        println!("focused: {focused:?}");
        let props = recent.anchored_overlay_props();
        println!(
            "recent anchors {:?} at {:?}, hover-outside closes: {}",
            props.anchor, props.placement, props.close_on_hover_outside
        );
        recent.open(FocusStrategy::First);
        recent.focus_content();
        recent.set_content_ref(Some("#recent-content"));
        if let FocusTarget::Item(key) = recent.initial_focus() {
            println!("submenu focus: {key}");
        }

        // Typeahead "t" jumps to todo.md; Enter activates it.
        let typed = recent.list_state_mut().typeahead('t', 0);
        if let Some(key) = typed {
            recent.activate(&key);
        }
        println!(
            "after activate: file open = {}, recent open = {}",
            menu.is_open(),
            recent.is_open()
        );

        drop(recent_items);
        drop(recent);
        println!("file items after unmounting submenu: {:?}", menu.collection().keys());
        drop(items);
    });
}

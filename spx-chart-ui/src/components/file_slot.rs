//! File input bound to one upload slot.

use crate::state::UploadContext;
use dioxus::prelude::*;
use spx_core::upload::{FileHandle, Slot};

#[derive(Props, Clone, PartialEq)]
pub struct FileSlotProps {
    pub slot: Slot,
}

/// File picker for a single slot.
/// Replaces that slot's handle in UploadContext on change; the file itself
/// is never read.
#[component]
pub fn FileSlot(props: FileSlotProps) -> Element {
    let mut ctx = use_context::<UploadContext>();
    let slot = props.slot;
    let selected = ctx
        .files
        .read()
        .get(slot)
        .map(|h| h.label().to_string());
    let class = match slot {
        Slot::Primary => "file-upload-1",
        Slot::Secondary => "file-upload-2",
    };

    let on_change = move |evt: Event<FormData>| {
        let handle = FileHandle::from_picker_value(&evt.value());
        log::info!("Selected {}: {:?}", slot, handle.as_ref().map(|h| h.label()));
        ctx.files.write().select(slot, handle);
    };

    rsx! {
        div {
            class: "{class}",
            style: "margin: 10px 0;",
            input {
                r#type: "file",
                onchange: on_change,
            }
            if let Some(name) = selected {
                div {
                    style: "font-size: 12px; color: #9aa4b2; margin-top: 4px;",
                    "{name}"
                }
            }
        }
    }
}

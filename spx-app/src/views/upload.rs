//! Landing view: two file slots and the generate button.

use crate::Route;
use dioxus::prelude::*;
use spx_chart_ui::components::FileSlot;
use spx_chart_ui::js_bridge;
use spx_chart_ui::state::UploadContext;
use spx_core::upload::{GatePhase, Slot};

#[component]
pub fn Upload() -> Element {
    let ctx = use_context_provider(UploadContext::new);
    let navigator = use_navigator();
    let phase = ctx.files.read().phase();

    let on_generate = move |_| {
        let result = ctx.files.read().submit();
        match result {
            Ok(()) => {
                navigator.push(Route::Dashboard {});
            }
            Err(e) => js_bridge::alert(&e.to_string()),
        }
    };

    let status = match phase {
        GatePhase::Empty => "No files selected",
        GatePhase::PartiallyFilled => "1 of 2 files selected",
        GatePhase::Ready => "Both files selected",
    };

    rsx! {
        div {
            class: "upload-container",
            style: "text-align: center; padding: 60px 16px;",
            div {
                class: "upload-section",
                style: "max-width: 640px; margin: 0 auto; padding: 24px; background: rgb(9 17 30); border-radius: 8px;",
                h2 { "Upload Files" }
                div {
                    class: "file-upload",
                    FileSlot { slot: Slot::Primary }
                    FileSlot { slot: Slot::Secondary }
                    p {
                        style: "font-size: 12px; color: #9aa4b2;",
                        "{status}"
                    }
                    button {
                        class: "recommendation-button",
                        style: "padding: 10px; cursor: pointer; width: 40%; margin: auto; margin-top: 20px;",
                        onclick: on_generate,
                        "Generate Recommendation Dashboard"
                    }
                }
            }
        }
    }
}

//! GWAS file upload zone with drag & drop support.
//!
//! Only selects files. The page owns the request; this component hands it
//! the accepted files through `on_files`.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, File, FileList, HtmlInputElement, Node};

use crate::config::{accept_attribute, ACCEPTED_TYPES, MAX_FILES};
use crate::selection::{SelectionPolicy, UploadCandidate};

#[component]
pub fn UploadZone(
    /// Called once per drop or pick, with the accepted files in order
    #[prop(into)]
    on_files: Callback<Vec<File>>,
) -> impl IntoView {
    let (is_drag_active, set_drag_active) = create_signal(false);
    let drag_targets = store_value(DragTargets::<EventTarget>::default());
    let zone = create_node_ref::<html::Div>();
    let file_input = create_node_ref::<html::Input>();

    // Clicking anywhere in the zone opens the picker
    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_drag_enter = move |ev: ev::DragEvent| {
        ev.prevent_default();
        if let Some(target) = ev.target() {
            let active = drag_targets
                .try_update_value(|targets| targets.enter(target))
                .unwrap_or(false);
            set_drag_active.set(active);
        }
    };

    let on_drag_leave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        if let Some(target) = ev.target() {
            let active = drag_targets
                .try_update_value(|targets| {
                    targets.leave(&target, |t| contains(zone, t))
                })
                .unwrap_or(false);
            set_drag_active.set(active);
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        drag_targets.update_value(DragTargets::clear);
        set_drag_active.set(false);
        forward_accepted(files_of(ev.data_transfer().and_then(|dt| dt.files())), |files| {
            on_files.call(files)
        });
    };

    let on_file_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        forward_accepted(files_of(input.files()), |files| on_files.call(files));
        // Allow picking the same files again
        input.set_value("");
    };

    view! {
        <div
            class="upload-zone"
            class:drag-active=move || is_drag_active.get()
            node_ref=zone
            on:click=open_picker
            on:dragenter=on_drag_enter
            on:dragover=|ev: ev::DragEvent| ev.prevent_default()
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <input
                type="file"
                multiple=true
                accept=accept_attribute()
                style="display:none"
                node_ref=file_input
                on:click=|ev| ev.stop_propagation()
                on:change=on_file_change
            />
            {move || if is_drag_active.get() {
                view! { <p class="upload-drop-text">"Drop the files here!"</p> }.into_view()
            } else {
                view! {
                    <button type="button" class="upload-button">"Upload GWAS Files"</button>
                    <p class="upload-hint">"or drag and drop"</p>
                    <p class="upload-hint small">{upload_hint()}</p>
                }.into_view()
            }}
        </div>
    }
}

/// Elements inside the zone that the current drag has entered.
///
/// Moving between child elements fires `dragleave` on the one being left,
/// so the drag is only over when no entered element remains. Elements that
/// were swapped out of the zone mid-drag never get their `dragleave` and are
/// pruned on the next leave.
#[derive(Debug)]
struct DragTargets<T> {
    entered: Vec<T>,
}

impl<T> Default for DragTargets<T> {
    fn default() -> Self {
        Self { entered: Vec::new() }
    }
}

impl<T: PartialEq> DragTargets<T> {
    /// Record `target`; returns whether a drag is active.
    fn enter(&mut self, target: T) -> bool {
        if !self.entered.contains(&target) {
            self.entered.push(target);
        }
        true
    }

    /// Forget `target` and anything no longer in the zone; returns whether
    /// a drag is still active.
    fn leave(&mut self, target: &T, in_zone: impl Fn(&T) -> bool) -> bool {
        self.entered.retain(|t| t != target && in_zone(t));
        !self.entered.is_empty()
    }

    fn clear(&mut self) {
        self.entered.clear();
    }
}

fn contains(zone: NodeRef<html::Div>, target: &EventTarget) -> bool {
    match (zone.get_untracked(), target.dyn_ref::<Node>()) {
        (Some(zone), Some(node)) => zone.contains(Some(node)),
        _ => false,
    }
}

fn upload_hint() -> String {
    let extensions: Vec<&str> = ACCEPTED_TYPES.iter().map(|(_, ext)| *ext).collect();
    format!("Up to {} files ({})", MAX_FILES, extensions.join(", "))
}

fn files_of(list: Option<FileList>) -> Vec<File> {
    match list {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}

/// Run the selection policy and hand the accepted files to `on_files`.
///
/// `on_files` runs at most once, and never for an empty or fully rejected
/// selection.
fn forward_accepted<F: UploadCandidate>(files: Vec<F>, on_files: impl FnOnce(Vec<F>)) {
    if files.is_empty() {
        return;
    }

    let (accepted, rejected) = SelectionPolicy::default().select(files).into_parts();
    for (file, reason) in &rejected {
        log::warn!("Skipping {}: {:?}", file.file_name(), reason);
    }

    if !accepted.is_empty() {
        on_files(accepted);
    }
}

//! Face detection demo: image upload, remote detection, canvas overlay.
//!
//! Users drag-and-drop or browse for an image, which is posted to the
//! detection backend as multipart form data. Returned bounding boxes are
//! drawn over the preview image, scaled to its on-screen size, and redrawn
//! whenever the image loads or the window resizes.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html::{Canvas, Img, Input};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::canvas;
use crate::overlay::{self, DetectionResult};

/// Delay before the first overlay draw, giving the image element time to
/// finish layout after the result arrives.
const FIRST_DRAW_DELAY_MS: u32 = 100;

#[component]
pub fn FaceDetection() -> impl IntoView {
    // The raw file handle is a JS object, so it lives in a local-storage
    // signal; everything else is plain data.
    let selected = RwSignal::new_local(None::<web_sys::File>);
    let (preview, set_preview) = signal::<Option<String>>(None);
    let (result, set_result) = signal::<Option<DetectionResult>>(None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (drag_active, set_drag_active) = signal(false);

    let canvas_ref = NodeRef::<Canvas>::new();
    let image_ref = NodeRef::<Img>::new();
    let file_input_ref = NodeRef::<Input>::new();
    // Same stale-response guard as the capstone viewer.
    let detect_generation = StoredValue::new(0u64);

    // Recompute the overlay from the current result and the image's rendered
    // size. Clearing first makes repeated draws idempotent.
    let redraw = move || {
        let Some(result) = result.get_untracked() else {
            return;
        };
        if result.faces.is_empty() {
            return;
        }
        let (Some(canvas_el), Some(image_el)) =
            (canvas_ref.get_untracked(), image_ref.get_untracked())
        else {
            return;
        };
        let rect = image_el.get_bounding_client_rect();
        let commands = overlay::compute_overlay_geometry(
            result.image_size,
            rect.width(),
            rect.height(),
            &result.faces,
        );
        if let Err(e) = canvas::paint(&canvas_el, rect.width(), rect.height(), &commands) {
            log::error!("overlay draw failed: {e:?}");
        }
    };

    // Overlay alignment must track responsive layout changes. The listener
    // is removed when the component's scope is disposed.
    let _resize_listener = window_event_listener(ev::resize, move |_| redraw());

    let select_image = move |file: web_sys::File| {
        if !file.type_().starts_with("image/") {
            set_error.set(Some("Please select a valid image file".to_string()));
            return;
        }

        // A new selection obsoletes any in-flight detection: bump the
        // generation so a late response is dropped instead of landing its
        // result (and boxes) on the new preview.
        detect_generation.set_value(detect_generation.get_value() + 1);
        set_loading.set(false);

        if let Some(old) = preview.get_untracked() {
            let _ = web_sys::Url::revoke_object_url(&old);
        }

        set_error.set(None);
        set_result.set(None);
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => set_preview.set(Some(url)),
            Err(e) => log::error!("could not create preview: {e:?}"),
        }
        selected.set(Some(file));
    };

    let on_detect = move |_| {
        let Some(file) = selected.get_untracked() else {
            set_error.set(Some("Please select an image first".to_string()));
            return;
        };

        let generation = detect_generation.get_value() + 1;
        detect_generation.set_value(generation);

        set_error.set(None);
        set_result.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let outcome = api::detect_faces(&file).await;
            if detect_generation.get_value() != generation {
                log::debug!("discarding stale detection response (generation {generation})");
                return;
            }
            match outcome {
                Ok(res) => {
                    let has_faces = !res.faces.is_empty();
                    set_result.set(Some(res));
                    if has_faces {
                        spawn_local(async move {
                            TimeoutFuture::new(FIRST_DRAW_DELAY_MS).await;
                            redraw();
                        });
                    }
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                if let Some(file) = files.get(0) {
                    select_image(file);
                }
            }
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                select_image(file);
            }
        }
    };

    view! {
        <section class="face-detection section container" id="face-detection">
            <style>{include_str!("face_detection.css")}</style>
            <h2>"Face Detection System"</h2>
            <h5 class="text-light">"CNN-Powered Real-Time Face Detection"</h5>

            <div class="detection-workspace">
                <div class="upload-section">
                    <div
                        class="upload-zone"
                        class:drag-active=move || drag_active.get()
                        on:dragenter=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(true);
                        }
                        on:dragover=move |ev: web_sys::DragEvent| {
                            ev.prevent_default();
                            set_drag_active.set(true);
                        }
                        on:dragleave=move |_| set_drag_active.set(false)
                        on:drop=on_drop
                        on:click=move |_| {
                            if let Some(input) = file_input_ref.get() {
                                input.click();
                            }
                        }
                    >
                        <input
                            node_ref=file_input_ref
                            type="file"
                            accept="image/*"
                            style="display: none"
                            on:change=on_input_change
                        />

                        {move || match preview.get() {
                            None => view! {
                                <div class="upload-placeholder">
                                    <h3>"Drop image here or click to upload"</h3>
                                    <p>"Supports JPG, PNG, WebP"</p>
                                </div>
                            }
                            .into_any(),
                            Some(src) => view! {
                                <div class="image-preview-container">
                                    <img
                                        node_ref=image_ref
                                        src=src
                                        alt="Preview"
                                        class="image-preview"
                                        on:load=move |_| redraw()
                                    />
                                    <canvas node_ref=canvas_ref class="detection-canvas"></canvas>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>

                    <button
                        class="detect-btn"
                        disabled=move || selected.with(|f| f.is_none()) || loading.get()
                        on:click=on_detect
                    >
                        {move || if loading.get() { "Detecting Faces..." } else { "Detect Faces" }}
                    </button>
                </div>

                <div class="results-section">
                    <h3>"Detection Results"</h3>

                    {move || error.get().map(|e| view! {
                        <div class="error-message">{e}</div>
                    })}

                    {move || result.get().map(|res| view! {
                        <DetectionSummary result=res />
                    })}

                    {move || {
                        (result.with(|r| r.is_none()) && error.with(|e| e.is_none()))
                            .then(|| view! {
                                <div class="empty-state">
                                    <p>"Upload an image and click \"Detect Faces\" to see results"</p>
                                </div>
                            })
                    }}
                </div>
            </div>
        </section>
    }
}

/// Stats tiles and per-face cards for one detection result.
#[component]
fn DetectionSummary(result: DetectionResult) -> impl IntoView {
    let avg_confidence = if result.faces.is_empty() {
        "N/A".to_string()
    } else {
        let sum: f64 = result.faces.iter().map(|f| f.confidence).sum();
        format!("{:.1}%", sum / result.faces.len() as f64 * 100.0)
    };
    let image_size = format!("{}x{}", result.image_size[0], result.image_size[1]);
    let faces = result.faces.clone();
    let no_faces = result.face_count == 0;

    view! {
        <div class="results-content">
            <div class="stats-grid">
                <div class="stat-card">
                    <h3>{result.face_count}</h3>
                    <p>"Faces Detected"</p>
                </div>
                <div class="stat-card">
                    <h3>{image_size}</h3>
                    <p>"Image Size"</p>
                </div>
                <div class="stat-card">
                    <h3>{avg_confidence}</h3>
                    <p>"Avg Confidence"</p>
                </div>
            </div>

            {(!faces.is_empty()).then(|| view! {
                <div class="faces-list">
                    <h4>"Detected Faces"</h4>
                    {faces.iter().enumerate().map(|(index, face)| view! {
                        <div class="face-item">
                            <div class="face-number">{format!("Face {}", index + 1)}</div>
                            <div class="face-details">
                                <div class="detail">
                                    <span class="label">"Confidence: "</span>
                                    <span class="value">
                                        {format!("{:.2}%", face.confidence * 100.0)}
                                    </span>
                                </div>
                                <div class="detail">
                                    <span class="label">"Position: "</span>
                                    <span class="value">
                                        {format!("({:.0}, {:.0})", face.center[0], face.center[1])}
                                    </span>
                                </div>
                                <div class="detail">
                                    <span class="label">"Size: "</span>
                                    <span class="value">
                                        {format!(
                                            "{:.0} x {:.0}",
                                            face.bbox[2] - face.bbox[0],
                                            face.bbox[3] - face.bbox[1],
                                        )}
                                    </span>
                                </div>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            })}

            {no_faces.then(|| view! {
                <div class="no-faces-message">
                    <p>"No faces detected in this image"</p>
                    <p class="hint">"Try uploading a different image with visible faces"</p>
                </div>
            })}
        </div>
    }
}

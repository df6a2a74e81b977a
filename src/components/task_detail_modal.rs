//! Modal showing one task in full, including its attachments.
//!
//! DESIGN
//! ======
//! The modal works on its own copy of the task so attachment deletes can be
//! reflected immediately; `on_refresh` reloads the shared list in the
//! background to pick up the server's view. Attachment management is
//! limited to managers and the task's creator.

#[cfg(test)]
#[path = "task_detail_modal_test.rs"]
mod task_detail_modal_test;

use leptos::prelude::*;

use crate::net::types::{Task, User};
use crate::state::auth::AuthState;
use crate::util::time;

/// Read-only task view with attachment management for those allowed.
#[component]
pub fn TaskDetailModal(
    task: Task,
    on_close: Callback<()>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let current = RwSignal::new(task);

    let can_manage = move || {
        auth.with(|state| current.with(|t| can_manage_attachments(state.user.as_ref(), t)))
    };

    let remove_image = Callback::new(move |image_id: String| {
        #[cfg(feature = "hydrate")]
        {
            if !confirmed("Delete this image?") {
                return;
            }
            let Some(token) = auth.with_untracked(|state| state.token.clone()) else {
                return;
            };
            let task_id = current.with_untracked(|t| t.id.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_task_image(&token, &task_id, &image_id).await {
                    Ok(()) => {
                        current.update(|t| t.images.retain(|img| img.id != image_id));
                        on_refresh.run(());
                    }
                    Err(e) => leptos::logging::warn!("failed to delete image: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = image_id;
        }
    });

    let remove_file = Callback::new(move |file_id: String| {
        #[cfg(feature = "hydrate")]
        {
            if !confirmed("Delete this file?") {
                return;
            }
            let Some(token) = auth.with_untracked(|state| state.token.clone()) else {
                return;
            };
            let task_id = current.with_untracked(|t| t.id.clone());
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_task_file(&token, &task_id, &file_id).await {
                    Ok(()) => {
                        current.update(|t| t.files.retain(|f| f.id != file_id));
                        on_refresh.run(());
                    }
                    Err(e) => leptos::logging::warn!("failed to delete file: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (file_id, on_refresh);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--task-detail" on:click=move |ev| ev.stop_propagation()>
                <div class="task-detail__head">
                    <h2>{move || current.get().title}</h2>
                    <button
                        class="dialog__close"
                        on:click=move |_| on_close.run(())
                        aria-label="Close"
                    >
                        "✕"
                    </button>
                </div>

                <div class="task-detail__badges">
                    <span class=move || {
                        format!(
                            "task-detail__badge task-detail__badge--{}",
                            current.get().status.as_str(),
                        )
                    }>{move || current.get().status.label()}</span>
                    <span class=move || {
                        format!(
                            "task-detail__badge task-detail__badge--{}",
                            current.get().priority.as_str(),
                        )
                    }>{move || current.get().priority.label()}</span>
                </div>

                <p class="task-detail__description">
                    {move || current.get().description}
                </p>

                <div class="task-detail__meta">
                    <div class="task-detail__meta-row">
                        <span class="task-detail__meta-label">"Due"</span>
                        <span class="task-detail__meta-value">
                            {move || time::format_long_date(current.get().due_date)}
                        </span>
                    </div>
                    <div class="task-detail__meta-row">
                        <span class="task-detail__meta-label">"Assigned to"</span>
                        <span class="task-detail__meta-value">
                            {move || {
                                current
                                    .get()
                                    .assigned_to
                                    .map_or_else(|| "Unassigned".to_owned(), |u| u.name)
                            }}
                        </span>
                    </div>
                    <div class="task-detail__meta-row">
                        <span class="task-detail__meta-label">"Created by"</span>
                        <span class="task-detail__meta-value">
                            {move || {
                                current
                                    .get()
                                    .created_by
                                    .map_or_else(|| "Unknown".to_owned(), |u| u.name)
                            }}
                        </span>
                    </div>
                    <div class="task-detail__meta-row">
                        <span class="task-detail__meta-label">"Created"</span>
                        <span class="task-detail__meta-value">
                            {move || {
                                current
                                    .get()
                                    .created_at
                                    .map(time::format_long_date)
                                    .unwrap_or_default()
                            }}
                        </span>
                    </div>
                </div>

                <Show when=move || !current.get().images.is_empty()>
                    <div class="task-detail__section">
                        <h3 class="task-detail__section-title">"Images"</h3>
                        <div class="task-detail__image-grid">
                            {move || {
                                let manage = can_manage();
                                current
                                    .get()
                                    .images
                                    .into_iter()
                                    .map(|image| {
                                        let id = image.id.clone();
                                        view! {
                                            <figure class="task-detail__thumb">
                                                <img src=image.url alt="Task attachment"/>
                                                {manage
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="task-detail__thumb-delete"
                                                                on:click=move |_| remove_image.run(id.clone())
                                                                aria-label="Delete image"
                                                            >
                                                                "✕"
                                                            </button>
                                                        }
                                                    })}
                                            </figure>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </div>
                </Show>

                <Show when=move || !current.get().files.is_empty()>
                    <div class="task-detail__section">
                        <h3 class="task-detail__section-title">"Files"</h3>
                        <ul class="task-detail__file-list">
                            {move || {
                                let manage = can_manage();
                                current
                                    .get()
                                    .files
                                    .into_iter()
                                    .map(|file| {
                                        let id = file.id.clone();
                                        let size = file
                                            .file_size
                                            .map(format_file_size)
                                            .unwrap_or_default();
                                        view! {
                                            <li class="task-detail__file">
                                                <a
                                                    class="task-detail__file-name"
                                                    href=file.url
                                                    target="_blank"
                                                    rel="noopener"
                                                >
                                                    {file.file_name}
                                                </a>
                                                <span class="task-detail__file-size">{size}</span>
                                                {manage
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="task-detail__file-delete"
                                                                on:click=move |_| remove_file.run(id.clone())
                                                                aria-label="Delete file"
                                                            >
                                                                "✕"
                                                            </button>
                                                        }
                                                    })}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn confirmed(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Managers and the task's creator may delete attachments.
fn can_manage_attachments(viewer: Option<&User>, task: &Task) -> bool {
    viewer.is_some_and(|user| {
        user.role.is_manager()
            || task
                .created_by
                .as_ref()
                .is_some_and(|creator| creator.id == user.id)
    })
}

/// Human-readable attachment size.
#[allow(clippy::cast_precision_loss)]
fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

use super::api;
use super::session::{ImportEffect, ImportSession, StartUpload};
use crate::shared::cache::{CacheService, NS_EMPLOYEE};
use crate::shared::components::ProgressBar;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalHandle;
use crate::shared::toast::ToastService;
use crate::system::auth::context::use_auth;
use contracts::usecases::u101_import_employees::{ImportEmployees, JobStatus};
use contracts::usecases::common::UseCaseMetadata;
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[component]
pub fn ImportEmployeesModal(handle: ModalHandle, on_refresh: Callback<()>) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let cache = use_context::<CacheService>().expect("CacheService not found in context");
    let (auth_state, _) = use_auth();

    let session = RwSignal::new(ImportSession::new());
    // The chosen File is a JS handle, so it stays on this thread.
    let picked_file = StoredValue::new_local(None::<web_sys::File>);
    let file_input_ref = NodeRef::<html::Input>::new();

    // Cleared when the modal unmounts; in-flight responses check it
    // before touching any state.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        let session = session;
        on_cleanup(move || {
            alive.store(false, Ordering::SeqCst);
            session.update(|s| s.close());
        });
    }

    let run_effects = {
        let handle = handle.clone();
        move |effects: Vec<ImportEffect>| {
            for effect in effects {
                match effect {
                    ImportEffect::InvalidateEmployees => cache.invalidate(NS_EMPLOYEE),
                    ImportEffect::NotifySuccess { title, body } => toasts.success(title, body),
                    ImportEffect::NotifyFailure { title, body } => toasts.error(title, body),
                    ImportEffect::CloseModal => handle.close(),
                    ImportEffect::RefreshList => on_refresh.run(()),
                }
            }
        }
    };

    let on_file_change = move |_| {
        let Some(input) = file_input_ref.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        let name = file.name();
        picked_file.set_value(Some(file));
        session.update(|s| s.select_file(name));
    };

    let start_polling = {
        let alive = alive.clone();
        let run_effects = run_effects.clone();
        move |job_id: String| {
            let alive = alive.clone();
            let run_effects = run_effects.clone();
            let token = auth_state.get_untracked().token.unwrap_or_default();
            spawn_local(async move {
                loop {
                    if !alive.load(Ordering::SeqCst) {
                        break;
                    }
                    match api::get_progress(&job_id, &token).await {
                        Ok(job) => {
                            if !alive.load(Ordering::SeqCst) {
                                break;
                            }
                            if job.status == JobStatus::NotFound {
                                log::warn!(
                                    "{}: job {} not found, stopping poll",
                                    ImportEmployees::full_name(),
                                    job_id
                                );
                            }
                            let mut effects = Vec::new();
                            session.update(|s| effects = s.apply_snapshot(&job));
                            run_effects(effects);
                        }
                        Err(e) => {
                            // Transient failure; keep the cadence and retry.
                            log::warn!(
                                "{}: progress request failed: {}",
                                ImportEmployees::full_name(),
                                e
                            );
                        }
                    }
                    match session.get_untracked().poll_delay_ms() {
                        Some(delay) => TimeoutFuture::new(delay).await,
                        None => break,
                    }
                }
            });
        }
    };

    let on_start = {
        let alive = alive.clone();
        let run_effects = run_effects.clone();
        let start_polling = start_polling.clone();
        move |_| {
            let mut outcome = StartUpload::Ignored;
            session.update(|s| outcome = s.start_upload());
            match outcome {
                StartUpload::Begin => {}
                StartUpload::Rejected(effect) => {
                    run_effects(vec![effect]);
                    return;
                }
                StartUpload::Ignored => return,
            }

            let Some(file) = picked_file.get_value() else {
                // File handle lost (should not happen once selected); reset.
                let mut effects = Vec::new();
                session.update(|s| {
                    effects = s.upload_failed("Pilih file terlebih dahulu".to_string());
                });
                run_effects(effects);
                return;
            };

            let alive = alive.clone();
            let run_effects = run_effects.clone();
            let start_polling = start_polling.clone();
            let token = auth_state.get_untracked().token.unwrap_or_default();
            spawn_local(async move {
                let result = api::upload_csv(file, &token).await;
                if !alive.load(Ordering::SeqCst) {
                    return;
                }
                let mut effects = Vec::new();
                let mut accepted_job = None;
                match result {
                    Ok(accepted) => {
                        session.update(|s| effects = s.upload_accepted(accepted.job_id.clone()));
                        if !effects.is_empty() {
                            accepted_job = Some(accepted.job_id);
                        }
                    }
                    Err(e) => {
                        session.update(|s| effects = s.upload_failed(e));
                    }
                }
                run_effects(effects);
                if let Some(job_id) = accepted_job {
                    start_polling(job_id);
                }
            });
        }
    };

    let on_cancel = {
        let handle = handle.clone();
        move |_| {
            session.update(|s| s.close());
            handle.close();
        }
    };

    let file_label = move || {
        session
            .get()
            .file_name
            .unwrap_or_else(|| "Belum ada file dipilih".to_string())
    };
    let is_busy = move || session.get().is_busy();
    let progress = Signal::derive(move || session.get().progress);

    view! {
        <div class="import-dialog">
            <div class="import-dialog__header">
                <h3>{ImportEmployees::display_name()}</h3>
            </div>

            <p class="import-dialog__hint">
                "Upload file CSV berisi data karyawan. Proses berjalan di server; jangan tutup dialog selama upload."
            </p>

            <div class="import-dialog__file-row">
                <input
                    type="file"
                    accept=".csv"
                    style="display: none;"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
                <button
                    class="button button--secondary"
                    disabled=is_busy
                    on:click=move |_| {
                        if let Some(input) = file_input_ref.get() {
                            input.click();
                        }
                    }
                >
                    {icon("file")}
                    " Pilih File"
                </button>
                <span class="import-dialog__file-name">{file_label}</span>
            </div>

            <Show when=move || session.get().job_id.is_some()>
                <ProgressBar percent=progress />
            </Show>

            <div class="import-dialog__actions">
                <button class="button button--secondary" on:click=on_cancel>
                    "Batal"
                </button>
                <button class="button button--primary" disabled=is_busy on:click=on_start>
                    {icon("upload")}
                    {move || if is_busy() { " Memproses..." } else { " Mulai Import" }}
                </button>
            </div>
        </div>
    }
}

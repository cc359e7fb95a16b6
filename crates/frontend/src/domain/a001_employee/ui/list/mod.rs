pub mod state;

use self::state::create_state;
use crate::domain::a001_employee::api;
use crate::domain::a001_employee::ui::details::EmployeeDetails;
use crate::shared::cache::{CacheService, NS_EMPLOYEE};
use crate::shared::format::{format_date, format_rupiah};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::use_auth;
use crate::usecases::u101_import_employees::view::ImportEmployeesModal;
use contracts::domain::a001_employee::Employee;
use contracts::shared::api::{PaginatedFilters, Pagination};
use leptos::prelude::*;

#[component]
pub fn EmployeeList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let cache = use_context::<CacheService>().expect("CacheService not found in context");
    let (auth_state, _) = use_auth();

    let state = create_state();
    let (items, set_items) = signal::<Vec<Employee>>(Vec::new());
    let (pagination, set_pagination) = signal::<Option<Pagination>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (search_input, set_search_input) = signal(String::new());

    let fetch = move || {
        let s = state.get_untracked();
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let filters = PaginatedFilters {
            limit: Some(s.limit),
            page: Some(s.page),
            search: s.search_expression(),
            ..Default::default()
        };
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::list_employees(&filters, &token).await {
                Ok(result) => {
                    set_items.set(result.data);
                    set_pagination.set(result.pagination);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    // Refetch on page/search changes and whenever the employee namespace
    // is invalidated (e.g. after a completed bulk import).
    Effect::new(move |_| {
        state.track();
        cache.epoch(NS_EMPLOYEE);
        fetch();
    });

    let submit_search = move || {
        state.update(|s| {
            s.search = search_input.get_untracked();
            s.page = 1;
        });
    };

    let open_details_modal = move |existing: Option<Employee>| {
        modal_stack.push(move |handle| {
            let existing = existing.clone();
            view! {
                <EmployeeDetails
                    existing=existing
                    on_saved=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            toasts.success("Berhasil", "Data karyawan tersimpan.");
                            cache.invalidate(NS_EMPLOYEE);
                        }
                    })
                    on_cancel=Callback::new({
                        let handle = handle.clone();
                        move |_| handle.close()
                    })
                />
            }
            .into_any()
        });
    };

    let open_import_modal = move || {
        modal_stack.push_with_class("import-modal", move |handle| {
            view! {
                <ImportEmployeesModal
                    handle=handle.clone()
                    on_refresh=Callback::new(move |_| {
                        state.update(|s| s.page = 1);
                    })
                />
            }
            .into_any()
        });
    };

    let handle_delete = move |employee: Employee| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Hapus karyawan \"{}\"?", employee.name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let token = auth_state.get_untracked().token.unwrap_or_default();
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_employee(&employee.id, &token).await {
                Ok(()) => {
                    toasts.success("Berhasil", "Data karyawan dihapus.");
                    cache.invalidate(NS_EMPLOYEE);
                }
                Err(e) => toasts.error("Gagal menghapus", e),
            }
        });
    };

    let page_info = move || {
        pagination
            .get()
            .map(|p| format!("Halaman {} dari {} ({} data)", p.current_page, p.total_pages(), p.total))
            .unwrap_or_default()
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Data Karyawan"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        " Tambah"
                    </button>
                    <button class="button button--primary" on:click=move |_| open_import_modal()>
                        {icon("upload")}
                        " Import CSV"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        " Muat Ulang"
                    </button>
                </div>
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Cari nama karyawan..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| set_search_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit_search();
                        }
                    }
                />
                <button class="button button--secondary" on:click=move |_| submit_search()>
                    "Cari"
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nama"</th>
                            <th class="table__header-cell">"Umur"</th>
                            <th class="table__header-cell">"Posisi"</th>
                            <th class="table__header-cell">"Gaji"</th>
                            <th class="table__header-cell">"Tanggal Dibuat"</th>
                            <th class="table__header-cell">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|employee| {
                            let for_edit = employee.clone();
                            let for_delete = employee.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{employee.name.clone()}</td>
                                    <td class="table__cell">{employee.age}</td>
                                    <td class="table__cell">{employee.position.clone()}</td>
                                    <td class="table__cell">{format_rupiah(employee.salary)}</td>
                                    <td class="table__cell">{format_date(&employee.metadata.created_at)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost"
                                            on:click=move |_| open_details_modal(Some(for_edit.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--ghost"
                                            on:click=move |_| handle_delete(for_delete.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>

                <Show when=move || !loading.get() && items.get().is_empty()>
                    <div class="table-empty">"Belum ada data karyawan."</div>
                </Show>
            </div>

            <div class="pagination">
                <button
                    class="button button--secondary"
                    disabled=move || !pagination.get().map(|p| p.has_prev()).unwrap_or(false)
                    on:click=move |_| state.update(|s| s.page = s.page.saturating_sub(1).max(1))
                >
                    "Sebelumnya"
                </button>
                <span class="pagination__info">{page_info}</span>
                <button
                    class="button button--secondary"
                    disabled=move || !pagination.get().map(|p| p.has_next()).unwrap_or(false)
                    on:click=move |_| state.update(|s| s.page += 1)
                >
                    "Berikutnya"
                </button>
            </div>
        </div>
    }
}

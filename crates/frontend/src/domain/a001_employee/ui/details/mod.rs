pub mod view_model;

use self::view_model::EmployeeDetailsViewModel;
use crate::system::auth::context::use_auth;
use contracts::domain::a001_employee::Employee;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn EmployeeDetails(
    /// Row being edited; `None` opens the form in create mode.
    existing: Option<Employee>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let vm = EmployeeDetailsViewModel::new(existing.as_ref());

    let form = vm.form;
    let errors = vm.errors;
    let saving = vm.saving;
    let is_edit = vm.is_edit_mode();

    let heading = if is_edit {
        "Edit Karyawan"
    } else {
        "Tambah Karyawan"
    };

    let handle_save = move |_| {
        let token = auth_state.get().token.unwrap_or_default();
        vm.save_command(token, Rc::new(move |_| on_saved.run(())));
    };

    view! {
        <div class="details-form">
            <div class="details-form__header">
                <h3>{heading}</h3>
            </div>

            <Show when=move || !errors.get().is_empty()>
                <div class="error-message">
                    {move || {
                        errors
                            .get()
                            .into_iter()
                            .map(|issue| view! { <div>{issue}</div> })
                            .collect_view()
                    }}
                </div>
            </Show>

            <div class="form-group">
                <label for="employee-name">"Nama"</label>
                <input
                    type="text"
                    id="employee-name"
                    placeholder="Budi Santoso"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="employee-age">"Umur"</label>
                <input
                    type="number"
                    id="employee-age"
                    min="18"
                    prop:value=move || form.get().age
                    on:input=move |ev| form.update(|f| f.age = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="employee-position">"Posisi"</label>
                <input
                    type="text"
                    id="employee-position"
                    placeholder="Staff Gudang"
                    prop:value=move || form.get().position
                    on:input=move |ev| form.update(|f| f.position = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="employee-salary">"Gaji"</label>
                <input
                    type="number"
                    id="employee-salary"
                    min="0"
                    step="100000"
                    prop:value=move || form.get().salary
                    on:input=move |ev| form.update(|f| f.salary = event_target_value(&ev))
                />
            </div>

            <div class="details-form__actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                    disabled=move || saving.get()
                >
                    "Batal"
                </button>
                <button
                    class="button button--primary"
                    on:click=handle_save
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Menyimpan..." } else { "Simpan" }}
                </button>
            </div>
        </div>
    }
}

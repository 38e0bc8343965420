use crate::auth::use_auth;
use crate::components::icons::{Pencil, Plus, RefreshCw, Trash2};
use crate::components::layout::AdminTabs;
use crate::components::widgets::{ConfirmDialog, ErrorAlert, Loading, room_status_badge, use_notifier};
use hotel_reserva::AppRoute;
use hotel_reserva::admin::{RoomEditor, RoomTable, save_room};
use hotel_reserva::validation::RoomForm;
use hotel_reserva_shared::{Room, RoomStatus, RoomType, format_brl};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 房间管理表格
///
/// 每次成功的创建、更新、删除之后整表重新请求。
#[component]
pub fn AdminRoomsPage() -> impl IntoView {
    let api = StoredValue::new(use_auth().api());
    let notifier = use_notifier();
    let table = RwSignal::new(RoomTable::new());
    let editor = RwSignal::new(Option::<RoomEditor>::None);

    let refresh = move || {
        table.update(RoomTable::begin_load);
        spawn_local(async move {
            let result = api.get_value().admin().rooms().await;
            table.update(|t| t.finish_load(result));
        });
    };

    refresh();

    let on_save = move |()| {
        let Some((mode, req)) = editor
            .try_update(|e| {
                let e = e.as_mut()?;
                e.validate().map(|req| (e.mode, req))
            })
            .flatten()
        else {
            return;
        };
        if !table.try_update(RoomTable::begin_mutation).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = save_room(&api.get_value(), mode, req).await;
            let ok = table.try_update(|t| t.finish_mutation(&result)).unwrap_or(false);
            if ok {
                editor.set(None);
                notifier.success("Quarto salvo.");
                refresh();
            }
        });
    };

    let on_delete = move |()| {
        let Some(id) = table.try_update(RoomTable::confirm_delete).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api.get_value().admin().delete_room(id).await;
            if table.try_update(|t| t.finish_mutation(&result)).unwrap_or(false) {
                notifier.success("Quarto excluído.");
                refresh();
            }
        });
    };

    let error = Signal::derive(move || table.with(|t| t.error().map(str::to_string)));
    let loading = move || table.with(RoomTable::is_loading);
    let busy = Signal::derive(move || table.with(RoomTable::is_busy));

    view! {
        <div class="space-y-6">
            <AdminTabs active=AppRoute::AdminRooms />
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Quartos"</h1>
                <div class="flex gap-2">
                    <button on:click=move |_| refresh() disabled=loading class="btn btn-ghost btn-circle">
                        <RefreshCw attr:class=move || if loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                    </button>
                    <button class="btn btn-primary gap-2" on:click=move |_| editor.set(Some(RoomEditor::create()))>
                        <Plus attr:class="h-4 w-4" /> "Novo quarto"
                    </button>
                </div>
            </div>
            <ErrorAlert message=error />

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"Tipo"</th>
                                <th class="hidden md:table-cell">"Capacidade"</th>
                                <th>"Valor"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading() && table.with(|t| t.rows().is_empty())>
                                <tr><td colspan="6"><Loading /></td></tr>
                            </Show>
                            <For
                                each=move || table.with(|t| t.rows().to_vec())
                                key=|room| format!("{room:?}")
                                children=move |room: Room| {
                                    let id = room.id;
                                    let for_edit = room.clone();
                                    view! {
                                        <tr>
                                            <td class="font-bold">{room.display_name()}</td>
                                            <td>{room.room_type.label()}</td>
                                            <td class="hidden md:table-cell">{room.capacity}</td>
                                            <td class="font-mono">{format_brl(room.nightly_rate)}</td>
                                            <td>{room_status_badge(room.status)}</td>
                                            <td class="flex gap-1 justify-end">
                                                <button class="btn btn-ghost btn-xs" on:click=move |_| editor.set(Some(RoomEditor::edit(&for_edit)))>
                                                    <Pencil attr:class="h-4 w-4" />
                                                </button>
                                                <button class="btn btn-ghost btn-xs text-error" on:click=move |_| table.update(|t| t.ask_delete(id))>
                                                    <Trash2 attr:class="h-4 w-4" />
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            <RoomEditorDialog editor=editor busy=busy on_save=on_save />
            <ConfirmDialog
                open=Signal::derive(move || table.with(|t| t.pending_delete().is_some()))
                busy=busy
                title="Excluir quarto"
                message="Tem certeza que deseja excluir este quarto?"
                on_confirm=on_delete
                on_cancel=move |()| table.update(RoomTable::dismiss_delete)
            />
        </div>
    }
}

#[component]
fn RoomEditorDialog(
    editor: RwSignal<Option<RoomEditor>>,
    busy: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if editor.with(Option::is_some) {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let close = move || {
        if !busy.get_untracked() {
            editor.set(None);
        }
    };

    let field = move |get: fn(&RoomForm) -> String| {
        move || editor.with(|e| e.as_ref().map(|e| get(&e.form)).unwrap_or_default())
    };
    let set_field = move |set: fn(&mut RoomForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            editor.update(|e| {
                if let Some(e) = e {
                    set(&mut e.form, value);
                }
            });
        }
    };
    let field_error = move |name: &'static str| {
        move || {
            editor.with(|e| {
                e.as_ref()
                    .and_then(|e| e.errors.get(name))
                    .map(|msg| view! { <span class="label-text-alt text-error">{msg.to_string()}</span> })
            })
        }
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(());
    };

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            on:cancel=move |ev: leptos::ev::Event| {
                ev.prevent_default();
                close();
            }
        >
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || editor.with(|e| e.as_ref().map(RoomEditor::title).unwrap_or_default())}
                </h3>
                <form on:submit=on_submit class="space-y-3 mt-4" novalidate>
                    <label class="form-control">
                        <span class="label-text">"Nome"</span>
                        <input class="input input-bordered" prop:value=field(|f| f.name.clone()) on:input=set_field(|f, v| f.name = v) />
                        {field_error("name")}
                    </label>
                    <label class="form-control">
                        <span class="label-text">"Descrição"</span>
                        <textarea class="textarea textarea-bordered" prop:value=field(|f| f.description.clone()) on:input=set_field(|f, v| f.description = v)></textarea>
                    </label>
                    <div class="grid grid-cols-2 gap-3">
                        <label class="form-control">
                            <span class="label-text">"Capacidade"</span>
                            <input type="number" min="1" class="input input-bordered" prop:value=field(|f| f.capacity.clone()) on:input=set_field(|f, v| f.capacity = v) />
                            {field_error("capacity")}
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Valor por noite"</span>
                            <input type="text" inputmode="decimal" class="input input-bordered" prop:value=field(|f| f.nightly_rate.clone()) on:input=set_field(|f, v| f.nightly_rate = v) />
                            {field_error("nightly_rate")}
                        </label>
                    </div>
                    <div class="grid grid-cols-2 gap-3">
                        <label class="form-control">
                            <span class="label-text">"Tipo"</span>
                            <select class="select select-bordered" prop:value=field(|f| f.room_type.clone()) on:change=set_field(|f, v| f.room_type = v)>
                                <option value="">"Selecione"</option>
                                {RoomType::ALL
                                    .into_iter()
                                    .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                                    .collect_view()}
                            </select>
                            {field_error("room_type")}
                        </label>
                        <label class="form-control">
                            <span class="label-text">"Status"</span>
                            <select class="select select-bordered" prop:value=field(|f| f.status.clone()) on:change=set_field(|f, v| f.status = v)>
                                {RoomStatus::ALL
                                    .into_iter()
                                    .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </div>
                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" disabled=move || busy.get() on:click=move |_| close()>"Cancelar"</button>
                        <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                            {move || if busy.get() {
                                view! { <span class="loading loading-spinner loading-sm"></span> "Salvando..." }.into_any()
                            } else {
                                "Salvar".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}

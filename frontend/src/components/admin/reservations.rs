use crate::auth::use_auth;
use crate::components::icons::{RefreshCw, Trash2};
use crate::components::layout::AdminTabs;
use crate::components::widgets::{ConfirmDialog, ErrorAlert, Loading, reservation_status_badge, use_notifier};
use hotel_reserva::AppRoute;
use hotel_reserva::admin::ReservationTable;
use hotel_reserva_shared::{format_brl, format_date_br, pluralize_days};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminReservationsPage() -> impl IntoView {
    let api = StoredValue::new(use_auth().api());
    let notifier = use_notifier();
    let table = RwSignal::new(ReservationTable::new());

    let refresh = move || {
        table.update(ReservationTable::begin_load);
        spawn_local(async move {
            let result = api.get_value().admin().reservations().await;
            table.update(|t| t.finish_load(result));
        });
    };

    refresh();

    let on_delete = move |()| {
        let Some(id) = table.try_update(ReservationTable::confirm_delete).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api.get_value().admin().delete_reservation(id).await;
            if table.try_update(|t| t.finish_mutation(&result)).unwrap_or(false) {
                notifier.success("Reserva excluída.");
                refresh();
            }
        });
    };

    let error = Signal::derive(move || table.with(|t| t.error().map(str::to_string)));
    let loading = move || table.with(ReservationTable::is_loading);

    view! {
        <div class="space-y-6">
            <AdminTabs active=AppRoute::AdminReservations />
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Reservas"</h1>
                <button on:click=move |_| refresh() disabled=loading class="btn btn-ghost btn-circle">
                    <RefreshCw attr:class=move || if loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
            </div>
            <ErrorAlert message=error />

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"#"</th>
                                <th>"Hóspede"</th>
                                <th>"Quarto"</th>
                                <th>"Período"</th>
                                <th class="hidden md:table-cell">"Duração"</th>
                                <th>"Total"</th>
                                <th>"Status"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading() && table.with(|t| t.rows().is_empty())>
                                <tr><td colspan="8"><Loading /></td></tr>
                            </Show>
                            <For
                                each=move || table.with(|t| t.rows().to_vec())
                                key=|r| (r.id, r.status)
                                children=move |r| {
                                    let id = r.id;
                                    view! {
                                        <tr>
                                            <td class="font-mono text-xs">{id}</td>
                                            <td>
                                                {r.user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "-".to_string())}
                                                <div class="text-xs opacity-50">{r.user.as_ref().map(|u| u.email.clone())}</div>
                                            </td>
                                            <td>{r.room_name()}</td>
                                            <td class="text-sm">{format!("{} - {}", format_date_br(r.start), format_date_br(r.end))}</td>
                                            <td class="hidden md:table-cell">{pluralize_days(r.nights())}</td>
                                            <td class="font-mono">{format_brl(r.total_price)}</td>
                                            <td>{reservation_status_badge(r.status)}</td>
                                            <td>
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

            <ConfirmDialog
                open=Signal::derive(move || table.with(|t| t.pending_delete().is_some()))
                busy=Signal::derive(move || table.with(ReservationTable::is_busy))
                title="Excluir reserva"
                message="A reserva será removida permanentemente."
                on_confirm=on_delete
                on_cancel=move |()| table.update(ReservationTable::dismiss_delete)
            />
        </div>
    }
}

use crate::auth::use_auth;
use crate::components::widgets::{ConfirmDialog, EmptyState, ErrorAlert, Loading, reservation_status_badge};
use crate::web::router::Link;
use hotel_reserva::AppRoute;
use hotel_reserva::reservation_list::ReservationList;
use hotel_reserva_shared::{Reservation, format_brl, format_date_br, pluralize_days};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// "Minhas reservas"
#[component]
pub fn MyReservationsPage() -> impl IntoView {
    let api = StoredValue::new(use_auth().api());
    let list = RwSignal::new(ReservationList::default());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api.get_value().reservations().mine().await {
            Ok(items) => list.set(ReservationList::new(items)),
            Err(_) => set_load_error.set(Some("Não foi possível carregar suas reservas.".to_string())),
        }
        set_loading.set(false);
    });

    let dialog_open = Signal::derive(move || list.with(|l| l.dialog().is_some()));
    let dialog_busy = Signal::derive(move || list.with(|l| l.dialog().is_some_and(|d| d.in_flight)));

    let on_confirm = move |()| {
        let Some(id) = list.try_update(ReservationList::confirm).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api.get_value().reservations().cancel(id).await;
            list.update(|l| l.finish_cancel(id, result));
        });
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Minhas reservas"</h1>
            <ErrorAlert message=load_error />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Carregando reservas..." /> }>
                <Show
                    when=move || !list.with(ReservationList::is_empty)
                    fallback=|| view! {
                        <EmptyState message="Você ainda não tem reservas.">
                            <Link to=AppRoute::Rooms class="btn btn-primary btn-sm mt-2">"Ver quartos"</Link>
                        </EmptyState>
                    }
                >
                    <div class="card bg-base-100 shadow-xl">
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Quarto"</th>
                                        <th>"Check-in"</th>
                                        <th>"Check-out"</th>
                                        <th class="hidden md:table-cell">"Duração"</th>
                                        <th>"Total"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || list.with(|l| l.items().to_vec())
                                        key=|r| (r.id, r.status)
                                        children=move |r| view! { <ReservationRow reservation=r list=list /> }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </Show>
            </Show>

            <ConfirmDialog
                open=dialog_open
                busy=dialog_busy
                title="Cancelar reserva"
                message="Tem certeza que deseja cancelar esta reserva? Esta ação não pode ser desfeita."
                on_confirm=on_confirm
                on_cancel=move |()| list.update(ReservationList::dismiss)
            />
        </div>
    }
}

#[component]
fn ReservationRow(reservation: Reservation, list: RwSignal<ReservationList>) -> impl IntoView {
    let id = reservation.id;
    let can_cancel = move || list.with(|l| l.can_cancel(id));
    let row_error = move || list.with(|l| l.error_for(id).map(str::to_string));

    view! {
        <tr>
            <td class="font-bold">{reservation.room_name()}</td>
            <td>{format_date_br(reservation.start)}</td>
            <td>{format_date_br(reservation.end)}</td>
            <td class="hidden md:table-cell">{pluralize_days(reservation.nights())}</td>
            <td class="font-mono">{format_brl(reservation.total_price)}</td>
            <td>{reservation_status_badge(reservation.status)}</td>
            <td>
                <Show when=can_cancel>
                    <button class="btn btn-ghost btn-xs text-error" on:click=move |_| list.update(|l| l.ask_cancel(id))>
                        "Cancelar"
                    </button>
                </Show>
                {move || row_error().map(|msg| view! { <div class="text-error text-xs mt-1">{msg}</div> })}
            </td>
        </tr>
    }
}

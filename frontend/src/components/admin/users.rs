use crate::auth::use_auth;
use crate::components::icons::RefreshCw;
use crate::components::layout::AdminTabs;
use crate::components::widgets::{EmptyState, ErrorAlert, Loading};
use hotel_reserva::AppRoute;
use hotel_reserva::admin::{ReservationTable, users_from_reservations};
use hotel_reserva_shared::{User, format_date_br};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 用户列表
///
/// 后端没有用户列表接口，这里展示的是在预订中出现过的用户。
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let api = StoredValue::new(use_auth().api());
    let table = RwSignal::new(ReservationTable::new());

    let refresh = move || {
        table.update(ReservationTable::begin_load);
        spawn_local(async move {
            let result = api.get_value().admin().reservations().await;
            table.update(|t| t.finish_load(result));
        });
    };

    refresh();

    let users = Memo::new(move |_| table.with(|t| users_from_reservations(t.rows())));
    let error = Signal::derive(move || table.with(|t| t.error().map(str::to_string)));
    let loading = move || table.with(ReservationTable::is_loading);

    view! {
        <div class="space-y-6">
            <AdminTabs active=AppRoute::AdminUsers />
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Usuários"</h1>
                    <p class="text-sm text-base-content/70">"Usuários com reservas"</p>
                </div>
                <button on:click=move |_| refresh() disabled=loading class="btn btn-ghost btn-circle">
                    <RefreshCw attr:class=move || if loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
            </div>
            <ErrorAlert message=error />

            <Show when=move || !(loading() && users.with(Vec::is_empty)) fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !users.with(Vec::is_empty)
                    fallback=|| view! { <EmptyState message="Nenhum usuário com reservas." /> }
                >
                    <div class="card bg-base-100 shadow-xl">
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Nome"</th>
                                        <th>"E-mail"</th>
                                        <th>"Perfil"</th>
                                        <th class="hidden md:table-cell">"Cadastro"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || users.get()
                                        key=|u: &User| u.email.clone()
                                        children=|u| view! {
                                            <tr>
                                                <td>
                                                    <div class="flex items-center gap-3">
                                                        <div class="avatar placeholder">
                                                            <div class="bg-neutral text-neutral-content w-8 rounded-full">
                                                                <span class="text-xs">{u.initials()}</span>
                                                            </div>
                                                        </div>
                                                        <span class="font-bold">{u.name.clone()}</span>
                                                    </div>
                                                </td>
                                                <td>{u.email.clone()}</td>
                                                <td><span class="badge badge-outline">{u.role.label()}</span></td>
                                                <td class="hidden md:table-cell">
                                                    {u.created_at.map(|t| format_date_br(t.date())).unwrap_or_else(|| "-".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

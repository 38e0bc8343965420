//! 管理面板首页
//!
//! 主加载是一次 all-or-nothing 的并发请求；失败时错误横幅指出失败的查询，
//! 已有数据保留显示。按时间段统计收入是独立的表单，不影响主加载。

use crate::auth::use_auth;
use crate::components::icons::{BedDouble, CalendarCheck, RefreshCw, Users, Wallet};
use crate::components::layout::AdminTabs;
use crate::components::widgets::{BarList, ErrorAlert, StatTile, reservation_status_badge};
use hotel_reserva::AppRoute;
use hotel_reserva::dashboard::{DashboardData, DashboardState, PeriodRevenueQuery};
use hotel_reserva_shared::{format_brl, format_date_br, parse_date, to_wire};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = StoredValue::new(use_auth().api());
    let state = RwSignal::new(DashboardState::default());

    let load = move || {
        if state.with_untracked(|s| s.loading) {
            return;
        }
        state.update(DashboardState::begin);
        spawn_local(async move {
            let api = api.get_value();
            let result = DashboardData::load(&api).await;
            state.update(|s| s.finish(result));
        });
    };

    load();

    let data = move |f: fn(&DashboardData) -> String| move || state.with(|s| f(&s.data));
    let loading = move || state.with(|s| s.loading);
    let error = Signal::derive(move || {
        state.with(|s| {
            s.error
                .as_ref()
                .map(|e| format!("Falha ao carregar {}. Os dados exibidos podem estar desatualizados.", e.query))
        })
    });

    view! {
        <div class="space-y-6">
            <AdminTabs active=AppRoute::AdminDashboard />
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <button on:click=move |_| load() disabled=loading class="btn btn-ghost btn-circle">
                    <RefreshCw attr:class=move || if loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
            </div>
            <ErrorAlert message=error />

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-figure text-primary"><Users attr:class="h-8 w-8" /></div>
                    <div class="stat-title">"Usuários"</div>
                    <div class="stat-value text-primary">{data(|d| d.stats.total_users.to_string())}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-secondary"><CalendarCheck attr:class="h-8 w-8" /></div>
                    <div class="stat-title">"Reservas"</div>
                    <div class="stat-value text-secondary">{data(|d| d.stats.total_reservations.to_string())}</div>
                    <div class="stat-desc">
                        {data(|d| format!("{} ativas / {} canceladas", d.stats.active_reservations, d.stats.cancelled_reservations))}
                    </div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-accent"><BedDouble attr:class="h-8 w-8" /></div>
                    <div class="stat-title">"Quartos"</div>
                    <div class="stat-value text-accent">{data(|d| d.stats.total_rooms.to_string())}</div>
                    <div class="stat-desc">{data(|d| format!("Ocupação {}", d.occupancy_rate_label()))}</div>
                </div>
                <div class="stat">
                    <div class="stat-figure text-success"><Wallet attr:class="h-8 w-8" /></div>
                    <div class="stat-title">"Receita"</div>
                    <div class="stat-value text-success text-2xl">{data(|d| format_brl(d.revenue.active))}</div>
                    <div class="stat-desc">{data(|d| format!("{} cancelada", format_brl(d.revenue.cancelled)))}</div>
                </div>
            </div>

            <div class="grid gap-6 md:grid-cols-3">
                <ChartCard title="Ocupação dos quartos">
                    <BarList bars=Signal::derive(move || state.with(|s| s.data.occupancy_bars())) />
                </ChartCard>
                <ChartCard title="Situação das reservas">
                    <BarList bars=Signal::derive(move || state.with(|s| s.data.situation_bars())) />
                </ChartCard>
                <ChartCard title="Quartos mais reservados">
                    <BarList bars=Signal::derive(move || state.with(|s| s.data.best_room_bars())) />
                </ChartCard>
            </div>

            <div class="grid gap-6 lg:grid-cols-3">
                <div class="card bg-base-100 shadow-xl lg:col-span-2">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">"Reservas recentes"</h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Hóspede"</th>
                                        <th>"Quarto"</th>
                                        <th>"Período"</th>
                                        <th>"Total"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || state.with(|s| s.data.recent.clone())
                                        key=|r| r.id
                                        children=|r| view! {
                                            <tr>
                                                <td>{r.user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{r.room_name()}</td>
                                                <td class="text-sm">{format!("{} - {}", format_date_br(r.start), format_date_br(r.end))}</td>
                                                <td class="font-mono">{format_brl(r.total_price)}</td>
                                                <td>{reservation_status_badge(r.status)}</td>
                                            </tr>
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
                <PeriodRevenueCard api=api />
            </div>
        </div>
    }
}

#[component]
fn ChartCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-3">
                <h3 class="card-title text-lg">{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn PeriodRevenueCard(api: StoredValue<hotel_reserva::ApiClient>) -> impl IntoView {
    let query = RwSignal::new(PeriodRevenueQuery::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(range) = query.try_update(PeriodRevenueQuery::begin).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = api.get_value().admin().period_revenue(range).await;
            query.update(|q| q.finish(range, result));
        });
    };

    let error = Signal::derive(move || query.with(|q| q.error().map(str::to_string)));
    let total = Signal::derive(move || {
        query.with(|q| q.result().map(|r| format_brl(r.total)).unwrap_or_else(|| "-".to_string()))
    });

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body space-y-3" on:submit=on_submit novalidate>
                <h3 class="card-title text-lg">"Receita por período"</h3>
                <div class="grid grid-cols-2 gap-2">
                    <input
                        type="date"
                        class="input input-bordered input-sm"
                        prop:value=move || query.with(|q| q.start().map(to_wire).unwrap_or_default())
                        on:input=move |ev| {
                            let date = parse_date(&event_target_value(&ev));
                            query.update(|q| q.set_start(date));
                        }
                    />
                    <input
                        type="date"
                        class="input input-bordered input-sm"
                        prop:value=move || query.with(|q| q.end().map(to_wire).unwrap_or_default())
                        on:input=move |ev| {
                            let date = parse_date(&event_target_value(&ev));
                            query.update(|q| q.set_end(date));
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary btn-sm" disabled=move || query.with(PeriodRevenueQuery::is_loading)>
                    {move || if query.with(PeriodRevenueQuery::is_loading) {
                        view! { <span class="loading loading-spinner loading-sm"></span> "Calculando..." }.into_any()
                    } else {
                        "Calcular".into_any()
                    }}
                </button>
                <ErrorAlert message=error />
                <div class="stats bg-base-200">
                    <StatTile title="Total no período" value=total />
                </div>
                {move || query.with(|q| q.result().map(|r| view! {
                    <div class="text-sm space-y-1">
                        <div class="flex justify-between"><span>"Ativas"</span><span class="font-mono">{format_brl(r.active)}</span></div>
                        <div class="flex justify-between"><span>"Canceladas"</span><span class="font-mono">{format_brl(r.cancelled)}</span></div>
                    </div>
                }))}
            </form>
        </div>
    }
}

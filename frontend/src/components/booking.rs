//! 预订页
//!
//! 状态全部在 `BookingFlow` 中；这里负责把它放进信号、发请求并回填结果。

use crate::auth::use_auth;
use crate::components::icons::CalendarCheck;
use crate::components::widgets::{ErrorAlert, Loading, room_status_badge};
use crate::web::clock::today;
use crate::web::router::Link;
use hotel_reserva::AppRoute;
use hotel_reserva::booking::{BookingFlow, BookingPhase, Probe};
use hotel_reserva_shared::{RoomId, format_brl, parse_date, pluralize_days, to_wire};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn BookingPage(room_id: RoomId) -> impl IntoView {
    let api = StoredValue::new(use_auth().api());
    let flow = RwSignal::new(Option::<BookingFlow>::None);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api.get_value().rooms().get(room_id).await {
            Ok(room) => flow.set(Some(BookingFlow::new(room, today()))),
            Err(e) if e.kind() == hotel_reserva::ErrorKind::NotFound => {
                set_load_error.set(Some("Quarto não encontrado.".to_string()))
            }
            Err(_) => set_load_error.set(Some("Não foi possível carregar o quarto.".to_string())),
        }
    });

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <Link to=AppRoute::Rooms class="link link-hover text-sm">"← Voltar aos quartos"</Link>
            <ErrorAlert message=load_error />
            {move || {
                if flow.with(Option::is_some) {
                    view! { <BookingForm flow=flow api=api /> }.into_any()
                } else if load_error.with(Option::is_none) {
                    view! { <Loading label="Carregando quarto..." /> }.into_any()
                } else {
                    ().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BookingForm(
    flow: RwSignal<Option<BookingFlow>>,
    api: StoredValue<hotel_reserva::ApiClient>,
) -> impl IntoView {
    // 只在 flow 存在时渲染
    let read = move |f: fn(&BookingFlow) -> String| move || flow.with(|o| o.as_ref().map(f).unwrap_or_default());
    let with_flow = move |f: fn(&BookingFlow) -> bool| move || flow.with(|o| o.as_ref().is_some_and(f));

    let is_confirmed = with_flow(|f| *f.phase() == BookingPhase::Confirmed);
    let requires_probe = with_flow(BookingFlow::requires_probe);
    let can_check = with_flow(BookingFlow::can_check);
    let can_submit = with_flow(BookingFlow::can_submit);
    let is_checking = with_flow(|f| matches!(f.probe(), Probe::Checking(_)));
    let is_submitting = with_flow(|f| *f.phase() == BookingPhase::Submitting);

    let on_check = move |_| {
        let Some(range) = flow
            .try_update(|o| o.as_mut().and_then(BookingFlow::begin_probe))
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            let room_id = flow.with_untracked(|o| o.as_ref().map(|f| f.room().id));
            let Some(room_id) = room_id else { return };
            let result = api.get_value().rooms().availability(room_id, range).await;
            flow.update(|o| {
                if let Some(f) = o {
                    f.apply_probe(range, result);
                }
            });
        });
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(range) = flow
            .try_update(|o| o.as_mut().and_then(BookingFlow::begin_submit))
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            let room_id = flow.with_untracked(|o| o.as_ref().map(|f| f.room().id));
            let Some(room_id) = room_id else { return };
            let result = api.get_value().reservations().create(room_id, range).await;
            flow.update(|o| {
                if let Some(f) = o {
                    f.finish_submit(result);
                }
            });
        });
    };

    let probe_view = move || {
        flow.with(|o| {
            let f = o.as_ref()?;
            if !f.requires_probe() {
                return None;
            }
            let (class, text) = match f.probe() {
                Probe::Unknown => ("alert alert-info", "Este quarto está ocupado. Verifique a disponibilidade para as datas escolhidas.".to_string()),
                Probe::Checking(_) => ("alert", "Verificando disponibilidade...".to_string()),
                Probe::Available => ("alert alert-success", "Quarto disponível para o período selecionado.".to_string()),
                Probe::Unavailable => ("alert alert-warning", "Quarto indisponível para o período selecionado.".to_string()),
                Probe::Failed(msg) => ("alert alert-error", msg.clone()),
            };
            Some(view! { <div role="status" class=format!("{class} text-sm py-2")>{text}</div> })
        })
    };

    let submit_error = Signal::derive(move || {
        flow.with(|o| match o.as_ref().map(BookingFlow::phase) {
            Some(BookingPhase::Failed(msg)) => Some(msg.clone()),
            _ => None,
        })
    });

    let date_error = Signal::derive(move || {
        flow.with(|o| o.as_ref().and_then(BookingFlow::date_error).map(|e| e.to_string()))
    });

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-4">
                <div class="flex items-start justify-between gap-2">
                    <div>
                        <h1 class="card-title text-2xl">{read(|f| f.room().display_name())}</h1>
                        <p class="text-base-content/70">{read(|f| f.room().description.clone())}</p>
                    </div>
                    {move || flow.with(|o| o.as_ref().map(|f| room_status_badge(f.room().status)))}
                </div>
                <div class="flex flex-wrap gap-2 text-sm">
                    <span class="badge badge-outline">{read(|f| f.room().room_type.label().to_string())}</span>
                    <span class="badge badge-outline">{read(|f| format!("{} hóspede(s)", f.room().capacity))}</span>
                    <span class="badge badge-outline">{read(|f| format!("{} / noite", format_brl(f.room().nightly_rate)))}</span>
                </div>

                <Show
                    when=move || !is_confirmed()
                    fallback=|| view! {
                        <div class="alert alert-success">
                            <CalendarCheck attr:class="h-6 w-6" />
                            <div>
                                <h3 class="font-bold">"Reserva confirmada!"</h3>
                                <p class="text-sm">"Você pode acompanhar suas reservas a qualquer momento."</p>
                            </div>
                            <Link to=AppRoute::MyReservations class="btn btn-sm">"Minhas reservas"</Link>
                        </div>
                    }
                >
                    <form class="space-y-4" on:submit=on_submit novalidate>
                        <div class="grid grid-cols-2 gap-4">
                            <label class="form-control">
                                <span class="label-text">"Check-in"</span>
                                <input
                                    type="date"
                                    class="input input-bordered"
                                    min=to_wire(today())
                                    prop:value=move || flow.with(|o| o.as_ref().and_then(BookingFlow::start).map(to_wire).unwrap_or_default())
                                    on:input=move |ev| {
                                        let date = parse_date(&event_target_value(&ev));
                                        flow.update(|o| if let Some(f) = o { f.set_start(date) });
                                    }
                                />
                            </label>
                            <label class="form-control">
                                <span class="label-text">"Check-out"</span>
                                <input
                                    type="date"
                                    class="input input-bordered"
                                    prop:value=move || flow.with(|o| o.as_ref().and_then(BookingFlow::end).map(to_wire).unwrap_or_default())
                                    on:input=move |ev| {
                                        let date = parse_date(&event_target_value(&ev));
                                        flow.update(|o| if let Some(f) = o { f.set_end(date) });
                                    }
                                />
                            </label>
                        </div>

                        <ErrorAlert message=date_error />

                        {move || flow.with(|o| {
                            let f = o.as_ref()?;
                            let nights = f.nights()?;
                            let total = f.estimated_total()?;
                            Some(view! {
                                <div class="stats shadow w-full bg-base-200">
                                    <div class="stat">
                                        <div class="stat-title">"Duração"</div>
                                        <div class="stat-value text-xl">{pluralize_days(i64::from(nights))}</div>
                                    </div>
                                    <div class="stat">
                                        <div class="stat-title">"Total estimado"</div>
                                        <div class="stat-value text-xl text-primary">{format_brl(total)}</div>
                                    </div>
                                </div>
                            })
                        })}

                        {probe_view}
                        <ErrorAlert message=submit_error />

                        <div class="flex flex-wrap justify-end gap-2">
                            <Show when=requires_probe>
                                <button type="button" class="btn btn-outline" disabled=move || !can_check() on:click=on_check>
                                    {move || if is_checking() {
                                        view! { <span class="loading loading-spinner loading-sm"></span> "Verificando..." }.into_any()
                                    } else {
                                        "Verificar disponibilidade".into_any()
                                    }}
                                </button>
                            </Show>
                            <button type="submit" class="btn btn-primary" disabled=move || !can_submit()>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner loading-sm"></span> "Reservando..." }.into_any()
                                } else {
                                    "Confirmar reserva".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}

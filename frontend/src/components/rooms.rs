//! 房间目录页
//!
//! 列表只在挂载时请求一次，筛选与分页都由 `RoomCatalog` 在内存中完成。

use crate::auth::use_auth;
use crate::components::icons::{BedDouble, RefreshCw, X};
use crate::components::widgets::{EmptyState, ErrorAlert, Loading, room_status_badge};
use crate::web::router::Link;
use hotel_reserva::AppRoute;
use hotel_reserva::catalog::{FilterChip, RoomCatalog, parse_status_option, parse_type_option};
use hotel_reserva_shared::{Room, RoomStatus, RoomType, format_brl};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RoomsPage() -> impl IntoView {
    let auth = use_auth();
    let api = auth.api();
    let config = api.config().clone();
    let api = StoredValue::new(api);

    let catalog = RwSignal::new(RoomCatalog::new(
        Vec::new(),
        config.default_page_size,
        &config.page_size_options,
    ));
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let load_rooms = move || {
        let api = api.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match api.rooms().list().await {
                Ok(rooms) => {
                    catalog.update(|c| c.set_rooms(rooms));
                    set_error_msg.set(None);
                }
                Err(_) => {
                    set_error_msg.set(Some("Não foi possível carregar os quartos.".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // 初始加载
    load_rooms();

    let type_value = move || {
        catalog.with(|c| c.filter().room_type.map(|t| t.code()).unwrap_or_default())
    };
    let status_value = move || {
        catalog.with(|c| c.filter().status.map(|s| s.code()).unwrap_or_default())
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">"Nossos quartos"</h1>
                    <p class="text-base-content/70">{move || catalog.with(|c| if c.is_loaded() { c.count_label() } else { String::new() })}</p>
                </div>
                <div class="flex flex-wrap gap-2 items-end">
                    <label class="form-control">
                        <span class="label-text text-xs">"Tipo"</span>
                        <select
                            class="select select-bordered select-sm"
                            prop:value=type_value
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                catalog.update(|c| c.set_type(parse_type_option(&value)));
                            }
                        >
                            <option value="">"Todos"</option>
                            {RoomType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text text-xs">"Status"</span>
                        <select
                            class="select select-bordered select-sm"
                            prop:value=status_value
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                catalog.update(|c| c.set_status(parse_status_option(&value)));
                            }
                        >
                            <option value="">"Todos"</option>
                            {RoomStatus::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="form-control">
                        <span class="label-text text-xs">"Por página"</span>
                        <select
                            class="select select-bordered select-sm"
                            prop:value=move || catalog.with(|c| c.page_size().to_string())
                            on:change=move |ev| {
                                if let Ok(size) = event_target_value(&ev).parse() {
                                    catalog.update(|c| c.set_page_size(size));
                                }
                            }
                        >
                            {config
                                .page_size_options
                                .iter()
                                .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <button on:click=move |_| load_rooms() disabled=move || loading.get() class="btn btn-ghost btn-circle btn-sm">
                        <RefreshCw attr:class=move || if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" } />
                    </button>
                </div>
            </div>

            <FilterChips catalog=catalog />
            <ErrorAlert message=error_msg />

            <Show when=move || !loading.get() fallback=|| view! { <Loading label="Carregando quartos..." /> }>
                <Show
                    when=move || !catalog.with(RoomCatalog::is_empty)
                    fallback=move || catalog.with(RoomCatalog::shows_empty_state).then(|| view! {
                        <EmptyState message="Nenhum quarto encontrado com os filtros selecionados.">
                            <button class="btn btn-sm btn-outline mt-2" on:click=move |_| catalog.update(RoomCatalog::clear_filters)>
                                "Limpar filtros"
                            </button>
                        </EmptyState>
                    })
                >
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || catalog.with(RoomCatalog::page_items)
                            key=|room| room.id
                            children=|room| view! { <RoomCard room=room /> }
                        />
                    </div>
                    <Pagination catalog=catalog />
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn FilterChips(catalog: RwSignal<RoomCatalog>) -> impl IntoView {
    move || {
        let chips = catalog.with(RoomCatalog::chips);
        (!chips.is_empty()).then(|| {
            view! {
                <div class="flex flex-wrap gap-2">
                    {chips
                        .into_iter()
                        .map(|chip: FilterChip| view! {
                            <button class="badge badge-primary badge-lg gap-1" on:click=move |_| catalog.update(|c| c.remove_chip(chip))>
                                {chip.label()}
                                <X attr:class="h-3 w-3" />
                            </button>
                        })
                        .collect_view()}
                </div>
            }
        })
    }
}

#[component]
fn Pagination(catalog: RwSignal<RoomCatalog>) -> impl IntoView {
    let page = move || catalog.with(RoomCatalog::page);
    let total = move || catalog.with(RoomCatalog::total_pages).max(1);

    view! {
        <div class="flex justify-center">
            <div class="join">
                <button class="join-item btn btn-sm" disabled=move || page() <= 1
                    on:click=move |_| catalog.update(|c| c.set_page(c.page().saturating_sub(1)))>
                    "«"
                </button>
                <button class="join-item btn btn-sm btn-disabled">
                    {move || format!("Página {} de {}", page(), total())}
                </button>
                <button class="join-item btn btn-sm" disabled=move || page() >= total()
                    on:click=move |_| catalog.update(|c| c.set_page(c.page() + 1))>
                    "»"
                </button>
            </div>
        </div>
    }
}

#[component]
fn RoomCard(room: Room) -> impl IntoView {
    let description = if room.description.trim().is_empty() {
        "Sem descrição".to_string()
    } else {
        room.description.clone()
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-start justify-between gap-2">
                    <h2 class="card-title">
                        <BedDouble attr:class="h-5 w-5 text-primary" />
                        {room.display_name()}
                    </h2>
                    {room_status_badge(room.status)}
                </div>
                <p class="text-base-content/70 text-sm">{description}</p>
                <div class="flex flex-wrap gap-2 text-sm">
                    <span class="badge badge-outline">{room.room_type.label()}</span>
                    <span class="badge badge-outline">{format!("{} hóspede(s)", room.capacity)}</span>
                </div>
                <div class="card-actions items-center justify-between mt-2">
                    <span class="text-lg font-bold">{format_brl(room.nightly_rate)} <span class="text-sm font-normal">" / noite"</span></span>
                    <Link to=AppRoute::Booking(room.id) class="btn btn-primary btn-sm">"Reservar"</Link>
                </div>
            </div>
        </div>
    }
}

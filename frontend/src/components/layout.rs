use crate::auth::{logout, use_auth};
use crate::components::icons::{Hotel, LogOut};
use crate::components::widgets::{Notifier, Toast};
use crate::web::router::{Link, use_router};
use hotel_reserva::AppRoute;
use leptos::prelude::*;

/// 页面外框：导航栏 + 通知 + 内容
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    provide_context(Notifier::new());

    let is_authenticated = move || auth.state.with(|s| s.is_authenticated());
    let is_admin = move || auth.is_admin();
    let initials = move || {
        auth.state
            .with(|s| s.user().map(|u| u.initials()).unwrap_or_default())
    };
    let user_name = move || auth.state.with(|s| s.user().map(|u| u.name.clone()).unwrap_or_default());

    let on_logout = move |_| {
        router.forget_return();
        logout(&auth);
        router.navigate_to(AppRoute::Login);
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <Toast />
            <div class="navbar bg-base-100 shadow-md px-4">
                <div class="flex-1 gap-2">
                    <Link to=AppRoute::Rooms class="btn btn-ghost text-xl gap-2">
                        <Hotel attr:class="h-6 w-6 text-primary" />
                        "Hotel Reserva"
                    </Link>
                </div>
                <div class="flex-none gap-2">
                    <ul class="menu menu-horizontal px-1 hidden md:flex">
                        <li><Link to=AppRoute::Rooms>"Quartos"</Link></li>
                        <Show when=is_authenticated>
                            <li><Link to=AppRoute::MyReservations>"Minhas reservas"</Link></li>
                        </Show>
                        <Show when=is_admin>
                            <li><Link to=AppRoute::AdminDashboard>"Dashboard"</Link></li>
                        </Show>
                    </ul>
                    <Show
                        when=is_authenticated
                        fallback=|| view! {
                            <Link to=AppRoute::Login class="btn btn-ghost btn-sm">"Entrar"</Link>
                            <Link to=AppRoute::Register class="btn btn-primary btn-sm">"Cadastrar"</Link>
                        }
                    >
                        <Link to=AppRoute::Profile class="btn btn-ghost btn-sm gap-2">
                            <div class="avatar placeholder">
                                <div class="bg-neutral text-neutral-content w-8 rounded-full">
                                    <span class="text-xs">{initials}</span>
                                </div>
                            </div>
                            <span class="hidden md:inline">{user_name}</span>
                        </Link>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Sair"
                        </button>
                    </Show>
                </div>
            </div>
            <main class="max-w-7xl mx-auto p-4 md:p-8">{children()}</main>
        </div>
    }
}

/// 管理区域的标签导航
#[component]
pub fn AdminTabs(active: AppRoute) -> impl IntoView {
    let tabs = [
        (AppRoute::AdminDashboard, "Visão geral"),
        (AppRoute::AdminRooms, "Quartos"),
        (AppRoute::AdminReservations, "Reservas"),
        (AppRoute::AdminUsers, "Usuários"),
    ];

    view! {
        <div role="tablist" class="tabs tabs-boxed mb-6 bg-base-100">
            {tabs
                .into_iter()
                .map(|(route, label)| {
                    let class = if route == active { "tab tab-active" } else { "tab" };
                    view! { <Link to=route class=class>{label}</Link> }
                })
                .collect_view()}
        </div>
    }
}

//! Hotel Reserva 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `auth`: 会话状态（唯一来源），401 回调只写这里
//! - `web::router`: 路由服务，执行核心库的守卫决策
//! - `components`: UI 组件层，状态机都来自核心库

mod auth;
pub mod logging;
mod components {
    pub mod booking;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod profile;
    pub mod register;
    pub mod reservations;
    pub mod rooms;
    pub mod widgets;

    pub mod admin {
        pub mod dashboard;
        pub mod reservations;
        pub mod rooms;
        pub mod users;
    }
}

// 原生 Web API 封装模块
// 对浏览器原生 API 的轻量级封装（fetch、localStorage、History）。
pub(crate) mod web {
    pub mod clock;
    pub mod http;
    pub mod router;
    pub mod storage;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::dashboard::AdminDashboardPage;
use crate::components::admin::reservations::AdminReservationsPage;
use crate::components::admin::rooms::AdminRoomsPage;
use crate::components::admin::users::AdminUsersPage;
use crate::components::booking::BookingPage;
use crate::components::layout::Layout;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::reservations::MyReservationsPage;
use crate::components::rooms::RoomsPage;
use crate::web::http::FetchClient;
use crate::web::router::{Link, Router, RouterOutlet};
use crate::web::storage::BrowserTokenStore;

use hotel_reserva::config::{
    VAR_API_BASE_URL, VAR_LOG_FILTER, VAR_PAGE_SIZE, VAR_RECENT_RESERVATIONS_LIMIT,
    VAR_TOKEN_STORAGE_KEY,
};
use hotel_reserva::{
    ApiClient, AppRoute, ClientConfig, RouteGuard, Session, SessionState, UnauthorizedHook,
};
use leptos::prelude::*;
use std::sync::Arc;
use tracing::{info, warn};

/// 构建期配置
///
/// 浏览器没有进程环境变量，取值在编译时通过 `option_env!` 固定。
pub fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(|name| {
        let value = match name {
            VAR_API_BASE_URL => option_env!("HOTEL_API_URL"),
            VAR_TOKEN_STORAGE_KEY => option_env!("HOTEL_TOKEN_KEY"),
            VAR_PAGE_SIZE => option_env!("HOTEL_PAGE_SIZE"),
            VAR_RECENT_RESERVATIONS_LIMIT => option_env!("HOTEL_RECENT_LIMIT"),
            VAR_LOG_FILTER => option_env!("HOTEL_LOG"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Rooms => view! { <RoomsPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Booking(room_id) => view! { <BookingPage room_id=room_id /> }.into_any(),
        AppRoute::MyReservations => view! { <MyReservationsPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
        AppRoute::AdminRooms => view! { <AdminRoomsPage /> }.into_any(),
        AppRoute::AdminReservations => view! { <AdminReservationsPage /> }.into_any(),
        AppRoute::AdminUsers => view! { <AdminUsersPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página não encontrada"</p>
                    <Link to=AppRoute::Rooms class="btn btn-primary mt-6">"Voltar aos quartos"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    info!(api = %config.api_base_url, "starting");

    // 1. 会话状态信号（唯一来源）
    let state = RwSignal::new(SessionState::unauthenticated());

    // 2. 路由守卫：401 时先标记失效，再清空会话触发守卫 Effect 跳转登录页
    let guard = StoredValue::new(RouteGuard::new());
    let on_unauthorized: Arc<dyn UnauthorizedHook> = Arc::new(move || {
        warn!("session expired, returning to login");
        guard.update_value(RouteGuard::session_expired);
        state.set(SessionState::unauthenticated());
    });
    let tokens = Arc::new(BrowserTokenStore::new(&config.token_storage_key));
    let api = ApiClient::with_unauthorized_hook(config, Arc::new(FetchClient), tokens, on_unauthorized);

    // 3. 认证上下文
    let auth_ctx = AuthContext::new(state, Session::new(api));
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    view! {
        <Router session=auth_ctx.session_signal() guard=guard>
            <Layout>
                <RouterOutlet matcher=route_matcher />
            </Layout>
        </Router>
    }
}

//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 守卫决策来自核心库的 [`RouteGuard`]，这里只负责执行：
//! 会话信号或当前路由变化时重新决策，`Redirect` 用 replaceState 跳转。

use hotel_reserva::route::guard;
use hotel_reserva::{AppRoute, GuardDecision, RouteGuard, SessionState};
use leptos::prelude::*;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 用于重定向，不留下历史记录
fn replace_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// 路由器服务
///
/// 通过注入的会话信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<SessionState>,
    guard: StoredValue<RouteGuard>,
}

impl RouterService {
    fn new(session: Signal<SessionState>, guard: StoredValue<RouteGuard>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
            guard,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航（pushState），守卫在 Effect 中执行
    pub fn navigate_to(&self, route: AppRoute) {
        debug!(route = %route, "navigate");
        push_history_state(&route.to_path());
        self.set_route.set(route);
    }

    /// 显式登出后不再回到之前请求的页面
    pub fn forget_return(&self) {
        self.guard.update_value(RouteGuard::forget);
    }

    /// 当前路由的守卫结果（不改变记忆）
    pub fn decision(&self) -> GuardDecision {
        let route = self.current_route.get();
        self.session.with(|s| guard(&route, s))
    }

    /// 浏览器后退/前进按钮
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 路由或会话变化时执行守卫
    fn setup_guard(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;
        let memory = self.guard;

        Effect::new(move |_| {
            let route = current_route.get();
            let decision = session.with(|s| {
                memory
                    .try_update_value(|g| g.decide(&route, s))
                    .unwrap_or(GuardDecision::Wait)
            });

            if let GuardDecision::Redirect(target) = decision {
                if target != route {
                    info!(from = %route, to = %target, "guard redirect");
                    replace_history_state(&target.to_path());
                    set_route.set(target);
                }
            }
        });
    }
}

fn provide_router(session: Signal<SessionState>, guard: StoredValue<RouteGuard>) -> RouterService {
    let router = RouterService::new(session, guard);
    router.init_popstate_listener();
    router.setup_guard();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// `guard` 由外部创建，401 回调通过它标记会话失效。
#[component]
pub fn Router(
    session: Signal<SessionState>,
    guard: StoredValue<RouteGuard>,
    children: Children,
) -> impl IntoView {
    provide_router(session, guard);
    children()
}

/// 路由出口组件
///
/// 守卫为 `Wait` 或即将重定向时只显示加载状态，不渲染受保护内容。
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    // 会话内的用户信息变化（例如改名）不会重建页面
    let allowed = Memo::new(move |_| match router.decision() {
        GuardDecision::Allow => Some(router.current_route().get()),
        GuardDecision::Wait | GuardDecision::Redirect(_) => None,
    });

    move || match allowed.get() {
        Some(route) => matcher(route),
        None => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// 站内链接：拦截点击，走路由服务
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

//! 认证模块
//!
//! 会话状态只有一个来源：`AuthContext.state`。路由服务注入这个信号做守卫，
//! API 客户端的 401 回调也只写这个信号。

use hotel_reserva::session::login_error_message;
use hotel_reserva::validation::LoginForm;
use hotel_reserva::{ApiClient, Session, SessionState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话状态
    pub state: RwSignal<SessionState>,
    session: StoredValue<Session>,
}

impl AuthContext {
    pub fn new(state: RwSignal<SessionState>, session: Session) -> Self {
        Self {
            state,
            session: StoredValue::new(session),
        }
    }

    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn api(&self) -> ApiClient {
        self.session.with_value(|s| s.api().clone())
    }

    /// 路由服务使用的只读会话信号
    pub fn session_signal(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(SessionState::is_admin)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 当前 API 客户端
pub fn use_api() -> ApiClient {
    use_auth().api()
}

/// 启动时恢复会话
///
/// 存在 token 时先进入 `Resolving`，守卫在此期间只显示加载状态。
pub fn init_auth(ctx: &AuthContext) {
    let session = ctx.session();
    let initial = session.initial_state();
    let resolving = initial.is_resolving();
    ctx.state.set(initial);

    if resolving {
        let state = ctx.state;
        spawn_local(async move {
            let resolved = session.resolve().await;
            state.set(resolved);
        });
    }
}

/// 登录：校验表单、换取 token、解析用户
///
/// 失败时返回要展示的消息。
pub async fn login(ctx: &AuthContext, form: LoginForm) -> Result<(), String> {
    let session = ctx.session();
    match session.sign_in(&form).await {
        Ok(resolving) => ctx.state.set(resolving),
        Err(e) => return Err(login_error_message(&e)),
    }
    let resolved = session.resolve().await;
    let ok = resolved.is_authenticated();
    ctx.state.set(resolved);
    if ok {
        Ok(())
    } else {
        Err(login_error_message(&hotel_reserva::ApiError::Unauthorized))
    }
}

/// 注销：同步清除 token 与用户，不调用服务端
///
/// 导航由路由服务对会话状态的监听处理。
pub fn logout(ctx: &AuthContext) {
    let cleared = ctx.session.with_value(Session::logout);
    ctx.state.set(cleared);
}

//! 通用展示组件
//!
//! 只接收已经取到的数据，不发请求。

use crate::components::icons::CircleAlert;
use hotel_reserva::dashboard::Bar;
use hotel_reserva_shared::{ReservationStatus, RoomStatus};
use leptos::prelude::*;
use std::time::Duration;

// =========================================================
// 通知 (Toast)
// =========================================================

/// 全局成功提示
#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<Option<String>>);

impl Notifier {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.0.set(Some(msg.into()));
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided")
}

/// 通知提示框，3 秒后自动清除
#[component]
pub fn Toast() -> impl IntoView {
    let Notifier(notification) = use_notifier();

    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(move || notification.set(None), Duration::from_secs(3));
        }
    });

    move || {
        notification.get().map(|msg| {
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div class="alert alert-success shadow-lg">
                        <span>{msg}</span>
                    </div>
                </div>
            }
        })
    }
}

// =========================================================
// 状态展示
// =========================================================

#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 py-8 text-base-content/60">
            <span class="loading loading-spinner loading-md"></span>
            {label}
        </div>
    }
}

/// 行内错误提示；消息为空时不渲染
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <CircleAlert attr:class="h-5 w-5 shrink-0" />
                    <span>{msg}</span>
                </div>
            }
        })
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body items-center text-center text-base-content/60">
                <p>{message}</p>
                {children.map(|c| c())}
            </div>
        </div>
    }
}

pub fn room_status_badge(status: RoomStatus) -> impl IntoView {
    let class = match status {
        RoomStatus::Available => "badge badge-success",
        RoomStatus::Occupied => "badge badge-error",
        RoomStatus::Maintenance => "badge badge-warning",
    };
    view! { <span class=class>{status.label()}</span> }
}

pub fn reservation_status_badge(status: ReservationStatus) -> impl IntoView {
    let class = match status {
        ReservationStatus::Active => "badge badge-success",
        ReservationStatus::Pending => "badge badge-warning",
        ReservationStatus::Cancelled => "badge badge-error",
        ReservationStatus::Completed => "badge badge-info",
    };
    view! { <span class=class>{status.label()}</span> }
}

// =========================================================
// 确认对话框
// =========================================================

/// 破坏性操作的确认框
///
/// `busy` 为真时按钮禁用，Esc 也无法关闭。
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_esc = move |ev: leptos::ev::Event| {
        ev.prevent_default();
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:cancel=on_esc>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{title}</h3>
                <p class="py-4 text-base-content/70">{message}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                        "Voltar"
                    </button>
                    <button class="btn btn-error" disabled=move || busy.get() on:click=move |_| on_confirm.run(())>
                        {move || if busy.get() {
                            view! { <span class="loading loading-spinner loading-sm"></span> "Aguarde..." }.into_any()
                        } else {
                            "Confirmar".into_any()
                        }}
                    </button>
                </div>
            </div>
        </dialog>
    }
}

// =========================================================
// 图表
// =========================================================

/// 比例条形图
#[component]
pub fn BarList(#[prop(into)] bars: Signal<Vec<Bar>>) -> impl IntoView {
    move || {
        bars.get()
            .into_iter()
            .map(|bar| {
                let value = bar.value.to_string();
                let width = format!("width: {:.1}%", bar.percent);
                view! {
                    <div class="space-y-1">
                        <div class="flex justify-between text-sm">
                            <span>{bar.label}</span>
                            <span class="font-mono">{value}</span>
                        </div>
                        <div class="w-full bg-base-200 rounded-full h-3">
                            <div class="bg-primary h-3 rounded-full" style=width></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    }
}

#[component]
pub fn StatTile(#[prop(into)] title: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class="stat-value text-primary text-2xl">{move || value.get()}</div>
        </div>
    }
}

use crate::auth::{logout, use_auth};
use crate::components::widgets::{ConfirmDialog, ErrorAlert, Loading, use_notifier};
use crate::web::router::use_router;
use hotel_reserva::AppRoute;
use hotel_reserva::validation::validate_profile_name;
use hotel_reserva_shared::{Profile, format_date_br};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 个人资料：查看、改名、删除账户
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notifier = use_notifier();
    let api = StoredValue::new(auth.api());

    let profile = RwSignal::new(Option::<Profile>::None);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (edit_error, set_edit_error) = signal(Option::<String>::None);

    let (confirm_delete, set_confirm_delete) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (delete_error, set_delete_error) = signal(Option::<String>::None);

    spawn_local(async move {
        match api.get_value().profile().get().await {
            Ok(p) => profile.set(Some(p)),
            Err(_) => set_load_error.set(Some("Não foi possível carregar o perfil.".to_string())),
        }
    });

    let start_edit = move |_| {
        set_draft.set(profile.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default()));
        set_edit_error.set(None);
        set_editing.set(true);
    };

    // 取消编辑恢复当前名称
    let cancel_edit = move |_| {
        set_editing.set(false);
        set_edit_error.set(None);
    };

    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let name = match validate_profile_name(&draft.get_untracked()) {
            Ok(name) => name,
            Err(errors) => {
                set_edit_error.set(errors.get("name").map(str::to_string));
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match api.get_value().profile().rename(&name).await {
                Ok(updated) => {
                    auth.state.update(|s| s.rename_user(&updated.name));
                    profile.set(Some(updated));
                    set_editing.set(false);
                    notifier.success("Perfil atualizado.");
                }
                Err(_) => set_edit_error.set(Some("Não foi possível atualizar o nome.".to_string())),
            }
            set_saving.set(false);
        });
    };

    let on_delete = move |()| {
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        set_delete_error.set(None);
        spawn_local(async move {
            match api.get_value().profile().delete().await {
                Ok(()) => {
                    set_confirm_delete.set(false);
                    router.forget_return();
                    logout(&auth);
                    router.navigate_to(AppRoute::Login);
                }
                Err(_) => {
                    set_confirm_delete.set(false);
                    set_delete_error.set(Some("Não foi possível excluir a conta.".to_string()));
                }
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="max-w-xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Meu perfil"</h1>
            <ErrorAlert message=load_error />
            {move || match profile.get() {
                None if load_error.with(Option::is_none) => view! { <Loading /> }.into_any(),
                None => ().into_any(),
                Some(p) => view! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center text-center space-y-2">
                            <div class="avatar placeholder">
                                <div class="bg-primary text-primary-content w-20 rounded-full">
                                    <span class="text-2xl">{p.initials()}</span>
                                </div>
                            </div>
                            <h2 class="card-title">{p.name.clone()}</h2>
                            <p class="text-base-content/70">{p.email.clone()}</p>
                            {p.created_at.map(|t| view! {
                                <p class="text-sm text-base-content/50">"Membro desde " {format_date_br(t.date())}</p>
                            })}
                        </div>
                    </div>
                }
                .into_any(),
            }}

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">"Nome de exibição"</h3>
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <button class="btn btn-outline btn-sm w-fit" disabled=move || profile.with(Option::is_none) on:click=start_edit>
                                "Editar nome"
                            </button>
                        }
                    >
                        <form class="space-y-2" on:submit=on_save novalidate>
                            <input
                                type="text"
                                class="input input-bordered w-full"
                                prop:value=draft
                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                            />
                            <ErrorAlert message=edit_error />
                            <div class="flex gap-2 justify-end">
                                <button type="button" class="btn btn-ghost btn-sm" on:click=cancel_edit>"Cancelar"</button>
                                <button type="submit" class="btn btn-primary btn-sm" disabled=move || saving.get()>"Salvar"</button>
                            </div>
                        </form>
                    </Show>
                </div>
            </div>

            <div class="card bg-base-100 shadow border border-error/30">
                <div class="card-body">
                    <h3 class="card-title text-lg text-error">"Excluir conta"</h3>
                    <p class="text-sm text-base-content/70">"Sua conta e seus dados serão removidos permanentemente."</p>
                    <ErrorAlert message=delete_error />
                    <button class="btn btn-error btn-sm w-fit" on:click=move |_| set_confirm_delete.set(true)>
                        "Excluir minha conta"
                    </button>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_delete
                busy=deleting
                title="Excluir conta"
                message="Tem certeza? Esta ação não pode ser desfeita."
                on_confirm=on_delete
                on_cancel=move |()| set_confirm_delete.set(false)
            />
        </div>
    }
}

use crate::auth::use_api;
use crate::components::widgets::{ErrorAlert, use_notifier};
use crate::web::router::{Link, use_router};
use hotel_reserva::validation::RegisterForm;
use hotel_reserva::{AppRoute, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let router = use_router();
    let notifier = use_notifier();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.get(field).map(str::to_string))
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(e) = current.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::new());
        set_error_msg.set(None);
        set_is_submitting.set(true);

        let api = api.get_value();
        spawn_local(async move {
            let result = api
                .auth()
                .register(&current.name, &current.email, &current.password)
                .await;
            set_is_submitting.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Conta criada! Faça login para continuar.");
                    router.navigate_to(AppRoute::Login);
                }
                Err(e) if e.is_conflict() => {
                    set_error_msg.set(Some("Este e-mail já está cadastrado.".to_string()));
                }
                Err(_) => {
                    set_error_msg.set(Some(
                        "Não foi possível concluir o cadastro. Tente novamente.".to_string(),
                    ));
                }
            }
        });
    };

    let input = move |id: &'static str,
                      label: &'static str,
                      kind: &'static str,
                      get: fn(&RegisterForm) -> String,
                      set: fn(&mut RegisterForm, String)| {
        view! {
            <div class="form-control">
                <label class="label" for=id>
                    <span class="label-text">{label}</span>
                </label>
                <input
                    id=id
                    type=kind
                    class="input input-bordered"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
                {move || field_error(id)().map(|msg| view! {
                    <span class="label-text-alt text-error mt-1">{msg}</span>
                })}
            </div>
        }
    };

    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Criar conta"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <ErrorAlert message=error_msg />
                        {input("name", "Nome", "text", |f| f.name.clone(), |f, v| f.name = v)}
                        {input("email", "E-mail", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {input("password", "Senha", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        {input(
                            "confirm_password",
                            "Confirmar senha",
                            "password",
                            |f| f.confirm_password.clone(),
                            |f, v| f.confirm_password = v,
                        )}
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Enviando..." }.into_any()
                                } else {
                                    "Cadastrar".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Já tem conta? "
                            <Link to=AppRoute::Login class="link link-primary">"Entrar"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}

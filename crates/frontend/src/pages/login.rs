use notes_frontend_common::Route;
use notes_frontend_common::components::{CredentialsForm, FormMethod};
use notes_frontend_common::services::AuthApiService;
use tracing::error;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let navigator = use_navigator();
    let loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_submit = {
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |(username, password): (String, String)| {
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match AuthApiService::new().login(username, password).await {
                    Ok(()) => {
                        error.set(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        error!("login failed: {e}");
                        error.set(Some(format!("Login failed: {e}")));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div>
            <CredentialsForm
                method={FormMethod::Login}
                on_submit={on_submit}
                loading={*loading}
                error={(*error).clone()}
            />
            <p class="mt-4 text-center text-sm text-gray-600 dark:text-gray-400">
                {"No account? "}
                <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">{"Register"}</Link<Route>>
            </p>
        </div>
    }
}

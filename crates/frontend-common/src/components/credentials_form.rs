//! Username/password form shared by the login and registration pages

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// What the form submits for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMethod {
    Login,
    Register,
}

impl FormMethod {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct CredentialsFormProps {
    pub method: FormMethod,
    /// Called with `(username, password)`
    pub on_submit: Callback<(String, String)>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(CredentialsForm)]
pub fn credentials_form(props: &CredentialsFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*username).clone(), (*password).clone()));
        })
    };

    let title = props.method.title();

    html! {
        <form onsubmit={on_submit} class="flex flex-col items-center gap-3 max-w-sm mx-auto mt-16 p-6 rounded-lg shadow-md bg-white dark:bg-gray-800">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{title}</h1>
            <input
                class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100"
                type="text"
                placeholder="Username"
                value={(*username).clone()}
                oninput={on_username}
            />
            <input
                class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100"
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={on_password}
            />
            if let Some(error) = &props.error {
                <p class="w-full p-2 text-sm text-red-700 dark:text-red-300 bg-red-50 dark:bg-red-900/30 rounded">{error}</p>
            }
            <button
                type="submit"
                disabled={props.loading}
                class="w-full py-2 font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 rounded transition-colors"
            >
                if props.loading {
                    {"Please wait..."}
                } else {
                    {title}
                }
            </button>
        </form>
    }
}

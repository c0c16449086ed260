use notes_frontend_common::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"404 Not Found"}</h1>
            <p class="mt-2 text-gray-600 dark:text-gray-400">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="mt-4 text-blue-600 hover:underline">{"Back to notes"}</Link<Route>>
        </div>
    }
}

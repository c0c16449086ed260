use notes_frontend_common::Route;
use notes_frontend_common::services::AuthApiService;
use yew::prelude::*;
use yew_router::prelude::*;

/// Clears the session, then sends the user to the login page
#[function_component(Logout)]
pub fn logout() -> Html {
    use_memo((), |_| AuthApiService::new().logout());

    html! { <Redirect<Route> to={Route::Login} /> }
}

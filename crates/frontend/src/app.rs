use crate::pages::{Home, Login, Logout, NotFound, Register};
use notes_frontend_common::{ProtectedRoute, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <ProtectedRoute>
                <Home />
            </ProtectedRoute>
        },
        Route::Login => html! { <Login /> },
        Route::Logout => html! { <Logout /> },
        Route::Register => html! { <Register /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

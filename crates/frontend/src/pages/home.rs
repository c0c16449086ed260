//! Notes list and creation form

use gloo::timers::callback::Timeout;
use notes_frontend_common::Route;
use notes_frontend_common::components::NoteCard;
use notes_frontend_common::services::NotesService;
use notes_http::types::Note;
use tracing::{error, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

const STATUS_CLEAR_MS: u32 = 3_000;

#[derive(Clone, PartialEq)]
enum Status {
    Success(String),
    Failure(String),
}

#[function_component(Home)]
pub fn home() -> Html {
    let notes_service = use_memo((), |_| NotesService::new());

    let notes = use_state(Vec::<Note>::new);
    let title = use_state(String::new);
    let content = use_state(String::new);
    let status = use_state(|| Option::<Status>::None);

    let reload_notes = {
        let notes = notes.clone();
        let status = status.clone();
        let notes_service = notes_service.clone();

        Callback::from(move |()| {
            let notes = notes.clone();
            let status = status.clone();
            let notes_service = notes_service.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match notes_service.list().await {
                    Ok(list) => notes.set(list),
                    Err(e) => {
                        error!("failed to load notes: {e}");
                        status.set(Some(Status::Failure(format!("Failed to load notes: {e}"))));
                    }
                }
            });
        })
    };

    // Load notes on mount
    {
        let reload_notes = reload_notes.clone();
        use_effect_with((), move |_| {
            reload_notes.emit(());
            || ()
        });
    }

    // Clear status message after timeout
    {
        let status = status.clone();
        use_effect_with(status.clone(), move |current| {
            let timeout = current.is_some().then(|| {
                let status = status.clone();
                Timeout::new(STATUS_CLEAR_MS, move || status.set(None))
            });
            move || drop(timeout)
        });
    }

    let on_delete = {
        let notes_service = notes_service.clone();
        let status = status.clone();
        let reload = reload_notes.clone();

        Callback::from(move |id: i64| {
            let notes_service = notes_service.clone();
            let status = status.clone();
            let reload = reload.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match notes_service.delete(id).await {
                    Ok(()) => {
                        info!(id, "note deleted");
                        status.set(Some(Status::Success("Note deleted!".to_string())));
                    }
                    Err(e) => {
                        error!("failed to delete note {id}: {e}");
                        status.set(Some(Status::Failure("Failed to delete note.".to_string())));
                    }
                }
                reload.emit(());
            });
        })
    };

    let on_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_content = {
        let content = content.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            content.set(input.value());
        })
    };

    let on_create = {
        let notes_service = notes_service.clone();
        let title = title.clone();
        let content = content.clone();
        let status = status.clone();
        let reload = reload_notes;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let notes_service = notes_service.clone();
            let title = title.clone();
            let content = content.clone();
            let status = status.clone();
            let reload = reload.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match notes_service
                    .create((*title).clone(), (*content).clone())
                    .await
                {
                    Ok(note) => {
                        info!(id = note.id, "note created");
                        title.set(String::new());
                        content.set(String::new());
                        status.set(Some(Status::Success("Note created!".to_string())));
                    }
                    Err(e) => {
                        error!("failed to create note: {e}");
                        status.set(Some(Status::Failure("Failed to make note.".to_string())));
                    }
                }
                reload.emit(());
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto p-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{"Notes"}</h2>
                <Link<Route> to={Route::Logout} classes="text-sm text-gray-600 dark:text-gray-400 hover:underline">{"Logout"}</Link<Route>>
            </div>

            {match &*status {
                Some(Status::Success(message)) => html! {
                    <div class="my-3 p-3 rounded text-sm bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300">{message}</div>
                },
                Some(Status::Failure(message)) => html! {
                    <div class="my-3 p-3 rounded text-sm bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300">{message}</div>
                },
                None => html! {},
            }}

            <div>
                {for notes.iter().map(|note| html! {
                    <NoteCard key={note.id} note={note.clone()} on_delete={on_delete.clone()} />
                })}
            </div>

            <h2 class="mt-8 text-2xl font-bold text-gray-900 dark:text-white">{"Create a Note"}</h2>
            <form onsubmit={on_create} class="flex flex-col gap-2 mt-3">
                <label for="title" class="text-sm text-gray-700 dark:text-gray-300">{"Title:"}</label>
                <input
                    type="text"
                    id="title"
                    name="title"
                    required=true
                    value={(*title).clone()}
                    oninput={on_title}
                    class="px-3 py-2 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100"
                />
                <label for="content" class="text-sm text-gray-700 dark:text-gray-300">{"Content:"}</label>
                <textarea
                    id="content"
                    name="content"
                    placeholder="Content"
                    required=true
                    value={(*content).clone()}
                    oninput={on_content}
                    class="px-3 py-2 h-32 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100"
                />
                <input
                    type="submit"
                    value="Submit"
                    class="self-start px-4 py-2 font-medium text-white bg-blue-600 hover:bg-blue-700 rounded cursor-pointer transition-colors"
                />
            </form>
        </div>
    }
}

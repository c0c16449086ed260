//! Single note card

use chrono::{DateTime, Local, Utc};
use notes_http::types::Note;
use yew::prelude::*;

/// Render a creation time the way the notes list shows it, e.g. `3/1/2024, 1:30:00 PM`
pub fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

#[derive(Properties, Clone, PartialEq)]
pub struct NoteCardProps {
    pub note: Note,
    pub on_delete: Callback<i64>,
}

#[function_component(NoteCard)]
pub fn note_card(props: &NoteCardProps) -> Html {
    let on_click = {
        let id = props.note.id;
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <div class="p-4 my-3 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-sm">
            <p class="text-lg font-semibold text-gray-900 dark:text-gray-100">{&props.note.title}</p>
            <p class="mt-1 text-gray-700 dark:text-gray-300 whitespace-pre-wrap">{&props.note.content}</p>
            <p class="mt-2 text-xs text-gray-500 dark:text-gray-400">{format_created_at(props.note.created_at)}</p>
            <button
                onclick={on_click}
                class="mt-3 px-3 py-1 text-sm font-medium text-white bg-red-600 hover:bg-red-700 rounded transition-colors"
            >
                {"Delete"}
            </button>
        </div>
    }
}

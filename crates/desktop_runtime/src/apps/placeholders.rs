use leptos::*;

#[component]
pub(super) fn AboutMePanel() -> impl IntoView {
    view! {
        <div class="app app-about">
            <h2>"About Me"</h2>
            <p>"Hi! This desktop is a small tribute to the classic 95 shell."</p>
            <p>"Double-click an icon to launch it, use the taskbar to switch windows."</p>
        </div>
    }
}

#[component]
pub(super) fn TictactoePanel() -> impl IntoView {
    view! {
        <div class="app app-tictactoe">
            <div class="tictactoe-board" role="grid" aria-label="Tic-tac-toe board">
                {(0..9)
                    .map(|cell| {
                        view! {
                            <button
                                class="tictactoe-cell"
                                role="gridcell"
                                aria-label=format!("Cell {}", cell + 1)
                                disabled=true
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="app-status">"Game coming soon."</p>
        </div>
    }
}

#[component]
pub(super) fn WordlePanel() -> impl IntoView {
    view! {
        <div class="app app-wordle">
            {(0..6)
                .map(|_| {
                    view! {
                        <div class="wordle-row">
                            {(0..5).map(|_| view! { <span class="wordle-tile"></span> }).collect_view()}
                        </div>
                    }
                })
                .collect_view()}
            <p class="app-status">"Guess the five-letter word."</p>
        </div>
    }
}

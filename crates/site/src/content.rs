//! Window bodies and desktop launchers for the site.

use desktop_runtime::{
    parse_window_command, use_desktop_runtime, ContentRegistry, DesktopRuntimeContext,
    WindowCommand,
};
use leptos::*;

/// Desktop launchers as `(window id, label)`, in icon-grid order.
pub const DESKTOP_ENTRIES: [(&str, &str); 6] = [
    ("about", "About"),
    ("projects", "Projects"),
    ("resume", "Resume"),
    ("contact", "Contact"),
    ("portfolio", "Portfolio"),
    ("terminal", "Terminal"),
];

/// Builds the id → body mapping rendered inside each window.
pub fn content_registry() -> ContentRegistry {
    ContentRegistry::new()
        .with("about", || {
            view! {
                <article class="window-doc">
                    <h1>"About"</h1>
                    <p>"Software engineer building small tools and large systems."</p>
                </article>
            }
            .into_view()
        })
        .with("projects", || {
            view! {
                <article class="window-doc">
                    <h1>"Projects"</h1>
                    <ul>
                        <li>"Desktop shell: windowed portfolio running in the browser."</li>
                        <li>"Notes: long-form writing, rendered from markdown."</li>
                    </ul>
                </article>
            }
            .into_view()
        })
        .with("resume", || {
            view! {
                <article class="window-doc">
                    <h1>"Resume"</h1>
                    <p>"Experience, education and skills."</p>
                </article>
            }
            .into_view()
        })
        .with("contact", || {
            view! {
                <article class="window-doc">
                    <h1>"Contact"</h1>
                    <p>"Reach out by email or find me on GitHub."</p>
                </article>
            }
            .into_view()
        })
        .with("portfolio", || {
            view! {
                <article class="window-doc portfolio">
                    <h1>"Portfolio"</h1>
                    <p>"Selected work, best viewed fullscreen."</p>
                </article>
            }
            .into_view()
        })
        .with("terminal", || view! { <TerminalPanel /> }.into_view())
}

#[component]
/// Line-oriented console that drives windows with `open`, `close`, `minimize` and friends.
pub fn TerminalPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let input = create_rw_signal(String::new());
    let history = create_rw_signal(Vec::<String>::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let line = input.get_untracked();
        input.set(String::new());
        if line.trim().is_empty() {
            return;
        }
        let output = run_command_line(runtime, &line);
        history.update(|lines| {
            lines.push(format!("> {line}"));
            if !output.is_empty() {
                lines.push(output);
            }
        });
    };

    view! {
        <div class="terminal">
            <pre class="terminal-output">{move || history.get().join("\n")}</pre>
            <form class="terminal-prompt" on:submit=submit>
                <span aria-hidden="true">"$ "</span>
                <input
                    type="text"
                    aria-label="Command"
                    autocomplete="off"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </form>
        </div>
    }
}

fn run_command_line(runtime: DesktopRuntimeContext, line: &str) -> String {
    match parse_window_command(line) {
        Ok(WindowCommand::List) => runtime
            .manager
            .with_untracked(|manager| WindowCommand::render_list(&manager.summaries())),
        Ok(WindowCommand::Open(request)) => {
            runtime.publisher().publish(request);
            String::new()
        }
        Ok(command) => {
            if let Some(action) = command.into_action() {
                runtime.dispatch_action(action);
            }
            String::new()
        }
        Err(err) => err.to_string(),
    }
}

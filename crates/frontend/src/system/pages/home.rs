//! Marketing landing page with the demo sign-in panel.

use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, DEMO_USERNAME};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
fn SignInForm(on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (error, set_error) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(String::new());
        match auth.sign_in(&username.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                set_username.set(String::new());
                set_password.set(String::new());
                on_close.run(());
            }
            Err(message) => set_error.set(message),
        }
    };

    view! {
        <div class="signin-panel">
            <div class="signin-panel__head">
                <h3>"Sign In"</h3>
                <button
                    class="signin-panel__close"
                    aria-label="Close sign-in form"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
            </div>
            <form class="signin-form" on:submit=submit>
                <div class="signin-form__field">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        placeholder="Enter username"
                        required
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="signin-form__field">
                    <label for="password">"Password"</label>
                    <div class="signin-form__password">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            id="password"
                            placeholder="Enter password"
                            required
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="signin-form__toggle"
                            aria-label="Toggle password visibility"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                        </button>
                    </div>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <div class="signin-form__error">{move || error.get()}</div>
                </Show>
                <button type="submit" class="button button--primary signin-form__submit">
                    "Sign In"
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (show_sign_in, set_show_sign_in) = signal(false);

    // Callback is Copy, so the same handler can live in every auth branch.
    let go_to_dashboard = Callback::new(move |()| navigate("/dashboard", Default::default()));
    let on_close = Callback::new(move |()| set_show_sign_in.set(false));

    view! {
        <div class="home">
            <header class="home__header">
                <div class="home__brand">
                    <span class="home__brand-icon">{icon("chip")}</span>
                    <div>
                        <h1>"RAG AI Assistant"</h1>
                        <p>"Intelligent Document Intelligence"</p>
                    </div>
                </div>
                <div class="home__auth">
                    <Show
                        when=move || auth.is_signed_in()
                        fallback=move || {
                            view! {
                                <button
                                    class="button button--ghost"
                                    on:click=move |_| set_show_sign_in.update(|v| *v = !*v)
                                >
                                    "Sign In"
                                </button>
                                <Show when=move || show_sign_in.get()>
                                    <SignInForm on_close=on_close />
                                </Show>
                            }
                        }
                    >
                        <span class="home__welcome">"Welcome, " {DEMO_USERNAME} "!"</span>
                        <button
                            class="button button--primary"
                            on:click=move |_| go_to_dashboard.run(())
                        >
                            "Go to Dashboard" {icon("arrow-right")}
                        </button>
                        <button class="button button--ghost" on:click=move |_| auth.sign_out()>
                            "Sign Out"
                        </button>
                    </Show>
                </div>
            </header>

            <main class="home__main">
                <section class="hero">
                    <h1 class="hero__title">
                        "Transform Any Document into an"
                        <span class="hero__title-accent">"Intelligent AI Assistant"</span>
                    </h1>
                    <p class="hero__lead">
                        "Upload your PDFs and documents, then ask questions in plain English. \
                         Get intelligent, AI-powered answers with source citations from your \
                         own knowledge base."
                    </p>
                    <div class="hero__actions">
                        <Show
                            when=move || auth.is_signed_in()
                            fallback=move || {
                                view! {
                                    <button
                                        class="button button--hero"
                                        on:click=move |_| set_show_sign_in.set(true)
                                    >
                                        {icon("document-text")} " Sign In to Start"
                                    </button>
                                }
                            }
                        >
                            <button
                                class="button button--hero"
                                on:click=move |_| go_to_dashboard.run(())
                            >
                                {icon("document-text")} " Go to Dashboard"
                            </button>
                        </Show>
                        <button class="button button--ghost button--hero">
                            {icon("chat")} " Learn More"
                        </button>
                    </div>
                </section>

                <section class="features">
                    <div class="feature-card">
                        <div class="feature-card__icon feature-card__icon--blue">
                            {icon("document-text")}
                        </div>
                        <h3>"Smart Document Processing"</h3>
                        <p>
                            "Upload PDFs and DOCX files. Our AI automatically chunks, processes, \
                             and creates searchable embeddings for lightning-fast retrieval."
                        </p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-card__icon feature-card__icon--purple">
                            {icon("chat")}
                        </div>
                        <h3>"AI-Powered Q&A"</h3>
                        <p>
                            "Ask questions in natural language. Get intelligent answers based on \
                             your documents with source citations and context."
                        </p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-card__icon feature-card__icon--indigo">
                            {icon("cloud")}
                        </div>
                        <h3>"Enterprise Ready"</h3>
                        <p>
                            "Built on a vector database with auto-scaling and enterprise \
                             security. Production-ready from day one."
                        </p>
                    </div>
                </section>

                <section class="tech-stack">
                    <h2>"Built with Modern, Scalable Technology"</h2>
                    <div class="tech-stack__grid">
                        <div class="tech-stack__item">
                            <h4>"Rust + WASM"</h4>
                            <p>"Modern Frontend"</p>
                        </div>
                        <div class="tech-stack__item">
                            <h4>"FastAPI"</h4>
                            <p>"High-Performance Backend"</p>
                        </div>
                        <div class="tech-stack__item">
                            <h4>"pgvector"</h4>
                            <p>"Vector Database"</p>
                        </div>
                        <div class="tech-stack__item">
                            <h4>"OpenAI"</h4>
                            <p>"AI Models"</p>
                        </div>
                    </div>
                </section>

                <section class="cta">
                    <h2>"Ready to Experience the Future of Document Intelligence?"</h2>
                    <p>
                        "Join the AI revolution and transform how you interact with your documents."
                    </p>
                    <Show
                        when=move || auth.is_signed_in()
                        fallback=move || {
                            view! {
                                <button
                                    class="button button--hero"
                                    on:click=move |_| set_show_sign_in.set(true)
                                >
                                    "Sign In to Get Started" {icon("arrow-right")}
                                </button>
                            }
                        }
                    >
                        <button
                            class="button button--hero"
                            on:click=move |_| go_to_dashboard.run(())
                        >
                            "Go to Dashboard" {icon("arrow-right")}
                        </button>
                    </Show>
                </section>
            </main>

            <footer class="home__footer">
                <div class="home__brand home__brand--footer">
                    <span class="home__brand-icon">{icon("chip")}</span>
                    <span>"RAG AI Assistant"</span>
                </div>
                <p>"Built with modern web technologies"</p>
                <p class="home__footer-fine">"© 2025 RAG AI Assistant. All rights reserved."</p>
            </footer>
        </div>
    }
}

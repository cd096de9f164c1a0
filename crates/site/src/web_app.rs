use console_showcase::{ConsoleSection, ConsoleShowcase};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Store Console" />
        <Meta
            name="description"
            content="Administrative console for orders, marketing, and settings."
        />

        <Router>
            <nav class="console-nav">
                {ConsoleSection::ALL
                    .into_iter()
                    .map(|section| view! { <A href=section.href()>{section.label()}</A> })
                    .collect_view()}
            </nav>
            <main class="console-root">
                <Routes>
                    <Route path="" view=|| view! { <Redirect path="/orders" /> } />
                    <Route
                        path="/orders"
                        view=|| view! { <ConsoleShowcase section=ConsoleSection::Orders /> }
                    />
                    <Route
                        path="/marketing"
                        view=|| view! { <ConsoleShowcase section=ConsoleSection::Marketing /> }
                    />
                    <Route
                        path="/settings"
                        view=|| view! { <ConsoleShowcase section=ConsoleSection::Settings /> }
                    />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    view! {
        <section class="console-section">
            <h1>"Not found"</h1>
            <p>{move || format!("No console page at {}", location.pathname.get())}</p>
            <A href=ConsoleSection::Orders.href()>"Back to orders"</A>
        </section>
    }
}

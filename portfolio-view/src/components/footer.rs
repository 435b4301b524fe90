use leptos::prelude::*;

#[component]
pub fn Footer(
    #[prop(into)]
    name: String,
    year: u16,
) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">{format!("© {} {}.", year, name)}</p>
            </div>
        </footer>
    }
}

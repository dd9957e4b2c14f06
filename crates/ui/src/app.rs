use dioxus::prelude::*;

use crate::context::{UiConfig, build_app_context};
use crate::views::ProgressView;

#[component]
pub fn App() -> Element {
    let config = use_context::<UiConfig>();
    let title = config.title().to_string();

    // One controller per window, owned by this root and shared with the view below.
    use_context_provider(|| build_app_context(&config));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ProgressView {}
            }
        }
    }
}

//! Error boundaries for the app shell and for individual panels.

use dioxus::logger::tracing;
use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                tracing::error!("render error in {boundary_name}: {err:?}");
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 15px;
                            margin: 15px;
                            padding: 20px;
                            border: 1px solid red;
                            border-radius: 5px;
                        ",
                        h1 { style: "color:red; font-size: 40px; margin: 0px;", "Something went wrong" }
                        p { style: "color:darkred; font-size: 20px; margin: 0px;", "Boundary: {boundary_name}" }
                        a {
                            href: "/",
                            style: "color:blue; font-size: 20px;",
                            "Back to the directory"
                        }
                        pre {
                            style: "color:black; text-wrap: auto; max-height: 300px; overflow-y: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing panel from taking the filter bar down with it.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-primary-button",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 10px;
                padding: 40px 20px;
            ",
            h2 { style: "color:red; font-size: 28px; margin: 0px;", "Could not show these results" }
            pre {
                style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}

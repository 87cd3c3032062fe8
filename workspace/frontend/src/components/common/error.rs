use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Full-card error state. There is no retry; reload the page to try again.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error shadow">
            <pre class="whitespace-pre-wrap">{&props.message}</pre>
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center gap-2 p-8">
            <span class="loading loading-spinner"></span>
            {if let Some(text) = &props.text {
                html! { <span class="text-sm opacity-70">{text}</span> }
            } else {
                html! {}
            }}
        </div>
    }
}

use compute::dashboard::{ChatMode, Conversation, Role};
use compute::format::render_markdown;
use compute::Action;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub conversation: Conversation,
    pub on_action: Callback<Action>,
}

fn placeholder(mode: ChatMode) -> &'static str {
    match mode {
        ChatMode::Categorize => "Describe a transaction to categorize...",
        ChatMode::Advice => "Ask for financial advice...",
    }
}

/// AI assistant chat. Assistant replies are rendered as markdown.
#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let conversation = &props.conversation;
    let awaiting = conversation.is_awaiting();

    let on_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_action.emit(Action::ChatInputChanged(input.value()));
        })
    };

    let on_submit = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_action.emit(Action::ChatSubmitted);
        })
    };

    let mode_button = |mode: ChatMode, label: &'static str| {
        let on_action = props.on_action.clone();
        let active = conversation.mode() == mode;
        html! {
            <button type="button"
                class={classes!("btn", "btn-sm", "join-item", active.then_some("btn-active"))}
                onclick={Callback::from(move |_: MouseEvent| on_action.emit(Action::ChatModeChanged(mode)))}>
                {label}
            </button>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{"AI Assistant"}</h2>
                    <div class="join">
                        {mode_button(ChatMode::Categorize, "Categorize")}
                        {mode_button(ChatMode::Advice, "Advice")}
                    </div>
                </div>

                <div class="flex flex-col gap-2 overflow-y-auto" style="max-height: 420px;">
                    { for conversation.messages().iter().map(|message| match message.role {
                        Role::User => html! {
                            <div class="chat chat-end">
                                <div class="chat-bubble chat-bubble-primary">{&message.text}</div>
                            </div>
                        },
                        Role::Assistant => {
                            let rendered = Html::from_html_unchecked(AttrValue::from(render_markdown(&message.text)));
                            html! {
                                <div class="chat chat-start">
                                    <div class="chat-bubble">{rendered}</div>
                                </div>
                            }
                        }
                    })}
                    if awaiting {
                        <div class="chat chat-start">
                            <div class="chat-bubble opacity-70">{"Thinking..."}</div>
                        </div>
                    }
                </div>

                <form class="join w-full" onsubmit={on_submit}>
                    <input type="text" class="input input-bordered join-item w-full"
                        placeholder={placeholder(conversation.mode())}
                        value={conversation.input().to_string()}
                        disabled={awaiting}
                        oninput={on_input} />
                    <button type="submit" class="btn btn-primary join-item" disabled={awaiting}>{"Send"}</button>
                </form>
            </div>
        </div>
    }
}

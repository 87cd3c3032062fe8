use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow-sm sticky top-0 z-40">
                <div class="flex items-center gap-3 px-4">
                    <div class="avatar placeholder">
                        <div class="bg-primary text-primary-content rounded-lg w-10">
                            <span class="font-bold">{"FW"}</span>
                        </div>
                    </div>
                    <div>
                        <h1 class="text-xl font-bold">{"FinWiz"}</h1>
                        <p class="text-sm opacity-70">{"Your AI-Powered Personal Finance Advisor"}</p>
                    </div>
                </div>
            </header>
            <main class="p-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
